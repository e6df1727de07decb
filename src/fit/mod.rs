//! Canonical fit model: the format-agnostic representation every codec
//! decodes into and encodes from. The serde derives double as the generic
//! mapping adapter used by the JSON/YAML conversions, so list fields default
//! to empty and `is_structure` to false when absent in the source mapping.

use serde::{Deserialize, Serialize};

/// A fitted item in a low/mid/high slot. `charge` is absent when the source
/// line had no comma-delimited second field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Module {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub charge: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rig {
    pub name: String,
}

/// Ship subsystem (T3 cruisers). Populated only when `is_structure` is false.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subsystem {
    pub name: String,
}

/// Structure service module. Populated only when `is_structure` is true.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceSlot {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Drone {
    pub name: String,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fighter {
    pub name: String,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cargo {
    pub name: String,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

fn default_quantity() -> u32 {
    1
}

/// A complete ship or structure loadout.
///
/// Exactly one of `subsystems`/`service_slots` is populated, chosen by
/// `is_structure`; the other stays empty. Each `Fit` owns its component
/// vectors exclusively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fit {
    pub ship: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub is_structure: bool,
    #[serde(default)]
    pub low_slots: Vec<Module>,
    #[serde(default)]
    pub mid_slots: Vec<Module>,
    #[serde(default)]
    pub high_slots: Vec<Module>,
    #[serde(default)]
    pub rigs: Vec<Rig>,
    #[serde(default)]
    pub subsystems: Vec<Subsystem>,
    #[serde(default)]
    pub service_slots: Vec<ServiceSlot>,
    #[serde(default)]
    pub drones: Vec<Drone>,
    #[serde(default)]
    pub fighters: Vec<Fighter>,
    #[serde(default)]
    pub cargo: Vec<Cargo>,
}

impl Fit {
    /// Empty fit for the given hull and label. Decoders start from this.
    pub fn new(ship: impl Into<String>, name: impl Into<String>) -> Fit {
        Fit {
            ship: ship.into(),
            name: name.into(),
            is_structure: false,
            low_slots: Vec::new(),
            mid_slots: Vec::new(),
            high_slots: Vec::new(),
            rigs: Vec::new(),
            subsystems: Vec::new(),
            service_slots: Vec::new(),
            drones: Vec::new(),
            fighters: Vec::new(),
            cargo: Vec::new(),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(data: &str) -> Result<Fit, serde_json::Error> {
        serde_json::from_str(data)
    }

    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }

    pub fn from_yaml(data: &str) -> Result<Fit, serde_yaml::Error> {
        serde_yaml::from_str(data)
    }

    /// Render as classic positional EFT text.
    pub fn to_eft(&self) -> String {
        crate::codec::eft::encode(self)
    }

    /// Render as heading-delimited EFT2 text.
    pub fn to_eft2(&self) -> String {
        crate::codec::eft2::encode(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mapping_defaults_apply_for_absent_fields() {
        let fit: Fit = serde_json::from_str(r#"{"ship": "Venture"}"#).unwrap();
        assert_eq!(fit.ship, "Venture");
        assert_eq!(fit.name, "");
        assert!(!fit.is_structure);
        assert!(fit.low_slots.is_empty());
        assert!(fit.service_slots.is_empty());
        assert!(fit.cargo.is_empty());
    }

    #[test]
    fn drone_quantity_defaults_to_one() {
        let drone: Drone = serde_json::from_str(r#"{"name": "Hornet I"}"#).unwrap();
        assert_eq!(drone.quantity, 1);
    }

    #[test]
    fn module_without_charge_omits_the_key() {
        let module = Module { name: "Damage Control II".to_string(), charge: None };
        let value = serde_json::to_value(&module).unwrap();
        assert!(value.get("charge").is_none());
    }
}
