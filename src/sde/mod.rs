//! Static reference catalog (SDE): exact item-name to category lookup.
//! Built once from data/sde/index.json; read-only afterwards, so it can be
//! shared across threads without locking. Lookup misses are never errors.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Item category as far as fit parsing cares. Everything that is none of
/// the interesting kinds maps to `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Ship,
    Structure,
    Subsystem,
    ServiceSlot,
    Drone,
    Fighter,
    Rig,
    Module,
    Other,
}

impl Category {
    /// Map an EVE SDE categoryID to a lookup category. IDs follow the
    /// game's invTypes schema: 6 ships, 7 modules, 18 drones, 32 subsystems,
    /// 65 structures, 66 structure (service) modules, 87 fighters.
    pub fn from_category_id(id: u32) -> Category {
        match id {
            6 => Category::Ship,
            7 => Category::Module,
            18 => Category::Drone,
            32 => Category::Subsystem,
            65 => Category::Structure,
            66 => Category::ServiceSlot,
            87 => Category::Fighter,
            _ => Category::Other,
        }
    }
}

/// One row of the SDE index file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SdeIndexEntry {
    pub type_name: String,
    pub category_id: u32,
}

/// On-disk shape of the SDE index (written by the SDE extractor, not here).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SdeIndex {
    #[serde(default)]
    pub data_version: Option<String>,
    pub types: Vec<SdeIndexEntry>,
}

pub const DEFAULT_SDE_INDEX_PATH: &str = "data/sde/index.json";

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read SDE index: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed SDE index: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Exact-name category index. Case-sensitive, no fuzzy matching.
#[derive(Debug, Clone, Default)]
pub struct SdeCatalog {
    by_name: HashMap<String, Category>,
}

impl SdeCatalog {
    /// Catalog with no entries; every lookup returns `None`, which makes
    /// all hulls parse with ship defaults.
    pub fn empty() -> SdeCatalog {
        SdeCatalog::default()
    }

    /// Build a catalog from in-memory pairs. Used by tests and by callers
    /// that manage their own reference data.
    pub fn from_entries<I, S>(entries: I) -> SdeCatalog
    where
        I: IntoIterator<Item = (S, Category)>,
        S: Into<String>,
    {
        SdeCatalog {
            by_name: entries.into_iter().map(|(name, cat)| (name.into(), cat)).collect(),
        }
    }

    /// Load the catalog from an SDE index JSON file. One-time startup
    /// acquisition; the file is read fully and closed before returning.
    pub fn load(path: impl AsRef<Path>) -> Result<SdeCatalog, CatalogError> {
        let raw = fs::read_to_string(path)?;
        let index: SdeIndex = serde_json::from_str(&raw)?;
        tracing::debug!(
            entries = index.types.len(),
            data_version = index.data_version.as_deref().unwrap_or("unknown"),
            "loaded SDE catalog"
        );
        Ok(SdeCatalog {
            by_name: index
                .types
                .into_iter()
                .map(|e| (e.type_name, Category::from_category_id(e.category_id)))
                .collect(),
        })
    }

    /// Exact, case-sensitive lookup. `None` means the name is not in the
    /// catalog; callers fall back to ship/drone defaults rather than erroring.
    pub fn classify(&self, name: &str) -> Option<Category> {
        self.by_name.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}
