//! Post-parse disambiguation. EFT's fifth positional block is subsystems on
//! a ship and service slots on a structure, so the hull decides; combat-unit
//! lines are split into drones vs fighters per item name in both formats.

use crate::sde::{Category, SdeCatalog};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombatKind {
    Drone,
    Fighter,
}

/// Whether the hull is a structure. Names the catalog does not know default
/// to ship, the common case.
pub fn is_structure_hull(catalog: &SdeCatalog, ship: &str) -> bool {
    match catalog.classify(ship) {
        Some(Category::Structure) => true,
        Some(category) => {
            tracing::debug!(ship, ?category, "hull classified as non-structure");
            false
        }
        None => {
            tracing::debug!(ship, "hull not in catalog, assuming ship");
            false
        }
    }
}

/// Per-item drone/fighter decision. The catalog answer wins when it names
/// either kind; otherwise `default` applies (EFT passes drone, EFT2 passes
/// whichever section the line appeared under). Fighters are deliberately not
/// treated as structure-exclusive.
pub fn combat_kind(catalog: &SdeCatalog, name: &str, default: CombatKind) -> CombatKind {
    match catalog.classify(name) {
        Some(Category::Fighter) => CombatKind::Fighter,
        Some(Category::Drone) => CombatKind::Drone,
        _ => default,
    }
}
