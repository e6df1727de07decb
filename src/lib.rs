//! eftkit: parse and convert EVE Online ship/structure fittings.
//!
//! Two text formats are supported: classic EFT, where section membership is
//! positional (blank-line separated), and EFT2, a markdown-flavored variant
//! with explicit `##` section headings. Both decode into the same [`Fit`]
//! model, which serializes to/from JSON and YAML via serde.
//!
//! Hull disambiguation (ship vs structure) and drone/fighter splitting use a
//! static name catalog loaded from an SDE index file; see [`sde::SdeCatalog`].

pub mod codec;
pub mod fit;
pub mod sde;

pub use codec::{eft, eft2, ParseError};
pub use fit::{Cargo, Drone, Fighter, Fit, Module, Rig, ServiceSlot, Subsystem};
pub use sde::{Category, SdeCatalog};
