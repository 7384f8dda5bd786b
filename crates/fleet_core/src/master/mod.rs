//! Static reference data.
//!
//! Pure data structures describing gear and ship hulls, plus the validated
//! id-keyed catalog the factory reads from. All structs deserialize from
//! RON files.
//!
//! **Note:** This module contains no IO - it only defines data types.
//! File loading is handled by `fleet_tools`.

mod catalog;
mod gear;
pub mod gear_ids;
mod ship;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use catalog::{CatalogData, MasterCatalog};
pub use gear::{GearAttrs, GearCategory, GearStats, MasterGear, MAX_STARS};
pub use ship::{LevelRange, MasterShip, ShipClass, ShipType, StatRange, MAX_SLOT_NUM};

/// Unique identifier for gear definitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GearId(pub u16);

impl GearId {
    /// Create a new gear ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }
}

impl fmt::Display for GearId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for ship hull definitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShipId(pub u16);

impl ShipId {
    /// Create a new ship ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }
}

impl fmt::Display for ShipId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
