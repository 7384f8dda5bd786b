//! Error types for reference data handling.
//!
//! Unknown ids and empty slots are not errors: the factory reports them as
//! `None`. Only malformed master data reaches this module.

use thiserror::Error;

use crate::master::{GearId, ShipId};

/// Result type alias using [`FleetError`].
pub type Result<T> = std::result::Result<T, FleetError>;

/// Top-level error type for catalog construction.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FleetError {
    /// Two gear definitions share an id.
    #[error("Duplicate gear ID: {0}")]
    DuplicateGearId(GearId),

    /// Two ship definitions share an id.
    #[error("Duplicate ship ID: {0}")]
    DuplicateShipId(ShipId),

    /// A hull's slot-capacity array does not match its declared slot count.
    #[error("Ship {ship_id} has malformed slots: declared {declared}, capacities {actual}")]
    MalformedSlots {
        /// Offending hull.
        ship_id: ShipId,
        /// Declared number of equipment slots.
        declared: usize,
        /// Length of the capacity array.
        actual: usize,
    },

    /// A stat range has its base above its maximum.
    #[error("Ship {ship_id} has invalid {stat} range: base {base} > max {max}")]
    InvalidStatRange {
        /// Offending hull.
        ship_id: ShipId,
        /// Stat name.
        stat: &'static str,
        /// Base value.
        base: i32,
        /// Maximum value.
        max: i32,
    },

    /// Aggregated validation failures.
    #[error("Catalog validation failed: {0:?}")]
    CatalogValidation(Vec<FleetError>),
}
