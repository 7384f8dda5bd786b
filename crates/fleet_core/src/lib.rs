//! # Fleet Core
//!
//! Deterministic combat resolution core for the fleet planner.
//!
//! This crate contains **only** pure calculation:
//! - No IO
//! - No randomness
//! - No global state
//!
//! This separation enables:
//! - Sharing one catalog across threads
//! - Ranking many candidate loadouts in parallel
//! - Reproducible breakdowns in tests and tools
//!
//! ## Crate Structure
//!
//! - [`master`] - Reference data definitions and the validated catalog
//! - [`factory`] - Entity construction from catalog and user state
//! - [`gear`], [`equipment`], [`ship`], [`fleet`], [`airbase`], [`plan`] - Resolved entities
//! - [`rate_map`] - Priority-ordered probability distribution
//! - [`attack`] - Battle context and the day shelling calculator
//! - [`math`] - Soft cap and truncation helpers

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]

pub mod airbase;
pub mod attack;
pub mod equipment;
pub mod error;
pub mod factory;
pub mod fleet;
pub mod gear;
pub mod master;
pub mod math;
pub mod plan;
pub mod rate_map;
pub mod ship;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::airbase::{Airbase, AirbaseState};
    pub use crate::attack::shelling::{
        DaySpecialAttack, DaySpecialAttackType, ShellingAbility, ShellingAccuracy,
        ShellingAccuracyParams, ShellingCalculator, ShellingPower, ShellingPowerParams,
    };
    pub use crate::attack::{AirState, Engagement, Formation};
    pub use crate::equipment::{Equipment, EquipmentKey, EquipmentState};
    pub use crate::error::{FleetError, Result};
    pub use crate::factory::Factory;
    pub use crate::fleet::{Fleet, FleetState};
    pub use crate::gear::{Gear, GearState};
    pub use crate::master::{CatalogData, GearAttrs, GearId, MasterCatalog, ShipId};
    pub use crate::plan::{AirbaseKey, FleetKey, Plan, PlanState};
    pub use crate::rate_map::RateMap;
    pub use crate::ship::{Modernization, Ship, ShipState};
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_entities_are_send_sync() {
        assert_send_sync::<MasterCatalog>();
        assert_send_sync::<Factory<'static>>();
        assert_send_sync::<Ship>();
        assert_send_sync::<Fleet>();
        assert_send_sync::<Plan>();
        assert_send_sync::<ShellingAbility>();
        assert_send_sync::<ShellingCalculator<'static>>();
    }
}
