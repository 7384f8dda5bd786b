//! Sortie plans: named bundles of fleets and land bases.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::airbase::{Airbase, AirbaseState};
use crate::fleet::{Fleet, FleetState};

/// Highest headquarters level.
pub const MAX_HQ_LEVEL: u16 = 120;

/// Fleet slot in a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FleetKey {
    /// Main fleet.
    F1,
    /// Second fleet.
    F2,
    /// Third fleet.
    F3,
    /// Fourth fleet.
    F4,
}

impl fmt::Display for FleetKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::F1 => "f1",
            Self::F2 => "f2",
            Self::F3 => "f3",
            Self::F4 => "f4",
        };
        f.write_str(name)
    }
}

/// Land base slot in a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AirbaseKey {
    /// First land base.
    A1,
    /// Second land base.
    A2,
    /// Third land base.
    A3,
}

/// User-authored plan.
///
/// # Example RON
///
/// ```ron
/// PlanState(
///     name: Some("5-5 boss"),
///     fleets: { F1: (ships: [Some((ship_id: 553))]) },
/// )
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanState {
    /// Plan name.
    #[serde(default)]
    pub name: Option<String>,

    /// Headquarters level; `None` means [`MAX_HQ_LEVEL`].
    #[serde(default)]
    pub hq_level: Option<u16>,

    /// Fleets by slot.
    #[serde(default)]
    pub fleets: BTreeMap<FleetKey, FleetState>,

    /// Land bases by slot.
    #[serde(default)]
    pub airbases: BTreeMap<AirbaseKey, AirbaseState>,
}

/// Resolved plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    /// Plan name, empty when unnamed.
    pub name: String,
    /// Headquarters level.
    pub hq_level: u16,
    /// Fleets in key order.
    pub fleets: Vec<(FleetKey, Fleet)>,
    /// Land bases in key order.
    pub airbases: Vec<(AirbaseKey, Airbase)>,
}

impl Plan {
    /// Fleet in a slot.
    #[must_use]
    pub fn fleet(&self, key: FleetKey) -> Option<&Fleet> {
        self.fleets
            .iter()
            .find_map(|(fleet_key, fleet)| (*fleet_key == key).then_some(fleet))
    }

    /// Land base in a slot.
    #[must_use]
    pub fn airbase(&self, key: AirbaseKey) -> Option<&Airbase> {
        self.airbases
            .iter()
            .find_map(|(airbase_key, airbase)| (*airbase_key == key).then_some(airbase))
    }

    /// The main fleet.
    #[must_use]
    pub fn main_fleet(&self) -> Option<&Fleet> {
        self.fleet(FleetKey::F1)
    }
}
