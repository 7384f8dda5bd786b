//! Land-based air squadrons.

use serde::{Deserialize, Serialize};

use crate::equipment::{Equipment, EquipmentState};
use crate::gear::Gear;
use crate::master::GearAttrs;

/// Squadron capacity of every land base slot.
pub const AIRBASE_SLOTS: [u8; 4] = [18, 18, 18, 18];

/// User-chosen land base loadout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AirbaseState {
    /// Squadron loadout.
    #[serde(default)]
    pub equipment: EquipmentState,
}

/// Resolved land base.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Airbase {
    equipment: Equipment,
}

impl Airbase {
    /// Wrap resolved squadrons.
    #[must_use]
    pub fn new(equipment: Equipment) -> Self {
        Self { equipment }
    }

    /// Squadron slots.
    #[must_use]
    pub fn equipment(&self) -> &Equipment {
        &self.equipment
    }

    /// Number of deployed squadrons with aircraft left.
    #[must_use]
    pub fn squadron_count(&self) -> usize {
        self.equipment.count_aircraft(|gear: &Gear| gear.is(GearAttrs::AIRCRAFT))
    }
}
