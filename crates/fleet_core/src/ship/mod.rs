//! Resolved ships and the per-ship derived quantities combat formulas read.
//!
//! A [`Ship`] is an immutable value built by the factory from a hull
//! definition and a [`ShipState`]. Everything here is a pure function of
//! those inputs.

mod stats;

use serde::{Deserialize, Serialize};

use crate::equipment::{Equipment, EquipmentKey, EquipmentState};
use crate::gear::{Gear, ImprovementBonuses};
use crate::master::gear_ids::{
    GUN_203MM_53_TWIN, LIGHT_CRUISER_SINGLE_GUNS, LIGHT_CRUISER_TWIN_GUNS,
};
use crate::master::{GearAttrs, MasterShip, ShipClass, ShipId, ShipType};

pub use stats::{
    DamageState, Health, Modernization, Morale, MoraleState, ShipStat, ShipStats, DEFAULT_MORALE,
    MAX_LEVEL,
};

/// Level used when a saved ship does not specify one.
pub const DEFAULT_LEVEL: u16 = 99;

const fn default_level() -> u16 {
    DEFAULT_LEVEL
}

/// User-chosen ship configuration.
///
/// # Example RON
///
/// ```ron
/// ShipState(
///     ship_id: 553,
///     level: 175,
///     modernization: (luck: 30),
///     equipment: (
///         gears: { G1: (gear_id: 9, stars: 10) },
///     ),
/// )
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipState {
    /// Hull definition id.
    pub ship_id: ShipId,

    /// Level (clamped to `1..=MAX_LEVEL` on resolution).
    #[serde(default = "default_level")]
    pub level: u16,

    /// Remaining hit points; `None` means undamaged.
    #[serde(default)]
    pub current_hp: Option<i32>,

    /// Morale; `None` means [`DEFAULT_MORALE`].
    #[serde(default)]
    pub morale: Option<u8>,

    /// Modernization increments.
    #[serde(default)]
    pub modernization: Modernization,

    /// Loadout.
    #[serde(default)]
    pub equipment: EquipmentState,
}

impl ShipState {
    /// Create a state for an unequipped ship at the default level.
    #[must_use]
    pub fn new(ship_id: ShipId) -> Self {
        Self {
            ship_id,
            level: DEFAULT_LEVEL,
            current_hp: None,
            morale: None,
            modernization: Modernization::default(),
            equipment: EquipmentState::default(),
        }
    }

    /// Builder method to set the level.
    #[must_use]
    pub fn with_level(mut self, level: u16) -> Self {
        self.level = level;
        self
    }

    /// Builder method to set remaining hit points.
    #[must_use]
    pub fn with_current_hp(mut self, hp: i32) -> Self {
        self.current_hp = Some(hp);
        self
    }

    /// Builder method to set morale.
    #[must_use]
    pub fn with_morale(mut self, morale: u8) -> Self {
        self.morale = Some(morale);
        self
    }

    /// Builder method to set modernization increments.
    #[must_use]
    pub fn with_modernization(mut self, modernization: Modernization) -> Self {
        self.modernization = modernization;
        self
    }

    /// Builder method to set the loadout.
    #[must_use]
    pub fn with_equipment(mut self, equipment: EquipmentState) -> Self {
        self.equipment = equipment;
        self
    }
}

/// Ship resolved against its hull definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ship {
    master: MasterShip,
    stats: ShipStats,
    equipment: Equipment,
}

impl Ship {
    /// Bind a hull, user state and already-resolved equipment.
    #[must_use]
    pub fn new(master: &MasterShip, state: &ShipState, equipment: Equipment) -> Self {
        let stats = ShipStats::compute(
            master,
            state.level,
            &state.modernization,
            state.current_hp,
            state.morale,
            &equipment,
        );

        Self {
            master: master.clone(),
            stats,
            equipment,
        }
    }

    /// Hull definition id.
    #[must_use]
    pub fn ship_id(&self) -> ShipId {
        self.master.id
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.master.name
    }

    /// Hull type.
    #[must_use]
    pub fn ship_type(&self) -> ShipType {
        self.master.ship_type
    }

    /// Ship class.
    #[must_use]
    pub fn ship_class(&self) -> ShipClass {
        self.master.ship_class
    }

    /// The hull definition this ship was resolved from.
    #[must_use]
    pub fn master(&self) -> &MasterShip {
        &self.master
    }

    /// Computed stats.
    #[must_use]
    pub fn stats(&self) -> &ShipStats {
        &self.stats
    }

    /// Equipment slots.
    #[must_use]
    pub fn equipment(&self) -> &Equipment {
        &self.equipment
    }

    /// Check if this ship shells like a carrier.
    #[must_use]
    pub fn is_carrier_like(&self) -> bool {
        self.master.is_carrier_like()
    }

    /// Check if this is an Ise-class hull at its second remodel.
    #[must_use]
    pub fn is_ise_class_kai2(&self) -> bool {
        self.master.ship_class == ShipClass::IseClass && self.master.kai2
    }

    /// Contribution to the fleet line-of-sight sum.
    ///
    /// Naked LoS plus, for each observation seaplane, its LoS times
    /// `floor(sqrt(slot size))`.
    #[must_use]
    pub fn fleet_los_factor(&self) -> i32 {
        let observation: i32 = self.equipment.sum_by(|gear, _, size| {
            if gear.is(GearAttrs::OBSERVATION_SEAPLANE) {
                gear.stats().los * f64::from(size).sqrt().floor() as i32
            } else {
                0
            }
        });

        self.stats.los.naked + observation
    }

    /// Fit-gun power bonus for light cruisers and Zara-class cruisers.
    #[must_use]
    pub fn cruiser_fit_bonus(&self) -> f64 {
        if self.master.ship_type.is_light_cruiser_class() {
            let single = self.count_gears(|gear| gear.id_in(&LIGHT_CRUISER_SINGLE_GUNS));
            let twin = self.count_gears(|gear| gear.id_in(&LIGHT_CRUISER_TWIN_GUNS));
            return single.sqrt() + 2.0 * twin.sqrt();
        }

        if self.master.ship_class == ShipClass::ZaraClass {
            return self
                .count_gears(|gear| gear.gear_id() == GUN_203MM_53_TWIN)
                .sqrt();
        }

        0.0
    }

    fn count_gears(&self, pred: impl Fn(&Gear) -> bool) -> f64 {
        self.equipment.count(pred) as f64
    }

    /// Aircraft power added to a carrier's shelling attack.
    ///
    /// Against ships: `floor(equipment torpedo + floor(1.3 * bombing)) + 15`.
    /// Against installations only anti-installation bombers count:
    /// `floor(1.3 * bombing) + 15`.
    #[must_use]
    pub fn air_power(&self, target_is_installation: bool) -> f64 {
        if target_is_installation {
            let bombing: i32 = self.equipment.sum_by(|gear, _, _| {
                if gear.is(GearAttrs::ANTI_INSTALLATION) {
                    gear.stats().bombing
                } else {
                    0
                }
            });
            return (1.3 * f64::from(bombing)).floor() + 15.0;
        }

        let bombing: i32 = self.equipment.sum_by(|gear, _, _| gear.stats().bombing);
        let torpedo = f64::from(self.stats.torpedo.equipment);
        (torpedo + (1.3 * f64::from(bombing)).floor()).floor() + 15.0
    }

    /// Level and luck contribution to accuracy: `2 sqrt(level) + 1.5 sqrt(luck)`.
    #[must_use]
    pub fn basic_accuracy_term(&self) -> f64 {
        let level = f64::from(self.stats.level);
        let luck = f64::from(self.stats.luck.displayed());
        2.0 * level.sqrt() + 1.5 * luck.sqrt()
    }

    /// Bonus deltas one more improvement step on the gear in `key` would grant.
    ///
    /// Returns `None` for empty or missing slots and for fully improved gear.
    #[must_use]
    pub fn next_improvement_bonuses(&self, key: EquipmentKey) -> Option<ImprovementBonuses> {
        self.equipment
            .get(key)?
            .gear
            .as_ref()?
            .next_improvement_bonuses()
    }
}
