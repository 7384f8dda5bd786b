//! Ship hull definitions.

use serde::{Deserialize, Serialize};

use super::ShipId;
use crate::error::FleetError;

/// Maximum number of regular equipment slots on any hull.
pub const MAX_SLOT_NUM: usize = 5;

/// Hull type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShipType {
    /// Destroyer escort.
    DE,
    /// Destroyer.
    DD,
    /// Light cruiser.
    CL,
    /// Torpedo cruiser.
    CLT,
    /// Heavy cruiser.
    CA,
    /// Aviation cruiser.
    CAV,
    /// Light carrier.
    CVL,
    /// Fast battleship.
    FBB,
    /// Battleship.
    BB,
    /// Aviation battleship.
    BBV,
    /// Standard carrier.
    CV,
    /// Armored carrier.
    CVB,
    /// Submarine.
    SS,
    /// Submarine aircraft carrier.
    SSV,
    /// Seaplane tender.
    AV,
    /// Amphibious assault ship.
    LHA,
    /// Repair ship.
    AR,
    /// Submarine tender.
    AS,
    /// Training cruiser.
    CT,
    /// Fleet oiler.
    AO,
}

impl ShipType {
    /// Check if this type shells like a carrier.
    #[must_use]
    pub const fn is_carrier_like(self) -> bool {
        matches!(self, Self::CVL | Self::CV | Self::CVB)
    }

    /// Check if this type belongs to the light cruiser family.
    #[must_use]
    pub const fn is_light_cruiser_class(self) -> bool {
        matches!(self, Self::CL | Self::CLT | Self::CT)
    }
}

/// Ship class.
///
/// Only classes with class-specific combat rules are named; every other hull
/// uses [`ShipClass::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ShipClass {
    /// Ise-class battleships.
    IseClass,
    /// Zara-class heavy cruisers.
    ZaraClass,
    /// Any other class.
    #[default]
    Other,
}

/// Stat that grows by modernization from a base value up to a maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct StatRange {
    /// Value at level 1 with no modernization.
    pub base: i32,
    /// Fully modernized value.
    pub max: i32,
}

impl StatRange {
    /// Create a new stat range.
    #[must_use]
    pub const fn new(base: i32, max: i32) -> Self {
        Self { base, max }
    }

    /// Value after applying a modernization increment, within `0..=max`.
    #[must_use]
    pub fn with_modernization(self, increment: i32) -> i32 {
        self.base.saturating_add(increment).min(self.max).max(0)
    }
}

/// Stat that grows with level between level 1 and level 99 values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct LevelRange {
    /// Value at level 1.
    pub lv1: i32,
    /// Value at level 99.
    pub lv99: i32,
}

impl LevelRange {
    /// Create a new level range.
    #[must_use]
    pub const fn new(lv1: i32, lv99: i32) -> Self {
        Self { lv1, lv99 }
    }

    /// Value at the given level: `floor(lv1 + (lv99 - lv1) * level / 99)`.
    #[must_use]
    pub fn at_level(self, level: u16) -> i32 {
        let growth = f64::from(self.lv99 - self.lv1) * f64::from(level) / 99.0;
        (f64::from(self.lv1) + growth).floor() as i32
    }
}

/// Data-driven ship hull definition.
///
/// # Example RON
///
/// ```ron
/// MasterShip(
///     id: 80,
///     name: "Nagato",
///     ship_class: Other,
///     ship_type: BB,
///     slot_num: 4,
///     slots: [3, 3, 3, 3],
///     hp: (base: 80, max: 90),
///     firepower: (base: 82, max: 99),
///     torpedo: (base: 0, max: 0),
///     anti_air: (base: 31, max: 79),
///     armor: (base: 75, max: 89),
///     asw: (lv1: 0, lv99: 0),
///     evasion: (lv1: 24, lv99: 49),
///     los: (lv1: 12, lv99: 39),
///     luck: (base: 20, max: 79),
/// )
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MasterShip {
    /// Unique hull id.
    pub id: ShipId,

    /// Display name.
    pub name: String,

    /// Ship class.
    #[serde(default)]
    pub ship_class: ShipClass,

    /// Hull type.
    pub ship_type: ShipType,

    /// Second remodel stage.
    #[serde(default)]
    pub kai2: bool,

    /// Declared number of regular equipment slots.
    pub slot_num: usize,

    /// Aircraft capacity per regular slot.
    pub slots: Vec<u8>,

    /// Hit points.
    pub hp: StatRange,

    /// Firepower.
    pub firepower: StatRange,

    /// Torpedo.
    pub torpedo: StatRange,

    /// Anti-air.
    pub anti_air: StatRange,

    /// Armor.
    pub armor: StatRange,

    /// Anti-submarine.
    #[serde(default)]
    pub asw: LevelRange,

    /// Evasion.
    pub evasion: LevelRange,

    /// Line of sight.
    pub los: LevelRange,

    /// Luck.
    pub luck: StatRange,
}

impl MasterShip {
    /// Check if this hull shells like a carrier.
    #[must_use]
    pub fn is_carrier_like(&self) -> bool {
        self.ship_type.is_carrier_like()
    }

    /// Validate internal consistency of this hull.
    ///
    /// Checks for:
    /// - Slot-capacity array matches the declared slot count
    /// - Slot count does not exceed [`MAX_SLOT_NUM`]
    /// - Every stat range has `base <= max`
    ///
    /// Returns a list of validation errors.
    #[must_use]
    pub fn validate(&self) -> Vec<FleetError> {
        let mut errors = Vec::new();

        if self.slots.len() != self.slot_num || self.slot_num > MAX_SLOT_NUM {
            errors.push(FleetError::MalformedSlots {
                ship_id: self.id,
                declared: self.slot_num,
                actual: self.slots.len(),
            });
        }

        let ranges = [
            ("hp", self.hp),
            ("firepower", self.firepower),
            ("torpedo", self.torpedo),
            ("anti_air", self.anti_air),
            ("armor", self.armor),
            ("luck", self.luck),
        ];

        for (stat, range) in ranges {
            if range.base > range.max {
                errors.push(FleetError::InvalidStatRange {
                    ship_id: self.id,
                    stat,
                    base: range.base,
                    max: range.max,
                });
            }
        }

        errors
    }
}
