//! Ship stat bundle, health and morale.

use serde::{Deserialize, Serialize};

use crate::equipment::Equipment;
use crate::gear::Gear;
use crate::master::{GearStats, MasterShip};

/// Maximum ship level.
pub const MAX_LEVEL: u16 = 185;

/// Default morale of a freshly sortied ship.
pub const DEFAULT_MORALE: u8 = 49;

/// Stat increments from modernization.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modernization {
    /// Hit points.
    #[serde(default)]
    pub hp: i32,
    /// Firepower.
    #[serde(default)]
    pub firepower: i32,
    /// Torpedo.
    #[serde(default)]
    pub torpedo: i32,
    /// Anti-air.
    #[serde(default)]
    pub anti_air: i32,
    /// Armor.
    #[serde(default)]
    pub armor: i32,
    /// Anti-submarine.
    #[serde(default)]
    pub asw: i32,
    /// Luck.
    #[serde(default)]
    pub luck: i32,
}

/// A stat split into the hull's own value and the equipment contribution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipStat {
    /// Value without equipment.
    pub naked: i32,
    /// Sum of equipment bonuses.
    pub equipment: i32,
}

impl ShipStat {
    /// Create a new stat.
    #[must_use]
    pub const fn new(naked: i32, equipment: i32) -> Self {
        Self { naked, equipment }
    }

    /// Value shown in the status screen.
    #[must_use]
    pub const fn displayed(&self) -> i32 {
        self.naked + self.equipment
    }
}

/// Damage bracket derived from remaining hit points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DamageState {
    /// Above 75%.
    Normal,
    /// At most 75%.
    Minor,
    /// At most 50%.
    Moderate,
    /// At most 25%.
    Heavy,
    /// No hit points left.
    Sunk,
}

impl DamageState {
    /// Classify remaining hit points.
    #[must_use]
    pub fn from_hp(current: i32, max: i32) -> Self {
        if current <= 0 {
            return Self::Sunk;
        }

        let ratio = f64::from(current) / f64::from(max.max(1));
        if ratio <= 0.25 {
            Self::Heavy
        } else if ratio <= 0.5 {
            Self::Moderate
        } else if ratio <= 0.75 {
            Self::Minor
        } else {
            Self::Normal
        }
    }

    /// Power multiplier shared by shelling and torpedo attacks.
    #[must_use]
    pub const fn common_power_modifier(self) -> f64 {
        match self {
            Self::Normal | Self::Minor => 1.0,
            Self::Moderate => 0.7,
            Self::Heavy => 0.4,
            Self::Sunk => 0.0,
        }
    }
}

/// Current and maximum hit points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Health {
    /// Maximum hit points.
    pub max_hp: i32,
    /// Remaining hit points.
    pub current_hp: i32,
}

impl Health {
    /// Create health, clamping the current value into `0..=max_hp`.
    #[must_use]
    pub fn new(max_hp: i32, current_hp: Option<i32>) -> Self {
        let max_hp = max_hp.max(0);
        let current_hp = current_hp.unwrap_or(max_hp).clamp(0, max_hp);
        Self { max_hp, current_hp }
    }

    /// Damage bracket.
    #[must_use]
    pub fn damage_state(&self) -> DamageState {
        DamageState::from_hp(self.current_hp, self.max_hp)
    }

    /// Power multiplier for the current damage bracket.
    #[must_use]
    pub fn common_power_modifier(&self) -> f64 {
        self.damage_state().common_power_modifier()
    }
}

/// Morale bracket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoraleState {
    /// 50 and above.
    Sparkle,
    /// 30 to 49.
    Normal,
    /// 20 to 29.
    Orange,
    /// Below 20.
    Red,
}

/// Morale value with its derived bracket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Morale(pub u8);

impl Morale {
    /// Morale bracket.
    #[must_use]
    pub const fn state(self) -> MoraleState {
        match self.0 {
            50.. => MoraleState::Sparkle,
            30..=49 => MoraleState::Normal,
            20..=29 => MoraleState::Orange,
            _ => MoraleState::Red,
        }
    }

    /// Accuracy multiplier shared by every attack phase.
    #[must_use]
    pub const fn common_accuracy_modifier(self) -> f64 {
        match self.state() {
            MoraleState::Sparkle => 1.2,
            MoraleState::Normal => 1.0,
            MoraleState::Orange => 0.8,
            MoraleState::Red => 0.5,
        }
    }
}

impl Default for Morale {
    fn default() -> Self {
        Self(DEFAULT_MORALE)
    }
}

/// Computed stats of a resolved ship.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShipStats {
    /// Level.
    pub level: u16,
    /// Hit points.
    pub health: Health,
    /// Morale.
    pub morale: Morale,
    /// Firepower.
    pub firepower: ShipStat,
    /// Torpedo.
    pub torpedo: ShipStat,
    /// Anti-air.
    pub anti_air: ShipStat,
    /// Armor.
    pub armor: ShipStat,
    /// Anti-submarine.
    pub asw: ShipStat,
    /// Evasion.
    pub evasion: ShipStat,
    /// Line of sight.
    pub los: ShipStat,
    /// Luck.
    pub luck: ShipStat,
    /// Accuracy (equipment only; hulls carry no innate accuracy).
    pub accuracy: ShipStat,
}

impl ShipStats {
    /// Compute the stat bundle from hull, user state and equipment.
    #[must_use]
    pub fn compute(
        master: &MasterShip,
        level: u16,
        modernization: &Modernization,
        current_hp: Option<i32>,
        morale: Option<u8>,
        equipment: &Equipment,
    ) -> Self {
        let level = level.clamp(1, MAX_LEVEL);
        let equip = |stat: fn(&GearStats) -> i32| -> i32 {
            equipment.sum_by(|gear: &Gear, _, _| stat(gear.stats()))
        };

        let max_hp = master.hp.with_modernization(modernization.hp);

        Self {
            level,
            health: Health::new(max_hp, current_hp),
            morale: morale.map_or_else(Morale::default, Morale),
            firepower: ShipStat::new(
                master.firepower.with_modernization(modernization.firepower),
                equip(|s| s.firepower),
            ),
            torpedo: ShipStat::new(
                master.torpedo.with_modernization(modernization.torpedo),
                equip(|s| s.torpedo),
            ),
            anti_air: ShipStat::new(
                master.anti_air.with_modernization(modernization.anti_air),
                equip(|s| s.anti_air),
            ),
            armor: ShipStat::new(
                master.armor.with_modernization(modernization.armor),
                equip(|s| s.armor),
            ),
            asw: ShipStat::new(
                master.asw.at_level(level) + modernization.asw,
                equip(|s| s.asw),
            ),
            evasion: ShipStat::new(master.evasion.at_level(level), equip(|s| s.evasion)),
            los: ShipStat::new(master.los.at_level(level), equip(|s| s.los)),
            luck: ShipStat::new(master.luck.with_modernization(modernization.luck), 0),
            accuracy: ShipStat::new(0, equip(|s| s.accuracy)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_damage_state_brackets() {
        assert_eq!(DamageState::from_hp(40, 40), DamageState::Normal);
        assert_eq!(DamageState::from_hp(31, 40), DamageState::Normal);
        assert_eq!(DamageState::from_hp(30, 40), DamageState::Minor);
        assert_eq!(DamageState::from_hp(20, 40), DamageState::Moderate);
        assert_eq!(DamageState::from_hp(10, 40), DamageState::Heavy);
        assert_eq!(DamageState::from_hp(0, 40), DamageState::Sunk);
    }

    #[test]
    fn test_damage_power_modifiers() {
        assert_eq!(Health::new(40, None).common_power_modifier(), 1.0);
        assert_eq!(Health::new(40, Some(30)).common_power_modifier(), 1.0);
        assert_eq!(Health::new(40, Some(20)).common_power_modifier(), 0.7);
        assert_eq!(Health::new(40, Some(10)).common_power_modifier(), 0.4);
    }

    #[test]
    fn test_health_clamps_current() {
        assert_eq!(Health::new(40, Some(99)).current_hp, 40);
        assert_eq!(Health::new(40, Some(-5)).current_hp, 0);

        let negative = Health::new(-120, None);
        assert_eq!(negative.max_hp, 0);
        assert_eq!(negative.current_hp, 0);
        assert_eq!(negative.damage_state(), DamageState::Sunk);
    }

    #[test]
    fn test_morale_brackets() {
        assert_eq!(Morale(100).state(), MoraleState::Sparkle);
        assert_eq!(Morale(50).state(), MoraleState::Sparkle);
        assert_eq!(Morale::default().state(), MoraleState::Normal);
        assert_eq!(Morale(29).state(), MoraleState::Orange);
        assert_eq!(Morale(19).state(), MoraleState::Red);

        assert_eq!(Morale(53).common_accuracy_modifier(), 1.2);
        assert_eq!(Morale(25).common_accuracy_modifier(), 0.8);
        assert_eq!(Morale(0).common_accuracy_modifier(), 0.5);
    }

    #[test]
    fn test_displayed_stat() {
        assert_eq!(ShipStat::new(37, 12).displayed(), 49);
    }
}
