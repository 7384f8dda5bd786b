//! Gear definitions and capability tags.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use super::GearId;
use crate::gear::ImprovementBonuses;

/// Maximum improvement level a gear can reach.
pub const MAX_STARS: u8 = 10;

/// Equipment category as listed in the reference data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum GearCategory {
    /// Destroyer-grade main guns.
    SmallCaliberMainGun,
    /// Cruiser-grade main guns.
    MediumCaliberMainGun,
    /// Battleship-grade main guns.
    LargeCaliberMainGun,
    /// Secondary guns, including high-angle mounts.
    SecondaryGun,
    /// Torpedoes.
    Torpedo,
    /// Carrier-based fighters.
    CbFighter,
    /// Carrier-based dive bombers.
    CbDiveBomber,
    /// Carrier-based torpedo bombers.
    CbTorpedoBomber,
    /// Carrier-based reconnaissance aircraft.
    CbRecon,
    /// Reconnaissance seaplanes.
    ReconSeaplane,
    /// Seaplane bombers.
    SeaplaneBomber,
    /// Small radars.
    SmallRadar,
    /// Large radars.
    LargeRadar,
    /// Sonars.
    Sonar,
    /// Depth charges and projectors.
    DepthCharge,
    /// Anti-aircraft shells.
    AaShell,
    /// Armor-piercing shells.
    ApShell,
    /// Anti-aircraft machine guns.
    AaGun,
    /// Anti-aircraft fire directors.
    AaFireDirector,
    /// Searchlights.
    Searchlight,
    /// Land-based attack aircraft.
    LbAttacker,
    /// Land-based fighters.
    LbFighter,
    /// Land-based reconnaissance aircraft.
    LbRecon,
    /// Anything not referenced by combat rules.
    #[default]
    Other,
}

impl GearCategory {
    /// Check if this category is any kind of aircraft.
    #[must_use]
    pub const fn is_aircraft(self) -> bool {
        matches!(
            self,
            Self::CbFighter
                | Self::CbDiveBomber
                | Self::CbTorpedoBomber
                | Self::CbRecon
                | Self::ReconSeaplane
                | Self::SeaplaneBomber
                | Self::LbAttacker
                | Self::LbFighter
                | Self::LbRecon
        )
    }

    /// Check if this category is a main gun.
    #[must_use]
    pub const fn is_main_gun(self) -> bool {
        matches!(
            self,
            Self::SmallCaliberMainGun | Self::MediumCaliberMainGun | Self::LargeCaliberMainGun
        )
    }

    /// Check if this category is a radar.
    #[must_use]
    pub const fn is_radar(self) -> bool {
        matches!(self, Self::SmallRadar | Self::LargeRadar)
    }
}

bitflags! {
    /// Capability tags resolved once per gear.
    ///
    /// Combat rules query these with set-membership tests instead of
    /// re-inspecting category and stats at every call site.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct GearAttrs: u32 {
        const MAIN_GUN             = 1 << 0;
        const SECONDARY_GUN        = 1 << 1;
        const HIGH_ANGLE_MOUNT     = 1 << 2;
        const RADAR                = 1 << 3;
        const SURFACE_RADAR        = 1 << 4;
        const AIRCRAFT             = 1 << 5;
        const CARRIER_BASED        = 1 << 6;
        const FIGHTER              = 1 << 7;
        const DIVE_BOMBER          = 1 << 8;
        const TORPEDO_BOMBER       = 1 << 9;
        const OBSERVATION_SEAPLANE = 1 << 10;
        const AP_SHELL             = 1 << 11;
        const ANTI_INSTALLATION    = 1 << 12;
    }
}

/// Flat stat bonuses a gear grants when equipped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GearStats {
    /// Firepower.
    #[serde(default)]
    pub firepower: i32,
    /// Torpedo.
    #[serde(default)]
    pub torpedo: i32,
    /// Anti-air.
    #[serde(default)]
    pub anti_air: i32,
    /// Dive bombing.
    #[serde(default)]
    pub bombing: i32,
    /// Armor.
    #[serde(default)]
    pub armor: i32,
    /// Anti-submarine.
    #[serde(default)]
    pub asw: i32,
    /// Evasion.
    #[serde(default)]
    pub evasion: i32,
    /// Line of sight.
    #[serde(default)]
    pub los: i32,
    /// Accuracy.
    #[serde(default)]
    pub accuracy: i32,
}

/// Data-driven gear definition.
///
/// # Example RON
///
/// ```ron
/// MasterGear(
///     id: 9,
///     name: "46cm Triple Gun Mount",
///     category: LargeCaliberMainGun,
///     stats: (firepower: 26, anti_air: 4),
/// )
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MasterGear {
    /// Unique gear id.
    pub id: GearId,

    /// Display name.
    pub name: String,

    /// Equipment category.
    pub category: GearCategory,

    /// Stat bonuses.
    #[serde(default)]
    pub stats: GearStats,

    /// High-angle mount (yellow secondary gun icon).
    #[serde(default)]
    pub high_angle_mount: bool,

    /// Bomber able to strike installations.
    #[serde(default)]
    pub anti_installation: bool,
}

impl MasterGear {
    /// Create a gear definition with no stat bonuses.
    #[must_use]
    pub fn new(id: GearId, name: impl Into<String>, category: GearCategory) -> Self {
        Self {
            id,
            name: name.into(),
            category,
            stats: GearStats::default(),
            high_angle_mount: false,
            anti_installation: false,
        }
    }

    /// Builder method to set stat bonuses.
    #[must_use]
    pub fn with_stats(mut self, stats: GearStats) -> Self {
        self.stats = stats;
        self
    }

    /// Builder method to mark a high-angle mount.
    #[must_use]
    pub fn with_high_angle_mount(mut self) -> Self {
        self.high_angle_mount = true;
        self
    }

    /// Builder method to mark an installation-capable bomber.
    #[must_use]
    pub fn with_anti_installation(mut self) -> Self {
        self.anti_installation = true;
        self
    }

    /// Derive capability tags from category, stats and flags.
    #[must_use]
    pub fn attrs(&self) -> GearAttrs {
        use GearCategory as C;

        let mut attrs = GearAttrs::empty();
        let category = self.category;

        attrs.set(GearAttrs::MAIN_GUN, category.is_main_gun());
        attrs.set(GearAttrs::SECONDARY_GUN, category == C::SecondaryGun);
        attrs.set(GearAttrs::HIGH_ANGLE_MOUNT, self.high_angle_mount);

        if category.is_radar() {
            attrs |= GearAttrs::RADAR;
            attrs.set(GearAttrs::SURFACE_RADAR, self.stats.accuracy >= 3);
        }

        attrs.set(GearAttrs::AIRCRAFT, category.is_aircraft());
        attrs.set(
            GearAttrs::CARRIER_BASED,
            matches!(
                category,
                C::CbFighter | C::CbDiveBomber | C::CbTorpedoBomber | C::CbRecon
            ),
        );
        attrs.set(GearAttrs::FIGHTER, category == C::CbFighter);
        attrs.set(GearAttrs::DIVE_BOMBER, category == C::CbDiveBomber);
        attrs.set(GearAttrs::TORPEDO_BOMBER, category == C::CbTorpedoBomber);
        attrs.set(
            GearAttrs::OBSERVATION_SEAPLANE,
            matches!(category, C::ReconSeaplane | C::SeaplaneBomber),
        );
        attrs.set(GearAttrs::AP_SHELL, category == C::ApShell);
        attrs.set(
            GearAttrs::ANTI_INSTALLATION,
            category == C::CbDiveBomber && self.anti_installation,
        );

        attrs
    }

    /// Improvement bonuses granted at the given star level.
    ///
    /// Stars above [`MAX_STARS`] are treated as [`MAX_STARS`].
    #[must_use]
    pub fn improvement_bonuses(&self, stars: u8) -> ImprovementBonuses {
        use GearCategory as C;

        let attrs = self.attrs();
        let stars = f64::from(stars.min(MAX_STARS));
        let sqrt = stars.sqrt();

        let shelling_power = match self.category {
            C::LargeCaliberMainGun => 1.5 * sqrt,
            C::SecondaryGun if attrs.contains(GearAttrs::HIGH_ANGLE_MOUNT) => 0.2 * stars,
            C::SmallCaliberMainGun
            | C::MediumCaliberMainGun
            | C::SecondaryGun
            | C::ApShell
            | C::AaFireDirector
            | C::Searchlight
            | C::AaGun => sqrt,
            C::Sonar | C::DepthCharge => 0.75 * sqrt,
            _ => 0.0,
        };

        let shelling_accuracy = match self.category {
            _ if attrs.contains(GearAttrs::SURFACE_RADAR) => 1.7 * sqrt,
            C::SmallRadar
            | C::LargeRadar
            | C::SmallCaliberMainGun
            | C::MediumCaliberMainGun
            | C::LargeCaliberMainGun
            | C::SecondaryGun
            | C::ApShell
            | C::AaFireDirector
            | C::Searchlight => sqrt,
            _ => 0.0,
        };

        ImprovementBonuses {
            shelling_power,
            shelling_accuracy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn radar(accuracy: i32, anti_air: i32) -> MasterGear {
        MasterGear::new(GearId::new(142), "radar", GearCategory::LargeRadar).with_stats(
            GearStats {
                accuracy,
                anti_air,
                ..Default::default()
            },
        )
    }

    #[test]
    fn test_main_gun_attrs() {
        let gun = MasterGear::new(GearId::new(9), "46cm", GearCategory::LargeCaliberMainGun);
        let attrs = gun.attrs();
        assert!(attrs.contains(GearAttrs::MAIN_GUN));
        assert!(!attrs.contains(GearAttrs::AIRCRAFT));
    }

    #[test]
    fn test_radar_attrs_follow_stats() {
        let surface = radar(5, 0).attrs();
        assert!(surface.contains(GearAttrs::RADAR | GearAttrs::SURFACE_RADAR));

        let air = radar(1, 4).attrs();
        assert!(air.contains(GearAttrs::RADAR));
        assert!(!air.contains(GearAttrs::SURFACE_RADAR));
    }

    #[test]
    fn test_fighter_tag_is_carrier_only() {
        let carrier = MasterGear::new(GearId::new(20), "Reppu", GearCategory::CbFighter).attrs();
        assert!(carrier.contains(GearAttrs::FIGHTER | GearAttrs::CARRIER_BASED));

        let land = MasterGear::new(GearId::new(250), "Raiden", GearCategory::LbFighter).attrs();
        assert!(land.contains(GearAttrs::AIRCRAFT));
        assert!(!land.intersects(GearAttrs::FIGHTER | GearAttrs::CARRIER_BASED));
    }

    #[test]
    fn test_anti_installation_requires_dive_bomber() {
        let bomber = MasterGear::new(GearId::new(24), "Suisei", GearCategory::CbDiveBomber)
            .with_anti_installation();
        assert!(bomber.attrs().contains(GearAttrs::ANTI_INSTALLATION));

        let attacker = MasterGear::new(GearId::new(16), "Tenzan", GearCategory::CbTorpedoBomber)
            .with_anti_installation();
        assert!(!attacker.attrs().contains(GearAttrs::ANTI_INSTALLATION));
    }

    #[test]
    fn test_seaplanes_are_observation_aircraft() {
        let zuiun = MasterGear::new(GearId::new(26), "Zuiun", GearCategory::SeaplaneBomber);
        let attrs = zuiun.attrs();
        assert!(attrs.contains(GearAttrs::OBSERVATION_SEAPLANE | GearAttrs::AIRCRAFT));
        assert!(!attrs.contains(GearAttrs::CARRIER_BASED));
    }

    #[test]
    fn test_improvement_curves() {
        let large = MasterGear::new(GearId::new(9), "46cm", GearCategory::LargeCaliberMainGun);
        let bonuses = large.improvement_bonuses(4);
        assert_eq!(bonuses.shelling_power, 3.0);
        assert_eq!(bonuses.shelling_accuracy, 2.0);

        let high_angle = MasterGear::new(GearId::new(130), "HA", GearCategory::SecondaryGun)
            .with_high_angle_mount();
        assert_eq!(high_angle.improvement_bonuses(10).shelling_power, 2.0);

        assert_eq!(radar(5, 0).improvement_bonuses(9).shelling_accuracy, 1.7 * 3.0);
        assert_eq!(radar(1, 4).improvement_bonuses(9).shelling_accuracy, 3.0);
    }

    #[test]
    fn test_improvement_stars_are_capped() {
        let gun = MasterGear::new(GearId::new(2), "12.7cm", GearCategory::SmallCaliberMainGun);
        assert_eq!(gun.improvement_bonuses(200), gun.improvement_bonuses(MAX_STARS));
        assert_eq!(gun.improvement_bonuses(0), ImprovementBonuses::default());
    }
}
