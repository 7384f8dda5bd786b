//! Test fixtures and helpers.
//!
//! A small reference catalog covering every hull and gear family the
//! shelling rules care about, plus builders for user state.

use fleet_core::equipment::{EquipmentKey, EquipmentState};
use fleet_core::gear::GearState;
use fleet_core::master::{
    CatalogData, GearCategory, GearId, GearStats, LevelRange, MasterCatalog, MasterGear,
    MasterShip, ShipClass, ShipId, ShipType, StatRange,
};
use fleet_core::ship::ShipState;

/// Ids present in [`sample_catalog`].
pub mod ids {
    /// Gear ids.
    pub mod gear {
        /// 12.7cm Twin Gun Mount.
        pub const GUN_12_7CM_TWIN: u16 = 2;
        /// 14cm Single Gun Mount.
        pub const GUN_14CM_SINGLE: u16 = 4;
        /// 35.6cm Twin Gun Mount.
        pub const GUN_35_6CM_TWIN: u16 = 7;
        /// 46cm Triple Gun Mount.
        pub const GUN_46CM_TRIPLE: u16 = 9;
        /// 12.7cm Twin High-angle Gun Mount.
        pub const HA_12_7CM_TWIN: u16 = 10;
        /// 15.2cm Single Gun Mount.
        pub const GUN_15_2CM_SINGLE: u16 = 11;
        /// 15.5cm Triple Secondary Gun Mount.
        pub const SECONDARY_15_5CM_TRIPLE: u16 = 12;
        /// Type 97 Torpedo Bomber.
        pub const TYPE_97_TORPEDO_BOMBER: u16 = 16;
        /// Type 0 Fighter Model 21.
        pub const TYPE_0_FIGHTER_21: u16 = 20;
        /// Suisei.
        pub const SUISEI: u16 = 24;
        /// Type 0 Reconnaissance Seaplane.
        pub const TYPE_0_RECON_SEAPLANE: u16 = 25;
        /// Zuiun.
        pub const ZUIUN: u16 = 26;
        /// Type 13 Air Radar.
        pub const TYPE_13_AIR_RADAR: u16 = 27;
        /// Type 22 Surface Radar.
        pub const TYPE_22_SURFACE_RADAR: u16 = 28;
        /// Type 91 Armor Piercing Shell.
        pub const TYPE_91_AP_SHELL: u16 = 36;
        /// Type 0 Observation Seaplane.
        pub const TYPE_0_OBSERVATION_SEAPLANE: u16 = 59;
        /// Type 0 Fighter Model 62 (Fighter-bomber).
        pub const TYPE_0_FIGHTER_BOMBER_62: u16 = 60;
        /// 15.2cm Twin Gun Mount.
        pub const GUN_15_2CM_TWIN: u16 = 65;
        /// Zuiun (634 Air Group).
        pub const ZUIUN_634: u16 = 79;
        /// 14cm Twin Gun Mount.
        pub const GUN_14CM_TWIN: u16 = 119;
        /// 15.2cm Twin Gun Mount Kai.
        pub const GUN_15_2CM_TWIN_KAI: u16 = 139;
        /// 203mm/53 Twin Gun Mount.
        pub const GUN_203MM_53_TWIN: u16 = 162;
        /// Type 96 Land-based Attack Aircraft.
        pub const TYPE_96_LBAA: u16 = 168;
        /// Suisei Model 22 (634 Air Group).
        pub const SUISEI_22_634: u16 = 291;
        /// Suisei Model 22 (634 Air Group / Skilled).
        pub const SUISEI_22_634_SKILLED: u16 = 292;
    }

    /// Ship ids.
    pub mod ship {
        /// Mutsuki, destroyer.
        pub const MUTSUKI: u16 = 1;
        /// Nagato, battleship.
        pub const NAGATO: u16 = 80;
        /// Akagi, standard carrier.
        pub const AKAGI: u16 = 83;
        /// Yuubari Kai Ni, light cruiser.
        pub const YUUBARI_KAI_NI: u16 = 622;
        /// Zara due, heavy cruiser.
        pub const ZARA_DUE: u16 = 448;
        /// Ise Kai Ni, aviation battleship.
        pub const ISE_KAI_NI: u16 = 553;
    }
}

fn gear(id: u16, name: &str, category: GearCategory, stats: GearStats) -> MasterGear {
    MasterGear::new(GearId::new(id), name, category).with_stats(stats)
}

/// Gear definitions of the sample catalog.
#[must_use]
pub fn sample_gears() -> Vec<MasterGear> {
    use ids::gear::*;
    use GearCategory as C;

    vec![
        gear(GUN_12_7CM_TWIN, "12.7cm Twin Gun Mount", C::SmallCaliberMainGun, GearStats {
            firepower: 2,
            anti_air: 2,
            ..Default::default()
        }),
        gear(GUN_14CM_SINGLE, "14cm Single Gun Mount", C::MediumCaliberMainGun, GearStats {
            firepower: 2,
            accuracy: 1,
            ..Default::default()
        }),
        gear(GUN_35_6CM_TWIN, "35.6cm Twin Gun Mount", C::LargeCaliberMainGun, GearStats {
            firepower: 15,
            anti_air: 4,
            ..Default::default()
        }),
        gear(GUN_46CM_TRIPLE, "46cm Triple Gun Mount", C::LargeCaliberMainGun, GearStats {
            firepower: 26,
            anti_air: 5,
            ..Default::default()
        }),
        gear(HA_12_7CM_TWIN, "12.7cm Twin High-angle Gun Mount", C::SecondaryGun, GearStats {
            firepower: 2,
            anti_air: 4,
            ..Default::default()
        })
        .with_high_angle_mount(),
        gear(GUN_15_2CM_SINGLE, "15.2cm Single Gun Mount", C::SecondaryGun, GearStats {
            firepower: 2,
            accuracy: 1,
            ..Default::default()
        }),
        gear(
            SECONDARY_15_5CM_TRIPLE,
            "15.5cm Triple Secondary Gun Mount",
            C::SecondaryGun,
            GearStats {
                firepower: 7,
                anti_air: 3,
                accuracy: 1,
                ..Default::default()
            },
        ),
        gear(TYPE_97_TORPEDO_BOMBER, "Type 97 Torpedo Bomber", C::CbTorpedoBomber, GearStats {
            torpedo: 5,
            los: 1,
            asw: 4,
            ..Default::default()
        }),
        gear(TYPE_0_FIGHTER_21, "Type 0 Fighter Model 21", C::CbFighter, GearStats {
            anti_air: 5,
            ..Default::default()
        }),
        gear(SUISEI, "Suisei", C::CbDiveBomber, GearStats {
            bombing: 8,
            asw: 3,
            ..Default::default()
        }),
        gear(TYPE_0_RECON_SEAPLANE, "Type 0 Reconnaissance Seaplane", C::ReconSeaplane, GearStats {
            anti_air: 1,
            los: 5,
            asw: 2,
            ..Default::default()
        }),
        gear(ZUIUN, "Zuiun", C::SeaplaneBomber, GearStats {
            anti_air: 2,
            bombing: 4,
            los: 6,
            asw: 4,
            ..Default::default()
        }),
        gear(TYPE_13_AIR_RADAR, "Type 13 Air Radar", C::SmallRadar, GearStats {
            anti_air: 2,
            los: 3,
            ..Default::default()
        }),
        gear(TYPE_22_SURFACE_RADAR, "Type 22 Surface Radar", C::SmallRadar, GearStats {
            los: 5,
            accuracy: 3,
            ..Default::default()
        }),
        gear(TYPE_91_AP_SHELL, "Type 91 Armor Piercing Shell", C::ApShell, GearStats {
            firepower: 8,
            accuracy: 1,
            ..Default::default()
        }),
        gear(
            TYPE_0_OBSERVATION_SEAPLANE,
            "Type 0 Observation Seaplane",
            C::ReconSeaplane,
            GearStats {
                firepower: 1,
                anti_air: 1,
                los: 6,
                accuracy: 1,
                asw: 4,
                ..Default::default()
            },
        ),
        gear(
            TYPE_0_FIGHTER_BOMBER_62,
            "Type 0 Fighter Model 62 (Fighter-bomber)",
            C::CbDiveBomber,
            GearStats {
                anti_air: 4,
                bombing: 4,
                ..Default::default()
            },
        )
        .with_anti_installation(),
        gear(GUN_15_2CM_TWIN, "15.2cm Twin Gun Mount", C::MediumCaliberMainGun, GearStats {
            firepower: 4,
            accuracy: 3,
            ..Default::default()
        }),
        gear(ZUIUN_634, "Zuiun (634 Air Group)", C::SeaplaneBomber, GearStats {
            anti_air: 3,
            bombing: 6,
            los: 6,
            asw: 4,
            ..Default::default()
        }),
        gear(GUN_14CM_TWIN, "14cm Twin Gun Mount", C::MediumCaliberMainGun, GearStats {
            firepower: 3,
            accuracy: 1,
            ..Default::default()
        }),
        gear(GUN_15_2CM_TWIN_KAI, "15.2cm Twin Gun Mount Kai", C::MediumCaliberMainGun, GearStats {
            firepower: 5,
            anti_air: 2,
            accuracy: 4,
            ..Default::default()
        }),
        gear(GUN_203MM_53_TWIN, "203mm/53 Twin Gun Mount", C::MediumCaliberMainGun, GearStats {
            firepower: 9,
            ..Default::default()
        }),
        gear(TYPE_96_LBAA, "Type 96 Land-based Attack Aircraft", C::LbAttacker, GearStats {
            anti_air: 1,
            bombing: 10,
            torpedo: 8,
            los: 2,
            ..Default::default()
        }),
        gear(SUISEI_22_634, "Suisei Model 22 (634 Air Group)", C::CbDiveBomber, GearStats {
            anti_air: 2,
            bombing: 11,
            los: 3,
            ..Default::default()
        }),
        gear(
            SUISEI_22_634_SKILLED,
            "Suisei Model 22 (634 Air Group / Skilled)",
            C::CbDiveBomber,
            GearStats {
                anti_air: 3,
                bombing: 12,
                los: 4,
                accuracy: 1,
                ..Default::default()
            },
        ),
    ]
}

struct HullSpec {
    id: u16,
    name: &'static str,
    ship_class: ShipClass,
    ship_type: ShipType,
    kai2: bool,
    slots: &'static [u8],
    hp: (i32, i32),
    firepower: (i32, i32),
    torpedo: (i32, i32),
    anti_air: (i32, i32),
    armor: (i32, i32),
    asw: (i32, i32),
    evasion: (i32, i32),
    los: (i32, i32),
    luck: (i32, i32),
}

impl HullSpec {
    fn build(self) -> MasterShip {
        let stat = |(base, max): (i32, i32)| StatRange::new(base, max);
        let level = |(lv1, lv99): (i32, i32)| LevelRange::new(lv1, lv99);

        MasterShip {
            id: ShipId::new(self.id),
            name: self.name.to_string(),
            ship_class: self.ship_class,
            ship_type: self.ship_type,
            kai2: self.kai2,
            slot_num: self.slots.len(),
            slots: self.slots.to_vec(),
            hp: stat(self.hp),
            firepower: stat(self.firepower),
            torpedo: stat(self.torpedo),
            anti_air: stat(self.anti_air),
            armor: stat(self.armor),
            asw: level(self.asw),
            evasion: level(self.evasion),
            los: level(self.los),
            luck: stat(self.luck),
        }
    }
}

/// Ship hull definitions of the sample catalog.
#[must_use]
pub fn sample_ships() -> Vec<MasterShip> {
    use ids::ship::*;

    let hulls = [
        HullSpec {
            id: MUTSUKI,
            name: "Mutsuki",
            ship_class: ShipClass::Other,
            ship_type: ShipType::DD,
            kai2: false,
            slots: &[0, 0],
            hp: (13, 24),
            firepower: (6, 29),
            torpedo: (18, 59),
            anti_air: (7, 29),
            armor: (5, 18),
            asw: (16, 39),
            evasion: (37, 79),
            los: (4, 17),
            luck: (10, 49),
        },
        HullSpec {
            id: NAGATO,
            name: "Nagato",
            ship_class: ShipClass::Other,
            ship_type: ShipType::BB,
            kai2: false,
            slots: &[3, 3, 3, 3],
            hp: (80, 90),
            firepower: (82, 99),
            torpedo: (0, 0),
            anti_air: (31, 79),
            armor: (75, 89),
            asw: (0, 0),
            evasion: (24, 49),
            los: (12, 39),
            luck: (20, 79),
        },
        HullSpec {
            id: AKAGI,
            name: "Akagi",
            ship_class: ShipClass::Other,
            ship_type: ShipType::CV,
            kai2: false,
            slots: &[18, 18, 27, 10],
            hp: (69, 79),
            firepower: (0, 39),
            torpedo: (0, 0),
            anti_air: (32, 69),
            armor: (28, 59),
            asw: (0, 0),
            evasion: (29, 49),
            los: (44, 69),
            luck: (10, 49),
        },
        HullSpec {
            id: YUUBARI_KAI_NI,
            name: "Yuubari Kai Ni",
            ship_class: ShipClass::Other,
            ship_type: ShipType::CL,
            kai2: true,
            slots: &[2, 2, 2, 2, 0],
            hp: (34, 48),
            firepower: (20, 60),
            torpedo: (24, 70),
            anti_air: (20, 70),
            armor: (20, 55),
            asw: (30, 70),
            evasion: (45, 89),
            los: (12, 45),
            luck: (14, 75),
        },
        HullSpec {
            id: ZARA_DUE,
            name: "Zara due",
            ship_class: ShipClass::ZaraClass,
            ship_type: ShipType::CA,
            kai2: false,
            slots: &[2, 2, 2, 2],
            hp: (58, 71),
            firepower: (52, 88),
            torpedo: (0, 0),
            anti_air: (28, 79),
            armor: (57, 85),
            asw: (0, 0),
            evasion: (33, 67),
            los: (14, 48),
            luck: (10, 60),
        },
        HullSpec {
            id: ISE_KAI_NI,
            name: "Ise Kai Ni",
            ship_class: ShipClass::IseClass,
            ship_type: ShipType::BBV,
            kai2: true,
            slots: &[2, 2, 22, 22, 9],
            hp: (77, 92),
            firepower: (63, 94),
            torpedo: (0, 0),
            anti_air: (55, 99),
            armor: (74, 96),
            asw: (0, 0),
            evasion: (30, 60),
            los: (40, 70),
            luck: (40, 99),
        },
    ];

    hulls.into_iter().map(HullSpec::build).collect()
}

/// Raw data of the sample catalog.
#[must_use]
pub fn sample_catalog_data() -> CatalogData {
    CatalogData {
        gears: sample_gears(),
        ships: sample_ships(),
    }
}

/// Validated sample catalog.
///
/// # Panics
///
/// Panics if the fixture data fails validation.
#[must_use]
pub fn sample_catalog() -> MasterCatalog {
    MasterCatalog::from_data(sample_catalog_data()).expect("sample catalog is valid")
}

/// Sample catalog serialized as RON.
///
/// # Panics
///
/// Panics if serialization fails.
#[must_use]
pub fn sample_catalog_ron() -> String {
    ron::ser::to_string_pretty(&sample_catalog_data(), ron::ser::PrettyConfig::default())
        .expect("sample catalog serializes")
}

/// Fill regular slots in order; `None` leaves a slot empty.
#[must_use]
pub fn loadout(gears: &[Option<u16>]) -> EquipmentState {
    EquipmentKey::REGULAR
        .iter()
        .zip(gears)
        .fold(EquipmentState::default(), |state, (&key, gear)| match gear {
            Some(id) => state.with_gear(key, GearState::new(GearId::new(*id))),
            None => state,
        })
}

/// Ship state with gears in consecutive regular slots.
#[must_use]
pub fn equipped_ship(ship_id: u16, gears: &[u16]) -> ShipState {
    let gears: Vec<_> = gears.iter().copied().map(Some).collect();
    ShipState::new(ShipId::new(ship_id)).with_equipment(loadout(&gears))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_catalog_is_valid() {
        let catalog = sample_catalog();
        assert_eq!(catalog.gear_count(), sample_gears().len());
        assert_eq!(catalog.ship_count(), sample_ships().len());
    }

    #[test]
    fn test_loadout_skips_empty_entries() {
        let state = loadout(&[Some(ids::gear::GUN_46CM_TRIPLE), None, Some(ids::gear::ZUIUN)]);
        assert_eq!(state.gears.len(), 2);
        assert!(state.gears.contains_key(&EquipmentKey::G1));
        assert!(!state.gears.contains_key(&EquipmentKey::G2));
        assert!(state.gears.contains_key(&EquipmentKey::G3));
    }

    #[test]
    fn test_catalog_ron_round_trips() {
        let text = sample_catalog_ron();
        let data: CatalogData = ron::from_str(&text).unwrap();
        assert!(MasterCatalog::from_data(data).is_ok());
    }
}
