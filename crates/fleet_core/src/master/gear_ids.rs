//! Well-known gear ids referenced by combat rules.

use super::GearId;

/// 14cm single gun.
pub const GUN_14CM_SINGLE: GearId = GearId::new(4);
/// 15.2cm single gun.
pub const GUN_15_2CM_SINGLE: GearId = GearId::new(11);
/// 15.2cm twin gun.
pub const GUN_15_2CM_TWIN: GearId = GearId::new(65);
/// 14cm twin gun.
pub const GUN_14CM_TWIN: GearId = GearId::new(119);
/// 15.2cm twin gun kai.
pub const GUN_15_2CM_TWIN_KAI: GearId = GearId::new(139);
/// 203mm/53 twin gun.
pub const GUN_203MM_53_TWIN: GearId = GearId::new(162);

/// Light cruiser single-mount guns counted by the cruiser fit bonus.
pub const LIGHT_CRUISER_SINGLE_GUNS: [GearId; 2] = [GUN_14CM_SINGLE, GUN_15_2CM_SINGLE];

/// Light cruiser twin-mount guns counted by the cruiser fit bonus.
pub const LIGHT_CRUISER_TWIN_GUNS: [GearId; 3] =
    [GUN_15_2CM_TWIN, GUN_14CM_TWIN, GUN_15_2CM_TWIN_KAI];

/// Zuiun family seaplane bombers.
pub const ZUIUN_FAMILY: [GearId; 8] = [
    GearId::new(26),  // Zuiun
    GearId::new(79),  // Zuiun (634 Air Group)
    GearId::new(80),  // Zuiun Model 12
    GearId::new(81),  // Zuiun Model 12 (634 Air Group)
    GearId::new(207), // Zuiun (631 Air Group)
    GearId::new(237), // Zuiun (634 Air Group / Skilled)
    GearId::new(322), // Zuiun Kai Ni (634 Air Group)
    GearId::new(323), // Zuiun Kai Ni (634 Air Group / Skilled)
];

/// Suisei variants flown by the 634 Air Group.
pub const SUISEI_634_FAMILY: [GearId; 3] = [
    GearId::new(291), // Suisei Model 22 (634 Air Group)
    GearId::new(292), // Suisei Model 22 (634 Air Group / Skilled)
    GearId::new(319), // Suisei Model 12 (634 Air Group w/Type 3 Cluster Bombs)
];
