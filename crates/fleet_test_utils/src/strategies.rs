//! Proptest strategies for fleet state.
//!
//! These strategies generate random but reproducible user state drawn from
//! the ids of the sample catalog, plus battle context values.

use proptest::prelude::*;

use fleet_core::attack::{AirState, Engagement, Formation};
use fleet_core::equipment::{EquipmentKey, EquipmentState};
use fleet_core::fleet::{FleetState, MAX_FLEET_SIZE};
use fleet_core::gear::{GearState, MAX_EXP};
use fleet_core::master::{GearId, ShipId};
use fleet_core::ship::{Modernization, ShipState, MAX_LEVEL};

use crate::fixtures::{sample_gears, sample_ships};

fn gear_ids() -> Vec<u16> {
    sample_gears().iter().map(|gear| gear.id.0).collect()
}

fn ship_ids() -> Vec<u16> {
    sample_ships().iter().map(|ship| ship.id.0).collect()
}

/// Generate a gear state for a catalog gear, stars possibly out of range.
pub fn arb_gear_state() -> impl Strategy<Value = GearState> {
    (
        proptest::sample::select(gear_ids()),
        0u8..=15,
        0u8..=MAX_EXP,
    )
        .prop_map(|(id, stars, exp)| {
            GearState::new(GearId::new(id))
                .with_stars(stars)
                .with_exp(exp)
        })
}

/// Generate a loadout filling any subset of slots, extra slot included.
pub fn arb_equipment_state() -> impl Strategy<Value = EquipmentState> {
    let keys = [
        EquipmentKey::G1,
        EquipmentKey::G2,
        EquipmentKey::G3,
        EquipmentKey::G4,
        EquipmentKey::G5,
        EquipmentKey::GX,
    ];

    (
        proptest::collection::vec(proptest::option::of(arb_gear_state()), keys.len()),
        proptest::collection::vec(proptest::option::of(0u8..40), keys.len()),
    )
        .prop_map(move |(gears, sizes)| {
            let mut state = EquipmentState::default();
            for ((key, gear), size) in keys.iter().zip(gears).zip(sizes) {
                if let Some(gear) = gear {
                    state = state.with_gear(*key, gear);
                }
                if let Some(size) = size {
                    state = state.with_slot_size(*key, size);
                }
            }
            state
        })
}

/// Generate modernization increments.
///
/// Hp increments occasionally drive the hull's maximum below zero.
pub fn arb_modernization() -> impl Strategy<Value = Modernization> {
    let hp = prop_oneof![4 => 0i32..3, 1 => -300i32..0];
    (hp, 0i32..40, 0i32..60, 0i32..20).prop_map(|(hp, firepower, luck, armor)| {
        Modernization {
            hp,
            firepower,
            luck,
            armor,
            ..Default::default()
        }
    })
}

/// Generate a ship state for a catalog hull.
pub fn arb_ship_state() -> impl Strategy<Value = ShipState> {
    (
        proptest::sample::select(ship_ids()),
        1u16..=MAX_LEVEL,
        proptest::option::of(0u8..=100),
        arb_modernization(),
        arb_equipment_state(),
    )
        .prop_map(|(id, level, morale, modernization, equipment)| {
            let mut state = ShipState::new(ShipId::new(id))
                .with_level(level)
                .with_modernization(modernization)
                .with_equipment(equipment);
            state.morale = morale;
            state
        })
}

/// Generate a fleet with up to [`MAX_FLEET_SIZE`] positions.
pub fn arb_fleet_state() -> impl Strategy<Value = FleetState> {
    proptest::collection::vec(proptest::option::of(arb_ship_state()), 0..=MAX_FLEET_SIZE)
        .prop_map(|ships| FleetState { ships })
}

/// Generate an air state.
pub fn arb_air_state() -> impl Strategy<Value = AirState> {
    prop_oneof![
        Just(AirState::AirSupremacy),
        Just(AirState::AirSuperiority),
        Just(AirState::AirParity),
        Just(AirState::AirDenial),
        Just(AirState::AirIncapability),
    ]
}

/// Generate a formation.
pub fn arb_formation() -> impl Strategy<Value = Formation> {
    prop_oneof![
        Just(Formation::LineAhead),
        Just(Formation::DoubleLine),
        Just(Formation::Diamond),
        Just(Formation::Echelon),
        Just(Formation::LineAbreast),
    ]
}

/// Generate an engagement.
pub fn arb_engagement() -> impl Strategy<Value = Engagement> {
    prop_oneof![
        Just(Engagement::Parallel),
        Just(Engagement::HeadOn),
        Just(Engagement::GreenT),
        Just(Engagement::RedT),
    ]
}
