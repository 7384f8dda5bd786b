//! Property tests over random loadouts and battle contexts.

use fleet_core::attack::shelling::{
    ShellingAccuracyParams, ShellingCalculator, ShellingPowerParams, SHELLING_POWER_CAP,
};
use fleet_core::factory::Factory;
use fleet_test_utils::fixtures::sample_catalog;
use fleet_test_utils::strategies::{
    arb_air_state, arb_engagement, arb_fleet_state, arb_formation, arb_ship_state,
};
use proptest::prelude::*;

const EPSILON: f64 = 1e-9;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Trigger rates and the complement always form a distribution.
    #[test]
    fn prop_rate_map_is_a_distribution(
        fleet in arb_fleet_state(),
        air_state in arb_air_state(),
        is_main_fleet in any::<bool>(),
    ) {
        let catalog = sample_catalog();
        let fleet = Factory::new(&catalog).create_fleet(&fleet);

        for ability in fleet.shelling_abilities(air_state, is_main_fleet).into_iter().flatten() {
            let rates = &ability.rate_map;
            prop_assert!(rates.complement() >= 0.0);
            prop_assert!((rates.total() + rates.complement() - 1.0).abs() < EPSILON);
            prop_assert_eq!(ability.can_special_attack, !rates.is_empty());
            for (_, rate) in rates.iter() {
                prop_assert!((0.0..=1.0).contains(&rate));
            }
        }
    }

    /// Capped power never exceeds the soft cap curve and the flags agree.
    #[test]
    fn prop_power_cap_is_consistent(
        state in arb_ship_state(),
        formation in arb_formation(),
        engagement in arb_engagement(),
        fleet_factor in 0.0f64..60.0,
        target_is_armored in any::<bool>(),
    ) {
        let catalog = sample_catalog();
        let Some(ship) = Factory::new(&catalog).create_ship(&state) else {
            return Ok(());
        };

        let params = ShellingPowerParams {
            fleet_factor,
            target_is_armored,
            ..ShellingPowerParams::from_context(formation, engagement, None)
        };
        let power = ShellingCalculator::new(&ship).power(&params).power;

        prop_assert_eq!(power.is_capped, power.precap > SHELLING_POWER_CAP);
        if power.is_capped {
            let curve = SHELLING_POWER_CAP + (power.precap - SHELLING_POWER_CAP).sqrt();
            prop_assert!((power.capped - curve).abs() < EPSILON);
        } else {
            prop_assert_eq!(power.capped, power.precap);
        }
        prop_assert!(power.value >= 0.0);
        prop_assert_eq!(power.value, power.value.floor());
    }

    /// Accuracy is a non-negative integer and special attacks never lower it.
    #[test]
    fn prop_accuracy_is_floored(
        state in arb_ship_state(),
        air_state in arb_air_state(),
    ) {
        let catalog = sample_catalog();
        let Some(ship) = Factory::new(&catalog).create_ship(&state) else {
            return Ok(());
        };
        let calculator = ShellingCalculator::new(&ship);

        let regular = calculator.accuracy(&ShellingAccuracyParams::default());
        prop_assert_eq!(regular.value, regular.value.floor());
        prop_assert_eq!(regular.special_attack_modifier, 1.0);
        prop_assert_eq!(regular.ap_shell_modifier, 1.0);

        let ability = calculator.shelling_ability(0.0, false, air_state);
        for (attack, _) in ability.rate_map.iter() {
            let special = calculator.accuracy(&ShellingAccuracyParams {
                special_attack: Some(*attack),
                ..Default::default()
            });
            prop_assert!(special.value >= regular.value);
        }
    }

    /// Building the same state twice yields equal ships.
    #[test]
    fn prop_factory_is_idempotent(state in arb_ship_state()) {
        let catalog = sample_catalog();
        let factory = Factory::new(&catalog);
        prop_assert_eq!(factory.create_ship(&state), factory.create_ship(&state));
    }
}
