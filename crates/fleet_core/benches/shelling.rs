//! Shelling benchmarks for fleet_core.
//!
//! Run with: `cargo bench -p fleet_core`

// Benchmark binaries don't need docs on macro-generated functions
#![allow(missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fleet_core::attack::shelling::{ShellingCalculator, ShellingPowerParams};
use fleet_core::attack::AirState;
use fleet_core::factory::Factory;
use fleet_core::fleet::FleetState;
use fleet_test_utils::fixtures::{equipped_ship, ids, sample_catalog};

/// Construction and shelling breakdowns for a battleship loadout.
pub fn shelling_benchmark(c: &mut Criterion) {
    let catalog = sample_catalog();
    let factory = Factory::new(&catalog);
    let state = equipped_ship(
        ids::ship::NAGATO,
        &[
            ids::gear::GUN_46CM_TRIPLE,
            ids::gear::GUN_46CM_TRIPLE,
            ids::gear::TYPE_91_AP_SHELL,
            ids::gear::TYPE_0_OBSERVATION_SEAPLANE,
        ],
    );
    let Some(ship) = factory.create_ship(&state) else {
        return;
    };

    c.bench_function("create_ship", |b| {
        b.iter(|| factory.create_ship(black_box(&state)))
    });

    c.bench_function("shelling_ability", |b| {
        let calculator = ShellingCalculator::new(&ship);
        b.iter(|| calculator.shelling_ability(black_box(20.0), true, AirState::AirSupremacy))
    });

    c.bench_function("shelling_power", |b| {
        let calculator = ShellingCalculator::new(&ship);
        let params = ShellingPowerParams {
            target_is_armored: true,
            ..Default::default()
        };
        b.iter(|| calculator.power(black_box(&params)))
    });
}

/// Whole-fleet special attack rates.
pub fn fleet_benchmark(c: &mut Criterion) {
    let catalog = sample_catalog();
    let factory = Factory::new(&catalog);
    let battleship = equipped_ship(
        ids::ship::ISE_KAI_NI,
        &[
            ids::gear::GUN_46CM_TRIPLE,
            ids::gear::GUN_46CM_TRIPLE,
            ids::gear::ZUIUN,
            ids::gear::ZUIUN_634,
        ],
    );
    let carrier = equipped_ship(
        ids::ship::AKAGI,
        &[
            ids::gear::TYPE_0_FIGHTER_21,
            ids::gear::SUISEI,
            ids::gear::TYPE_97_TORPEDO_BOMBER,
            ids::gear::SUISEI_22_634,
        ],
    );
    let state = (0..3).fold(FleetState::default(), |fleet, _| {
        fleet.with_ship(battleship.clone()).with_ship(carrier.clone())
    });
    let fleet = factory.create_fleet(&state);

    c.bench_function("fleet_shelling_abilities", |b| {
        b.iter(|| fleet.shelling_abilities(black_box(AirState::AirSupremacy), true))
    });
}

criterion_group!(benches, shelling_benchmark, fleet_benchmark);
criterion_main!(benches);
