//! Determinism testing utilities.
//!
//! Provides a harness for verifying that construction and calculation
//! produce value-equal results given identical inputs.
//!
//! # Testing Strategy
//!
//! Every entity and result in `fleet_core` is a pure function of catalog
//! and user state. Sources of non-determinism this harness guards against:
//!
//! - **HashMap iteration order**: catalog lookups are keyed, and anything
//!   user-visible is ordered by key or slot position.
//!
//! - **Hidden counters**: construction must not assign ids or stamp
//!   sequence numbers.
//!
//! - **Thread scheduling**: calculators share one catalog by reference, so
//!   parallel runs must match sequential ones exactly.
//!
//! # Test Levels
//!
//! 1. **Unit tests**: repeated construction of one entity
//! 2. **Property tests**: random states still build identically
//! 3. **Parallel tests**: N scoped threads computing the same breakdown

use std::fmt::Debug;
use std::thread;

/// Result of a repeated-run check.
#[derive(Debug, Clone, PartialEq)]
pub struct DeterminismResult<T> {
    /// Output of every run.
    pub outputs: Vec<T>,
}

impl<T: PartialEq + Debug> DeterminismResult<T> {
    /// Whether all runs produced value-equal outputs.
    #[must_use]
    pub fn is_deterministic(&self) -> bool {
        self.outputs.windows(2).all(|w| w[0] == w[1])
    }

    /// Index of the first run that differs from the first one.
    #[must_use]
    pub fn first_divergence(&self) -> Option<usize> {
        let first = self.outputs.first()?;
        self.outputs.iter().position(|output| output != first)
    }

    /// Assert that every run matched, with a detailed error message.
    ///
    /// # Panics
    ///
    /// Panics if any run produced a different output.
    pub fn assert_deterministic(&self) {
        if let Some(index) = self.first_divergence() {
            panic!(
                "Calculation is non-deterministic!\n\
                 Runs: {}\n\
                 First divergent run: {}\n\
                 Expected: {:?}\n\
                 Got: {:?}",
                self.outputs.len(),
                index,
                self.outputs[0],
                self.outputs[index]
            );
        }
    }
}

/// Run a computation several times and collect every output.
///
/// # Example
///
/// ```ignore
/// use fleet_test_utils::determinism::verify_determinism;
///
/// let result = verify_determinism(5, || factory.create_ship(&state));
/// result.assert_deterministic();
/// ```
pub fn verify_determinism<T, F>(runs: usize, run: F) -> DeterminismResult<T>
where
    F: Fn() -> T,
{
    DeterminismResult {
        outputs: (0..runs).map(|_| run()).collect(),
    }
}

/// Run a computation on N scoped threads and collect every output.
///
/// Scoped threads let `run` borrow the catalog and resolved entities
/// without `'static` bounds.
///
/// # Panics
///
/// Panics if a worker thread panics.
pub fn run_parallel_scoped<T, F>(threads: usize, run: F) -> DeterminismResult<T>
where
    T: Send,
    F: Fn() -> T + Sync,
{
    let outputs = thread::scope(|s| {
        let handles: Vec<_> = (0..threads).map(|_| s.spawn(&run)).collect();
        handles
            .into_iter()
            .map(|h| h.join().expect("worker thread panicked"))
            .collect()
    });

    DeterminismResult { outputs }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{equipped_ship, ids, sample_catalog};
    use fleet_core::attack::shelling::{ShellingCalculator, ShellingPowerParams};
    use fleet_core::attack::AirState;
    use fleet_core::factory::Factory;
    use proptest::prelude::*;

    #[test]
    fn test_verify_determinism_simple() {
        let result = verify_determinism(3, || 42);
        assert!(result.is_deterministic());
        assert_eq!(result.first_divergence(), None);
    }

    #[test]
    fn test_divergence_is_reported() {
        let counter = std::cell::Cell::new(0);
        let result = verify_determinism(3, || {
            counter.set(counter.get() + 1);
            counter.get()
        });
        assert!(!result.is_deterministic());
        assert_eq!(result.first_divergence(), Some(1));
    }

    #[test]
    #[should_panic(expected = "non-deterministic")]
    fn test_assert_deterministic_panics_on_divergence() {
        let counter = std::cell::Cell::new(0);
        verify_determinism(2, || {
            counter.set(counter.get() + 1);
            counter.get()
        })
        .assert_deterministic();
    }

    #[test]
    fn test_ship_construction_is_idempotent() {
        let catalog = sample_catalog();
        let factory = Factory::new(&catalog);
        let state = equipped_ship(
            ids::ship::ISE_KAI_NI,
            &[
                ids::gear::GUN_46CM_TRIPLE,
                ids::gear::GUN_46CM_TRIPLE,
                ids::gear::ZUIUN_634,
                ids::gear::ZUIUN,
            ],
        );

        verify_determinism(5, || factory.create_ship(&state)).assert_deterministic();
    }

    #[test]
    fn test_parallel_breakdowns_match() {
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
        let ship = factory.create_ship(&state).unwrap();

        let result = run_parallel_scoped(8, || {
            let calculator = ShellingCalculator::new(&ship);
            let ability = calculator.shelling_ability(20.0, true, AirState::AirSupremacy);
            let power = calculator.power(&ShellingPowerParams {
                target_is_armored: true,
                ..Default::default()
            });
            (ability, power)
        });

        assert_eq!(result.outputs.len(), 8);
        result.assert_deterministic();
    }

    proptest! {
        /// Any level, morale and damage produce the same ship on every build.
        #[test]
        fn prop_ship_state_builds_identically(
            level in 0u16..300,
            morale in 0u8..=100,
            hp in -10i32..100,
        ) {
            let catalog = sample_catalog();
            let factory = Factory::new(&catalog);
            let state = equipped_ship(ids::ship::NAGATO, &[ids::gear::GUN_35_6CM_TWIN])
                .with_level(level)
                .with_morale(morale)
                .with_current_hp(hp);

            let result = verify_determinism(2, || factory.create_ship(&state));
            prop_assert!(result.is_deterministic());
        }
    }
}
