//! Priority-ordered probability distribution over mutually exclusive outcomes.
//!
//! Outcomes are checked in insertion order: an outcome only gets the chance
//! that every earlier outcome failed to trigger. Recording a raw rate `r`
//! stores `complement * r` and shrinks the complement by the same amount, so
//! `complement + sum(rates) == 1` holds after every insertion.

use serde::{Deserialize, Serialize};

/// Ordered `(outcome, probability)` pairs plus the probability that none fired.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateMap<T> {
    entries: Vec<(T, f64)>,
    complement: f64,
}

impl<T> Default for RateMap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> RateMap<T> {
    /// Create an empty map with complement 1.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
            complement: 1.0,
        }
    }

    /// Record an outcome that triggers with `raw_rate` when reached.
    ///
    /// # Panics
    ///
    /// Panics if `raw_rate` is outside `[0, 1]`. Callers clamp before
    /// recording; an out-of-range rate is a logic error upstream.
    pub fn set(&mut self, outcome: T, raw_rate: f64) {
        assert!(
            (0.0..=1.0).contains(&raw_rate),
            "raw rate must be within [0, 1], got {raw_rate}"
        );

        let actual = self.complement * raw_rate;
        self.complement -= actual;
        self.entries.push((outcome, actual));
    }

    /// Probability that no recorded outcome fires.
    #[must_use]
    pub fn complement(&self) -> f64 {
        self.complement
    }

    /// Sum of recorded probabilities.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.entries.iter().map(|(_, rate)| rate).sum()
    }

    /// Recorded outcomes with their probabilities, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&T, f64)> {
        self.entries.iter().map(|(outcome, rate)| (outcome, *rate))
    }

    /// Number of recorded outcomes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Map a uniform roll in `[0, 1)` onto an outcome.
    ///
    /// Outcomes occupy consecutive intervals in insertion order; a roll past
    /// the last interval lands in the complement and yields `None`.
    #[must_use]
    pub fn choose(&self, roll: f64) -> Option<&T> {
        let mut upper = 0.0;
        for (outcome, rate) in &self.entries {
            upper += rate;
            if roll < upper {
                return Some(outcome);
            }
        }
        None
    }
}

impl<T: PartialEq> RateMap<T> {
    /// Probability recorded for `outcome`, if present.
    #[must_use]
    pub fn get(&self, outcome: &T) -> Option<f64> {
        self.entries
            .iter()
            .find(|(recorded, _)| recorded == outcome)
            .map(|(_, rate)| *rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_empty_map() {
        let map: RateMap<&str> = RateMap::new();
        assert!(map.is_empty());
        assert_eq!(map.complement(), 1.0);
        assert_eq!(map.total(), 0.0);
        assert_eq!(map.choose(0.0), None);
    }

    #[test]
    fn test_later_outcomes_get_the_remainder() {
        let mut map = RateMap::new();
        map.set("a", 0.5);
        map.set("b", 0.5);
        map.set("c", 1.0);

        assert_eq!(map.get(&"a"), Some(0.5));
        assert_eq!(map.get(&"b"), Some(0.25));
        assert_eq!(map.get(&"c"), Some(0.25));
        assert_eq!(map.get(&"d"), None);
        assert_eq!(map.complement(), 0.0);
    }

    #[test]
    fn test_iteration_keeps_insertion_order() {
        let mut map = RateMap::new();
        map.set(3, 0.1);
        map.set(1, 0.2);
        map.set(2, 0.3);

        let order: Vec<_> = map.iter().map(|(outcome, _)| *outcome).collect();
        assert_eq!(order, vec![3, 1, 2]);
        assert_eq!(map.len(), 3);
    }

    #[test]
    fn test_choose_walks_intervals() {
        let mut map = RateMap::new();
        map.set("a", 0.5);
        map.set("b", 0.5);

        assert_eq!(map.choose(0.0), Some(&"a"));
        assert_eq!(map.choose(0.49), Some(&"a"));
        assert_eq!(map.choose(0.5), Some(&"b"));
        assert_eq!(map.choose(0.74), Some(&"b"));
        assert_eq!(map.choose(0.75), None);
    }

    #[test]
    #[should_panic(expected = "raw rate must be within [0, 1]")]
    fn test_rate_above_one_panics() {
        let mut map = RateMap::new();
        map.set("a", 1.5);
    }

    #[test]
    #[should_panic(expected = "raw rate must be within [0, 1]")]
    fn test_negative_rate_panics() {
        let mut map = RateMap::new();
        map.set("a", -0.1);
    }

    proptest! {
        /// Complement and recorded rates always partition probability 1.
        #[test]
        fn prop_rates_and_complement_sum_to_one(
            rates in proptest::collection::vec(0.0f64..=1.0, 0..12),
        ) {
            let mut map = RateMap::new();
            for (i, rate) in rates.iter().enumerate() {
                map.set(i, *rate);
            }

            prop_assert!(map.complement() >= 0.0);
            prop_assert!((map.complement() + map.total() - 1.0).abs() < EPSILON);
            for (_, rate) in map.iter() {
                prop_assert!(rate >= 0.0);
            }
        }
    }
}
