//! Day shelling.
//!
//! [`ShellingCalculator`] is the entry point: it derives special attack
//! facts from a ship's equipment, folds trigger rates through a
//! [`RateMap`](crate::rate_map::RateMap), and computes power and accuracy
//! breakdowns for a caller-chosen attack.

mod ap_shell;
mod calculator;
mod special_attack;

pub use ap_shell::ApShellModifiers;
pub use calculator::{
    ShellingAbility, ShellingAccuracy, ShellingAccuracyParams, ShellingCalculator, ShellingPower,
    ShellingPowerParams, SHELLING_POWER_CAP,
};
pub use special_attack::{
    calc_observation_term, DaySpecialAttack, DaySpecialAttackFacts, DaySpecialAttackType,
    ObservationTermParams,
};
