//! Numeric helpers for combat formulas.
//!
//! Combat formulas truncate at fixed points. Keeping those steps here means
//! every calculator floors and caps the same way.

/// Apply a soft cap: values above `cap` grow with the square root of the excess.
#[must_use]
pub fn soft_cap(value: f64, cap: f64) -> f64 {
    if value > cap {
        cap + (value - cap).sqrt()
    } else {
        value
    }
}

/// Multiply and truncate toward negative infinity.
#[must_use]
pub fn floor_mul(value: f64, modifier: f64) -> f64 {
    (value * modifier).floor()
}
