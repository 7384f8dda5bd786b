//! Phase-independent attack power pipeline.
//!
//! Every attack phase feeds the same sequence: basic power, optional carrier
//! aircraft term, pre-cap multiplier and bonus, soft cap, post-cap floor,
//! armor-piercing shell multiplier and finally the special-attack multiplier.

use serde::{Deserialize, Serialize};

use crate::math::{floor_mul, soft_cap};

/// Inputs to [`AttackPowerParams::calc`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AttackPowerParams {
    /// Power before any modifier.
    pub basic: f64,
    /// Aircraft power for carrier-style attacks.
    pub air_power: Option<f64>,
    /// Soft cap threshold.
    pub cap: f64,
    /// Combined pre-cap multiplier.
    pub precap_modifier: f64,
    /// Additive pre-cap bonus, applied after the multiplier.
    pub precap_bonus: f64,
    /// Armor-piercing shell multiplier, when it applies to the target.
    pub ap_shell_modifier: Option<f64>,
    /// Multiplier of the chosen special attack.
    pub special_attack_modifier: f64,
}

impl Default for AttackPowerParams {
    fn default() -> Self {
        Self {
            basic: 0.0,
            air_power: None,
            cap: f64::MAX,
            precap_modifier: 1.0,
            precap_bonus: 0.0,
            ap_shell_modifier: None,
            special_attack_modifier: 1.0,
        }
    }
}

/// Attack power with the intermediate values used to reach it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AttackPower {
    /// Power before any modifier.
    pub basic: f64,
    /// Power after pre-cap modifiers.
    pub precap: f64,
    /// Whether the soft cap kicked in.
    pub is_capped: bool,
    /// Power after the soft cap.
    pub capped: f64,
    /// Final power.
    pub value: f64,
}

impl AttackPowerParams {
    /// Run the pipeline.
    #[must_use]
    pub fn calc(&self) -> AttackPower {
        let mut precap = self.basic;
        if let Some(air_power) = self.air_power {
            precap = ((precap + air_power) * 1.5).floor() + 25.0;
        }
        precap = precap * self.precap_modifier + self.precap_bonus;

        let is_capped = precap > self.cap;
        let capped = soft_cap(precap, self.cap);

        let mut value = capped.floor();
        if let Some(ap_shell_modifier) = self.ap_shell_modifier {
            value = floor_mul(value, ap_shell_modifier);
        }
        value = floor_mul(value, self.special_attack_modifier);

        AttackPower {
            basic: self.basic,
            precap,
            is_capped,
            capped,
            value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_modifiers_keep_basic() {
        let power = AttackPowerParams {
            basic: 123.0,
            cap: 180.0,
            ..Default::default()
        }
        .calc();

        assert_eq!(power.precap, 123.0);
        assert!(!power.is_capped);
        assert_eq!(power.value, 123.0);
    }

    #[test]
    fn test_soft_cap_then_postcap_modifiers() {
        let power = AttackPowerParams {
            basic: 200.0,
            cap: 180.0,
            ap_shell_modifier: Some(1.08),
            special_attack_modifier: 1.5,
            ..Default::default()
        }
        .calc();

        assert!(power.is_capped);
        assert_eq!(power.capped, 180.0 + 20f64.sqrt());
        // floor(184.47) = 184, floor(184 * 1.08) = 198, floor(198 * 1.5) = 297
        assert_eq!(power.value, 297.0);
    }

    #[test]
    fn test_air_power_is_folded_before_precap_modifiers() {
        let power = AttackPowerParams {
            basic: 60.0,
            air_power: Some(34.0),
            cap: 180.0,
            precap_modifier: 0.8,
            precap_bonus: 1.0,
            ..Default::default()
        }
        .calc();

        // floor((60 + 34) * 1.5) + 25 = 166, 166 * 0.8 + 1 = 133.8
        assert!((power.precap - 133.8).abs() < 1e-9);
        assert_eq!(power.value, 133.0);
    }
}
