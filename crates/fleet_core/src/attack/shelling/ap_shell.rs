//! Armor-piercing shell modifiers against armored targets.

use serde::{Deserialize, Serialize};

/// Power and accuracy multipliers from an AP shell combination.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ApShellModifiers {
    /// Post-cap power multiplier.
    pub power: f64,
    /// Accuracy multiplier.
    pub accuracy: f64,
}

impl Default for ApShellModifiers {
    fn default() -> Self {
        Self {
            power: 1.0,
            accuracy: 1.0,
        }
    }
}

impl ApShellModifiers {
    /// Modifiers for the given loadout facts.
    ///
    /// A main gun and an AP shell are both required; secondary guns and
    /// radars then raise the bonus.
    #[must_use]
    pub fn new(
        has_main_gun: bool,
        has_ap_shell: bool,
        has_secondary_gun: bool,
        has_radar: bool,
    ) -> Self {
        if !(has_main_gun && has_ap_shell) {
            return Self::default();
        }

        let (power, accuracy) = match (has_secondary_gun, has_radar) {
            (true, true) => (1.15, 1.3),
            (true, false) => (1.15, 1.2),
            (false, true) => (1.1, 1.25),
            (false, false) => (1.08, 1.1),
        };

        Self { power, accuracy }
    }
}
