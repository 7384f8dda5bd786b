//! Battle context shared by every attack phase.

use serde::{Deserialize, Serialize};

/// Result of the aerial combat phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AirState {
    /// AS+.
    AirSupremacy,
    /// AS.
    AirSuperiority,
    /// AP.
    #[default]
    AirParity,
    /// AD.
    AirDenial,
    /// AI.
    AirIncapability,
}

/// Fleet formation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Formation {
    /// Single column.
    #[default]
    LineAhead,
    /// Two columns.
    DoubleLine,
    /// Ring around the flagship.
    Diamond,
    /// Staggered column.
    Echelon,
    /// Single row.
    LineAbreast,
}

impl Formation {
    /// Day shelling power multiplier.
    #[must_use]
    pub const fn shelling_power_modifier(self) -> f64 {
        match self {
            Self::LineAhead => 1.0,
            Self::DoubleLine => 0.8,
            Self::Diamond => 0.7,
            Self::Echelon => 0.75,
            Self::LineAbreast => 0.6,
        }
    }

    /// Day shelling accuracy multiplier.
    #[must_use]
    pub const fn shelling_accuracy_modifier(self) -> f64 {
        match self {
            Self::LineAhead | Self::Diamond => 1.0,
            Self::DoubleLine | Self::Echelon | Self::LineAbreast => 1.2,
        }
    }
}

/// Relative heading of the two fleets at contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Engagement {
    /// Parallel engagement.
    #[default]
    Parallel,
    /// Head-on engagement.
    HeadOn,
    /// Crossing the T in our favour.
    GreenT,
    /// Crossing the T against us.
    RedT,
}

impl Engagement {
    /// Power multiplier.
    #[must_use]
    pub const fn modifier(self) -> f64 {
        match self {
            Self::Parallel => 1.0,
            Self::HeadOn => 0.8,
            Self::GreenT => 1.2,
            Self::RedT => 0.6,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formation_modifiers() {
        assert_eq!(Formation::LineAhead.shelling_power_modifier(), 1.0);
        assert_eq!(Formation::Echelon.shelling_power_modifier(), 0.75);
        assert_eq!(Formation::LineAbreast.shelling_accuracy_modifier(), 1.2);
        assert_eq!(Formation::Diamond.shelling_accuracy_modifier(), 1.0);
    }

    #[test]
    fn test_engagement_modifiers() {
        assert_eq!(Engagement::default().modifier(), 1.0);
        assert_eq!(Engagement::RedT.modifier(), 0.6);
    }
}
