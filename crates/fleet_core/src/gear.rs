//! Resolved gear instances.

use std::ops::Sub;

use serde::{Deserialize, Serialize};

use crate::master::{GearAttrs, GearCategory, GearId, GearStats, MasterGear};

pub use crate::master::MAX_STARS;

/// Maximum aircraft proficiency experience.
pub const MAX_EXP: u8 = 120;

/// Proficiency experience thresholds for ace levels 0..=7.
const ACE_THRESHOLDS: [u8; 8] = [0, 10, 25, 40, 55, 70, 85, 100];

/// User-chosen gear instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GearState {
    /// Gear definition id.
    pub gear_id: GearId,
    /// Improvement level.
    #[serde(default)]
    pub stars: u8,
    /// Aircraft proficiency experience.
    #[serde(default)]
    pub exp: u8,
}

impl GearState {
    /// Create an unimproved gear state.
    #[must_use]
    pub const fn new(gear_id: GearId) -> Self {
        Self {
            gear_id,
            stars: 0,
            exp: 0,
        }
    }

    /// Builder method to set the improvement level.
    #[must_use]
    pub const fn with_stars(mut self, stars: u8) -> Self {
        self.stars = stars;
        self
    }

    /// Builder method to set proficiency experience.
    #[must_use]
    pub const fn with_exp(mut self, exp: u8) -> Self {
        self.exp = exp;
        self
    }
}

/// Stat deltas granted by gear improvement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ImprovementBonuses {
    /// Additive day shelling power.
    pub shelling_power: f64,
    /// Additive day shelling accuracy.
    pub shelling_accuracy: f64,
}

impl Sub for ImprovementBonuses {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            shelling_power: self.shelling_power - rhs.shelling_power,
            shelling_accuracy: self.shelling_accuracy - rhs.shelling_accuracy,
        }
    }
}

/// Gear instance bound to its definition and derived bonuses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gear {
    master: MasterGear,
    attrs: GearAttrs,
    stars: u8,
    exp: u8,
    improvement_bonuses: ImprovementBonuses,
}

impl Gear {
    /// Resolve a gear state against its definition.
    ///
    /// Stars are clamped to [`MAX_STARS`] and experience to [`MAX_EXP`].
    #[must_use]
    pub fn new(state: &GearState, master: &MasterGear) -> Self {
        let stars = state.stars.min(MAX_STARS);
        Self {
            attrs: master.attrs(),
            improvement_bonuses: master.improvement_bonuses(stars),
            master: master.clone(),
            stars,
            exp: state.exp.min(MAX_EXP),
        }
    }

    /// Gear definition id.
    #[must_use]
    pub fn gear_id(&self) -> GearId {
        self.master.id
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.master.name
    }

    /// Equipment category.
    #[must_use]
    pub fn category(&self) -> GearCategory {
        self.master.category
    }

    /// Capability tags.
    #[must_use]
    pub fn attrs(&self) -> GearAttrs {
        self.attrs
    }

    /// Check if this gear carries every tag in `attrs`.
    #[must_use]
    pub fn is(&self, attrs: GearAttrs) -> bool {
        self.attrs.contains(attrs)
    }

    /// Check if this gear's id is one of `ids`.
    #[must_use]
    pub fn id_in(&self, ids: &[GearId]) -> bool {
        ids.contains(&self.master.id)
    }

    /// Flat stat bonuses.
    #[must_use]
    pub fn stats(&self) -> &GearStats {
        &self.master.stats
    }

    /// The definition this gear was resolved from.
    #[must_use]
    pub fn master(&self) -> &MasterGear {
        &self.master
    }

    /// Improvement level.
    #[must_use]
    pub fn stars(&self) -> u8 {
        self.stars
    }

    /// Proficiency experience.
    #[must_use]
    pub fn exp(&self) -> u8 {
        self.exp
    }

    /// Ace level (0..=7) derived from proficiency experience.
    #[must_use]
    pub fn ace(&self) -> u8 {
        ACE_THRESHOLDS
            .iter()
            .rposition(|&threshold| self.exp >= threshold)
            .unwrap_or(0) as u8
    }

    /// Bonuses at the current improvement level.
    #[must_use]
    pub fn improvement_bonuses(&self) -> &ImprovementBonuses {
        &self.improvement_bonuses
    }

    /// Bonus deltas the next improvement step would grant.
    ///
    /// Returns `None` once the gear is fully improved.
    #[must_use]
    pub fn next_improvement_bonuses(&self) -> Option<ImprovementBonuses> {
        if self.stars >= MAX_STARS {
            return None;
        }

        let next = self.master.improvement_bonuses(self.stars + 1);
        Some(next - self.improvement_bonuses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn main_gun() -> MasterGear {
        MasterGear::new(GearId::new(9), "46cm", GearCategory::LargeCaliberMainGun).with_stats(
            GearStats {
                firepower: 26,
                anti_air: 4,
                ..Default::default()
            },
        )
    }

    #[test]
    fn test_gear_copies_master_fields() {
        let master = main_gun();
        let gear = Gear::new(&GearState::new(master.id), &master);

        assert_eq!(gear.gear_id(), master.id);
        assert_eq!(gear.master(), &master);
        assert_eq!(gear.stats().firepower, 26);
        assert!(gear.is(GearAttrs::MAIN_GUN));
        assert_eq!(gear.improvement_bonuses(), &ImprovementBonuses::default());
    }

    #[test]
    fn test_stars_and_exp_are_clamped() {
        let master = main_gun();
        let state = GearState::new(master.id).with_stars(99).with_exp(255);
        let gear = Gear::new(&state, &master);

        assert_eq!(gear.stars(), MAX_STARS);
        assert_eq!(gear.exp(), MAX_EXP);
        assert_eq!(
            gear.improvement_bonuses().shelling_power,
            1.5 * 10f64.sqrt()
        );
    }

    #[test]
    fn test_ace_levels() {
        let master = main_gun();
        let ace = |exp| Gear::new(&GearState::new(master.id).with_exp(exp), &master).ace();

        assert_eq!(ace(0), 0);
        assert_eq!(ace(9), 0);
        assert_eq!(ace(10), 1);
        assert_eq!(ace(69), 4);
        assert_eq!(ace(100), 7);
        assert_eq!(ace(120), 7);
    }

    #[test]
    fn test_next_improvement_bonuses() {
        let master = main_gun();
        let gear = Gear::new(&GearState::new(master.id).with_stars(3), &master);

        let delta = gear.next_improvement_bonuses().unwrap();
        assert!((delta.shelling_power - 1.5 * (2.0 - 3f64.sqrt())).abs() < 1e-12);
        assert!((delta.shelling_accuracy - (2.0 - 3f64.sqrt())).abs() < 1e-12);

        let maxed = Gear::new(&GearState::new(master.id).with_stars(MAX_STARS), &master);
        assert!(maxed.next_improvement_bonuses().is_none());
    }
}
