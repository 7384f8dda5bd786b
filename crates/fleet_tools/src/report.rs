//! Shelling breakdown reports.
//!
//! A report evaluates one ship in one battle context: the special attack
//! distribution, then power and accuracy for the regular attack and for
//! every possible special attack.

use fleet_core::attack::shelling::{
    DaySpecialAttack, DaySpecialAttackType, ShellingAccuracy, ShellingAccuracyParams,
    ShellingCalculator, ShellingPower, ShellingPowerParams,
};
use fleet_core::attack::{AirState, Engagement, Formation};
use fleet_core::equipment::EquipmentKey;
use fleet_core::master::{GearAttrs, GearId, ShipId};
use fleet_core::ship::Ship;
use serde::{Deserialize, Serialize};

/// Battle context a report is evaluated in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BattleContext {
    /// Aerial combat result.
    pub air_state: AirState,
    /// Own formation.
    pub formation: Formation,
    /// Engagement form.
    pub engagement: Engagement,
    /// Fleet LoS modifier of the ship's fleet.
    pub fleet_los_modifier: f64,
    /// The ship is the main fleet's flagship.
    pub is_main_flagship: bool,
    /// Target carries armor that AP shells penetrate.
    pub target_is_armored: bool,
    /// Target is a land installation.
    pub target_is_installation: bool,
    /// Fit gun accuracy bonus for special attacks, looked up by the caller.
    #[serde(default)]
    pub fit_gun_bonus: f64,
}

impl Default for BattleContext {
    fn default() -> Self {
        Self {
            air_state: AirState::AirSupremacy,
            formation: Formation::default(),
            engagement: Engagement::default(),
            fleet_los_modifier: 0.0,
            is_main_flagship: false,
            target_is_armored: false,
            target_is_installation: false,
            fit_gun_bonus: 0.0,
        }
    }
}

/// Power and accuracy of one attack kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttackBreakdown {
    /// Special attack kind, `None` for the regular attack.
    pub kind: Option<DaySpecialAttackType>,
    /// Probability of this attack being chosen.
    pub rate: f64,
    /// Power breakdown.
    pub power: ShellingPower,
    /// Accuracy breakdown.
    pub accuracy: ShellingAccuracy,
}

/// One equipped slot as shown in a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotReport {
    /// Slot position.
    pub key: EquipmentKey,
    /// Equipped gear id.
    pub gear_id: GearId,
    /// Gear name.
    pub name: String,
    /// Improvement level.
    pub stars: u8,
    /// Ace level, aircraft only.
    pub ace: Option<u8>,
    /// Current aircraft slot size.
    pub slot_size: u8,
}

/// Full shelling report for one ship.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShellingReport {
    /// Ship id.
    pub ship_id: ShipId,
    /// Ship name.
    pub name: String,
    /// Context the report was evaluated in.
    pub context: BattleContext,
    /// Equipped slots in key order.
    pub loadout: Vec<SlotReport>,
    /// Observation term.
    pub observation_term: f64,
    /// Special attacks first in priority order, then the regular attack.
    pub attacks: Vec<AttackBreakdown>,
    /// Rate-weighted mean of the final power values.
    pub expected_power: f64,
}

impl ShellingReport {
    /// The regular attack breakdown.
    #[must_use]
    pub fn regular(&self) -> Option<&AttackBreakdown> {
        self.attacks.iter().find(|attack| attack.kind.is_none())
    }
}

fn loadout(ship: &Ship) -> Vec<SlotReport> {
    let equipment = ship.equipment();
    equipment
        .keys()
        .filter_map(|key| {
            let item = equipment.get(key)?;
            let gear = item.gear.as_ref()?;
            Some(SlotReport {
                key,
                gear_id: gear.gear_id(),
                name: gear.master().name.clone(),
                stars: gear.stars(),
                ace: gear.is(GearAttrs::AIRCRAFT).then(|| gear.ace()),
                slot_size: item.current_slot_size(),
            })
        })
        .collect()
}

fn breakdown(
    calculator: &ShellingCalculator<'_>,
    context: &BattleContext,
    special_attack: Option<DaySpecialAttack>,
    rate: f64,
) -> AttackBreakdown {
    let power = calculator.power(&ShellingPowerParams {
        target_is_armored: context.target_is_armored,
        target_is_installation: context.target_is_installation,
        ..ShellingPowerParams::from_context(
            context.formation,
            context.engagement,
            special_attack.as_ref(),
        )
    });
    let accuracy = calculator.accuracy(&ShellingAccuracyParams {
        formation_modifier: context.formation.shelling_accuracy_modifier(),
        target_is_armored: context.target_is_armored,
        special_attack,
        fit_gun_bonus: context.fit_gun_bonus,
        ..Default::default()
    });

    AttackBreakdown {
        kind: special_attack.map(|attack| attack.kind),
        rate,
        power,
        accuracy,
    }
}

/// Evaluate a ship in a battle context.
#[must_use]
pub fn shelling_report(ship: &Ship, context: &BattleContext) -> ShellingReport {
    let calculator = ShellingCalculator::new(ship);
    let ability = calculator.shelling_ability(
        context.fleet_los_modifier,
        context.is_main_flagship,
        context.air_state,
    );

    let mut attacks: Vec<AttackBreakdown> = ability
        .rate_map
        .iter()
        .map(|(attack, rate)| breakdown(&calculator, context, Some(*attack), rate))
        .collect();
    attacks.push(breakdown(
        &calculator,
        context,
        None,
        ability.rate_map.complement(),
    ));

    let expected_power = attacks
        .iter()
        .map(|attack| attack.rate * attack.power.value())
        .sum();

    ShellingReport {
        ship_id: ship.ship_id(),
        name: ship.name().to_string(),
        context: *context,
        loadout: loadout(ship),
        observation_term: ability.observation_term,
        attacks,
        expected_power,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fleet_core::equipment::EquipmentState;
    use fleet_core::factory::Factory;
    use fleet_core::gear::GearState;
    use fleet_core::ship::ShipState;
    use fleet_test_utils::fixtures::{equipped_ship, ids, sample_catalog};

    #[test]
    fn test_regular_only_report() {
        let catalog = sample_catalog();
        let state = equipped_ship(ids::ship::MUTSUKI, &[ids::gear::GUN_12_7CM_TWIN]);
        let ship = Factory::new(&catalog).create_ship(&state).unwrap();

        let report = shelling_report(&ship, &BattleContext::default());
        assert_eq!(report.attacks.len(), 1);

        let regular = report.regular().unwrap();
        assert_eq!(regular.rate, 1.0);
        assert_eq!(report.expected_power, regular.power.value());
    }

    #[test]
    fn test_special_attacks_come_first() {
        let catalog = sample_catalog();
        let state = equipped_ship(
            ids::ship::NAGATO,
            &[
                ids::gear::GUN_46CM_TRIPLE,
                ids::gear::GUN_46CM_TRIPLE,
                ids::gear::TYPE_91_AP_SHELL,
                ids::gear::TYPE_0_OBSERVATION_SEAPLANE,
            ],
        );
        let ship = Factory::new(&catalog).create_ship(&state).unwrap();
        let context = BattleContext {
            fleet_los_modifier: 20.0,
            is_main_flagship: true,
            target_is_armored: true,
            ..Default::default()
        };

        let report = shelling_report(&ship, &context);
        let kinds: Vec<_> = report.attacks.iter().map(|attack| attack.kind).collect();
        assert_eq!(
            kinds,
            vec![
                Some(DaySpecialAttackType::MainMain),
                Some(DaySpecialAttackType::DoubleAttack),
                None
            ]
        );

        let total: f64 = report.attacks.iter().map(|attack| attack.rate).sum();
        assert!((total - 1.0).abs() < 1e-9);
        assert_eq!(report.attacks[0].power.value(), 238.0);
        assert!(report.expected_power > report.regular().unwrap().power.value());
    }

    #[test]
    fn test_fit_gun_bonus_applies_to_special_attacks() {
        let catalog = sample_catalog();
        let state = equipped_ship(
            ids::ship::NAGATO,
            &[
                ids::gear::GUN_46CM_TRIPLE,
                ids::gear::GUN_46CM_TRIPLE,
                ids::gear::TYPE_0_OBSERVATION_SEAPLANE,
            ],
        );
        let ship = Factory::new(&catalog).create_ship(&state).unwrap();
        let context = BattleContext {
            fleet_los_modifier: 20.0,
            fit_gun_bonus: 10.0,
            ..Default::default()
        };

        let report = shelling_report(&ship, &context);
        let without = shelling_report(
            &ship,
            &BattleContext {
                fit_gun_bonus: 0.0,
                ..context
            },
        );

        assert!(report.attacks.len() > 1);
        for (with, without) in report.attacks.iter().zip(&without.attacks) {
            if with.kind.is_some() {
                assert_eq!(with.accuracy.fit_gun_bonus, 10.0);
                assert!(with.accuracy.value > without.accuracy.value);
            } else {
                assert_eq!(with.accuracy, without.accuracy);
            }
        }
    }

    #[test]
    fn test_loadout_lists_ace_for_aircraft_only() {
        let catalog = sample_catalog();
        let state = ShipState::new(ShipId::new(ids::ship::NAGATO)).with_equipment(
            EquipmentState::default()
                .with_gear(
                    EquipmentKey::G1,
                    GearState::new(GearId::new(ids::gear::GUN_46CM_TRIPLE)).with_stars(4),
                )
                .with_gear(
                    EquipmentKey::G3,
                    GearState::new(GearId::new(ids::gear::TYPE_0_OBSERVATION_SEAPLANE))
                        .with_exp(70),
                ),
        );
        let ship = Factory::new(&catalog).create_ship(&state).unwrap();

        let report = shelling_report(&ship, &BattleContext::default());
        let keys: Vec<_> = report.loadout.iter().map(|slot| slot.key).collect();
        assert_eq!(keys, vec![EquipmentKey::G1, EquipmentKey::G3]);
        assert_eq!(report.loadout[0].stars, 4);
        assert_eq!(report.loadout[0].ace, None);
        assert_eq!(report.loadout[1].ace, Some(5));
    }

    #[test]
    fn test_report_serializes_to_json() {
        let catalog = sample_catalog();
        let state = equipped_ship(ids::ship::NAGATO, &[ids::gear::GUN_46CM_TRIPLE]);
        let ship = Factory::new(&catalog).create_ship(&state).unwrap();

        let report = shelling_report(&ship, &BattleContext::default());
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"observation_term\""));
        assert!(json.contains("\"expected_power\""));
    }
}
