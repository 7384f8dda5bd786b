//! Day shelling orchestration for one ship.

use serde::{Deserialize, Serialize};

use super::ap_shell::ApShellModifiers;
use super::special_attack::{
    calc_observation_term, DaySpecialAttack, DaySpecialAttackFacts, ObservationTermParams,
};
use crate::attack::{AirState, AttackPower, AttackPowerParams, Engagement, Formation};
use crate::gear::Gear;
use crate::master::gear_ids::{SUISEI_634_FAMILY, ZUIUN_FAMILY};
use crate::master::GearAttrs;
use crate::rate_map::RateMap;
use crate::ship::Ship;

/// Day shelling soft cap.
pub const SHELLING_POWER_CAP: f64 = 180.0;

/// Special attack outlook of a ship for one battle context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShellingAbility {
    /// Observation term used for every trigger rate.
    pub observation_term: f64,
    /// Trigger probabilities in priority order.
    pub rate_map: RateMap<DaySpecialAttack>,
    /// Whether any special attack is possible with this loadout.
    pub can_special_attack: bool,
}

/// Inputs to [`ShellingCalculator::power`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShellingPowerParams {
    /// Target carries armor that AP shells penetrate.
    pub target_is_armored: bool,
    /// Target is a land installation.
    pub target_is_installation: bool,
    /// Fleet composition power bonus.
    pub fleet_factor: f64,
    /// Formation multiplier.
    pub formation_modifier: f64,
    /// Engagement multiplier.
    pub engagement_modifier: f64,
    /// Multiplier of the chosen special attack, 1 for a regular attack.
    pub special_attack_modifier: f64,
}

impl Default for ShellingPowerParams {
    fn default() -> Self {
        Self {
            target_is_armored: false,
            target_is_installation: false,
            fleet_factor: 0.0,
            formation_modifier: 1.0,
            engagement_modifier: 1.0,
            special_attack_modifier: 1.0,
        }
    }
}

impl ShellingPowerParams {
    /// Build parameters from battle context and an optional chosen attack.
    #[must_use]
    pub fn from_context(
        formation: Formation,
        engagement: Engagement,
        special_attack: Option<&DaySpecialAttack>,
    ) -> Self {
        Self {
            formation_modifier: formation.shelling_power_modifier(),
            engagement_modifier: engagement.modifier(),
            special_attack_modifier: special_attack.map_or(1.0, |attack| attack.power_modifier),
            ..Default::default()
        }
    }
}

/// Shelling power with every intermediate term.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShellingPower {
    /// Aircraft power, carriers only.
    pub air_power: Option<f64>,
    /// Fleet composition power bonus.
    pub fleet_factor: f64,
    /// Formation multiplier.
    pub formation_modifier: f64,
    /// Engagement multiplier.
    pub engagement_modifier: f64,
    /// Damage state multiplier.
    pub health_modifier: f64,
    /// Additive cruiser fit bonus.
    pub cruiser_fit_bonus: f64,
    /// Special attack multiplier.
    pub special_attack_modifier: f64,
    /// AP shell multiplier, present against armored targets.
    pub ap_shell_modifier: Option<f64>,
    /// Pipeline values.
    #[serde(flatten)]
    pub power: AttackPower,
}

impl ShellingPower {
    /// Final attack power.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.power.value
    }
}

/// Inputs to [`ShellingCalculator::accuracy`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShellingAccuracyParams {
    /// Fleet composition accuracy bonus.
    pub fleet_factor: f64,
    /// Formation multiplier.
    pub formation_modifier: f64,
    /// Target carries armor that AP shells penetrate.
    pub target_is_armored: bool,
    /// Chosen special attack, if any.
    pub special_attack: Option<DaySpecialAttack>,
    /// Fit gun accuracy bonus, only counted with a special attack.
    ///
    /// This crate has no fit gun table; callers look the bonus up for the
    /// hull and loadout and pass 0 when unknown.
    pub fit_gun_bonus: f64,
}

impl Default for ShellingAccuracyParams {
    fn default() -> Self {
        Self {
            fleet_factor: 0.0,
            formation_modifier: 1.0,
            target_is_armored: false,
            special_attack: None,
            fit_gun_bonus: 0.0,
        }
    }
}

/// Shelling accuracy with every intermediate term.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShellingAccuracy {
    /// Fleet composition accuracy bonus.
    pub fleet_factor: f64,
    /// Level and luck term.
    pub basic_accuracy_term: f64,
    /// Accuracy granted by equipment.
    pub equipment_accuracy: f64,
    /// Sum of improvement accuracy bonuses.
    pub improvement_modifier: f64,
    /// Formation multiplier.
    pub formation_modifier: f64,
    /// Morale multiplier.
    pub morale_modifier: f64,
    /// Fit gun bonus.
    pub fit_gun_bonus: f64,
    /// Special attack multiplier.
    pub special_attack_modifier: f64,
    /// AP shell multiplier.
    pub ap_shell_modifier: f64,
    /// Floored sum before multipliers.
    pub base: f64,
    /// Final accuracy term.
    pub value: f64,
}

fn carrier_based(role: GearAttrs) -> impl Fn(&Gear) -> bool {
    move |gear| gear.is(GearAttrs::CARRIER_BASED | role)
}

/// Stateless day shelling calculator bound to one ship.
#[derive(Debug, Clone, Copy)]
pub struct ShellingCalculator<'a> {
    ship: &'a Ship,
}

impl<'a> ShellingCalculator<'a> {
    /// Bind a calculator to a ship.
    #[must_use]
    pub const fn new(ship: &'a Ship) -> Self {
        Self { ship }
    }

    /// Equipment facts the special attack rules read.
    #[must_use]
    pub fn special_attack_facts(&self) -> DaySpecialAttackFacts {
        let ship = self.ship;
        let equipment = ship.equipment();

        DaySpecialAttackFacts {
            is_carrier_shelling: ship.is_carrier_like(),
            is_ise_class_kai2: ship.is_ise_class_kai2(),
            has_observation_seaplane: equipment
                .has_aircraft(|gear| gear.is(GearAttrs::OBSERVATION_SEAPLANE)),

            main_gun_count: equipment.count(|gear| gear.is(GearAttrs::MAIN_GUN)),
            secondary_gun_count: equipment.count(|gear| gear.is(GearAttrs::SECONDARY_GUN)),
            has_ap_shell: equipment.has(|gear| gear.is(GearAttrs::AP_SHELL)),
            has_radar: equipment.has(|gear| gear.is(GearAttrs::RADAR)),

            zuiun_aircraft_count: equipment.count_aircraft(|gear| gear.id_in(&ZUIUN_FAMILY)),
            suisei_634_aircraft_count: equipment
                .count_aircraft(|gear| gear.id_in(&SUISEI_634_FAMILY)),

            has_cb_fighter_aircraft: equipment.has_aircraft(carrier_based(GearAttrs::FIGHTER)),
            cb_bomber_aircraft_count: equipment
                .count_aircraft(carrier_based(GearAttrs::DIVE_BOMBER)),
            has_cb_torpedo_bomber_aircraft: equipment
                .has_aircraft(carrier_based(GearAttrs::TORPEDO_BOMBER)),
        }
    }

    /// AP shell modifiers for this loadout, ignoring the target.
    #[must_use]
    pub fn ap_shell_modifiers(&self) -> ApShellModifiers {
        let equipment = self.ship.equipment();
        ApShellModifiers::new(
            equipment.has(|gear| gear.is(GearAttrs::MAIN_GUN)),
            equipment.has(|gear| gear.is(GearAttrs::AP_SHELL)),
            equipment.has(|gear| gear.is(GearAttrs::SECONDARY_GUN)),
            equipment.has(|gear| gear.is(GearAttrs::RADAR)),
        )
    }

    /// Observation term for this ship.
    #[must_use]
    pub fn observation_term(
        &self,
        fleet_los_modifier: f64,
        is_main_flagship: bool,
        air_state: AirState,
    ) -> f64 {
        let stats = self.ship.stats();
        calc_observation_term(&ObservationTermParams {
            luck: stats.luck.displayed(),
            equipment_los: stats.los.equipment,
            is_main_flagship,
            fleet_los_modifier,
            air_state,
        })
    }

    /// Special attack probabilities for one battle context.
    #[must_use]
    pub fn shelling_ability(
        &self,
        fleet_los_modifier: f64,
        is_main_flagship: bool,
        air_state: AirState,
    ) -> ShellingAbility {
        let observation_term =
            self.observation_term(fleet_los_modifier, is_main_flagship, air_state);
        let attacks: Vec<DaySpecialAttack> = self
            .special_attack_facts()
            .possible_types()
            .into_iter()
            .map(DaySpecialAttack::from_type)
            .collect();

        let mut rate_map = RateMap::new();
        for attack in &attacks {
            let rate = attack.trigger_rate(observation_term);
            tracing::trace!(
                ship = %self.ship.ship_id(),
                kind = %attack.kind,
                rate,
                "Folding special attack rate"
            );
            rate_map.set(*attack, rate);
        }

        ShellingAbility {
            observation_term,
            rate_map,
            can_special_attack: !attacks.is_empty(),
        }
    }

    /// Shelling attack power with its breakdown.
    #[must_use]
    pub fn power(&self, params: &ShellingPowerParams) -> ShellingPower {
        let ship = self.ship;
        let firepower = f64::from(ship.stats().firepower.displayed());
        let improvement: f64 = ship
            .equipment()
            .sum_by(|gear, _, _| gear.improvement_bonuses().shelling_power);

        let basic = 5.0 + firepower + improvement + params.fleet_factor;
        let air_power = ship
            .is_carrier_like()
            .then(|| ship.air_power(params.target_is_installation));
        let health_modifier = ship.stats().health.common_power_modifier();
        let cruiser_fit_bonus = ship.cruiser_fit_bonus();
        let ap_shell_modifier = params
            .target_is_armored
            .then(|| self.ap_shell_modifiers().power);

        let power = AttackPowerParams {
            basic,
            air_power,
            cap: SHELLING_POWER_CAP,
            precap_modifier: params.formation_modifier
                * params.engagement_modifier
                * health_modifier,
            precap_bonus: cruiser_fit_bonus,
            ap_shell_modifier,
            special_attack_modifier: params.special_attack_modifier,
        }
        .calc();

        ShellingPower {
            air_power,
            fleet_factor: params.fleet_factor,
            formation_modifier: params.formation_modifier,
            engagement_modifier: params.engagement_modifier,
            health_modifier,
            cruiser_fit_bonus,
            special_attack_modifier: params.special_attack_modifier,
            ap_shell_modifier,
            power,
        }
    }

    /// Shelling accuracy term with its breakdown.
    ///
    /// Without a special attack the fit gun bonus is 0 and both post
    /// multipliers are 1.
    #[must_use]
    pub fn accuracy(&self, params: &ShellingAccuracyParams) -> ShellingAccuracy {
        let ship = self.ship;
        let stats = ship.stats();

        let basic_accuracy_term = ship.basic_accuracy_term();
        let equipment_accuracy = f64::from(stats.accuracy.equipment);
        let improvement_modifier: f64 = ship
            .equipment()
            .sum_by(|gear, _, _| gear.improvement_bonuses().shelling_accuracy);
        let morale_modifier = stats.morale.common_accuracy_modifier();

        let (fit_gun_bonus, special_attack_modifier, ap_shell_modifier) =
            match params.special_attack {
                Some(attack) => {
                    let ap_shell = if params.target_is_armored {
                        self.ap_shell_modifiers().accuracy
                    } else {
                        1.0
                    };
                    (params.fit_gun_bonus, attack.accuracy_modifier, ap_shell)
                }
                None => (0.0, 1.0, 1.0),
            };

        let base = (params.fleet_factor
            + basic_accuracy_term
            + equipment_accuracy
            + improvement_modifier)
            .floor();
        let value = ((base * params.formation_modifier * morale_modifier + fit_gun_bonus).floor()
            * special_attack_modifier
            * ap_shell_modifier)
            .floor();

        ShellingAccuracy {
            fleet_factor: params.fleet_factor,
            basic_accuracy_term,
            equipment_accuracy,
            improvement_modifier,
            formation_modifier: params.formation_modifier,
            morale_modifier,
            fit_gun_bonus,
            special_attack_modifier,
            ap_shell_modifier,
            base,
            value,
        }
    }
}
