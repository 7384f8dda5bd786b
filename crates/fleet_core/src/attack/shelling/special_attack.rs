//! Day special attacks: eligibility, variant constants and the observation term.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::attack::AirState;

/// Bonus added to the observation term of the main fleet's flagship.
const FLAGSHIP_BONUS: f64 = 15.0;

/// Day special attack kinds, artillery spotting and carrier cut-ins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DaySpecialAttackType {
    /// Two main gun salvos.
    DoubleAttack,
    /// Main gun and secondary gun.
    MainSecondary,
    /// Main gun, secondary gun and radar.
    MainRadar,
    /// Main gun, secondary gun and AP shell.
    MainApShell,
    /// Two main guns and AP shell.
    MainMain,
    /// Ise-class Kai Ni with Zuiun seaplane bombers.
    ZuiunCutin,
    /// Ise-class Kai Ni with 634 Air Group Suisei.
    SuiseiCutin,
    /// Carrier cut-in: fighter, dive bomber and torpedo bomber.
    FighterBomberAttacker,
    /// Carrier cut-in: two dive bombers.
    BomberBomberAttacker,
    /// Carrier cut-in: dive bomber and torpedo bomber.
    BomberAttacker,
}

impl fmt::Display for DaySpecialAttackType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::DoubleAttack => "DA",
            Self::MainSecondary => "Main/Sec",
            Self::MainRadar => "Main/Radar",
            Self::MainApShell => "Main/AP",
            Self::MainMain => "Main/Main",
            Self::ZuiunCutin => "Zuiun CI",
            Self::SuiseiCutin => "Suisei CI",
            Self::FighterBomberAttacker => "FBA",
            Self::BomberBomberAttacker => "BBA",
            Self::BomberAttacker => "BA",
        };
        f.write_str(name)
    }
}

/// Equipment and hull facts the eligibility rules read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySpecialAttackFacts {
    /// The ship attacks with aircraft during shelling.
    pub is_carrier_shelling: bool,
    /// Ise-class hull at its second remodel.
    pub is_ise_class_kai2: bool,
    /// An observation seaplane sits in a slot with aircraft left.
    pub has_observation_seaplane: bool,

    /// Number of main guns.
    pub main_gun_count: usize,
    /// Number of secondary guns.
    pub secondary_gun_count: usize,
    /// An AP shell is equipped.
    pub has_ap_shell: bool,
    /// A radar is equipped.
    pub has_radar: bool,

    /// Zuiun seaplane bombers with aircraft left.
    pub zuiun_aircraft_count: usize,
    /// 634 Air Group Suisei with aircraft left.
    pub suisei_634_aircraft_count: usize,

    /// A carrier-based fighter with aircraft left.
    pub has_cb_fighter_aircraft: bool,
    /// Carrier-based dive bombers with aircraft left.
    pub cb_bomber_aircraft_count: usize,
    /// A carrier-based torpedo bomber with aircraft left.
    pub has_cb_torpedo_bomber_aircraft: bool,
}

impl DaySpecialAttackFacts {
    /// Eligible special attacks, highest priority first.
    ///
    /// Carrier shelling only considers carrier cut-ins. Every other ship
    /// needs an observation seaplane before any artillery spotting applies.
    #[must_use]
    pub fn possible_types(&self) -> Vec<DaySpecialAttackType> {
        use DaySpecialAttackType as T;

        let mut types = Vec::new();

        if self.is_carrier_shelling {
            let fighter = self.has_cb_fighter_aircraft;
            let bombers = self.cb_bomber_aircraft_count;
            let attacker = self.has_cb_torpedo_bomber_aircraft;

            if fighter && bombers >= 1 && attacker {
                types.push(T::FighterBomberAttacker);
            }
            if bombers >= 2 {
                types.push(T::BomberBomberAttacker);
            }
            if bombers >= 1 && attacker {
                types.push(T::BomberAttacker);
            }
            return types;
        }

        if !self.has_observation_seaplane {
            return types;
        }

        let main = self.main_gun_count;
        let secondary = self.secondary_gun_count;

        if self.is_ise_class_kai2 && main >= 1 {
            if self.zuiun_aircraft_count >= 2 {
                types.push(T::ZuiunCutin);
            }
            if self.suisei_634_aircraft_count >= 2 {
                types.push(T::SuiseiCutin);
            }
        }
        if main >= 2 && self.has_ap_shell {
            types.push(T::MainMain);
        }
        if main >= 1 && secondary >= 1 && self.has_ap_shell {
            types.push(T::MainApShell);
        }
        if main >= 1 && secondary >= 1 && self.has_radar {
            types.push(T::MainRadar);
        }
        if main >= 1 && secondary >= 1 {
            types.push(T::MainSecondary);
        }
        if main >= 2 {
            types.push(T::DoubleAttack);
        }

        types
    }
}

/// A special attack bound to its trigger denominator and modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DaySpecialAttack {
    /// Attack kind.
    pub kind: DaySpecialAttackType,
    /// Observation term at which the raw trigger rate reaches 1.
    pub denominator: f64,
    /// Post-cap power multiplier.
    pub power_modifier: f64,
    /// Accuracy multiplier.
    pub accuracy_modifier: f64,
}

impl DaySpecialAttack {
    /// Look up the constants for a kind.
    #[must_use]
    pub const fn from_type(kind: DaySpecialAttackType) -> Self {
        use DaySpecialAttackType as T;

        let (denominator, power_modifier, accuracy_modifier) = match kind {
            T::DoubleAttack => (130.0, 1.2, 1.1),
            T::MainSecondary => (120.0, 1.1, 1.3),
            T::MainRadar => (130.0, 1.2, 1.5),
            T::MainApShell => (140.0, 1.3, 1.3),
            T::MainMain => (150.0, 1.5, 1.2),
            T::ZuiunCutin => (120.0, 1.35, 1.2),
            T::SuiseiCutin => (120.0, 1.3, 1.2),
            T::FighterBomberAttacker => (125.0, 1.25, 1.2),
            T::BomberBomberAttacker => (140.0, 1.2, 1.2),
            T::BomberAttacker => (155.0, 1.15, 1.2),
        };

        Self {
            kind,
            denominator,
            power_modifier,
            accuracy_modifier,
        }
    }

    /// Raw trigger rate for an observation term, before priority folding.
    #[must_use]
    pub fn trigger_rate(&self, observation_term: f64) -> f64 {
        (observation_term / self.denominator).clamp(0.0, 1.0)
    }
}

impl From<DaySpecialAttackType> for DaySpecialAttack {
    fn from(kind: DaySpecialAttackType) -> Self {
        Self::from_type(kind)
    }
}

/// Inputs to [`calc_observation_term`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObservationTermParams {
    /// Displayed luck.
    pub luck: i32,
    /// LoS granted by equipment.
    pub equipment_los: i32,
    /// The ship is the main fleet's flagship.
    pub is_main_flagship: bool,
    /// Fleet-wide LoS modifier.
    pub fleet_los_modifier: f64,
    /// Aerial combat result.
    pub air_state: AirState,
}

/// Observation term gating artillery spotting and carrier cut-ins.
///
/// Only air supremacy and air superiority allow special attacks; every
/// other air state yields 0.
#[must_use]
pub fn calc_observation_term(params: &ObservationTermParams) -> f64 {
    let luck_factor = (f64::from(params.luck.max(0)).sqrt() + 10.0).floor();
    let flagship = if params.is_main_flagship {
        FLAGSHIP_BONUS
    } else {
        0.0
    };
    let fleet = params.fleet_los_modifier;
    let equipment = f64::from(params.equipment_los);

    match params.air_state {
        AirState::AirSupremacy => {
            (luck_factor + 0.7 * (fleet + 1.6 * equipment) + 10.0).floor() + flagship
        }
        AirState::AirSuperiority => {
            (luck_factor + 0.6 * (fleet + 1.2 * equipment)).floor() + flagship
        }
        AirState::AirParity | AirState::AirDenial | AirState::AirIncapability => 0.0,
    }
}
