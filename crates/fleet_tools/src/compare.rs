//! Parallel gear comparison for a single slot.
//!
//! Every candidate is equipped into the chosen slot of a base loadout and
//! scored by the expected shelling power of the resulting ship. Candidates
//! are evaluated on the rayon thread pool against one shared catalog.

use fleet_core::equipment::EquipmentKey;
use fleet_core::factory::Factory;
use fleet_core::gear::GearState;
use fleet_core::master::{GearId, MasterCatalog};
use fleet_core::ship::ShipState;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::report::{shelling_report, BattleContext};

/// Score of one candidate gear.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateScore {
    /// Candidate gear.
    pub gear_id: GearId,
    /// Candidate name.
    pub name: String,
    /// Rate-weighted shelling power with the candidate equipped.
    pub expected_power: f64,
    /// Regular attack power with the candidate equipped.
    pub regular_power: f64,
    /// Regular attack accuracy with the candidate equipped.
    pub regular_accuracy: f64,
    /// Probability that any special attack triggers.
    pub special_attack_rate: f64,
}

/// Rank candidate gears for one slot, best expected power first.
///
/// Candidates missing from the catalog are skipped. An empty `candidates`
/// list means every gear in the catalog. Returns an empty list if the base
/// ship is not in the catalog.
#[must_use]
pub fn rank_candidates(
    catalog: &MasterCatalog,
    base: &ShipState,
    key: EquipmentKey,
    candidates: &[GearId],
    context: &BattleContext,
) -> Vec<CandidateScore> {
    let factory = Factory::new(catalog);
    let ids: Vec<GearId> = if candidates.is_empty() {
        catalog.gears().map(|gear| gear.id).collect()
    } else {
        candidates.to_vec()
    };

    let mut scores: Vec<CandidateScore> = ids
        .par_iter()
        .filter_map(|&gear_id| {
            let Some(master) = catalog.gear(gear_id) else {
                tracing::warn!("Skipping unknown candidate gear {gear_id}");
                return None;
            };

            let mut state = base.clone();
            state.equipment = state.equipment.with_gear(key, GearState::new(gear_id));
            let ship = factory.create_ship(&state)?;

            let report = shelling_report(&ship, context);
            let regular = report.regular()?;

            Some(CandidateScore {
                gear_id,
                name: master.name.clone(),
                expected_power: report.expected_power,
                regular_power: regular.power.value(),
                regular_accuracy: regular.accuracy.value,
                special_attack_rate: 1.0 - regular.rate,
            })
        })
        .collect();

    scores.sort_by(|a, b| {
        b.expected_power
            .total_cmp(&a.expected_power)
            .then_with(|| a.gear_id.cmp(&b.gear_id))
    });

    tracing::debug!(
        "Ranked {} candidates for slot {key} of ship {}",
        scores.len(),
        base.ship_id
    );

    scores
}

#[cfg(test)]
mod tests {
    use super::*;
    use fleet_core::ship::ShipState;
    use fleet_test_utils::fixtures::{equipped_ship, ids, sample_catalog};

    fn nagato_base() -> ShipState {
        equipped_ship(
            ids::ship::NAGATO,
            &[
                ids::gear::GUN_46CM_TRIPLE,
                ids::gear::GUN_46CM_TRIPLE,
                ids::gear::TYPE_0_OBSERVATION_SEAPLANE,
            ],
        )
    }

    #[test]
    fn test_ap_shell_beats_radar_against_armor() {
        let catalog = sample_catalog();
        let context = BattleContext {
            fleet_los_modifier: 20.0,
            is_main_flagship: true,
            target_is_armored: true,
            ..Default::default()
        };
        let candidates = [
            GearId::new(ids::gear::TYPE_13_AIR_RADAR),
            GearId::new(ids::gear::TYPE_91_AP_SHELL),
        ];

        let scores = rank_candidates(
            &catalog,
            &nagato_base(),
            EquipmentKey::G4,
            &candidates,
            &context,
        );
        assert_eq!(scores.len(), 2);
        assert_eq!(scores[0].gear_id, GearId::new(ids::gear::TYPE_91_AP_SHELL));
        assert!(scores[0].special_attack_rate > 0.0);
    }

    #[test]
    fn test_unknown_candidates_are_skipped() {
        let catalog = sample_catalog();
        let candidates = [GearId::new(9999), GearId::new(ids::gear::GUN_35_6CM_TWIN)];

        let scores = rank_candidates(
            &catalog,
            &nagato_base(),
            EquipmentKey::G4,
            &candidates,
            &BattleContext::default(),
        );
        assert_eq!(scores.len(), 1);
    }

    #[test]
    fn test_empty_candidates_means_whole_catalog() {
        let catalog = sample_catalog();
        let scores = rank_candidates(
            &catalog,
            &nagato_base(),
            EquipmentKey::G4,
            &[],
            &BattleContext::default(),
        );

        assert_eq!(scores.len(), catalog.gear_count());
        assert!(scores
            .windows(2)
            .all(|w| w[0].expected_power >= w[1].expected_power));
    }

    #[test]
    fn test_unknown_base_ship_yields_nothing() {
        let catalog = sample_catalog();
        let scores = rank_candidates(
            &catalog,
            &ShipState::new(fleet_core::master::ShipId::new(9999)),
            EquipmentKey::G1,
            &[GearId::new(ids::gear::GUN_46CM_TRIPLE)],
            &BattleContext::default(),
        );
        assert!(scores.is_empty());
    }
}
