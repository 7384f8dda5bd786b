//! Fleets: ordered ship slots and fleet-wide derived values.

use serde::{Deserialize, Serialize};

use crate::attack::shelling::{ShellingAbility, ShellingCalculator};
use crate::attack::AirState;
use crate::ship::{Ship, ShipState};

/// Maximum number of ships in one fleet.
pub const MAX_FLEET_SIZE: usize = 7;

/// User-chosen fleet composition. `None` entries are empty positions.
///
/// # Example RON
///
/// ```ron
/// FleetState(
///     ships: [Some((ship_id: 553)), None, Some((ship_id: 411, level: 120))],
/// )
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FleetState {
    /// Ship per position; the first occupied position is the flagship.
    #[serde(default)]
    pub ships: Vec<Option<ShipState>>,
}

impl FleetState {
    /// Builder method to append a ship.
    #[must_use]
    pub fn with_ship(mut self, ship: ShipState) -> Self {
        self.ships.push(Some(ship));
        self
    }

    /// Builder method to append an empty position.
    #[must_use]
    pub fn with_empty(mut self) -> Self {
        self.ships.push(None);
        self
    }
}

/// Resolved fleet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Fleet {
    ships: Vec<Option<Ship>>,
}

impl Fleet {
    /// Create a fleet from resolved positions.
    ///
    /// Positions past [`MAX_FLEET_SIZE`] are dropped.
    #[must_use]
    pub fn new(mut ships: Vec<Option<Ship>>) -> Self {
        if ships.len() > MAX_FLEET_SIZE {
            tracing::debug!(
                positions = ships.len(),
                max = MAX_FLEET_SIZE,
                "Dropping fleet positions past the limit"
            );
            ships.truncate(MAX_FLEET_SIZE);
        }
        Self { ships }
    }

    /// Every position, empty ones included.
    #[must_use]
    pub fn positions(&self) -> &[Option<Ship>] {
        &self.ships
    }

    /// Ship at a position.
    #[must_use]
    pub fn ship(&self, index: usize) -> Option<&Ship> {
        self.ships.get(index)?.as_ref()
    }

    /// Present ships in position order.
    pub fn ships(&self) -> impl Iterator<Item = &Ship> {
        self.ships.iter().flatten()
    }

    /// Number of present ships.
    #[must_use]
    pub fn ship_count(&self) -> usize {
        self.ships().count()
    }

    /// Position of the flagship, the first occupied position.
    #[must_use]
    pub fn flagship_index(&self) -> Option<usize> {
        self.ships.iter().position(Option::is_some)
    }

    /// Fleet LoS modifier: `floor(sqrt(total) + 0.1 * total)` over every
    /// ship's fleet LoS factor.
    #[must_use]
    pub fn los_modifier(&self) -> f64 {
        let total: i32 = self.ships().map(Ship::fleet_los_factor).sum();
        let total = f64::from(total.max(0));
        (total.sqrt() + 0.1 * total).floor()
    }

    /// Shelling ability for every position.
    ///
    /// The ship in the first occupied position is the flagship; the flagship
    /// bonus only applies when this is the main fleet.
    #[must_use]
    pub fn shelling_abilities(
        &self,
        air_state: AirState,
        is_main_fleet: bool,
    ) -> Vec<Option<ShellingAbility>> {
        let los_modifier = self.los_modifier();
        let flagship_index = self.flagship_index();

        self.ships
            .iter()
            .enumerate()
            .map(|(index, ship)| {
                let ship = ship.as_ref()?;
                let is_main_flagship = is_main_fleet && Some(index) == flagship_index;
                Some(ShellingCalculator::new(ship).shelling_ability(
                    los_modifier,
                    is_main_flagship,
                    air_state,
                ))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_fleet() {
        let fleet = Fleet::new(vec![None, None]);
        assert_eq!(fleet.positions().len(), 2);
        assert_eq!(fleet.ship_count(), 0);
        assert!(fleet.ship(0).is_none());
        assert_eq!(fleet.los_modifier(), 0.0);
        assert_eq!(
            fleet.shelling_abilities(AirState::AirSupremacy, true),
            vec![None, None]
        );
    }

    #[test]
    fn test_positions_past_limit_are_dropped() {
        let fleet = Fleet::new(vec![None; 9]);
        assert_eq!(fleet.positions().len(), MAX_FLEET_SIZE);
    }

    #[test]
    fn test_flagship_index_skips_empty_positions() {
        assert_eq!(Fleet::new(vec![None, None]).flagship_index(), None);
        assert_eq!(Fleet::new(Vec::new()).flagship_index(), None);
    }

    #[test]
    fn test_state_builder() {
        let state = FleetState::default().with_empty().with_empty();
        assert_eq!(state.ships, vec![None, None]);
    }
}
