//! Validated reference catalog.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::{GearId, MasterGear, MasterShip, ShipId};
use crate::error::{FleetError, Result};

/// Raw catalog as supplied by the data layer.
///
/// # Example RON
///
/// ```ron
/// CatalogData(
///     gears: [...],
///     ships: [...],
/// )
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogData {
    /// Gear definitions.
    #[serde(default)]
    pub gears: Vec<MasterGear>,

    /// Ship hull definitions.
    #[serde(default)]
    pub ships: Vec<MasterShip>,
}

/// Read-only reference tables keyed by id.
///
/// Built once per process and shared by reference; nothing in the core
/// mutates it after construction.
#[derive(Debug, Clone, Default)]
pub struct MasterCatalog {
    gears: HashMap<GearId, MasterGear>,
    ships: HashMap<ShipId, MasterShip>,
}

impl MasterCatalog {
    /// Build a catalog, rejecting malformed master data.
    ///
    /// # Errors
    ///
    /// Returns the single validation error, or
    /// [`FleetError::CatalogValidation`] when several were found.
    pub fn from_data(data: CatalogData) -> Result<Self> {
        let mut errors = Vec::new();
        let mut gears = HashMap::with_capacity(data.gears.len());
        let mut ships = HashMap::with_capacity(data.ships.len());

        for gear in data.gears {
            let id = gear.id;
            if gears.insert(id, gear).is_some() {
                errors.push(FleetError::DuplicateGearId(id));
            }
        }

        for ship in data.ships {
            errors.extend(ship.validate());
            let id = ship.id;
            if ships.insert(id, ship).is_some() {
                errors.push(FleetError::DuplicateShipId(id));
            }
        }

        match errors.len() {
            0 => {
                tracing::debug!(
                    gears = gears.len(),
                    ships = ships.len(),
                    "Built master catalog"
                );
                Ok(Self { gears, ships })
            }
            1 => Err(errors.remove(0)),
            _ => Err(FleetError::CatalogValidation(errors)),
        }
    }

    /// Get a gear definition by id.
    #[must_use]
    pub fn gear(&self, id: GearId) -> Option<&MasterGear> {
        self.gears.get(&id)
    }

    /// Get a ship hull definition by id.
    #[must_use]
    pub fn ship(&self, id: ShipId) -> Option<&MasterShip> {
        self.ships.get(&id)
    }

    /// All gear definitions, in id order.
    pub fn gears(&self) -> impl Iterator<Item = &MasterGear> {
        let mut gears: Vec<_> = self.gears.values().collect();
        gears.sort_by_key(|gear| gear.id);
        gears.into_iter()
    }

    /// All ship hull definitions, in id order.
    pub fn ships(&self) -> impl Iterator<Item = &MasterShip> {
        let mut ships: Vec<_> = self.ships.values().collect();
        ships.sort_by_key(|ship| ship.id);
        ships.into_iter()
    }

    /// Number of gear definitions.
    #[must_use]
    pub fn gear_count(&self) -> usize {
        self.gears.len()
    }

    /// Number of ship hull definitions.
    #[must_use]
    pub fn ship_count(&self) -> usize {
        self.ships.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::master::{GearCategory, LevelRange, ShipClass, ShipType, StatRange};

    fn ship(id: u16, slots: Vec<u8>) -> MasterShip {
        MasterShip {
            id: ShipId::new(id),
            name: format!("ship-{id}"),
            ship_class: ShipClass::Other,
            ship_type: ShipType::DD,
            kai2: false,
            slot_num: slots.len(),
            slots,
            hp: StatRange::new(16, 31),
            firepower: StatRange::new(10, 29),
            torpedo: StatRange::new(24, 69),
            anti_air: StatRange::new(9, 39),
            armor: StatRange::new(6, 19),
            asw: LevelRange::new(20, 49),
            evasion: LevelRange::new(40, 79),
            los: LevelRange::new(5, 19),
            luck: StatRange::new(10, 49),
        }
    }

    fn gear(id: u16) -> MasterGear {
        MasterGear::new(GearId::new(id), format!("gear-{id}"), GearCategory::Other)
    }

    #[test]
    fn test_lookup() {
        let catalog = MasterCatalog::from_data(CatalogData {
            gears: vec![gear(1), gear(2)],
            ships: vec![ship(9, vec![0, 0, 0])],
        })
        .unwrap();

        assert!(catalog.gear(GearId::new(1)).is_some());
        assert!(catalog.gear(GearId::new(3)).is_none());
        assert!(catalog.ship(ShipId::new(9)).is_some());
        assert_eq!(catalog.gear_count(), 2);
        assert_eq!(catalog.ship_count(), 1);
    }

    #[test]
    fn test_iteration_is_id_ordered() {
        let catalog = MasterCatalog::from_data(CatalogData {
            gears: vec![gear(30), gear(2), gear(17)],
            ships: vec![],
        })
        .unwrap();

        let ids: Vec<_> = catalog.gears().map(|g| g.id.0).collect();
        assert_eq!(ids, vec![2, 17, 30]);
    }

    #[test]
    fn test_duplicate_gear_rejected() {
        let result = MasterCatalog::from_data(CatalogData {
            gears: vec![gear(1), gear(1)],
            ships: vec![],
        });
        assert_eq!(result.unwrap_err(), FleetError::DuplicateGearId(GearId::new(1)));
    }

    #[test]
    fn test_multiple_errors_are_aggregated() {
        let mut broken = ship(9, vec![0, 0]);
        broken.slot_num = 3;

        let result = MasterCatalog::from_data(CatalogData {
            gears: vec![],
            ships: vec![broken, ship(9, vec![0])],
        });

        match result {
            Err(FleetError::CatalogValidation(errors)) => assert_eq!(errors.len(), 2),
            other => panic!("expected aggregated errors, got {other:?}"),
        }
    }
}
