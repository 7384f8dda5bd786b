//! Entity construction from reference data and user state.
//!
//! The [`Factory`] borrows a [`MasterCatalog`] and turns plain state objects
//! into resolved, immutable entities. Unknown ids are not errors: the
//! affected entity resolves to `None` and callers decide how to render it.
//!
//! Nested construction goes through injectable resolvers so callers can
//! substitute or intercept gear and ship resolution without rebuilding the
//! catalog.

use crate::airbase::{Airbase, AirbaseState, AIRBASE_SLOTS};
use crate::equipment::Equipment;
use crate::fleet::{Fleet, FleetState};
use crate::gear::{Gear, GearState};
use crate::master::MasterCatalog;
use crate::plan::{Plan, PlanState, MAX_HQ_LEVEL};
use crate::ship::{Ship, ShipState};

/// Builds resolved entities from a borrowed catalog.
#[derive(Debug, Clone, Copy)]
pub struct Factory<'a> {
    catalog: &'a MasterCatalog,
}

impl<'a> Factory<'a> {
    /// Create a factory over a catalog.
    #[must_use]
    pub const fn new(catalog: &'a MasterCatalog) -> Self {
        Self { catalog }
    }

    /// The catalog this factory reads from.
    #[must_use]
    pub const fn catalog(&self) -> &'a MasterCatalog {
        self.catalog
    }

    /// Resolve a gear. Returns `None` for unknown gear ids.
    #[must_use]
    pub fn create_gear(&self, state: &GearState) -> Option<Gear> {
        let Some(master) = self.catalog.gear(state.gear_id) else {
            tracing::debug!(gear_id = %state.gear_id, "Unknown gear id");
            return None;
        };
        Some(Gear::new(state, master))
    }

    /// Resolve a ship with the factory's own gear resolution.
    #[must_use]
    pub fn create_ship(&self, state: &ShipState) -> Option<Ship> {
        self.create_ship_with(state, |gear| self.create_gear(gear))
    }

    /// Resolve a ship, passing every configured gear through `resolve_gear`.
    ///
    /// Returns `None` for unknown ship ids. Slots whose gear does not
    /// resolve stay empty.
    pub fn create_ship_with<R>(&self, state: &ShipState, resolve_gear: R) -> Option<Ship>
    where
        R: Fn(&GearState) -> Option<Gear>,
    {
        let Some(master) = self.catalog.ship(state.ship_id) else {
            tracing::debug!(ship_id = %state.ship_id, "Unknown ship id");
            return None;
        };

        let equipment = Equipment::from_layout(&state.equipment, &master.slots, true, resolve_gear);
        Some(Ship::new(master, state, equipment))
    }

    /// Resolve a fleet with the factory's own ship resolution.
    #[must_use]
    pub fn create_fleet(&self, state: &FleetState) -> Fleet {
        self.create_fleet_with(state, |ship| self.create_ship(ship))
    }

    /// Resolve a fleet, passing every configured ship through `resolve_ship`.
    ///
    /// Positions keep their order; unresolved ships leave empty positions.
    pub fn create_fleet_with<R>(&self, state: &FleetState, resolve_ship: R) -> Fleet
    where
        R: Fn(&ShipState) -> Option<Ship>,
    {
        let ships = state
            .ships
            .iter()
            .map(|ship| ship.as_ref().and_then(&resolve_ship))
            .collect();
        Fleet::new(ships)
    }

    /// Resolve a land base with the factory's own gear resolution.
    #[must_use]
    pub fn create_airbase(&self, state: &AirbaseState) -> Airbase {
        self.create_airbase_with(state, |gear| self.create_gear(gear))
    }

    /// Resolve a land base, passing every squadron through `resolve_gear`.
    pub fn create_airbase_with<R>(&self, state: &AirbaseState, resolve_gear: R) -> Airbase
    where
        R: Fn(&GearState) -> Option<Gear>,
    {
        Airbase::new(Equipment::from_layout(
            &state.equipment,
            &AIRBASE_SLOTS,
            false,
            resolve_gear,
        ))
    }

    /// Resolve a plan.
    ///
    /// Headquarters level defaults to and is clamped at [`MAX_HQ_LEVEL`].
    #[must_use]
    pub fn create_plan(&self, state: &PlanState) -> Plan {
        let fleets = state
            .fleets
            .iter()
            .map(|(&key, fleet)| (key, self.create_fleet(fleet)))
            .collect();
        let airbases = state
            .airbases
            .iter()
            .map(|(&key, airbase)| (key, self.create_airbase(airbase)))
            .collect();

        Plan {
            name: state.name.clone().unwrap_or_default(),
            hq_level: state.hq_level.unwrap_or(MAX_HQ_LEVEL).clamp(1, MAX_HQ_LEVEL),
            fleets,
            airbases,
        }
    }
}
