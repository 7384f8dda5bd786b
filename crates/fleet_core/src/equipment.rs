//! Equipment slots and the aggregate query surface over them.
//!
//! [`Equipment`] is the only way calculators read a loadout: predicates go
//! through [`Equipment::has`], [`Equipment::count`] and [`Equipment::sum_by`]
//! rather than iterating slots directly.

use std::collections::BTreeMap;
use std::fmt;
use std::iter::Sum;

use serde::{Deserialize, Serialize};

use crate::gear::{Gear, GearState};

/// Slot identifier. `GX` is the reinforcement (extra) slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EquipmentKey {
    /// First regular slot.
    G1,
    /// Second regular slot.
    G2,
    /// Third regular slot.
    G3,
    /// Fourth regular slot.
    G4,
    /// Fifth regular slot.
    G5,
    /// Reinforcement expansion slot.
    GX,
}

impl EquipmentKey {
    /// Regular slot keys in order.
    pub const REGULAR: [Self; 5] = [Self::G1, Self::G2, Self::G3, Self::G4, Self::G5];

    /// Check if this is the reinforcement slot.
    #[must_use]
    pub const fn is_extra(self) -> bool {
        matches!(self, Self::GX)
    }
}

impl fmt::Display for EquipmentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::G1 => "g1",
            Self::G2 => "g2",
            Self::G3 => "g3",
            Self::G4 => "g4",
            Self::G5 => "g5",
            Self::GX => "gx",
        };
        f.write_str(name)
    }
}

/// Aircraft capacity of a regular slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotSize {
    /// Aircraft currently carried.
    pub current: u8,
    /// Hull capacity for this slot.
    pub max: u8,
}

/// User-chosen loadout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquipmentState {
    /// Gear per slot; missing keys are empty slots.
    #[serde(default)]
    pub gears: BTreeMap<EquipmentKey, GearState>,

    /// Current slot-size overrides; missing keys use the hull maximum.
    #[serde(default)]
    pub slot_sizes: BTreeMap<EquipmentKey, u8>,
}

impl EquipmentState {
    /// Builder method to place a gear in a slot.
    #[must_use]
    pub fn with_gear(mut self, key: EquipmentKey, gear: GearState) -> Self {
        self.gears.insert(key, gear);
        self
    }

    /// Builder method to override a slot's current size.
    #[must_use]
    pub fn with_slot_size(mut self, key: EquipmentKey, size: u8) -> Self {
        self.slot_sizes.insert(key, size);
        self
    }
}

/// One equipment slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquipmentItem {
    /// Slot identifier.
    pub key: EquipmentKey,
    /// Equipped gear, if any.
    pub gear: Option<Gear>,
    /// Aircraft capacity; `None` for the reinforcement slot.
    pub slot_size: Option<SlotSize>,
}

impl EquipmentItem {
    /// Current aircraft count, 0 for the reinforcement slot.
    #[must_use]
    pub fn current_slot_size(&self) -> u8 {
        self.slot_size.map_or(0, |size| size.current)
    }
}

/// Ordered set of equipment slots for a ship or land base.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Equipment {
    items: Vec<EquipmentItem>,
}

impl Equipment {
    /// Build equipment from a capacity layout.
    ///
    /// Creates one regular slot per capacity entry plus the reinforcement
    /// slot when `has_extra` is set. Each configured gear is passed through
    /// `resolve_gear`; slot-size overrides are clamped to the capacity.
    pub fn from_layout<R>(
        state: &EquipmentState,
        max_slots: &[u8],
        has_extra: bool,
        resolve_gear: R,
    ) -> Self
    where
        R: Fn(&GearState) -> Option<Gear>,
    {
        let regular = EquipmentKey::REGULAR
            .iter()
            .zip(max_slots)
            .map(|(&key, &max)| (key, Some(max)));
        let extra = has_extra.then_some((EquipmentKey::GX, None));

        let items = regular
            .chain(extra)
            .map(|(key, max)| {
                let gear = state.gears.get(&key).and_then(&resolve_gear);
                let slot_size = max.map(|max| {
                    let current = state.slot_sizes.get(&key).map_or(max, |&size| size.min(max));
                    SlotSize { current, max }
                });

                EquipmentItem {
                    key,
                    gear,
                    slot_size,
                }
            })
            .collect();

        Self { items }
    }

    /// Get a slot by key.
    #[must_use]
    pub fn get(&self, key: EquipmentKey) -> Option<&EquipmentItem> {
        self.items.iter().find(|item| item.key == key)
    }

    /// Slot keys in order.
    pub fn keys(&self) -> impl Iterator<Item = EquipmentKey> + '_ {
        self.items.iter().map(|item| item.key)
    }

    /// Number of slots, empty ones included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if there are no slots at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn equipped(&self) -> impl Iterator<Item = (&Gear, &EquipmentItem)> {
        self.items
            .iter()
            .filter_map(|item| item.gear.as_ref().map(|gear| (gear, item)))
    }

    fn equipped_aircraft(&self) -> impl Iterator<Item = &Gear> {
        self.equipped()
            .filter(|(_, item)| item.current_slot_size() > 0)
            .map(|(gear, _)| gear)
    }

    /// Check if any equipped gear matches.
    pub fn has<P>(&self, pred: P) -> bool
    where
        P: Fn(&Gear) -> bool,
    {
        self.equipped().any(|(gear, _)| pred(gear))
    }

    /// Count equipped gears matching the predicate.
    pub fn count<P>(&self, pred: P) -> usize
    where
        P: Fn(&Gear) -> bool,
    {
        self.equipped().filter(|(gear, _)| pred(*gear)).count()
    }

    /// Sum a projection over equipped gears.
    ///
    /// The projection receives the gear, its slot key and the current slot
    /// size (0 for the reinforcement slot).
    pub fn sum_by<T, F>(&self, f: F) -> T
    where
        T: Sum<T>,
        F: Fn(&Gear, EquipmentKey, u8) -> T,
    {
        self.equipped()
            .map(|(gear, item)| f(gear, item.key, item.current_slot_size()))
            .sum()
    }

    /// Check if any gear in a slot carrying aircraft matches.
    pub fn has_aircraft<P>(&self, pred: P) -> bool
    where
        P: Fn(&Gear) -> bool,
    {
        self.equipped_aircraft().any(pred)
    }

    /// Count gears in slots carrying aircraft that match the predicate.
    pub fn count_aircraft<P>(&self, pred: P) -> usize
    where
        P: Fn(&Gear) -> bool,
    {
        self.equipped_aircraft().filter(|gear| pred(*gear)).count()
    }
}
