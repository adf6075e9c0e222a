//! Fleet registry
//!
//! Owns every base and every ship. Bases and ships refer to each other
//! by id only; the fleet resolves those ids and runs the operations that
//! touch both sides (docking, relocation, building, arranging).

mod arrangement;
mod docking;

use std::collections::BTreeMap;

use tracing::debug;

use super::base::Base;
use super::errors::FleetResult;
use super::ids::{BaseId, ShipId, ShipIdGenerator};
use super::ship::Ship;
use super::validation::require_non_null;

pub use docking::Relocation;

/// Top-level container for bases, ships and the ship id source.
#[derive(Debug, Default)]
pub struct Fleet {
    bases: Vec<Base>,
    /// Ships are never removed, so they outlive any docked list.
    ships: BTreeMap<ShipId, Ship>,
    ids: ShipIdGenerator,
}

impl Fleet {
    /// Create an empty fleet whose first ship gets id 100.
    pub fn new() -> Self {
        Self::with_id_generator(ShipIdGenerator::new())
    }

    /// Create an empty fleet drawing ship ids from `ids`.
    pub fn with_id_generator(ids: ShipIdGenerator) -> Self {
        Fleet {
            bases: Vec::new(),
            ships: BTreeMap::new(),
            ids,
        }
    }

    // ========== Registration ==========

    /// Register a base and return its id.
    pub fn add_base(&mut self, base: Base) -> BaseId {
        let id = BaseId::new(self.bases.len());
        debug!(base = %id, name = base.name(), position = %base.position(), "base registered");
        self.bases.push(base);
        id
    }

    /// Register a fresh default station at the origin.
    pub fn add_home_station(&mut self) -> BaseId {
        self.add_base(Base::home_station())
    }

    /// Construct a ship bound to `home` at `(x, y)` with `fuel`.
    ///
    /// An id is drawn before validation, so a rejected ship still uses
    /// one up. The ship starts undocked.
    pub fn commission_ship(
        &mut self,
        home: BaseId,
        x: i32,
        y: i32,
        fuel: f64,
    ) -> FleetResult<ShipId> {
        let id = self.ids.next_id();
        require_non_null(self.bases.get(home.index()), "home base")?;
        let ship = Ship::new(id, home, x, y, fuel)?;
        self.ships.insert(id, ship);
        Ok(id)
    }

    /// Construct a ship with default values: a new home station of its
    /// own, origin, 1000 fuel, undocked.
    pub fn commission_default_ship(&mut self) -> ShipId {
        let id = self.ids.next_id();
        let home = self.add_home_station();
        self.ships.insert(id, Ship::with_defaults(id, home));
        id
    }

    // ========== Accessor Methods ==========

    pub fn base(&self, id: BaseId) -> FleetResult<&Base> {
        require_non_null(self.bases.get(id.index()), "base")
    }

    pub fn base_mut(&mut self, id: BaseId) -> FleetResult<&mut Base> {
        require_non_null(self.bases.get_mut(id.index()), "base")
    }

    pub fn ship(&self, id: ShipId) -> FleetResult<&Ship> {
        require_non_null(self.ships.get(&id), "ship")
    }

    pub fn ship_mut(&mut self, id: ShipId) -> FleetResult<&mut Ship> {
        require_non_null(self.ships.get_mut(&id), "ship")
    }

    /// All bases with their ids, in registration order.
    pub fn bases(&self) -> impl Iterator<Item = (BaseId, &Base)> {
        self.bases
            .iter()
            .enumerate()
            .map(|(index, base)| (BaseId::new(index), base))
    }

    /// All ships in ascending id order.
    pub fn ships(&self) -> impl Iterator<Item = &Ship> {
        self.ships.values()
    }

    pub fn base_count(&self) -> usize {
        self.bases.len()
    }

    pub fn ship_count(&self) -> usize {
        self.ships.len()
    }

    /// Ships docked at `base`, in the current list order.
    pub fn docked_ships(&self, base: BaseId) -> FleetResult<Vec<&Ship>> {
        let base = self.base(base)?;
        Ok(base
            .docked
            .iter()
            .filter_map(|id| self.ships.get(id))
            .collect())
    }

    /// The base whose docked list contains `ship`, if any.
    pub fn base_holding(&self, ship: ShipId) -> Option<BaseId> {
        self.bases()
            .find(|(_, base)| base.is_docked(ship))
            .map(|(id, _)| id)
    }
}
