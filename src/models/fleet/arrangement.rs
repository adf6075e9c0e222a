//! Ordering queries over a base's docked ships
//!
//! Both queries sort the live docked list in place (stable sort) and
//! return the ships in the new order.

use std::collections::BTreeMap;

use super::Fleet;
use crate::models::errors::FleetResult;
use crate::models::ids::{BaseId, ShipId};
use crate::models::ship::Ship;
use crate::models::validation::require_non_null;

fn fuel_of(ships: &BTreeMap<ShipId, Ship>, id: ShipId) -> f64 {
    ships.get(&id).map_or(0.0, Ship::fuel)
}

impl Fleet {
    /// Docked ships in ascending id order.
    pub fn arrange_ships(&mut self, base: BaseId) -> FleetResult<Vec<&Ship>> {
        let target = require_non_null(self.bases.get_mut(base.index()), "base")?;
        target.docked.sort();
        self.docked_ships(base)
    }

    /// Docked ships in ascending fuel order; equal fuel keeps list order.
    pub fn arrange_ships_by_fuel(&mut self, base: BaseId) -> FleetResult<Vec<&Ship>> {
        let ships = &self.ships;
        let target = require_non_null(self.bases.get_mut(base.index()), "base")?;
        target
            .docked
            .sort_by(|a, b| fuel_of(ships, *a).total_cmp(&fuel_of(ships, *b)));
        self.docked_ships(base)
    }
}
