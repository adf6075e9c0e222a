//! Docking protocol
//!
//! The only place where a base's docked list and a ship's docking base
//! change, so the two stay consistent.

use tracing::{debug, info, warn};

use super::Fleet;
use crate::models::constants::MAX_FUEL;
use crate::models::errors::{FleetError, FleetResult};
use crate::models::ids::{BaseId, ShipId};
use crate::models::validation::require_non_null;

/// Outcome of relocating a ship from one base to another.
#[derive(Debug)]
#[must_use]
pub enum Relocation {
    /// The ship flew to the target and docked there.
    Moved(ShipId),
    /// Unknown base, or the ship is not docked at the source base.
    /// Nothing changed.
    NotFound,
    /// The flight was refused (e.g. lack of fuel). Nothing changed.
    MoveRejected(FleetError),
    /// The flight succeeded but docking at the target failed. The ship
    /// keeps its new position and fuel and stays listed at the source.
    NotRedocked(FleetError),
}

impl Relocation {
    /// The relocated ship, or `None` for any kind of failure.
    pub fn moved_ship(&self) -> Option<ShipId> {
        match self {
            Relocation::Moved(id) => Some(*id),
            _ => None,
        }
    }

    pub fn is_moved(&self) -> bool {
        matches!(self, Relocation::Moved(_))
    }
}

impl Fleet {
    /// Dock `ship` at `base`.
    ///
    /// Fails if either id is unknown or the ship is already in this
    /// base's list. On success the ship's docking base becomes `base`
    /// (docking at home fills the tank), it leaves the list of the base
    /// it was docked at before, and it is appended to this base's list.
    pub fn dock(&mut self, base: BaseId, ship: ShipId) -> FleetResult<bool> {
        let target = require_non_null(self.bases.get(base.index()), "base")?;
        let vessel = require_non_null(self.ships.get(&ship), "ship")?;

        if target.is_docked(ship) {
            // An undocked ship has no base name to report.
            let current = vessel
                .docking_base()
                .and_then(|id| self.bases.get(id.index()))
                .map(|b| b.name().to_string());
            return Err(FleetError::AlreadyDocked {
                ship,
                base: current,
            });
        }

        let previous = vessel.docking_base();
        if let Some(old) = previous.and_then(|id| self.bases.get_mut(id.index())) {
            old.docked.retain(|id| *id != ship);
        }

        if let Some(vessel) = self.ships.get_mut(&ship) {
            vessel.set_docking_base(base);
        }
        let target = self.base_mut(base)?;
        target.docked.push(ship);

        debug!(ship = %ship, base = %base, previous = ?previous, "ship docked");
        Ok(true)
    }

    /// Fly a ship docked at `from` to base `to` and dock it there.
    ///
    /// Failures are absorbed into the returned [`Relocation`] instead of
    /// being raised.
    pub fn move_ship_to(&mut self, from: BaseId, ship: ShipId, to: BaseId) -> Relocation {
        let Some(destination) = self.bases.get(to.index()).map(|b| b.position()) else {
            return Relocation::NotFound;
        };
        let docked_here = self
            .bases
            .get(from.index())
            .is_some_and(|b| b.is_docked(ship));
        if !docked_here {
            return Relocation::NotFound;
        }
        let Some(vessel) = self.ships.get_mut(&ship) else {
            return Relocation::NotFound;
        };

        if let Err(err) = vessel.move_to(destination.x, destination.y) {
            warn!(ship = %ship, from = %from, to = %to, error = %err, "relocation aborted, move rejected");
            return Relocation::MoveRejected(err);
        }
        if let Err(err) = self.dock(to, ship) {
            warn!(ship = %ship, from = %from, to = %to, error = %err, "relocation aborted after move, ship not redocked");
            return Relocation::NotRedocked(err);
        }
        if let Some(source) = self.bases.get_mut(from.index()) {
            source.docked.retain(|id| *id != ship);
        }

        debug!(ship = %ship, from = %from, to = %to, "ship relocated");
        Relocation::Moved(ship)
    }

    /// Build a full ship at `base`'s position with `base` as home and dock
    /// it there.
    pub fn build_ship(&mut self, base: BaseId) -> FleetResult<ShipId> {
        let position = self.base(base)?.position();
        let id = self.commission_ship(base, position.x, position.y, MAX_FUEL)?;
        self.dock(base, id)
            .map_err(|err| err.context(format!("build_ship: could not dock ship {id}")))?;

        info!(ship = %id, base = %base, position = %position, "ship built");
        Ok(id)
    }
}
