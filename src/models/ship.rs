use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use tracing::debug;

use super::constants::{DEFAULT_FUEL, MAX_FUEL};
use super::errors::{FleetError, FleetResult};
use super::ids::{BaseId, ShipId};
use super::position::Position;
use crate::services::navigation::{calculate_distance, fuel_consumption};

/// A ship of the fleet.
///
/// Bases are referenced by id, never owned: `home_base` is fixed at
/// construction, `docking_base` is kept in step with the bases' docked
/// lists by the fleet's docking protocol.
#[derive(Debug, Clone)]
pub struct Ship {
    id: ShipId,
    position: Position,
    fuel: f64,
    home_base: BaseId,
    docking_base: Option<BaseId>,
}

impl Ship {
    /// Build a ship at `(x, y)` with `fuel` loaded into an empty tank.
    ///
    /// Fails if either coordinate is negative or `fuel` is outside
    /// `[0, MAX_FUEL]`. The new ship is not docked anywhere.
    pub fn new(id: ShipId, home_base: BaseId, x: i32, y: i32, fuel: f64) -> FleetResult<Self> {
        let position = Position::new(x, y)?;
        let mut ship = Ship {
            id,
            position,
            fuel: 0.0,
            home_base,
            docking_base: None,
        };
        ship.refuel(fuel)?;
        Ok(ship)
    }

    /// Trusted construction of a ship with default values: origin,
    /// `DEFAULT_FUEL`, undocked.
    pub(crate) fn with_defaults(id: ShipId, home_base: BaseId) -> Self {
        Ship {
            id,
            position: Position::ORIGIN,
            fuel: DEFAULT_FUEL,
            home_base,
            docking_base: None,
        }
    }

    pub fn id(&self) -> ShipId {
        self.id
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn fuel(&self) -> f64 {
        self.fuel
    }

    pub fn home_base(&self) -> BaseId {
        self.home_base
    }

    pub fn docking_base(&self) -> Option<BaseId> {
        self.docking_base
    }

    /// Add `amount` to the tank.
    ///
    /// Rejects negative amounts and amounts that would overfill the tank;
    /// the tank is left untouched on failure.
    pub fn refuel(&mut self, amount: f64) -> FleetResult<()> {
        if amount.is_nan() || amount < 0.0 {
            return Err(FleetError::InvalidInput(format!(
                "refuel: amount {amount} is too low"
            )));
        }
        if amount + self.fuel > MAX_FUEL {
            return Err(FleetError::InvalidInput(format!(
                "refuel: amount {amount} is too much"
            )));
        }
        self.fuel = (amount + self.fuel).min(MAX_FUEL);
        Ok(())
    }

    /// Fly to `(x, y)`, burning fuel for the distance covered.
    ///
    /// Position and fuel only change if the whole move is possible.
    /// Docking state is not touched.
    pub fn move_to(&mut self, x: i32, y: i32) -> FleetResult<()> {
        if x < 0 || y < 0 {
            return Err(FleetError::InvalidInput(format!(
                "move_to: wrong target position {x}/{y}"
            )));
        }
        let target = Position { x, y };
        let required = fuel_consumption(calculate_distance(self.position, target));
        if self.fuel - required < 0.0 {
            return Err(FleetError::InsufficientFuel {
                required,
                available: self.fuel,
            });
        }

        debug!(ship = %self.id, from = %self.position, to = %target, burned = required, "ship moved");
        self.position = target;
        self.fuel -= required;
        Ok(())
    }

    /// Record the base the ship is docked at. Docking at the home base
    /// fills the tank.
    ///
    /// Only the fleet's docking protocol calls this; it does not touch any
    /// base's docked list.
    pub(crate) fn set_docking_base(&mut self, base: BaseId) {
        self.docking_base = Some(base);
        if self.is_home_base(base) {
            self.fuel = MAX_FUEL;
        }
    }

    pub fn is_home_base(&self, base: BaseId) -> bool {
        self.home_base == base
    }
}

impl PartialEq for Ship {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Ship {}

impl Hash for Ship {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl PartialOrd for Ship {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Ship {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}
