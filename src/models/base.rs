use super::constants::{DEFAULT_BASE_NAME, MAX_NAME_LENGTH};
use super::errors::FleetResult;
use super::ids::ShipId;
use super::position::Position;
use super::validation::require_max_length;

/// A fixed station ships dock at.
///
/// The docked list holds ship ids in docking order. It only changes
/// through the fleet's docking and relocation operations (and the
/// in-place sorts of the arrange queries).
#[derive(Debug, Clone)]
pub struct Base {
    name: String,
    position: Position,
    pub(crate) docked: Vec<ShipId>,
}

impl Default for Base {
    fn default() -> Self {
        Self::home_station()
    }
}

impl Base {
    /// Validated construction.
    pub fn new(name: &str, x: i32, y: i32) -> FleetResult<Self> {
        let name = require_max_length(name, MAX_NAME_LENGTH, "name")?;
        let position = Position::new(x, y)?;
        Ok(Base {
            name: name.to_string(),
            position,
            docked: Vec::new(),
        })
    }

    /// Trusted construction of the default station at the origin.
    /// Skips validation; the values are known good.
    pub fn home_station() -> Self {
        Base {
            name: DEFAULT_BASE_NAME.to_string(),
            position: Position::ORIGIN,
            docked: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rename the base. Blank names and names over 255 characters are
    /// rejected and leave the old name in place.
    pub fn set_name(&mut self, name: &str) -> FleetResult<()> {
        self.name = require_max_length(name, MAX_NAME_LENGTH, "name")?.to_string();
        Ok(())
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// Ids of the docked ships in their current list order.
    pub fn docked_ships(&self) -> &[ShipId] {
        &self.docked
    }

    pub fn ship_count(&self) -> usize {
        self.docked.len()
    }

    pub fn is_docked(&self, ship: ShipId) -> bool {
        self.docked.contains(&ship)
    }
}
