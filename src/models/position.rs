use std::fmt;

use super::errors::{FleetError, FleetResult};

/// A point in the fleet's two-dimensional space.
/// Both coordinates are non-negative; (0,0) is the origin where the
/// home station sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const ORIGIN: Position = Position { x: 0, y: 0 };

    /// Validated construction: each axis must be non-negative and is
    /// reported separately.
    pub fn new(x: i32, y: i32) -> FleetResult<Self> {
        if x < 0 {
            return Err(FleetError::InvalidInput(format!(
                "x position is not valid ({x})"
            )));
        }
        if y < 0 {
            return Err(FleetError::InvalidInput(format!(
                "y position is not valid ({y})"
            )));
        }
        Ok(Position { x, y })
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.x, self.y)
    }
}
