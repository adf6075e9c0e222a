//! Movement physics
//!
//! Distance between two positions and the fuel a ship burns covering it.

use crate::models::constants::FUEL_CONSUMPTION_PER_UNIT;
use crate::models::position::Position;

/// Euclidean distance between two positions.
pub fn calculate_distance(from: Position, to: Position) -> f64 {
    let dx = (to.x - from.x) as f64;
    let dy = (to.y - from.y) as f64;
    (dx * dx + dy * dy).sqrt()
}

/// Fuel burned travelling `distance`. Negative distances burn nothing.
pub fn fuel_consumption(distance: f64) -> f64 {
    if distance >= 0.0 {
        distance * FUEL_CONSUMPTION_PER_UNIT
    } else {
        0.0
    }
}
