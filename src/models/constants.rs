/// Fuel tank capacity of every ship.
pub const MAX_FUEL: f64 = 2000.0;
/// Fuel burned per unit of distance travelled.
pub const FUEL_CONSUMPTION_PER_UNIT: f64 = 3.58;
/// Fuel of a ship built without an explicit home base.
pub const DEFAULT_FUEL: f64 = 1000.0;

/// First id handed out by a fresh ship id generator.
pub const FIRST_SHIP_ID: u64 = 100;

pub const MAX_NAME_LENGTH: usize = 255;
pub const DEFAULT_BASE_NAME: &str = "International Space Station";

/// Upper bound (exclusive) for coordinates of generated bases.
pub const SECTOR_EXTENT: i32 = 200;
