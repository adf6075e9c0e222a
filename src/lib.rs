//! Space fleet management
//!
//! Ships dock at bases, burn fuel when they fly, and are relocated
//! between bases.
//!
//! # Overview
//!
//! A [`Fleet`] owns every [`Base`] and every [`Ship`]. Bases and ships
//! refer to each other by id ([`BaseId`], [`ShipId`]); the fleet runs the
//! docking protocol that keeps a base's docked list and a ship's docking
//! base consistent.
//!
//! # Modules
//!
//! - [`models`] - Domain models (Base, Ship, Fleet, errors, validation)
//! - [`services`] - Movement physics and seeded scenario generation
//! - [`io`] - Output abstraction for reports
//! - [`ui`] - Human-readable rendering
//! - [`cli`] - Arguments of the demo binary
//!
//! # Example
//!
//! ```rust
//! use spacefleet::{Base, Fleet};
//!
//! let mut fleet = Fleet::new();
//! let station = fleet.add_home_station();
//! let mir = fleet.add_base(Base::new("Mir", 3, 4)?);
//!
//! let ship = fleet.build_ship(station)?;
//! let outcome = fleet.move_ship_to(station, ship, mir);
//! assert_eq!(outcome.moved_ship(), Some(ship));
//! # Ok::<(), spacefleet::FleetError>(())
//! ```

pub mod cli;
pub mod io;
pub mod models;
pub mod services;
pub mod ui;

// Re-export commonly used types
pub use models::base::Base;
pub use models::errors::{FleetError, FleetResult};
pub use models::fleet::{Fleet, Relocation};
pub use models::ids::{BaseId, ShipId, ShipIdGenerator};
pub use models::position::Position;
pub use models::ship::Ship;
