//! Domain models
//!
//! Bases, ships and the fleet registry that ties them together, plus the
//! error type and validation helpers every model uses.

pub mod base;
pub mod constants;
pub mod errors;
pub mod fleet;
pub mod ids;
pub mod position;
pub mod ship;
pub mod validation;
