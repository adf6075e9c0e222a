//! Fleet services
//!
//! Movement physics and seeded scenario generation.

pub mod navigation;
pub mod scenario;
