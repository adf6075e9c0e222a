//! Presentation
//!
//! Human-readable reports of bases and ships for diagnostics. Not a
//! stable serialization format.

pub mod presenters;
