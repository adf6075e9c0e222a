use thiserror::Error;

use super::ids::ShipId;

/// Fleet-specific error types
///
/// Every validation and business-rule failure in the crate is reported
/// through this type. Variants only group failures; the message is what
/// callers show.
#[derive(Debug, Error)]
pub enum FleetError {
    /// A required value was absent (unknown id, missing reference)
    #[error("{0} is missing")]
    MissingValue(String),
    /// A value was out of range, blank or too long
    #[error("{0}")]
    InvalidInput(String),
    /// The ship is already in the docked list of the target base
    #[error("ship id {ship} already docked at this base{}", named(.base))]
    AlreadyDocked { ship: ShipId, base: Option<String> },
    /// A move would burn more fuel than the ship carries
    #[error("move_to: lack of fuel ({})", deficit(.required, .available))]
    InsufficientFuel { required: f64, available: f64 },
    /// A predicate check failed
    #[error("{0}")]
    Rejected(String),
    /// A failure wrapped with additional context
    #[error("{message}")]
    Context {
        message: String,
        #[source]
        source: Box<FleetError>,
    },
}

fn named(base: &Option<String>) -> String {
    base.as_deref()
        .map(|name| format!(" '{name}'"))
        .unwrap_or_default()
}

fn deficit(required: &f64, available: &f64) -> f64 {
    available - required
}

/// Type alias for Results using FleetError
pub type FleetResult<T> = Result<T, FleetError>;

impl FleetError {
    /// Wrap this error as the cause of a new, more specific one.
    pub fn context(self, message: impl Into<String>) -> Self {
        FleetError::Context {
            message: message.into(),
            source: Box::new(self),
        }
    }
}
