//! Error types for the itinerary crates.

use thiserror::Error;
use uuid::Uuid;

/// Errors that can occur in itinerary operations.
#[derive(Error, Debug)]
pub enum ItineraryError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{field}: {reason}")]
    InvalidField { field: &'static str, reason: String },

    #[error("Invalid date range: {0}")]
    InvalidRange(String),

    #[error("Trip item not found: {0}")]
    ItemNotFound(Uuid),

    #[error("More than one trip item has id {0}")]
    DuplicateId(Uuid),

    #[error("No trip item matches '{0}'")]
    UnknownId(String),

    #[error("'{0}' matches more than one trip item, use a longer prefix")]
    AmbiguousId(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl ItineraryError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        ItineraryError::InvalidField {
            field,
            reason: reason.into(),
        }
    }
}

/// Result type alias for itinerary operations.
pub type ItineraryResult<T> = Result<T, ItineraryError>;
