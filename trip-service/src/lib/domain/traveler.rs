use std::fmt;

use thiserror::Error;
use uuid::Uuid;

/// Traveler unique identifier value object.
///
/// This service has no user table of its own: the traveler id arrives as
/// the opaque subject of a verified credential, and everything stored here
/// is keyed by it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TravelerId(pub Uuid);

impl TravelerId {
    /// Parse a traveler ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, TravelerIdError> {
        Uuid::parse_str(s)
            .map(TravelerId)
            .map_err(|e| TravelerIdError::InvalidFormat(e.to_string()))
    }

    /// Get a reference to the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for TravelerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Error for TravelerId parsing failures.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TravelerIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}
