use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::traveler::TravelerId;
use crate::domain::trip::errors::DestinationError;
use crate::domain::trip::errors::TripIdError;
use crate::domain::trip::errors::TripTitleError;

/// Trip unique identifier value object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TripId(pub Uuid);

impl TripId {
    /// Generate a new random trip ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a trip ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, TripIdError> {
        Uuid::parse_str(s)
            .map(TripId)
            .map_err(|e| TripIdError::InvalidFormat(e.to_string()))
    }

    /// Get a reference to the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for TripId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TripId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Trip aggregate root.
///
/// A bookable journey hosted by a traveler; posts hang off it as a feed.
#[derive(Debug, Clone)]
pub struct Trip {
    pub id: TripId,
    pub title: TripTitle,
    pub destination: Destination,
    pub description: Option<String>,
    pub host_id: TravelerId,
    pub created_at: DateTime<Utc>,
}

/// Trip title value object with validation.
///
/// Non-empty, at most 120 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripTitle(String);

impl TripTitle {
    const MAX_LENGTH: usize = 120;

    /// Create a new validated trip title.
    ///
    /// # Errors
    /// * `Empty` - Title is empty string
    /// * `TooLong` - Title exceeds 120 characters
    pub fn new(title: String) -> Result<Self, TripTitleError> {
        let length = title.len();
        if length == 0 {
            Err(TripTitleError::Empty)
        } else if length > Self::MAX_LENGTH {
            Err(TripTitleError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            })
        } else {
            Ok(Self(title))
        }
    }

    /// Get title as string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Destination value object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Destination(String);

impl Destination {
    /// Create a new validated destination.
    ///
    /// # Errors
    /// * `Empty` - Destination is empty string
    pub fn new(destination: String) -> Result<Self, DestinationError> {
        if destination.is_empty() {
            Err(DestinationError::Empty)
        } else {
            Ok(Self(destination))
        }
    }

    /// Get destination as string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Command to create a trip.
#[derive(Debug)]
pub struct CreateTripCommand {
    pub title: TripTitle,
    pub destination: Destination,
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trip_title_validation() {
        assert!(TripTitle::new("Sailing the Cyclades".to_string()).is_ok());
        assert!(TripTitle::new(String::new()).is_err());
        assert!(TripTitle::new("x".repeat(121)).is_err());
    }

    #[test]
    fn test_destination_validation() {
        assert!(Destination::new("Naxos".to_string()).is_ok());
        assert_eq!(
            Destination::new(String::new()),
            Err(DestinationError::Empty)
        );
    }
}
