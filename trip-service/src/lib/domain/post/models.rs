use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use uuid::Timestamp;
use uuid::Uuid;

use crate::domain::post::errors::PostBodyError;
use crate::domain::post::errors::PostIdError;
use crate::domain::traveler::TravelerId;
use crate::domain::trip::models::TripId;

/// Post aggregate root entity.
///
/// A single entry in a trip's feed (journal note or chat line), authored by
/// the verified caller.
#[derive(Debug, Clone)]
pub struct Post {
    pub id: PostId,
    pub trip_id: TripId,
    pub author_id: TravelerId,
    pub body: PostBody,
    pub posted_at: DateTime<Utc>,
}

/// Post unique identifier value object.
///
/// Uses UUID v1 (TimeUUID) for Cassandra compatibility and time-based
/// clustering within a trip's feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PostId(pub Uuid);

impl PostId {
    /// Generate a new time-based post ID.
    pub fn new_time_based() -> Self {
        let timestamp = Timestamp::now(uuid::timestamp::context::NoContext);
        let node_id = [0u8; 6];
        Self(Uuid::new_v1(timestamp, &node_id))
    }

    /// Parse a post ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, PostIdError> {
        Uuid::parse_str(s)
            .map(PostId)
            .map_err(|e| PostIdError::InvalidFormat(e.to_string()))
    }

    /// Get a reference to the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Post body value object with validation.
///
/// Non-empty, at most 4000 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostBody(String);

impl PostBody {
    const MAX_LENGTH: usize = 4000;

    /// Create a new validated post body.
    ///
    /// # Errors
    /// * `Empty` - Body is empty string
    /// * `TooLong` - Body exceeds 4000 characters
    pub fn new(body: String) -> Result<Self, PostBodyError> {
        let length = body.len();
        if length == 0 {
            Err(PostBodyError::Empty)
        } else if length > Self::MAX_LENGTH {
            Err(PostBodyError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            })
        } else {
            Ok(Self(body))
        }
    }

    /// Get body as string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
