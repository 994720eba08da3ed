use thiserror::Error;

use crate::domain::traveler::TravelerIdError;
use crate::domain::trip::models::TripId;

/// Error for PostId parsing failures.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PostIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Error for PostBody validation failures.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PostBodyError {
    #[error("Post body cannot be empty")]
    Empty,

    #[error("Post body too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Top-level error for all post operations.
#[derive(Debug, Clone, Error)]
pub enum PostError {
    #[error("Invalid post ID: {0}")]
    InvalidPostId(#[from] PostIdError),

    #[error("Invalid post body: {0}")]
    InvalidBody(#[from] PostBodyError),

    #[error("Invalid traveler ID: {0}")]
    InvalidTravelerId(#[from] TravelerIdError),

    #[error("Trip not found: {0}")]
    TripNotFound(TripId),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}
