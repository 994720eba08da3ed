use thiserror::Error;

use crate::domain::traveler::TravelerIdError;
use crate::domain::trip::models::TripId;

/// Error for TripId parsing failures.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TripIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Error for TripTitle validation failures.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TripTitleError {
    #[error("Trip title cannot be empty")]
    Empty,

    #[error("Trip title too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Error for Destination validation failures.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DestinationError {
    #[error("Destination cannot be empty")]
    Empty,
}

/// Top-level error for all trip operations.
#[derive(Debug, Clone, Error)]
pub enum TripError {
    #[error("Invalid trip ID: {0}")]
    InvalidTripId(#[from] TripIdError),

    #[error("Invalid trip title: {0}")]
    InvalidTitle(#[from] TripTitleError),

    #[error("Invalid destination: {0}")]
    InvalidDestination(#[from] DestinationError),

    #[error("Invalid traveler ID: {0}")]
    InvalidTravelerId(#[from] TravelerIdError),

    #[error("Trip not found: {0}")]
    NotFound(TripId),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}
