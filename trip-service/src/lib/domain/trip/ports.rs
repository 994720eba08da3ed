use async_trait::async_trait;

use crate::domain::traveler::TravelerId;
use crate::domain::trip::errors::TripError;
use crate::domain::trip::models::CreateTripCommand;
use crate::domain::trip::models::Trip;
use crate::domain::trip::models::TripId;

/// Port for trip domain service operations.
#[async_trait]
pub trait TripServicePort: Send + Sync + 'static {
    /// Create a new trip hosted by the given traveler.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn create_trip(
        &self,
        command: CreateTripCommand,
        host_id: TravelerId,
    ) -> Result<Trip, TripError>;

    /// Retrieve a trip by identifier.
    ///
    /// # Errors
    /// * `NotFound` - Trip does not exist
    /// * `DatabaseError` - Database operation failed
    async fn get_trip(&self, id: TripId) -> Result<Trip, TripError>;

    /// Retrieve all trips, newest first.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_trips(&self) -> Result<Vec<Trip>, TripError>;

    /// Remove a trip.
    ///
    /// # Errors
    /// * `NotFound` - Trip does not exist
    /// * `DatabaseError` - Database operation failed
    async fn delete_trip(&self, id: TripId) -> Result<(), TripError>;
}

/// Persistence operations for the trip aggregate.
#[async_trait]
pub trait TripRepository: Send + Sync + 'static {
    /// Persist a new trip.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, trip: Trip) -> Result<Trip, TripError>;

    /// Retrieve a trip by identifier (None if not found).
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_id(&self, id: TripId) -> Result<Option<Trip>, TripError>;

    /// Retrieve all trips.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_all(&self) -> Result<Vec<Trip>, TripError>;

    /// Remove a trip.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn delete(&self, id: TripId) -> Result<(), TripError>;
}
