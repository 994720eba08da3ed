use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use super::errors::TripError;
use super::models::CreateTripCommand;
use super::models::Trip;
use super::models::TripId;
use super::ports::TripRepository;
use super::ports::TripServicePort;
use crate::domain::traveler::TravelerId;

/// Concrete implementation of TripServicePort.
///
/// The host of a new trip is always the verified caller identity passed in
/// by the handler; it never comes from the request body.
pub struct TripService<TR>
where
    TR: TripRepository,
{
    trip_repository: Arc<TR>,
}

impl<TR> TripService<TR>
where
    TR: TripRepository,
{
    pub fn new(trip_repository: Arc<TR>) -> Self {
        Self { trip_repository }
    }
}

#[async_trait]
impl<TR> TripServicePort for TripService<TR>
where
    TR: TripRepository + 'static,
{
    async fn create_trip(
        &self,
        command: CreateTripCommand,
        host_id: TravelerId,
    ) -> Result<Trip, TripError> {
        let trip = Trip {
            id: TripId::new(),
            title: command.title,
            destination: command.destination,
            description: command.description,
            host_id,
            created_at: Utc::now(),
        };

        self.trip_repository.create(trip).await
    }

    async fn get_trip(&self, id: TripId) -> Result<Trip, TripError> {
        self.trip_repository
            .find_by_id(id)
            .await?
            .ok_or(TripError::NotFound(id))
    }

    async fn list_trips(&self) -> Result<Vec<Trip>, TripError> {
        self.trip_repository.list_all().await
    }

    async fn delete_trip(&self, id: TripId) -> Result<(), TripError> {
        // Deleting an unknown trip reports NotFound rather than silently
        // succeeding.
        self.trip_repository
            .find_by_id(id)
            .await?
            .ok_or(TripError::NotFound(id))?;

        self.trip_repository.delete(id).await
    }
}
