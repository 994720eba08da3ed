use std::sync::Arc;

use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use scylla::Session;
use uuid::Uuid;

use crate::domain::traveler::TravelerId;
use crate::domain::trip::errors::TripError;
use crate::domain::trip::models::Destination;
use crate::domain::trip::models::Trip;
use crate::domain::trip::models::TripId;
use crate::domain::trip::models::TripTitle;
use crate::domain::trip::ports::TripRepository;

type TripRow = (Uuid, String, String, Option<String>, Uuid, DateTime<Utc>);

pub struct ScyllaTripRepository {
    session: Arc<Session>,
}

impl ScyllaTripRepository {
    pub fn new(session: Arc<Session>) -> Self {
        Self { session }
    }

    fn row_to_trip(row: TripRow) -> Result<Trip, TripError> {
        let (id, title, destination, description, host_id, created_at) = row;

        Ok(Trip {
            id: TripId(id),
            title: TripTitle::new(title)?,
            destination: Destination::new(destination)?,
            description,
            host_id: TravelerId(host_id),
            created_at,
        })
    }
}

#[async_trait]
impl TripRepository for ScyllaTripRepository {
    async fn create(&self, trip: Trip) -> Result<Trip, TripError> {
        self.session
            .query(
                "INSERT INTO trips (id, title, destination, description, host_id, created_at)
                 VALUES (?, ?, ?, ?, ?, ?)",
                (
                    trip.id.as_uuid(),
                    trip.title.as_str(),
                    trip.destination.as_str(),
                    trip.description.as_deref(),
                    trip.host_id.as_uuid(),
                    trip.created_at,
                ),
            )
            .await
            .map_err(|e| TripError::DatabaseError(e.to_string()))?;

        Ok(trip)
    }

    async fn find_by_id(&self, id: TripId) -> Result<Option<Trip>, TripError> {
        let result = self
            .session
            .query(
                "SELECT id, title, destination, description, host_id, created_at
                 FROM trips
                 WHERE id = ?",
                (id.as_uuid(),),
            )
            .await
            .map_err(|e| TripError::DatabaseError(e.to_string()))?;

        let row = match result.rows {
            Some(rows) => rows.into_iter().next(),
            None => None,
        };

        match row {
            Some(row) => {
                let typed = row
                    .into_typed::<TripRow>()
                    .map_err(|e| TripError::DatabaseError(e.to_string()))?;
                Ok(Some(Self::row_to_trip(typed)?))
            }
            None => Ok(None),
        }
    }

    async fn list_all(&self) -> Result<Vec<Trip>, TripError> {
        let result = self
            .session
            .query(
                "SELECT id, title, destination, description, host_id, created_at FROM trips",
                &[],
            )
            .await
            .map_err(|e| TripError::DatabaseError(e.to_string()))?;

        let mut trips = Vec::new();
        if let Some(rows) = result.rows {
            for row in rows {
                let typed = row
                    .into_typed::<TripRow>()
                    .map_err(|e| TripError::DatabaseError(e.to_string()))?;
                trips.push(Self::row_to_trip(typed)?);
            }
        }

        Ok(trips)
    }

    async fn delete(&self, id: TripId) -> Result<(), TripError> {
        self.session
            .query("DELETE FROM trips WHERE id = ?", (id.as_uuid(),))
            .await
            .map_err(|e| TripError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
