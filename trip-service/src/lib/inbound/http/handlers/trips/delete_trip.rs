use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Serialize;

use crate::domain::trip::models::TripId;
use crate::domain::trip::ports::TripServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

/// Admin-only trip removal; the admin gate has already run.
pub async fn delete_trip(
    State(state): State<AppState>,
    Path(trip_id): Path<String>,
) -> Result<ApiSuccess<DeleteTripResponseData>, ApiError> {
    let trip_id =
        TripId::from_string(&trip_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    state
        .trip_service
        .delete_trip(trip_id)
        .await
        .map_err(ApiError::from)
        .map(|_| {
            ApiSuccess::new(
                StatusCode::OK,
                DeleteTripResponseData {
                    id: trip_id.to_string(),
                },
            )
        })
}

#[derive(Debug, Clone, Serialize)]
pub struct DeleteTripResponseData {
    pub id: String,
}
