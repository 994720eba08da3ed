use auth::Identity;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;

use crate::domain::traveler::TravelerId;
use crate::domain::trip::models::CreateTripCommand;
use crate::domain::trip::models::Destination;
use crate::domain::trip::models::TripTitle;
use crate::domain::trip::ports::TripServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::CreateTripRequest;
use crate::inbound::http::handlers::TripResponseData;
use crate::inbound::http::router::AppState;

/// The trip's host is the verified caller; the request body cannot name a
/// different one.
pub async fn create_trip(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Json(req): Json<CreateTripRequest>,
) -> Result<ApiSuccess<TripResponseData>, ApiError> {
    let host_id = TravelerId::from_string(identity.id())
        .map_err(|_| ApiError::Unauthorized("Invalid token format".to_string()))?;

    let title =
        TripTitle::new(req.title).map_err(|e| ApiError::UnprocessableEntity(e.to_string()))?;
    let destination = Destination::new(req.destination)
        .map_err(|e| ApiError::UnprocessableEntity(e.to_string()))?;

    let command = CreateTripCommand {
        title,
        destination,
        description: req.description,
    };

    state
        .trip_service
        .create_trip(command, host_id)
        .await
        .map_err(ApiError::from)
        .map(|ref trip| ApiSuccess::new(StatusCode::CREATED, trip.into()))
}
