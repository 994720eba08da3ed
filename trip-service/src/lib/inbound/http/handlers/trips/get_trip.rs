use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use crate::domain::trip::models::TripId;
use crate::domain::trip::ports::TripServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::TripResponseData;
use crate::inbound::http::router::AppState;

pub async fn get_trip(
    State(state): State<AppState>,
    Path(trip_id): Path<String>,
) -> Result<ApiSuccess<TripResponseData>, ApiError> {
    let trip_id =
        TripId::from_string(&trip_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    state
        .trip_service
        .get_trip(trip_id)
        .await
        .map_err(ApiError::from)
        .map(|ref trip| ApiSuccess::new(StatusCode::OK, trip.into()))
}
