use axum::extract::State;
use axum::http::StatusCode;

use crate::domain::trip::ports::TripServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::TripResponseData;
use crate::inbound::http::router::AppState;

pub async fn list_trips(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<TripResponseData>>, ApiError> {
    state
        .trip_service
        .list_trips()
        .await
        .map_err(ApiError::from)
        .map(|trips| {
            let trip_data: Vec<TripResponseData> = trips.iter().map(|t| t.into()).collect();
            ApiSuccess::new(StatusCode::OK, trip_data)
        })
}
