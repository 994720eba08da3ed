use axum::extract::Path;
use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;

use crate::domain::post::ports::PostServicePort;
use crate::domain::trip::models::TripId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::PostResponseData;
use crate::inbound::http::router::AppState;

#[derive(Debug, Deserialize)]
pub struct PostQuery {
    limit: Option<i32>,
    before: Option<String>, // ISO 8601 timestamp
}

pub async fn get_trip_posts(
    State(state): State<AppState>,
    Path(trip_id): Path<String>,
    Query(params): Query<PostQuery>,
) -> Result<ApiSuccess<Vec<PostResponseData>>, ApiError> {
    let trip_id =
        TripId::from_string(&trip_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let limit = params.limit.unwrap_or(50);
    let before = params
        .before
        .and_then(|s| chrono::DateTime::parse_from_rfc3339(&s).ok())
        .map(|dt| dt.with_timezone(&chrono::Utc));

    state
        .post_service
        .get_trip_posts(trip_id, limit, before)
        .await
        .map_err(ApiError::from)
        .map(|posts| {
            let post_data: Vec<PostResponseData> = posts.iter().map(|p| p.into()).collect();
            ApiSuccess::new(StatusCode::OK, post_data)
        })
}
