use auth::Identity;
use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;

use crate::domain::post::models::PostBody;
use crate::domain::post::ports::PostServicePort;
use crate::domain::traveler::TravelerId;
use crate::domain::trip::models::TripId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::CreatePostRequest;
use crate::inbound::http::handlers::PostResponseData;
use crate::inbound::http::router::AppState;

/// The post's author is the verified caller identity from the credential,
/// never a field of the request body.
pub async fn create_post(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Path(trip_id): Path<String>,
    Json(req): Json<CreatePostRequest>,
) -> Result<ApiSuccess<PostResponseData>, ApiError> {
    let trip_id =
        TripId::from_string(&trip_id).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let author_id = TravelerId::from_string(identity.id())
        .map_err(|_| ApiError::Unauthorized("Invalid token format".to_string()))?;

    let body =
        PostBody::new(req.body).map_err(|e| ApiError::UnprocessableEntity(e.to_string()))?;

    state
        .post_service
        .create_post(trip_id, author_id, body)
        .await
        .map_err(ApiError::from)
        .map(|ref post| ApiSuccess::new(StatusCode::CREATED, post.into()))
}
