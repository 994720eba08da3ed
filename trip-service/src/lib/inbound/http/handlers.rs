pub mod posts;
pub mod trips;

// Re-export handlers for easy access
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
pub use posts::create_post;
pub use posts::get_trip_posts;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;
pub use trips::create_trip;
pub use trips::delete_trip;
pub use trips::get_trip;
pub use trips::list_trips;

use crate::domain::post::errors::PostError;
use crate::domain::post::models::Post;
use crate::domain::trip::errors::TripError;
use crate::domain::trip::models::Trip;

/// Standardized API success response: the payload is the body, unwrapped.
#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize> {
    status: StatusCode,
    pub data: T,
}

impl<T: Serialize> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        Self { status, data }
    }
}

impl<T: Serialize> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.status, Json(self.data)).into_response()
    }
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unprocessable entity: {0}")]
    UnprocessableEntity(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Internal server error: {0}")]
    InternalServerError(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::UnprocessableEntity(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            ApiError::InternalServerError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(serde_json::json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

impl From<TripError> for ApiError {
    fn from(err: TripError) -> Self {
        match err {
            TripError::NotFound(id) => ApiError::NotFound(format!("Trip not found: {}", id)),
            TripError::InvalidTripId(_)
            | TripError::InvalidTitle(_)
            | TripError::InvalidDestination(_)
            | TripError::InvalidTravelerId(_) => ApiError::UnprocessableEntity(err.to_string()),
            TripError::DatabaseError(msg) | TripError::Unknown(msg) => {
                ApiError::InternalServerError(msg)
            }
        }
    }
}

impl From<PostError> for ApiError {
    fn from(err: PostError) -> Self {
        match err {
            PostError::TripNotFound(id) => ApiError::NotFound(format!("Trip not found: {}", id)),
            PostError::InvalidPostId(_)
            | PostError::InvalidBody(_)
            | PostError::InvalidTravelerId(_) => ApiError::UnprocessableEntity(err.to_string()),
            PostError::DatabaseError(msg) | PostError::Unknown(msg) => {
                ApiError::InternalServerError(msg)
            }
        }
    }
}

/// Request DTO for creating a trip.
#[derive(Debug, Deserialize)]
pub struct CreateTripRequest {
    pub title: String,
    pub destination: String,
    pub description: Option<String>,
}

/// Request DTO for posting to a trip's feed.
#[derive(Debug, Deserialize)]
pub struct CreatePostRequest {
    pub body: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct TripResponseData {
    pub id: String,
    pub title: String,
    pub destination: String,
    pub description: Option<String>,
    pub host_id: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Trip> for TripResponseData {
    fn from(trip: &Trip) -> Self {
        Self {
            id: trip.id.to_string(),
            title: trip.title.as_str().to_string(),
            destination: trip.destination.as_str().to_string(),
            description: trip.description.clone(),
            host_id: trip.host_id.to_string(),
            created_at: trip.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PostResponseData {
    pub id: String,
    pub trip_id: String,
    pub author_id: String,
    pub body: String,
    pub posted_at: DateTime<Utc>,
}

impl From<&Post> for PostResponseData {
    fn from(post: &Post) -> Self {
        Self {
            id: post.id.to_string(),
            trip_id: post.trip_id.to_string(),
            author_id: post.author_id.to_string(),
            body: post.body.as_str().to_string(),
            posted_at: post.posted_at,
        }
    }
}
