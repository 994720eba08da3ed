use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Classified authentication/authorization outcome.
///
/// Every failure in the auth layer collapses into one of three externally
/// observable classes, checked in priority order: `Unauthorized` (missing,
/// malformed, tampered, wrong-issuer, or expired credential, deliberately
/// indistinguishable to the caller), then `Forbidden` (valid credential,
/// insufficient role), then `Internal`. Handlers translate these without
/// altering the classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Invalid or missing credentials")]
    Unauthorized,

    #[error("Insufficient permissions")]
    Forbidden,

    #[error("Internal authentication failure")]
    Internal,
}

impl AuthError {
    /// Transport status for this class: 401, 403, or 500.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::Unauthorized => StatusCode::UNAUTHORIZED,
            AuthError::Forbidden => StatusCode::FORBIDDEN,
            AuthError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": self.to_string()
        }));

        (self.status_code(), body).into_response()
    }
}
