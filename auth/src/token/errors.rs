use thiserror::Error;

/// Error type for credential codec operations.
#[derive(Debug, Clone, Error)]
pub enum TokenError {
    /// The signing secret is absent or empty. Surfaces at construction so
    /// startup fails instead of running with an insecure default.
    #[error("Signing secret is missing or empty")]
    MissingSecret,

    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    /// Malformed, tampered, or issued by a different trust domain.
    #[error("Token is invalid: {0}")]
    InvalidToken(String),

    #[error("Token is expired")]
    Expired,
}
