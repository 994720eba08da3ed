use serde::Deserialize;
use serde::Serialize;

use crate::identity::Role;

/// Identity claims embedded in a credential.
///
/// Bound at issuance and immutable from then on; the credential is
/// self-contained and nothing here is persisted server-side. Temporal
/// bounds are Unix timestamps in seconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: opaque account identifier.
    pub sub: String,

    /// Username at issuance.
    pub username: String,

    /// Role at issuance.
    pub role: Role,

    /// Issued at (Unix timestamp).
    pub iat: i64,

    /// Expiration (Unix timestamp). A credential is expired once
    /// `now >= exp`; no leeway is applied.
    pub exp: i64,

    /// Issuing trust domain tag, checked on verification.
    pub iss: String,
}
