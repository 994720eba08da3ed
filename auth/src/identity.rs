use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use crate::token::Claims;

/// Flat role classification of a subject.
///
/// There is no hierarchy between roles: authorization is an exact match,
/// so `Admin` does not imply `User`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
}

impl Role {
    /// Get the wire representation of the role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for role parsing failures.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RoleError {
    #[error("Unknown role: {0}")]
    Unknown(String),
}

impl FromStr for Role {
    type Err = RoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(Role::User),
            "admin" => Ok(Role::Admin),
            other => Err(RoleError::Unknown(other.to_string())),
        }
    }
}

/// Verified caller identity, scoped to a single request.
///
/// An `Identity` exists only as the output of successful credential
/// verification: the fields are private and the constructor is
/// crate-private, so no code path can fabricate one from unverified input.
/// It is carried in request extensions for the lifetime of the request and
/// never persisted.
#[derive(Debug, Clone)]
pub struct Identity {
    id: String,
    username: String,
    role: Role,
}

impl Identity {
    pub(crate) fn from_claims(claims: Claims) -> Self {
        Self {
            id: claims.sub,
            username: claims.username,
            role: claims.role,
        }
    }

    /// Opaque subject identifier embedded at issuance.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Username embedded at issuance.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Role embedded at issuance.
    ///
    /// Never refreshed from the credential store: a role changed after
    /// issuance takes effect only once the old credential expires.
    pub fn role(&self) -> Role {
        self.role
    }
}
