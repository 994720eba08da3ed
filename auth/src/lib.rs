//! Stateless authentication and role-authorization core.
//!
//! Shared by every Roamly service so that handlers over unrelated storage
//! backends get identical, composable guarantees without sharing session
//! state:
//! - Signed, time-bounded bearer credentials (JWT, HS256)
//! - Bearer extraction from inbound request headers
//! - Password hashing (Argon2id) for the login flow
//! - Role-based authorization over the flat `{user, admin}` set
//! - A uniform axum gate ([`gate`]) mapping every failure to the closed
//!   `Unauthorized` / `Forbidden` / `Internal` taxonomy
//!
//! The signing secret is mandatory configuration: construction fails on an
//! empty secret, and no default secret exists anywhere in the crate.
//!
//! # Examples
//!
//! ## Complete authentication flow
//! ```
//! use auth::{authorize, AuthError, Authenticator, Role};
//!
//! let auth = Authenticator::new(b"secret_key_at_least_32_bytes_long!").unwrap();
//!
//! // Register: hash the password for storage.
//! let hash = auth.hash_password("password123").unwrap();
//!
//! // Login: verify the password and issue a bearer credential from the
//! // matched store record.
//! let login = auth
//!     .login("password123", &hash, "42", "alice", Role::User)
//!     .unwrap();
//!
//! // Each request: resolve the verified identity from the headers.
//! let mut headers = http::HeaderMap::new();
//! headers.insert(
//!     http::header::AUTHORIZATION,
//!     format!("Bearer {}", login.access_token).parse().unwrap(),
//! );
//! let identity = auth.authenticate(&headers).unwrap();
//! assert_eq!(identity.username(), "alice");
//!
//! // Role gate: exact match only.
//! assert_eq!(
//!     authorize(&identity, Role::Admin),
//!     Err(AuthError::Forbidden)
//! );
//! ```

pub mod authenticator;
pub mod authorizer;
pub mod bearer;
pub mod error;
pub mod gate;
pub mod identity;
pub mod password;
pub mod token;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use authorizer::authorize;
pub use bearer::bearer_token;
pub use error::AuthError;
pub use identity::Identity;
pub use identity::Role;
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use token::Claims;
pub use token::TokenCodec;
pub use token::TokenError;
