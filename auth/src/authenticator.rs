use http::HeaderMap;

use crate::bearer;
use crate::error::AuthError;
use crate::identity::Identity;
use crate::identity::Role;
use crate::password::PasswordError;
use crate::password::PasswordHasher;
use crate::token::TokenCodec;
use crate::token::TokenError;

/// Authentication coordinator combining the credential codec, the bearer
/// extractor, and password verification.
///
/// One instance is shared process-wide and holds no mutable state: every
/// request's check is independent and may run concurrently with any number
/// of others. On the login side it verifies passwords and issues
/// credentials; on the request side it resolves a verified [`Identity`]
/// from inbound headers.
pub struct Authenticator {
    codec: TokenCodec,
    password_hasher: PasswordHasher,
}

/// Result of a successful login.
pub struct AuthenticationResult {
    /// Bearer credential to hand back to the client.
    pub access_token: String,
}

/// Login flow errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password error: {0}")]
    Password(#[from] PasswordError),

    #[error("Token error: {0}")]
    Token(#[from] TokenError),
}

impl Authenticator {
    /// Create an authenticator from the shared signing secret.
    ///
    /// # Errors
    /// * `MissingSecret` - Secret is empty; callers should abort startup
    pub fn new(secret: &[u8]) -> Result<Self, TokenError> {
        Ok(Self {
            codec: TokenCodec::new(secret)?,
            password_hasher: PasswordHasher::new(),
        })
    }

    /// Hash a password for storage.
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Verify a password against a credential-store hash and issue a
    /// credential for the matched account.
    ///
    /// The claims come from the already-matched store record; this layer
    /// does not look the account up itself.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match
    /// * `Password` - Stored hash could not be processed
    /// * `Token` - Credential encoding failed
    pub fn login(
        &self,
        password: &str,
        stored_hash: &str,
        sub: &str,
        username: &str,
        role: Role,
    ) -> Result<AuthenticationResult, AuthenticationError> {
        let is_valid = self.password_hasher.verify(password, stored_hash)?;

        if !is_valid {
            return Err(AuthenticationError::InvalidCredentials);
        }

        let access_token = self.codec.issue(sub, username, role)?;

        Ok(AuthenticationResult { access_token })
    }

    /// Issue a credential without password verification.
    ///
    /// For flows where the caller has already been verified by other means.
    pub fn issue_token(&self, sub: &str, username: &str, role: Role) -> Result<String, TokenError> {
        self.codec.issue(sub, username, role)
    }

    /// Resolve the verified identity presented by a request.
    ///
    /// Extraction failure and every codec failure collapse to
    /// `Unauthorized` at this boundary: the finer-grained reason is logged
    /// server-side and deliberately not surfaced, so an unauthenticated
    /// caller cannot distinguish a tampered credential from an expired one.
    ///
    /// On success the returned identity carries exactly the claims embedded
    /// at issuance; the credential store is never re-read here.
    pub fn authenticate(&self, headers: &HeaderMap) -> Result<Identity, AuthError> {
        let token = bearer::bearer_token(headers).ok_or(AuthError::Unauthorized)?;

        let claims = self.codec.verify(token).map_err(|e| {
            tracing::warn!(reason = %e, "credential rejected");
            AuthError::Unauthorized
        })?;

        Ok(Identity::from_claims(claims))
    }
}

#[cfg(test)]
mod tests {
    use http::header::AUTHORIZATION;

    use super::*;

    const SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

    fn authenticator() -> Authenticator {
        Authenticator::new(SECRET).expect("Failed to create authenticator")
    }

    fn bearer_headers(token: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, format!("Bearer {}", token).parse().unwrap());
        headers
    }

    #[test]
    fn test_empty_secret_rejected() {
        assert!(matches!(
            Authenticator::new(b""),
            Err(TokenError::MissingSecret)
        ));
    }

    #[test]
    fn test_login_and_authenticate_round_trip() {
        let auth = authenticator();

        let hash = auth.hash_password("pass_word!").unwrap();
        let result = auth
            .login("pass_word!", &hash, "42", "alice", Role::User)
            .expect("Login failed");

        let identity = auth
            .authenticate(&bearer_headers(&result.access_token))
            .expect("Authentication failed");

        assert_eq!(identity.id(), "42");
        assert_eq!(identity.username(), "alice");
        assert_eq!(identity.role(), Role::User);
    }

    #[test]
    fn test_login_wrong_password() {
        let auth = authenticator();

        let hash = auth.hash_password("pass_word!").unwrap();
        let result = auth.login("wrong", &hash, "42", "alice", Role::User);

        assert!(matches!(
            result,
            Err(AuthenticationError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_authenticate_without_header() {
        let result = authenticator().authenticate(&HeaderMap::new());
        assert_eq!(result.unwrap_err(), AuthError::Unauthorized);
    }

    #[test]
    fn test_authenticate_tampered_token() {
        let auth = authenticator();

        let token = auth.issue_token("42", "alice", Role::User).unwrap();
        let mut tampered = token[..token.len() - 1].to_string();
        tampered.push(if token.ends_with('A') { 'B' } else { 'A' });

        let result = auth.authenticate(&bearer_headers(&tampered));
        assert_eq!(result.unwrap_err(), AuthError::Unauthorized);
    }

    #[test]
    fn test_authenticate_foreign_secret_token() {
        let auth = authenticator();
        let other = Authenticator::new(b"another-secret-key-also-32-bytes-long!!").unwrap();

        let token = other.issue_token("42", "alice", Role::Admin).unwrap();

        let result = auth.authenticate(&bearer_headers(&token));
        assert_eq!(result.unwrap_err(), AuthError::Unauthorized);
    }

    #[test]
    fn test_role_embedded_at_issuance_is_preserved() {
        let auth = authenticator();

        let token = auth.issue_token("7", "root", Role::Admin).unwrap();
        let identity = auth.authenticate(&bearer_headers(&token)).unwrap();

        assert_eq!(identity.role(), Role::Admin);
    }
}
