use chrono::Utc;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::errors::TokenError;
use crate::identity::Role;

/// Issuer tag bound into every credential and checked on verification.
///
/// Credentials carrying any other tag are rejected as coming from a
/// different trust domain.
pub const ISSUER: &str = "roamly";

/// Fixed credential lifetime: 12 hours.
const TTL_SECONDS: i64 = 12 * 60 * 60;

/// Signed credential codec.
///
/// Encodes identity claims into a time-bounded HS256 JWS and verifies
/// presented credentials back into claims. Pure computation: no HTTP, no
/// storage, no mutation of tokens. Verification reads the wall clock once
/// per call and is otherwise a function of the credential alone.
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
}

impl TokenCodec {
    /// Create a codec from the shared signing secret.
    ///
    /// The secret is mandatory configuration: an empty secret is rejected
    /// here so the process fails at startup rather than issuing credentials
    /// under a guessable key. Use at least 32 bytes for HS256. The secret
    /// is never logged.
    ///
    /// # Errors
    /// * `MissingSecret` - Secret is empty
    pub fn new(secret: &[u8]) -> Result<Self, TokenError> {
        if secret.is_empty() {
            return Err(TokenError::MissingSecret);
        }

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
        })
    }

    /// Issue a credential for the given claims.
    ///
    /// Binds `iat = now`, `exp = now + 12h`, and the fixed issuer tag, then
    /// signs the full payload.
    ///
    /// # Errors
    /// * `EncodingFailed` - Serialization or signing failed
    pub fn issue(&self, sub: &str, username: &str, role: Role) -> Result<String, TokenError> {
        self.issue_at(sub, username, role, Utc::now().timestamp())
    }

    /// Decode and verify a presented credential.
    ///
    /// Checks run in order: signature, issuer equality, expiry. A credential
    /// exactly at `exp` is already expired; no grace period is applied.
    ///
    /// # Errors
    /// * `InvalidToken` - Malformed, tampered, or wrong issuer
    /// * `Expired` - Past its expiration time
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        self.verify_at(token, Utc::now().timestamp())
    }

    fn issue_at(
        &self,
        sub: &str,
        username: &str,
        role: Role,
        now: i64,
    ) -> Result<String, TokenError> {
        let claims = Claims {
            sub: sub.to_string(),
            username: username.to_string(),
            role,
            iat: now,
            exp: now + TTL_SECONDS,
            iss: ISSUER.to_string(),
        };

        encode(&Header::new(self.algorithm), &claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingFailed(e.to_string()))
    }

    fn verify_at(&self, token: &str, now: i64) -> Result<Claims, TokenError> {
        let mut validation = Validation::new(self.algorithm);
        // Expiry is checked below against a single clock read; jsonwebtoken
        // would apply its default 60s leeway.
        validation.validate_exp = false;
        validation.required_spec_claims.clear();

        let data = decode::<Claims>(token, &self.decoding_key, &validation)
            .map_err(|e| TokenError::InvalidToken(e.to_string()))?;

        let claims = data.claims;

        if claims.iss != ISSUER {
            return Err(TokenError::InvalidToken(format!(
                "unknown issuer: {}",
                claims.iss
            )));
        }

        if now >= claims.exp {
            return Err(TokenError::Expired);
        }

        Ok(claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

    fn codec() -> TokenCodec {
        TokenCodec::new(SECRET).expect("Failed to create codec")
    }

    /// Flip the last character of a token to corrupt its signature.
    fn tamper(token: &str) -> String {
        let mut tampered = token[..token.len() - 1].to_string();
        let last = token.chars().last().unwrap();
        tampered.push(if last == 'A' { 'B' } else { 'A' });
        tampered
    }

    #[test]
    fn test_empty_secret_rejected() {
        let result = TokenCodec::new(b"");
        assert!(matches!(result, Err(TokenError::MissingSecret)));
    }

    #[test]
    fn test_issue_and_verify_round_trip() {
        let codec = codec();

        let token = codec
            .issue("42", "alice", Role::User)
            .expect("Failed to issue token");
        let claims = codec.verify(&token).expect("Failed to verify token");

        assert_eq!(claims.sub, "42");
        assert_eq!(claims.username, "alice");
        assert_eq!(claims.role, Role::User);
        assert_eq!(claims.iss, ISSUER);
        assert_eq!(claims.exp - claims.iat, 12 * 60 * 60);
    }

    #[test]
    fn test_verify_tampered_signature() {
        let codec = codec();

        let token = codec.issue("42", "alice", Role::User).unwrap();
        let result = codec.verify(&tamper(&token));

        assert!(matches!(result, Err(TokenError::InvalidToken(_))));
    }

    #[test]
    fn test_verify_with_wrong_secret() {
        let codec = codec();
        let other = TokenCodec::new(b"another-secret-key-also-32-bytes-long!!").unwrap();

        let token = codec.issue("42", "alice", Role::User).unwrap();
        let result = other.verify(&token);

        assert!(matches!(result, Err(TokenError::InvalidToken(_))));
    }

    #[test]
    fn test_verify_garbage_token() {
        let result = codec().verify("not.a.token");
        assert!(matches!(result, Err(TokenError::InvalidToken(_))));
    }

    #[test]
    fn test_expiry_boundary() {
        let codec = codec();
        let issued_at = 1_700_000_000;
        let exp = issued_at + 12 * 60 * 60;

        let token = codec.issue_at("42", "alice", Role::User, issued_at).unwrap();

        // Strictly before expiry: valid.
        assert!(codec.verify_at(&token, exp - 1).is_ok());
        // Exactly at expiry: already expired.
        assert!(matches!(
            codec.verify_at(&token, exp),
            Err(TokenError::Expired)
        ));
        assert!(matches!(
            codec.verify_at(&token, exp + 1),
            Err(TokenError::Expired)
        ));
    }

    #[test]
    fn test_verify_foreign_issuer() {
        let codec = codec();

        // Correctly signed, but from a different trust domain.
        let claims = Claims {
            sub: "42".to_string(),
            username: "alice".to_string(),
            role: Role::Admin,
            iat: Utc::now().timestamp(),
            exp: Utc::now().timestamp() + 600,
            iss: "someone-else".to_string(),
        };
        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(SECRET),
        )
        .unwrap();

        let result = codec.verify(&token);
        assert!(matches!(result, Err(TokenError::InvalidToken(_))));
    }

    #[test]
    fn test_expired_token_reports_expired() {
        // An expired but otherwise valid token reports Expired, not
        // InvalidToken.
        let codec = codec();
        let token = codec.issue_at("42", "alice", Role::User, 0).unwrap();
        let result = codec.verify(&token);
        assert!(matches!(result, Err(TokenError::Expired)));
    }
}
