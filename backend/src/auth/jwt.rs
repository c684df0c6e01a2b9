//! JWT token issuance and verification
//!
//! Tokens are stateless: no server-side record is kept, so a token stays
//! valid until its expiry. Keys are pre-computed once at startup and cached
//! in AppState.

use anyhow::Result;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;
use uuid::Uuid;

/// JWT claims
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Issued at (Unix timestamp)
    pub iat: i64,
}

/// Why a token failed verification.
///
/// Expired and Invalid carry different remediation semantics (re-login vs a
/// corrupt or forged token) and map to distinct client-facing errors, so
/// they must never be collapsed into one.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenError {
    #[error("token expired")]
    Expired,
    #[error("token invalid")]
    Invalid,
}

/// Pre-computed JWT keys for efficient token operations
/// These are expensive to create, so we cache them in AppState
#[derive(Clone)]
pub struct JwtKeys {
    encoding: Arc<EncodingKey>,
    decoding: Arc<DecodingKey>,
}

impl JwtKeys {
    /// Create new JWT keys from secret
    /// This should be called once at startup
    pub fn new(secret: &str) -> Self {
        Self {
            encoding: Arc::new(EncodingKey::from_secret(secret.as_bytes())),
            decoding: Arc::new(DecodingKey::from_secret(secret.as_bytes())),
        }
    }

    pub fn encoding(&self) -> &EncodingKey {
        &self.encoding
    }

    pub fn decoding(&self) -> &DecodingKey {
        &self.decoding
    }
}

/// JWT service for token operations
///
/// Design: Uses pre-computed keys to avoid expensive key derivation
/// on every request. Keys are wrapped in Arc for cheap cloning.
#[derive(Clone)]
pub struct JwtService {
    keys: JwtKeys,
    token_expiry_secs: i64,
}

impl JwtService {
    /// Create a new JWT service with pre-computed keys
    ///
    /// Call this once at application startup and store in AppState.
    /// Do NOT create per-request.
    pub fn new(secret: &str, token_expiry_secs: i64) -> Self {
        Self {
            keys: JwtKeys::new(secret),
            token_expiry_secs,
        }
    }

    /// Issue a bearer token for a user with the default expiry
    #[inline]
    pub fn issue(&self, user_id: Uuid) -> Result<String> {
        self.issue_with_ttl(user_id, self.token_expiry_secs)
    }

    /// Issue a bearer token with an explicit time-to-live
    ///
    /// Short TTLs (down to one second) are allowed so tests can mint a token
    /// that expires almost immediately.
    pub fn issue_with_ttl(&self, user_id: Uuid, ttl_secs: i64) -> Result<String> {
        let now = Utc::now();
        let exp = now + Duration::seconds(ttl_secs);

        let claims = Claims {
            sub: user_id.to_string(),
            exp: exp.timestamp(),
            iat: now.timestamp(),
        };

        encode(&Header::default(), &claims, self.keys.encoding())
            .map_err(|e| anyhow::anyhow!("Failed to issue token: {}", e))
    }

    /// Verify a token and return its claims
    ///
    /// An expired-but-well-signed token reports [`TokenError::Expired`];
    /// everything else that fails to decode or verify reports
    /// [`TokenError::Invalid`].
    pub fn validate(&self, token: &str) -> Result<Claims, TokenError> {
        let mut validation = Validation::default();
        // No leeway: a one-second token must read as expired one second later
        validation.leeway = 0;

        decode::<Claims>(token, self.keys.decoding(), &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Invalid,
            })
    }

    /// Get the default token expiry in seconds
    #[inline]
    pub fn token_expiry_secs(&self) -> i64 {
        self.token_expiry_secs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_service() -> JwtService {
        JwtService::new("test-secret", 3600)
    }

    #[test]
    fn test_issue_and_validate_round_trip() {
        let service = create_test_service();
        let user_id = Uuid::new_v4();

        let token = service.issue(user_id).unwrap();
        let claims = service.validate(&token).unwrap();

        assert_eq!(claims.sub, user_id.to_string());
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_token_has_three_segments() {
        let service = create_test_service();
        let token = service.issue(Uuid::new_v4()).unwrap();

        assert_eq!(token.split('.').count(), 3);
    }

    #[test]
    fn test_garbage_token_is_invalid() {
        let service = create_test_service();

        assert_eq!(
            service.validate("invalid.token.here"),
            Err(TokenError::Invalid)
        );
        assert_eq!(service.validate(""), Err(TokenError::Invalid));
    }

    #[test]
    fn test_wrong_secret_is_invalid() {
        let service = create_test_service();
        let other = JwtService::new("another-secret", 3600);

        let token = other.issue(Uuid::new_v4()).unwrap();

        assert_eq!(service.validate(&token), Err(TokenError::Invalid));
    }

    #[test]
    fn test_expired_token_is_expired_not_invalid() {
        let service = create_test_service();
        let token = service.issue_with_ttl(Uuid::new_v4(), 1).unwrap();

        // Valid right after issuance
        assert!(service.validate(&token).is_ok());

        std::thread::sleep(std::time::Duration::from_secs(2));

        assert_eq!(service.validate(&token), Err(TokenError::Expired));
    }

    #[test]
    fn test_expiry_respects_requested_ttl() {
        let service = create_test_service();
        let token = service.issue_with_ttl(Uuid::new_v4(), 120).unwrap();
        let claims = service.validate(&token).unwrap();

        assert_eq!(claims.exp - claims.iat, 120);
    }

    #[test]
    fn test_service_is_clone_cheap() {
        let service = create_test_service();
        let _cloned = service.clone(); // Should be cheap due to Arc
    }
}
