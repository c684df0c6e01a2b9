//! Access guard for protected routes
//!
//! The `AuthUser` extractor validates the bearer token before the handler
//! body runs; any non-valid outcome short-circuits the request with 401.
//!
//! Outcomes are classified strictly:
//! - no Authorization header, or a non-Bearer scheme: missing token
//! - token that cannot be decoded or fails signature checks: invalid token
//! - well-signed token past its expiry: expired token

use crate::auth::TokenError;
use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    extract::FromRef,
    http::{header::AUTHORIZATION, request::Parts},
};
use matchpoint_shared::AuthError;
use uuid::Uuid;

/// Authenticated user extracted from a verified bearer token
///
/// Uses the pre-computed JWT keys from AppState for efficiency.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: Uuid,
}

#[axum::async_trait]
impl<S> axum::extract::FromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);

        // Extract Authorization header
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or(ApiError::Auth(AuthError::MissingToken))?;

        // A header that does not carry the bearer scheme counts as missing
        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or(ApiError::Auth(AuthError::MissingToken))?;

        // Use pre-computed JWT service from state
        let claims = app_state.jwt().validate(token).map_err(|e| match e {
            TokenError::Expired => ApiError::Auth(AuthError::ExpiredToken),
            TokenError::Invalid => ApiError::Auth(AuthError::InvalidToken),
        })?;

        // Parse user ID from claims
        let user_id = Uuid::parse_str(&claims.sub)
            .map_err(|_| ApiError::Auth(AuthError::InvalidToken))?;

        Ok(AuthUser { user_id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_user_debug() {
        let user = AuthUser {
            user_id: Uuid::new_v4(),
        };
        let debug_str = format!("{:?}", user);
        assert!(debug_str.contains("AuthUser"));
    }
}
