//! User service for registration and login
//!
//! # Performance Optimizations
//!
//! - Password hashing/verification runs on the blocking thread pool
//! - The JWT service is passed by reference (pre-computed keys)
//! - Database queries use connection pooling

use crate::auth::{JwtService, PasswordService};
use crate::error::ApiError;
use crate::repositories::UserRepository;
use matchpoint_shared::validation::{validate_login, validate_registration};
use matchpoint_shared::AuthError;
use sqlx::PgPool;
use uuid::Uuid;

/// User service for authentication operations
pub struct UserService;

impl UserService {
    /// Register a new user and return the new identity id
    ///
    /// Field validation and the uniqueness pre-check run before hashing so
    /// doomed requests never pay the bcrypt cost. The pre-check is advisory;
    /// the insert's unique constraint is the authoritative arbiter and its
    /// violation maps to DuplicateIdentity.
    pub async fn register(
        pool: &PgPool,
        email: &str,
        username: &str,
        password: &str,
    ) -> Result<Uuid, ApiError> {
        validate_registration(email, username, password)?;

        if UserRepository::identity_exists(pool, email, username).await? {
            return Err(ApiError::DuplicateIdentity);
        }

        // Hash password on blocking thread pool (CPU-intensive)
        let password_hash = PasswordService::hash_async(password.to_string())
            .await
            .map_err(ApiError::Internal)?;

        let user = UserRepository::create(pool, email, username, &password_hash)
            .await
            .map_err(|e| {
                // A concurrent registration may have slipped past the pre-check
                if e.as_database_error()
                    .map(|db| db.is_unique_violation())
                    .unwrap_or(false)
                {
                    ApiError::DuplicateIdentity
                } else {
                    ApiError::Database(e)
                }
            })?;

        Ok(user.id)
    }

    /// Login with email and password, returning a freshly issued token
    pub async fn login(
        pool: &PgPool,
        jwt_service: &JwtService,
        email: &str,
        password: &str,
    ) -> Result<String, ApiError> {
        validate_login(email, password)?;

        let user = UserRepository::find_by_email(pool, email)
            .await?
            .ok_or(ApiError::Auth(AuthError::UserNotFound))?;

        // Verify password on blocking thread pool (CPU-intensive)
        let valid = PasswordService::verify_async(password.to_string(), user.password_hash.clone())
            .await
            .map_err(ApiError::Internal)?;

        if !valid {
            return Err(ApiError::Auth(AuthError::WrongPassword));
        }

        // Issue token with the default expiry (uses pre-computed keys - fast)
        jwt_service.issue(user.id).map_err(ApiError::Internal)
    }
}
