//! User repository for database operations
//!
//! The users table is the identity directory. Uniqueness of email and
//! username is enforced by its constraints at write time; `identity_exists`
//! is only an advisory pre-check and two concurrent registrations can both
//! pass it. The unique violation raised by `create` is the authoritative
//! signal.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// User record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UserRecord {
    pub id: Uuid,
    pub email: String,
    pub username: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// User repository for database operations
pub struct UserRepository;

impl UserRepository {
    /// Create a new user
    ///
    /// Fails with a unique violation if the email or username is taken.
    pub async fn create(
        pool: &PgPool,
        email: &str,
        username: &str,
        password_hash: &str,
    ) -> Result<UserRecord, sqlx::Error> {
        sqlx::query_as::<_, UserRecord>(
            r#"
            INSERT INTO users (email, username, password_hash)
            VALUES ($1, $2, $3)
            RETURNING id, email, username, password_hash, created_at
            "#,
        )
        .bind(email)
        .bind(username)
        .bind(password_hash)
        .fetch_one(pool)
        .await
    }

    /// Find user by email
    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<UserRecord>, sqlx::Error> {
        sqlx::query_as::<_, UserRecord>(
            r#"
            SELECT id, email, username, password_hash, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(pool)
        .await
    }

    /// Check whether an identity with this email or username already exists
    pub async fn identity_exists(
        pool: &PgPool,
        email: &str,
        username: &str,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(SELECT 1 FROM users WHERE email = $1 OR username = $2)
            "#,
        )
        .bind(email)
        .bind(username)
        .fetch_one(pool)
        .await
    }
}
