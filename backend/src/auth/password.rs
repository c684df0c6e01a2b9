//! Password hashing using bcrypt
//!
//! Provides secure password hashing and verification.
//!
//! # Performance Considerations
//!
//! Bcrypt is intentionally CPU-intensive. For async contexts, use the
//! `*_async` variants which run on the blocking thread pool so unrelated
//! requests are not held up.

use anyhow::Result;

/// Bcrypt cost factor (2^10 rounds).
///
/// Fixed for the whole application; raising it slows every hash and verify.
pub const HASH_COST: u32 = 10;

/// Password hashing service
///
/// Bcrypt salts every hash, so hashing the same password twice yields
/// different strings that both verify.
pub struct PasswordService;

impl PasswordService {
    /// Hash a password using bcrypt (blocking operation)
    ///
    /// # Performance Note
    /// This is CPU-intensive. For async contexts, use `hash_async`.
    pub fn hash(password: &str) -> Result<String> {
        bcrypt::hash(password, HASH_COST)
            .map_err(|e| anyhow::anyhow!("Failed to hash password: {}", e))
    }

    /// Hash a password asynchronously (non-blocking)
    ///
    /// Spawns the CPU-intensive work on a blocking thread pool,
    /// preventing it from blocking the async runtime.
    pub async fn hash_async(password: String) -> Result<String> {
        tokio::task::spawn_blocking(move || Self::hash(&password))
            .await
            .map_err(|e| anyhow::anyhow!("Task join error: {}", e))?
    }

    /// Verify a password against a hash (blocking operation)
    ///
    /// A non-matching password returns `Ok(false)`; only a malformed stored
    /// hash is an error.
    pub fn verify(password: &str, hash: &str) -> Result<bool> {
        bcrypt::verify(password, hash)
            .map_err(|e| anyhow::anyhow!("Invalid hash format: {}", e))
    }

    /// Verify a password asynchronously (non-blocking)
    ///
    /// Spawns the CPU-intensive work on a blocking thread pool.
    pub async fn verify_async(password: String, hash: String) -> Result<bool> {
        tokio::task::spawn_blocking(move || Self::verify(&password, &hash))
            .await
            .map_err(|e| anyhow::anyhow!("Task join error: {}", e))?
    }
}
