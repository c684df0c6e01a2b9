//! Database repositories
//!
//! Provides the data access layer for database operations.

pub mod user;

pub use user::{UserRecord, UserRepository};
