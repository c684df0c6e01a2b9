//! Error types for the Matchpoint application
//!
//! The message strings here are part of the API contract: clients and tests
//! match on them, so they must stay stable.

use thiserror::Error;

/// Client-input validation errors (always rejected with 400)
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("All fields are required.")]
    MissingField,

    #[error("Invalid email format.")]
    InvalidEmailFormat,

    #[error("Password must be at least 8 characters long, with an uppercase letter, a lowercase letter, a digit and a special character.")]
    WeakPassword,
}

/// Authentication errors (always rejected with 401)
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    #[error("User not found.")]
    UserNotFound,

    #[error("Incorrect password.")]
    WrongPassword,

    #[error("Access denied.")]
    MissingToken,

    #[error("Invalid token.")]
    InvalidToken,

    #[error("Token expired.")]
    ExpiredToken,
}
