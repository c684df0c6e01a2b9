//! API request and response types
//!
//! Response bodies use camelCase field names to match the public contract.
//! Request fields default to empty strings so that an absent JSON field is
//! reported as a missing field by validation rather than failing
//! deserialization.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Registration request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Successful registration response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponse {
    pub message: String,
    pub user_id: Uuid,
}

/// Successful login response carrying the bearer token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub message: String,
    pub token: String,
}

/// Response from the protected resource, echoing the verified identity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProtectedResponse {
    pub message: String,
    pub user_id: Uuid,
}

/// API error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
