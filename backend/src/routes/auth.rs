//! Authentication routes
//!
//! Provides endpoints for user registration, login, and the protected
//! resource gated by the access guard.
//!
//! # Performance Optimizations
//!
//! - Uses pre-computed JWT keys from AppState (no per-request allocation)
//! - Password hashing runs on the blocking thread pool (doesn't block the async runtime)

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::services::UserService;
use crate::state::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use matchpoint_shared::types::{
    LoginRequest, ProtectedResponse, RegisterRequest, RegisterResponse, TokenResponse,
};

/// Create auth routes
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/protected", get(protected))
}

/// Register a new user
///
/// POST /api/auth/register
///
/// Responds 201 with the new user id, or 400 for validation and
/// duplicate-identity failures.
async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<RegisterResponse>)> {
    let user_id = UserService::register(&state.db, &req.email, &req.username, &req.password).await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "User registered successfully".to_string(),
            user_id,
        }),
    ))
}

/// Login with email and password
///
/// POST /api/auth/login
///
/// Responds 200 with a bearer token, 400 for missing fields, or 401 for
/// unknown user / wrong password.
async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<Json<TokenResponse>> {
    let token = UserService::login(&state.db, state.jwt(), &req.email, &req.password).await?;

    Ok(Json(TokenResponse {
        message: "Login successful".to_string(),
        token,
    }))
}

/// Protected resource (requires authentication)
///
/// GET /api/auth/protected
///
/// The AuthUser extractor verifies the bearer token before this body runs;
/// the response echoes the verified identity id from the claims.
async fn protected(auth_user: AuthUser) -> Json<ProtectedResponse> {
    Json(ProtectedResponse {
        message: "Access granted".to_string(),
        user_id: auth_user.user_id,
    })
}
