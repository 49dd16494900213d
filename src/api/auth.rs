//! Authentication API endpoints
//!
//! Mock login, logout, and current-user endpoints. Any username with the
//! configured password yields an opaque session token; the token is
//! presented back as a Bearer header.

use axum::{
    extract::{FromRequestParts, State},
    http::{header, request::Parts},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::ApiError;
use crate::domain::session::SessionUser;

pub fn create_auth_router() -> Router<AppState> {
    Router::new()
        .route("/login", post(login))
        .route("/logout", post(logout))
        .route("/me", get(get_current_user))
}

/// Extractor that requires a live session token
///
/// Reads the token from the Authorization header: `Bearer <token>`.
#[derive(Debug, Clone)]
pub struct RequireSession(pub SessionUser);

impl FromRequestParts<AppState> for RequireSession {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = extract_bearer_token(&parts.headers)?;

        debug!("Validating session token");

        let user = state
            .auth_service
            .current(&token)
            .await
            .map_err(ApiError::from)?;

        Ok(RequireSession(user))
    }
}

/// Extract the bearer token from the Authorization header
pub fn extract_bearer_token(headers: &axum::http::HeaderMap) -> Result<String, ApiError> {
    if let Some(auth_header) = headers.get(header::AUTHORIZATION) {
        let auth_str = auth_header
            .to_str()
            .map_err(|_| ApiError::bad_request("Invalid Authorization header encoding"))?;

        if let Some(token) = auth_str.strip_prefix("Bearer ") {
            return Ok(token.trim().to_string());
        }
    }

    Err(ApiError::unauthorized(
        "Authentication required. Provide the session token via 'Authorization: Bearer <token>'",
    ))
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: SessionUser,
}

#[derive(Debug, Serialize)]
pub struct LogoutResponse {
    pub message: String,
}

/// POST /auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let session = state
        .auth_service
        .login(&request.username, &request.password)
        .await
        .map_err(ApiError::from)?;

    Ok(Json(LoginResponse {
        token: session.token,
        user: session.user,
    }))
}

/// POST /auth/logout
pub async fn logout(
    State(state): State<AppState>,
    _session: RequireSession,
) -> Result<Json<LogoutResponse>, ApiError> {
    state.auth_service.logout().await.map_err(ApiError::from)?;

    Ok(Json(LogoutResponse {
        message: "Logged out successfully".to_string(),
    }))
}

/// GET /auth/me
pub async fn get_current_user(
    RequireSession(user): RequireSession,
) -> Result<Json<SessionUser>, ApiError> {
    Ok(Json(user))
}
