//! Auth HTTP handlers: register, login, protected.

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::auth::AuthAppService;
use crate::db::{user_create, user_find_by_username};
use crate::error::AppError;
use crate::handlers::http::AppState;
use crate::middleware::AuthUser;

/// Fields default to empty so an absent key reaches the handler's own
/// missing-field check as a 400 instead of a 422 from the JSON extractor.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Missing username or password"))]
    pub username: String,
    #[serde(default)]
    #[validate(length(min = 4, message = "Password must be at least 4 characters"))]
    pub password: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponse {
    pub message: String,
    pub user_id: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
}

#[derive(Debug, Serialize)]
pub struct ProtectedResponse {
    pub message: String,
}

/// POST /register
pub async fn register(
    State(state): State<AppState>,
    Json(mut body): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>), AppError> {
    body.username = body.username.trim().to_string();
    if body.username.is_empty() || body.password.is_empty() {
        return Err(AppError::Validation(
            "Missing username or password".to_string(),
        ));
    }
    body.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let password_hash = AuthAppService::hash_password(&body.password).await?;
    // Duplicate usernames come back from the store as AppError::Conflict.
    let user = user_create(state.db(), &body.username, &password_hash).await?;

    tracing::info!(username = %user.username, "user registered");

    // The password and its hash never leave the service.
    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "User registered successfully".to_string(),
            user_id: user.id.to_string(),
        }),
    ))
}

/// POST /login
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let username = body.username.trim();

    // Lookup is by username only; the password is never a query predicate.
    // Unknown user and wrong password produce identical responses so callers
    // cannot enumerate usernames.
    let user = user_find_by_username(state.db(), username)
        .await?
        .ok_or_else(|| AppError::Auth("Invalid credentials".to_string()))?;

    if !AuthAppService::verify_password(&body.password, &user.password_hash).await? {
        return Err(AppError::Auth("Invalid credentials".to_string()));
    }

    let token = state.jwt_secret().issue(user.id, &user.username)?;

    tracing::info!(username = %user.username, "login successful");

    Ok(Json(LoginResponse { token }))
}

/// GET /protected — requires a valid bearer token; no store lookup.
pub async fn protected(AuthUser { username, .. }: AuthUser) -> Json<ProtectedResponse> {
    Json(ProtectedResponse {
        message: format!("Welcome {}! This is protected data.", username),
    })
}
