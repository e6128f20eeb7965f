//! Shared application state and the health handler.

use axum::{http::StatusCode, Json};
use serde_json::json;

use crate::auth::JwtSecret;
use crate::db::DbPool;

/// Shared application state: the credential store handle and the immutable
/// signing secret, passed into each handler. No ambient globals.
#[derive(Clone)]
pub struct AppState {
    pub db: DbPool,
    pub jwt_secret: JwtSecret,
}

impl AppState {
    pub fn db(&self) -> &DbPool {
        &self.db
    }
    pub fn jwt_secret(&self) -> &JwtSecret {
        &self.jwt_secret
    }
}

/// GET /health — liveness probe.
pub async fn health() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(json!({ "status": "ok", "service": "authd" })),
    )
}
