//! Bearer-token extractor for protected routes.

use axum::http::header::AUTHORIZATION;
use uuid::Uuid;

use crate::error::AppError;
use crate::handlers::http::AppState;

const BEARER_PREFIX: &str = "Bearer ";

/// Extractor: authenticated identity decoded from the JWT claims.
///
/// A missing or non-Bearer header is a 401; a token that fails signature or
/// expiry checks is a 403 (`AppError::Jwt`).
#[derive(Clone, Debug)]
pub struct AuthUser {
    pub id: Uuid,
    pub username: String,
}

#[axum::async_trait]
impl axum::extract::FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.strip_prefix(BEARER_PREFIX))
            .ok_or_else(|| {
                AppError::Auth("Missing or invalid Authorization header".to_string())
            })?;
        let claims = state.jwt_secret().validate(token)?;
        let id = Uuid::parse_str(&claims.sub).map_err(|e| AppError::Jwt(e.to_string()))?;
        Ok(AuthUser {
            id,
            username: claims.username,
        })
    }
}
