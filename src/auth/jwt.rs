//! JWT issue and validation.

use crate::error::{AppError, AppResult};
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Tokens expire one hour after issuance and are never revocable earlier.
const TOKEN_TTL_SECS: i64 = 3600;

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // user id
    pub username: String,
    pub iat: i64,
    pub exp: i64,
}

#[derive(Clone)]
pub struct JwtSecret {
    secret: String,
}

impl JwtSecret {
    pub fn new(secret: String) -> Self {
        Self { secret }
    }

    pub fn issue(&self, user_id: Uuid, username: &str) -> AppResult<String> {
        self.issue_at(user_id, username, Utc::now())
    }

    /// Mints a token as of an explicit clock reading. Tests use this to
    /// produce already-expired tokens without sleeping.
    pub fn issue_at(
        &self,
        user_id: Uuid,
        username: &str,
        now: DateTime<Utc>,
    ) -> AppResult<String> {
        let claims = Claims {
            sub: user_id.to_string(),
            username: username.to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::seconds(TOKEN_TTL_SECS)).timestamp(),
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(|e| AppError::Jwt(e.to_string()))?;
        Ok(token)
    }

    /// Checks signature and expiry; the decoded claims are trusted as-is,
    /// with no store lookup.
    pub fn validate(&self, token: &str) -> AppResult<Claims> {
        let mut validation = Validation::default();
        validation.validate_exp = true;
        validation.leeway = 0;
        let data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &validation,
        )
        .map_err(|e| AppError::Jwt(e.to_string()))?;
        // The decoder only fails on exp < now, which leaves a token live
        // through its exact expiry second. Tokens are valid for [iat, exp).
        if Utc::now().timestamp() >= data.claims.exp {
            return Err(AppError::Jwt("token expired".to_string()));
        }
        Ok(data.claims)
    }
}
