//! Auth application service: password hashing and verification.

use crate::error::{AppError, AppResult};

/// bcrypt work factor. Fixed so stored hashes stay expensive to brute-force;
/// the per-call salt is embedded in the modular-crypt output.
const HASH_COST: u32 = 10;

pub struct AuthAppService;

impl AuthAppService {
    /// Hashes a plaintext password with bcrypt. Runs on a blocking thread so
    /// the ~100ms of key stretching does not stall other in-flight requests.
    pub async fn hash_password(password: &str) -> AppResult<String> {
        let password = password.to_owned();
        tokio::task::spawn_blocking(move || bcrypt::hash(password, HASH_COST))
            .await
            .map_err(|e| AppError::Internal(anyhow::anyhow!("hash task: {}", e)))?
            .map_err(|e| AppError::Internal(anyhow::anyhow!("hash: {}", e)))
    }

    /// Compares a plaintext password against a stored bcrypt hash using the
    /// library's constant-time comparison. Also off the async threads.
    pub async fn verify_password(password: &str, hash: &str) -> AppResult<bool> {
        let password = password.to_owned();
        let hash = hash.to_owned();
        tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
            .await
            .map_err(|e| AppError::Internal(anyhow::anyhow!("verify task: {}", e)))?
            .map_err(|e| AppError::Internal(anyhow::anyhow!("verify: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn hash_and_verify_password() {
        let hash = AuthAppService::hash_password("secret1").await.unwrap();
        assert!(AuthAppService::verify_password("secret1", &hash).await.unwrap());
        assert!(!AuthAppService::verify_password("wrong", &hash).await.unwrap());
    }

    #[tokio::test]
    async fn hash_is_salted_and_never_plaintext() {
        let a = AuthAppService::hash_password("secret1").await.unwrap();
        let b = AuthAppService::hash_password("secret1").await.unwrap();
        assert_ne!(a, "secret1");
        assert!(a.starts_with("$2"));
        // Fresh salt per call: same input, different output.
        assert_ne!(a, b);
    }

    #[tokio::test]
    async fn verify_errors_on_malformed_hash() {
        assert!(AuthAppService::verify_password("anything", "not-a-bcrypt-hash")
            .await
            .is_err());
    }
}
