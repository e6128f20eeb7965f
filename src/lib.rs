//! Minimal user registration/login HTTP service built with Rust.
//!
//! Stores salted bcrypt password hashes and issues signed, 1-hour JWTs on
//! successful login; a protected route validates the bearer token.

pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;

pub use config::Config;
pub use error::AppError;
pub use handlers::http::AppState;

use axum::routing::{get, post};
use handlers::http;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Build the API router (register, login, protected, health). Used by main
/// and by integration tests.
pub fn create_app(state: AppState) -> axum::Router {
    axum::Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .route("/protected", get(auth::protected))
        .route("/health", get(http::health))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
