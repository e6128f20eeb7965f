//! Middleware: the bearer-token extractor used by protected routes.

mod auth;

pub use auth::AuthUser;
