//! Entry point: load config, wire dependencies, and run the server.

use authd::auth::JwtSecret;
use authd::config::Config;
use authd::db;
use authd::{create_app, AppState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = Config::from_env().map_err(|e| anyhow::anyhow!("config: {}", e))?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))?;
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Fail fast: a listening service with no working credential store would
    // answer every request with a 500.
    let db_pool = db::create_pool(&config.database_url).await?;
    let jwt_secret = JwtSecret::new(config.jwt_secret.clone());

    let state = AppState {
        db: db_pool,
        jwt_secret,
    };

    let app = create_app(state);

    tracing::info!(addr = %config.server_addr, "listening");
    let listener = tokio::net::TcpListener::bind(config.server_addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
