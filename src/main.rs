use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use booking_admin::config::AppConfig;
use booking_admin::router;
use booking_admin::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();
    tracing::info!(
        admin = %config.admin_email,
        seed_demo_data = config.seed_demo_data,
        "using demo identity provider and in-memory stores"
    );

    let state = Arc::new(AppState::in_memory(config.clone()));
    let app = router::build(state);

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
