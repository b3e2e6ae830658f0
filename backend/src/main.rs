use hr_dashboard_backend::{build_router, config::Config, state::AppState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hr_dashboard_backend=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load()?;
    match &config.api_base {
        Some(base) => tracing::info!(
            api_base = %base,
            bind_addr = %config.bind_addr,
            upstream_timeout_secs = config.upstream_timeout.as_secs(),
            cors_allow_origins = ?config.cors_allow_origins,
            "Loaded configuration from environment/.env"
        ),
        None => tracing::warn!(
            bind_addr = %config.bind_addr,
            "API_BASE is not configured; proxied calls will answer 500"
        ),
    }

    let addr = config.bind_addr;
    let app = build_router(AppState::new(config)?);

    tracing::info!("Server listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
