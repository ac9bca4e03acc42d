use tower_http::trace::TraceLayer;
use tracing_subscriber::{EnvFilter, fmt};

use activities::shell::config::AppConfig;
use activities::shell::http::router;
use activities::shell::state::AppState;

const DEFAULT_LOG_FILTER: &str = "activities=info,tower_http=info";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let config = AppConfig::from_env()?;
    let state = AppState::seeded();

    let app = router(state, &config.static_dir).layer(TraceLayer::new_for_http());

    let addr = config.socket_addr();
    tracing::info!(static_dir = %config.static_dir.display(), "serving activities on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
