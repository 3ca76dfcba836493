//! Example server: reads settings from the environment (and `.env`), resolves the configured
//! resources against an existing SQLite database, and serves them under `/api`.

use table_router::{app, connect, load_from_path, resolve, AppState, ResourcesConfig, Settings};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("table_router=info,tower_http=info")),
        )
        .init();

    let settings = Settings::from_env()?;
    let pool = connect(&settings).await?;

    let config = match &settings.resources_path {
        Some(path) => load_from_path(path).await?,
        None => ResourcesConfig::reference(),
    };
    let model = resolve(&pool, &config).await?;
    let state = AppState::new(pool, model);

    let listener = TcpListener::bind(settings.bind_addr).await?;
    tracing::info!("listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app(state, settings.body_limit_bytes)).await?;
    Ok(())
}
