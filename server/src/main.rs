//! Ledger Backend Server
//!
//! REST API for personal finance tracking: registration and login,
//! owner-scoped expenses and loans, and chart summaries.

use std::sync::Arc;

use anyhow::Context;
use ledger_server::{
    build_router,
    store::{LedgerStore, MemoryStore, PgStore},
    AppState, Settings,
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=info")),
        )
        .init();

    let settings = Settings::from_env().context("invalid configuration")?;

    let store: Arc<dyn LedgerStore> = match &settings.database_url {
        Some(url) => Arc::new(
            PgStore::connect(url, settings.database_max_connections)
                .await
                .context("failed to connect to the database")?,
        ),
        None => {
            warn!("DATABASE_URL not set; records are kept in memory and lost on exit");
            Arc::new(MemoryStore::new())
        }
    };

    let app = build_router(AppState::new(store, &settings), &settings.cors_allowed_origins);

    let addr = settings.bind_addr();
    info!("Server starting on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    axum::serve(listener, app).await?;

    Ok(())
}
