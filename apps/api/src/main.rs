mod auth;
mod config;
mod db;
mod errors;
mod history;
mod llm_client;
mod models;
mod naming;
mod routes;
mod state;
#[cfg(test)]
mod test_support;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::auth::SupabaseIdentityResolver;
use crate::config::Config;
use crate::db::create_pool;
use crate::history::{HistoryStore, PgHistoryStore};
use crate::llm_client::GeminiClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Homyo API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize LLM client
    let llm = GeminiClient::new(config.gemini())?;
    if config.gemini_api_key.is_none() {
        warn!("GEMINI_API_KEY is not set; generation requests will fail until it is configured");
    }
    info!("LLM client initialized (model: {})", llm.model());

    // Initialize identity resolver
    let identity =
        SupabaseIdentityResolver::new(config.supabase_url.clone(), config.supabase_anon_key.clone());

    // Initialize PostgreSQL (optional)
    let history: Option<Arc<dyn HistoryStore>> = match &config.database_url {
        Some(url) => {
            let pool = create_pool(url).await?;
            Some(Arc::new(PgHistoryStore::new(pool)))
        }
        None => {
            warn!("DATABASE_URL is not set; generation history will not be saved");
            None
        }
    };

    let state = AppState {
        generator: Arc::new(llm),
        identity: Arc::new(identity),
        history,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
