use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use ventas_fiestas::config::Config;
use ventas_fiestas::store::{DocumentStore, MemoryStore, PgDocumentStore};
use ventas_fiestas::{router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("ventas_fiestas=info,tower_http=info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    let store: Arc<dyn DocumentStore> = match &config.database_url {
        Some(url) => Arc::new(
            PgDocumentStore::connect(url, config.max_connections)
                .await
                .context("Failed to connect to the document database")?,
        ),
        None => {
            tracing::warn!("DATABASE_URL not set; records are kept in memory only");
            Arc::new(MemoryStore::new())
        }
    };

    tracing::info!(
        "Using {} store, {} tariff, {} number format",
        store.backend(),
        config.tariff_policy,
        config.number_locale
    );

    let state = AppState::new(store, config.tariff_policy, config.number_locale);
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr))?;
    tracing::info!("Listening on http://{}", config.bind_addr);

    axum::serve(listener, app).await?;
    Ok(())
}
