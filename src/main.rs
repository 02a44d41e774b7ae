use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use digimeds::api::{api_router, ApiContext};
use digimeds::auth::FirebaseVerifier;
use digimeds::config::{self, AppConfig};
use digimeds::pipeline::{GeminiClient, PrescriptionScanner};
use digimeds::store::{open_database, PrescriptionStore};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    if let Err(e) = run().await {
        tracing::error!("fatal: {e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = AppConfig::from_env()?;

    let conn = open_database(&cfg.database_path)?;
    let store = Arc::new(PrescriptionStore::new(conn));

    let model = Arc::new(GeminiClient::new(
        &cfg.gemini_base_url,
        &cfg.gemini_model,
        &cfg.google_api_key,
        cfg.http_timeout_secs,
    ));
    let scanner = Arc::new(PrescriptionScanner::new(model));

    let verifier = Arc::new(FirebaseVerifier::new(
        &cfg.identity_base_url,
        &cfg.google_api_key,
        cfg.http_timeout_secs,
    ));

    let ctx = ApiContext::new(scanner, store, verifier, cfg.scan_requires_auth);
    let app = api_router(ctx);

    let listener = tokio::net::TcpListener::bind(cfg.bind_addr).await?;
    tracing::info!(addr = %cfg.bind_addr, "DigiMeds API listening");
    axum::serve(listener, app).await?;

    Ok(())
}
