//! # fanbridged — fanbridge daemon
//!
//! Composition root that wires the adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (TOML file, env var overrides)
//! - Initialize tracing
//! - Construct the outbound adapters (secret store, device API client)
//! - Construct the notification service, injecting adapters via port traits
//! - Build the axum router and serve until ctrl-c
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use anyhow::Context as _;
use tracing_subscriber::EnvFilter;

use fanbridge_adapter_http_axum::router;
use fanbridge_adapter_http_axum::state::AppState;
use fanbridge_adapter_sdm_reqwest::SdmClient;
use fanbridge_adapter_secrets_gcp::GcpSecretStore;
use fanbridge_app::services::{FanSettings, NotificationService};

use crate::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().context("failed to load configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(&config.logging.filter).unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Outbound adapters
    let secrets =
        GcpSecretStore::new(config.secrets.clone()).context("failed to build secret store")?;
    let sdm = SdmClient::new(config.sdm.clone()).context("failed to build device api client")?;

    // Service
    let service = NotificationService::new(
        secrets,
        sdm.clone(),
        sdm,
        FanSettings {
            device_id: config.fan.device_id.clone(),
            duration: config.fan.duration.clone(),
        },
    );

    // HTTP
    let app = router::build(AppState::new(service));

    let bind_addr = config.bind_addr();
    tracing::info!(%bind_addr, "fanbridged listening");

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        tracing::info!("shutting down");
    }
}
