// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Consent-Ledger API Server
//!
//! Serves the data-sharing consent demo: simulated login, proxy-data
//! generation, and an in-memory ledger of time-bounded consent records.

use chrono::Utc;
use consent_ledger::{
    config::Config,
    services::ProxyService,
    store::{ConsentStore, SessionStore},
    AppState,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured JSON logging
    init_logging();

    // Load configuration from environment
    let config = Config::from_env().expect("Failed to load configuration");
    tracing::info!(port = config.port, "Starting Consent-Ledger API");

    // Initialize in-memory stores
    let consents = ConsentStore::new();
    let sessions = SessionStore::new();

    if config.seed_demo_data {
        consents.seed_demo_records(Utc::now());
    }

    // Build shared state
    let state = Arc::new(AppState {
        config: config.clone(),
        consents,
        sessions,
        proxy_service: ProxyService,
    });

    // Build router
    let app = consent_ledger::routes::create_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("consent_ledger=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(format)
        .init();
}
