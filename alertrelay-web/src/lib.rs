// AlertRelay Web
// Webhook endpoint that forwards Wazuh alerts to the Green API

pub mod config;
pub mod error_handling;
pub mod handlers;
pub mod routes;

pub use config::WebConfig;
pub use error_handling::{AppError, AppResult};

use alertrelay_core::{AlertRelay, DeliveryClient};
use axum::{extract::DefaultBodyLimit, Router};
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

/// Shared, read-only per-process state.
#[derive(Clone)]
pub struct AppState {
    pub relay: Arc<AlertRelay>,
    pub config: WebConfig,
}

impl AppState {
    pub fn new(config: WebConfig) -> anyhow::Result<Self> {
        let client =
            DeliveryClient::with_timeout(config.request_timeout_secs.map(Duration::from_secs))?;
        let relay = AlertRelay::from_config(client, &config.green_api);

        tracing::info!("Delivering alerts to {}", relay.endpoint().redacted_url());

        Ok(Self {
            relay: Arc::new(relay),
            config,
        })
    }
}

pub fn create_app(state: AppState) -> Router {
    let max_body_size = state.config.max_body_size;

    routes::app_routes()
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(DefaultBodyLimit::max(max_body_size)),
        )
        .with_state(state)
}
