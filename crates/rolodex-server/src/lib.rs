#![forbid(unsafe_code)]

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, put};
use axum::Router;
use rolodex_service::ContactService;
use std::sync::atomic::AtomicU64;
use std::sync::Arc;

mod config;
mod http_handlers;
mod metrics;

pub const CRATE_NAME: &str = "rolodex-server";

pub use config::{validate_startup_config, ApiConfig, ServerConfig};
use metrics::RequestMetrics;

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<ContactService>,
    pub api: ApiConfig,
    pub(crate) metrics: Arc<RequestMetrics>,
    pub(crate) request_id_seed: Arc<AtomicU64>,
}

impl AppState {
    #[must_use]
    pub fn new(service: Arc<ContactService>) -> Self {
        Self::with_config(service, ApiConfig::default())
    }

    #[must_use]
    pub fn with_config(service: Arc<ContactService>, api: ApiConfig) -> Self {
        Self {
            service,
            api,
            metrics: Arc::new(RequestMetrics::default()),
            request_id_seed: Arc::new(AtomicU64::new(1)),
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(http_handlers::home_handler))
        .route("/healthz", get(http_handlers::healthz_handler))
        .route("/metrics", get(http_handlers::metrics_handler))
        .route(
            "/api/v1/contacts",
            get(http_handlers::list_contacts_handler).post(http_handlers::create_contact_handler),
        )
        .route(
            "/api/v1/contacts/:id",
            put(http_handlers::update_contact_handler)
                .delete(http_handlers::delete_contact_handler),
        )
        .layer(DefaultBodyLimit::max(state.api.max_body_bytes))
        .with_state(state)
}
