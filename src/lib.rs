//! Conectividade
//!
//! A small HTTP service that exposes a Redis key-value store under
//! `/api/redis` and a RabbitMQ queue under `/rabbitmq`. The library holds
//! the router, handlers, services, and adapters so the binary and the test
//! suite share them.

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

pub mod config;
pub mod error;
pub mod handlers;
pub mod infrastructure;
pub mod logging;
pub mod models;
pub mod services;
pub mod state;

pub use config::Config;
pub use error::{ApiError, UpstreamError};
pub use state::AppState;

pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/api/redis/gravar", post(handlers::write_key))
        .route("/api/redis/ler/{chave}", get(handlers::read_key))
        .route("/rabbitmq/send", post(handlers::send_message))
        .route("/rabbitmq/read", get(handlers::read_message))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
