//! Error types
//!
//! [`UpstreamError`] is what the adapters return when Redis or RabbitMQ
//! fails. [`ApiError`] is what handlers return; it maps onto an HTTP status.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Failure talking to the cache or the broker
#[derive(Error, Debug)]
pub enum UpstreamError {
    #[error("redis error: {0}")]
    Redis(#[from] redis::RedisError),

    #[error("amqp error: {0}")]
    Amqp(#[from] lapin::Error),

    #[error("queue message is not valid UTF-8: {0}")]
    InvalidPayload(#[from] std::string::FromUtf8Error),
}

/// Handler-level error
#[derive(Error, Debug)]
pub enum ApiError {
    /// Missing required field or malformed body
    #[error("{0}")]
    Validation(String),

    /// Absent key
    #[error("not found")]
    NotFound,

    /// Store or broker unreachable
    #[error(transparent)]
    Upstream(#[from] UpstreamError),
}

pub type Result<T> = std::result::Result<T, ApiError>;

impl ApiError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            Self::Validation(msg) => (status, msg).into_response(),
            Self::NotFound => status.into_response(),
            Self::Upstream(err) => {
                tracing::error!(error = %err, "upstream call failed");
                (status, "Erro ao acessar o serviço externo.").into_response()
            }
        }
    }
}
