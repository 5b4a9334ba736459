//! HTTP request handlers
//!
//! Each handler extracts the request data, calls the matching service, and
//! turns the result into a response. Error-to-status mapping lives in
//! [`ApiError`].

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::error::{ApiError, Result};
use crate::models::{MISSING_FIELDS_MESSAGE, WriteKeyRequest, message_read_message};
use crate::services::{cache_service, queue_service};
use crate::state::AppState;

/// `POST /api/redis/gravar`
///
/// Expects `{"chave": "...", "valor": "..."}`. A body that is not a JSON
/// object gets the same 400 as a missing field.
pub async fn write_key(
    State(state): State<AppState>,
    payload: std::result::Result<Json<WriteKeyRequest>, JsonRejection>,
) -> Result<String> {
    let Json(request) = payload.map_err(|rejection| {
        tracing::error!(reason = %rejection.body_text(), "invalid write payload");
        ApiError::validation(MISSING_FIELDS_MESSAGE)
    })?;

    cache_service::write_key(&state, request).await
}

/// `GET /api/redis/ler/{chave}`
pub async fn read_key(State(state): State<AppState>, Path(key): Path<String>) -> Result<String> {
    cache_service::read_key(&state, &key).await
}

/// `POST /rabbitmq/send`
///
/// The raw body is the message; no validation.
pub async fn send_message(State(state): State<AppState>, body: String) -> Result<String> {
    queue_service::publish(&state, body).await
}

/// `GET /rabbitmq/read`
///
/// 204 with no body when the queue is empty.
pub async fn read_message(State(state): State<AppState>) -> Result<Response> {
    let response = match queue_service::read_one(&state).await? {
        Some(message) => (StatusCode::OK, message_read_message(&message)).into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    };
    Ok(response)
}
