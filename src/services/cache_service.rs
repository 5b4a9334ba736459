//! Cache read/write
//!
//! Validates the write payload and forwards to the [`CacheStore`] held in
//! [`AppState`](crate::state::AppState).
//!
//! [`CacheStore`]: crate::infrastructure::CacheStore

use crate::error::{ApiError, Result};
use crate::models::{MISSING_FIELDS_MESSAGE, WriteKeyRequest, key_written_message};
use crate::state::AppState;

/// Store a key/value pair
///
/// Returns the confirmation text. A missing `chave` or `valor` is rejected
/// before the store is touched.
pub async fn write_key(app_state: &AppState, request: WriteKeyRequest) -> Result<String> {
    let Some(pair) = request.into_pair() else {
        tracing::error!("write rejected: chave or valor is missing");
        return Err(ApiError::validation(MISSING_FIELDS_MESSAGE));
    };

    tracing::info!(key = %pair.key, "writing key");
    app_state.cache.set(&pair.key, &pair.value).await?;
    tracing::info!(key = %pair.key, "key written");

    Ok(key_written_message(&pair.key))
}

/// Read the value stored under `key`
pub async fn read_key(app_state: &AppState, key: &str) -> Result<String> {
    tracing::info!(key = %key, "reading key");

    match app_state.cache.get(key).await? {
        Some(value) => {
            tracing::info!(key = %key, "key found");
            Ok(value)
        }
        None => {
            tracing::warn!(key = %key, "key not found");
            Err(ApiError::NotFound)
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use super::*;

    fn request(key: Option<&str>, value: Option<&str>) -> WriteKeyRequest {
        WriteKeyRequest {
            key: key.map(|k| Value::String(k.to_string())),
            value: value.map(|v| Value::String(v.to_string())),
        }
    }

    #[tokio::test]
    async fn test_write_then_read() {
        let state = AppState::in_memory();

        let msg = write_key(&state, request(Some("a"), Some("1"))).await.unwrap();
        assert_eq!(msg, "Chave 'a' gravada com sucesso!");
        assert_eq!(read_key(&state, "a").await.unwrap(), "1");
    }

    #[tokio::test]
    async fn test_missing_field_does_not_touch_store() {
        let state = AppState::in_memory();

        let err = write_key(&state, request(Some("a"), None)).await.unwrap_err();
        assert!(matches!(err, ApiError::Validation(ref m) if m == MISSING_FIELDS_MESSAGE));
        assert!(matches!(read_key(&state, "a").await, Err(ApiError::NotFound)));
    }

    #[tokio::test]
    async fn test_numeric_value_is_stored_as_text() {
        let state = AppState::in_memory();
        let req = WriteKeyRequest {
            key: Some(Value::String("contador".to_string())),
            value: Some(Value::from(42)),
        };

        write_key(&state, req).await.unwrap();
        assert_eq!(read_key(&state, "contador").await.unwrap(), "42");
    }

    #[tokio::test]
    async fn test_read_missing_key() {
        let state = AppState::in_memory();
        assert!(matches!(
            read_key(&state, "missing").await,
            Err(ApiError::NotFound)
        ));
    }
}
