//! Request payloads and response messages
//!
//! Plain data carried between the HTTP layer and the services. The wire
//! field names follow the public API (`chave`, `valor`).

use serde::Deserialize;
use serde_json::Value;

/// Body of `POST /api/redis/gravar`
///
/// Fields are kept as raw JSON so that a missing or `null` field reaches the
/// service and is reported as a validation error instead of an extractor
/// rejection. Scalars are stored as their string form.
#[derive(Debug, Default, Deserialize)]
pub struct WriteKeyRequest {
    #[serde(rename = "chave")]
    pub key: Option<Value>,
    #[serde(rename = "valor")]
    pub value: Option<Value>,
}

/// A validated key/value pair ready for the cache adapter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyValuePair {
    pub key: String,
    pub value: String,
}

impl WriteKeyRequest {
    /// Returns the pair when both fields are present scalars.
    ///
    /// `null`, arrays and objects count as missing.
    pub fn into_pair(self) -> Option<KeyValuePair> {
        let key = scalar_to_string(self.key?)?;
        let value = scalar_to_string(self.value?)?;
        Some(KeyValuePair { key, value })
    }
}

fn scalar_to_string(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

pub const MISSING_FIELDS_MESSAGE: &str = "A 'chave' e o 'valor' não podem ser nulos.";

pub fn key_written_message(key: &str) -> String {
    format!("Chave '{}' gravada com sucesso!", key)
}

pub fn message_sent_message(message: &str) -> String {
    format!("Mensagem enviada com sucesso: {}", message)
}

pub fn message_read_message(message: &str) -> String {
    format!("Mensagem lida: {}", message)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: &str) -> Option<KeyValuePair> {
        serde_json::from_str::<WriteKeyRequest>(body)
            .unwrap()
            .into_pair()
    }

    #[test]
    fn test_write_request_with_both_fields() {
        assert_eq!(
            parse(r#"{"chave":"usuario:1:nome","valor":"Ana"}"#),
            Some(KeyValuePair {
                key: "usuario:1:nome".to_string(),
                value: "Ana".to_string(),
            })
        );
    }

    #[test]
    fn test_write_request_missing_or_null_field() {
        assert!(parse(r#"{"chave":"a"}"#).is_none());
        assert!(parse(r#"{"chave":null,"valor":"1"}"#).is_none());
    }

    #[test]
    fn test_scalars_are_stringified() {
        assert_eq!(
            parse(r#"{"chave":"a","valor":1}"#),
            Some(KeyValuePair {
                key: "a".to_string(),
                value: "1".to_string(),
            })
        );
        assert_eq!(
            parse(r#"{"chave":7,"valor":true}"#),
            Some(KeyValuePair {
                key: "7".to_string(),
                value: "true".to_string(),
            })
        );
        assert_eq!(parse(r#"{"chave":"a","valor":1.5}"#).unwrap().value, "1.5");
    }

    #[test]
    fn test_nested_values_are_rejected() {
        assert!(parse(r#"{"chave":"a","valor":[1]}"#).is_none());
        assert!(parse(r#"{"chave":{"x":1},"valor":"1"}"#).is_none());
    }

    #[test]
    fn test_empty_strings_are_accepted() {
        assert!(parse(r#"{"chave":"","valor":""}"#).is_some());
    }
}
