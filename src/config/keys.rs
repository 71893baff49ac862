// src/config/keys.rs
use super::Credentials;
use serde_yaml::Value;
use tracing::info;

#[derive(Debug, thiserror::Error)]
pub enum KeysError {
    #[error("invalid YAML: {0}")]
    Syntax(#[from] serde_yaml::Error),

    #[error("expected a mapping of `key: secret` lines")]
    NotAMapping,
}

/// Scalar keys are read as their text, so `12345: secret` keeps `12345`.
fn key_text(key: &Value) -> Option<String> {
    match key {
        Value::String(key) => Some(key.clone()),
        Value::Number(key) => Some(key.to_string()),
        Value::Bool(key) => Some(key.to_string()),
        _ => None,
    }
}

/// Parse LiveKit's `key: secret` key file format into a single pair.
///
/// Entries whose value is not a string, or whose key is not a scalar, are
/// skipped. When several pairs are present the last one in the document is
/// used. Text without any usable pair yields empty credentials rather than an
/// error.
pub fn parse_keys(text: &str) -> Result<Credentials, KeysError> {
    if text.trim().is_empty() {
        return Ok(Credentials::default());
    }

    let mapping = match serde_yaml::from_str::<Value>(text)? {
        Value::Mapping(mapping) => mapping,
        Value::Null => return Ok(Credentials::default()),
        _ => return Err(KeysError::NotAMapping),
    };

    let mut credentials = Credentials::default();
    let mut pairs = 0usize;

    for (key, value) in mapping.iter() {
        if let (Some(key), Some(secret)) = (key_text(key), value.as_str()) {
            credentials = Credentials::new(key, secret);
            pairs += 1;
        }
    }

    if pairs > 1 {
        info!(
            pairs,
            api_key = %credentials.api_key,
            "Multiple key pairs supplied, using the last one"
        );
    }

    Ok(credentials)
}
