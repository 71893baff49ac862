// src/config/models.rs
use std::fmt;
use std::time::Duration;

/// API key/secret pair used to sign the access token.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub api_key: String,
    pub api_secret: String,
}

impl Credentials {
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: api_secret.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.api_key.is_empty() && self.api_secret.is_empty()
    }
}

// Keep the secret out of logs and panic messages.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.api_key)
            .field("api_secret", &"<redacted>")
            .finish()
    }
}

/// Validated settings for a single healthcheck invocation.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub credentials: Credentials,
    pub timeout: Duration,
}

impl Config {
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);
}
