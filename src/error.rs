// src/error.rs
use crate::config::KeysError;
use std::time::Duration;

/// Why a healthcheck run ended without success.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureReason {
    Config,
    ParseError,
    Transport,
    IdentityMismatch,
    Timeout,
}

#[derive(Debug, thiserror::Error)]
pub enum HealthcheckError {
    #[error("error: {0}")]
    Config(String),

    #[error("Could not parse keys, it needs to be \"key: secret\", one per line")]
    Parse(#[from] KeysError),

    #[error("failed to connect to host; {0:#}")]
    Transport(anyhow::Error),

    #[error("failed to connect to host; identity did not match expected result (expected {expected:?}, got {actual:?})")]
    IdentityMismatch { expected: String, actual: String },

    #[error("failed to connect to host; timeout waiting for host")]
    Timeout(Duration),
}

impl HealthcheckError {
    pub fn reason(&self) -> FailureReason {
        match self {
            HealthcheckError::Config(_) => FailureReason::Config,
            HealthcheckError::Parse(_) => FailureReason::ParseError,
            HealthcheckError::Transport(_) => FailureReason::Transport,
            HealthcheckError::IdentityMismatch { .. } => FailureReason::IdentityMismatch,
            HealthcheckError::Timeout(_) => FailureReason::Timeout,
        }
    }

    /// Every failure maps to the same non-zero status.
    pub fn exit_code(&self) -> u8 {
        1
    }
}
