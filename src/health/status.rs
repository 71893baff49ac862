// src/health/status.rs
use super::HealthReport;
use crate::error::HealthcheckError;
use std::fmt;

/// Final pass/fail verdict shown to the operator.
#[derive(Debug)]
pub enum HealthStatus {
    Healthy(HealthReport),
    Unhealthy(HealthcheckError),
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        matches!(self, HealthStatus::Healthy(_))
    }

    pub fn exit_code(&self) -> u8 {
        match self {
            HealthStatus::Healthy(_) => 0,
            HealthStatus::Unhealthy(err) => err.exit_code(),
        }
    }
}

impl From<Result<HealthReport, HealthcheckError>> for HealthStatus {
    fn from(result: Result<HealthReport, HealthcheckError>) -> Self {
        match result {
            Ok(report) => HealthStatus::Healthy(report),
            Err(err) => HealthStatus::Unhealthy(err),
        }
    }
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HealthStatus::Healthy(_) => f.write_str("successfully connected to host"),
            HealthStatus::Unhealthy(err) => write!(f, "{}", err),
        }
    }
}
