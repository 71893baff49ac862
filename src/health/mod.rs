// src/health/mod.rs
mod checker;
mod status;

pub use checker::{HealthChecker, HealthReport};
pub use status::HealthStatus;
