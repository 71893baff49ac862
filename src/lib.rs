// src/lib.rs
pub mod config;
pub mod error;
pub mod health;
pub mod logging;
pub mod room;

pub use config::{Args, Config, Credentials};
pub use error::{FailureReason, HealthcheckError};
pub use health::{HealthChecker, HealthReport, HealthStatus};
pub use room::{ConnectRequest, LiveKitConnector, RoomConnector, RoomSession};
