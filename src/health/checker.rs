// src/health/checker.rs
use crate::error::HealthcheckError;
use crate::room::{ConnectRequest, RoomConnector};
use anyhow::{anyhow, Result};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::oneshot;
use tokio::time::{timeout, Duration};
use tracing::{debug, info, warn};

/// Result handed back by the connection task: the confirmed identity.
type AttemptOutcome = Result<String>;

pub struct HealthChecker {
    connector: Arc<dyn RoomConnector>,
    timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct HealthReport {
    pub host: String,
    pub room: String,
    pub identity: String,
    pub elapsed: Duration,
}

impl HealthChecker {
    pub fn new(connector: Arc<dyn RoomConnector>, timeout: Duration) -> Self {
        Self { connector, timeout }
    }

    /// Run a single connection attempt against the timeout.
    ///
    /// The attempt runs on its own task and is not cancelled when the timeout
    /// wins; whatever it produces afterwards is dropped.
    pub async fn check(&self, request: ConnectRequest) -> Result<HealthReport, HealthcheckError> {
        let start = Instant::now();
        let (outcome_tx, outcome_rx) = oneshot::channel::<AttemptOutcome>();

        info!(
            connector = self.connector.name(),
            host = %request.host,
            room = %request.room,
            identity = %request.identity,
            "Starting healthcheck with timeout: {:?}",
            self.timeout
        );

        let connector = self.connector.clone();
        let attempt = request.clone();
        tokio::spawn(async move {
            let outcome = attempt_connection(connector.as_ref(), &attempt).await;
            if outcome_tx.send(outcome).is_err() {
                debug!(
                    room = %attempt.room,
                    "Connection attempt finished after the healthcheck stopped waiting"
                );
            }
        });

        let outcome = match timeout(self.timeout, outcome_rx).await {
            Ok(Ok(outcome)) => outcome,
            Ok(Err(_)) => {
                return Err(HealthcheckError::Transport(anyhow!(
                    "connection attempt ended without reporting a result"
                )));
            }
            Err(_) => {
                info!(
                    room = %request.room,
                    "No connection after {:?}, giving up",
                    self.timeout
                );
                return Err(HealthcheckError::Timeout(self.timeout));
            }
        };

        let identity = outcome.map_err(HealthcheckError::Transport)?;
        if identity != request.identity {
            return Err(HealthcheckError::IdentityMismatch {
                expected: request.identity,
                actual: identity,
            });
        }

        let elapsed = start.elapsed();
        info!(room = %request.room, "Healthcheck passed in {:?}", elapsed);

        Ok(HealthReport {
            host: request.host,
            room: request.room,
            identity,
            elapsed,
        })
    }
}

/// Join, note the confirmed identity, and leave straight away.
async fn attempt_connection(
    connector: &dyn RoomConnector,
    request: &ConnectRequest,
) -> AttemptOutcome {
    let session = connector.connect(request).await?;
    let identity = session.identity();

    if let Err(e) = session.disconnect().await {
        warn!(room = %request.room, "Failed to disconnect from room: {:#}", e);
    }

    Ok(identity)
}
