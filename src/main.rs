// src/main.rs
use clap::Parser;
use livekit_healthcheck::{
    logging, Args, Config, ConnectRequest, HealthChecker, HealthStatus, LiveKitConnector,
};
use std::sync::Arc;

#[tokio::main]
async fn main() {
    logging::init();

    let args = Args::parse();
    let status = healthcheck(args).await;

    println!("{}", status);

    // Exit without waiting on an attempt abandoned by the timeout.
    std::process::exit(i32::from(status.exit_code()));
}

async fn healthcheck(args: Args) -> HealthStatus {
    let config = match Config::from_args(args) {
        Ok(config) => config,
        Err(e) => return HealthStatus::Unhealthy(e),
    };

    let checker = HealthChecker::new(Arc::new(LiveKitConnector::new()), config.timeout);
    checker.check(ConnectRequest::for_config(&config)).await.into()
}
