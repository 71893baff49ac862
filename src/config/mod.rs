// src/config/mod.rs
mod duration;
mod keys;
mod models;

pub use duration::{parse_duration, DurationError};
pub use keys::{parse_keys, KeysError};
pub use models::*;

use crate::error::HealthcheckError;
use clap::Parser;
use std::time::Duration;
use tracing::debug;
use url::Url;

const HOST_SCHEMES: &[&str] = &["ws", "wss", "http", "https"];

/// Flag form of `Config::DEFAULT_TIMEOUT`.
pub const DEFAULT_TIMEOUT_ARG: &str = "5s";

/// Command line flags, each of which can also come from the environment.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "livekit-healthcheck",
    version,
    about = "Check the health of the livekit server by attempting to connect to a room"
)]
pub struct Args {
    /// api keys (key: secret\n)
    #[arg(long, env = "LIVEKIT_KEYS", hide_env_values = true)]
    pub keys: Option<String>,

    /// host (incl. port) of the livekit server to connect to (example: wss://livekit.example.com:7880)
    #[arg(long, env = "LIVEKIT_HOST")]
    pub host: Option<String>,

    /// how long to wait for the room connection (e.g. 5s, 500ms, 1m30s)
    #[arg(
        long,
        env = "LIVEKIT_HEALTHCHECK_TIMEOUT",
        default_value = DEFAULT_TIMEOUT_ARG,
        value_parser = parse_duration
    )]
    pub timeout: Duration,
}

impl Config {
    /// Build a validated configuration. Nothing touches the network here.
    pub fn from_args(args: Args) -> Result<Self, HealthcheckError> {
        let host = args
            .host
            .filter(|host| !host.trim().is_empty())
            .ok_or_else(|| HealthcheckError::Config("host value not set".to_string()))?;
        let host = host.trim().to_string();
        validate_host(&host)?;

        let keys = args
            .keys
            .ok_or_else(|| HealthcheckError::Config("keys not set".to_string()))?;
        let credentials = parse_keys(&keys)?;
        if credentials.is_empty() {
            debug!("No usable key pair found, the room connection will be refused");
        }

        let config = Config {
            host,
            credentials,
            timeout: args.timeout,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), HealthcheckError> {
        if self.timeout.is_zero() {
            return Err(HealthcheckError::Config(
                "timeout must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

fn validate_host(host: &str) -> Result<(), HealthcheckError> {
    let url = Url::parse(host)
        .map_err(|e| HealthcheckError::Config(format!("invalid host {:?}: {}", host, e)))?;

    if !HOST_SCHEMES.contains(&url.scheme()) {
        return Err(HealthcheckError::Config(format!(
            "invalid host {:?}: scheme must be one of {}",
            host,
            HOST_SCHEMES.join(", ")
        )));
    }
    if url.host_str().is_none() {
        return Err(HealthcheckError::Config(format!(
            "invalid host {:?}: missing hostname",
            host
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FailureReason;

    fn args(host: Option<&str>, keys: Option<&str>) -> Args {
        Args {
            keys: keys.map(str::to_string),
            host: host.map(str::to_string),
            timeout: Config::DEFAULT_TIMEOUT,
        }
    }

    #[test]
    fn test_valid_args() {
        let config =
            Config::from_args(args(Some("wss://livekit.example.com:7880"), Some("key: secret")))
                .unwrap();

        assert_eq!(config.host, "wss://livekit.example.com:7880");
        assert_eq!(config.credentials, Credentials::new("key", "secret"));
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_missing_host() {
        let err = Config::from_args(args(None, Some("key: secret"))).unwrap_err();
        assert_eq!(err.reason(), FailureReason::Config);
        assert_eq!(err.to_string(), "error: host value not set");

        let err = Config::from_args(args(Some("  "), Some("key: secret"))).unwrap_err();
        assert_eq!(err.reason(), FailureReason::Config);
    }

    #[test]
    fn test_missing_keys() {
        let err = Config::from_args(args(Some("ws://localhost:7880"), None)).unwrap_err();
        assert_eq!(err.reason(), FailureReason::Config);
        assert_eq!(err.to_string(), "error: keys not set");
    }

    #[test]
    fn test_host_must_be_a_wire_address() {
        for host in ["livekit.example.com:7880", "ftp://livekit.example.com", "not a url"] {
            let err = Config::from_args(args(Some(host), Some("key: secret"))).unwrap_err();
            assert_eq!(err.reason(), FailureReason::Config, "host {:?}", host);
        }
    }

    #[test]
    fn test_unparseable_keys() {
        let err = Config::from_args(args(Some("ws://localhost:7880"), Some("not: valid: yaml: [")))
            .unwrap_err();
        assert_eq!(err.reason(), FailureReason::ParseError);
    }

    #[test]
    fn test_zero_timeout_is_rejected() {
        let mut args = args(Some("ws://localhost:7880"), Some("key: secret"));
        args.timeout = Duration::ZERO;

        let err = Config::from_args(args).unwrap_err();
        assert_eq!(err.reason(), FailureReason::Config);
    }

    #[test]
    fn test_flags_parse() {
        let args = Args::try_parse_from([
            "livekit-healthcheck",
            "--host",
            "http://127.0.0.1:7880",
            "--keys",
            "devkey: secret",
            "--timeout",
            "250ms",
        ])
        .unwrap();

        assert_eq!(args.host.as_deref(), Some("http://127.0.0.1:7880"));
        assert_eq!(args.keys.as_deref(), Some("devkey: secret"));
        assert_eq!(args.timeout, Duration::from_millis(250));
    }

    #[test]
    fn test_default_timeout_flag_matches_constant() {
        assert_eq!(
            parse_duration(DEFAULT_TIMEOUT_ARG).unwrap(),
            Config::DEFAULT_TIMEOUT
        );
    }

    // The only test touching these variables; the process environment is shared.
    #[test]
    fn test_environment_and_flag_precedence() {
        std::env::set_var("LIVEKIT_HOST", "wss://env.example.com:7880");
        std::env::set_var("LIVEKIT_KEYS", "envkey: envsecret");
        std::env::set_var("LIVEKIT_HEALTHCHECK_TIMEOUT", "750ms");

        let from_env = Args::try_parse_from(["livekit-healthcheck"]);
        let with_flags = Args::try_parse_from([
            "livekit-healthcheck",
            "--host",
            "ws://flag.example.com:7880",
            "--timeout",
            "2s",
        ]);

        std::env::remove_var("LIVEKIT_HOST");
        std::env::remove_var("LIVEKIT_KEYS");
        std::env::remove_var("LIVEKIT_HEALTHCHECK_TIMEOUT");

        let from_env = from_env.unwrap();
        assert_eq!(from_env.host.as_deref(), Some("wss://env.example.com:7880"));
        assert_eq!(from_env.keys.as_deref(), Some("envkey: envsecret"));
        assert_eq!(from_env.timeout, Duration::from_millis(750));

        let config = Config::from_args(from_env).unwrap();
        assert_eq!(config.credentials, Credentials::new("envkey", "envsecret"));

        let with_flags = with_flags.unwrap();
        assert_eq!(with_flags.host.as_deref(), Some("ws://flag.example.com:7880"));
        assert_eq!(with_flags.keys.as_deref(), Some("envkey: envsecret"));
        assert_eq!(with_flags.timeout, Duration::from_secs(2));
    }

    #[test]
    fn test_invalid_timeout_flag() {
        let result = Args::try_parse_from([
            "livekit-healthcheck",
            "--host",
            "ws://localhost:7880",
            "--timeout",
            "soon",
        ]);
        assert!(result.is_err());
    }
}
