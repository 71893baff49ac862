// src/room/mod.rs
mod connector;

pub use connector::LiveKitConnector;

use crate::config::{Config, Credentials};
use anyhow::Result;
use async_trait::async_trait;
use rand::Rng;

/// Identity every healthcheck joins as.
pub const PARTICIPANT_IDENTITY: &str = "livekit-healthcheck";

pub const ROOM_NAME_LEN: usize = 16;

const ROOM_NAME_LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Everything needed to join one room as one participant.
#[derive(Debug, Clone)]
pub struct ConnectRequest {
    pub host: String,
    pub credentials: Credentials,
    pub room: String,
    pub identity: String,
}

impl ConnectRequest {
    /// A request for a fresh, randomly named room.
    pub fn for_config(config: &Config) -> Self {
        Self {
            host: config.host.clone(),
            credentials: config.credentials.clone(),
            room: random_room_name(),
            identity: PARTICIPANT_IDENTITY.to_string(),
        }
    }
}

pub fn random_room_name() -> String {
    let mut rng = rand::thread_rng();
    (0..ROOM_NAME_LEN)
        .map(|_| ROOM_NAME_LETTERS[rng.gen_range(0..ROOM_NAME_LETTERS.len())] as char)
        .collect()
}

/// Opens sessions against a media server.
#[async_trait]
pub trait RoomConnector: Send + Sync {
    async fn connect(&self, request: &ConnectRequest) -> Result<Box<dyn RoomSession>>;

    fn name(&self) -> &'static str;
}

/// A joined room.
#[async_trait]
pub trait RoomSession: Send + Sync {
    /// Identity the server confirmed for the local participant.
    fn identity(&self) -> String;

    async fn disconnect(&self) -> Result<()>;
}
