// src/room/connector.rs
use super::{ConnectRequest, RoomConnector, RoomSession};
use anyhow::{Context, Result};
use async_trait::async_trait;
use livekit::prelude::{Room, RoomOptions};
use livekit_api::access_token::{AccessToken, VideoGrants};
use tracing::debug;

/// Joins rooms through the LiveKit client SDK.
#[derive(Debug, Clone, Default)]
pub struct LiveKitConnector;

impl LiveKitConnector {
    pub fn new() -> Self {
        Self
    }

    fn access_token(request: &ConnectRequest) -> Result<String> {
        AccessToken::with_api_key(
            &request.credentials.api_key,
            &request.credentials.api_secret,
        )
        .with_identity(&request.identity)
        .with_name(&request.identity)
        .with_grants(VideoGrants {
            room_join: true,
            room: request.room.clone(),
            ..Default::default()
        })
        .to_jwt()
        .context("failed to create access token")
    }
}

#[async_trait]
impl RoomConnector for LiveKitConnector {
    async fn connect(&self, request: &ConnectRequest) -> Result<Box<dyn RoomSession>> {
        let token = Self::access_token(request)?;

        debug!(host = %request.host, room = %request.room, "Joining room");

        // Room events are not needed for a liveness probe.
        let (room, _events) = Room::connect(&request.host, &token, RoomOptions::default())
            .await
            .with_context(|| format!("could not join room {} on {}", request.room, request.host))?;

        Ok(Box::new(LiveKitSession { room }))
    }

    fn name(&self) -> &'static str {
        "livekit"
    }
}

struct LiveKitSession {
    room: Room,
}

#[async_trait]
impl RoomSession for LiveKitSession {
    fn identity(&self) -> String {
        self.room.local_participant().identity().as_str().to_owned()
    }

    async fn disconnect(&self) -> Result<()> {
        self.room.close().await.context("failed to leave room")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Credentials;

    fn request(credentials: Credentials) -> ConnectRequest {
        ConnectRequest {
            host: "ws://localhost:7880".to_string(),
            credentials,
            room: "abcdefghijklmnop".to_string(),
            identity: "livekit-healthcheck".to_string(),
        }
    }

    #[test]
    fn test_access_token_is_a_jwt() {
        let token =
            LiveKitConnector::access_token(&request(Credentials::new("devkey", "secret"))).unwrap();
        assert_eq!(token.split('.').count(), 3);
    }

    #[test]
    fn test_empty_credentials_cannot_sign() {
        assert!(LiveKitConnector::access_token(&request(Credentials::default())).is_err());
    }
}
