use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use reqwest::{Client, RequestBuilder, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::agent::game_api::{Ack, GameApi};
use crate::agent::wire::{Command, CommandsBatch};
use crate::error::{ApiError, Result};
use crate::world::GameState;

pub const DEFAULT_BASE_URL: &str = "https://docker.tivvit.cz";
pub const API_KEY_HEADER: &str = "X-API-key";

/// Connection settings; the `[api]` table of `bot.toml`.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub api_key: Option<String>,
    pub timeout_ms: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            timeout_ms: 10_000,
        }
    }
}

/// JSON-over-HTTP client for the game server.
#[derive(Debug, Clone)]
pub struct HttpGameApi {
    client: Client,
    base_url: String,
    api_key: String,
}

impl HttpGameApi {
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(ApiError::Transport)?;
        Ok(Self {
            client,
            base_url: base_url.into(),
            api_key: api_key.into(),
        })
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    async fn send(&self, req: RequestBuilder) -> Result<(StatusCode, String)> {
        let resp = req
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await
            .map_err(ApiError::Transport)?;
        let status = resp.status();
        let body = resp.text().await.map_err(ApiError::Transport)?;
        check_status(status, body).map(|body| (status, body))
    }
}

/// Turns non-2xx responses into [`ApiError::Server`], keeping the body for the log.
fn check_status(status: StatusCode, body: String) -> Result<String> {
    if status.is_success() {
        Ok(body)
    } else {
        Err(ApiError::Server {
            status: status.as_u16(),
            body,
        })
    }
}

impl GameApi for HttpGameApi {
    fn fetch_state<'a>(&'a self) -> Pin<Box<dyn Future<Output = Result<GameState>> + Send + 'a>> {
        Box::pin(async move {
            let req = self.client.get(self.endpoint("v1/game"));
            let (_, body) = self.send(req).await?;
            Ok(serde_json::from_str(&body)?)
        })
    }

    fn submit<'a>(
        &'a self,
        command: Command,
    ) -> Pin<Box<dyn Future<Output = Result<Ack>> + Send + 'a>> {
        Box::pin(async move {
            let batch = CommandsBatch::from(command);
            let req = self.client.post(self.endpoint("v1/commands")).json(&batch);
            let (status, _) = self.send(req).await?;
            Ok(Ack {
                status: status.as_u16(),
            })
        })
    }

    fn respawn<'a>(&'a self) -> Pin<Box<dyn Future<Output = Result<Ack>> + Send + 'a>> {
        Box::pin(async move {
            let req = self.client.post(self.endpoint("v1/respawn")).json(&json!({}));
            let (status, _) = self.send(req).await?;
            Ok(Ack {
                status: status.as_u16(),
            })
        })
    }
}
