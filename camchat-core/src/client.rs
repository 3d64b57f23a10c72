use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::config::ApiConfig;
use crate::error::{CamchatError, CamchatResult};
use crate::models::{ChatRequest, ChatResponse, ErrorDetail};

pub const ASK_PATH: &str = "/chat/ask";
pub const HEALTH_PATH: &str = "/docs";

/// Anything that can carry one chat turn to the assistant.
#[async_trait]
pub trait ChatTransport: Send + Sync {
    /// Sends one message. A single attempt: no retries, no request timeout.
    async fn ask(&self, message: &str, thread_id: &str) -> CamchatResult<ChatResponse>;

    /// True only when the assistant answers its docs page with a 2xx.
    async fn health_check(&self) -> bool;
}

pub struct HttpChatClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpChatClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_connect_timeout(base_url, Duration::from_secs(5))
    }

    pub fn from_config(config: &ApiConfig) -> Self {
        Self::with_connect_timeout(
            &config.base_url,
            Duration::from_millis(config.connect_timeout_ms),
        )
    }

    pub fn with_connect_timeout(base_url: impl Into<String>, connect_timeout: Duration) -> Self {
        let client = match reqwest::Client::builder()
            .connect_timeout(connect_timeout)
            .build()
        {
            Ok(client) => client,
            Err(e) => {
                warn!(
                    "Failed to build HTTP client, falling back to defaults without a connect timeout: {}",
                    e
                );
                reqwest::Client::new()
            }
        };
        Self {
            client,
            base_url: base_url.into().trim().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl ChatTransport for HttpChatClient {
    async fn ask(&self, message: &str, thread_id: &str) -> CamchatResult<ChatResponse> {
        let url = self.endpoint(ASK_PATH);
        let body = ChatRequest {
            thread_id: thread_id.to_string(),
            message: message.to_string(),
        };

        debug!(%url, thread_id, chars = message.len(), "Sending chat message");

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                let err = CamchatError::Network(e.to_string());
                err.log();
                err
            })?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let err = error_from_body(status.as_u16(), &text);
            err.log();
            return Err(err);
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| CamchatError::Network(e.to_string()))?;

        let reply: ChatResponse = serde_json::from_slice(&bytes).map_err(|e| {
            let err = CamchatError::InvalidResponse(e.to_string());
            err.log();
            err
        })?;

        debug!(
            thread_id,
            has_tool_data = reply.tool_data.is_some(),
            "Received chat reply"
        );

        Ok(reply)
    }

    async fn health_check(&self) -> bool {
        let url = self.endpoint(HEALTH_PATH);
        match self.client.get(&url).send().await {
            Ok(response) => {
                let healthy = response.status().is_success();
                debug!(%url, status = response.status().as_u16(), healthy, "Health check");
                healthy
            }
            Err(e) => {
                warn!(%url, "Health check failed: {}", e);
                false
            }
        }
    }
}

/// Builds the error for a non-2xx reply. A JSON body with a string `detail`
/// becomes [`CamchatError::ApiError`]; anything else gets the generic status
/// error.
pub fn error_from_body(status: u16, body: &str) -> CamchatError {
    match serde_json::from_str::<ErrorDetail>(body) {
        Ok(ErrorDetail { detail }) if !detail.trim().is_empty() => {
            CamchatError::ApiError { status, detail }
        }
        _ => CamchatError::HttpStatus { status },
    }
}
