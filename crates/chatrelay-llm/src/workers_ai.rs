//! Cloudflare Workers AI client with streaming support.

use async_trait::async_trait;
use chatrelay_core::{ChatMessage, RelayError};
use futures::StreamExt;
use reqwest::Client;
use serde::Serialize;

use crate::{ByteStream, ChatOptions, InferenceService};

const API_BASE: &str = "https://api.cloudflare.com/client/v4";
const GATEWAY_BASE: &str = "https://gateway.ai.cloudflare.com/v1";

#[derive(Serialize)]
struct RunRequest<'a> {
    messages: &'a [ChatMessage],
    max_tokens: u32,
    stream: bool,
}

/// Client for the Workers AI run endpoint of a single model.
pub struct WorkersAi {
    client: Client,
    account_id: String,
    api_token: String,
    model: String,
    gateway: Option<String>,
}

impl WorkersAi {
    /// Creates a client for the given account and model.
    pub fn new(
        account_id: impl Into<String>,
        api_token: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        let account_id = account_id.into();
        let api_token = api_token.into();
        let model = model.into();
        tracing::info!(
            "WorkersAi: model={}, api_token_len={}",
            model,
            api_token.len()
        );
        Self {
            client: Client::new(),
            account_id,
            api_token,
            model,
            gateway: None,
        }
    }

    /// Routes requests through an AI Gateway instead of the direct API.
    pub fn with_gateway(mut self, gateway: impl Into<String>) -> Self {
        self.gateway = Some(gateway.into());
        self
    }

    fn run_url(&self) -> String {
        match &self.gateway {
            Some(gateway) => format!(
                "{GATEWAY_BASE}/{}/{}/workers-ai/{}",
                self.account_id, gateway, self.model
            ),
            None => format!(
                "{API_BASE}/accounts/{}/ai/run/{}",
                self.account_id, self.model
            ),
        }
    }
}

#[async_trait]
impl InferenceService for WorkersAi {
    async fn chat_stream(
        &self,
        messages: &[ChatMessage],
        opts: &ChatOptions,
    ) -> Result<ByteStream, RelayError> {
        let request = RunRequest {
            messages,
            max_tokens: opts.max_tokens,
            stream: true,
        };

        let response = self
            .client
            .post(self.run_url())
            .bearer_auth(&self.api_token)
            .header("content-type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| RelayError::Inference(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(RelayError::Inference(format!(
                "Workers AI error {}: {}",
                status, body
            )));
        }

        // The upstream already speaks SSE; relay its bytes exactly as
        // produced, without parsing or buffering.
        let stream = response
            .bytes_stream()
            .map(|chunk| chunk.map_err(|e| RelayError::Inference(e.to_string())));

        Ok(Box::pin(stream))
    }
}
