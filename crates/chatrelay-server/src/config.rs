//! Environment-backed server configuration, read once at startup.

use std::env;

use chatrelay_core::{RelayError, DEFAULT_SYSTEM_PROMPT};

const DEFAULT_MODEL: &str = "@cf/meta/llama-3.1-8b-instruct";

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: String,
    pub static_dir: String,
    pub account_id: String,
    pub api_token: String,
    pub model: String,
    pub gateway: Option<String>,
    pub system_prompt: String,
    pub max_tokens: u32,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, RelayError> {
        let account_id = env::var("CF_ACCOUNT_ID")
            .map_err(|_| RelayError::Config("CF_ACCOUNT_ID is not set".into()))?;
        let api_token = env::var("CF_API_TOKEN")
            .map_err(|_| RelayError::Config("CF_API_TOKEN is not set".into()))?;

        let max_tokens = match env::var("MAX_TOKENS") {
            Ok(v) => v
                .parse()
                .map_err(|_| RelayError::Config("MAX_TOKENS must be an integer".into()))?,
            Err(_) => 1024,
        };

        Ok(Self {
            bind_addr: env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8000".into()),
            static_dir: env::var("STATIC_DIR").unwrap_or_else(|_| "public".into()),
            account_id,
            api_token,
            model: env::var("CHAT_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.into()),
            gateway: env::var("CF_AI_GATEWAY").ok(),
            system_prompt: env::var("SYSTEM_PROMPT")
                .unwrap_or_else(|_| DEFAULT_SYSTEM_PROMPT.into()),
            max_tokens,
        })
    }
}
