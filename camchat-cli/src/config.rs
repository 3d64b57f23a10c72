use anyhow::{Context, Result};
use camchat_core::{CamchatConfig, HttpChatClient};

/// Loads the layered configuration, then applies `--api-url` on top.
pub fn load_config(api_url: Option<String>) -> Result<CamchatConfig> {
    let mut config = CamchatConfig::load().context("Failed to load configuration")?;

    if let Some(url) = api_url {
        config.api.base_url = url;
        config.validate()?;
    }

    Ok(config)
}

pub fn build_client(api_url: Option<String>) -> Result<HttpChatClient> {
    let config = load_config(api_url)?;
    Ok(HttpChatClient::from_config(&config.api))
}
