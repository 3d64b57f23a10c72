use anyhow::{bail, Result};
use camchat_core::ChatTransport;
use colored::Colorize;
use std::time::Instant;

use crate::config::build_client;

pub async fn handle_health_command(api_url: Option<String>) -> Result<()> {
    let client = build_client(api_url)?;

    println!(
        "  {} Checking {}{}...",
        "→".blue(),
        client.base_url(),
        camchat_core::HEALTH_PATH
    );

    let started = Instant::now();
    let healthy = client.health_check().await;
    let elapsed = started.elapsed();

    if !healthy {
        bail!("Assistant at {} is not reachable", client.base_url());
    }

    println!(
        "{} {} ({} ms)",
        "✓".green().bold(),
        "Assistant is reachable".green(),
        elapsed.as_millis()
    );

    Ok(())
}
