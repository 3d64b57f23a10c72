use anyhow::Result;
use colored::Colorize;

use crate::config::load_config;

pub fn handle_config_command(api_url: Option<String>, format: &str) -> Result<()> {
    let config = load_config(api_url)?;

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    println!("{}", "Camchat Configuration".cyan().bold());
    println!("{}", "═".repeat(40).dimmed());
    println!();

    println!("  {}", "API".yellow().bold());
    println!("    {:<20} {}", "Base URL:", config.api.base_url);
    println!(
        "    {:<20} {} ms",
        "Connect timeout:", config.api.connect_timeout_ms
    );
    println!();

    println!("  {}", "Logging".yellow().bold());
    println!("    {:<20} {}", "Level:", config.logging.level);
    println!(
        "    {:<20} {}",
        "File:",
        config
            .logging
            .file
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(default)".to_string())
    );
    println!();

    println!("  {}", "TUI".yellow().bold());
    println!("    {:<20} {}", "Theme:", config.tui.theme);
    println!("    {:<20} {} ms", "Tick rate:", config.tui.tick_rate_ms);
    println!("    {:<20} {}", "Welcome message:", config.tui.show_welcome);

    if let Some(dir) = camchat_core::get_config_dir() {
        println!();
        println!(
            "  {} {}",
            "Config file:".dimmed(),
            dir.join("config.toml").display()
        );
    }

    Ok(())
}
