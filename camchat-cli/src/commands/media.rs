use anyhow::{Context, Result};
use camchat_core::{classify_all, media_items, MediaItem};
use colored::Colorize;
use std::io::Read;
use std::path::Path;

use crate::output::{colored_kind, media_table};

const KIND_WIDTH: usize = 14;

pub fn handle_classify_command(urls: &[String]) -> Result<()> {
    for item in classify_all(urls) {
        println!("{} {}", colored_kind(item.kind, KIND_WIDTH), item.url);
    }
    Ok(())
}

pub fn handle_extract_command(file: &Path, format: &str) -> Result<()> {
    let raw = read_input(file)?;
    let payload: serde_json::Value =
        serde_json::from_str(&raw).context("Input is not valid JSON")?;

    let items = media_items(&payload);

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&items)?);
        return Ok(());
    }

    print_items(&items);
    Ok(())
}

fn read_input(file: &Path) -> Result<String> {
    if file == Path::new("-") {
        let mut raw = String::new();
        std::io::stdin()
            .read_to_string(&mut raw)
            .context("Failed to read payload from stdin")?;
        return Ok(raw);
    }

    std::fs::read_to_string(file).with_context(|| format!("Failed to read {}", file.display()))
}

fn print_items(items: &[MediaItem]) {
    if items.is_empty() {
        println!("{}", "No media URLs found.".yellow());
        return;
    }

    println!("{}", media_table(items));
    println!();
    println!("  Total: {} candidates", items.len());
}
