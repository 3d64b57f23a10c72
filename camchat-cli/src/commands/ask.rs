use anyhow::{bail, Result};
use camchat_core::{ChatSession, ChatTransport, Conversation, MediaItem};
use colored::Colorize;
use serde::Serialize;
use tracing::debug;

use crate::config::build_client;
use crate::output::print_bot_message;

#[derive(Serialize)]
struct AskOutput<'a> {
    thread_id: &'a str,
    response: &'a str,
    tool_data: Option<&'a serde_json::Value>,
    media: Vec<MediaItem>,
}

pub async fn handle_ask_command(
    api_url: Option<String>,
    message: &str,
    thread: Option<String>,
    format: &str,
) -> Result<()> {
    let client = build_client(api_url)?;

    let conversation = match thread {
        Some(id) => Conversation::with_thread_id(id),
        None => Conversation::new(),
    };
    let mut session = ChatSession::from_conversation(conversation);
    session.set_input(message);

    let Some(pending) = session.begin_submit() else {
        bail!("Message must not be empty");
    };

    debug!(thread_id = %pending.thread_id, base_url = %client.base_url(), "Sending message");
    let reply = client.ask(&pending.message, &pending.thread_id).await?;
    let message = session.complete(Ok(reply));

    if format == "json" {
        let output = AskOutput {
            thread_id: &pending.thread_id,
            response: &message.text,
            tool_data: message.tool_data.as_ref(),
            media: message.media(),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    print_bot_message(message);
    println!();
    println!("  {} {}", "Thread:".dimmed(), pending.thread_id.dimmed());

    Ok(())
}
