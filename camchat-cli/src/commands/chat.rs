use anyhow::Result;
use camchat_core::{ChatSession, ChatTransport};
use colored::Colorize;
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;

use crate::config::load_config;
use crate::output::print_bot_message;

const QUIT_COMMANDS: [&str; 2] = ["/quit", "/exit"];

pub async fn handle_chat_command(api_url: Option<String>) -> Result<()> {
    let config = load_config(api_url)?;
    let client = camchat_core::HttpChatClient::from_config(&config.api);

    let mut session = if config.tui.show_welcome {
        ChatSession::with_welcome()
    } else {
        ChatSession::new()
    };

    println!("{}", "Camchat".cyan().bold());
    println!("{}", "═".repeat(40).dimmed());
    println!("  {} {}", "Assistant:".dimmed(), client.base_url());
    println!("  {} {}", "Thread:".dimmed(), session.thread_id());
    if !client.health_check().await {
        println!(
            "  {} {}",
            "!".yellow(),
            "Assistant is not answering yet; messages may fail.".yellow()
        );
    }
    println!("  {}", "Type /quit to leave, /help for commands.".dimmed());
    println!();

    if let Some(welcome) = session.messages().first() {
        print_bot_message(welcome);
        println!();
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        print!("{} ", "you>".green().bold());
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            println!();
            break;
        };
        let line = line.trim();

        if QUIT_COMMANDS.contains(&line) {
            break;
        }

        match line {
            "" => continue,
            "/help" => {
                print_help();
                continue;
            }
            "/thread" => {
                println!("  {}", session.thread_id());
                continue;
            }
            _ => {}
        }

        debug!(thread_id = %session.thread_id(), "Sending message");
        session.set_input(line);
        println!("{}", "  thinking...".dimmed());

        if let Some(reply) = session.send(&client).await {
            print_bot_message(reply);
            println!();
        }
    }

    println!("{}", "Bye.".dimmed());
    Ok(())
}

fn print_help() {
    println!("  {}", "Commands".yellow().bold());
    println!("    /thread   Show the current thread id");
    println!("    /help     Show this help");
    println!("    /quit     Leave the conversation");
}
