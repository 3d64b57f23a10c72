use camchat_core::{CamchatError, CliErrorDisplay};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod output;

use commands::{
    handle_ask_command, handle_chat_command, handle_classify_command, handle_config_command,
    handle_extract_command, handle_health_command,
};

const VERSION: &str = env!("CARGO_PKG_VERSION");
const NAME: &str = env!("CARGO_PKG_NAME");

#[derive(Parser)]
#[command(name = "camchat")]
#[command(version = VERSION)]
#[command(about = "Camchat - chat with a camera assistant and find the footage it points at")]
#[command(long_about = r#"
Camchat sends your messages to a remote camera assistant and shows its replies.
Any video files, RTSP camera feeds or links the assistant attaches are pulled
out of the reply and listed with their kind.

Use 'camchat health' to check the assistant is reachable, 'camchat ask' for a
single question, or 'camchat chat' for a conversation.
"#)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long, global = true)]
    verbose: bool,

    #[arg(
        long,
        global = true,
        env = "CAMCHAT_API_URL",
        help = "Base URL of the assistant API"
    )]
    api_url: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "Send one message and print the reply")]
    Ask {
        #[arg(help = "Message to send")]
        message: String,

        #[arg(short, long, help = "Thread id to continue (a new one is generated otherwise)")]
        thread: Option<String>,

        #[arg(
            short,
            long,
            default_value = "text",
            help = "Output format (text, json)"
        )]
        format: String,
    },

    #[command(about = "Check whether the assistant is reachable")]
    Health,

    #[command(about = "Classify URLs as video, RTSP stream or link")]
    Classify {
        #[arg(required = true, help = "URLs to classify")]
        urls: Vec<String>,
    },

    #[command(about = "Extract media URLs from a JSON tool payload")]
    Extract {
        #[arg(help = "JSON file to read, or '-' for stdin", default_value = "-")]
        file: PathBuf,

        #[arg(
            short,
            long,
            default_value = "text",
            help = "Output format (text, json)"
        )]
        format: String,
    },

    #[command(about = "Start an interactive conversation (type /quit to leave)")]
    Chat,

    #[command(about = "Show the effective configuration")]
    Config {
        #[arg(
            short,
            long,
            default_value = "text",
            help = "Output format (text, json)"
        )]
        format: String,
    },

    #[command(about = "Show version information")]
    Version {
        #[arg(short, long)]
        detailed: bool,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    match run(cli).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            match e.downcast_ref::<CamchatError>() {
                Some(err) => eprintln!("{}: {}", "Error".red().bold(), CliErrorDisplay::new(err)),
                None => eprintln!("{}: {}", "Error".red().bold(), e),
            }
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let api_url = cli.api_url;
    match cli.command {
        Commands::Ask {
            message,
            thread,
            format,
        } => handle_ask_command(api_url, &message, thread, &format).await,
        Commands::Health => handle_health_command(api_url).await,
        Commands::Classify { urls } => handle_classify_command(&urls),
        Commands::Extract { file, format } => handle_extract_command(&file, &format),
        Commands::Chat => handle_chat_command(api_url).await,
        Commands::Config { format } => handle_config_command(api_url, &format),
        Commands::Version { detailed } => cmd_version(detailed),
    }
}

fn cmd_version(detailed: bool) -> anyhow::Result<()> {
    if detailed {
        println!("{}", "Camchat Version Information".cyan().bold());
        println!("{}", "═".repeat(40).dimmed());
        println!("  {:<15} {}", "Version:".bold(), VERSION);
        println!("  {:<15} {}", "Name:".bold(), NAME);
        println!("  {:<15} Apache-2.0", "License:".bold());
        println!();
        println!("  {}", "Recognised Media:".bold());
        println!("    ▶ Video files and video hosts");
        println!("    ◉ RTSP camera streams");
        println!("    ↗ Plain links");
        println!();
        println!("  {}", "Build Information:".bold());
        println!("    Rust Edition: 2021");
        #[cfg(debug_assertions)]
        println!("    Build:        Debug");
        #[cfg(not(debug_assertions))]
        println!("    Build:        Release");
    } else {
        println!("camchat {}", VERSION);
    }

    Ok(())
}
