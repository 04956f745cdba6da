use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use gitachat::cli::ChatSession;
use gitachat::{GroqClient, RespondUseCase, WhatlangDetector};

#[derive(Parser)]
#[command(name = "gitachat")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive chat session (the default)
    Chat,

    /// Ask a single question and print the reply
    Ask {
        question: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load GROQ_API_KEY (and optional overrides) from .env if present.
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let client = Arc::new(GroqClient::from_env());
    let detector = Arc::new(WhatlangDetector::new());
    let respond = RespondUseCase::new(client, detector);

    match cli.command.unwrap_or(Commands::Chat) {
        Commands::Chat => {
            let mut session = ChatSession::new(respond);
            session.run().await?;
        }

        Commands::Ask { question } => {
            let reply = respond.execute(&question, &[]).await?;
            println!("{reply}");
        }
    }

    Ok(())
}
