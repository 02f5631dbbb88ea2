mod commands;

use anyhow::Result;
use botapi_docs_core::BotConfig;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "botapi-docs")]
#[command(about = "Telegram inline bot that searches the Bot API documentation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the bot (webhook when WEBHOOK_URL is set, long polling otherwise)
    Serve {
        /// Webhook listener port, overrides PORT
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Print the inline results a query would produce
    Search {
        query: String,
        /// Print the answerInlineQuery payload as JSON
        #[arg(long)]
        json: bool,
        /// Fetch the specification document from this URL instead
        #[arg(long)]
        spec_url: Option<String>,
    },
    /// Print the rendered article for one method or type
    Show {
        name: String,
        /// Fetch the specification document from this URL instead
        #[arg(long)]
        spec_url: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { port } => {
            let mut config = BotConfig::from_env();
            if let Some(port) = port {
                config.port = port;
            }
            commands::serve::run(config).await?;
        },
        Commands::Search { query, json, spec_url } => {
            commands::search::run_search(&query, json, spec_url).await?;
        },
        Commands::Show { name, spec_url } => {
            commands::search::run_show(&name, spec_url).await?;
        },
    }

    Ok(())
}
