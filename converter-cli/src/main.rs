//! Converter CLI
//!
//! Command-line interface for the currency converter API.

use anyhow::Result;
use clap::{Parser, Subcommand};

use converter_client::ConverterClient;

#[derive(Parser)]
#[command(name = "converter")]
#[command(author, version, about = "Currency converter API CLI client", long_about = None)]
struct Cli {
    /// Base URL of the converter API
    #[arg(
        long,
        env = "CONVERTER_API_URL",
        default_value = "http://localhost:3000"
    )]
    api_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert an amount between currencies
    Convert {
        /// Source currency code (e.g. BRL)
        source: String,
        /// Destination currency code (e.g. USD)
        destination: String,
        /// Amount to convert
        #[arg(allow_negative_numbers = true)]
        amount: f64,
    },
    /// Check API health
    Health,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let client = ConverterClient::new(&cli.api_url);

    match cli.command {
        Commands::Health => {
            let healthy = client.health().await?;
            if healthy {
                println!("✓ API is healthy");
            } else {
                println!("✗ API is not healthy");
                std::process::exit(1);
            }
        }

        Commands::Convert {
            source,
            destination,
            amount,
        } => {
            let result = client.convert(&source, &destination, amount).await?;
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
    }

    Ok(())
}
