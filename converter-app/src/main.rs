//! # Converter Application
//!
//! Binary that wires together all the components:
//! - Load configuration from environment
//! - Initialize logging
//! - Build the exchange rate provider
//! - Create the conversion service
//! - Start the HTTP server

mod config;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use converter_hex::{ConversionService, inbound::HttpServer};
use exchange_rates::{FixedRateProvider, FrankfurterProvider, RateProvider};

use config::{Config, LogFormat, ProviderKind};

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info,converter_app=debug,converter_hex=debug".into());

    let registry = tracing_subscriber::registry().with(filter);
    match format {
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
    }
}

async fn serve<P: RateProvider + 'static>(provider: P, addr: &str) -> anyhow::Result<()> {
    let service = ConversionService::new(provider);
    HttpServer::new(service).run(addr).await
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Load configuration
    let config = Config::from_env()?;

    init_tracing(config.log_format);

    tracing::info!("Starting converter server on port {}", config.port);
    let addr = format!("0.0.0.0:{}", config.port);

    match config.provider {
        ProviderKind::Frankfurter => {
            tracing::info!(
                url = %config.rates_api_url,
                timeout_secs = config.rates_timeout.as_secs(),
                "Using Frankfurter exchange rates"
            );
            let provider = FrankfurterProvider::new(config.rates_api_url, config.rates_timeout)?;
            serve(provider, &addr).await
        }
        ProviderKind::Fixed => {
            tracing::warn!("Using fixed development exchange rates");
            serve(FixedRateProvider::default(), &addr).await
        }
    }
}
