//! Client example running conversions against an in-process server.
//!
//! Uses the fixed development rates, so no network access is needed.
//!
//! Run with: cargo run -p converter-app --example client_example

use converter_client::ConverterClient;
use converter_hex::{ConversionService, inbound::HttpServer};
use exchange_rates::FixedRateProvider;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    println!("🚀 Starting server on {addr}...");

    let server = HttpServer::new(ConversionService::new(FixedRateProvider::default()));
    let router = server.router();
    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, router).await {
            eprintln!("server error: {e}");
        }
    });

    let client = ConverterClient::new(format!("http://{addr}"));
    println!("Health: {}", client.health().await?);

    for (source, destination, amount) in [("BRL", "USD", 100.0), ("usd", "eur", 25.5), ("GBP", "GBP", 7.0)]
    {
        let result = client.convert(source, destination, amount).await?;
        println!(
            "{amount} {source} -> {destination}: {:?} at {:?}",
            result.converted_amount, result.quote_timestamp
        );
    }

    match client.convert("BRL", "XYZ", 1.0).await {
        Ok(result) => println!("unexpected success: {result:?}"),
        Err(e) => println!("Expected failure: {e}"),
    }

    Ok(())
}

