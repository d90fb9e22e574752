use std::env;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use googlebooks::GoogleBooksClient;
use metadata::{BookMetadataFetcher, MemoryCache};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let Some(volume_id) = env::args().nth(1) else {
        eprintln!("usage: shelf <volume-id>");
        return Ok(ExitCode::from(2));
    };

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(30))
        .connect_timeout(Duration::from_secs(10))
        .build()?;

    let fetcher = BookMetadataFetcher::new(
        Arc::new(GoogleBooksClient::new(client)),
        Arc::new(MemoryCache::new()),
    );

    match fetcher.fetch(&volume_id).await {
        Some(metadata) => {
            println!("{}", serde_json::to_string_pretty(&metadata)?);
            Ok(ExitCode::SUCCESS)
        }
        None => {
            eprintln!("no metadata available for volume {}", volume_id);
            Ok(ExitCode::FAILURE)
        }
    }
}
