//! redcache-client CLI entry point.

use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use redcache::{CacheAdapter, RedisStore};
use redcache_client::cli::Cli;
use redcache_client::execute;
use redcache_client::output::format_output;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "redcache=info,redcache_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let store = RedisStore::new(&cli.redis_url)
        .await
        .with_context(|| format!("Failed to connect to {}", cli.redis_url))?;

    let cache = CacheAdapter::new(Arc::new(store))
        .with_prefix(cli.prefix.as_str())
        .with_default_ttl(Duration::from_secs(cli.default_ttl));

    let report = execute(&cache, cli.command).await?;

    if !(cli.quiet && report.is_write()) {
        println!("{}", format_output(&report, cli.format));
    }

    if report.is_success() {
        Ok(ExitCode::SUCCESS)
    } else {
        tracing::warn!("Cache write reported failure");
        Ok(ExitCode::FAILURE)
    }
}
