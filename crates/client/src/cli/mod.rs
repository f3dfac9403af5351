//! CLI command definitions.

use std::time::Duration;

use clap::{Parser, Subcommand, ValueEnum};

use redcache::DEFAULT_PREFIX;

/// CLI client for a redcache namespace.
#[derive(Debug, Parser)]
#[command(name = "redcache-client")]
#[command(version, about = "CLI client for a redcache namespace", long_about = None)]
pub struct Cli {
    /// Redis connection URL.
    #[arg(long, env = "REDIS_URL", default_value = "redis://localhost:6379")]
    pub redis_url: String,

    /// Namespace prepended to every key.
    #[arg(long, env = "CACHE_PREFIX", default_value = DEFAULT_PREFIX)]
    pub prefix: String,

    /// Default TTL in seconds applied to every write, 0 for none.
    #[arg(long, env = "CACHE_TTL_SECONDS", default_value_t = 0)]
    pub default_ttl: u64,

    /// Output format.
    #[arg(long, default_value = "pretty")]
    pub format: OutputFormat,

    /// Suppress non-essential output.
    #[arg(long)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check whether a key exists.
    Has { key: String },
    /// Read a value.
    Get {
        key: String,
        /// Value to print when the key is absent.
        #[arg(long)]
        default: Option<String>,
    },
    /// Write a value.
    Set {
        key: String,
        value: String,
        /// TTL in seconds, fractions allowed.
        #[arg(long, value_parser = parse_ttl)]
        ttl: Option<Duration>,
    },
    /// Delete a value.
    Delete { key: String },
    /// Read several values.
    GetMany {
        #[arg(required = true)]
        keys: Vec<String>,
        /// Value to print for absent keys.
        #[arg(long)]
        default: Option<String>,
    },
    /// Write several `key=value` pairs.
    SetMany {
        #[arg(required = true, value_parser = parse_pair)]
        pairs: Vec<(String, String)>,
        /// TTL in seconds, fractions allowed.
        #[arg(long, value_parser = parse_ttl)]
        ttl: Option<Duration>,
    },
    /// Delete several values in one round trip.
    DeleteMany {
        #[arg(required = true)]
        keys: Vec<String>,
    },
    /// Delete every key in the namespace.
    Clear,
}

/// Parses a TTL given in (possibly fractional) seconds.
pub fn parse_ttl(value: &str) -> Result<Duration, String> {
    let seconds: f64 = value
        .parse()
        .map_err(|_| format!("invalid TTL {value:?}, expected seconds"))?;
    Duration::try_from_secs_f64(seconds).map_err(|_| format!("TTL out of range: {value}"))
}

/// Parses a `key=value` pair. Only the first `=` separates key and value.
pub fn parse_pair(value: &str) -> Result<(String, String), String> {
    match value.split_once('=') {
        Some((key, val)) if !key.is_empty() => Ok((key.to_string(), val.to_string())),
        _ => Err(format!("invalid pair {value:?}, expected key=value")),
    }
}
