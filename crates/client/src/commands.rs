//! Command execution against a cache.

use std::collections::{BTreeMap, HashMap};

use anyhow::Context;
use serde::Serialize;

use redcache::Cache;

use crate::cli::Commands;

/// Outcome of a single CLI command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "command", rename_all = "kebab-case")]
pub enum Report {
    Has {
        key: String,
        exists: bool,
    },
    Get {
        key: String,
        value: Option<String>,
    },
    Set {
        key: String,
        stored: bool,
    },
    Delete {
        key: String,
        deleted: bool,
    },
    GetMany {
        values: BTreeMap<String, Option<String>>,
    },
    SetMany {
        stored: BTreeMap<String, bool>,
    },
    DeleteMany {
        keys: Vec<String>,
        deleted: bool,
    },
    Clear {
        cleared: bool,
    },
}

impl Report {
    /// Returns false if a write reported failure.
    pub fn is_success(&self) -> bool {
        match self {
            Report::Set { stored, .. } => *stored,
            Report::Delete { deleted, .. } | Report::DeleteMany { deleted, .. } => *deleted,
            Report::SetMany { stored } => stored.values().all(|ok| *ok),
            Report::Clear { cleared } => *cleared,
            Report::Has { .. } | Report::Get { .. } | Report::GetMany { .. } => true,
        }
    }

    /// Returns true for commands that modify the cache.
    pub fn is_write(&self) -> bool {
        !matches!(
            self,
            Report::Has { .. } | Report::Get { .. } | Report::GetMany { .. }
        )
    }
}

/// Runs a command against `cache`.
///
/// Read failures are returned as errors; write failures are reported through
/// [`Report::is_success`].
pub async fn execute(cache: &dyn Cache, command: Commands) -> anyhow::Result<Report> {
    let report = match command {
        Commands::Has { key } => {
            let exists = cache
                .has(&key)
                .await
                .with_context(|| format!("Failed to check key {key:?}"))?;
            Report::Has { key, exists }
        }
        Commands::Get { key, default } => {
            let value = cache
                .get(&key, default)
                .await
                .with_context(|| format!("Failed to read key {key:?}"))?;
            Report::Get { key, value }
        }
        Commands::Set { key, value, ttl } => {
            let stored = cache.set(&key, &value, ttl).await;
            Report::Set { key, stored }
        }
        Commands::Delete { key } => {
            let deleted = cache.delete(&key).await;
            Report::Delete { key, deleted }
        }
        Commands::GetMany { keys, default } => {
            let values = cache
                .get_multiple(&keys, default)
                .await
                .context("Failed to read keys")?;
            Report::GetMany {
                values: values.into_iter().collect(),
            }
        }
        Commands::SetMany { pairs, ttl } => {
            let values: HashMap<String, String> = pairs.into_iter().collect();
            let stored = cache.set_multiple(values, ttl).await;
            Report::SetMany {
                stored: stored.into_iter().collect(),
            }
        }
        Commands::DeleteMany { keys } => {
            let deleted = cache.delete_multiple(&keys).await;
            Report::DeleteMany { keys, deleted }
        }
        Commands::Clear => {
            let cleared = cache.clear().await.context("Failed to clear namespace")?;
            Report::Clear { cleared }
        }
    };

    tracing::debug!(?report, "Command finished");
    Ok(report)
}
