//! redcache_client - CLI client for a redcache namespace.

pub mod cli;
pub mod commands;
pub mod output;

pub use commands::{execute, Report};
