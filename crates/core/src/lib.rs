//! redcache_core - contracts and pure logic shared by the redcache crates.
//!
//! The [`cache`] module defines the generic cache contract ([`cache::Cache`]),
//! the remote store contract it is built on ([`cache::RemoteStore`]), and the
//! pure helpers for key prefixing, TTL resolution and glob matching.

pub mod cache;
