#![warn(missing_docs)]

//! This library provides a file-backed JSON document store for game server
//! and server mod configuration. A [`DocumentStore`] pairs one JSON object
//! with one file on disk and brings the two into sync at explicit points:
//! when the store is opened, on [`DocumentStore::load`], and on
//! [`DocumentStore::save`]. In between, edits live only in memory.
//!
//! The store itself knows nothing about the host runtime's directory layout.
//! The builders in [`paths`] cover the common per-save, per-server, and
//! per-mod locations and produce the absolute path a store is opened with.

/// Day-precision encoding of calendar dates in document values
pub mod date;
/// The error type for this crate
pub mod error;
/// JSON object utilities
pub mod json;
/// Builders for the config file locations a host runtime provides
pub mod paths;
mod store;

pub use error::ConfigError;
pub use json::JsonObject;
pub use store::{DocumentStore, REDIS_URI_KEY};
