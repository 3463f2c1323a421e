//! Ordered registry of stored playlists, kept in sync with a playlist directory.
//!
//! - [`registry`]: the record type and the insertion-ordered registry.
//! - [`database`]: the exclusive lock; registry access requires its guard.
//! - [`persistence`]: the line-oriented state file.
//! - [`library`]: directory scanning and reconciliation.
//! - [`config`], [`runtime`]: settings and the command-line front end.

pub mod config;
pub mod database;
pub mod error;
pub mod library;
pub mod persistence;
pub mod registry;
pub mod runtime;

pub use database::{Database, DbGuard};
pub use error::{Error, Result};
pub use registry::{PlaylistRecord, PlaylistRegistry};
