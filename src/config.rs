//! Configuration loader and schema types.
//!
//! This module exposes the settings that drive scanning, the state file and
//! logging, and helpers to load them from disk and the environment.

mod load;
mod schema;

pub use load::*;
pub use schema::*;
