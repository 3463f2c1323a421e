//! Playlist directory scanning and reconciliation.
//!
//! `scan` turns the playlist directory into candidate records; `reconcile`
//! applies a complete scan to the registry while the database lock is held.

mod path;
mod reconcile;
mod scan;

pub use reconcile::{ReconcileSummary, reconcile};
pub use scan::{ScanListing, scan};
