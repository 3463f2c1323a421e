//! Line-oriented state file for the playlist registry.
//!
//! ```text
//! info_begin
//! format: 1
//! info_end
//! playlist_begin: Rock.m3u
//! mtime: 1700000000
//! playlist_end
//! ```
//!
//! Records are written in registry order and loaded back through
//! `update_or_insert` in file order, so a save/load cycle reproduces the same
//! sequence and the same mtimes.

mod load;
mod save;

pub use load::{load, load_file};
pub use save::{save, save_file};

pub(crate) const FORMAT_VERSION: &str = "1";

pub(crate) const INFO_BEGIN: &str = "info_begin";
pub(crate) const INFO_END: &str = "info_end";
pub(crate) const FORMAT_KEY: &str = "format";
pub(crate) const PLAYLIST_BEGIN: &str = "playlist_begin";
pub(crate) const PLAYLIST_END: &str = "playlist_end";
pub(crate) const MTIME_KEY: &str = "mtime";

#[cfg(test)]
mod tests;
