//! Ordered registry of stored playlists.
//!
//! The registry is plain data: it has no synchronization of its own. The only
//! shared instance lives inside [`crate::database::Database`] and is reachable
//! through a [`crate::database::DbGuard`], so every operation runs while the
//! database lock is held.

mod model;
mod vector;

pub use model::PlaylistRecord;
pub use vector::PlaylistRegistry;
