//! The coarse database lock and the state it guards.
//!
//! Stored playlists are updated together with the rest of the database state
//! under a single exclusive lock. A [`DbGuard`] is the proof that the lock is
//! held: the registry can only be reached through one, and any reference taken
//! from it is bounded by the guard's lifetime.

use std::sync::{Mutex, MutexGuard};

use crate::error::{Error, Result};
use crate::registry::{PlaylistRecord, PlaylistRegistry};

/// Everything protected by the database lock.
#[derive(Debug, Default)]
pub struct DatabaseState {
    playlists: PlaylistRegistry,
    modified: bool,
}

#[derive(Debug, Default)]
pub struct Database {
    state: Mutex<DatabaseState>,
}

impl Database {
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquire the exclusive database lock.
    pub fn lock(&self) -> Result<DbGuard<'_>> {
        let inner = self.state.lock().map_err(|_| Error::LockPoisoned)?;
        Ok(DbGuard { inner })
    }
}

/// Holds the database lock until dropped.
pub struct DbGuard<'a> {
    inner: MutexGuard<'a, DatabaseState>,
}

impl DbGuard<'_> {
    pub fn playlists(&self) -> &PlaylistRegistry {
        &self.inner.playlists
    }

    /// Direct access to the registry. Changes made through this do not touch
    /// the modified flag; use it for bulk loads that mirror the state file.
    pub fn playlists_mut(&mut self) -> &mut PlaylistRegistry {
        &mut self.inner.playlists
    }

    /// Upsert a playlist and flag the database dirty if anything changed.
    pub fn update_playlist(&mut self, record: PlaylistRecord) -> bool {
        let changed = self.inner.playlists.update_or_insert(record);
        if changed {
            self.inner.modified = true;
        }
        changed
    }

    /// Erase a playlist and flag the database dirty if it existed.
    pub fn remove_playlist(&mut self, name: &str) -> bool {
        let removed = self.inner.playlists.erase(name);
        if removed {
            self.inner.modified = true;
        }
        removed
    }

    pub fn is_modified(&self) -> bool {
        self.inner.modified
    }

    /// Called once the state has been written out.
    pub fn clear_modified(&mut self) {
        self.inner.modified = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn fresh_database_is_empty_and_clean() {
        let db = Database::new();
        let guard = db.lock().unwrap();
        assert!(guard.playlists().is_empty());
        assert!(!guard.is_modified());
    }

    #[test]
    fn update_playlist_marks_modified_only_on_change() {
        let db = Database::new();
        let mut guard = db.lock().unwrap();

        assert!(guard.update_playlist(PlaylistRecord::new("a.m3u", 10)));
        assert!(guard.is_modified());

        guard.clear_modified();
        assert!(!guard.update_playlist(PlaylistRecord::new("a.m3u", 10)));
        assert!(!guard.is_modified());

        assert!(guard.update_playlist(PlaylistRecord::new("a.m3u", 11)));
        assert!(guard.is_modified());
    }

    #[test]
    fn remove_playlist_reports_absence_without_dirtying() {
        let db = Database::new();
        let mut guard = db.lock().unwrap();

        assert!(!guard.remove_playlist("nope.m3u"));
        assert!(!guard.is_modified());

        guard.update_playlist(PlaylistRecord::new("a.m3u", 1));
        guard.clear_modified();
        assert!(guard.remove_playlist("a.m3u"));
        assert!(guard.is_modified());
        assert!(guard.playlists().is_empty());
    }

    #[test]
    fn state_survives_relocking() {
        let db = Database::new();
        {
            let mut guard = db.lock().unwrap();
            guard.update_playlist(PlaylistRecord::new("keep.m3u", 7));
        }
        let guard = db.lock().unwrap();
        assert_eq!(guard.playlists().find("keep.m3u").map(|p| p.mtime), Some(7));
    }

    #[test]
    fn concurrent_writers_never_duplicate_names() {
        let db = Arc::new(Database::new());
        let handles: Vec<_> = (0..8)
            .map(|t| {
                let db = Arc::clone(&db);
                thread::spawn(move || {
                    for i in 0..50 {
                        let mut guard = db.lock().unwrap();
                        guard.update_playlist(PlaylistRecord::new(format!("list-{}", i % 10), t));
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }

        let guard = db.lock().unwrap();
        assert_eq!(guard.playlists().len(), 10);
    }

    #[test]
    fn poisoned_lock_is_reported() {
        let db = Arc::new(Database::new());
        let db2 = Arc::clone(&db);
        let _ = thread::spawn(move || {
            let _guard = db2.lock().unwrap();
            panic!("poison the lock");
        })
        .join();

        assert!(matches!(db.lock(), Err(Error::LockPoisoned)));
    }
}
