use std::path::Path;

use crate::database::{Database, DbGuard};
use crate::error::{Error, Result};
use crate::library::{self, ReconcileSummary};
use crate::persistence;
use crate::registry::PlaylistRecord;

/// Build a database from the state file. Loading is a bulk rehydrate, so the
/// database starts out clean.
pub fn open(state_file: &Path) -> Result<Database> {
    let db = Database::new();
    {
        let mut guard = db.lock()?;
        persistence::load_file(state_file, guard.playlists_mut())?;
        guard.clear_modified();
    }
    Ok(db)
}

/// Write the registry out if anything changed since it was loaded.
pub fn save_if_modified(guard: &mut DbGuard<'_>, state_file: &Path) -> Result<bool> {
    if !guard.is_modified() {
        return Ok(false);
    }
    persistence::save_file(state_file, guard.playlists())?;
    guard.clear_modified();
    Ok(true)
}

pub fn update(
    db: &Database,
    directory: &Path,
    settings: &crate::config::PlaylistSettings,
    state_file: &Path,
) -> Result<ReconcileSummary> {
    // Scan before taking the lock; the walk can be slow.
    let listing = library::scan(directory, settings)?;

    let mut guard = db.lock()?;
    let summary = library::reconcile(&mut guard, listing);
    if save_if_modified(&mut guard, state_file)? {
        tracing::info!(path = %state_file.display(), "state file updated");
    }
    Ok(summary)
}

pub fn list(db: &Database) -> Result<Vec<PlaylistRecord>> {
    let guard = db.lock()?;
    Ok(guard.playlists().iter().cloned().collect())
}

/// Names come from the user here; the registry only accepts non-empty ones.
fn check_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(Error::NoSuchPlaylist(name.to_string()));
    }
    Ok(())
}

pub fn show(db: &Database, name: &str) -> Result<PlaylistRecord> {
    check_name(name)?;
    let guard = db.lock()?;
    guard
        .playlists()
        .find(name)
        .cloned()
        .ok_or_else(|| Error::NoSuchPlaylist(name.to_string()))
}

pub fn remove(db: &Database, name: &str, state_file: &Path) -> Result<()> {
    check_name(name)?;
    let mut guard = db.lock()?;
    if !guard.remove_playlist(name) {
        return Err(Error::NoSuchPlaylist(name.to_string()));
    }
    tracing::info!(%name, "playlist removed");
    save_if_modified(&mut guard, state_file)?;
    Ok(())
}
