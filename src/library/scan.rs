use std::fs::Metadata;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use walkdir::WalkDir;

use crate::config::PlaylistSettings;
use crate::error::{Error, Result};
use crate::registry::PlaylistRecord;

/// Result of walking the playlist directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanListing {
    pub records: Vec<PlaylistRecord>,
    /// `false` when some entry could not be read, so absent names may still
    /// exist on disk.
    pub complete: bool,
}

impl From<Vec<PlaylistRecord>> for ScanListing {
    fn from(records: Vec<PlaylistRecord>) -> Self {
        Self {
            records,
            complete: true,
        }
    }
}

use super::path::{has_playlist_suffix, is_hidden, normalize_suffixes, relative_name};

/// Modification time in whole seconds relative to the Unix epoch.
pub(crate) fn mtime_seconds(modified: SystemTime) -> i64 {
    match modified.duration_since(UNIX_EPOCH) {
        Ok(d) => i64::try_from(d.as_secs()).unwrap_or(i64::MAX),
        Err(e) => {
            let before = e.duration();
            let secs = i64::try_from(before.as_secs()).unwrap_or(i64::MAX);
            // Round toward negative infinity like a `time_t` would.
            if before.subsec_nanos() > 0 {
                -secs - 1
            } else {
                -secs
            }
        }
    }
}

fn file_mtime(meta: &Metadata) -> Option<i64> {
    meta.modified().ok().map(mtime_seconds)
}

/// List the stored playlists below `dir`.
///
/// Entries that cannot be read are skipped with a warning and the listing is
/// marked incomplete; a missing or unreadable root is an error.
pub fn scan(dir: &Path, settings: &PlaylistSettings) -> Result<ScanListing> {
    let root_meta = std::fs::metadata(dir).map_err(|e| Error::io(dir, e))?;
    if !root_meta.is_dir() {
        return Err(Error::io(
            dir,
            std::io::Error::new(std::io::ErrorKind::NotADirectory, "not a directory"),
        ));
    }

    let suffixes = normalize_suffixes(&settings.suffixes);
    let mut records = Vec::new();
    let mut complete = true;

    let mut walker = WalkDir::new(dir)
        .follow_links(settings.follow_links)
        .sort_by_file_name();

    // Non-recursive = only the root directory.
    let depth_cap = if settings.recursive {
        settings.max_depth
    } else {
        Some(1)
    };
    if let Some(d) = depth_cap {
        walker = walker.max_depth(d);
    }

    for entry in walker
        .into_iter()
        .filter_entry(|e| settings.include_hidden || e.depth() == 0 || !is_hidden(e.path()))
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if e.depth() == 0 => return Err(e.into()),
            Err(e) => {
                tracing::warn!(error = %e, "skipping unreadable entry");
                complete = false;
                continue;
            }
        };

        let path = entry.path();
        if !has_playlist_suffix(path, &suffixes) {
            continue;
        }

        let meta = match entry.metadata() {
            Ok(meta) if meta.is_file() => meta,
            Ok(_) => continue,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "cannot stat playlist");
                complete = false;
                continue;
            }
        };

        let Some(name) = relative_name(dir, path) else {
            tracing::warn!(path = %path.display(), "skipping playlist with a non UTF-8 name");
            continue;
        };
        let Some(mtime) = file_mtime(&meta) else {
            tracing::warn!(path = %path.display(), "no modification time available");
            complete = false;
            continue;
        };

        tracing::trace!(%name, mtime, "found playlist");
        records.push(PlaylistRecord::new(name, mtime));
    }

    tracing::debug!(
        dir = %dir.display(),
        count = records.len(),
        complete,
        "scanned playlist directory"
    );
    Ok(ScanListing { records, complete })
}
