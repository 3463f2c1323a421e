use std::collections::HashSet;

use crate::database::DbGuard;

use super::scan::ScanListing;

/// What a reconciliation pass did to the registry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReconcileSummary {
    /// Inserted or mtime-refreshed records.
    pub changed: usize,
    /// Candidates that matched the stored mtime.
    pub unchanged: usize,
    /// Records erased because no candidate named them.
    pub removed: usize,
}

impl ReconcileSummary {
    pub fn is_noop(&self) -> bool {
        self.changed == 0 && self.removed == 0
    }
}

/// Make the registry mirror a listing of the backing store.
///
/// Every candidate goes through `update_or_insert`, so untouched playlists keep
/// their position. Names absent from a complete listing are erased afterwards;
/// an incomplete listing only adds and refreshes, since a missing name may sit
/// behind an entry that could not be read. The database is flagged modified
/// only when something actually changed.
pub fn reconcile(guard: &mut DbGuard<'_>, listing: impl Into<ScanListing>) -> ReconcileSummary {
    let ScanListing {
        records: candidates,
        complete,
    } = listing.into();
    let mut summary = ReconcileSummary::default();
    let seen: HashSet<String> = candidates.iter().map(|c| c.name().to_string()).collect();

    for candidate in candidates {
        if guard.update_playlist(candidate) {
            summary.changed += 1;
        } else {
            summary.unchanged += 1;
        }
    }

    if !complete {
        tracing::warn!("scan was incomplete, keeping playlists it did not see");
        tracing::debug!(?summary, "reconciled playlists");
        return summary;
    }

    let stale: Vec<String> = guard
        .playlists()
        .names()
        .filter(|name| !seen.contains(*name))
        .map(str::to_string)
        .collect();
    for name in stale {
        if guard.remove_playlist(&name) {
            tracing::info!(%name, "playlist disappeared");
            summary.removed += 1;
        }
    }

    tracing::debug!(?summary, "reconciled playlists");
    summary
}
