use super::model::PlaylistRecord;

/// Insertion-ordered collection of [`PlaylistRecord`]s with unique names.
///
/// Lookups are linear: stored playlist counts stay in the tens to low
/// thousands, and the vector keeps the enumeration order the state file relies
/// on. Updates never move a record; only [`erase`](Self::erase) followed by a
/// later insert changes a name's position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaylistRegistry {
    records: Vec<PlaylistRecord>,
}

impl PlaylistRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, name: &str) -> Option<usize> {
        debug_assert!(!name.is_empty(), "playlist name must not be empty");
        self.records.iter().position(|r| r.name() == name)
    }

    /// Find a record by exact (case-sensitive) name.
    pub fn find(&self, name: &str) -> Option<&PlaylistRecord> {
        self.position(name).map(|i| &self.records[i])
    }

    /// Like [`find`](Self::find), but lets the caller update the mtime without a
    /// second lookup.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut PlaylistRecord> {
        self.position(name).map(move |i| &mut self.records[i])
    }

    /// Insert `candidate`, or refresh the mtime of the record with the same name.
    ///
    /// Returns `false` only when a record with that name already carries the
    /// same mtime, in which case nothing is touched. New records go to the end;
    /// existing ones keep their position.
    pub fn update_or_insert(&mut self, candidate: PlaylistRecord) -> bool {
        match self.find_mut(candidate.name()) {
            Some(existing) if existing.mtime == candidate.mtime => false,
            Some(existing) => {
                existing.mtime = candidate.mtime;
                true
            }
            None => {
                self.records.push(candidate);
                true
            }
        }
    }

    /// Remove the record called `name`. Returns whether one was removed.
    pub fn erase(&mut self, name: &str) -> bool {
        match self.position(name) {
            Some(i) => {
                self.records.remove(i);
                true
            }
            None => false,
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PlaylistRecord> {
        self.records.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(PlaylistRecord::name)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a PlaylistRegistry {
    type Item = &'a PlaylistRecord;
    type IntoIter = std::slice::Iter<'a, PlaylistRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
