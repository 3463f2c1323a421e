/// Metadata of one stored playlist.
///
/// The name is fixed at construction; a rename is an erase followed by an
/// insert. `mtime` is a change token in seconds since the Unix epoch and is only
/// ever compared for equality.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistRecord {
    name: String,
    pub mtime: i64,
}

impl PlaylistRecord {
    /// Create a record. `name` must not be empty.
    pub fn new(name: impl Into<String>, mtime: i64) -> Self {
        let name = name.into();
        debug_assert!(!name.is_empty(), "playlist name must not be empty");
        Self { name, mtime }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}
