use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{Error, Result};
use crate::registry::PlaylistRegistry;

use super::{
    FORMAT_KEY, FORMAT_VERSION, INFO_BEGIN, INFO_END, MTIME_KEY, PLAYLIST_BEGIN, PLAYLIST_END,
};

/// Write the registry to `out`, one block per playlist in registry order.
pub fn save<W: Write>(registry: &PlaylistRegistry, mut out: W) -> Result<()> {
    writeln!(out, "{INFO_BEGIN}")?;
    writeln!(out, "{FORMAT_KEY}: {FORMAT_VERSION}")?;
    writeln!(out, "{INFO_END}")?;

    for record in registry {
        let name = record.name();
        if name.contains(['\n', '\r']) {
            return Err(Error::InvalidName(name.to_string()));
        }
        writeln!(out, "{PLAYLIST_BEGIN}: {name}")?;
        writeln!(out, "{MTIME_KEY}: {}", record.mtime)?;
        writeln!(out, "{PLAYLIST_END}")?;
    }

    out.flush()?;
    Ok(())
}

/// Save to `path`, replacing any previous file only once the new one is
/// completely written.
pub fn save_file(path: &Path, registry: &PlaylistRegistry) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }

    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = Path::new(&tmp);

    let file = fs::File::create(tmp).map_err(|e| Error::io(tmp, e))?;
    if let Err(e) = save(registry, BufWriter::new(file)) {
        let _ = fs::remove_file(tmp);
        return Err(e);
    }
    fs::rename(tmp, path).map_err(|e| Error::io(path, e))?;

    tracing::debug!(path = %path.display(), playlists = registry.len(), "saved state file");
    Ok(())
}
