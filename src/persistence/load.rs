use std::fs;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;

use crate::error::{Error, Result};
use crate::registry::{PlaylistRecord, PlaylistRegistry};

use super::{
    FORMAT_KEY, FORMAT_VERSION, INFO_BEGIN, INFO_END, MTIME_KEY, PLAYLIST_BEGIN, PLAYLIST_END,
};

/// Split `key: value` at the first colon. The single space written after the
/// colon is dropped; anything past it belongs to the value.
fn split_pair(line: &str) -> Option<(&str, &str)> {
    let (key, value) = line.split_once(':')?;
    Some((key, value.strip_prefix(' ').unwrap_or(value)))
}

/// Numbered, non-blank lines.
struct Lines<R> {
    inner: std::io::Lines<R>,
    number: usize,
}

impl<R: BufRead> Lines<R> {
    fn next_line(&mut self) -> Result<Option<String>> {
        for line in self.inner.by_ref() {
            self.number += 1;
            let line = line?;
            let line = line.trim_end_matches('\r');
            if !line.trim().is_empty() {
                return Ok(Some(line.to_string()));
            }
        }
        Ok(None)
    }

    fn expect_line(&mut self, what: &str) -> Result<String> {
        self.next_line()?
            .ok_or_else(|| Error::parse(self.number, format!("unexpected end of file, expected {what}")))
    }
}

fn read_header<R: BufRead>(lines: &mut Lines<R>) -> Result<()> {
    let first = lines.expect_line(INFO_BEGIN)?;
    if first != INFO_BEGIN {
        return Err(Error::parse(lines.number, format!("expected {INFO_BEGIN}")));
    }

    let mut format = None;
    loop {
        let line = lines.expect_line(INFO_END)?;
        if line == INFO_END {
            break;
        }
        match split_pair(&line) {
            Some((FORMAT_KEY, value)) => format = Some(value.trim().to_string()),
            _ => return Err(Error::parse(lines.number, format!("unknown line in header: {line}"))),
        }
    }

    match format {
        Some(f) if f == FORMAT_VERSION => Ok(()),
        Some(f) => Err(Error::UnsupportedFormat(f)),
        None => Err(Error::UnsupportedFormat("missing format".to_string())),
    }
}

fn read_playlist<R: BufRead>(lines: &mut Lines<R>, name: &str) -> Result<PlaylistRecord> {
    let start = lines.number;
    if name.is_empty() {
        return Err(Error::parse(start, "empty playlist name"));
    }

    let mut mtime = None;
    loop {
        let line = lines.expect_line(PLAYLIST_END)?;
        if line == PLAYLIST_END {
            break;
        }
        match split_pair(&line) {
            Some((MTIME_KEY, value)) => {
                let parsed = value
                    .trim()
                    .parse::<i64>()
                    .map_err(|_| Error::parse(lines.number, format!("invalid mtime: {value}")))?;
                mtime = Some(parsed);
            }
            _ => {
                return Err(Error::parse(
                    lines.number,
                    format!("unknown line in playlist: {line}"),
                ));
            }
        }
    }

    let mtime = mtime.ok_or_else(|| Error::parse(start, format!("playlist {name:?} has no mtime")))?;
    Ok(PlaylistRecord::new(name, mtime))
}

/// Read a state file from `input`, applying each playlist to `registry` with
/// `update_or_insert` in file order. Returns the number of playlist blocks read.
pub fn load<R: BufRead>(input: R, registry: &mut PlaylistRegistry) -> Result<usize> {
    let mut lines = Lines {
        inner: input.lines(),
        number: 0,
    };
    read_header(&mut lines)?;

    let mut count = 0;
    while let Some(line) = lines.next_line()? {
        match split_pair(&line) {
            Some((PLAYLIST_BEGIN, name)) => {
                let record = read_playlist(&mut lines, name)?;
                registry.update_or_insert(record);
                count += 1;
            }
            _ => return Err(Error::parse(lines.number, format!("unknown line: {line}"))),
        }
    }
    Ok(count)
}

/// Load `path` into `registry`. A missing file is not an error and yields `None`.
pub fn load_file(path: &Path, registry: &mut PlaylistRegistry) -> Result<Option<usize>> {
    let file = match fs::File::open(path) {
        Ok(f) => f,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no state file yet");
            return Ok(None);
        }
        Err(e) => return Err(Error::io(path, e)),
    };

    let count = load(BufReader::new(file), registry)?;
    tracing::debug!(path = %path.display(), playlists = count, "loaded state file");
    Ok(Some(count))
}
