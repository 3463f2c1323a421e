use super::*;
use crate::error::Error;
use crate::registry::{PlaylistRecord, PlaylistRegistry};
use std::io::Cursor;

fn registry(items: &[(&str, i64)]) -> PlaylistRegistry {
    let mut reg = PlaylistRegistry::new();
    for (name, mtime) in items {
        reg.update_or_insert(PlaylistRecord::new(*name, *mtime));
    }
    reg
}

fn to_text(reg: &PlaylistRegistry) -> String {
    let mut buf = Vec::new();
    save(reg, &mut buf).unwrap();
    String::from_utf8(buf).unwrap()
}

fn load_str(text: &str) -> Result<PlaylistRegistry, Error> {
    let mut reg = PlaylistRegistry::new();
    load(Cursor::new(text), &mut reg)?;
    Ok(reg)
}

#[test]
fn save_writes_header_and_blocks_in_order() {
    let reg = registry(&[("Rock.m3u", 100), ("Jazz.m3u", -5)]);
    assert_eq!(
        to_text(&reg),
        "info_begin\nformat: 1\ninfo_end\n\
         playlist_begin: Rock.m3u\nmtime: 100\nplaylist_end\n\
         playlist_begin: Jazz.m3u\nmtime: -5\nplaylist_end\n"
    );
}

#[test]
fn save_then_load_reproduces_sequence() {
    let mut reg = registry(&[("b.m3u", 3), ("a.m3u", 1), ("sub/c.pls", 2)]);
    reg.erase("b.m3u");
    reg.update_or_insert(PlaylistRecord::new("b.m3u", 4));
    reg.update_or_insert(PlaylistRecord::new(" spaced: name ", 9));

    let back = load_str(&to_text(&reg)).unwrap();
    assert_eq!(back, reg);
}

#[test]
fn empty_registry_round_trips() {
    let back = load_str(&to_text(&PlaylistRegistry::new())).unwrap();
    assert!(back.is_empty());
}

#[test]
fn load_counts_blocks_and_upserts_duplicates() {
    let text = "info_begin\nformat: 1\ninfo_end\n\
                playlist_begin: x\nmtime: 1\nplaylist_end\n\
                playlist_begin: y\nmtime: 1\nplaylist_end\n\
                playlist_begin: x\nmtime: 2\nplaylist_end\n";
    let mut reg = PlaylistRegistry::new();
    let count = load(Cursor::new(text), &mut reg).unwrap();

    assert_eq!(count, 3);
    assert_eq!(reg.names().collect::<Vec<_>>(), vec!["x", "y"]);
    assert_eq!(reg.find("x").map(|p| p.mtime), Some(2));
}

#[test]
fn load_tolerates_blank_lines_and_crlf() {
    let text = "info_begin\r\nformat: 1\r\ninfo_end\r\n\r\nplaylist_begin: a\r\nmtime:  7 \r\nplaylist_end\r\n\n";
    let reg = load_str(text).unwrap();
    assert_eq!(reg.find("a").map(|p| p.mtime), Some(7));
}

#[test]
fn load_rejects_unknown_format() {
    let err = load_str("info_begin\nformat: 2\ninfo_end\n").unwrap_err();
    assert!(matches!(err, Error::UnsupportedFormat(f) if f == "2"));

    let err = load_str("info_begin\ninfo_end\n").unwrap_err();
    assert!(matches!(err, Error::UnsupportedFormat(_)));
}

#[test]
fn load_reports_line_of_bad_mtime() {
    let text = "info_begin\nformat: 1\ninfo_end\nplaylist_begin: a\nmtime: soon\nplaylist_end\n";
    let err = load_str(text).unwrap_err();
    assert!(matches!(err, Error::Parse { line: 5, .. }));
}

#[test]
fn load_rejects_unknown_lines() {
    let text = "info_begin\nformat: 1\ninfo_end\nsong_begin: x\n";
    assert!(matches!(load_str(text).unwrap_err(), Error::Parse { line: 4, .. }));

    let text = "info_begin\nformat: 1\ninfo_end\nplaylist_begin: a\nsize: 3\nplaylist_end\n";
    assert!(matches!(load_str(text).unwrap_err(), Error::Parse { line: 5, .. }));
}

#[test]
fn load_rejects_truncated_or_incomplete_blocks() {
    let text = "info_begin\nformat: 1\ninfo_end\nplaylist_begin: a\nmtime: 1\n";
    assert!(matches!(load_str(text).unwrap_err(), Error::Parse { .. }));

    let text = "info_begin\nformat: 1\ninfo_end\nplaylist_begin: a\nplaylist_end\n";
    assert!(matches!(load_str(text).unwrap_err(), Error::Parse { line: 4, .. }));

    let text = "info_begin\nformat: 1\ninfo_end\nplaylist_begin: \nmtime: 1\nplaylist_end\n";
    assert!(matches!(load_str(text).unwrap_err(), Error::Parse { line: 4, .. }));
}

#[test]
fn save_rejects_names_with_line_breaks() {
    let reg = registry(&[("evil\nmtime: 0", 1)]);
    let err = save(&reg, Vec::new()).unwrap_err();
    assert!(matches!(err, Error::InvalidName(_)));
}

#[test]
fn file_helpers_round_trip_and_handle_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("state");

    let mut reg = PlaylistRegistry::new();
    assert_eq!(load_file(&path, &mut reg).unwrap(), None);

    let original = registry(&[("one.m3u", 10), ("two.m3u", 20)]);
    save_file(&path, &original).unwrap();
    assert!(!dir.path().join("nested").join("state.tmp").exists());

    assert_eq!(load_file(&path, &mut reg).unwrap(), Some(2));
    assert_eq!(reg, original);
}

#[test]
fn failed_save_keeps_previous_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state");

    let good = registry(&[("ok.m3u", 1)]);
    save_file(&path, &good).unwrap();

    let bad = registry(&[("bad\r", 1)]);
    assert!(save_file(&path, &bad).is_err());

    let mut reg = PlaylistRegistry::new();
    load_file(&path, &mut reg).unwrap();
    assert_eq!(reg, good);
}
