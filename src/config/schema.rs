use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Top-level settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/playlist-registry/config.toml` or
/// `~/.config/playlist-registry/config.toml`
///
/// Precedence (highest wins):
/// 1) Command-line flags
/// 2) Environment variables (prefix `PLREG__`, `__` as nested separator)
/// 3) Config file (if present)
/// 4) Struct defaults
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    pub playlists: PlaylistSettings,
    pub state: StateSettings,
    pub log: LogSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PlaylistSettings {
    /// Directory holding the stored playlist files.
    /// Unset means the current working directory.
    pub directory: Option<PathBuf>,
    /// File extensions treated as playlists (case-insensitive, without dot).
    pub suffixes: Vec<String>,
    /// Whether to follow symlinks during scanning.
    pub follow_links: bool,
    /// Whether to include hidden files/directories (dotfiles).
    pub include_hidden: bool,
    /// Whether to recurse into subdirectories.
    pub recursive: bool,
    /// Optional cap on directory recursion depth.
    pub max_depth: Option<usize>,
}

impl Default for PlaylistSettings {
    fn default() -> Self {
        Self {
            directory: None,
            suffixes: vec!["m3u".into(), "m3u8".into(), "pls".into(), "xspf".into()],
            follow_links: true,
            include_hidden: false,
            recursive: false,
            max_depth: None,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct StateSettings {
    /// Where the registry is saved between runs.
    /// Unset means `$XDG_STATE_HOME/playlist-registry/playlists`.
    pub file: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LogSettings {
    /// Default filter directive, e.g. `info` or `playlist_registry=debug`.
    /// `RUST_LOG` takes precedence when set.
    pub level: String,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}
