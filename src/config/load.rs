use std::{
    env,
    path::{Path, PathBuf},
};

use super::schema::Settings;
use crate::error::Result;

const APP_DIR: &str = "playlist-registry";

/// Configuration loading helpers.
///
/// `Settings::load` reads an optional config file, then applies environment
/// variables (prefix `PLREG__`) on top, falling back to struct defaults.
impl Settings {
    /// Load settings from the resolved config path and the environment.
    pub fn load() -> Result<Self> {
        Self::load_from(resolve_config_path().as_deref())
    }

    /// Load settings from an explicit config file (if any) and the environment.
    pub fn load_from(config_path: Option<&Path>) -> Result<Self> {
        let mut builder = ::config::Config::builder();

        if let Some(path) = config_path {
            builder = builder.add_source(::config::File::from(path).required(false));
        }

        builder = builder.add_source(
            ::config::Environment::with_prefix("PLREG")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("playlists.suffixes")
                .try_parsing(true),
        );

        let cfg = builder.build()?;
        let settings: Settings = cfg.try_deserialize()?;
        Ok(settings)
    }

    /// Perform basic validation checks on loaded settings.
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self
            .playlists
            .suffixes
            .iter()
            .all(|s| s.trim().trim_start_matches('.').is_empty())
        {
            return Err("playlists.suffixes must name at least one extension".to_string());
        }
        if self.playlists.max_depth == Some(0) {
            return Err("playlists.max_depth must be >= 1".to_string());
        }
        Ok(())
    }

    /// The playlist directory, defaulting to the current working directory.
    pub fn playlist_directory(&self) -> PathBuf {
        self.playlists
            .directory
            .clone()
            .or_else(|| env::current_dir().ok())
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// The state file, defaulting to the XDG state location.
    pub fn state_file(&self) -> PathBuf {
        self.state
            .file
            .clone()
            .or_else(default_state_path)
            .unwrap_or_else(|| PathBuf::from("playlists.state"))
    }
}

/// Resolve the config path from `PLREG_CONFIG_PATH` or XDG defaults.
pub fn resolve_config_path() -> Option<PathBuf> {
    if let Some(p) = env::var_os("PLREG_CONFIG_PATH") {
        let p = PathBuf::from(p);
        return Some(p);
    }
    default_config_path()
}

/// Compute the default config path under `$XDG_CONFIG_HOME/playlist-registry/config.toml`
/// or `~/.config/playlist-registry/config.toml` when `XDG_CONFIG_HOME` is not set.
pub fn default_config_path() -> Option<PathBuf> {
    xdg_dir("XDG_CONFIG_HOME", ".config").map(|d| d.join(APP_DIR).join("config.toml"))
}

/// Compute the default state file under `$XDG_STATE_HOME/playlist-registry/playlists`
/// or `~/.local/state/playlist-registry/playlists`.
pub fn default_state_path() -> Option<PathBuf> {
    xdg_dir("XDG_STATE_HOME", ".local/state").map(|d| d.join(APP_DIR).join("playlists"))
}

fn xdg_dir(var: &str, home_fallback: &str) -> Option<PathBuf> {
    if let Some(xdg) = env::var_os(var) {
        Some(PathBuf::from(xdg))
    } else {
        env::var_os("HOME").map(|home| PathBuf::from(home).join(home_fallback))
    }
}
