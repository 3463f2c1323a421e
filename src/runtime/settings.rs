use std::path::Path;

use crate::config;

use super::cli::Args;

/// Load settings, falling back to defaults, then apply command-line overrides.
pub fn load_settings(args: &Args) -> config::Settings {
    let mut settings = load_or_default(args.config.as_deref());

    if let Some(dir) = &args.directory {
        settings.playlists.directory = Some(dir.clone());
    }
    if let Some(state) = &args.state {
        settings.state.file = Some(state.clone());
    }
    settings
}

fn load_or_default(path: Option<&Path>) -> config::Settings {
    let loaded = match path {
        Some(p) => config::Settings::load_from(Some(p)),
        None => config::Settings::load(),
    };

    // Logging is not up yet, so problems go straight to stderr.
    match loaded {
        Ok(s) => {
            if let Err(msg) = s.validate() {
                eprintln!("playlist-registry: invalid config, using defaults: {msg}");
                config::Settings::default()
            } else {
                s
            }
        }
        Err(e) => {
            // Config is optional; failures should not prevent the tool from running.
            eprintln!("playlist-registry: failed to load config, using defaults: {e}");
            config::Settings::default()
        }
    }
}
