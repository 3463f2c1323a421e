use std::path::PathBuf;

use clap::{Parser, Subcommand, builder::NonEmptyStringValueParser};

/// Command-line arguments.
#[derive(Parser, Debug)]
#[command(name = "playlist-registry")]
#[command(about = "Keep an ordered index of stored playlists in sync with a directory")]
#[command(version)]
pub struct Args {
    /// Config file (defaults to the XDG location)
    #[arg(short, long, env = "PLREG_CONFIG_PATH")]
    pub config: Option<PathBuf>,

    /// Playlist directory, overriding the config file
    #[arg(short, long)]
    pub directory: Option<PathBuf>,

    /// State file, overriding the config file
    #[arg(short, long)]
    pub state: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Rescan the playlist directory and save the registry if it changed
    Update,
    /// Print every known playlist with its modification time
    List,
    /// Print one playlist
    Show {
        #[arg(value_parser = NonEmptyStringValueParser::new())]
        name: String,
    },
    /// Forget a playlist
    Remove {
        #[arg(value_parser = NonEmptyStringValueParser::new())]
        name: String,
    },
    /// Print the effective configuration as TOML
    Config,
}
