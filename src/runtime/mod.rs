use clap::Parser;

use crate::error::Result;

mod cli;
mod commands;
mod logging;
mod settings;

use cli::{Args, Command};

/// Parse the command line and run the requested command.
pub fn run() -> Result<()> {
    let args = Args::parse();
    let settings = settings::load_settings(&args);
    logging::init(&settings.log);

    let directory = settings.playlist_directory();
    let state_file = settings.state_file();
    tracing::debug!(
        directory = %directory.display(),
        state = %state_file.display(),
        "starting"
    );

    match &args.command {
        Command::Config => {
            print!("{}", toml::to_string_pretty(&settings)?);
        }
        Command::Update => {
            let db = commands::open(&state_file)?;
            let summary = commands::update(&db, &directory, &settings.playlists, &state_file)?;
            if summary.is_noop() {
                println!("up to date ({} playlists)", summary.unchanged);
            } else {
                println!(
                    "{} changed, {} unchanged, {} removed",
                    summary.changed, summary.unchanged, summary.removed
                );
            }
        }
        Command::List => {
            let db = commands::open(&state_file)?;
            for record in commands::list(&db)? {
                println!("{}\t{}", record.name(), record.mtime);
            }
        }
        Command::Show { name } => {
            let db = commands::open(&state_file)?;
            let record = commands::show(&db, name)?;
            println!("{}\t{}", record.name(), record.mtime);
        }
        Command::Remove { name } => {
            let db = commands::open(&state_file)?;
            commands::remove(&db, name, &state_file)?;
            println!("removed {name}");
        }
    }

    Ok(())
}
