fn main() {
    if let Err(e) = playlist_registry::runtime::run() {
        eprintln!("playlist-registry: {e}");
        std::process::exit(1);
    }
}
