use clap::Parser;
use log::info;

use studynotes::{seed_sample_notes, App, Cli, Config, NoteStore};

fn initialize_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp_secs()
        .format_module_path(true)
        .init();
}

fn main() {
    initialize_logger();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => match Config::load(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Failed to load config {}: {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => Config::default(),
    };

    let mut store = NoteStore::new();
    if cli.sample {
        if let Err(e) = seed_sample_notes(&mut store) {
            eprintln!("Failed to seed sample notes: {}", e);
            std::process::exit(1);
        }
    }

    info!("Session starting with {} notes", store.len());

    let mut app = App::new(store, config, cli.verbose);
    if let Err(e) = app.run() {
        eprintln!("Session error: {}", e);
        std::process::exit(1);
    }
}
