use clap::Parser;
use log::{error, info};

use mininotes::{App, Cli, Config, FileBackend, NoteStore};

fn initialize_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .format_module_path(true)
        .init();
}

fn main() {
    initialize_logger();

    let cli = Cli::parse();
    let config = Config::new(cli.notes_file.clone());
    info!("Using notes file: {}", config.notes_file.display());

    let backend = FileBackend::new(config.notes_file.clone());
    let store = NoteStore::new(Box::new(backend));
    let app = App::new(store, config, cli.verbose);

    if let Err(e) = app.run(cli.command) {
        error!("{}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
