use clap::Parser;
use std::error::Error;
use std::path::Path;
use std::sync::{Arc, atomic::{AtomicBool, Ordering}};

mod cli;
mod core;
mod education;
mod error;
mod generators;
mod models;
mod utils;

use crate::cli::Args;
use crate::core::config::Config;

fn main() -> Result<(), Box<dyn Error>> {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let args = Args::parse();
    let (config, warnings) = Config::load();
    config.ensure_directories_exist()?;

    init_logging(&config)?;
    for warning in &warnings {
        log::warn!("{}", warning);
    }
    log::debug!("JSON output: {}, subcommand given: {}", args.json, args.command.is_some());
    log::debug!("Loaded config: {:?}", config);

    if let Some(command) = args.command {
        cli::handlers::handle_command(command, &config, args.json)?;
        return Ok(());
    }

    let should_exit = Arc::new(AtomicBool::new(false));
    {
        let should_exit = Arc::clone(&should_exit);
        ctrlc::set_handler(move || {
            log::info!("Ctrl+C received, leaving session");
            should_exit.store(true, Ordering::SeqCst);
        })?;
    }

    log::info!("Starting interactive session");
    cli::menu::run_cli_menu(&config, should_exit)
}

fn init_logging(config: &Config) -> Result<(), Box<dyn Error>> {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(config.log_level)
        .format_timestamp_secs()
        .format_module_path(true);

    if let Some(log_file) = &config.log_file {
        builder.target(env_logger::Target::Pipe(Box::new(
            std::fs::OpenOptions::new().create(true).append(true).open(log_file)?,
        )));
    }

    builder.init();
    Ok(())
}
