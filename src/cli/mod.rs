// src/cli/mod.rs
use clap::Parser;

pub mod commands;
pub mod handlers;
pub mod menu;

pub use commands::CliCommand;

#[derive(Parser, Debug)]
#[command(author, version, about = "Password strength meter and generator", long_about = None)]
pub struct Args {
    /// Print results as JSON (one-shot commands only)
    #[arg(long, global = true)]
    pub json: bool,

    /// Command to execute; starts the interactive menu when omitted
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}
