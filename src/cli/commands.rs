// src/cli/commands.rs
use clap::Subcommand;

use crate::models::PasswordGenerationOptions;

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Check the strength of a password
    Check {
        /// Password to check; prompted for (hidden) when omitted
        password: Option<String>,
    },

    /// Generate a password
    Generate {
        /// Password length (defaults to DEFAULT_PASSWORD_LENGTH)
        #[arg(long, short)]
        length: Option<usize>,

        /// Leave out uppercase letters
        #[arg(long)]
        no_uppercase: bool,

        /// Leave out lowercase letters
        #[arg(long)]
        no_lowercase: bool,

        /// Leave out digits
        #[arg(long)]
        no_digits: bool,

        /// Leave out special characters
        #[arg(long)]
        no_special: bool,
    },

    /// Show password guidelines
    Tips,
}

pub fn generation_options(
    length: usize,
    no_uppercase: bool,
    no_lowercase: bool,
    no_digits: bool,
    no_special: bool,
) -> PasswordGenerationOptions {
    PasswordGenerationOptions {
        length,
        include_uppercase: !no_uppercase,
        include_lowercase: !no_lowercase,
        include_numbers: !no_digits,
        include_symbols: !no_special,
    }
}
