// src/cli/menu.rs
use inquire::{Confirm, InquireError, Password, Select, Text};
use std::error::Error;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::cli::handlers::{generate, StrengthReport};
use crate::core::config::Config;
use crate::core::session::{GenerationFlow, Session};
use crate::education::PASSWORD_TIPS;
use crate::error::{MeterError, Result};
use crate::models::{PasswordGenerationOptions, PasswordRecord, DEFAULT_GENERATED_ACCOUNT_NAME};
use crate::utils::{mask_password, styled_label};

const CHECK: &str = "🔍  Check password";
const GENERATE: &str = "🔑  Generate password";
const HISTORY: &str = "📜  Password history";
const TIPS: &str = "💡  Password tips";
const EXIT: &str = "❌  Exit";

const SHOW: &str = "Show a password";
const CLEAR: &str = "Clear history";
const BACK: &str = "Back";

pub fn run_cli_menu(config: &Config, should_exit: Arc<AtomicBool>) -> std::result::Result<(), Box<dyn Error>> {
    println!("╔══════════════════════════════════════╗");
    println!("║   🔐 PASSWORD STRENGTH METER         ║");
    println!("╚══════════════════════════════════════╝");

    let mut session = Session::new();

    while !should_exit.load(Ordering::SeqCst) {
        let options = vec![CHECK, GENERATE, HISTORY, TIPS, EXIT];

        let selection = Select::new("Choose an option:", options)
            .with_help_message("Use arrow keys to navigate, Enter to select. Esc to exit.")
            .prompt_skippable();

        let outcome = match selection {
            Ok(Some(CHECK)) => check_password(&mut session),
            Ok(Some(GENERATE)) => generate_password(&mut session, config),
            Ok(Some(HISTORY)) => show_history(&mut session),
            Ok(Some(TIPS)) => {
                println!("\n{}", PASSWORD_TIPS.render());
                Ok(())
            }
            Ok(Some(_)) | Ok(None) => break,
            Err(InquireError::OperationInterrupted) => break,
            Err(e) => return Err(e.into()),
        };

        match outcome {
            Ok(()) => {}
            Err(MeterError::Prompt(InquireError::OperationCanceled)) => {
                println!("↩️  Cancelled");
            }
            Err(MeterError::Prompt(InquireError::OperationInterrupted)) => break,
            Err(e) => println!("❌ {}", e),
        }
    }

    log::info!("Session ended with {} saved passwords", session.history.len());
    println!("👋 Session discarded. Goodbye!");
    Ok(())
}

fn check_password(session: &mut Session) -> Result<()> {
    let password = Password::new("Enter a password to check its strength:")
        .with_display_mode(inquire::PasswordDisplayMode::Masked)
        .without_confirmation()
        .prompt()?;
    let account = Text::new("Enter the account name (optional):").prompt()?;

    if !password.is_empty() {
        println!("\n{}", StrengthReport::for_password(&password).render());

        if session.history.is_duplicate(&password) {
            println!("⚠️ This password has been used multiple times before!");
        }
    }

    let save = Confirm::new("💾 Save password?").with_default(false).prompt()?;
    if save {
        match session.save_password(&account, &password) {
            Ok(record) => println!("✅ Password for '{}' saved successfully!", record.account()),
            Err(MeterError::EmptyPassword) => println!("⚠️ Please enter a password to save."),
            Err(e) => return Err(e),
        }
    }

    Ok(())
}

fn generate_password(session: &mut Session, config: &Config) -> Result<()> {
    let length: usize = Text::new("Password length:")
        .with_default(&config.default_password_length.to_string())
        .with_help_message(&format!(
            "Between {} and {}",
            config.min_password_length, config.max_password_length
        ))
        .prompt()
        .and_then(|s| s.trim().parse().map_err(|_| InquireError::Custom("Invalid number".into())))?;
    let length = config.validate_length(length)?;

    let include_uppercase = Confirm::new("Include uppercase letters?").with_default(true).prompt()?;
    let include_lowercase = Confirm::new("Include lowercase letters?").with_default(true).prompt()?;
    let include_numbers = Confirm::new("Include digits?").with_default(true).prompt()?;
    let include_symbols = Confirm::new("Include special characters?").with_default(true).prompt()?;

    let options = PasswordGenerationOptions {
        length,
        include_uppercase,
        include_lowercase,
        include_numbers,
        include_symbols,
    };

    let generated = generate(&options);
    session.generated(generated.password.clone());

    println!("\nGenerated Password: {}", generated.password);
    println!("Strength: {}\n", styled_label(generated.strength.label));

    let save = Confirm::new("Save generated password?").with_default(false).prompt()?;
    if !save {
        session.reset_flow();
        return Ok(());
    }
    session.request_save()?;

    let account = Text::new("Account name for generated password:")
        .with_default(DEFAULT_GENERATED_ACCOUNT_NAME)
        .prompt()?;

    let confirm = Confirm::new("Confirm save?").with_default(true).prompt()?;
    if confirm {
        session.confirm_save(&account)?;
        if let GenerationFlow::Saved { record } = session.flow() {
            println!("✅ Generated password for '{}' saved successfully!", record.account());
        }
    } else {
        session.reset_flow();
        println!("❗ Generated password was not saved.");
    }

    Ok(())
}

struct HistoryChoice<'a> {
    record: &'a PasswordRecord,
}

impl fmt::Display for HistoryChoice<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} - {}",
            self.record.timestamp(),
            self.record.account(),
            self.record.strength_label()
        )
    }
}

fn show_history(session: &mut Session) -> Result<()> {
    if session.history.is_empty() {
        println!("❗ No passwords saved yet.");
        return Ok(());
    }

    println!("\n📜 Password History");
    for record in session.history.newest_first() {
        println!(
            "{} - {} - {} - {}",
            record.timestamp(),
            record.account(),
            styled_label(record.strength_label()),
            mask_password(record.password())
        );
    }
    println!();

    let action = Select::new("History:", vec![SHOW, CLEAR, BACK]).prompt()?;
    match action {
        SHOW => {
            let choices: Vec<HistoryChoice> = session
                .history
                .newest_first()
                .map(|record| HistoryChoice { record })
                .collect();
            let choice = Select::new("Show password for:", choices)
                .with_page_size(20)
                .prompt()?;
            println!("🔐 {}: {}", choice.record.account(), choice.record.password());
        }
        CLEAR => {
            let confirm = Confirm::new("Clear the whole history?").with_default(false).prompt()?;
            if confirm {
                session.history.clear();
                println!("✅ History cleared!");
            }
        }
        _ => {}
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_returns_once_exit_is_requested() {
        let should_exit = Arc::new(AtomicBool::new(true));
        assert!(run_cli_menu(&Config::default(), Arc::clone(&should_exit)).is_ok());
        assert!(should_exit.load(Ordering::SeqCst));
    }
}
