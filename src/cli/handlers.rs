// src/cli/handlers.rs
use inquire::Password;
use serde::Serialize;
use serde_json::json;

use crate::cli::commands::{generation_options, CliCommand};
use crate::core::config::Config;
use crate::core::strength::{evaluate_strength, label_for_score, CriteriaSet, StrengthLabel};
use crate::education::PASSWORD_TIPS;
use crate::error::Result;
use crate::generators::PasswordGenerator;
use crate::models::PasswordGenerationOptions;
use crate::utils::{criteria_lines, progress_bar, styled_label};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StrengthReport {
    pub score: u8,
    pub label: StrengthLabel,
    pub criteria: CriteriaSet,
}

impl StrengthReport {
    pub fn for_password(password: &str) -> Self {
        let (score, criteria) = evaluate_strength(password);
        Self {
            score,
            label: StrengthLabel::from_score(score),
            criteria,
        }
    }

    pub fn render(&self) -> String {
        let mut out = format!(
            "Strength: {}\n{}\n\nStrength Criteria:\n",
            styled_label(self.label),
            progress_bar(self.score)
        );
        for line in criteria_lines(&self.criteria) {
            out.push_str(&line);
            out.push('\n');
        }
        out
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GeneratedPassword {
    pub password: String,
    pub length: usize,
    pub strength: StrengthReport,
}

/// Run a one-shot subcommand.
pub fn handle_command(command: CliCommand, config: &Config, json: bool) -> Result<()> {
    match command {
        CliCommand::Check { password } => handle_check(password, json),
        CliCommand::Generate {
            length,
            no_uppercase,
            no_lowercase,
            no_digits,
            no_special,
        } => {
            let length = config.validate_length(length.unwrap_or(config.default_password_length))?;
            let options = generation_options(length, no_uppercase, no_lowercase, no_digits, no_special);
            let generated = generate(&options);
            if json {
                println!("{}", serde_json::to_string_pretty(&generated)?);
            } else {
                println!("{}", generated.password);
                print!("{}", generated.strength.render());
            }
            Ok(())
        }
        CliCommand::Tips => {
            if json {
                println!("{}", serde_json::to_string_pretty(&PASSWORD_TIPS)?);
            } else {
                print!("{}", PASSWORD_TIPS.render());
            }
            Ok(())
        }
    }
}

pub fn handle_check(password: Option<String>, json: bool) -> Result<()> {
    let password = match password {
        Some(password) => password,
        None if json => {
            // Read the password from stdin, one line
            let mut line = String::new();
            std::io::stdin().read_line(&mut line)?;
            line.trim_end_matches(['\r', '\n']).to_string()
        }
        None => Password::new("Enter a password to check its strength:")
            .with_display_mode(inquire::PasswordDisplayMode::Hidden)
            .without_confirmation()
            .prompt()?,
    };

    let report = StrengthReport::for_password(&password);
    log::debug!(
        "Checked password of length {}: score {} ({})",
        password.chars().count(),
        report.score,
        label_for_score(report.score)
    );

    if json {
        let response = json!({
            "success": true,
            "score": report.score,
            "label": report.label,
            "criteria": report.criteria,
        });
        println!("{}", response);
    } else {
        print!("{}", report.render());
    }

    Ok(())
}

pub fn generate(options: &PasswordGenerationOptions) -> GeneratedPassword {
    let password = PasswordGenerator::new().generate_password(options);
    log::debug!(
        "Generated password of length {} from {} enabled classes",
        options.length,
        options.enabled_class_count()
    );
    GeneratedPassword {
        length: password.chars().count(),
        strength: StrengthReport::for_password(&password),
        password,
    }
}
