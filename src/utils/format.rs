// src/utils/format.rs
use console::{style, StyledObject};

use crate::core::strength::{CriteriaSet, StrengthLabel, MAX_SCORE};

// Color a strength label for terminal output
pub fn styled_label(label: StrengthLabel) -> StyledObject<&'static str> {
    let text = style(label.as_str()).bold();
    match label {
        StrengthLabel::Strong => text.green(),
        StrengthLabel::Moderate => text.yellow(),
        StrengthLabel::Weak => text.red(),
    }
}

/// Fixed-width bar with one cell per satisfied criterion.
pub fn progress_bar(score: u8) -> String {
    let filled = score.min(MAX_SCORE) as usize;
    let empty = MAX_SCORE as usize - filled;
    format!("[{}{}] {}/{}", "█".repeat(filled), "░".repeat(empty), filled, MAX_SCORE)
}

pub fn criteria_lines(criteria: &CriteriaSet) -> Vec<String> {
    criteria
        .iter()
        .map(|(criterion, met)| {
            if met {
                format!("✔️ {}", criterion)
            } else {
                format!("❌ {}", criterion)
            }
        })
        .collect()
}

// Hide a password behind bullets of the same length
pub fn mask_password(password: &str) -> String {
    "•".repeat(password.chars().count())
}
