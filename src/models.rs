// src/models.rs
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::core::strength::StrengthLabel;

pub const DEFAULT_ACCOUNT_NAME: &str = "Unnamed Account";
pub const DEFAULT_GENERATED_ACCOUNT_NAME: &str = "Generated Password";
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A saved password, kept in plaintext for the lifetime of the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordRecord {
    account: String,
    password: String,
    strength_label: StrengthLabel,
    timestamp: String,
}

impl PasswordRecord {
    pub fn new(account: &str, password: &str, strength_label: StrengthLabel, timestamp: NaiveDateTime) -> Self {
        Self {
            account: account_or_default(account, DEFAULT_ACCOUNT_NAME),
            password: password.to_string(),
            strength_label,
            timestamp: timestamp.format(TIMESTAMP_FORMAT).to_string(),
        }
    }

    pub fn account(&self) -> &str {
        &self.account
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn strength_label(&self) -> StrengthLabel {
        self.strength_label
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }
}

pub fn account_or_default(account: &str, default: &str) -> String {
    let trimmed = account.trim();
    if trimmed.is_empty() {
        default.to_string()
    } else {
        trimmed.to_string()
    }
}

// Password generation options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordGenerationOptions {
    pub length: usize,
    pub include_uppercase: bool,
    pub include_lowercase: bool,
    pub include_numbers: bool,
    pub include_symbols: bool,
}

impl PasswordGenerationOptions {
    pub fn enabled_class_count(&self) -> usize {
        [
            self.include_lowercase,
            self.include_uppercase,
            self.include_numbers,
            self.include_symbols,
        ]
        .iter()
        .filter(|enabled| **enabled)
        .count()
    }
}

impl Default for PasswordGenerationOptions {
    fn default() -> Self {
        Self {
            length: 12,
            include_uppercase: true,
            include_lowercase: true,
            include_numbers: true,
            include_symbols: true,
        }
    }
}
