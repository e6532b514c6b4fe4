// src/core/session.rs
use chrono::{Local, NaiveDateTime};

use crate::core::history::HistoryStore;
use crate::core::strength::{evaluate_strength, StrengthLabel};
use crate::error::{MeterError, Result};
use crate::models::PasswordRecord;

/// Steps of the generate, save, name, confirm flow.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum GenerationFlow {
    #[default]
    Idle,
    Generated { password: String },
    AwaitingAccountName { password: String },
    Saved { record: PasswordRecord },
}

impl GenerationFlow {
    pub fn name(&self) -> &'static str {
        match self {
            GenerationFlow::Idle => "idle",
            GenerationFlow::Generated { .. } => "generated",
            GenerationFlow::AwaitingAccountName { .. } => "awaiting account name",
            GenerationFlow::Saved { .. } => "saved",
        }
    }
}

/// State owned by one interactive run.
#[derive(Debug, Default)]
pub struct Session {
    pub history: HistoryStore,
    flow: GenerationFlow,
}

impl Session {
    pub fn new() -> Self {
        Self {
            history: HistoryStore::new(),
            flow: GenerationFlow::Idle,
        }
    }

    pub fn flow(&self) -> &GenerationFlow {
        &self.flow
    }

    pub fn save_password(&mut self, account: &str, password: &str) -> Result<PasswordRecord> {
        self.save_password_at(account, password, Local::now().naive_local())
    }

    pub fn save_password_at(&mut self, account: &str, password: &str, timestamp: NaiveDateTime) -> Result<PasswordRecord> {
        if password.is_empty() {
            return Err(MeterError::EmptyPassword);
        }

        let (score, _) = evaluate_strength(password);
        let record = PasswordRecord::new(account, password, StrengthLabel::from_score(score), timestamp);
        self.history.append(record.clone());

        log::info!(
            "Saved password for '{}' ({}, history size {})",
            record.account(),
            record.strength_label(),
            self.history.len()
        );

        Ok(record)
    }

    /// Record a freshly generated password, replacing any flow in progress.
    pub fn generated(&mut self, password: String) {
        log::debug!("Generation flow: {} -> generated", self.flow.name());
        self.flow = GenerationFlow::Generated { password };
    }

    pub fn request_save(&mut self) -> Result<()> {
        match std::mem::take(&mut self.flow) {
            GenerationFlow::Generated { password } => {
                self.flow = GenerationFlow::AwaitingAccountName { password };
                Ok(())
            }
            other => {
                let from = other.name();
                self.flow = other;
                Err(MeterError::InvalidTransition { from, action: "request save" })
            }
        }
    }

    pub fn confirm_save(&mut self, account: &str) -> Result<PasswordRecord> {
        self.confirm_save_at(account, Local::now().naive_local())
    }

    pub fn confirm_save_at(&mut self, account: &str, timestamp: NaiveDateTime) -> Result<PasswordRecord> {
        let password = match std::mem::take(&mut self.flow) {
            GenerationFlow::AwaitingAccountName { password } => password,
            other => {
                let from = other.name();
                self.flow = other;
                return Err(MeterError::InvalidTransition { from, action: "confirm save" });
            }
        };

        match self.save_password_at(account, &password, timestamp) {
            Ok(record) => {
                self.flow = GenerationFlow::Saved { record: record.clone() };
                Ok(record)
            }
            Err(e) => {
                self.flow = GenerationFlow::AwaitingAccountName { password };
                Err(e)
            }
        }
    }

    pub fn reset_flow(&mut self) {
        self.flow = GenerationFlow::Idle;
    }
}
