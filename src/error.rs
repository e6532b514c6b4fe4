// src/error.rs
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MeterError {
    #[error("Password length must be between {min} and {max} characters (got {length})")]
    InvalidLength { length: usize, min: usize, max: usize },

    #[error("Please enter a password to save")]
    EmptyPassword,

    #[error("Cannot {action} while {from}")]
    InvalidTransition { from: &'static str, action: &'static str },

    #[error("Prompt error: {0}")]
    Prompt(#[from] inquire::InquireError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, MeterError>;
