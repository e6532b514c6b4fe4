// src/core/config.rs
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use log::LevelFilter;

use crate::error::{MeterError, Result};

const FALLBACK_MIN_LENGTH: usize = 8;
const FALLBACK_MAX_LENGTH: usize = 32;

// Runtime settings for the meter
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    // Password Generation
    pub default_password_length: usize,
    pub min_password_length: usize,
    pub max_password_length: usize,

    // Logging
    pub log_level: LevelFilter,
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_password_length: 12,
            min_password_length: FALLBACK_MIN_LENGTH,
            max_password_length: FALLBACK_MAX_LENGTH,

            log_level: LevelFilter::Warn,
            log_file: None,
        }
    }
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> (Self, Vec<String>) {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key lookup; unparseable values keep the default.
    ///
    /// Problems are returned as warnings rather than logged, since the logger
    /// is configured from the result.
    pub fn from_lookup<F>(lookup: F) -> (Self, Vec<String>)
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();
        let mut warnings = Vec::new();

        // Password Generation
        if let Some(length) = parse_var(&lookup, "DEFAULT_PASSWORD_LENGTH", &mut warnings) {
            config.default_password_length = length;
        }

        if let Some(min) = parse_var(&lookup, "MIN_PASSWORD_LENGTH", &mut warnings) {
            config.min_password_length = min;
        }

        if let Some(max) = parse_var(&lookup, "MAX_PASSWORD_LENGTH", &mut warnings) {
            config.max_password_length = max;
        }

        if config.min_password_length > config.max_password_length {
            warnings.push(format!(
                "MIN_PASSWORD_LENGTH ({}) exceeds MAX_PASSWORD_LENGTH ({}), using {}..={}",
                config.min_password_length,
                config.max_password_length,
                FALLBACK_MIN_LENGTH,
                FALLBACK_MAX_LENGTH
            ));
            config.min_password_length = FALLBACK_MIN_LENGTH;
            config.max_password_length = FALLBACK_MAX_LENGTH;
        }

        config.default_password_length = config
            .default_password_length
            .clamp(config.min_password_length, config.max_password_length);

        // Logging
        if let Some(level) = lookup("LOG_LEVEL") {
            match level.to_lowercase().as_str() {
                "off" => config.log_level = LevelFilter::Off,
                "error" => config.log_level = LevelFilter::Error,
                "warn" => config.log_level = LevelFilter::Warn,
                "info" => config.log_level = LevelFilter::Info,
                "debug" => config.log_level = LevelFilter::Debug,
                "trace" => config.log_level = LevelFilter::Trace,
                _ => warnings.push(format!("Unknown log level '{}', using {}", level, config.log_level)),
            }
        }

        if let Some(file) = lookup("LOG_FILE") {
            if !file.trim().is_empty() {
                config.log_file = Some(PathBuf::from(file));
            }
        }

        (config, warnings)
    }

    /// Reject lengths outside the configured bounds.
    pub fn validate_length(&self, length: usize) -> Result<usize> {
        if (self.min_password_length..=self.max_password_length).contains(&length) {
            Ok(length)
        } else {
            Err(MeterError::InvalidLength {
                length,
                min: self.min_password_length,
                max: self.max_password_length,
            })
        }
    }

    // Create the log file's directory if needed
    pub fn ensure_directories_exist(&self) -> Result<()> {
        if let Some(parent) = self.log_file.as_ref().and_then(|p| p.parent()) {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }
        Ok(())
    }
}

fn parse_var<F, T>(lookup: &F, key: &str, warnings: &mut Vec<String>) -> Option<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warnings.push(format!("Ignoring invalid value '{}' for {}", raw, key));
            None
        }
    }
}
