//! Environment-variable configuration loader
//!
//! Reads the handler configuration from process environment variables.
//! Malformed values warn and fall back to the documented defaults, so
//! the handler never receives an invalid threshold.
//!
//! Variables:
//! - `IGNORED_WORDS`: comma-separated filler words
//! - `COMMAND_WORDS`: comma-separated command words
//! - `CONFIDENCE_THRESHOLD`: float in [0, 1]
//! - `LOW_CONFIDENCE_TIME_MS`: integer milliseconds
//! - `LOG_FILE`: path to the JSONL decision log
//! - `ENABLE_LOGGING`: true/1/yes/on

use std::env;
use std::path::PathBuf;

use tracing::warn;

use bargein_core::config::{
    DEFAULT_CONFIDENCE_THRESHOLD, DEFAULT_LOW_CONFIDENCE_TIME_MS,
};
use bargein_core::InterruptConfig;

pub fn load_config() -> InterruptConfig {
    let mut config = InterruptConfig::default();

    if let Some(words) = word_list_from_env("IGNORED_WORDS") {
        config.ignored_words = words;
    }
    if let Some(words) = word_list_from_env("COMMAND_WORDS") {
        config.command_words = words;
    }

    if let Some(raw) = non_empty_var("CONFIDENCE_THRESHOLD") {
        match raw.parse::<f64>() {
            Ok(value) if (0.0..=1.0).contains(&value) => config.confidence_threshold = value,
            Ok(value) => warn!(
                "CONFIDENCE_THRESHOLD {} out of range 0-1, using default {}",
                value, DEFAULT_CONFIDENCE_THRESHOLD
            ),
            Err(e) => warn!(
                "invalid CONFIDENCE_THRESHOLD '{}': {}, using default {}",
                raw, e, DEFAULT_CONFIDENCE_THRESHOLD
            ),
        }
    }

    if let Some(raw) = non_empty_var("LOW_CONFIDENCE_TIME_MS") {
        match raw.parse::<u64>() {
            Ok(value) => config.low_confidence_time_ms = value,
            Err(e) => warn!(
                "invalid LOW_CONFIDENCE_TIME_MS '{}': {}, using default {}",
                raw, e, DEFAULT_LOW_CONFIDENCE_TIME_MS
            ),
        }
    }

    if let Some(raw) = non_empty_var("LOG_FILE") {
        config.log_file = PathBuf::from(raw);
    }

    if let Some(raw) = non_empty_var("ENABLE_LOGGING") {
        config.enable_logging = matches!(raw.to_lowercase().as_str(), "true" | "1" | "yes" | "on");
    }

    config
}

fn non_empty_var(name: &str) -> Option<String> {
    let raw = env::var(name).ok()?;
    let trimmed = raw.trim().to_string();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

fn word_list_from_env(name: &str) -> Option<Vec<String>> {
    let raw = non_empty_var(name)?;
    let words: Vec<String> = raw
        .split(',')
        .map(|w| w.trim().to_string())
        .filter(|w| !w.is_empty())
        .collect();
    if words.is_empty() {
        None
    } else {
        Some(words)
    }
}
