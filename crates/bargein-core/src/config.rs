//! Handler configuration
//!
//! Built by an external loader (env vars in the `bargein` binary) and
//! consumed by the handler facade. Validation happens in the loader;
//! the handler never sees an out-of-range threshold.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

pub const DEFAULT_CONFIDENCE_THRESHOLD: f64 = 0.3;
pub const DEFAULT_LOW_CONFIDENCE_TIME_MS: u64 = 500;
pub const DEFAULT_LOG_FILE: &str = "logs/interrupts.jsonl";

/// Default filler words ignored while the agent is speaking.
pub fn default_ignored_words() -> Vec<String> {
    [
        "uh", "um", "umm", "hmm", "hm", "haan", "huh", "eh", "ah", "er", "mm", "mhm", "uh-huh",
        "mm-hmm",
    ]
    .iter()
    .map(|w| w.to_string())
    .collect()
}

/// Default command words that always trigger an interrupt.
pub fn default_command_words() -> Vec<String> {
    [
        "wait", "stop", "hold", "pause", "no", "listen", "excuse me", "hang on", "one second",
        "actually",
    ]
    .iter()
    .map(|w| w.to_string())
    .collect()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterruptConfig {
    /// Filler words ignored while the agent is speaking
    pub ignored_words: Vec<String>,
    /// Words that always trigger an interrupt
    pub command_words: Vec<String>,
    /// Minimum confidence for valid speech, 0-1
    pub confidence_threshold: f64,
    /// Duration hint for low-confidence speech. Accepted for
    /// compatibility; the decision rules do not consult it.
    pub low_confidence_time_ms: u64,
    /// Destination for the JSONL decision log
    pub log_file: PathBuf,
    /// Whether decisions are persisted at all
    pub enable_logging: bool,
}

impl Default for InterruptConfig {
    fn default() -> Self {
        Self {
            ignored_words: default_ignored_words(),
            command_words: default_command_words(),
            confidence_threshold: DEFAULT_CONFIDENCE_THRESHOLD,
            low_confidence_time_ms: DEFAULT_LOW_CONFIDENCE_TIME_MS,
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            enable_logging: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_deployment_lists() {
        let config = InterruptConfig::default();
        assert_eq!(config.ignored_words.len(), 14);
        assert_eq!(config.command_words.len(), 10);
        assert_eq!(config.confidence_threshold, 0.3);
        assert_eq!(config.low_confidence_time_ms, 500);
        assert!(config.enable_logging);
        assert_eq!(config.log_file, PathBuf::from("logs/interrupts.jsonl"));
    }

    #[test]
    fn config_round_trips_through_serde() {
        let config = InterruptConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: InterruptConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.ignored_words, config.ignored_words);
        assert_eq!(parsed.confidence_threshold, config.confidence_threshold);
    }
}
