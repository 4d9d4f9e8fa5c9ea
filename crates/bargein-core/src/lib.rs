//! Classification core for voice barge-in detection
//!
//! This crate provides the pure decision layer: transcript
//! normalization, word-set lookups, and the rule engine that decides
//! whether a transcription event should interrupt the agent, be
//! ignored as filler, or be registered as ordinary user speech.
//! It performs no I/O and holds no shared state; the async runtime
//! layer lives in `bargein-handler`.

use std::sync::atomic::{AtomicU64, Ordering};

pub mod config;
pub mod engine;
pub mod text;
pub mod types;
pub mod wordset;

pub use config::InterruptConfig;
pub use engine::{decide, Decision};
pub use types::{DecisionAction, InterruptDecision, TranscriptionEvent};
pub use wordset::WordSet;

/// Generates unique event IDs
static EVENT_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Generate a short process-unique event ID for a decision record.
pub fn next_event_id() -> String {
    format!("{:08x}", EVENT_ID_COUNTER.fetch_add(1, Ordering::SeqCst))
}
