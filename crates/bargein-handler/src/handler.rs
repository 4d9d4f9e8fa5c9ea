//! Interrupt handler facade
//!
//! Orchestrates one transcription event end to end: tokenize, snapshot
//! the speaking state and word sets, run the decision engine, hand the
//! record to the sink, and fire the stop signal when the decision is
//! an interrupt while the agent was speaking.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use chrono::Utc;
use parking_lot::{Mutex, RwLock};
use serde::Serialize;
use tracing::{debug, info};

use bargein_core::{
    decide, next_event_id, text, DecisionAction, InterruptConfig, InterruptDecision,
    TranscriptionEvent, WordSet,
};

use crate::agent::AgentControl;
use crate::sink::DecisionSink;
use crate::state::SpeakingState;

/// Observer invoked after a successful interrupt, in addition to the
/// stop signal.
pub type InterruptCallback = Arc<dyn Fn(&TranscriptionEvent) + Send + Sync>;

/// Read-only snapshot of handler configuration and runtime state.
#[derive(Debug, Clone, Serialize)]
pub struct HandlerStats {
    pub agent_speaking: bool,
    pub ignored_words_count: usize,
    pub command_words_count: usize,
    pub confidence_threshold: f64,
    pub last_vad_update: String,
    pub logging_enabled: bool,
    pub log_file: PathBuf,
    pub dropped_log_records: u64,
}

/// Classifies transcription events and controls agent barge-in.
///
/// All state is instance-owned; multiple independent handlers can
/// coexist in one process. The word sets are atomically-swapped
/// immutable snapshots, so a decision in flight keeps whichever sets
/// it captured and an update never exposes a partially-built set.
pub struct InterruptHandler {
    agent: Arc<dyn AgentControl>,
    ignored_words: RwLock<Arc<WordSet>>,
    command_words: RwLock<Arc<WordSet>>,
    confidence_threshold: f64,
    speaking: SpeakingState,
    sink: DecisionSink,
    interrupt_callback: Mutex<Option<InterruptCallback>>,
}

impl InterruptHandler {
    /// Build a handler around an agent adapter. Must be called from
    /// within a tokio runtime (the sink spawns its writer task here).
    pub fn new(agent: Arc<dyn AgentControl>, config: InterruptConfig) -> Self {
        let ignored_words = Arc::new(WordSet::from_words(&config.ignored_words));
        let command_words = Arc::new(WordSet::from_words(&config.command_words));
        let sink = DecisionSink::new(&config.log_file, config.enable_logging);

        info!(
            "interrupt handler initialized: {} ignored words, {} command words, confidence threshold {}",
            ignored_words.len(),
            command_words.len(),
            config.confidence_threshold
        );

        Self {
            agent,
            ignored_words: RwLock::new(ignored_words),
            command_words: RwLock::new(command_words),
            confidence_threshold: config.confidence_threshold,
            speaking: SpeakingState::new(),
            sink,
            interrupt_callback: Mutex::new(None),
        }
    }

    /// Process one transcription event.
    ///
    /// Returns true exactly when the decision was an interrupt and the
    /// speaking snapshot showed the agent talking, independent of
    /// whether the log write succeeds.
    pub async fn on_transcription_event(&self, event: &TranscriptionEvent) -> bool {
        let started = Instant::now();
        let started_at = Utc::now();
        let event_id = next_event_id();

        let agent_speaking = self.speaking.is_speaking();
        let tokens = text::tokenize(&event.transcript);
        let ignored_words = self.ignored_words.read().clone();
        let command_words = self.command_words.read().clone();

        let decision = decide(
            agent_speaking,
            &tokens,
            event.confidence,
            &ignored_words,
            &command_words,
            self.confidence_threshold,
        );

        // Defensive double-check against stale snapshots: the engine
        // never yields an interrupt while silent, but the stop signal
        // is gated on the same snapshot the engine saw.
        let should_interrupt = decision.action == DecisionAction::Interrupt && agent_speaking;

        self.sink.record(InterruptDecision {
            event_id: event_id.clone(),
            timestamp_iso: started_at.to_rfc3339(),
            agent_speaking,
            transcript: event.transcript.clone(),
            tokens,
            confidence: event.confidence,
            action: decision.action,
            reason: decision.reason.clone(),
            duration_ms: started.elapsed().as_secs_f64() * 1000.0,
        });

        if should_interrupt {
            info!(
                "[{}] interrupt: '{}' - {}",
                event_id, event.transcript, decision.reason
            );
            self.agent.stop_speaking().await;

            let callback = self.interrupt_callback.lock().clone();
            if let Some(callback) = callback {
                callback(event);
            }
        } else {
            debug!(
                "[{}] {}: '{}' - {}",
                event_id, decision.action, event.transcript, decision.reason
            );
        }

        should_interrupt
    }

    /// Apply a VAD notification about the agent's own speech.
    pub fn on_vad_state_change(&self, is_speaking: bool) {
        if self.speaking.set_speaking(is_speaking) {
            debug!(
                "agent state changed: {}",
                if is_speaking { "speaking" } else { "quiet" }
            );
        }
    }

    /// Replace the filler word set wholesale. Effective for all
    /// subsequent decisions; decisions in flight keep their snapshot.
    pub fn update_ignored_words<I, S>(&self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let set = Arc::new(WordSet::from_words(words));
        info!("updated ignored words: {} entries", set.len());
        *self.ignored_words.write() = set;
    }

    /// Replace the command word set wholesale.
    pub fn update_command_words<I, S>(&self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let set = Arc::new(WordSet::from_words(words));
        info!("updated command words: {} entries", set.len());
        *self.command_words.write() = set;
    }

    /// Register at most one interrupt observer; replaces any previous
    /// one.
    pub fn set_interrupt_callback(&self, callback: InterruptCallback) {
        *self.interrupt_callback.lock() = Some(callback);
    }

    /// Snapshot of configuration and state. No side effects.
    pub fn stats(&self) -> HandlerStats {
        let speaking = self.speaking.snapshot();
        HandlerStats {
            agent_speaking: speaking.is_speaking,
            ignored_words_count: self.ignored_words.read().len(),
            command_words_count: self.command_words.read().len(),
            confidence_threshold: self.confidence_threshold,
            last_vad_update: speaking.last_update.to_rfc3339(),
            logging_enabled: self.sink.is_enabled(),
            log_file: self.sink.path().to_path_buf(),
            dropped_log_records: self.sink.dropped_records(),
        }
    }

    /// Drain in-flight decision log writes. Idempotent.
    pub async fn shutdown(&self) {
        info!("shutting down interrupt handler");
        self.sink.shutdown().await;
        info!("interrupt handler shutdown complete");
    }
}
