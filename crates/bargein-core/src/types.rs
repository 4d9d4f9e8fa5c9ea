//! Core types for barge-in classification

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A transcription result delivered by the ASR layer.
#[derive(Debug, Clone)]
pub struct TranscriptionEvent {
    /// Raw transcript text as produced by the recognizer
    pub transcript: String,
    /// Recognizer confidence, nominally 0.0-1.0 (not clamped)
    pub confidence: f64,
    /// Whether the recognizer considers this result final.
    /// Advisory; the classification rules do not consult it.
    pub is_final: bool,
    /// Capture time of the event
    pub timestamp: DateTime<Utc>,
}

impl TranscriptionEvent {
    /// Create a final event stamped with the current time.
    pub fn new(transcript: impl Into<String>, confidence: f64) -> Self {
        Self {
            transcript: transcript.into(),
            confidence,
            is_final: true,
            timestamp: Utc::now(),
        }
    }

    pub fn with_final(mut self, is_final: bool) -> Self {
        self.is_final = is_final;
        self
    }
}

/// Classification outcome for a transcription event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecisionAction {
    /// Stop the agent and hand the turn to the user
    Interrupt,
    /// Discard the utterance as noise or filler
    Ignore,
    /// Accept the utterance as user input while the agent is silent
    Register,
}

impl DecisionAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            DecisionAction::Interrupt => "interrupt",
            DecisionAction::Ignore => "ignore",
            DecisionAction::Register => "register",
        }
    }
}

impl std::fmt::Display for DecisionAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully resolved decision about one transcription event.
///
/// The field set and names are a compatibility contract for downstream
/// log consumers; one record serializes to one JSON line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterruptDecision {
    pub event_id: String,
    pub timestamp_iso: String,
    /// Agent-speaking snapshot taken when the decision was made
    pub agent_speaking: bool,
    pub transcript: String,
    pub tokens: Vec<String>,
    pub confidence: f64,
    pub action: DecisionAction,
    pub reason: String,
    /// Measured processing time, backfilled just before logging
    pub duration_ms: f64,
}

impl InterruptDecision {
    /// Serialize to a single JSONL line (without trailing newline).
    pub fn to_jsonl(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&DecisionAction::Interrupt).unwrap(),
            "\"interrupt\""
        );
        assert_eq!(
            serde_json::to_string(&DecisionAction::Register).unwrap(),
            "\"register\""
        );
    }

    #[test]
    fn decision_jsonl_carries_contract_fields() {
        let decision = InterruptDecision {
            event_id: "0000002a".into(),
            timestamp_iso: Utc::now().to_rfc3339(),
            agent_speaking: true,
            transcript: "wait one second".into(),
            tokens: vec!["wait".into(), "one".into(), "second".into()],
            confidence: 0.8,
            action: DecisionAction::Interrupt,
            reason: "Contains command word".into(),
            duration_ms: 0.12,
        };

        let line = decision.to_jsonl().unwrap();
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        for field in [
            "event_id",
            "timestamp_iso",
            "agent_speaking",
            "transcript",
            "tokens",
            "confidence",
            "action",
            "reason",
            "duration_ms",
        ] {
            assert!(value.get(field).is_some(), "missing field {}", field);
        }
        assert_eq!(value["action"], "interrupt");
        assert_eq!(value["tokens"][0], "wait");
    }

    #[test]
    fn event_defaults_to_final_with_timestamp() {
        let event = TranscriptionEvent::new("hello", 0.9);
        assert!(event.is_final);
        assert!(event.timestamp <= Utc::now());

        let partial = TranscriptionEvent::new("hel", 0.4).with_final(false);
        assert!(!partial.is_final);
    }
}
