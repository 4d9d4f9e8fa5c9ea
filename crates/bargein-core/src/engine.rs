//! Barge-in decision rules
//!
//! A pure function from (speaking snapshot, tokens, confidence) to a
//! classification. Rules are evaluated in strict order and the first
//! match wins: empty transcript, low confidence, agent silent, command
//! word, filler-only, real speech. The ordering encodes the policy
//! that commands override fillers, which override generic content, so
//! a recognized command word regains control even inside filler-laden
//! speech ("umm, actually, stop").

use crate::types::DecisionAction;
use crate::wordset::WordSet;

/// Outcome of the rule engine: what to do and why.
#[derive(Debug, Clone, PartialEq)]
pub struct Decision {
    pub action: DecisionAction,
    pub reason: String,
}

impl Decision {
    fn new(action: DecisionAction, reason: impl Into<String>) -> Self {
        Self {
            action,
            reason: reason.into(),
        }
    }
}

/// Classify one transcription against the current snapshots.
///
/// Every branch returns immediately; the engine never suspends and
/// owns no I/O. Confidence is compared with strict `<`, so a value
/// exactly equal to the threshold passes.
pub fn decide(
    agent_speaking: bool,
    tokens: &[String],
    confidence: f64,
    ignored_words: &WordSet,
    command_words: &WordSet,
    confidence_threshold: f64,
) -> Decision {
    if tokens.is_empty() {
        return Decision::new(DecisionAction::Ignore, "Empty transcript");
    }

    if confidence < confidence_threshold {
        return Decision::new(
            DecisionAction::Ignore,
            format!(
                "Low confidence ({:.2} < {})",
                confidence, confidence_threshold
            ),
        );
    }

    if !agent_speaking {
        return Decision::new(
            DecisionAction::Register,
            "Agent not speaking, registering user speech",
        );
    }

    if command_words.contains_any(tokens) {
        return Decision::new(DecisionAction::Interrupt, "Contains command word");
    }

    if ignored_words.contains_all(tokens) {
        return Decision::new(
            DecisionAction::Ignore,
            "Filler-only speech while agent speaking",
        );
    }

    Decision::new(DecisionAction::Interrupt, "Real user speech detected")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::tokenize;

    fn fillers() -> WordSet {
        WordSet::from_words(["uh", "umm", "hmm", "haan"])
    }

    fn commands() -> WordSet {
        WordSet::from_words(["wait", "stop", "no", "hold"])
    }

    fn decide_text(agent_speaking: bool, transcript: &str, confidence: f64) -> Decision {
        decide(
            agent_speaking,
            &tokenize(transcript),
            confidence,
            &fillers(),
            &commands(),
            0.3,
        )
    }

    #[test]
    fn filler_only_while_speaking_is_ignored() {
        for transcript in ["uh", "umm", "hmm", "uh umm", "hmm uh", "haan"] {
            let decision = decide_text(true, transcript, 0.8);
            assert_eq!(decision.action, DecisionAction::Ignore, "{}", transcript);
        }
    }

    #[test]
    fn real_speech_while_speaking_interrupts() {
        let decision = decide_text(true, "wait one second", 0.8);
        assert_eq!(decision.action, DecisionAction::Interrupt);
    }

    #[test]
    fn speech_while_silent_registers() {
        let decision = decide_text(false, "umm", 0.7);
        assert_eq!(decision.action, DecisionAction::Register);
    }

    #[test]
    fn command_word_among_fillers_interrupts() {
        let decision = decide_text(true, "umm okay stop", 0.8);
        assert_eq!(decision.action, DecisionAction::Interrupt);
        assert_eq!(decision.reason, "Contains command word");
    }

    #[test]
    fn low_confidence_wins_over_command_word() {
        let decision = decide_text(true, "stop", 0.2);
        assert_eq!(decision.action, DecisionAction::Ignore);
        assert!(decision.reason.contains("0.20"));
        assert!(decision.reason.contains("0.3"));
    }

    #[test]
    fn empty_transcript_ignored_regardless_of_confidence() {
        let decision = decide_text(true, "", 0.9);
        assert_eq!(decision.action, DecisionAction::Ignore);
        assert_eq!(decision.reason, "Empty transcript");

        let decision = decide_text(true, "?!", 0.01);
        assert_eq!(decision.reason, "Empty transcript");
    }

    #[test]
    fn confidence_equal_to_threshold_passes() {
        let decision = decide_text(false, "hello", 0.3);
        assert_eq!(decision.action, DecisionAction::Register);
    }

    #[test]
    fn low_confidence_ignored_regardless_of_content() {
        for transcript in ["stop", "hello there", "uh"] {
            let decision = decide_text(true, transcript, 0.1);
            assert_eq!(decision.action, DecisionAction::Ignore, "{}", transcript);
        }
        let decision = decide_text(false, "hello", 0.1);
        assert_eq!(decision.action, DecisionAction::Ignore);
    }

    #[test]
    fn fillers_do_not_apply_while_agent_silent() {
        let decision = decide_text(false, "uh umm hmm", 0.8);
        assert_eq!(decision.action, DecisionAction::Register);
    }

    #[test]
    fn mixed_filler_and_real_speech_interrupts() {
        let decision = decide_text(true, "umm tell me more", 0.8);
        assert_eq!(decision.action, DecisionAction::Interrupt);
        assert_eq!(decision.reason, "Real user speech detected");
    }

    #[test]
    fn word_in_both_sets_triggers_interrupt() {
        let both = WordSet::from_words(["no"]);
        let decision = decide(true, &tokenize("no"), 0.8, &both, &both, 0.3);
        assert_eq!(decision.action, DecisionAction::Interrupt);
    }
}
