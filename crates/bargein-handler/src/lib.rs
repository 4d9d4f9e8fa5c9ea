//! Async barge-in handler for voice agents
//!
//! Wires the pure classification core from `bargein-core` into a
//! runtime: a concurrency-safe speaking-state store fed by VAD
//! notifications, a fire-and-forget JSONL decision sink, and the
//! `InterruptHandler` facade that turns transcription events into
//! stop-speaking calls on an [`agent::AgentControl`] implementation.

pub mod agent;
pub mod handler;
pub mod sink;
pub mod state;

pub use agent::AgentControl;
pub use handler::{HandlerStats, InterruptHandler};
pub use sink::DecisionSink;
pub use state::{SpeakingSnapshot, SpeakingState};
