//! Scripted conversation demo
//!
//! Runs a fixed scenario list against a simulated agent to show how
//! the handler classifies fillers, commands, low-confidence noise, and
//! ordinary speech in both speaking states.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::info;

use bargein_core::{InterruptConfig, TranscriptionEvent};
use bargein_handler::{AgentControl, InterruptHandler};

/// Agent stand-in that just records being interrupted.
#[derive(Default)]
pub struct SimulatedAgent {
    interrupted: AtomicUsize,
}

#[async_trait]
impl AgentControl for SimulatedAgent {
    async fn stop_speaking(&self) {
        self.interrupted.fetch_add(1, Ordering::SeqCst);
        info!("agent: stopping speech");
    }
}

impl SimulatedAgent {
    pub fn interrupted_count(&self) -> usize {
        self.interrupted.load(Ordering::SeqCst)
    }
}

struct Step {
    label: &'static str,
    agent_speaking: bool,
    transcript: &'static str,
    confidence: f64,
}

const SCRIPT: [Step; 8] = [
    Step {
        label: "filler while agent speaks",
        agent_speaking: true,
        transcript: "umm",
        confidence: 0.8,
    },
    Step {
        label: "hesitation noises",
        agent_speaking: true,
        transcript: "uh hmm",
        confidence: 0.75,
    },
    Step {
        label: "real interruption",
        agent_speaking: true,
        transcript: "wait I have a question",
        confidence: 0.85,
    },
    Step {
        label: "command word inside fillers",
        agent_speaking: true,
        transcript: "umm okay stop",
        confidence: 0.8,
    },
    Step {
        label: "low-confidence noise",
        agent_speaking: true,
        transcript: "stop",
        confidence: 0.2,
    },
    Step {
        label: "empty transcript",
        agent_speaking: true,
        transcript: "",
        confidence: 0.9,
    },
    Step {
        label: "user speaks while agent silent",
        agent_speaking: false,
        transcript: "tell me about pricing",
        confidence: 0.9,
    },
    Step {
        label: "filler while agent silent",
        agent_speaking: false,
        transcript: "hmm",
        confidence: 0.7,
    },
];

pub async fn run(config: InterruptConfig) -> anyhow::Result<()> {
    let agent = Arc::new(SimulatedAgent::default());
    let handler = InterruptHandler::new(agent.clone(), config);

    for step in &SCRIPT {
        handler.on_vad_state_change(step.agent_speaking);
        let event = TranscriptionEvent::new(step.transcript, step.confidence);
        let interrupted = handler.on_transcription_event(&event).await;
        info!(
            "{}: '{}' (confidence {:.2}) -> {}",
            step.label,
            step.transcript,
            step.confidence,
            if interrupted { "INTERRUPT" } else { "no interrupt" }
        );
        tokio::time::sleep(Duration::from_millis(50)).await;
    }

    let stats = handler.stats();
    info!(
        "demo complete: {} interrupts, {} ignored words, {} command words, log at {:?}",
        agent.interrupted_count(),
        stats.ignored_words_count,
        stats.command_words_count,
        stats.log_file
    );

    handler.shutdown().await;
    Ok(())
}
