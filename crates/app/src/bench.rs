//! Decision-latency micro-benchmark
//!
//! Measures per-event classification latency with logging disabled so
//! only the decision path is on the clock.

use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;

use bargein_core::{InterruptConfig, TranscriptionEvent};
use bargein_handler::{AgentControl, InterruptHandler};

struct NullAgent;

#[async_trait]
impl AgentControl for NullAgent {
    async fn stop_speaking(&self) {}
}

pub async fn run(config: InterruptConfig, iterations: usize) -> anyhow::Result<()> {
    let config = InterruptConfig {
        enable_logging: false,
        ..config
    };
    let handler = InterruptHandler::new(Arc::new(NullAgent), config);
    handler.on_vad_state_change(true);

    let mut latencies = Vec::with_capacity(iterations);
    let run_start = Instant::now();

    for i in 0..iterations {
        let transcript = if i % 2 == 0 { "uh" } else { "wait please" };
        let event = TranscriptionEvent::new(transcript, 0.8);
        let start = Instant::now();
        handler.on_transcription_event(&event).await;
        latencies.push(start.elapsed());
    }

    let total = run_start.elapsed();
    latencies.sort();

    let mean = latencies.iter().sum::<Duration>() / latencies.len() as u32;
    let p95 = latencies[latencies.len() * 95 / 100];
    let max = *latencies.last().expect("non-empty latency set");
    let throughput = iterations as f64 / total.as_secs_f64();

    println!("decision latency over {} events:", iterations);
    println!("  mean: {:?}", mean);
    println!("  p95:  {:?}", p95);
    println!("  max:  {:?}", max);
    println!("  throughput: {:.0} events/s", throughput);

    handler.shutdown().await;
    Ok(())
}
