//! Decision log sink
//!
//! Persists every decision as one newline-delimited JSON line. Records
//! are handed to a bounded queue with a single writer task appending
//! to the destination, so producers never block on the classification
//! path and lines never interleave. When the queue is full the record
//! is dropped and counted; write failures are logged and swallowed.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tokio::io::AsyncWriteExt;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, error, info, warn};

use bargein_core::InterruptDecision;

/// Records waiting for the writer before new ones are dropped
pub const SINK_QUEUE_CAPACITY: usize = 256;

const SHUTDOWN_GRACE: Duration = Duration::from_secs(5);

#[derive(Debug, Error)]
enum SinkError {
    #[error("failed to open log file {path:?}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to append log line: {0}")]
    Write(#[from] std::io::Error),
    #[error("failed to serialize decision: {0}")]
    Serialize(#[from] serde_json::Error),
}

enum SinkMsg {
    Write(Box<InterruptDecision>),
    Flush(oneshot::Sender<()>),
}

/// Fire-and-forget JSONL writer for decision records.
pub struct DecisionSink {
    tx: Option<mpsc::Sender<SinkMsg>>,
    dropped: Arc<AtomicU64>,
    path: PathBuf,
}

impl DecisionSink {
    /// Spawn the writer task. With `enabled = false` the sink accepts
    /// records and silently discards them. Must be called from within
    /// a tokio runtime.
    pub fn new(path: impl Into<PathBuf>, enabled: bool) -> Self {
        let path = path.into();
        let dropped = Arc::new(AtomicU64::new(0));

        if !enabled {
            return Self {
                tx: None,
                dropped,
                path,
            };
        }

        let (tx, rx) = mpsc::channel(SINK_QUEUE_CAPACITY);
        tokio::spawn(writer_loop(path.clone(), rx));

        Self {
            tx: Some(tx),
            dropped,
            path,
        }
    }

    /// Queue a decision for appending. Never blocks and never fails
    /// the caller; a full or closed queue only costs the log line.
    pub fn record(&self, decision: InterruptDecision) {
        let Some(tx) = &self.tx else { return };

        match tx.try_send(SinkMsg::Write(Box::new(decision))) {
            Ok(()) => {}
            Err(mpsc::error::TrySendError::Full(_)) => {
                self.dropped.fetch_add(1, Ordering::Relaxed);
                warn!(target: "sink", "decision log queue full, dropping record");
            }
            Err(mpsc::error::TrySendError::Closed(_)) => {
                debug!(target: "sink", "decision log queue closed, dropping record");
            }
        }
    }

    /// Wait until every record queued so far has been written, or the
    /// grace period expires. Idempotent; the writer keeps running.
    pub async fn shutdown(&self) {
        let Some(tx) = &self.tx else { return };

        let (ack_tx, ack_rx) = oneshot::channel();
        if tx.send(SinkMsg::Flush(ack_tx)).await.is_err() {
            return;
        }
        match tokio::time::timeout(SHUTDOWN_GRACE, ack_rx).await {
            Ok(_) => debug!(target: "sink", "decision log drained"),
            Err(_) => warn!(
                target: "sink",
                "timed out after {:?} waiting for decision log to drain", SHUTDOWN_GRACE
            ),
        }
    }

    /// Records dropped because the queue was full.
    pub fn dropped_records(&self) -> u64 {
        self.dropped.load(Ordering::Relaxed)
    }

    pub fn is_enabled(&self) -> bool {
        self.tx.is_some()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

async fn writer_loop(path: PathBuf, mut rx: mpsc::Receiver<SinkMsg>) {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            if let Err(e) = tokio::fs::create_dir_all(parent).await {
                error!(target: "sink", "failed to create log directory {:?}: {}", parent, e);
            }
        }
    }

    info!(target: "sink", "decision log writer started: {:?}", path);

    while let Some(msg) = rx.recv().await {
        match msg {
            SinkMsg::Write(decision) => {
                if let Err(e) = append_line(&path, &decision).await {
                    error!(
                        target: "sink",
                        "failed to persist decision {}: {}", decision.event_id, e
                    );
                }
            }
            SinkMsg::Flush(ack) => {
                // Single consumer: everything queued before the flush
                // has already been written by the time we see it.
                let _ = ack.send(());
            }
        }
    }

    debug!(target: "sink", "decision log writer stopped");
}

async fn append_line(path: &Path, decision: &InterruptDecision) -> Result<(), SinkError> {
    let line = decision.to_jsonl()?;
    let mut file = tokio::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .await
        .map_err(|source| SinkError::Open {
            path: path.to_path_buf(),
            source,
        })?;
    file.write_all(line.as_bytes()).await?;
    file.write_all(b"\n").await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bargein_core::{next_event_id, DecisionAction};
    use chrono::Utc;

    fn sample_decision(transcript: &str, action: DecisionAction) -> InterruptDecision {
        InterruptDecision {
            event_id: next_event_id(),
            timestamp_iso: Utc::now().to_rfc3339(),
            agent_speaking: true,
            transcript: transcript.to_string(),
            tokens: transcript.split_whitespace().map(String::from).collect(),
            confidence: 0.8,
            action,
            reason: "test".to_string(),
            duration_ms: 0.05,
        }
    }

    #[tokio::test]
    async fn records_appear_in_order_after_shutdown() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("decisions.jsonl");
        let sink = DecisionSink::new(&path, true);

        for i in 0..5 {
            sink.record(sample_decision(&format!("line {}", i), DecisionAction::Ignore));
        }
        sink.shutdown().await;

        let contents = tokio::fs::read_to_string(&path).await.unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 5);
        for (i, line) in lines.iter().enumerate() {
            let parsed: InterruptDecision = serde_json::from_str(line).unwrap();
            assert_eq!(parsed.transcript, format!("line {}", i));
        }
    }

    #[tokio::test]
    async fn disabled_sink_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("decisions.jsonl");
        let sink = DecisionSink::new(&path, false);

        assert!(!sink.is_enabled());
        sink.record(sample_decision("hello", DecisionAction::Register));
        sink.shutdown().await;

        assert!(!path.exists());
    }

    #[tokio::test]
    async fn unwritable_destination_is_swallowed() {
        let dir = tempfile::tempdir().unwrap();
        // The destination is an existing directory, so every append fails.
        let sink = DecisionSink::new(dir.path(), true);

        sink.record(sample_decision("hello", DecisionAction::Interrupt));
        sink.shutdown().await;
        // No panic, no error surfaced to the caller.
    }

    #[tokio::test]
    async fn shutdown_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let sink = DecisionSink::new(dir.path().join("d.jsonl"), true);
        sink.record(sample_decision("once", DecisionAction::Ignore));
        sink.shutdown().await;
        sink.shutdown().await;
    }
}
