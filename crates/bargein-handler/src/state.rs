//! Agent speaking-state store

use chrono::{DateTime, Utc};
use parking_lot::RwLock;

/// Point-in-time view of the agent's speaking state.
#[derive(Debug, Clone, Copy)]
pub struct SpeakingSnapshot {
    pub is_speaking: bool,
    pub last_update: DateTime<Utc>,
}

/// Tracks the single mutable fact "is the agent currently speaking".
///
/// Mutated only by VAD notifications, read by every decision. The
/// critical sections are pure copy/assign; no lock is ever held across
/// an await point.
pub struct SpeakingState {
    inner: RwLock<SpeakingSnapshot>,
}

impl SpeakingState {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(SpeakingSnapshot {
                is_speaking: false,
                last_update: Utc::now(),
            }),
        }
    }

    /// Update the state and its timestamp atomically.
    ///
    /// Returns true when the stored value actually changed. Repeated
    /// identical updates are legal no-ops observable only through the
    /// timestamp.
    pub fn set_speaking(&self, is_speaking: bool) -> bool {
        let mut inner = self.inner.write();
        let changed = inner.is_speaking != is_speaking;
        inner.is_speaking = is_speaking;
        inner.last_update = Utc::now();
        changed
    }

    /// Consistent snapshot of the speaking flag.
    pub fn is_speaking(&self) -> bool {
        self.inner.read().is_speaking
    }

    pub fn snapshot(&self) -> SpeakingSnapshot {
        *self.inner.read()
    }
}

impl Default for SpeakingState {
    fn default() -> Self {
        Self::new()
    }
}
