//! Agent control surface

use async_trait::async_trait;

/// Minimal capability an agent adapter must expose to the handler.
///
/// The handler calls [`stop_speaking`](AgentControl::stop_speaking) at
/// most once per classified interrupt while the agent was speaking.
/// Implementations must tolerate the call arriving after speech has
/// already ended; the handler does not verify the agent actually
/// stopped.
#[async_trait]
pub trait AgentControl: Send + Sync {
    /// Tell the agent to stop speaking immediately.
    async fn stop_speaking(&self);
}
