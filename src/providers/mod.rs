//! Completion backends

use async_trait::async_trait;

pub mod sealion;

// Re-export for convenience
pub use sealion::SeaLionClient;

/// Anything that can turn an ordered message list into one reply.
///
/// The review facade only talks to this trait, so tests and alternative
/// endpoints can stand in for the hosted API.
#[async_trait]
pub trait CompletionBackend: Send + Sync
{   /// Send `messages` to `model`; `None` temperature means the
    /// backend's configured default.
    async fn complete(
      &self
    , messages: &[crate::request::ChatMessage]
    , model: &str
    , temperature: Option<f32>
    ) -> crate::CompletionReply;
}
