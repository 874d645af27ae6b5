//! Response engine contract

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::pin::Pin;
use tokio_stream::Stream;

use crate::error::Result;

/// Events produced by a response engine while answering one user message.
///
/// The sequence is finite and non-restartable: it terminates after exactly
/// one of `Completed`, `Failed`, or `Cancelled` and must not emit further
/// events afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ChatEvent {
    /// The engine started producing a response
    Started,
    /// An incremental piece of response text
    Token { text: String },
    /// The response finished successfully
    Completed,
    /// The engine failed
    Failed { message: String },
    /// The response was abandoned
    Cancelled,
}

impl ChatEvent {
    /// Check if this event terminates the sequence.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            ChatEvent::Completed | ChatEvent::Failed { .. } | ChatEvent::Cancelled
        )
    }
}

/// A stream of engine events
pub type ChatEventStream = Pin<Box<dyn Stream<Item = ChatEvent> + Send>>;

/// A host-supplied response producer.
///
/// The store never calls this trait itself; it is a convenience contract for
/// hosts that stream responses. An adapter (see
/// [`EngineDriver`](crate::driver::EngineDriver)) translates the event
/// sequence into store mutations on the store's thread.
#[async_trait]
pub trait ChatEngine: Send + Sync {
    /// Produce the event stream answering `input`.
    async fn send(&self, input: &str) -> Result<ChatEventStream>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_events() {
        assert!(!ChatEvent::Started.is_terminal());
        assert!(!ChatEvent::Token { text: "hi".into() }.is_terminal());
        assert!(ChatEvent::Completed.is_terminal());
        assert!(ChatEvent::Failed { message: "x".into() }.is_terminal());
        assert!(ChatEvent::Cancelled.is_terminal());
    }

    #[test]
    fn test_event_serde_tags() {
        let json = serde_json::to_string(&ChatEvent::Token { text: "hi".into() }).unwrap();
        assert_eq!(json, r#"{"type":"token","text":"hi"}"#);
    }
}
