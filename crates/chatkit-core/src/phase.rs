//! Conversation-level phase and awaiting mode

use serde::{Deserialize, Serialize};

/// Coarse UI state of the conversation, independent of individual message
/// status.
///
/// `Phase` is intentionally UI-focused: it carries no networking or message
/// lifecycle guarantees. The store never assumes a response will arrive; the
/// host controls when messages are injected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Phase {
    /// Idle, ready for user input
    #[default]
    Ready,
    /// A user message was sent; the UI should reflect waiting
    AwaitingAssistant,
    /// A host-decided visual error state
    Error { description: String },
}

impl Phase {
    pub fn is_ready(&self) -> bool {
        matches!(self, Phase::Ready)
    }

    pub fn is_awaiting(&self) -> bool {
        matches!(self, Phase::AwaitingAssistant)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Phase::Error { .. })
    }
}

/// Who manages phase transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AwaitingMode {
    /// The store manages phase assuming a single user message is followed by
    /// a single assistant response.
    #[default]
    Automatic,
    /// The host fully controls phase via the explicit setters.
    Manual,
}
