//! Store construction surface

use crate::message::{ChatMessage, QuickPrompt};
use crate::phase::AwaitingMode;

/// Configuration fixed when a [`ConversationStore`] is created.
///
/// `placeholder` is render-layer data (composer hint text); the store itself
/// never reads it.
///
/// [`ConversationStore`]: crate::store::ConversationStore
#[derive(Debug, Clone)]
pub struct ChatConfig {
    /// Messages present before the first user interaction
    pub initial_messages: Vec<ChatMessage>,
    /// One-tap prompts offered by the render layer
    pub quick_prompts: Vec<QuickPrompt>,
    /// Composer hint text for empty input
    pub placeholder: String,
    /// Who manages phase transitions
    pub awaiting_mode: AwaitingMode,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            initial_messages: vec![],
            quick_prompts: vec![],
            placeholder: "Type a message…".to_string(),
            awaiting_mode: AwaitingMode::Automatic,
        }
    }
}

impl ChatConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the conversation with an initial message list.
    pub fn with_initial_messages(mut self, messages: Vec<ChatMessage>) -> Self {
        self.initial_messages = messages;
        self
    }

    /// Offer quick prompts in the render layer.
    pub fn with_quick_prompts(mut self, prompts: Vec<QuickPrompt>) -> Self {
        self.quick_prompts = prompts;
        self
    }

    /// Set the composer hint text.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Set who manages phase transitions.
    pub fn with_awaiting_mode(mut self, mode: AwaitingMode) -> Self {
        self.awaiting_mode = mode;
        self
    }
}
