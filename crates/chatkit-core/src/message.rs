//! Message data model

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Opaque message identifier, assigned at creation and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageId(Uuid);

impl MessageId {
    /// Generate a fresh identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Get the underlying UUID.
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for MessageId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for MessageId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

/// Role associated with a chat message.
///
/// No alternation between roles is enforced; messages are rendered strictly
/// in the order they appear in the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
    System,
}

/// Rendering state of a single message.
///
/// Purely descriptive for the render layer (show a typing cursor, a failure
/// marker, final text). The store copies it through without interpreting it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MessageStatus {
    Idle,
    Streaming,
    Completed,
    Failed { reason: String },
    Cancelled,
}

/// A single chat turn.
///
/// Identity is immutable; `content` and `status` may be updated in place by
/// the store, addressed by `id`. Consecutive same-role messages are legal and
/// rendered as given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Unique, immutable identifier
    pub id: MessageId,
    /// Who produced the message
    pub role: Role,
    /// Message text (may start empty for placeholders)
    pub content: String,
    /// Rendering status
    pub status: MessageStatus,
    /// Creation time in Unix milliseconds
    #[serde(default)]
    pub timestamp: i64,
}

impl ChatMessage {
    /// Create a message with an explicit role, content, and status.
    pub fn new(role: Role, content: impl Into<String>, status: MessageStatus) -> Self {
        Self {
            id: MessageId::new(),
            role,
            content: content.into(),
            status,
            timestamp: chrono::Utc::now().timestamp_millis(),
        }
    }

    /// Create a completed user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content, MessageStatus::Completed)
    }

    /// Create a completed assistant message.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content, MessageStatus::Completed)
    }

    /// Create an empty assistant placeholder, later resolved in place.
    pub fn assistant_placeholder() -> Self {
        Self::new(Role::Assistant, "", MessageStatus::Idle)
    }

    /// Create a completed system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Role::System, content, MessageStatus::Completed)
    }

    /// Replace the status.
    pub fn with_status(mut self, status: MessageStatus) -> Self {
        self.status = status;
        self
    }

    /// Whether this message is still streaming in.
    pub fn is_streaming(&self) -> bool {
        self.status == MessageStatus::Streaming
    }
}

/// A predefined prompt the render layer can offer as a one-tap shortcut.
///
/// Pure data: selecting a prompt is equivalent to submitting `message` as
/// user text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuickPrompt {
    pub id: Uuid,
    /// Full title shown in wide layouts
    pub title: String,
    /// Optional compact label for narrow layouts
    #[serde(default)]
    pub short_label: Option<String>,
    /// Text submitted on selection
    pub message: String,
}

impl QuickPrompt {
    /// Create a prompt whose title doubles as its label.
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            short_label: None,
            message: message.into(),
        }
    }

    /// Set a compact label for narrow layouts.
    pub fn with_short_label(mut self, label: impl Into<String>) -> Self {
        self.short_label = Some(label.into());
        self
    }

    /// Label to render: the short label when present, otherwise the title.
    pub fn label(&self) -> &str {
        self.short_label.as_deref().unwrap_or(&self.title)
    }
}
