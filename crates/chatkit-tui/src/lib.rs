//! chatkit-tui: terminal render adapter for chatkit
//!
//! Widgets that read conversation state from `chatkit-core` and draw it with
//! ratatui, plus the theme/layout value objects and crossterm input
//! translation a chat host needs. This crate never mutates the store; hosts
//! forward the actions produced here into it.

pub mod input;
pub mod layout;
pub mod theme;
pub mod widgets;

pub use layout::{ChatBehavior, ChatLayout};
pub use theme::Theme;
pub use widgets::{InputBox, MessageList, QuickPromptBar, TypingIndicator};
