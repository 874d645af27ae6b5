//! Chat widgets

pub mod input_box;
pub mod message_list;
pub mod quick_prompt_bar;
pub mod typing_indicator;

pub use input_box::InputBox;
pub use message_list::MessageList;
pub use quick_prompt_bar::QuickPromptBar;
pub use typing_indicator::TypingIndicator;
