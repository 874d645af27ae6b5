//! chatkit-core: conversation state machine for chat UIs
//!
//! This crate owns the message list, the turn-taking phase, and the contract
//! between user input and a host-supplied response engine. It performs no
//! networking and no rendering; a render layer subscribes to the store and
//! raises user intents into it.

pub mod config;
pub mod driver;
pub mod engine;
pub mod error;
pub mod message;
pub mod phase;
pub mod store;

pub use config::ChatConfig;
pub use driver::{EngineDriver, pump_events};
pub use engine::{ChatEngine, ChatEvent, ChatEventStream};
pub use error::{Error, Result};
pub use message::{ChatMessage, MessageId, MessageStatus, QuickPrompt, Role};
pub use phase::{AwaitingMode, Phase};
pub use store::{ConversationStore, StoreEvent};
