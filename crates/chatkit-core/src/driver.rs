//! Translation from engine events to store mutations.
//!
//! The driver is host-side glue: it runs on the store's thread and turns the
//! [`ChatEvent`] sequence of one response into the placeholder lifecycle
//! calls the store exposes. Marshaling the events onto that thread is the
//! host's job; [`pump_events`] is the usual way to do it.

use tokio::sync::mpsc;
use tokio_stream::StreamExt;

use crate::engine::{ChatEvent, ChatEventStream};
use crate::message::{MessageId, MessageStatus};
use crate::store::ConversationStore;

/// Forward a stream of engine events into a channel until a terminal event
/// or a closed receiver.
///
/// Run this in the engine's task; drain the receiver on the store's thread.
pub async fn pump_events(mut stream: ChatEventStream, tx: mpsc::Sender<ChatEvent>) {
    while let Some(event) = stream.next().await {
        let terminal = event.is_terminal();
        if tx.send(event).await.is_err() {
            tracing::debug!("event receiver dropped, stopping pump");
            return;
        }
        if terminal {
            return;
        }
    }
}

/// Accumulates streamed tokens and applies them to one placeholder message.
///
/// One driver per response. On `Started` (or a first `Token`) it adopts the
/// store's pending placeholder, opening one only if none is pending. On
/// `Failed` it marks the placeholder failed and sets the error phase; on
/// `Cancelled` it marks the placeholder cancelled and returns the phase to
/// ready. Events after a terminal event are ignored.
#[derive(Debug, Default)]
pub struct EngineDriver {
    placeholder: Option<MessageId>,
    buffer: String,
    finished: bool,
}

impl EngineDriver {
    /// Create a driver that adopts (or opens) a placeholder on first use.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a driver bound to an already-opened placeholder, e.g. the id
    /// returned by `submit_user_text` in automatic mode.
    pub fn for_placeholder(id: MessageId) -> Self {
        Self {
            placeholder: Some(id),
            buffer: String::new(),
            finished: false,
        }
    }

    /// Whether a terminal event has been applied.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Apply one engine event to the store. Must run on the store's thread.
    pub fn apply(&mut self, store: &mut ConversationStore, event: ChatEvent) {
        if self.finished {
            tracing::debug!(?event, "event after terminal, ignoring");
            return;
        }

        match event {
            ChatEvent::Started => {
                self.ensure_placeholder(store);
            }
            ChatEvent::Token { text } => {
                let id = self.ensure_placeholder(store);
                self.buffer.push_str(&text);
                store.update_placeholder(id, self.buffer.clone());
            }
            ChatEvent::Completed => {
                self.finished = true;
                match self.placeholder.or_else(|| store.pending_placeholder_id()) {
                    Some(id) => store.complete_placeholder(id, self.buffer.clone()),
                    None => tracing::debug!("completed with no placeholder to resolve"),
                }
            }
            ChatEvent::Failed { message } => {
                self.finished = true;
                if let Some(id) = self.placeholder {
                    store.set_message_status(
                        id,
                        MessageStatus::Failed {
                            reason: message.clone(),
                        },
                    );
                }
                store.set_error(message);
            }
            ChatEvent::Cancelled => {
                self.finished = true;
                if let Some(id) = self.placeholder {
                    store.set_message_status(id, MessageStatus::Cancelled);
                }
                store.set_ready();
            }
        }
    }

    fn ensure_placeholder(&mut self, store: &mut ConversationStore) -> MessageId {
        if let Some(id) = self.placeholder {
            return id;
        }
        let id = store
            .pending_placeholder_id()
            .unwrap_or_else(|| store.begin_awaiting_assistant());
        self.placeholder = Some(id);
        id
    }
}
