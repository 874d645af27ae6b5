//! Conversation store: the single source of truth for messages and phase.

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use crate::config::ChatConfig;
use crate::message::{ChatMessage, MessageId, MessageStatus, QuickPrompt, Role};
use crate::phase::{AwaitingMode, Phase};

/// Notification sent to subscribers after a mutation is fully applied.
///
/// Exactly one event is sent per successful mutation operation, in the order
/// the operations were issued. No-ops (empty submissions, unknown ids) send
/// nothing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StoreEvent {
    /// A user message was submitted (placeholder opened in automatic mode)
    UserSubmitted {
        message: ChatMessage,
        placeholder_id: Option<MessageId>,
    },
    /// An assistant placeholder was opened explicitly
    PlaceholderOpened { id: MessageId },
    /// A placeholder received incremental content
    PlaceholderUpdated { id: MessageId },
    /// A placeholder was completed with final content
    PlaceholderCompleted { id: MessageId },
    /// An appended assistant message resolved the pending placeholder in place
    PlaceholderResolved { id: MessageId },
    /// A message's status was changed directly
    StatusChanged { id: MessageId },
    /// A message was appended as a new list entry
    MessageAppended { message: ChatMessage },
    /// A batch of messages was appended
    MessagesAppended { count: usize },
    /// The phase was set explicitly
    PhaseChanged { phase: Phase },
}

/// Host callback invoked with each submitted user message.
type SendCallback = Box<dyn FnMut(ChatMessage) + Send>;

/// Owns the message sequence and phase of one conversation session.
///
/// All mutation methods take `&mut self` and are expected to run on a single
/// logical thread (the UI/event thread); the store performs no locking.
/// Asynchronous collaborators must marshal their callbacks onto that thread
/// before calling in — typically by forwarding events over a channel that the
/// host loop drains (see [`pump_events`](crate::driver::pump_events)).
///
/// Messages are never deleted; the list grows by appends plus targeted
/// in-place updates of `content` and `status` addressed by id.
pub struct ConversationStore {
    messages: Vec<ChatMessage>,
    phase: Phase,
    awaiting_mode: AwaitingMode,
    pending_placeholder: Option<MessageId>,
    quick_prompts: Vec<QuickPrompt>,
    placeholder_text: String,
    on_send: Option<SendCallback>,
    event_tx: broadcast::Sender<StoreEvent>,
}

impl ConversationStore {
    /// Create a store from configuration.
    pub fn new(config: ChatConfig) -> Self {
        let (event_tx, _) = broadcast::channel(256);
        Self {
            messages: config.initial_messages,
            phase: Phase::Ready,
            awaiting_mode: config.awaiting_mode,
            pending_placeholder: None,
            quick_prompts: config.quick_prompts,
            placeholder_text: config.placeholder,
            on_send: None,
            event_tx,
        }
    }

    /// Install the host callback invoked once per submitted user message.
    pub fn with_on_send(mut self, on_send: impl FnMut(ChatMessage) + Send + 'static) -> Self {
        self.on_send = Some(Box::new(on_send));
        self
    }

    /// Subscribe to store notifications.
    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.event_tx.subscribe()
    }

    // --- Reads ---

    /// The message list, in insertion order.
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Current phase.
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// Id of the outstanding placeholder, if any.
    pub fn pending_placeholder_id(&self) -> Option<MessageId> {
        self.pending_placeholder
    }

    /// Quick prompts offered by the render layer.
    pub fn quick_prompts(&self) -> &[QuickPrompt] {
        &self.quick_prompts
    }

    /// Who manages phase transitions.
    pub fn awaiting_mode(&self) -> AwaitingMode {
        self.awaiting_mode
    }

    /// Composer hint text for empty input.
    pub fn placeholder_text(&self) -> &str {
        &self.placeholder_text
    }

    /// Look up a message by id.
    pub fn message(&self, id: MessageId) -> Option<&ChatMessage> {
        self.messages.iter().find(|m| m.id == id)
    }

    // --- Mutations ---

    /// Submit user text.
    ///
    /// Leading/trailing whitespace is trimmed; an empty result is dropped
    /// without appending, notifying, or invoking the send callback. In
    /// automatic mode a placeholder is opened and its id returned. The user
    /// message (and placeholder) are visible and the phase updated before the
    /// send callback runs.
    pub fn submit_user_text(&mut self, text: &str) -> Option<MessageId> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            tracing::debug!("dropping empty submission");
            return None;
        }

        let message = ChatMessage::user(trimmed);
        self.messages.push(message.clone());

        let placeholder_id = match self.awaiting_mode {
            AwaitingMode::Automatic => Some(self.open_placeholder()),
            AwaitingMode::Manual => None,
        };

        self.notify(StoreEvent::UserSubmitted {
            message: message.clone(),
            placeholder_id,
        });

        if let Some(on_send) = self.on_send.as_mut() {
            on_send(message);
        }

        placeholder_id
    }

    /// Submit a quick prompt. Equivalent to submitting its message text.
    pub fn submit_quick_prompt(&mut self, prompt: &QuickPrompt) -> Option<MessageId> {
        let text = prompt.message.clone();
        self.submit_user_text(&text)
    }

    /// Open an assistant placeholder and set the phase to awaiting.
    ///
    /// Explicit call: applies in both modes, like the phase setters. If a
    /// placeholder is already pending, the new one takes over; an orphan
    /// still `Idle` or `Streaming` is marked `Cancelled`.
    pub fn begin_awaiting_assistant(&mut self) -> MessageId {
        let id = self.open_placeholder();
        self.notify(StoreEvent::PlaceholderOpened { id });
        id
    }

    /// Deliver incremental content to a placeholder.
    ///
    /// Replaces `content`, sets the status to `Streaming`, leaves the phase
    /// untouched. Unknown id: no-op.
    pub fn update_placeholder(&mut self, id: MessageId, content: impl Into<String>) {
        let Some(message) = self.messages.iter_mut().find(|m| m.id == id) else {
            tracing::debug!(%id, "update for unknown message id, ignoring");
            return;
        };
        message.content = content.into();
        message.status = MessageStatus::Streaming;
        self.notify(StoreEvent::PlaceholderUpdated { id });
    }

    /// Finalize a placeholder with its complete content.
    ///
    /// Clears the pending id if it matched; in automatic mode the phase
    /// returns to `Ready`. Unknown id: no-op.
    pub fn complete_placeholder(&mut self, id: MessageId, content: impl Into<String>) {
        let Some(message) = self.messages.iter_mut().find(|m| m.id == id) else {
            tracing::debug!(%id, "completion for unknown message id, ignoring");
            return;
        };
        message.content = content.into();
        message.status = MessageStatus::Completed;
        if self.pending_placeholder == Some(id) {
            self.pending_placeholder = None;
        }
        if self.awaiting_mode == AwaitingMode::Automatic {
            self.phase = Phase::Ready;
        }
        self.notify(StoreEvent::PlaceholderCompleted { id });
    }

    /// Set the status of a specific message.
    ///
    /// Targeted in-place update for hosts that want to mark a message failed
    /// or cancelled; no phase side effects. Unknown id: no-op.
    pub fn set_message_status(&mut self, id: MessageId, status: MessageStatus) {
        let Some(message) = self.messages.iter_mut().find(|m| m.id == id) else {
            tracing::debug!(%id, "status change for unknown message id, ignoring");
            return;
        };
        message.status = status;
        self.notify(StoreEvent::StatusChanged { id });
    }

    /// Inject a message.
    ///
    /// An assistant message arriving while a placeholder is pending resolves
    /// the placeholder in place: the pending message takes the incoming
    /// content and status, the incoming id is discarded, and no second entry
    /// appears. Anything else is appended as a new entry. In automatic mode
    /// an assistant message returns the phase to `Ready`.
    pub fn append(&mut self, message: ChatMessage) {
        let is_assistant = message.role == Role::Assistant;

        if is_assistant {
            if let Some(pending) = self.pending_placeholder {
                self.pending_placeholder = None;
                if let Some(slot) = self.messages.iter_mut().find(|m| m.id == pending) {
                    slot.content = message.content;
                    slot.status = message.status;
                    if self.awaiting_mode == AwaitingMode::Automatic {
                        self.phase = Phase::Ready;
                    }
                    self.notify(StoreEvent::PlaceholderResolved { id: pending });
                    return;
                }
                tracing::debug!(%pending, "pending placeholder not found, appending instead");
            }
        }

        self.messages.push(message.clone());
        if is_assistant && self.awaiting_mode == AwaitingMode::Automatic {
            self.phase = Phase::Ready;
        }
        self.notify(StoreEvent::MessageAppended { message });
    }

    /// Inject a batch of messages, preserving input order.
    ///
    /// Bulk path: no placeholder collapsing. In automatic mode the phase is
    /// set to `Ready` once, after all insertions, if any appended message is
    /// assistant-role. An empty batch is a no-op.
    pub fn append_many(&mut self, messages: Vec<ChatMessage>) {
        if messages.is_empty() {
            return;
        }
        let has_assistant = messages.iter().any(|m| m.role == Role::Assistant);
        let count = messages.len();
        self.messages.extend(messages);
        if has_assistant && self.awaiting_mode == AwaitingMode::Automatic {
            self.phase = Phase::Ready;
        }
        self.notify(StoreEvent::MessagesAppended { count });
    }

    /// Unconditionally set the phase to awaiting. Applies in both modes.
    pub fn set_awaiting_assistant(&mut self) {
        self.phase = Phase::AwaitingAssistant;
        self.notify(StoreEvent::PhaseChanged {
            phase: self.phase.clone(),
        });
    }

    /// Unconditionally set the phase to ready. Applies in both modes.
    pub fn set_ready(&mut self) {
        self.phase = Phase::Ready;
        self.notify(StoreEvent::PhaseChanged {
            phase: self.phase.clone(),
        });
    }

    /// Enter the error phase. Valid from any phase.
    pub fn set_error(&mut self, description: impl Into<String>) {
        self.phase = Phase::Error {
            description: description.into(),
        };
        self.notify(StoreEvent::PhaseChanged {
            phase: self.phase.clone(),
        });
    }

    /// Leave the error phase. No-op unless currently in error.
    pub fn reset_error(&mut self) {
        if !self.phase.is_error() {
            return;
        }
        self.phase = Phase::Ready;
        self.notify(StoreEvent::PhaseChanged {
            phase: self.phase.clone(),
        });
    }

    /// Append a placeholder, record it pending, set the phase to awaiting.
    /// Callers notify; this keeps submit at one notification total.
    fn open_placeholder(&mut self) -> MessageId {
        if let Some(stale) = self.pending_placeholder.take() {
            tracing::debug!(%stale, "replacing pending placeholder");
            if let Some(orphan) = self.messages.iter_mut().find(|m| m.id == stale) {
                // An orphan that already ended (failed, cancelled, completed)
                // keeps its status; only an unresolved one becomes cancelled.
                if matches!(
                    orphan.status,
                    MessageStatus::Idle | MessageStatus::Streaming
                ) {
                    orphan.status = MessageStatus::Cancelled;
                }
            }
        }
        let placeholder = ChatMessage::assistant_placeholder();
        let id = placeholder.id;
        self.messages.push(placeholder);
        self.pending_placeholder = Some(id);
        self.phase = Phase::AwaitingAssistant;
        id
    }

    fn notify(&self, event: StoreEvent) {
        // A send error just means there are no subscribers right now.
        let _ = self.event_tx.send(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use tokio::sync::broadcast::error::TryRecvError;

    fn automatic() -> ConversationStore {
        ConversationStore::new(ChatConfig::default())
    }

    fn manual() -> ConversationStore {
        ConversationStore::new(ChatConfig::default().with_awaiting_mode(AwaitingMode::Manual))
    }

    fn with_capture(store: ConversationStore) -> (ConversationStore, Arc<Mutex<Vec<ChatMessage>>>) {
        let sent = Arc::new(Mutex::new(Vec::new()));
        let captured = Arc::clone(&sent);
        let store = store.with_on_send(move |message| {
            captured.lock().unwrap().push(message);
        });
        (store, sent)
    }

    // -- Submission --

    #[test]
    fn test_empty_submission_is_ignored() {
        let (mut store, sent) = with_capture(automatic());

        for input in ["", "   ", "\n\t  \n"] {
            assert_eq!(store.submit_user_text(input), None);
        }

        assert!(store.messages().is_empty());
        assert!(store.phase().is_ready());
        assert!(sent.lock().unwrap().is_empty());
    }

    #[test]
    fn test_submit_appends_user_and_placeholder_and_calls_on_send() {
        let (mut store, sent) = with_capture(automatic());

        let placeholder_id = store.submit_user_text("Hello");

        assert_eq!(store.messages().len(), 2);

        let user = &store.messages()[0];
        assert_eq!(user.role, Role::User);
        assert_eq!(user.content, "Hello");
        assert_eq!(user.status, MessageStatus::Completed);

        let placeholder = &store.messages()[1];
        assert_eq!(placeholder.role, Role::Assistant);
        assert!(placeholder.content.is_empty());
        assert_eq!(placeholder.status, MessageStatus::Idle);
        assert_eq!(placeholder_id, Some(placeholder.id));
        assert_eq!(store.pending_placeholder_id(), Some(placeholder.id));

        assert!(store.phase().is_awaiting());

        let sent = sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].content, "Hello");
        assert_eq!(sent[0].id, user.id);
    }

    #[test]
    fn test_submit_trims_whitespace() {
        let mut store = automatic();
        store.submit_user_text("  Hello there \n");
        assert_eq!(store.messages()[0].content, "Hello there");
    }

    #[test]
    fn test_manual_submit_keeps_phase_and_skips_placeholder() {
        let (mut store, sent) = with_capture(manual());

        let placeholder_id = store.submit_user_text("Hello");

        assert_eq!(placeholder_id, None);
        assert_eq!(store.messages().len(), 1);
        assert!(store.phase().is_ready());
        assert_eq!(store.pending_placeholder_id(), None);
        assert_eq!(sent.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_quick_prompt_submits_full_message() {
        let (mut store, sent) = with_capture(automatic());
        let prompt = QuickPrompt::new("Summarize", "Summarize this conversation");

        store.submit_quick_prompt(&prompt);

        assert_eq!(store.messages()[0].content, "Summarize this conversation");
        assert_eq!(sent.lock().unwrap().len(), 1);
    }

    // -- Placeholder lifecycle --

    #[test]
    fn test_begin_awaiting_sets_phase_in_manual_mode() {
        let mut store = manual();
        let id = store.begin_awaiting_assistant();

        assert!(store.phase().is_awaiting());
        assert_eq!(store.pending_placeholder_id(), Some(id));
        assert_eq!(store.messages().len(), 1);
    }

    #[test]
    fn test_streaming_placeholder_lifecycle() {
        let mut store = automatic();
        let id = store.begin_awaiting_assistant();

        store.update_placeholder(id, "Hi");
        let message = store.message(id).unwrap();
        assert_eq!(message.content, "Hi");
        assert_eq!(message.status, MessageStatus::Streaming);
        assert!(store.phase().is_awaiting());

        store.complete_placeholder(id, "Hi there");
        let message = store.message(id).unwrap();
        assert_eq!(message.content, "Hi there");
        assert_eq!(message.status, MessageStatus::Completed);
        assert!(store.phase().is_ready());
        assert_eq!(store.pending_placeholder_id(), None);
        assert_eq!(store.messages().len(), 1);
    }

    #[test]
    fn test_complete_in_manual_mode_keeps_phase() {
        let mut store = manual();
        let id = store.begin_awaiting_assistant();

        store.complete_placeholder(id, "done");

        assert!(store.phase().is_awaiting());
        assert_eq!(store.pending_placeholder_id(), None);
    }

    #[test]
    fn test_unknown_id_lookups_are_noops() {
        let mut store = automatic();
        store.begin_awaiting_assistant();
        let unknown = MessageId::new();

        store.update_placeholder(unknown, "x");
        store.complete_placeholder(unknown, "x");
        store.set_message_status(unknown, MessageStatus::Cancelled);

        assert_eq!(store.messages().len(), 1);
        assert!(store.messages()[0].content.is_empty());
        assert!(store.phase().is_awaiting());
        assert!(store.pending_placeholder_id().is_some());
    }

    #[test]
    fn test_reopen_marks_orphan_cancelled() {
        let mut store = automatic();
        let first = store.begin_awaiting_assistant();
        let second = store.begin_awaiting_assistant();

        assert_ne!(first, second);
        assert_eq!(store.messages().len(), 2);
        assert_eq!(store.message(first).unwrap().status, MessageStatus::Cancelled);
        assert_eq!(store.message(second).unwrap().status, MessageStatus::Idle);
        assert_eq!(store.pending_placeholder_id(), Some(second));
    }

    #[test]
    fn test_reopen_preserves_failed_status() {
        let mut store = automatic();
        let first = store.begin_awaiting_assistant();
        store.set_message_status(first, MessageStatus::Failed { reason: "boom".into() });

        // A failed response stays failed when the next placeholder opens.
        let second = store.begin_awaiting_assistant();

        assert_eq!(
            store.message(first).unwrap().status,
            MessageStatus::Failed { reason: "boom".into() }
        );
        assert_eq!(store.pending_placeholder_id(), Some(second));
    }

    #[test]
    fn test_set_message_status_marks_failed() {
        let mut store = automatic();
        let id = store.begin_awaiting_assistant();

        store.set_message_status(id, MessageStatus::Failed { reason: "timeout".into() });

        assert_eq!(
            store.message(id).unwrap().status,
            MessageStatus::Failed { reason: "timeout".into() }
        );
        // No phase side effects.
        assert!(store.phase().is_awaiting());
    }

    // -- append --

    #[test]
    fn test_append_resolves_pending_placeholder() {
        let mut store = automatic();
        let id = store.begin_awaiting_assistant();

        store.append(ChatMessage::assistant("Hi there"));

        assert_eq!(store.messages().len(), 1);
        let resolved = &store.messages()[0];
        assert_eq!(resolved.id, id);
        assert_eq!(resolved.content, "Hi there");
        assert_eq!(resolved.status, MessageStatus::Completed);
        assert_eq!(store.pending_placeholder_id(), None);
        assert!(store.phase().is_ready());
    }

    #[test]
    fn test_cleared_pending_is_never_reused() {
        let mut store = automatic();
        store.begin_awaiting_assistant();
        store.append(ChatMessage::assistant("first"));

        // A later assistant append lands as a new entry.
        store.append(ChatMessage::assistant("second"));

        assert_eq!(store.messages().len(), 2);
        assert_eq!(store.messages()[1].content, "second");
    }

    #[test]
    fn test_append_assistant_without_pending_sets_ready() {
        let mut store = automatic();
        store.set_awaiting_assistant();

        store.append(ChatMessage::assistant("Hi"));

        assert_eq!(store.messages().len(), 1);
        assert!(store.phase().is_ready());
    }

    #[test]
    fn test_append_user_does_not_change_phase() {
        let mut store = automatic();
        store.begin_awaiting_assistant();

        store.append(ChatMessage::user("Hello"));

        assert!(store.phase().is_awaiting());
        assert_eq!(store.messages().len(), 2);
    }

    #[test]
    fn test_append_assistant_in_manual_mode_keeps_phase() {
        let mut store = manual();
        store.set_awaiting_assistant();

        store.append(ChatMessage::assistant("Hi"));

        assert!(store.phase().is_awaiting());
    }

    // -- append_many --

    #[test]
    fn test_append_many_preserves_order_across_batches() {
        let mut store = manual();

        store.append_many(vec![ChatMessage::user("A"), ChatMessage::assistant("B")]);
        store.append_many(vec![ChatMessage::system("C")]);

        let contents: Vec<_> = store.messages().iter().map(|m| m.content.as_str()).collect();
        assert_eq!(contents, ["A", "B", "C"]);
    }

    #[test]
    fn test_append_many_does_not_collapse_placeholder() {
        let mut store = automatic();
        let pending = store.begin_awaiting_assistant();

        store.append_many(vec![ChatMessage::assistant("bulk")]);

        assert_eq!(store.messages().len(), 2);
        assert_eq!(store.pending_placeholder_id(), Some(pending));
        assert!(store.phase().is_ready());
    }

    #[test]
    fn test_append_many_without_assistant_keeps_phase() {
        let mut store = manual();
        store.append_many(vec![ChatMessage::user("A"), ChatMessage::user("B")]);
        assert!(store.phase().is_ready());

        let mut store = automatic();
        store.set_awaiting_assistant();
        store.append_many(vec![ChatMessage::user("A"), ChatMessage::user("B")]);
        assert!(store.phase().is_awaiting());
    }

    // -- Phase setters --

    #[test]
    fn test_error_round_trip() {
        let mut store = automatic();

        store.set_error("Network error");
        assert_eq!(
            *store.phase(),
            Phase::Error { description: "Network error".into() }
        );

        store.reset_error();
        assert!(store.phase().is_ready());
    }

    #[test]
    fn test_reset_error_outside_error_is_noop() {
        let mut store = automatic();
        store.set_awaiting_assistant();

        store.reset_error();

        assert!(store.phase().is_awaiting());
    }

    #[test]
    fn test_set_error_from_any_phase() {
        let mut store = automatic();
        store.submit_user_text("Hello");
        assert!(store.phase().is_awaiting());

        store.set_error("engine died");
        assert!(store.phase().is_error());

        // The pending placeholder message is untouched.
        let pending = store.pending_placeholder_id().unwrap();
        assert_eq!(store.message(pending).unwrap().status, MessageStatus::Idle);
    }

    // -- Notifications --

    #[test]
    fn test_one_notification_per_mutation_in_order() {
        let mut store = automatic();
        let mut rx = store.subscribe();

        let id = store.submit_user_text("Hello").unwrap();
        store.update_placeholder(id, "Hi");
        store.complete_placeholder(id, "Hi there");

        match rx.try_recv().unwrap() {
            StoreEvent::UserSubmitted { message, placeholder_id } => {
                assert_eq!(message.content, "Hello");
                assert_eq!(placeholder_id, Some(id));
            }
            other => panic!("unexpected event: {other:?}"),
        }
        assert!(matches!(
            rx.try_recv().unwrap(),
            StoreEvent::PlaceholderUpdated { id: updated } if updated == id
        ));
        assert!(matches!(
            rx.try_recv().unwrap(),
            StoreEvent::PlaceholderCompleted { id: completed } if completed == id
        ));
        assert!(matches!(rx.try_recv(), Err(TryRecvError::Empty)));
    }

    #[test]
    fn test_noops_send_no_notification() {
        let mut store = automatic();
        let mut rx = store.subscribe();

        store.submit_user_text("   ");
        store.update_placeholder(MessageId::new(), "x");
        store.complete_placeholder(MessageId::new(), "x");
        store.append_many(vec![]);
        store.reset_error();

        assert!(matches!(rx.try_recv(), Err(TryRecvError::Empty)));
    }

    #[test]
    fn test_resolution_and_bulk_events() {
        let mut store = automatic();
        let mut rx = store.subscribe();

        let id = store.begin_awaiting_assistant();
        store.append(ChatMessage::assistant("Hi"));
        store.append_many(vec![ChatMessage::user("A"), ChatMessage::user("B")]);

        assert!(matches!(
            rx.try_recv().unwrap(),
            StoreEvent::PlaceholderOpened { id: opened } if opened == id
        ));
        assert!(matches!(
            rx.try_recv().unwrap(),
            StoreEvent::PlaceholderResolved { id: resolved } if resolved == id
        ));
        assert!(matches!(
            rx.try_recv().unwrap(),
            StoreEvent::MessagesAppended { count: 2 }
        ));
    }

    #[test]
    fn test_store_event_serde_tags() {
        let event = StoreEvent::PhaseChanged {
            phase: Phase::Error { description: "boom".into() },
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"type\":\"phase_changed\""));
        assert!(json.contains("\"description\":\"boom\""));
    }

    // -- Construction --

    #[test]
    fn test_initial_messages_and_prompts_from_config() {
        let config = ChatConfig::default()
            .with_initial_messages(vec![ChatMessage::assistant("Hi! Ask me anything.")])
            .with_quick_prompts(vec![QuickPrompt::new("Examples", "Give examples")])
            .with_placeholder("Ask away…");
        let store = ConversationStore::new(config);

        assert_eq!(store.messages().len(), 1);
        assert_eq!(store.quick_prompts().len(), 1);
        assert_eq!(store.placeholder_text(), "Ask away…");
        assert!(store.phase().is_ready());
    }
}
