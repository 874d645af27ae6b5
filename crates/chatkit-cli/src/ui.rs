//! Terminal host loop: render adapter + engine wiring
//!
//! The store lives on this task. The engine runs in its own task and its
//! events cross back through an mpsc channel before any store call, which is
//! the marshaling contract the store requires.

use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use crossterm::{
    event::{DisableBracketedPaste, EnableBracketedPaste, Event, EventStream, MouseEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use chatkit_core::{
    ChatConfig, ChatEngine, ChatEvent, ChatMessage, ConversationStore, EngineDriver, Phase,
    pump_events,
};
use chatkit_tui::{
    ChatBehavior, ChatLayout, InputBox, MessageList, QuickPromptBar, Theme, TypingIndicator,
    input::{Action, event_to_action},
};

/// Render-side state, separate from the store it draws.
struct ChatUi {
    theme: Theme,
    layout: ChatLayout,
    behavior: ChatBehavior,
    input: InputBox,
    scroll: usize,
    stick_to_bottom: bool,
    selected_prompt: Option<usize>,
    typing_since: Instant,
}

impl ChatUi {
    fn new(theme: Theme, layout: ChatLayout, behavior: ChatBehavior, placeholder: &str) -> Self {
        let mut input = InputBox::new().with_placeholder(placeholder);
        input.set_focused(true);
        Self {
            theme,
            layout,
            behavior,
            input,
            scroll: 0,
            stick_to_bottom: true,
            selected_prompt: None,
            typing_since: Instant::now(),
        }
    }

    fn render(&mut self, frame: &mut Frame, store: &ConversationStore) {
        let show_prompts = self.behavior.show_quick_prompts && !store.quick_prompts().is_empty();
        let show_typing = self.behavior.show_typing_indicator && store.phase().is_awaiting();

        // Hidden rows collapse to zero height, keeping the indices stable.
        let areas = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(1),
                Constraint::Length(if show_typing { 1 } else { 0 }),
                Constraint::Length(if show_prompts { 1 } else { 0 }),
                Constraint::Length(3),
                Constraint::Length(1),
            ])
            .split(frame.area());

        self.render_messages(frame, areas[0], store);
        if show_typing && areas[1].height > 0 {
            frame.render_widget(
                TypingIndicator::new(&self.theme)
                    .with_start_time(self.typing_since)
                    .with_label("assistant is typing"),
                areas[1],
            );
        }
        if show_prompts && areas[2].height > 0 {
            frame.render_widget(
                QuickPromptBar::new(store.quick_prompts(), &self.theme)
                    .selected(self.selected_prompt),
                areas[2],
            );
        }
        self.input.render(areas[3], frame.buffer_mut(), &self.theme);
        self.render_status(frame, areas[4], store);
    }

    fn render_messages(&mut self, frame: &mut Frame, area: Rect, store: &ConversationStore) {
        let list = MessageList::new(store.messages(), &self.theme).layout(self.layout);
        let total = list.line_count(area.width);
        // Clamp against the padded viewport, not the raw area height.
        let visible = self.layout.viewport_height(area.height) as usize;
        let max_scroll = total.saturating_sub(visible);
        if self.stick_to_bottom {
            self.scroll = max_scroll;
        } else {
            self.scroll = self.scroll.min(max_scroll);
        }
        frame.render_widget(list.scroll(self.scroll), area);
    }

    fn render_status(&self, frame: &mut Frame, area: Rect, store: &ConversationStore) {
        let line = match store.phase() {
            Phase::Ready => Line::from(Span::styled(
                "Ready │ Enter: send │ Tab: prompts │ Ctrl+C: quit",
                self.theme.dim_style(),
            )),
            Phase::AwaitingAssistant => Line::from(Span::styled(
                "Awaiting assistant │ Esc: cancel",
                self.theme.accent_style(),
            )),
            Phase::Error { description } => Line::from(Span::styled(
                format!("Error: {description} │ Esc: dismiss"),
                self.theme.error_style(),
            )),
        };
        frame.render_widget(Paragraph::new(line), area);
    }

    fn scroll_up(&mut self, lines: usize) {
        self.scroll = self.scroll.saturating_sub(lines);
        self.stick_to_bottom = false;
    }

    fn scroll_down(&mut self, lines: usize) {
        self.scroll = self.scroll.saturating_add(lines);
    }

    fn cycle_prompt(&mut self, count: usize, backwards: bool) {
        if count == 0 {
            return;
        }
        self.selected_prompt = Some(match (self.selected_prompt, backwards) {
            (None, false) => 0,
            (None, true) => count - 1,
            (Some(i), false) => (i + 1) % count,
            (Some(i), true) => (i + count - 1) % count,
        });
    }
}

/// Run the chat host until the user quits.
pub async fn run(
    config: ChatConfig,
    engine: Arc<dyn ChatEngine>,
    theme: Theme,
    layout: ChatLayout,
    behavior: ChatBehavior,
) -> Result<()> {
    // Submitted user messages, enqueued by the store's on_send callback.
    let (send_tx, mut send_rx) = mpsc::channel::<ChatMessage>(32);
    // Engine events, marshaled onto this task before any store call.
    let (event_tx, mut event_rx) = mpsc::channel::<ChatEvent>(64);

    let placeholder = config.placeholder.clone();
    let mut store = ConversationStore::new(config).with_on_send(move |message| {
        if send_tx.try_send(message).is_err() {
            tracing::warn!("send queue full, dropping submission");
        }
    });
    let mut store_events = store.subscribe();

    let mut ui = ChatUi::new(theme, layout, behavior, &placeholder);
    let mut driver: Option<EngineDriver> = None;
    let mut cancel: Option<CancellationToken> = None;

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut events = EventStream::new();
    let mut tick = tokio::time::interval(std::time::Duration::from_millis(100));

    let result = loop {
        terminal.draw(|frame| ui.render(frame, &store))?;
        let area_width = terminal.size()?.width;

        tokio::select! {
            biased;

            // Store notifications: follow new content when auto-scroll is on.
            notice = store_events.recv() => {
                if let Ok(event) = notice {
                    tracing::debug!(?event, "store changed");
                    if ui.behavior.auto_scroll {
                        ui.stick_to_bottom = true;
                    }
                }
            }

            // A user message was submitted: start a response.
            Some(message) = send_rx.recv() => {
                // One in-flight response at a time; abandon the old one.
                if let Some(token) = cancel.take() {
                    token.cancel();
                }
                driver = Some(match store.pending_placeholder_id() {
                    Some(id) => EngineDriver::for_placeholder(id),
                    None => EngineDriver::new(),
                });
                ui.typing_since = Instant::now();

                let token = CancellationToken::new();
                cancel = Some(token.clone());
                let engine = Arc::clone(&engine);
                let tx = event_tx.clone();
                tokio::spawn(async move {
                    match engine.send(&message.content).await {
                        Ok(stream) => {
                            tokio::select! {
                                _ = pump_events(stream, tx.clone()) => {}
                                _ = token.cancelled() => {
                                    let _ = tx.send(ChatEvent::Cancelled).await;
                                }
                            }
                        }
                        Err(e) => {
                            let _ = tx.send(ChatEvent::Failed { message: e.to_string() }).await;
                        }
                    }
                });
            }

            // Engine events, now on the store's thread.
            Some(event) = event_rx.recv() => {
                if let Some(active) = driver.as_mut() {
                    active.apply(&mut store, event);
                    if active.is_finished() {
                        driver = None;
                        cancel = None;
                    }
                } else {
                    tracing::debug!(?event, "engine event with no active response");
                }
            }

            // Terminal input.
            event = events.next() => {
                match event {
                    Some(Ok(Event::Mouse(mouse))) => match mouse.kind {
                        MouseEventKind::ScrollUp => ui.scroll_up(3),
                        MouseEventKind::ScrollDown => ui.scroll_down(3),
                        _ => {}
                    },
                    Some(Ok(evt)) => {
                        if let Some(action) = event_to_action(evt) {
                            if !handle_action(action, &mut ui, &mut store, &mut cancel, area_width) {
                                break Ok(());
                            }
                        }
                    }
                    Some(Err(e)) => break Err(anyhow::anyhow!("event error: {e}")),
                    None => break Ok(()),
                }
            }

            // Animation tick.
            _ = tick.tick() => {}
        }
    };

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableBracketedPaste
    )?;
    terminal.show_cursor()?;

    result
}

/// Apply one input action. Returns false to quit.
fn handle_action(
    action: Action,
    ui: &mut ChatUi,
    store: &mut ConversationStore,
    cancel: &mut Option<CancellationToken>,
    area_width: u16,
) -> bool {
    match action {
        Action::Interrupt | Action::Quit => return false,
        Action::Submit => {
            if let Some(i) = ui.selected_prompt.take() {
                if let Some(prompt) = store.quick_prompts().get(i).cloned() {
                    store.submit_quick_prompt(&prompt);
                }
            } else {
                let text = ui.input.take();
                store.submit_user_text(&text);
            }
        }
        Action::Escape => {
            if store.phase().is_error() {
                store.reset_error();
            } else if let Some(token) = cancel.take() {
                token.cancel();
            } else {
                ui.selected_prompt = None;
            }
        }
        Action::Tab => {
            ui.cycle_prompt(store.quick_prompts().len(), false);
        }
        Action::BackTab => {
            ui.cycle_prompt(store.quick_prompts().len(), true);
        }
        Action::Up => ui.scroll_up(1),
        Action::Down => ui.scroll_down(1),
        Action::PageUp => ui.scroll_up(10),
        Action::PageDown => ui.scroll_down(10),
        other => {
            ui.input.handle_action(&other, area_width);
        }
    }
    true
}
