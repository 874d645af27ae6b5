//! Message list widget
//!
//! Renders the store's message slice as role-labelled, wrapped text with
//! streaming/failure markers. Scrolling is a line offset owned by the host.

use chatkit_core::{ChatMessage, MessageStatus, Role};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use crate::layout::ChatLayout;
use crate::theme::Theme;

/// Widget for displaying the conversation
pub struct MessageList<'a> {
    messages: &'a [ChatMessage],
    theme: &'a Theme,
    layout: ChatLayout,
    scroll: usize,
}

impl<'a> MessageList<'a> {
    /// Create a new message list
    pub fn new(messages: &'a [ChatMessage], theme: &'a Theme) -> Self {
        Self {
            messages,
            theme,
            layout: ChatLayout::default(),
            scroll: 0,
        }
    }

    /// Set the layout
    pub fn layout(mut self, layout: ChatLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Set scroll offset (lines from the top)
    pub fn scroll(mut self, scroll: usize) -> Self {
        self.scroll = scroll;
        self
    }

    /// Total rendered height in lines for a given area width.
    ///
    /// Hosts use this to clamp their scroll offset and to stick to the
    /// bottom when auto-scroll is on.
    pub fn line_count(&self, area_width: u16) -> usize {
        let width = self.layout.content_width(area_width) as usize;
        self.build_lines(width).len()
    }

    fn build_lines(&self, width: usize) -> Vec<Line<'static>> {
        let mut lines = Vec::new();
        for (i, msg) in self.messages.iter().enumerate() {
            if i > 0 {
                for _ in 0..self.layout.message_spacing {
                    lines.push(Line::default());
                }
            }
            lines.extend(self.message_lines(msg, width));
        }
        lines
    }

    fn message_lines(&self, msg: &ChatMessage, width: usize) -> Vec<Line<'static>> {
        let mut lines = Vec::new();

        let (label, style, prefix) = match msg.role {
            Role::User => ("You", self.theme.user_style(), "▶ "),
            Role::Assistant => ("Assistant", self.theme.assistant_style(), "◀ "),
            Role::System => ("System", self.theme.dim_style(), "● "),
        };
        lines.push(Line::from(Span::styled(format!("{prefix}{label}"), style)));

        let mut content = msg.content.clone();
        if msg.status == MessageStatus::Streaming {
            // Trailing cursor while tokens are coming in.
            content.push('▌');
        }

        if content.is_empty() && msg.status == MessageStatus::Idle {
            lines.push(Line::from(Span::styled(
                "…".to_string(),
                self.theme.dim_style(),
            )));
        } else {
            for piece in textwrap::wrap(&content, width.max(1)) {
                lines.push(Line::from(Span::styled(
                    piece.into_owned(),
                    self.theme.base_style(),
                )));
            }
        }

        match &msg.status {
            MessageStatus::Failed { reason } => {
                lines.push(Line::from(Span::styled(
                    format!("✗ {reason}"),
                    self.theme.error_style(),
                )));
            }
            MessageStatus::Cancelled => {
                lines.push(Line::from(Span::styled(
                    "(cancelled)".to_string(),
                    self.theme.dim_style(),
                )));
            }
            _ => {}
        }

        lines
    }
}

impl Widget for MessageList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let width = self.layout.content_width(area.width) as usize;
        let lines = self.build_lines(width);

        let x = area.x + self.layout.horizontal_padding.min(area.width - 1);
        let y = area.y + self.layout.vertical_padding.min(area.height - 1);
        let visible = self.layout.viewport_height(area.height) as usize;
        let max_width = area.width.saturating_sub(self.layout.horizontal_padding * 2);

        for (row, line) in lines.iter().skip(self.scroll).take(visible).enumerate() {
            buf.set_line(x, y + row as u16, line, max_width);
        }
    }
}
