//! Animated typing indicator widget

use ratatui::{buffer::Buffer, layout::Rect, text::{Line, Span}, widgets::Widget};
use std::time::{Duration, Instant};

use crate::theme::Theme;

const DOT_COUNT: usize = 3;
const FRAME_DURATION: Duration = Duration::from_millis(300);

/// Three dots with one highlighted in turn, shown while awaiting the
/// assistant.
pub struct TypingIndicator<'a> {
    label: &'a str,
    theme: &'a Theme,
    start_time: Instant,
}

impl<'a> TypingIndicator<'a> {
    /// Create a new typing indicator
    pub fn new(theme: &'a Theme) -> Self {
        Self {
            label: "",
            theme,
            start_time: Instant::now(),
        }
    }

    /// Set a label rendered after the dots
    pub fn with_label(mut self, label: &'a str) -> Self {
        self.label = label;
        self
    }

    /// Set a specific start time (for consistent animation across frames)
    pub fn with_start_time(mut self, start: Instant) -> Self {
        self.start_time = start;
        self
    }

    /// Index of the highlighted dot based on elapsed time
    fn active_dot(&self) -> usize {
        let elapsed = self.start_time.elapsed().as_millis();
        (elapsed / FRAME_DURATION.as_millis()) as usize % DOT_COUNT
    }
}

impl Widget for TypingIndicator<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < (DOT_COUNT * 2) as u16 || area.height == 0 {
            return;
        }

        let active = self.active_dot();
        let mut spans = Vec::with_capacity(DOT_COUNT * 2 + 1);
        for i in 0..DOT_COUNT {
            let style = if i == active {
                self.theme.accent_style()
            } else {
                self.theme.dim_style()
            };
            spans.push(Span::styled("●", style));
            spans.push(Span::raw(" "));
        }
        if !self.label.is_empty() {
            spans.push(Span::styled(self.label.to_string(), self.theme.dim_style()));
        }

        buf.set_line(area.x, area.y, &Line::from(spans), area.width);
    }
}
