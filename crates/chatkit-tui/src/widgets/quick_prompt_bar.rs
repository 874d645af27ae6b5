//! Quick prompt bar widget

use chatkit_core::QuickPrompt;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};
use unicode_width::UnicodeWidthStr;

use crate::theme::Theme;

/// One-row bar of selectable prompt capsules.
///
/// Shows each prompt's short label when present. Selection is host state
/// (cycled with Tab); submitting a selected capsule is equivalent to
/// submitting its full message text.
pub struct QuickPromptBar<'a> {
    prompts: &'a [QuickPrompt],
    theme: &'a Theme,
    selected: Option<usize>,
}

impl<'a> QuickPromptBar<'a> {
    /// Create a new quick prompt bar
    pub fn new(prompts: &'a [QuickPrompt], theme: &'a Theme) -> Self {
        Self {
            prompts,
            theme,
            selected: None,
        }
    }

    /// Highlight the prompt at `index`
    pub fn selected(mut self, index: Option<usize>) -> Self {
        self.selected = index;
        self
    }
}

impl Widget for QuickPromptBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || self.prompts.is_empty() {
            return;
        }

        let mut spans = Vec::with_capacity(self.prompts.len() * 2);
        let mut used = 0usize;
        for (i, prompt) in self.prompts.iter().enumerate() {
            let capsule = format!("[ {} ]", prompt.label());
            let capsule_width = capsule.width() + 1;
            if used + capsule_width > area.width as usize {
                break;
            }
            used += capsule_width;

            let style = if self.selected == Some(i) {
                self.theme.selection_style()
            } else {
                self.theme.dim_style()
            };
            spans.push(Span::styled(capsule, style));
            spans.push(Span::raw(" "));
        }

        buf.set_line(area.x, area.y, &Line::from(spans), area.width);
    }
}
