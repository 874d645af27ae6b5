//! Composer input widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Paragraph, Widget},
};
use unicode_width::UnicodeWidthChar;

use crate::input::Action;
use crate::theme::Theme;

/// Single-line composer with cursor, horizontal scroll, and placeholder
/// hint text (from `ChatConfig::placeholder`).
#[derive(Debug, Default)]
pub struct InputBox {
    /// Current input text
    content: String,
    /// Cursor position in characters
    cursor: usize,
    /// Horizontal scroll offset in display columns
    scroll: usize,
    /// Hint text shown while empty
    placeholder: String,
    /// Whether the composer has focus
    focused: bool,
}

impl InputBox {
    /// Create a new input box
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the hint text shown while empty
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Set focus state
    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    /// Get the current content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Clear the content
    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
        self.scroll = 0;
    }

    /// Take the content, leaving the box empty
    pub fn take(&mut self) -> String {
        let text = std::mem::take(&mut self.content);
        self.cursor = 0;
        self.scroll = 0;
        text
    }

    /// Handle an editing action. Returns true if the action was consumed.
    pub fn handle_action(&mut self, action: &Action, width: u16) -> bool {
        let consumed = match action {
            Action::Char(c) => {
                self.insert_char(*c);
                true
            }
            Action::Backspace => {
                if self.cursor == 0 {
                    return false;
                }
                self.cursor -= 1;
                self.remove_char_at_cursor();
                true
            }
            Action::Delete => {
                if self.cursor >= self.char_count() {
                    return false;
                }
                self.remove_char_at_cursor();
                true
            }
            Action::Left => {
                if self.cursor == 0 {
                    return false;
                }
                self.cursor -= 1;
                true
            }
            Action::Right => {
                if self.cursor >= self.char_count() {
                    return false;
                }
                self.cursor += 1;
                true
            }
            Action::Home => {
                self.cursor = 0;
                true
            }
            Action::End => {
                self.cursor = self.char_count();
                true
            }
            Action::ClearLine => {
                self.clear();
                true
            }
            Action::DeleteWord => {
                self.delete_word_before_cursor();
                true
            }
            Action::Paste(text) => {
                // Newlines collapse to single spaces in a one-line composer.
                for c in text.chars() {
                    if c == '\n' || c == '\r' {
                        if !self.content.ends_with(' ') && self.cursor > 0 {
                            self.insert_char(' ');
                        }
                    } else {
                        self.insert_char(c);
                    }
                }
                true
            }
            _ => false,
        };

        if consumed {
            self.update_scroll(width as usize);
        }
        consumed
    }

    fn char_count(&self) -> usize {
        self.content.chars().count()
    }

    /// Byte offset of the cursor
    fn cursor_byte_offset(&self) -> usize {
        self.content
            .char_indices()
            .nth(self.cursor)
            .map(|(i, _)| i)
            .unwrap_or(self.content.len())
    }

    /// Display columns before the cursor
    fn cursor_display_width(&self) -> usize {
        self.content
            .chars()
            .take(self.cursor)
            .map(|c| c.width().unwrap_or(0))
            .sum()
    }

    fn insert_char(&mut self, c: char) {
        let offset = self.cursor_byte_offset();
        self.content.insert(offset, c);
        self.cursor += 1;
    }

    /// Remove the character at the cursor position
    fn remove_char_at_cursor(&mut self) {
        let start = self.cursor_byte_offset();
        let end = self.content[start..]
            .char_indices()
            .nth(1)
            .map(|(i, _)| start + i)
            .unwrap_or(self.content.len());
        self.content.drain(start..end);
    }

    fn delete_word_before_cursor(&mut self) {
        let chars: Vec<char> = self.content.chars().collect();
        let mut target = self.cursor;
        while target > 0 && chars.get(target - 1) == Some(&' ') {
            target -= 1;
        }
        while target > 0 && chars.get(target - 1) != Some(&' ') {
            target -= 1;
        }

        let start = self
            .content
            .char_indices()
            .nth(target)
            .map(|(i, _)| i)
            .unwrap_or(self.content.len());
        let end = self.cursor_byte_offset();
        self.content.drain(start..end);
        self.cursor = target;
    }

    fn update_scroll(&mut self, width: usize) {
        let visible = width.saturating_sub(4); // borders + padding
        let cursor = self.cursor_display_width();
        if cursor < self.scroll {
            self.scroll = cursor;
        } else if visible > 0 && cursor >= self.scroll + visible {
            self.scroll = cursor - visible + 1;
        }
    }

    /// Characters visible at the current scroll, fitted to `width` columns
    fn visible_content(&self, width: usize) -> String {
        let mut skipped = 0;
        let mut visible = String::new();
        let mut used = 0;
        for c in self.content.chars() {
            let w = c.width().unwrap_or(0);
            if skipped < self.scroll {
                skipped += w;
                continue;
            }
            if used + w > width {
                break;
            }
            visible.push(c);
            used += w;
        }
        visible
    }

    /// Render the input box
    pub fn render(&self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(if self.focused {
                theme.accent_style()
            } else {
                theme.border_style()
            });
        let inner = block.inner(area);
        block.render(area, buf);

        let (text, style) = if self.content.is_empty() {
            (self.placeholder.clone(), theme.dim_style())
        } else {
            (self.visible_content(inner.width as usize), theme.base_style())
        };
        Paragraph::new(text).style(style).render(inner, buf);

        if self.focused && inner.width > 0 {
            let cursor_x = self.cursor_display_width().saturating_sub(self.scroll);
            if cursor_x < inner.width as usize {
                if let Some(cell) = buf.cell_mut((inner.x + cursor_x as u16, inner.y)) {
                    cell.set_style(Style::default().bg(theme.accent));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(input: &mut InputBox, actions: &[Action]) {
        for action in actions {
            input.handle_action(action, 80);
        }
    }

    fn type_str(input: &mut InputBox, text: &str) {
        for c in text.chars() {
            input.handle_action(&Action::Char(c), 80);
        }
    }

    #[test]
    fn test_typing_and_take() {
        let mut input = InputBox::new();
        type_str(&mut input, "hello");
        assert_eq!(input.content(), "hello");
        assert_eq!(input.take(), "hello");
        assert_eq!(input.content(), "");
    }

    #[test]
    fn test_backspace_mid_string_with_multibyte() {
        let mut input = InputBox::new();
        type_str(&mut input, "héllo");
        apply(&mut input, &[Action::Left, Action::Left, Action::Backspace]);
        assert_eq!(input.content(), "hélo");
    }

    #[test]
    fn test_insert_at_cursor() {
        let mut input = InputBox::new();
        type_str(&mut input, "ac");
        apply(&mut input, &[Action::Left, Action::Char('b')]);
        assert_eq!(input.content(), "abc");
    }

    #[test]
    fn test_delete_word() {
        let mut input = InputBox::new();
        type_str(&mut input, "one two  ");
        apply(&mut input, &[Action::DeleteWord]);
        assert_eq!(input.content(), "one ");
        apply(&mut input, &[Action::DeleteWord]);
        assert_eq!(input.content(), "");
    }

    #[test]
    fn test_paste_collapses_newlines() {
        let mut input = InputBox::new();
        type_str(&mut input, "a");
        apply(&mut input, &[Action::Paste("b\r\nc".into())]);
        assert_eq!(input.content(), "ab c");
    }

    #[test]
    fn test_home_end_bounds() {
        let mut input = InputBox::new();
        type_str(&mut input, "abc");
        apply(&mut input, &[Action::Home]);
        assert!(!input.handle_action(&Action::Left, 80));
        apply(&mut input, &[Action::End]);
        assert!(!input.handle_action(&Action::Right, 80));
    }

    #[test]
    fn test_unrelated_actions_not_consumed() {
        let mut input = InputBox::new();
        assert!(!input.handle_action(&Action::Tab, 80));
        assert!(!input.handle_action(&Action::Submit, 80));
    }
}
