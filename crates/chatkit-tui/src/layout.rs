//! Layout and behavior value objects
//!
//! Pure configuration consumed by the widgets and the host loop; no
//! behavior of their own.

/// Spacing and sizing for the message list.
#[derive(Debug, Clone, Copy)]
pub struct ChatLayout {
    /// Blank lines between messages
    pub message_spacing: u16,
    /// Columns of padding on each side of the list
    pub horizontal_padding: u16,
    /// Rows of padding above and below the list
    pub vertical_padding: u16,
    /// Fraction of the available width message content may occupy (0.0..=1.0)
    pub max_content_ratio: f32,
}

impl ChatLayout {
    /// Roomy spacing for wide terminals.
    pub fn default_preset() -> Self {
        Self {
            message_spacing: 1,
            horizontal_padding: 2,
            vertical_padding: 1,
            max_content_ratio: 0.78,
        }
    }

    /// Tighter spacing for small terminals.
    pub fn compact() -> Self {
        Self {
            message_spacing: 0,
            horizontal_padding: 1,
            vertical_padding: 0,
            max_content_ratio: 0.85,
        }
    }

    /// Usable content width for a given area width.
    pub fn content_width(&self, area_width: u16) -> u16 {
        let padded = area_width.saturating_sub(self.horizontal_padding * 2);
        let ratio = self.max_content_ratio.clamp(0.0, 1.0);
        ((padded as f32) * ratio).floor().max(1.0) as u16
    }

    /// Rows of message content that fit in a given area height.
    ///
    /// Hosts must clamp their scroll offset against this, not the raw area
    /// height, or the bottom rows disappear behind the vertical padding.
    pub fn viewport_height(&self, area_height: u16) -> u16 {
        area_height.saturating_sub(self.vertical_padding * 2)
    }
}

impl Default for ChatLayout {
    fn default() -> Self {
        Self::default_preset()
    }
}

/// Host-facing toggles for the chat loop.
#[derive(Debug, Clone, Copy)]
pub struct ChatBehavior {
    /// Keep the list scrolled to the latest message on append
    pub auto_scroll: bool,
    /// Show the animated typing indicator while awaiting
    pub show_typing_indicator: bool,
    /// Show the quick-prompt bar when prompts are configured
    pub show_quick_prompts: bool,
}

impl Default for ChatBehavior {
    fn default() -> Self {
        Self {
            auto_scroll: true,
            show_typing_indicator: true,
            show_quick_prompts: true,
        }
    }
}
