//! Text input widget for rendering TextInput instances.
//!
//! This widget provides a centralized way to render form fields with:
//! - Consistent styling across the screens
//! - Cursor positioning when focused
//! - Placeholder text support
//! - Password masking with an optional visibility hint
//! - Inline validation error below the box

use crate::styles::theme;
use crate::utils::text_input::TextInput;
use ratatui::layout::{Constraint, Layout};
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Rows a field occupies: three for the bordered box, one for the error line.
pub const FIELD_HEIGHT: u16 = 4;

/// A widget for rendering a labelled [`TextInput`] with its error line.
///
/// # Example
/// ```
/// use foodsplit::widgets::TextInputWidget;
/// use foodsplit::utils::TextInput;
///
/// let input = TextInput::with_text("hello");
/// let widget = TextInputWidget::new(&input)
///     .title("Email")
///     .placeholder("you@example.com")
///     .focused(true);
/// // frame.render_text_input_widget(widget, area);
/// ```
pub struct TextInputWidget<'a> {
    input: &'a TextInput,
    title: Option<&'a str>,
    placeholder: Option<&'a str>,
    focused: bool,
    masked: bool,
    /// Shown at the right edge of a secret field ("Show" / "Hide")
    reveal_hint: Option<&'a str>,
    error: Option<&'a str>,
}

impl<'a> TextInputWidget<'a> {
    pub fn new(input: &'a TextInput) -> Self {
        Self {
            input,
            title: None,
            placeholder: None,
            focused: false,
            masked: false,
            reveal_hint: None,
            error: None,
        }
    }

    pub fn title(mut self, title: &'a str) -> Self {
        self.title = Some(title);
        self
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Set whether to mask the text (for passwords).
    pub fn masked(mut self, masked: bool) -> Self {
        self.masked = masked;
        self
    }

    pub fn reveal_hint(mut self, hint: &'a str) -> Self {
        self.reveal_hint = Some(hint);
        self
    }

    /// Validation message to show under the field.
    pub fn error(mut self, error: Option<&'a str>) -> Self {
        self.error = error;
        self
    }

    /// Get the display text (actual text, masked text, or placeholder).
    fn display_text(&self) -> String {
        let text = self.input.text();

        if text.is_empty() {
            self.placeholder.unwrap_or("").to_string()
        } else if self.masked {
            "•".repeat(text.chars().count())
        } else {
            text.to_string()
        }
    }

    fn text_style(&self) -> Style {
        let t = theme();
        if self.input.is_empty() {
            t.placeholder_style()
        } else {
            t.text_style()
        }
    }

    fn border_style(&self) -> Style {
        let t = theme();
        if self.error.is_some() {
            t.border_error_style()
        } else if self.focused {
            t.border_focused_style()
        } else {
            t.border_style()
        }
    }

    fn create_block(&self) -> Block<'a> {
        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.border_style());

        if let Some(title) = self.title {
            block = block.title(format!(" {} ", title));
        }
        if let Some(hint) = self.reveal_hint {
            block = block.title_bottom(Line::from(format!(" {} ", hint)).right_aligned());
        }
        block
    }

    /// Split a field area into the input box and the error line.
    fn split(area: Rect) -> (Rect, Rect) {
        let [input_area, error_area] =
            Layout::vertical([Constraint::Length(3), Constraint::Length(1)]).areas(area);
        (input_area, error_area)
    }
}

impl Widget for TextInputWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (input_area, error_area) = Self::split(area);

        Paragraph::new(self.display_text())
            .block(self.create_block())
            .style(self.text_style())
            .render(input_area, buf);

        if let Some(error) = self.error {
            Paragraph::new(error)
                .style(theme().error_style())
                .render(error_area, buf);
        }
    }
}

/// Extension trait for Frame to render TextInputWidget with cursor support.
///
/// Since the Widget trait doesn't have access to Frame, we need this extension
/// to properly set the cursor position.
pub trait TextInputWidgetExt {
    fn render_text_input_widget(&mut self, widget: TextInputWidget, area: Rect);
}

impl TextInputWidgetExt for Frame<'_> {
    fn render_text_input_widget(&mut self, widget: TextInputWidget, area: Rect) {
        let focused = widget.focused;
        let cursor = widget.input.cursor().min(widget.input.len());
        let (input_area, _) = TextInputWidget::split(area);
        let inner = widget.create_block().inner(input_area);

        self.render_widget(widget, area);

        if focused && inner.width > 0 {
            let x = inner.x + (cursor as u16).min(inner.width - 1);
            self.set_cursor_position((x, inner.y));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widget_builder() {
        let input = TextInput::with_text("test");
        let widget = TextInputWidget::new(&input)
            .title("Password")
            .placeholder("Your password")
            .focused(true)
            .masked(true)
            .error(Some("Min 8 characters"));

        assert!(widget.focused);
        assert!(widget.masked);
        assert_eq!(widget.title, Some("Password"));
        assert_eq!(widget.error, Some("Min 8 characters"));
    }

    #[test]
    fn test_display_text_empty_with_placeholder() {
        let input = TextInput::new();
        let widget = TextInputWidget::new(&input).placeholder("you@example.com");
        assert_eq!(widget.display_text(), "you@example.com");
    }

    #[test]
    fn test_display_text_masked() {
        let input = TextInput::with_text("password123");
        let widget = TextInputWidget::new(&input).masked(true);
        assert_eq!(widget.display_text(), "•••••••••••");
    }

    #[test]
    fn test_error_wins_over_focus_border() {
        let input = TextInput::with_text("x");
        let focused = TextInputWidget::new(&input).focused(true);
        let invalid = TextInputWidget::new(&input).focused(true).error(Some("bad"));
        assert_ne!(focused.border_style(), invalid.border_style());
        assert_eq!(invalid.border_style(), theme().border_error_style());
    }

    #[test]
    fn test_renders_error_line() {
        let input = TextInput::with_text("nope");
        let widget = TextInputWidget::new(&input)
            .title("Email")
            .error(Some("Enter a valid email"));
        let area = Rect::new(0, 0, 30, FIELD_HEIGHT);
        let mut buf = Buffer::empty(area);
        widget.render(area, &mut buf);

        let last_row: String = (0..area.width)
            .map(|x| buf[(x, 3)].symbol().to_string())
            .collect();
        assert!(last_row.starts_with("Enter a valid email"));
    }
}
