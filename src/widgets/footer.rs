use crate::styles::theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Key hint footer.
///
/// Takes text in the `"Key: Label | Key: Label"` form produced by
/// [`crate::keymap::Keymap::footer_form`] and colors keys and labels apart.
pub struct Footer<'a> {
    text: &'a str,
}

impl<'a> Footer<'a> {
    /// Height used: one line for the border, one for the hints.
    pub const HEIGHT: u16 = 2;

    pub fn new(text: &'a str) -> Self {
        Self { text }
    }

    fn spans(&self) -> Vec<Span<'a>> {
        let t = theme();
        let mut spans = Vec::new();

        for (i, part) in self.text.split(" | ").enumerate() {
            if i > 0 {
                spans.push(Span::styled(" | ", t.muted_style()));
            }
            match part.split_once(": ") {
                Some((keys, label)) => {
                    spans.push(Span::styled(
                        format!("{}: ", keys),
                        t.link_style(),
                    ));
                    spans.push(Span::styled(label, t.text_style()));
                }
                None => spans.push(Span::styled(part, t.text_style())),
            }
        }
        spans
    }
}

impl Widget for Footer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::TOP)
            .border_type(BorderType::Rounded)
            .border_style(theme().border_style());
        let inner = block.inner(area);
        block.render(area, buf);

        Paragraph::new(Line::from(self.spans()))
            .alignment(Alignment::Center)
            .render(inner, buf);
    }
}
