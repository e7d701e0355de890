//! Primary action button shown under a form.

use crate::styles::theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Rows a button occupies.
pub const BUTTON_HEIGHT: u16 = 3;

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// A full-width button that is enabled, disabled or busy.
///
/// While busy the label is replaced by a spinner glyph picked from `tick`.
#[derive(Debug, Clone, Copy)]
pub struct Button<'a> {
    label: &'a str,
    enabled: bool,
    busy: bool,
    tick: usize,
}

impl<'a> Button<'a> {
    pub fn new(label: &'a str) -> Self {
        Self {
            label,
            enabled: true,
            busy: false,
            tick: 0,
        }
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn busy(mut self, busy: bool, tick: usize) -> Self {
        self.busy = busy;
        self.tick = tick;
        self
    }

    fn content(&self) -> String {
        if self.busy {
            SPINNER_FRAMES[self.tick % SPINNER_FRAMES.len()].to_string()
        } else {
            self.label.to_string()
        }
    }
}

impl Widget for Button<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let t = theme();
        // A busy button stays styled as disabled so it reads as not clickable
        let style = t.button_style(self.enabled && !self.busy);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(style);

        Paragraph::new(self.content())
            .alignment(Alignment::Center)
            .style(style)
            .block(block)
            .render(area, buf);
    }
}
