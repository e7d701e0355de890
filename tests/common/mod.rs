//! Shared helpers for driving a headless [`App`] in integration tests.
//!
//! The app is fed synthetic key events and rendered into a ratatui
//! `TestBackend`; submit completions are awaited through
//! [`App::wait_for_submit`] so no real terminal is needed.

#![allow(dead_code)]

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use foodsplit::{App, Config};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::time::Duration;

/// Generous upper bound for a submit to come back.
pub const SUBMIT_TIMEOUT: Duration = Duration::from_secs(5);

pub struct TestApp {
    pub app: App,
}

impl TestApp {
    /// App with a short submit delay so tests stay fast.
    pub fn new() -> Self {
        Self::with_delay_ms(20)
    }

    pub fn with_delay_ms(delay_ms: u64) -> Self {
        let config = Config {
            submit_delay_ms: delay_ms,
            ..Config::default()
        };
        Self::with_config(config)
    }

    pub fn with_config(config: Config) -> Self {
        Self {
            app: App::new(config).unwrap(),
        }
    }

    pub fn press(&mut self, code: KeyCode) -> &mut Self {
        self.press_with(code, KeyModifiers::NONE)
    }

    pub fn press_with(&mut self, code: KeyCode, modifiers: KeyModifiers) -> &mut Self {
        self.app
            .handle_event(Event::Key(KeyEvent::new(code, modifiers)))
            .unwrap();
        self
    }

    pub fn type_text(&mut self, text: &str) -> &mut Self {
        for c in text.chars() {
            self.press(KeyCode::Char(c));
        }
        self
    }

    /// Fill the login form and press Enter on the password field.
    pub fn submit_login(&mut self, email: &str, password: &str) -> &mut Self {
        self.type_text(email)
            .press(KeyCode::Tab)
            .type_text(password)
            .press(KeyCode::Enter)
    }

    pub fn wait_for_submit(&mut self) -> bool {
        self.app.wait_for_submit(SUBMIT_TIMEOUT).unwrap()
    }

    /// Render the current screen and return its text, one string per row.
    pub fn screen_text(&mut self) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 40)).unwrap();
        let app = &mut self.app;
        terminal.draw(|frame| app.render(frame).unwrap()).unwrap();

        let buffer = terminal.backend().buffer();
        (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
