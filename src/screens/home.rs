//! Home screen shown after a successful sign in or sign up.

use crate::keymap::Action;
use crate::navigation::{NavIntent, Route};
use crate::screens::screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext};
use crate::styles::theme;
use crate::utils::{centered_column, split_footer, FORM_WIDTH};
use crate::widgets::{Button, Footer, BUTTON_HEIGHT};
use anyhow::Result;
use crossterm::event::{Event, KeyEventKind};
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use tracing::info;

const TITLE: &str = "Welcome to Food Split!";
const SUBTITLE: &str = "You're successfully logged in.";
const LOG_OUT_LABEL: &str = "Log Out";

#[derive(Debug, Default)]
pub struct HomeScreen;

impl HomeScreen {
    pub fn new() -> Self {
        Self
    }
}

impl Screen for HomeScreen {
    fn route(&self) -> Route {
        Route::Home
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()> {
        let t = theme();
        let footer_text = ctx.keymap().footer_home();
        let (content, footer_area) = split_footer(area, Footer::HEIGHT);

        let [title, subtitle, _, button] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Length(BUTTON_HEIGHT),
        ])
        .areas(centered_column(content, FORM_WIDTH, 4 + BUTTON_HEIGHT));

        frame.render_widget(
            Paragraph::new(Line::styled(TITLE, t.title_style())).alignment(Alignment::Center),
            title,
        );
        frame.render_widget(
            Paragraph::new(Line::styled(SUBTITLE, t.success_style())).alignment(Alignment::Center),
            subtitle,
        );
        frame.render_widget(Button::new(LOG_OUT_LABEL), button);
        frame.render_widget(Footer::new(&footer_text), footer_area);

        Ok(())
    }

    fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction> {
        let Event::Key(key) = event else {
            return Ok(ScreenAction::None);
        };
        if key.kind != KeyEventKind::Press {
            return Ok(ScreenAction::None);
        }

        Ok(match ctx.keymap().get_action(key.code, key.modifiers) {
            Some(Action::Confirm | Action::LogOut) => ScreenAction::Navigate(NavIntent::LogOut),
            Some(Action::Cancel) => ScreenAction::Back,
            _ => ScreenAction::None,
        })
    }

    fn on_enter(&mut self, _ctx: &ScreenContext) -> Result<()> {
        info!("Reached home screen");
        Ok(())
    }
}
