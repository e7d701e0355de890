//! Sign up screen: name, email, password and confirmation.

use super::common::{classify_form_key, render_heading, render_link, reveal_hint, FormKey};
use crate::forms::{FieldOrder, FormEffect, SignUpField, SignUpForm, SignUpMsg};
use crate::keymap::Action;
use crate::navigation::{NavIntent, Route};
use crate::screens::screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext};
use crate::submit::{PendingSubmit, SubmitTicket};
use crate::utils::{centered_column, split_footer, TextEdit, FORM_WIDTH};
use crate::widgets::{Button, Footer, TextInputWidget, TextInputWidgetExt, BUTTON_HEIGHT, FIELD_HEIGHT};
use anyhow::Result;
use crossterm::event::{Event, KeyEvent};
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::Frame;
use tracing::{debug, info};

const TITLE: &str = "Sign Up";
const SUBTITLE: &str = "Create your Food Split account";
const SUBMIT_LABEL: &str = "Create Account";
const LINK_PROMPT: &str = "Already have an account?";
const LINK_LABEL: &str = "Log in";
const FORM_HEIGHT: u16 = 2 + 1 + 4 * FIELD_HEIGHT + 1 + BUTTON_HEIGHT + 1 + 1;

pub struct SignUpScreen {
    form: SignUpForm,
    pending: Option<PendingSubmit>,
}

impl Default for SignUpScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl SignUpScreen {
    pub fn new() -> Self {
        Self {
            form: SignUpForm::new(),
            pending: None,
        }
    }

    pub fn form(&self) -> &SignUpForm {
        &self.form
    }

    pub fn pending_ticket(&self) -> Option<SubmitTicket> {
        self.pending.as_ref().map(PendingSubmit::ticket)
    }

    fn dispatch(&mut self, msg: SignUpMsg, ctx: &ScreenContext) {
        if let Some(FormEffect::StartSubmit) = self.form.apply(msg) {
            self.pending = Some(ctx.scheduler.schedule(Route::SignUp));
        }
    }

    fn handle_key(&mut self, key: KeyEvent, ctx: &ScreenContext) -> ScreenAction {
        let Some(form_key) = classify_form_key(ctx.keymap(), &key) else {
            return ScreenAction::None;
        };
        let busy = self.form.is_submitting();

        match form_key {
            FormKey::Edit(edit) => {
                let field = self.form.focused;
                self.dispatch(SignUpMsg::Edit(field, edit), ctx);
            }
            FormKey::Command(Action::NextField) => self.dispatch(SignUpMsg::FocusNext, ctx),
            FormKey::Command(Action::PrevField) => self.dispatch(SignUpMsg::FocusPrev, ctx),
            FormKey::Command(Action::TogglePasswordVisibility) => {
                self.dispatch(SignUpMsg::TogglePasswordVisibility, ctx);
            }
            FormKey::Command(Action::Confirm) => {
                if self.form.focused.is_last() {
                    self.dispatch(SignUpMsg::Submit, ctx);
                } else {
                    self.dispatch(SignUpMsg::FocusNext, ctx);
                }
            }
            FormKey::Command(Action::FollowLink) if !busy => {
                return ScreenAction::Navigate(NavIntent::ShowLogin);
            }
            FormKey::Command(Action::Cancel) if !busy => return ScreenAction::Back,
            FormKey::Command(_) => {}
        }
        ScreenAction::None
    }

    fn field_widget<'a>(&'a self, field: SignUpField, hint: &'a str) -> TextInputWidget<'a> {
        let (title, placeholder) = match field {
            SignUpField::Name => ("Name", "Your name"),
            SignUpField::Email => ("Email", "you@example.com"),
            SignUpField::Password => ("Password", "At least 8 characters"),
            SignUpField::ConfirmPassword => ("Confirm Password", "Repeat your password"),
        };
        let widget = TextInputWidget::new(self.form.input(field))
            .title(title)
            .placeholder(placeholder)
            .focused(self.form.focused == field)
            .error(self.form.error(field));

        if field.is_secret() {
            widget.masked(!self.form.password_visible).reveal_hint(hint)
        } else {
            widget
        }
    }
}

impl Screen for SignUpScreen {
    fn route(&self) -> Route {
        Route::SignUp
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()> {
        let footer_text = ctx.keymap().footer_form(LINK_LABEL);
        let (content, footer_area) = split_footer(area, Footer::HEIGHT);

        let [heading, _, name, email, password, confirm, _, button, _, link] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Length(FIELD_HEIGHT),
            Constraint::Length(FIELD_HEIGHT),
            Constraint::Length(FIELD_HEIGHT),
            Constraint::Length(FIELD_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(BUTTON_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(centered_column(content, FORM_WIDTH, FORM_HEIGHT));

        render_heading(frame, heading, TITLE, SUBTITLE);

        let hint = reveal_hint(ctx.keymap(), self.form.password_visible);
        for (field, area) in [
            (SignUpField::Name, name),
            (SignUpField::Email, email),
            (SignUpField::Password, password),
            (SignUpField::ConfirmPassword, confirm),
        ] {
            frame.render_text_input_widget(self.field_widget(field, &hint), area);
        }

        frame.render_widget(
            Button::new(SUBMIT_LABEL)
                .enabled(self.form.can_submit())
                .busy(self.form.is_submitting(), ctx.spinner_tick),
            button,
        );
        render_link(frame, link, LINK_PROMPT, LINK_LABEL, !self.form.is_submitting());
        frame.render_widget(Footer::new(&footer_text), footer_area);

        Ok(())
    }

    fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction> {
        match event {
            Event::Key(key) => Ok(self.handle_key(key, ctx)),
            Event::Paste(text) => {
                let field = self.form.focused;
                self.dispatch(SignUpMsg::Edit(field, TextEdit::InsertStr(text)), ctx);
                Ok(ScreenAction::None)
            }
            _ => Ok(ScreenAction::None),
        }
    }

    fn is_input_focused(&self) -> bool {
        true
    }

    fn on_submit_elapsed(&mut self, ticket: SubmitTicket) -> ScreenAction {
        if self.pending_ticket() != Some(ticket) {
            debug!("SignUp ignoring stale submit {:?}", ticket);
            return ScreenAction::None;
        }
        self.pending = None;
        self.form.apply(SignUpMsg::SubmitFinished);
        info!("SignUp submit {:?} finished", ticket);
        ScreenAction::Navigate(NavIntent::Authenticated)
    }

    fn on_exit(&mut self, _ctx: &ScreenContext) -> Result<()> {
        if let Some(pending) = self.pending.take() {
            pending.cancel();
            debug!(
                "SignUp left, cancelled submit {:?} from {}",
                pending.ticket(),
                pending.origin()
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::event;
    use crate::screens::common::buffer_lines;
    use crate::submit::SubmitScheduler;
    use crossterm::event::{KeyCode, KeyModifiers};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use std::time::Duration;
    use tokio::runtime::Runtime;

    fn key(screen: &mut SignUpScreen, ctx: &ScreenContext, code: KeyCode) -> ScreenAction {
        screen
            .handle_event(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)), ctx)
            .unwrap()
    }

    fn type_text(screen: &mut SignUpScreen, ctx: &ScreenContext, text: &str) {
        for c in text.chars() {
            key(screen, ctx, KeyCode::Char(c));
        }
    }

    fn fill(screen: &mut SignUpScreen, ctx: &ScreenContext, values: [&str; 4]) {
        for (i, value) in values.iter().enumerate() {
            if i > 0 {
                key(screen, ctx, KeyCode::Tab);
            }
            type_text(screen, ctx, value);
        }
    }

    #[test]
    fn test_fields_fill_in_tab_order() {
        let rt = Runtime::new().unwrap();
        let (tx, _rx) = event::channel();
        let scheduler = SubmitScheduler::new(rt.handle().clone(), tx, Duration::from_secs(10));
        let config = Config::default();
        let ctx = ScreenContext::new(&config, &scheduler);

        let mut screen = SignUpScreen::new();
        fill(&mut screen, &ctx, ["Al", "a@b.com", "abcdefgh", "abcdefgh"]);
        let form = screen.form();
        assert_eq!(form.name.text(), "Al");
        assert_eq!(form.email.text(), "a@b.com");
        assert_eq!(form.confirm_password.text(), "abcdefgh");
        assert!(form.is_valid());
    }

    #[test]
    fn test_enter_before_last_field_moves_focus_on_valid_form() {
        let rt = Runtime::new().unwrap();
        let (tx, _rx) = event::channel();
        let scheduler = SubmitScheduler::new(rt.handle().clone(), tx, Duration::from_secs(10));
        let config = Config::default();
        let ctx = ScreenContext::new(&config, &scheduler);

        let mut screen = SignUpScreen::new();
        fill(&mut screen, &ctx, ["Al", "a@b.com", "abcdefgh", "abcdefgh"]);
        key(&mut screen, &ctx, KeyCode::BackTab);
        assert_eq!(screen.form().focused, SignUpField::Password);

        key(&mut screen, &ctx, KeyCode::Enter);
        assert_eq!(screen.form().focused, SignUpField::ConfirmPassword);
        assert!(!screen.form().is_submitting());
        assert_eq!(screen.pending_ticket(), None);
    }

    #[test]
    fn test_enter_on_last_field_submits_once() {
        let rt = Runtime::new().unwrap();
        let (tx, mut rx) = event::channel();
        let scheduler = SubmitScheduler::new(rt.handle().clone(), tx, Duration::from_millis(10));
        let config = Config::default();
        let ctx = ScreenContext::new(&config, &scheduler);

        let mut screen = SignUpScreen::new();
        fill(&mut screen, &ctx, ["Al", "a@b.com", "abcdefgh", "abcdefgh"]);
        key(&mut screen, &ctx, KeyCode::Enter);
        key(&mut screen, &ctx, KeyCode::Enter);
        assert!(screen.form().is_submitting());

        let first = rt
            .block_on(async { tokio::time::timeout(Duration::from_secs(5), rx.recv()).await })
            .unwrap();
        let Some(event::AppEvent::SubmitElapsed { origin, ticket }) = first else {
            panic!("submit never completed");
        };
        assert_eq!(origin, Route::SignUp);
        assert_eq!(
            screen.on_submit_elapsed(ticket),
            ScreenAction::Navigate(NavIntent::Authenticated)
        );

        let second = rt.block_on(async {
            tokio::time::timeout(Duration::from_millis(100), rx.recv()).await
        });
        assert!(second.is_err(), "double submit scheduled a second timer");
    }

    #[test]
    fn test_mismatched_confirmation_blocks_submit() {
        let rt = Runtime::new().unwrap();
        let (tx, _rx) = event::channel();
        let scheduler = SubmitScheduler::new(rt.handle().clone(), tx, Duration::from_secs(10));
        let config = Config::default();
        let ctx = ScreenContext::new(&config, &scheduler);

        let mut screen = SignUpScreen::new();
        fill(&mut screen, &ctx, ["Al", "a@b.com", "abcdefgh", "abcdefg"]);
        key(&mut screen, &ctx, KeyCode::Enter);
        assert!(!screen.form().is_submitting());
        assert_eq!(
            screen.form().error(SignUpField::ConfirmPassword),
            Some("Passwords do not match")
        );
    }

    #[test]
    fn test_link_goes_to_login() {
        let rt = Runtime::new().unwrap();
        let (tx, _rx) = event::channel();
        let scheduler = SubmitScheduler::new(rt.handle().clone(), tx, Duration::from_secs(10));
        let config = Config::default();
        let ctx = ScreenContext::new(&config, &scheduler);

        let mut screen = SignUpScreen::new();
        let action = screen
            .handle_event(
                Event::Key(KeyEvent::new(KeyCode::Char('o'), KeyModifiers::CONTROL)),
                &ctx,
            )
            .unwrap();
        assert_eq!(action, ScreenAction::Navigate(NavIntent::ShowLogin));
    }

    #[test]
    fn test_render_lists_fields_and_link() {
        let config = Config::default();
        let mut screen = SignUpScreen::new();
        let mut terminal = Terminal::new(TestBackend::new(80, 40)).unwrap();
        let ctx = RenderContext::new(&config, 0);
        terminal
            .draw(|frame| screen.render(frame, frame.area(), &ctx).unwrap())
            .unwrap();

        let text = buffer_lines(terminal.backend().buffer()).join("\n");
        for expected in [
            "Sign Up",
            "Name",
            "Confirm Password",
            "Create Account",
            "Already have an account? Log in",
        ] {
            assert!(text.contains(expected), "missing {expected:?}");
        }
        assert!(!text.contains("Passwords do not match"));
    }
}
