//! Login screen: email and password, then a simulated sign in.

use super::common::{classify_form_key, render_heading, render_link, reveal_hint, FormKey};
use crate::forms::{FieldOrder, FormEffect, LoginField, LoginForm, LoginMsg};
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

const TITLE: &str = "Welcome back";
const SUBTITLE: &str = "Log in to continue";
const SUBMIT_LABEL: &str = "Log In";
const LINK_PROMPT: &str = "Don't have an account?";
const LINK_LABEL: &str = "Sign up";
const FORM_HEIGHT: u16 = 2 + 1 + 2 * FIELD_HEIGHT + 1 + BUTTON_HEIGHT + 1 + 1;

pub struct LoginScreen {
    form: LoginForm,
    pending: Option<PendingSubmit>,
}

impl Default for LoginScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl LoginScreen {
    pub fn new() -> Self {
        Self {
            form: LoginForm::new(),
            pending: None,
        }
    }

    pub fn form(&self) -> &LoginForm {
        &self.form
    }

    /// Ticket of the submit currently in flight.
    pub fn pending_ticket(&self) -> Option<SubmitTicket> {
        self.pending.as_ref().map(PendingSubmit::ticket)
    }

    fn dispatch(&mut self, msg: LoginMsg, ctx: &ScreenContext) {
        if let Some(FormEffect::StartSubmit) = self.form.apply(msg) {
            self.pending = Some(ctx.scheduler.schedule(Route::Login));
        }
    }

    fn handle_key(&mut self, key: KeyEvent, ctx: &ScreenContext) -> ScreenAction {
        let Some(form_key) = classify_form_key(ctx.keymap(), &key) else {
            return ScreenAction::None;
        };

        match form_key {
            FormKey::Edit(edit) => {
                let field = self.form.focused;
                self.dispatch(LoginMsg::Edit(field, edit), ctx);
            }
            FormKey::Command(Action::NextField) => self.dispatch(LoginMsg::FocusNext, ctx),
            FormKey::Command(Action::PrevField) => self.dispatch(LoginMsg::FocusPrev, ctx),
            FormKey::Command(Action::TogglePasswordVisibility) => {
                self.dispatch(LoginMsg::TogglePasswordVisibility, ctx);
            }
            FormKey::Command(Action::Confirm) => {
                if self.form.focused.is_last() {
                    self.dispatch(LoginMsg::Submit, ctx);
                } else {
                    self.dispatch(LoginMsg::FocusNext, ctx);
                }
            }
            FormKey::Command(Action::FollowLink) if !self.form.is_submitting() => {
                return ScreenAction::Navigate(NavIntent::ShowSignUp);
            }
            FormKey::Command(Action::Cancel) if !self.form.is_submitting() => {
                return ScreenAction::Back;
            }
            FormKey::Command(_) => {}
        }
        ScreenAction::None
    }

    fn field_widget<'a>(&'a self, field: LoginField, hint: &'a str) -> TextInputWidget<'a> {
        let widget = TextInputWidget::new(self.form.input(field))
            .focused(self.form.focused == field)
            .error(self.form.error(field));
        match field {
            LoginField::Email => widget.title("Email").placeholder("you@example.com"),
            LoginField::Password => widget
                .title("Password")
                .placeholder("Your password")
                .masked(!self.form.password_visible)
                .reveal_hint(hint),
        }
    }
}

impl Screen for LoginScreen {
    fn route(&self) -> Route {
        Route::Login
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()> {
        let footer_text = ctx.keymap().footer_form(LINK_LABEL);
        let (content, footer_area) = split_footer(area, Footer::HEIGHT);

        let [heading, _, email, password, _, button, _, link] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(1),
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
        frame.render_text_input_widget(self.field_widget(LoginField::Email, &hint), email);
        frame.render_text_input_widget(self.field_widget(LoginField::Password, &hint), password);

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
                self.dispatch(LoginMsg::Edit(field, TextEdit::InsertStr(text)), ctx);
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
            debug!("Login ignoring stale submit {:?}", ticket);
            return ScreenAction::None;
        }
        self.pending = None;
        self.form.apply(LoginMsg::SubmitFinished);
        info!("Login submit {:?} finished", ticket);
        ScreenAction::Navigate(NavIntent::Authenticated)
    }

    fn on_exit(&mut self, _ctx: &ScreenContext) -> Result<()> {
        if let Some(pending) = self.pending.take() {
            pending.cancel();
            debug!(
                "Login left, cancelled submit {:?} from {}",
                pending.ticket(),
                pending.origin()
            );
        }
        Ok(())
    }
}
