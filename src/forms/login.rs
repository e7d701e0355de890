//! Login form: email + password.

use super::{FieldOrder, FormEffect};
use crate::utils::text_input::{TextEdit, TextInput};
use crate::validation;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginField {
    Email,
    Password,
}

impl FieldOrder for LoginField {
    const ORDER: &'static [Self] = &[LoginField::Email, LoginField::Password];
}

/// Messages accepted by [`LoginForm::apply`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginMsg {
    Edit(LoginField, TextEdit),
    FocusNext,
    FocusPrev,
    TogglePasswordVisibility,
    Submit,
    SubmitFinished,
}

#[derive(Debug, Clone)]
pub struct LoginForm {
    pub email: TextInput,
    pub password: TextInput,
    pub password_visible: bool,
    pub focused: LoginField,
    submitting: bool,
}

impl Default for LoginForm {
    fn default() -> Self {
        Self {
            email: TextInput::new(),
            password: TextInput::new(),
            password_visible: false,
            focused: LoginField::Email,
            submitting: false,
        }
    }
}

impl LoginForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// The single entry point for state changes.
    pub fn apply(&mut self, msg: LoginMsg) -> Option<FormEffect> {
        match msg {
            LoginMsg::Edit(field, edit) => {
                self.input_mut(field).apply(edit);
                None
            }
            LoginMsg::FocusNext => {
                self.focused = self.focused.next();
                None
            }
            LoginMsg::FocusPrev => {
                self.focused = self.focused.prev();
                None
            }
            LoginMsg::TogglePasswordVisibility => {
                self.password_visible = !self.password_visible;
                None
            }
            LoginMsg::Submit => {
                if !self.can_submit() {
                    return None;
                }
                self.submitting = true;
                Some(FormEffect::StartSubmit)
            }
            LoginMsg::SubmitFinished => {
                self.submitting = false;
                None
            }
        }
    }

    pub fn input(&self, field: LoginField) -> &TextInput {
        match field {
            LoginField::Email => &self.email,
            LoginField::Password => &self.password,
        }
    }

    fn input_mut(&mut self, field: LoginField) -> &mut TextInput {
        match field {
            LoginField::Email => &mut self.email,
            LoginField::Password => &mut self.password,
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn is_valid(&self) -> bool {
        validation::is_valid_email(self.email.text())
            && validation::is_valid_password(self.password.text())
    }

    /// Whether the submit button is enabled.
    pub fn can_submit(&self) -> bool {
        self.is_valid() && !self.submitting
    }

    pub fn error(&self, field: LoginField) -> Option<&'static str> {
        match field {
            LoginField::Email => validation::email_error(self.email.text()),
            LoginField::Password => validation::password_error(self.password.text()),
        }
    }
}
