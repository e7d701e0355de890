//! Sign-up form: name, email, password and confirmation.

use super::{FieldOrder, FormEffect};
use crate::utils::text_input::{TextEdit, TextInput};
use crate::validation;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignUpField {
    Name,
    Email,
    Password,
    ConfirmPassword,
}

impl FieldOrder for SignUpField {
    const ORDER: &'static [Self] = &[
        SignUpField::Name,
        SignUpField::Email,
        SignUpField::Password,
        SignUpField::ConfirmPassword,
    ];
}

impl SignUpField {
    pub fn is_secret(self) -> bool {
        matches!(self, SignUpField::Password | SignUpField::ConfirmPassword)
    }
}

/// Messages accepted by [`SignUpForm::apply`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignUpMsg {
    Edit(SignUpField, TextEdit),
    FocusNext,
    FocusPrev,
    TogglePasswordVisibility,
    Submit,
    SubmitFinished,
}

#[derive(Debug, Clone)]
pub struct SignUpForm {
    pub name: TextInput,
    pub email: TextInput,
    pub password: TextInput,
    pub confirm_password: TextInput,
    /// Applies to both password fields.
    pub password_visible: bool,
    pub focused: SignUpField,
    submitting: bool,
}

impl Default for SignUpForm {
    fn default() -> Self {
        Self {
            name: TextInput::new(),
            email: TextInput::new(),
            password: TextInput::new(),
            confirm_password: TextInput::new(),
            password_visible: false,
            focused: SignUpField::Name,
            submitting: false,
        }
    }
}

impl SignUpForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, msg: SignUpMsg) -> Option<FormEffect> {
        match msg {
            SignUpMsg::Edit(field, edit) => self.input_mut(field).apply(edit),
            SignUpMsg::FocusNext => self.focused = self.focused.next(),
            SignUpMsg::FocusPrev => self.focused = self.focused.prev(),
            SignUpMsg::TogglePasswordVisibility => self.password_visible = !self.password_visible,
            SignUpMsg::Submit => {
                if !self.can_submit() {
                    return None;
                }
                self.submitting = true;
                return Some(FormEffect::StartSubmit);
            }
            SignUpMsg::SubmitFinished => self.submitting = false,
        }
        None
    }

    pub fn input(&self, field: SignUpField) -> &TextInput {
        match field {
            SignUpField::Name => &self.name,
            SignUpField::Email => &self.email,
            SignUpField::Password => &self.password,
            SignUpField::ConfirmPassword => &self.confirm_password,
        }
    }

    fn input_mut(&mut self, field: SignUpField) -> &mut TextInput {
        match field {
            SignUpField::Name => &mut self.name,
            SignUpField::Email => &mut self.email,
            SignUpField::Password => &mut self.password,
            SignUpField::ConfirmPassword => &mut self.confirm_password,
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Every field passes its strict check. An empty confirmation never
    /// passes, even against an empty password.
    pub fn is_valid(&self) -> bool {
        validation::is_valid_name(self.name.text())
            && validation::is_valid_email(self.email.text())
            && validation::is_valid_password(self.password.text())
            && !self.confirm_password.is_empty()
            && validation::passwords_match(self.password.text(), self.confirm_password.text())
    }

    pub fn can_submit(&self) -> bool {
        self.is_valid() && !self.submitting
    }

    pub fn error(&self, field: SignUpField) -> Option<&'static str> {
        match field {
            SignUpField::Name => validation::name_error(self.name.text()),
            SignUpField::Email => validation::email_error(self.email.text()),
            SignUpField::Password => validation::password_error(self.password.text()),
            SignUpField::ConfirmPassword => {
                validation::confirm_error(self.password.text(), self.confirm_password.text())
            }
        }
    }
}
