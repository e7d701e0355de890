//! Per-screen form state.
//!
//! Each form is a plain struct updated through a single `apply` reducer.
//! Validity is derived from the current field values on every call and is
//! never stored.

pub mod login;
pub mod signup;

pub use login::{LoginField, LoginForm, LoginMsg};
pub use signup::{SignUpField, SignUpForm, SignUpMsg};

/// Side effect requested by a form reducer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormEffect {
    /// The form entered the submitting state; the owner must schedule the
    /// simulated request.
    StartSubmit,
}

/// Fields of a form in tab order.
pub trait FieldOrder: Copy + PartialEq + Sized + 'static {
    const ORDER: &'static [Self];

    fn next(self) -> Self {
        let idx = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(idx + 1) % Self::ORDER.len()]
    }

    fn prev(self) -> Self {
        let idx = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(idx + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }

    fn is_last(self) -> bool {
        Self::ORDER.last() == Some(&self)
    }
}
