//! Field validators for the sign-in and sign-up forms.
//!
//! Each field has a strict predicate (used to gate submission) and an error
//! function that stays silent while the field is empty, so untouched fields
//! are not flagged.

use regex::Regex;
use std::sync::LazyLock;

/// Minimum password length, in UTF-16 code units.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Minimum display name length, in UTF-16 code units.
pub const MIN_NAME_LEN: usize = 2;

pub const EMAIL_ERROR: &str = "Enter a valid email";
pub const PASSWORD_ERROR: &str = "Min 8 characters";
pub const NAME_ERROR: &str = "Min 2 characters";
pub const CONFIRM_ERROR: &str = "Passwords do not match";

/// ECMAScript `\s`: tab, LF, VT, FF, CR, space, NBSP, BOM and the Unicode
/// space separators. Unlike regex's `\s` it has no NEL (U+0085).
const WS: &str = r"\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}";

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    let part = format!("[^{WS}@]+");
    Regex::new(&format!(r"^{part}@{part}\.{part}$")).expect("email pattern compiles")
});

/// Length in UTF-16 code units.
fn utf16_len(s: &str) -> usize {
    s.encode_utf16().count()
}

/// `local@domain.tld` with no whitespace and a single `@`.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

pub fn is_valid_password(password: &str) -> bool {
    utf16_len(password) >= MIN_PASSWORD_LEN
}

pub fn is_valid_name(name: &str) -> bool {
    utf16_len(name) >= MIN_NAME_LEN
}

pub fn passwords_match(password: &str, confirm: &str) -> bool {
    password == confirm
}

/// Inline error for the email field, `None` while empty or valid.
pub fn email_error(email: &str) -> Option<&'static str> {
    (!email.is_empty() && !is_valid_email(email)).then_some(EMAIL_ERROR)
}

pub fn password_error(password: &str) -> Option<&'static str> {
    (!password.is_empty() && !is_valid_password(password)).then_some(PASSWORD_ERROR)
}

pub fn name_error(name: &str) -> Option<&'static str> {
    (!name.is_empty() && !is_valid_name(name)).then_some(NAME_ERROR)
}

/// Inline error for the confirmation field. Only the confirmation value
/// decides whether the message is suppressed.
pub fn confirm_error(password: &str, confirm: &str) -> Option<&'static str> {
    (!confirm.is_empty() && !passwords_match(password, confirm)).then_some(CONFIRM_ERROR)
}
