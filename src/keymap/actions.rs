//! Action enum for all user-triggered actions
//!
//! These represent semantic actions that can be triggered by keyboard shortcuts.

use serde::{Deserialize, Serialize};

/// All possible user actions in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    // ============ Cursor movement ============
    /// Move the cursor left
    MoveLeft,
    /// Move the cursor right
    MoveRight,
    /// Jump to start of input
    Home,
    /// Jump to end of input
    End,

    // ============ Form ============
    /// Submit the form / activate the primary button (Enter)
    Confirm,
    /// Go back to the previous screen (Esc)
    Cancel,
    /// Focus the next field
    NextField,
    /// Focus the previous field
    PrevField,
    /// Show or hide password fields
    TogglePasswordVisibility,
    /// Follow the secondary link (sign up / log in)
    FollowLink,
    /// Log out from the home screen
    LogOut,

    // ============ Global ============
    /// Quit the application
    Quit,

    // ============ Text editing ============
    /// Delete character before cursor
    Backspace,
    /// Delete character at cursor
    DeleteChar,
}

impl Action {
    /// Get a human-readable description of this action
    pub fn description(&self) -> &'static str {
        match self {
            Action::MoveLeft => "Move left",
            Action::MoveRight => "Move right",
            Action::Home => "Start of input",
            Action::End => "End of input",
            Action::Confirm => "Submit",
            Action::Cancel => "Back",
            Action::NextField => "Next field",
            Action::PrevField => "Previous field",
            Action::TogglePasswordVisibility => "Show/Hide",
            Action::FollowLink => "Switch screen",
            Action::LogOut => "Log Out",
            Action::Quit => "Quit",
            Action::Backspace => "Backspace",
            Action::DeleteChar => "Delete character",
        }
    }
}
