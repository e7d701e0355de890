//! Keymap configuration module
//!
//! Provides customizable keyboard shortcuts with preset keymaps (standard, emacs)
//! and per-action user overrides.

mod actions;
mod binding;
mod presets;

pub use actions::Action;
pub use binding::{format_key_display, parse_key_string, KeyBinding, ParsedKey};
pub use presets::KeymapPreset;

use crate::utils::text_input::TextInput;
use crossterm::event::{KeyCode, KeyModifiers};
use serde::{Deserialize, Serialize};

/// Keymap configuration with preset and optional overrides
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Keymap {
    /// Base preset keymap
    #[serde(default)]
    pub preset: KeymapPreset,

    /// User-defined overrides (checked before preset)
    #[serde(default)]
    pub overrides: Vec<KeyBinding>,
}

impl Keymap {
    /// Get the action for a key event, checking overrides first then preset.
    /// If an action is overridden, preset bindings for that action are ignored.
    pub fn get_action(&self, code: KeyCode, modifiers: KeyModifiers) -> Option<Action> {
        self.all_bindings()
            .into_iter()
            .find(|binding| binding.matches(code, modifiers))
            .map(|binding| binding.action)
    }

    /// Like [`Keymap::get_action`], but for a screen whose text input has focus.
    ///
    /// A plain character bound to an action that is unsafe while typing (like
    /// `l` for log out) resolves to `None` so the caller inserts it as text.
    /// The same action stays reachable through modified keys such as `Ctrl+C`.
    pub fn get_input_action(&self, code: KeyCode, modifiers: KeyModifiers) -> Option<Action> {
        let action = self.get_action(code, modifiers)?;
        let plain_char = matches!(code, KeyCode::Char(_))
            && !modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER);
        if plain_char && !TextInput::is_action_allowed_when_focused(&action) {
            None
        } else {
            Some(action)
        }
    }

    /// Get all bindings (overrides + preset) for display in help.
    /// Overrides shadow preset bindings for the same action.
    pub fn all_bindings(&self) -> Vec<KeyBinding> {
        let mut bindings = self.overrides.clone();
        bindings.extend(
            self.preset
                .bindings()
                .into_iter()
                .filter(|preset| !self.overrides.iter().any(|o| o.action == preset.action)),
        );
        bindings
    }

    /// Get the display string for a specific action (e.g., Action::Quit -> "Q")
    pub fn get_key_display_for_action(&self, action: Action) -> String {
        self.all_bindings()
            .iter()
            .find(|b| b.action == action)
            .map(KeyBinding::display)
            .unwrap_or_else(|| format!("{:?}", action))
    }

    /// "Key: label" for an action. A binding's own description wins over
    /// `label`, which wins over the action's default description.
    fn hint(&self, action: Action, label: Option<&str>) -> String {
        let bindings = self.all_bindings();
        let binding = bindings.iter().find(|b| b.action == action);
        let key = binding
            .map(KeyBinding::display)
            .unwrap_or_else(|| format!("{:?}", action));
        let text = match (binding, label) {
            (Some(b), Some(label)) if b.description.is_none() => label,
            (Some(b), _) => b.get_description(),
            (None, label) => label.unwrap_or_else(|| action.description()),
        };
        format!("{}: {}", key, text)
    }

    /// Footer hint for a form screen
    pub fn footer_form(&self, link_label: &str) -> String {
        [
            self.hint(Action::NextField, None),
            self.hint(Action::Confirm, None),
            self.hint(Action::TogglePasswordVisibility, None),
            self.hint(Action::FollowLink, Some(link_label)),
            self.hint(Action::Cancel, None),
        ]
        .join(" | ")
    }

    /// Footer hint for the home screen
    pub fn footer_home(&self) -> String {
        [self.hint(Action::LogOut, None), self.hint(Action::Quit, None)].join(" | ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_keymap() {
        let keymap = Keymap::default();
        assert_eq!(keymap.preset, KeymapPreset::Standard);
        assert!(keymap.overrides.is_empty());
    }

    #[test]
    fn test_get_action_from_preset() {
        let keymap = Keymap::default();
        assert_eq!(
            keymap.get_action(KeyCode::Enter, KeyModifiers::NONE),
            Some(Action::Confirm)
        );
        assert_eq!(
            keymap.get_action(KeyCode::Char('t'), KeyModifiers::CONTROL),
            Some(Action::TogglePasswordVisibility)
        );
    }

    #[test]
    fn test_override_takes_precedence() {
        let keymap = Keymap {
            preset: KeymapPreset::Standard,
            overrides: vec![KeyBinding::new("ctrl+s", Action::Confirm)],
        };
        assert_eq!(
            keymap.get_action(KeyCode::Char('s'), KeyModifiers::CONTROL),
            Some(Action::Confirm)
        );
        // Enter was the preset binding for Confirm and is now shadowed
        assert_eq!(keymap.get_action(KeyCode::Enter, KeyModifiers::NONE), None);
    }

    #[test]
    fn test_input_action_lets_plain_chars_through() {
        let keymap = Keymap::default();
        assert_eq!(
            keymap.get_action(KeyCode::Char('q'), KeyModifiers::NONE),
            Some(Action::Quit)
        );
        assert_eq!(keymap.get_input_action(KeyCode::Char('q'), KeyModifiers::NONE), None);
        assert_eq!(keymap.get_input_action(KeyCode::Char('l'), KeyModifiers::NONE), None);
        assert_eq!(
            keymap.get_input_action(KeyCode::Char('c'), KeyModifiers::CONTROL),
            Some(Action::Quit)
        );
        assert_eq!(
            keymap.get_input_action(KeyCode::Tab, KeyModifiers::NONE),
            Some(Action::NextField)
        );
    }

    #[test]
    fn test_key_display_reflects_override() {
        let keymap = Keymap {
            preset: KeymapPreset::Standard,
            overrides: vec![KeyBinding::new("ctrl+l", Action::LogOut)],
        };
        assert_eq!(keymap.get_key_display_for_action(Action::LogOut), "Ctrl+L");
        assert!(keymap.footer_home().starts_with("Ctrl+L: Log Out"));
    }

    #[test]
    fn test_footer_uses_binding_descriptions() {
        let keymap = Keymap::default();
        let footer = keymap.footer_form("Sign up");
        assert!(footer.contains(": Next field | Enter: Submit | Ctrl+T: Show/Hide"));
        assert!(footer.contains("Ctrl+O: Sign up"));

        let mut custom = KeyBinding::new("f2", Action::FollowLink);
        custom.description = Some("Switch".to_string());
        let keymap = Keymap {
            preset: KeymapPreset::Standard,
            overrides: vec![custom],
        };
        assert!(keymap.footer_form("Sign up").contains("F2: Switch"));
    }
}
