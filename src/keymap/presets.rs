//! Preset keymaps: Standard, Emacs
//!
//! Each preset provides a complete set of key bindings for all actions.

use super::{Action, KeyBinding};
use serde::{Deserialize, Serialize};

/// Available keymap presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum KeymapPreset {
    /// Standard keyboard navigation (arrows, Tab, Enter, Esc)
    #[default]
    Standard,
    /// Emacs-style editing (Ctrl+A/E/B/F, Ctrl+N/P between fields)
    Emacs,
}

impl KeymapPreset {
    /// Get all key bindings for this preset
    pub fn bindings(&self) -> Vec<KeyBinding> {
        match self {
            KeymapPreset::Standard => standard_bindings(),
            KeymapPreset::Emacs => emacs_bindings(),
        }
    }

    /// Get human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            KeymapPreset::Standard => "Standard",
            KeymapPreset::Emacs => "Emacs",
        }
    }
}

/// Bindings shared by every preset
fn common_bindings() -> Vec<KeyBinding> {
    vec![
        KeyBinding::new("enter", Action::Confirm),
        KeyBinding::new("esc", Action::Cancel),
        KeyBinding::new("tab", Action::NextField),
        KeyBinding::new("shift+tab", Action::PrevField),
        KeyBinding::new("ctrl+t", Action::TogglePasswordVisibility),
        KeyBinding::new("ctrl+o", Action::FollowLink),
        KeyBinding::new("l", Action::LogOut),
        KeyBinding::new("q", Action::Quit),
        KeyBinding::new("ctrl+c", Action::Quit),
        KeyBinding::new("backspace", Action::Backspace),
        KeyBinding::new("delete", Action::DeleteChar),
    ]
}

/// Standard keyboard bindings (arrows, Enter, Esc)
fn standard_bindings() -> Vec<KeyBinding> {
    let mut bindings = vec![
        KeyBinding::new("left", Action::MoveLeft),
        KeyBinding::new("right", Action::MoveRight),
        KeyBinding::new("home", Action::Home),
        KeyBinding::new("end", Action::End),
        KeyBinding::new("down", Action::NextField),
        KeyBinding::new("up", Action::PrevField),
    ];
    bindings.extend(common_bindings());
    bindings
}

/// Emacs-style keyboard bindings
fn emacs_bindings() -> Vec<KeyBinding> {
    let mut bindings = vec![
        KeyBinding::new("ctrl+b", Action::MoveLeft),
        KeyBinding::new("left", Action::MoveLeft),
        KeyBinding::new("ctrl+f", Action::MoveRight),
        KeyBinding::new("right", Action::MoveRight),
        KeyBinding::new("ctrl+a", Action::Home),
        KeyBinding::new("home", Action::Home),
        KeyBinding::new("ctrl+e", Action::End),
        KeyBinding::new("end", Action::End),
        KeyBinding::new("ctrl+n", Action::NextField),
        KeyBinding::new("down", Action::NextField),
        KeyBinding::new("ctrl+p", Action::PrevField),
        KeyBinding::new("up", Action::PrevField),
        KeyBinding::new("ctrl+g", Action::Cancel), // C-g is cancel in emacs
        KeyBinding::new("ctrl+d", Action::DeleteChar),
    ];
    bindings.extend(common_bindings());
    bindings
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_names() {
        assert_eq!(KeymapPreset::Standard.name(), "Standard");
        assert_eq!(KeymapPreset::Emacs.name(), "Emacs");
    }

    #[test]
    fn test_every_action_is_bound() {
        let all = [
            Action::MoveLeft,
            Action::MoveRight,
            Action::Home,
            Action::End,
            Action::Confirm,
            Action::Cancel,
            Action::NextField,
            Action::PrevField,
            Action::TogglePasswordVisibility,
            Action::FollowLink,
            Action::LogOut,
            Action::Quit,
            Action::Backspace,
            Action::DeleteChar,
        ];
        for preset in [KeymapPreset::Standard, KeymapPreset::Emacs] {
            let bindings = preset.bindings();
            for action in all {
                assert!(
                    bindings.iter().any(|b| b.action == action),
                    "{} preset has no binding for {:?}",
                    preset.name(),
                    action
                );
            }
        }
    }

    #[test]
    fn test_all_preset_keys_parse() {
        for preset in [KeymapPreset::Standard, KeymapPreset::Emacs] {
            for binding in preset.bindings() {
                assert!(binding.parse().is_ok(), "unparseable key {}", binding.key);
            }
        }
    }

    #[test]
    fn test_emacs_has_ctrl_np() {
        let bindings = KeymapPreset::Emacs.bindings();
        assert!(bindings
            .iter()
            .any(|b| b.key == "ctrl+n" && b.action == Action::NextField));
        assert!(bindings
            .iter()
            .any(|b| b.key == "ctrl+p" && b.action == Action::PrevField));
    }
}
