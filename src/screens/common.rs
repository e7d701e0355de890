//! Pieces shared by the login and sign up screens.

use crate::keymap::{Action, Keymap};
use crate::styles::theme;
use crate::utils::text_input::TextEdit;
use crossterm::event::{KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

/// What a key press means on a form screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum FormKey {
    Command(Action),
    Edit(TextEdit),
}

/// Map a key press on a form screen to a command or an edit of the focused
/// field. Releases and repeats of non-press kinds are ignored.
pub(crate) fn classify_form_key(keymap: &Keymap, key: &KeyEvent) -> Option<FormKey> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if let Some(action) = keymap.get_input_action(key.code, key.modifiers) {
        return Some(match TextEdit::from_action(action) {
            Some(edit) => FormKey::Edit(edit),
            None => FormKey::Command(action),
        });
    }

    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER)
    {
        return None;
    }
    TextEdit::from_key(key.code).map(FormKey::Edit)
}

/// Reveal hint drawn on a password field border, e.g. "Ctrl+T: Show".
pub(crate) fn reveal_hint(keymap: &Keymap, visible: bool) -> String {
    format!(
        "{}: {}",
        keymap.get_key_display_for_action(Action::TogglePasswordVisibility),
        if visible { "Hide" } else { "Show" }
    )
}

/// Title and subtitle lines at the top of a form.
pub(crate) fn render_heading(frame: &mut Frame, area: Rect, title: &str, subtitle: &str) {
    let t = theme();
    let lines = vec![
        Line::from(Span::styled(title.to_string(), t.title_style())),
        Line::from(Span::styled(subtitle.to_string(), t.muted_style())),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

/// "Prompt? Link" line under the submit button.
pub(crate) fn render_link(frame: &mut Frame, area: Rect, prompt: &str, link: &str, enabled: bool) {
    let t = theme();
    let link_style = if enabled { t.link_style() } else { t.muted_style() };
    let line = Line::from(vec![
        Span::styled(format!("{} ", prompt), t.muted_style()),
        Span::styled(link.to_string(), link_style),
    ]);
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

#[cfg(test)]
pub(crate) fn buffer_lines(buf: &Buffer) -> Vec<String> {
    (0..buf.area.height)
        .map(|y| {
            (0..buf.area.width)
                .map(|x| buf[(x, y)].symbol().to_string())
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyCode;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_plain_chars_are_edits() {
        let keymap = Keymap::default();
        assert_eq!(
            classify_form_key(&keymap, &press(KeyCode::Char('q'), KeyModifiers::NONE)),
            Some(FormKey::Edit(TextEdit::Insert('q')))
        );
        assert_eq!(
            classify_form_key(&keymap, &press(KeyCode::Char('A'), KeyModifiers::SHIFT)),
            Some(FormKey::Edit(TextEdit::Insert('A')))
        );
    }

    #[test]
    fn test_bound_keys_are_commands_or_edits() {
        let keymap = Keymap::default();
        assert_eq!(
            classify_form_key(&keymap, &press(KeyCode::Tab, KeyModifiers::NONE)),
            Some(FormKey::Command(Action::NextField))
        );
        assert_eq!(
            classify_form_key(&keymap, &press(KeyCode::Backspace, KeyModifiers::NONE)),
            Some(FormKey::Edit(TextEdit::Backspace))
        );
        assert_eq!(
            classify_form_key(&keymap, &press(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(FormKey::Command(Action::Quit))
        );
    }

    #[test]
    fn test_unbound_control_chord_is_ignored() {
        let keymap = Keymap::default();
        assert_eq!(
            classify_form_key(&keymap, &press(KeyCode::Char('z'), KeyModifiers::CONTROL)),
            None
        );
    }

    #[test]
    fn test_release_is_ignored() {
        let keymap = Keymap::default();
        let mut key = press(KeyCode::Char('a'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        assert_eq!(classify_form_key(&keymap, &key), None);
    }

    #[test]
    fn test_reveal_hint_follows_visibility() {
        let keymap = Keymap::default();
        assert_eq!(reveal_hint(&keymap, false), "Ctrl+T: Show");
        assert_eq!(reveal_hint(&keymap, true), "Ctrl+T: Hide");
    }
}
