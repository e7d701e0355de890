use crate::keymap::Action;
use crossterm::event::KeyCode;

/// A single editing operation on a [`TextInput`].
///
/// Forms receive keystrokes as `TextEdit` values so that every field change
/// flows through the form reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextEdit {
    Insert(char),
    Backspace,
    Delete,
    MoveLeft,
    MoveRight,
    Home,
    End,
    /// Insert a whole string at the cursor, e.g. a bracketed paste.
    InsertStr(String),
}

impl TextEdit {
    /// Map a raw key code to an edit, if it is one.
    pub fn from_key(key_code: KeyCode) -> Option<Self> {
        match key_code {
            KeyCode::Char(c) => Some(Self::Insert(c)),
            KeyCode::Backspace => Some(Self::Backspace),
            KeyCode::Delete => Some(Self::Delete),
            KeyCode::Left => Some(Self::MoveLeft),
            KeyCode::Right => Some(Self::MoveRight),
            KeyCode::Home => Some(Self::Home),
            KeyCode::End => Some(Self::End),
            _ => None,
        }
    }

    /// Map a keymap action to an edit, if it is one.
    pub fn from_action(action: Action) -> Option<Self> {
        match action {
            Action::MoveLeft => Some(Self::MoveLeft),
            Action::MoveRight => Some(Self::MoveRight),
            Action::Home => Some(Self::Home),
            Action::End => Some(Self::End),
            Action::Backspace => Some(Self::Backspace),
            Action::DeleteChar => Some(Self::Delete),
            _ => None,
        }
    }
}

/// A text input field with encapsulated state.
///
/// This struct wraps the text and cursor position (counted in characters),
/// providing a cleaner API for managing text input in forms.
///
/// # Example
/// ```
/// use foodsplit::utils::text_input::TextInput;
///
/// let mut input = TextInput::new();
/// input.insert_char('h');
/// input.insert_char('i');
/// assert_eq!(input.text(), "hi");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    text: String,
    cursor: usize,
}

impl TextInput {
    /// Create a new empty text input.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a text input with initial text.
    pub fn with_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.chars().count();
        Self { text, cursor }
    }

    /// Get the current text as a string slice.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the current cursor position.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Whether no text has been entered. Whitespace counts as text.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Number of characters in the value.
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    /// Apply one editing operation.
    pub fn apply(&mut self, edit: TextEdit) {
        match edit {
            TextEdit::Insert(c) => self.insert_char(c),
            TextEdit::Backspace => self.backspace(),
            TextEdit::Delete => self.delete(),
            TextEdit::MoveLeft => self.move_left(),
            TextEdit::MoveRight => self.move_right(),
            TextEdit::Home => self.cursor = 0,
            TextEdit::End => self.cursor = self.len(),
            TextEdit::InsertStr(text) => text.chars().for_each(|c| self.insert_char(c)),
        }
    }

    /// Insert a character at the cursor position. Control characters are ignored.
    pub fn insert_char(&mut self, c: char) {
        if c.is_control() {
            return;
        }
        let byte_index = self
            .text
            .char_indices()
            .map(|(i, _)| i)
            .nth(self.cursor)
            .unwrap_or(self.text.len());
        self.text.insert(byte_index, c);
        self.cursor = (self.cursor + 1).min(self.len());
    }

    /// Delete the character before the cursor.
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            let before_cursor = self.text.chars().take(self.cursor - 1);
            let after_cursor = self.text.chars().skip(self.cursor);
            self.text = before_cursor.chain(after_cursor).collect();
            self.cursor -= 1;
        }
    }

    /// Delete the character at the cursor position.
    pub fn delete(&mut self) {
        if self.cursor < self.len() {
            let before_cursor = self.text.chars().take(self.cursor);
            let after_cursor = self.text.chars().skip(self.cursor + 1);
            self.text = before_cursor.chain(after_cursor).collect();
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.len() {
            self.cursor += 1;
        }
    }

    /// Check if an action is safe to process when a text input is focused.
    ///
    /// Returns false for actions whose plain-key bindings should be typed as
    /// text instead (like `LogOut` bound to `l`).
    pub fn is_action_allowed_when_focused(action: &Action) -> bool {
        matches!(
            action,
            Action::Cancel
                | Action::Confirm
                | Action::NextField
                | Action::PrevField
                | Action::MoveLeft
                | Action::MoveRight
                | Action::Home
                | Action::End
                | Action::Backspace
                | Action::DeleteChar
        )
    }
}
