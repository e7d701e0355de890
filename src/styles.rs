//! Theme and style system for Food Split
//!
//! Provides consistent styling across the screens with support for
//! light, dark and colorless terminals.

use ratatui::style::{Color, Modifier, Style};
use std::str::FromStr;
use std::sync::{PoisonError, RwLock};

/// Global theme instance (supports runtime updates)
static THEME: RwLock<Theme> = RwLock::new(Theme::dark());

/// Initialize the global theme (call once at startup, or to update at runtime)
pub fn init_theme(theme_type: ThemeType) {
    let mut theme = THEME.write().unwrap_or_else(PoisonError::into_inner);
    *theme = Theme::new(theme_type);
}

/// Get the current theme
pub fn theme() -> Theme {
    THEME.read().unwrap_or_else(PoisonError::into_inner).clone()
}

/// Theme type selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeType {
    #[default]
    Dark,
    Light,
    /// Disable all UI colors (equivalent to `NO_COLOR=1` / `--no-colors`)
    NoColor,
}

impl FromStr for ThemeType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_lowercase().as_str() {
            "light" => ThemeType::Light,
            "nocolor" | "no-color" | "no_color" => ThemeType::NoColor,
            _ => ThemeType::Dark,
        })
    }
}

/// Color palette for the application
#[derive(Debug, Clone)]
pub struct Theme {
    pub theme_type: ThemeType,

    /// Screen titles
    pub title: Color,
    /// Secondary links ("Sign up", "Log in")
    pub link: Color,
    /// Inline validation errors and invalid field borders
    pub error: Color,
    /// Confirmation text on the home screen
    pub success: Color,

    pub text: Color,
    pub text_muted: Color,

    pub border: Color,
    pub border_focused: Color,

    /// Primary button fill and label
    pub button_bg: Color,
    pub button_fg: Color,
    /// Fill of a disabled primary button
    pub button_disabled_bg: Color,
}

impl Theme {
    pub fn new(theme_type: ThemeType) -> Self {
        match theme_type {
            ThemeType::Dark => Self::dark(),
            ThemeType::Light => Self::light(),
            ThemeType::NoColor => Self::no_color(),
        }
    }

    /// Dark theme - for dark terminal backgrounds
    pub const fn dark() -> Self {
        Self {
            theme_type: ThemeType::Dark,
            title: Color::White,
            link: Color::Rgb(14, 165, 233),
            error: Color::Rgb(239, 68, 68),
            success: Color::Green,
            text: Color::White,
            text_muted: Color::Rgb(156, 163, 175),
            border: Color::DarkGray,
            border_focused: Color::Rgb(59, 130, 246),
            button_bg: Color::Rgb(59, 130, 246),
            button_fg: Color::White,
            button_disabled_bg: Color::Rgb(55, 65, 81),
        }
    }

    /// Light theme - for light terminal backgrounds
    pub const fn light() -> Self {
        Self {
            theme_type: ThemeType::Light,
            title: Color::Rgb(17, 24, 39),
            link: Color::Rgb(14, 165, 233),
            error: Color::Rgb(239, 68, 68),
            success: Color::Rgb(21, 128, 61),
            text: Color::Rgb(55, 65, 81),
            text_muted: Color::Rgb(107, 114, 128),
            border: Color::Rgb(229, 231, 235),
            border_focused: Color::Rgb(17, 24, 39),
            button_bg: Color::Rgb(17, 24, 39),
            button_fg: Color::White,
            button_disabled_bg: Color::Rgb(156, 163, 175),
        }
    }

    /// No-color theme. The style helpers below avoid setting fg/bg in this
    /// mode so the terminal defaults are used.
    pub const fn no_color() -> Self {
        Self {
            theme_type: ThemeType::NoColor,
            title: Color::Reset,
            link: Color::Reset,
            error: Color::Reset,
            success: Color::Reset,
            text: Color::Reset,
            text_muted: Color::Reset,
            border: Color::Reset,
            border_focused: Color::Reset,
            button_bg: Color::Reset,
            button_fg: Color::Reset,
            button_disabled_bg: Color::Reset,
        }
    }

    fn is_plain(&self) -> bool {
        self.theme_type == ThemeType::NoColor
    }

    // === Style Helpers ===

    pub fn title_style(&self) -> Style {
        if self.is_plain() {
            return Style::default().add_modifier(Modifier::BOLD);
        }
        Style::default().fg(self.title).add_modifier(Modifier::BOLD)
    }

    pub fn text_style(&self) -> Style {
        if self.is_plain() {
            return Style::default();
        }
        Style::default().fg(self.text)
    }

    pub fn muted_style(&self) -> Style {
        if self.is_plain() {
            return Style::default().add_modifier(Modifier::DIM);
        }
        Style::default().fg(self.text_muted)
    }

    pub fn link_style(&self) -> Style {
        if self.is_plain() {
            return Style::default().add_modifier(Modifier::UNDERLINED);
        }
        Style::default().fg(self.link).add_modifier(Modifier::BOLD)
    }

    pub fn success_style(&self) -> Style {
        if self.is_plain() {
            return Style::default().add_modifier(Modifier::BOLD);
        }
        Style::default().fg(self.success)
    }

    pub fn error_style(&self) -> Style {
        if self.is_plain() {
            return Style::default().add_modifier(Modifier::ITALIC);
        }
        Style::default().fg(self.error)
    }

    pub fn border_style(&self) -> Style {
        if self.is_plain() {
            return Style::default();
        }
        Style::default().fg(self.border)
    }

    pub fn border_focused_style(&self) -> Style {
        if self.is_plain() {
            return Style::default().add_modifier(Modifier::BOLD);
        }
        Style::default().fg(self.border_focused)
    }

    /// Border of a field that currently shows a validation error
    pub fn border_error_style(&self) -> Style {
        if self.is_plain() {
            return Style::default().add_modifier(Modifier::BOLD);
        }
        Style::default().fg(self.error)
    }

    pub fn placeholder_style(&self) -> Style {
        self.muted_style()
    }

    /// Primary button, enabled or not
    pub fn button_style(&self, enabled: bool) -> Style {
        match (self.is_plain(), enabled) {
            (true, true) => Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED),
            (true, false) => Style::default().add_modifier(Modifier::DIM),
            (false, true) => Style::default()
                .fg(self.button_fg)
                .bg(self.button_bg)
                .add_modifier(Modifier::BOLD),
            (false, false) => Style::default()
                .fg(self.text_muted)
                .bg(self.button_disabled_bg),
        }
    }
}
