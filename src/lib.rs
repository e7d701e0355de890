//! Food Split - sign in and sign up screens for the terminal
//!
//! This library provides the form state, validators, simulated submit
//! timers and navigation stack behind the `foodsplit` TUI.

// Core modules
pub mod app;
pub mod cli;
pub mod config;
pub mod event;
pub mod forms;
pub mod keymap;
pub mod navigation;
pub mod screens;
pub mod styles;
pub mod submit;
pub mod tui;
pub mod utils;
pub mod validation;
pub mod widgets;

// Re-exports for convenience
pub use app::App;
pub use config::Config;
pub use navigation::{NavIntent, Route, Transition};

// Keymap re-exports (used by Config and for external API)
pub use keymap::{Action, KeyBinding, Keymap, KeymapPreset};
