//! Screen trait and associated types.
//!
//! Screens own their state, handle both rendering and events, and report what
//! should happen next through [`ScreenAction`] instead of switching screens
//! themselves.

use crate::config::Config;
use crate::keymap::Keymap;
use crate::navigation::{NavIntent, Route};
use crate::submit::{SubmitScheduler, SubmitTicket};
use anyhow::Result;
use crossterm::event::Event;
use ratatui::layout::Rect;
use ratatui::Frame;

/// Context provided for rendering screens.
pub struct RenderContext<'a> {
    /// Application configuration.
    pub config: &'a Config,
    /// Frame counter driving the busy spinner.
    pub spinner_tick: usize,
}

impl<'a> RenderContext<'a> {
    pub fn new(config: &'a Config, spinner_tick: usize) -> Self {
        Self {
            config,
            spinner_tick,
        }
    }

    pub fn keymap(&self) -> &Keymap {
        &self.config.keymap
    }
}

/// Context provided for handling events.
pub struct ScreenContext<'a> {
    /// Application configuration.
    pub config: &'a Config,
    /// Starts simulated submits on the app runtime.
    pub scheduler: &'a SubmitScheduler,
}

impl<'a> ScreenContext<'a> {
    pub fn new(config: &'a Config, scheduler: &'a SubmitScheduler) -> Self {
        Self { config, scheduler }
    }

    pub fn keymap(&self) -> &Keymap {
        &self.config.keymap
    }
}

/// Actions that a screen can return after handling an event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScreenAction {
    /// No action needed, stay on current screen.
    #[default]
    None,
    /// Ask the app to resolve and apply a navigation.
    Navigate(NavIntent),
    /// Return to the previous screen, if any.
    Back,
}

/// Trait for screen controllers.
///
/// # Example
///
/// ```rust,ignore
/// impl Screen for MyScreen {
///     fn route(&self) -> Route {
///         Route::Home
///     }
///
///     fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()> {
///         Ok(())
///     }
///
///     fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction> {
///         Ok(ScreenAction::Navigate(NavIntent::LogOut))
///     }
/// }
/// ```
pub trait Screen {
    /// The route this screen was mounted for.
    fn route(&self) -> Route;

    /// Render the screen.
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()>;

    /// Handle an input event.
    fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction>;

    /// Check if a text input is currently focused.
    ///
    /// When true, plain character keys are typed instead of triggering
    /// global bindings such as quit. Quit itself is handled by the app.
    fn is_input_focused(&self) -> bool {
        false
    }

    /// A submit started by this screen finished its delay.
    ///
    /// Screens that never submit keep the default and ignore it.
    fn on_submit_elapsed(&mut self, _ticket: SubmitTicket) -> ScreenAction {
        ScreenAction::None
    }

    /// Called when the screen becomes the current one.
    fn on_enter(&mut self, _ctx: &ScreenContext) -> Result<()> {
        Ok(())
    }

    /// Called when the screen stops being the current one.
    fn on_exit(&mut self, _ctx: &ScreenContext) -> Result<()> {
        Ok(())
    }
}
