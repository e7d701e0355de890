//! Screen controllers for the application.
//!
//! Each screen implements the [`Screen`] trait, owns its state, and handles
//! both rendering and events. Screens are mounted per route by [`mount`] and
//! live in the app's navigation stack until they are popped or replaced.
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │                      App                        │
//! │  NavigationStack<Box<dyn Screen>>               │
//! │    current.handle_event(event, ctx)             │
//! │      -> ScreenAction::Navigate(intent)          │
//! │      -> resolve(current.route(), intent)        │
//! │      -> stack.apply(transition)                 │
//! └─────────────────────────────────────────────────┘
//! ```

mod common;
pub mod home;
pub mod login;
pub mod screen_trait;
pub mod signup;

pub use home::HomeScreen;
pub use login::LoginScreen;
pub use screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext};
pub use signup::SignUpScreen;

use crate::navigation::Route;

/// Build a fresh screen for `route`.
pub fn mount(route: Route) -> Box<dyn Screen> {
    match route {
        Route::Home => Box::new(HomeScreen::new()),
        Route::Login => Box::new(LoginScreen::new()),
        Route::SignUp => Box::new(SignUpScreen::new()),
    }
}
