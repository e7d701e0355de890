//! Screen routes, the transition table and the navigation stack.
//!
//! Screens never switch screens themselves. They emit a [`NavIntent`]; the app
//! resolves it against the current [`Route`] into a [`Transition`] and applies
//! it to a [`Navigator`].

use std::fmt;
use tracing::debug;

/// Application screens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Login,
    SignUp,
}

impl Route {
    pub fn name(self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Login => "Login",
            Route::SignUp => "SignUp",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What a screen asks for, independent of where it leads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavIntent {
    /// The simulated submit completed.
    Authenticated,
    /// "Don't have an account? Sign up"
    ShowSignUp,
    /// "Already have an account? Log in"
    ShowLogin,
    /// "Log Out" on the home screen
    LogOut,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Keep the current screen in history.
    Push(Route),
    /// Drop the current screen from history.
    Replace(Route),
}

/// Look up the transition for an intent raised on `from`.
///
/// There is no notion of session here: reaching Home only means a submit
/// timer fired.
pub fn resolve(from: Route, intent: NavIntent) -> Option<Transition> {
    match (from, intent) {
        (Route::Login, NavIntent::Authenticated) => Some(Transition::Replace(Route::Home)),
        (Route::Login, NavIntent::ShowSignUp) => Some(Transition::Push(Route::SignUp)),
        (Route::SignUp, NavIntent::Authenticated) => Some(Transition::Replace(Route::Home)),
        (Route::SignUp, NavIntent::ShowLogin) => Some(Transition::Push(Route::Login)),
        (Route::Home, NavIntent::LogOut) => Some(Transition::Push(Route::Login)),
        _ => None,
    }
}

/// The routing collaborator screens are driven through.
pub trait Navigator {
    /// Push `route`, keeping the current screen in history.
    fn navigate_to(&mut self, route: Route);

    /// Replace the current screen with `route`.
    fn replace_with(&mut self, route: Route);

    /// Pop the current screen. Returns false when there is nothing to go back to.
    fn go_back(&mut self) -> bool;

    fn current(&self) -> Route;

    /// Number of screens in history, including the current one.
    fn depth(&self) -> usize;

    fn apply(&mut self, transition: Transition) {
        match transition {
            Transition::Push(route) => self.navigate_to(route),
            Transition::Replace(route) => self.replace_with(route),
        }
    }
}

/// History of mounted screens.
///
/// Each entry pairs a route with the value `mount` produced for it. Removing
/// an entry drops that value, which is how screens release their resources.
pub struct NavigationStack<T> {
    top: (Route, T),
    below: Vec<(Route, T)>,
    mount: Box<dyn FnMut(Route) -> T>,
}

impl<T> NavigationStack<T> {
    pub fn new(initial: Route, mut mount: impl FnMut(Route) -> T + 'static) -> Self {
        let first = mount(initial);
        Self {
            top: (initial, first),
            below: Vec::new(),
            mount: Box::new(mount),
        }
    }

    /// The value mounted for the current route.
    pub fn current_entry(&self) -> &T {
        &self.top.1
    }

    pub fn current_entry_mut(&mut self) -> &mut T {
        &mut self.top.1
    }

    /// Routes from oldest to current.
    pub fn history(&self) -> Vec<Route> {
        self.below
            .iter()
            .map(|(route, _)| *route)
            .chain(std::iter::once(self.top.0))
            .collect()
    }

    fn mounted(&mut self, route: Route) -> (Route, T) {
        (route, (self.mount)(route))
    }
}

impl<T> Navigator for NavigationStack<T> {
    fn navigate_to(&mut self, route: Route) {
        debug!("Push {} -> {}", self.top.0, route);
        let next = self.mounted(route);
        let previous = std::mem::replace(&mut self.top, next);
        self.below.push(previous);
    }

    fn replace_with(&mut self, route: Route) {
        debug!("Replace {} -> {}", self.top.0, route);
        let next = self.mounted(route);
        drop(std::mem::replace(&mut self.top, next));
    }

    fn go_back(&mut self) -> bool {
        let Some(previous) = self.below.pop() else {
            return false;
        };
        debug!("Back {} -> {}", self.top.0, previous.0);
        drop(std::mem::replace(&mut self.top, previous));
        true
    }

    fn current(&self) -> Route {
        self.top.0
    }

    fn depth(&self) -> usize {
        self.below.len() + 1
    }
}
