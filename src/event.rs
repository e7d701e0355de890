//! Messages delivered to the app loop from background tasks.

use crate::navigation::Route;
use crate::submit::SubmitTicket;
use tokio::sync::mpsc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// A simulated submit finished its delay.
    SubmitElapsed { origin: Route, ticket: SubmitTicket },
}

pub type AppEventSender = mpsc::UnboundedSender<AppEvent>;
pub type AppEventReceiver = mpsc::UnboundedReceiver<AppEvent>;

pub fn channel() -> (AppEventSender, AppEventReceiver) {
    mpsc::unbounded_channel()
}
