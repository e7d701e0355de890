//! Simulated submit requests.
//!
//! A submit is a single-shot timer standing in for a network round trip. The
//! screen that starts it owns the returned [`PendingSubmit`]; dropping that
//! handle cancels the timer, so a screen that is gone never hears back.

use crate::event::{AppEvent, AppEventSender};
use crate::navigation::Route;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio_util::sync::{CancellationToken, DropGuard};
use tracing::{debug, info};

/// Default delay of the simulated request.
pub const DEFAULT_SUBMIT_DELAY: Duration = Duration::from_millis(900);

/// Identifies one scheduled submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubmitTicket(u64);

/// Spawns submit timers on the app runtime.
#[derive(Clone)]
pub struct SubmitScheduler {
    runtime: Handle,
    inbox: AppEventSender,
    delay: Duration,
    next_ticket: Arc<AtomicU64>,
}

impl SubmitScheduler {
    pub fn new(runtime: Handle, inbox: AppEventSender, delay: Duration) -> Self {
        Self {
            runtime,
            inbox,
            delay,
            next_ticket: Arc::new(AtomicU64::new(1)),
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Start the timer for a submit raised on `origin`.
    ///
    /// When the delay elapses an [`AppEvent::SubmitElapsed`] is sent, unless
    /// the returned handle was dropped or cancelled first.
    pub fn schedule(&self, origin: Route) -> PendingSubmit {
        let ticket = SubmitTicket(self.next_ticket.fetch_add(1, Ordering::Relaxed));
        let token = CancellationToken::new();
        let cancelled = token.clone();
        let inbox = self.inbox.clone();
        let delay = self.delay;

        info!("Submitting from {} ({:?}, {:?})", origin, ticket, delay);
        self.runtime.spawn(async move {
            tokio::select! {
                biased;
                () = cancelled.cancelled() => {
                    debug!("Submit {:?} from {} cancelled", ticket, origin);
                }
                () = tokio::time::sleep(delay) => {
                    if inbox.send(AppEvent::SubmitElapsed { origin, ticket }).is_err() {
                        debug!("Inbox closed before submit {:?} completed", ticket);
                    }
                }
            }
        });

        PendingSubmit {
            ticket,
            origin,
            token: token.clone(),
            _guard: token.drop_guard(),
        }
    }
}

/// Handle to an in-flight submit. Cancels the timer when dropped.
#[derive(Debug)]
pub struct PendingSubmit {
    ticket: SubmitTicket,
    origin: Route,
    token: CancellationToken,
    _guard: DropGuard,
}

impl PendingSubmit {
    pub fn ticket(&self) -> SubmitTicket {
        self.ticket
    }

    pub fn origin(&self) -> Route {
        self.origin
    }

    pub fn cancel(&self) {
        self.token.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event;
    use tokio::runtime::Runtime;

    fn scheduler(rt: &Runtime, delay_ms: u64) -> (SubmitScheduler, event::AppEventReceiver) {
        let (tx, rx) = event::channel();
        (
            SubmitScheduler::new(rt.handle().clone(), tx, Duration::from_millis(delay_ms)),
            rx,
        )
    }

    #[test]
    fn test_elapsed_event_after_delay() {
        let rt = Runtime::new().unwrap();
        let (scheduler, mut rx) = scheduler(&rt, 10);

        let pending = scheduler.schedule(Route::Login);
        let event = rt.block_on(async {
            tokio::time::timeout(Duration::from_secs(5), rx.recv()).await
        });
        assert_eq!(
            event.unwrap(),
            Some(AppEvent::SubmitElapsed {
                origin: Route::Login,
                ticket: pending.ticket(),
            })
        );
    }

    #[test]
    fn test_drop_cancels_timer() {
        let rt = Runtime::new().unwrap();
        let (scheduler, mut rx) = scheduler(&rt, 50);

        let pending = scheduler.schedule(Route::SignUp);
        drop(pending);

        let event = rt.block_on(async {
            tokio::time::timeout(Duration::from_millis(300), rx.recv()).await
        });
        assert!(event.is_err(), "cancelled submit must not report back");
    }

    #[test]
    fn test_cancel_stops_delivery_while_handle_lives() {
        let rt = Runtime::new().unwrap();
        let (scheduler, mut rx) = scheduler(&rt, 50);

        let pending = scheduler.schedule(Route::Login);
        pending.cancel();

        let event = rt.block_on(async {
            tokio::time::timeout(Duration::from_millis(300), rx.recv()).await
        });
        assert!(event.is_err(), "cancelled submit must not report back");
        drop(pending);
    }

    #[test]
    fn test_tickets_are_unique() {
        let rt = Runtime::new().unwrap();
        let (scheduler, _rx) = scheduler(&rt, 1_000);

        let a = scheduler.schedule(Route::Login);
        let b = scheduler.clone().schedule(Route::Login);
        assert_ne!(a.ticket(), b.ticket());
        assert_eq!(a.origin(), Route::Login);
    }
}
