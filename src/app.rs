use crate::config::Config;
use crate::event::{self, AppEvent, AppEventReceiver};
use crate::keymap::Action;
use crate::navigation::{resolve, NavigationStack, Navigator, Route};
use crate::screens::{self, RenderContext, Screen, ScreenAction, ScreenContext};
use crate::submit::SubmitScheduler;
use crate::tui::Tui;
use anyhow::{Context, Result};
use crossterm::event::{Event, KeyEventKind};
use ratatui::Frame;
use std::time::Duration;
use tokio::runtime::{Builder, Runtime};
use tokio::sync::mpsc::error::TryRecvError;
use tracing::{debug, info, warn};

/// How long the loop waits for input before redrawing.
const TICK_RATE: Duration = Duration::from_millis(50);

/// Main application state
pub struct App {
    config: Config,
    /// Declared before the runtime so screens, and their pending submits,
    /// are dropped first.
    nav: NavigationStack<Box<dyn Screen>>,
    scheduler: SubmitScheduler,
    inbox: AppEventReceiver,
    should_quit: bool,
    spinner_tick: usize,
    runtime: Runtime,
}

impl App {
    pub fn new(config: Config) -> Result<Self> {
        let runtime = Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("foodsplit-submit")
            .enable_time()
            .build()
            .context("Failed to create tokio runtime")?;
        let (inbox_tx, inbox) = event::channel();
        let scheduler = SubmitScheduler::new(runtime.handle().clone(), inbox_tx, config.submit_delay());
        let nav: NavigationStack<Box<dyn Screen>> = NavigationStack::new(Route::Login, screens::mount);

        let mut app = Self {
            config,
            nav,
            scheduler,
            inbox,
            should_quit: false,
            spinner_tick: 0,
            runtime,
        };
        app.enter_current()?;
        Ok(app)
    }

    pub fn run(&mut self) -> Result<()> {
        let mut tui = Tui::new()?;
        tui.enter()?;
        let result = self.event_loop(&mut tui);
        tui.exit()?;
        result
    }

    fn event_loop(&mut self, tui: &mut Tui) -> Result<()> {
        info!(
            "Starting on {} (submit delay {:?}, {} keymap)",
            self.nav.current(),
            self.scheduler.delay(),
            self.config.keymap.preset.name()
        );

        while !self.should_quit {
            let mut render_result = Ok(());
            tui.terminal_mut()
                .draw(|frame| render_result = self.render(frame))
                .context("Failed to draw frame")?;
            render_result?;

            if let Some(event) = tui.poll_event(TICK_RATE)? {
                self.handle_event(event)?;
            }
            self.process_pending_events()?;
            self.spinner_tick = self.spinner_tick.wrapping_add(1);
        }

        info!("Quitting from {}", self.nav.current());
        Ok(())
    }

    /// Draw the current screen into `frame`.
    pub fn render(&mut self, frame: &mut Frame) -> Result<()> {
        let ctx = RenderContext::new(&self.config, self.spinner_tick);
        let area = frame.area();
        self.nav.current_entry_mut().render(frame, area, &ctx)
    }

    /// Route a terminal event to the current screen.
    pub fn handle_event(&mut self, event: Event) -> Result<()> {
        if let Event::Key(key) = &event {
            if key.kind == KeyEventKind::Press {
                let keymap = &self.config.keymap;
                let action = if self.nav.current_entry().is_input_focused() {
                    keymap.get_input_action(key.code, key.modifiers)
                } else {
                    keymap.get_action(key.code, key.modifiers)
                };
                if action == Some(Action::Quit) {
                    self.should_quit = true;
                    return Ok(());
                }
            }
        }

        let ctx = ScreenContext::new(&self.config, &self.scheduler);
        let action = self.nav.current_entry_mut().handle_event(event, &ctx)?;
        self.apply_action(action)
    }

    /// Deliver any completed submits. Returns how many events were read.
    pub fn process_pending_events(&mut self) -> Result<usize> {
        let mut handled = 0;
        loop {
            match self.inbox.try_recv() {
                Ok(event) => {
                    handled += 1;
                    self.handle_app_event(event)?;
                }
                Err(TryRecvError::Empty | TryRecvError::Disconnected) => return Ok(handled),
            }
        }
    }

    fn handle_app_event(&mut self, event: AppEvent) -> Result<()> {
        match event {
            AppEvent::SubmitElapsed { origin, ticket } => {
                let current = self.nav.current();
                if origin != current {
                    debug!(
                        "Dropping submit {:?} from {} while on {}",
                        ticket, origin, current
                    );
                    return Ok(());
                }
                let action = self.nav.current_entry_mut().on_submit_elapsed(ticket);
                self.apply_action(action)
            }
        }
    }

    fn apply_action(&mut self, action: ScreenAction) -> Result<()> {
        match action {
            ScreenAction::None => Ok(()),
            ScreenAction::Navigate(intent) => {
                let from = self.nav.current();
                let Some(transition) = resolve(from, intent) else {
                    warn!("No transition for {:?} on {}", intent, from);
                    return Ok(());
                };
                self.exit_current()?;
                self.nav.apply(transition);
                info!("{:?} on {}: {:?}", intent, from, transition);
                self.enter_current()
            }
            ScreenAction::Back => {
                if self.nav.depth() < 2 {
                    debug!("Back on {} with no history", self.nav.current());
                    return Ok(());
                }
                self.exit_current()?;
                self.nav.go_back();
                self.enter_current()
            }
        }
    }

    fn enter_current(&mut self) -> Result<()> {
        let ctx = ScreenContext::new(&self.config, &self.scheduler);
        self.nav.current_entry_mut().on_enter(&ctx)
    }

    fn exit_current(&mut self) -> Result<()> {
        let ctx = ScreenContext::new(&self.config, &self.scheduler);
        self.nav.current_entry_mut().on_exit(&ctx)
    }

    pub fn current_route(&self) -> Route {
        self.nav.current()
    }

    /// Routes from oldest to current.
    pub fn history(&self) -> Vec<Route> {
        self.nav.history()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Block until a submit completes or `timeout` passes, then deliver it.
    ///
    /// Returns false on timeout. Lets callers without a terminal loop drive
    /// the app deterministically.
    pub fn wait_for_submit(&mut self, timeout: Duration) -> Result<bool> {
        let inbox = &mut self.inbox;
        let received = self
            .runtime
            .block_on(async { tokio::time::timeout(timeout, inbox.recv()).await });
        match received {
            Ok(Some(event)) => {
                self.handle_app_event(event)?;
                Ok(true)
            }
            Ok(None) | Err(_) => Ok(false),
        }
    }
}
