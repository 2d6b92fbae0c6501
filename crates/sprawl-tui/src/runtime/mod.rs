//! TUI runtime: owns the terminal, runs the event loop, executes effects.
//!
//! All side effects happen here; the reducer stays pure and produces effects.
//!
//! Reveal timers never touch state. Their callbacks push `UiEvent::Reveal`
//! into the inbox, which the loop drains each frame and feeds to the reducer,
//! so the session buffer is only ever mutated on this thread.

mod inbox;

use std::io::Stdout;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event;
use inbox::{UiEventReceiver, UiEventSender};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use sprawl_core::reveal::{RevealNotifier, TokioScheduler, VirtualScheduler};

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::state::AppState;
use crate::{render, terminal, update};

/// Frame cadence while the session is playing or the user is interacting.
pub const FRAME_DURATION: Duration = Duration::from_millis(16);

/// Poll duration when idle. Still short enough to blink the cursor.
pub const IDLE_POLL_DURATION: Duration = Duration::from_millis(100);

/// How the terminal session is played.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealMode {
    /// Real timers on the current tokio runtime.
    Animated,
    /// Virtual clock run to the end at startup.
    Finished,
}

/// Full-screen TUI runtime.
///
/// Terminal state is restored on drop and on panic.
pub struct TuiRuntime {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    pub state: AppState,
    inbox_tx: UiEventSender,
    inbox_rx: UiEventReceiver,
    mode: RevealMode,
    started: Instant,
    last_tick: Instant,
    last_terminal_event: Instant,
}

impl TuiRuntime {
    pub fn new(state: AppState, mode: RevealMode) -> Result<Self> {
        // Hook goes in before the alternate screen.
        terminal::install_panic_hook();
        let terminal = terminal::setup_terminal().context("Failed to setup terminal")?;
        let (inbox_tx, inbox_rx) = inbox::channel();

        let now = Instant::now();
        Ok(Self {
            terminal,
            state,
            inbox_tx,
            inbox_rx,
            mode,
            started: now,
            last_tick: now,
            last_terminal_event: now,
        })
    }

    /// Runs the main event loop until the user quits.
    pub fn run(&mut self) -> Result<()> {
        terminal::enable_input_features()?;
        self.activate_reveal()?;

        let result = self.event_loop();

        self.state.revealer.deactivate();
        let _ = terminal::disable_input_features();

        tracing::info!(
            revealed = self.state.revealer.buffer().revealed_count(),
            "Landing page closed"
        );
        result
    }

    fn activate_reveal(&mut self) -> Result<()> {
        let tx = self.inbox_tx.clone();
        let notify: RevealNotifier = Arc::new(move |fired| {
            // The receiver is gone only after the loop has exited.
            let _ = tx.send(UiEvent::Reveal(fired));
        });

        let activation = match self.mode {
            RevealMode::Animated => {
                let scheduler = TokioScheduler::from_current()?;
                self.state.revealer.activate(&scheduler, notify)
            }
            RevealMode::Finished => {
                let scheduler = VirtualScheduler::new();
                let activation = self.state.revealer.activate(&scheduler, notify);
                scheduler.advance_to(self.state.revealer.script().total_duration());
                activation
            }
        };

        tracing::debug!(?activation, mode = ?self.mode, "Terminal session activated");
        Ok(())
    }

    fn event_loop(&mut self) -> Result<()> {
        let mut dirty = true;

        while !self.state.should_quit {
            let mut events = self.collect_events()?;

            let size = self.terminal.size()?;
            events.insert(
                0,
                UiEvent::Frame {
                    width: size.width,
                    height: size.height,
                },
            );

            for event in events {
                match &event {
                    UiEvent::Terminal(_) => self.last_terminal_event = Instant::now(),
                    UiEvent::Tick { .. } => dirty = true,
                    _ => {}
                }

                let effects = update::update(&mut self.state, event);
                self.execute_effects(effects);
            }

            if dirty {
                self.terminal.draw(|frame| {
                    render::render(&self.state, frame);
                })?;
                dirty = false;
            }
        }

        Ok(())
    }

    // ========================================================================
    // Event Collection
    // ========================================================================

    fn collect_events(&mut self) -> Result<Vec<UiEvent>> {
        let mut events = Vec::new();

        let playing = self.state.revealer.is_active() && !self.state.revealer.is_complete();
        let recent_terminal_activity = self.last_terminal_event.elapsed() < IDLE_POLL_DURATION;
        let tick_interval = if playing || recent_terminal_activity {
            FRAME_DURATION
        } else {
            IDLE_POLL_DURATION
        };

        while let Ok(ev) = self.inbox_rx.try_recv() {
            events.push(ev);
        }

        let time_until_tick = tick_interval.saturating_sub(self.last_tick.elapsed());
        let poll_duration = if events.is_empty() {
            time_until_tick
        } else {
            Duration::ZERO
        };

        if event::poll(poll_duration)? {
            events.push(UiEvent::Terminal(event::read()?));
            while event::poll(Duration::ZERO)? {
                events.push(UiEvent::Terminal(event::read()?));
            }
        }

        if self.last_tick.elapsed() >= tick_interval {
            events.push(UiEvent::Tick {
                elapsed: self.started.elapsed(),
            });
            self.last_tick = Instant::now();
        }

        Ok(events)
    }

    // ========================================================================
    // Effect Dispatch
    // ========================================================================

    fn execute_effects(&mut self, effects: Vec<UiEffect>) {
        for effect in effects {
            self.execute_effect(effect);
        }
    }

    fn execute_effect(&mut self, effect: UiEffect) {
        match effect {
            UiEffect::Quit => {
                self.state.should_quit = true;
            }
            UiEffect::OpenLink { url } => {
                if let Err(err) = open::that(&url) {
                    tracing::warn!(%url, "Failed to open link: {err}");
                    self.state.notice = Some(format!("Could not open {url}"));
                }
            }
        }
    }
}

impl Drop for TuiRuntime {
    fn drop(&mut self) {
        let _ = terminal::restore_terminal();
    }
}
