//! One-shot timer schedulers.
//!
//! The revealer never sleeps itself; it hands each timer to a `Scheduler`.
//! `TokioScheduler` uses real time, `VirtualScheduler` a manually advanced
//! clock so callers can inspect state at exact offsets.

use std::collections::BTreeMap;
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use anyhow::{Context, Result};
use tokio::runtime::Handle;
use tokio_util::sync::CancellationToken;

/// Callback run when a timer fires.
pub type ScheduledTask = Box<dyn FnOnce() + Send + 'static>;

pub trait Scheduler {
    /// Runs `task` once, `delay` after this call, unless `cancel` fires first.
    fn schedule_once(&self, delay: Duration, cancel: CancellationToken, task: ScheduledTask);
}

// ============================================================================
// TokioScheduler
// ============================================================================

/// Real-time scheduler backed by tokio timers.
#[derive(Debug, Clone)]
pub struct TokioScheduler {
    handle: Handle,
}

impl TokioScheduler {
    pub fn new(handle: Handle) -> Self {
        Self { handle }
    }

    /// Uses the runtime the caller is running on.
    pub fn from_current() -> Result<Self> {
        let handle = Handle::try_current().context("No tokio runtime to schedule timers on")?;
        Ok(Self::new(handle))
    }
}

impl Scheduler for TokioScheduler {
    fn schedule_once(&self, delay: Duration, cancel: CancellationToken, task: ScheduledTask) {
        self.handle.spawn(async move {
            tokio::select! {
                biased;
                () = cancel.cancelled() => {}
                () = tokio::time::sleep(delay) => {
                    if !cancel.is_cancelled() {
                        task();
                    }
                }
            }
        });
    }
}

// ============================================================================
// VirtualScheduler
// ============================================================================

struct PendingTimer {
    cancel: CancellationToken,
    task: ScheduledTask,
}

#[derive(Default)]
struct VirtualClock {
    now: Duration,
    next_seq: u64,
    /// Keyed by (due time, schedule order) so equal deadlines keep insertion order.
    queue: BTreeMap<(Duration, u64), PendingTimer>,
}

/// Scheduler driven by an explicit clock. Nothing fires until `advance*` is called.
#[derive(Default)]
pub struct VirtualScheduler {
    clock: Mutex<VirtualClock>,
}

impl VirtualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time.
    pub fn now(&self) -> Duration {
        self.lock().now
    }

    /// Timers scheduled but neither fired nor cancelled.
    pub fn pending(&self) -> usize {
        self.lock()
            .queue
            .values()
            .filter(|timer| !timer.cancel.is_cancelled())
            .count()
    }

    /// Advances the clock by `by`. Returns the number of tasks run.
    pub fn advance(&self, by: Duration) -> usize {
        let target = self.now().saturating_add(by);
        self.advance_to(target)
    }

    /// Advances the clock to `target`, running every due timer in order.
    ///
    /// Tasks run without the clock locked, so they may schedule more timers;
    /// those fire in the same call if they fall due before `target`.
    /// Returns the number of tasks run.
    pub fn advance_to(&self, target: Duration) -> usize {
        let mut fired = 0;
        loop {
            let next = {
                let mut clock = self.lock();
                let next_due = clock.queue.first_key_value().map(|(&(at, _), _)| at);
                match next_due {
                    Some(at) if at <= target => {
                        clock.now = clock.now.max(at);
                        clock.queue.pop_first().map(|(_, timer)| timer)
                    }
                    _ => None,
                }
            };

            let Some(timer) = next else {
                break;
            };
            if timer.cancel.is_cancelled() {
                continue;
            }
            (timer.task)();
            fired += 1;
        }

        let mut clock = self.lock();
        clock.now = clock.now.max(target);
        fired
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, VirtualClock> {
        self.clock.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Scheduler for VirtualScheduler {
    fn schedule_once(&self, delay: Duration, cancel: CancellationToken, task: ScheduledTask) {
        let mut clock = self.lock();
        let due = clock.now.saturating_add(delay);
        let seq = clock.next_seq;
        clock.next_seq += 1;
        clock.queue.insert((due, seq), PendingTimer { cancel, task });
    }
}

impl std::fmt::Debug for VirtualScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let clock = self.lock();
        f.debug_struct("VirtualScheduler")
            .field("now", &clock.now)
            .field("queued", &clock.queue.len())
            .finish()
    }
}
