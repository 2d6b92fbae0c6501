//! The sequenced text revealer.
//!
//! Entries are grouped into batches of equal delay (list order kept inside a
//! batch) and one timer is scheduled per batch. Timers never touch the buffer:
//! they report a `RevealFired` through the notifier and the owner feeds it back
//! into `Revealer::on_fired` on its own thread.
//!
//! All timers of an activation share one `CancellationToken`, held through a
//! drop guard. Deactivating (or dropping the revealer) releases the guard,
//! which cancels every pending timer at once.

use std::sync::{Arc, mpsc};
use std::time::Duration;

use tokio_util::sync::{CancellationToken, DropGuard};

use super::buffer::DisplayBuffer;
use super::scheduler::{Scheduler, VirtualScheduler};
use super::script::RevealScript;

/// Identifies one activation; firings from older activations are discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivationId(pub u64);

/// Sent by a timer when its batch is due.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealFired {
    pub activation: ActivationId,
    pub batch: usize,
}

/// Delivers timer firings back to the revealer's owner.
pub type RevealNotifier = Arc<dyn Fn(RevealFired) + Send + Sync>;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Batch {
    delay: Duration,
    /// Entry indices in script order.
    entries: Vec<usize>,
}

struct Activation {
    id: ActivationId,
    _timers: DropGuard,
}

pub struct Revealer {
    script: Arc<RevealScript>,
    batches: Vec<Batch>,
    buffer: DisplayBuffer,
    /// Number of leading batches already appended.
    revealed_batches: usize,
    activation: Option<Activation>,
    next_activation: u64,
}

impl Revealer {
    pub fn new(script: Arc<RevealScript>) -> Self {
        let batches = plan_batches(&script);
        let buffer = DisplayBuffer::seeded(script.seed());
        Self {
            script,
            batches,
            buffer,
            revealed_batches: 0,
            activation: None,
            next_activation: 0,
        }
    }

    pub fn script(&self) -> &RevealScript {
        &self.script
    }

    pub fn buffer(&self) -> &DisplayBuffer {
        &self.buffer
    }

    pub fn is_active(&self) -> bool {
        self.activation.is_some()
    }

    /// True once every entry has been appended.
    pub fn is_complete(&self) -> bool {
        self.revealed_batches == self.batches.len()
    }

    pub fn activation(&self) -> Option<ActivationId> {
        self.activation.as_ref().map(|activation| activation.id)
    }

    /// Starts playback: resets the buffer to the seed and schedules every batch.
    ///
    /// An existing activation is torn down first, so this doubles as remount.
    pub fn activate(&mut self, scheduler: &dyn Scheduler, notify: RevealNotifier) -> ActivationId {
        self.deactivate();

        let id = ActivationId(self.next_activation);
        self.next_activation = self.next_activation.wrapping_add(1);
        self.buffer = DisplayBuffer::seeded(self.script.seed());
        self.revealed_batches = 0;

        let cancel = CancellationToken::new();
        for (batch, plan) in self.batches.iter().enumerate() {
            let notify = Arc::clone(&notify);
            scheduler.schedule_once(
                plan.delay,
                cancel.clone(),
                Box::new(move || notify(RevealFired { activation: id, batch })),
            );
        }

        tracing::debug!(
            activation = id.0,
            batches = self.batches.len(),
            entries = self.script.entries().len(),
            "revealer activated"
        );

        self.activation = Some(Activation {
            id,
            _timers: cancel.drop_guard(),
        });
        id
    }

    /// Cancels all pending timers. Safe to call when inactive.
    pub fn deactivate(&mut self) {
        if let Some(activation) = self.activation.take() {
            tracing::debug!(
                activation = activation.id.0,
                revealed = self.buffer.revealed_count(),
                "revealer deactivated"
            );
        }
    }

    /// Applies a timer firing. Returns the number of lines appended.
    ///
    /// Firing batch `k` appends every batch up to `k` not shown yet, so a
    /// late delivery of an earlier batch is a no-op and order never breaks.
    pub fn on_fired(&mut self, fired: RevealFired) -> usize {
        if self.activation() != Some(fired.activation) {
            tracing::trace!(
                activation = fired.activation.0,
                "ignoring firing from inactive activation"
            );
            return 0;
        }
        if fired.batch < self.revealed_batches || fired.batch >= self.batches.len() {
            return 0;
        }

        let before = self.buffer.len();
        for batch in &self.batches[self.revealed_batches..=fired.batch] {
            for &index in &batch.entries {
                self.buffer.push_revealed(&self.script.entries()[index]);
            }
        }
        self.revealed_batches = fired.batch + 1;

        let appended = self.buffer.len() - before;
        tracing::trace!(batch = fired.batch, appended, "revealed lines");
        appended
    }

    /// The buffer as it looks `at` after activation, computed on a virtual clock.
    pub fn snapshot_at(script: Arc<RevealScript>, at: Duration) -> DisplayBuffer {
        let scheduler = VirtualScheduler::new();
        let (tx, rx) = mpsc::channel();
        let notify: RevealNotifier = Arc::new(move |fired| {
            let _ = tx.send(fired);
        });

        let mut revealer = Revealer::new(script);
        revealer.activate(&scheduler, notify);
        scheduler.advance_to(at);
        for fired in rx.try_iter() {
            revealer.on_fired(fired);
        }
        revealer.deactivate();
        std::mem::take(&mut revealer.buffer)
    }
}

impl Drop for Revealer {
    fn drop(&mut self) {
        self.deactivate();
    }
}

impl std::fmt::Debug for Revealer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Revealer")
            .field("activation", &self.activation())
            .field("revealed_batches", &self.revealed_batches)
            .field("batches", &self.batches.len())
            .field("lines", &self.buffer.len())
            .finish_non_exhaustive()
    }
}

/// Groups entries by delay. Stable: equal delays keep script order.
fn plan_batches(script: &RevealScript) -> Vec<Batch> {
    let mut order: Vec<usize> = (0..script.entries().len()).collect();
    order.sort_by_key(|&index| script.entries()[index].delay);

    let mut batches: Vec<Batch> = Vec::new();
    for index in order {
        let delay = script.entries()[index].delay;
        match batches.last_mut() {
            Some(batch) if batch.delay == delay => batch.entries.push(index),
            _ => batches.push(Batch {
                delay,
                entries: vec![index],
            }),
        }
    }
    batches
}
