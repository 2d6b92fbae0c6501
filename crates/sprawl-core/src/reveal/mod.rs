//! Sequenced text reveal.
//!
//! ## Module Structure
//!
//! - `script.rs`: `RevealEntry`, `LineCategory`, `RevealScript` (immutable input)
//! - `buffer.rs`: `DisplayBuffer`, `DisplayLine` (what has been shown)
//! - `scheduler.rs`: `Scheduler` trait, `TokioScheduler`, `VirtualScheduler`
//! - `revealer.rs`: `Revealer` lifecycle (activate, fire, deactivate)

mod buffer;
mod revealer;
mod scheduler;
mod script;

pub use buffer::{DisplayBuffer, DisplayLine};
pub use revealer::{ActivationId, RevealFired, RevealNotifier, Revealer};
pub use scheduler::{ScheduledTask, Scheduler, TokioScheduler, VirtualScheduler};
pub use script::{LineCategory, RevealEntry, RevealScript};
