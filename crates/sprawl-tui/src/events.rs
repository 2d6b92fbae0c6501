//! UI event types.
//!
//! Everything the reducer reacts to arrives as a `UiEvent`: terminal input,
//! the per-frame size check, ticks, and reveal timers firing.

use std::time::Duration;

use crossterm::event::Event;
use sprawl_core::reveal::RevealFired;

#[derive(Debug, Clone)]
pub enum UiEvent {
    /// Periodic tick; `elapsed` is the time since the runtime started.
    Tick { elapsed: Duration },

    /// Current terminal size, sent before the other events of a frame.
    Frame { width: u16, height: u16 },

    /// Raw terminal input.
    Terminal(Event),

    /// A reveal timer fired.
    Reveal(RevealFired),
}
