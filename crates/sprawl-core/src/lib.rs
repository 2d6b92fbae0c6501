//! Core Sprawl library (content, reveal sequencer, links, config).

pub mod config;
pub mod content;
pub mod links;
pub mod logging;
pub mod reveal;
