//! Headless rendering: the page as plain text on stdout.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use sprawl_core::config::Config;
use sprawl_core::reveal::{RevealScript, Revealer};

pub fn run(config: &Config, file: Option<&Path>, width: usize, at_ms: Option<u64>) -> Result<()> {
    let content = super::resolve_content(config, file)?;
    let script = Arc::new(RevealScript::terminal_session());
    let at = at_ms.map_or_else(|| script.total_duration(), Duration::from_millis);

    let session = Revealer::snapshot_at(script, at);
    tracing::debug!(
        width,
        at_ms = at.as_millis() as u64,
        revealed = session.revealed_count(),
        "Rendering page"
    );

    print!("{}", sprawl_tui::render_plain(&content, &session, width));
    Ok(())
}
