//! Interactive landing page.

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use sprawl_core::config::Config;
use sprawl_core::reveal::RevealScript;
use sprawl_tui::RevealMode;

pub fn run(config: &Config, file: Option<&Path>, no_animation: bool) -> Result<()> {
    let content = super::resolve_content(config, file)?;
    let base_url = config.base_url()?;
    let mode = if config.animate && !no_animation {
        RevealMode::Animated
    } else {
        RevealMode::Finished
    };

    sprawl_tui::run_landing_page(
        content,
        Arc::new(RevealScript::terminal_session()),
        base_url,
        mode,
    )
}
