//! CLI command handlers.

pub mod config;
pub mod content;
pub mod render;
pub mod view;

use std::path::Path;

use anyhow::Result;
use sprawl_core::config::Config;
use sprawl_core::content::{ContentData, ContentOverride};

/// Built-in content with overrides applied: sections from `file` win, then
/// sections from the config file's `[content]` table.
pub fn resolve_content(config: &Config, file: Option<&Path>) -> Result<ContentData> {
    let mut overrides = config.content.clone();
    if let Some(path) = file {
        overrides = ContentOverride::load(path)?.or(overrides);
    }

    if !overrides.is_empty() {
        tracing::debug!(sections = ?overrides.section_names(), "Applying content overrides");
    }
    Ok(ContentData::with_overrides(Some(overrides)))
}
