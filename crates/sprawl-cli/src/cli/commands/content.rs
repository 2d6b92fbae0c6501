//! `content` command handlers.

use std::path::Path;

use anyhow::{Context, Result};
use sprawl_core::config::Config;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Format {
    Toml,
    Json,
}

pub fn show(config: &Config, file: Option<&Path>, format: Format) -> Result<()> {
    let content = super::resolve_content(config, file)?;
    let text = match format {
        Format::Toml => toml::to_string_pretty(&content).context("serialize content as TOML")?,
        Format::Json => {
            let mut json =
                serde_json::to_string_pretty(&content).context("serialize content as JSON")?;
            json.push('\n');
            json
        }
    };
    print!("{text}");
    Ok(())
}
