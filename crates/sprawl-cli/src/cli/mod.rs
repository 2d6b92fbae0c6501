//! CLI entry and dispatch.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use sprawl_core::config::{self, paths};
use sprawl_core::logging;

mod commands;

#[derive(Parser)]
#[command(name = "sprawl")]
#[command(version)]
#[command(about = "Stop agent sprawl: the landing page, in your terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Content override file (TOML, or JSON by extension); its sections win
    /// over the [content] table of the config file
    #[arg(long, value_name = "FILE", global = true)]
    content: Option<PathBuf>,

    /// Show the finished terminal session instead of playing it
    #[arg(long = "no-animation")]
    no_animation: bool,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Print the page as plain text
    Render {
        /// Column width to lay the page out for
        #[arg(long, default_value_t = 80)]
        width: usize,

        /// Show the terminal session as it looks this many milliseconds in
        /// (default: finished)
        #[arg(long = "at-ms", value_name = "MS")]
        at_ms: Option<u64>,
    },

    /// Inspect page content
    Content {
        #[command(subcommand)]
        command: ContentCommands,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum ContentCommands {
    /// Print the merged content (defaults plus overrides)
    Show {
        #[arg(long, value_enum, default_value_t = commands::content::Format::Toml)]
        format: commands::content::Format,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Print the config file path
    Path,
    /// Write a commented default config file
    Init,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // Logging is best effort; a read-only home must not stop the page.
    let _log_guard = match logging::init_file_logging(&paths::logs_dir()) {
        Ok(guard) => Some(guard),
        Err(err) => {
            eprintln!("Logging disabled: {err:#}");
            None
        }
    };

    // one tokio runtime for everything
    let rt = tokio::runtime::Runtime::new().context("create tokio runtime")?;

    rt.block_on(async move { dispatch(cli).await })
}

async fn dispatch(cli: Cli) -> Result<()> {
    let Cli {
        command,
        content,
        no_animation,
    } = cli;

    let load_config = || config::Config::load().context("load config");

    // default to the interactive page
    let Some(command) = command else {
        let config = load_config()?;
        return commands::view::run(&config, content.as_deref(), no_animation);
    };

    match command {
        Commands::Render { width, at_ms } => {
            let config = load_config()?;
            commands::render::run(&config, content.as_deref(), width, at_ms)
        }

        Commands::Content { command } => match command {
            ContentCommands::Show { format } => {
                let config = load_config()?;
                commands::content::show(&config, content.as_deref(), format)
            }
        },

        Commands::Config { command } => match command {
            ConfigCommands::Path => {
                commands::config::path();
                Ok(())
            }
            ConfigCommands::Init => commands::config::init(),
        },
    }
}
