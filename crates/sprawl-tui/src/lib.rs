//! Sprawl terminal UI.
//!
//! Elm-style architecture:
//! - `events.rs`: `UiEvent` (input, ticks, reveal timers)
//! - `update.rs`: the reducer, `update(&mut AppState, UiEvent) -> Vec<UiEffect>`
//! - `effects.rs`: `UiEffect` (side effects the runtime performs)
//! - `render.rs`: pure drawing from `&AppState`
//! - `page.rs`: page layout shared with headless rendering
//! - `runtime/`: terminal ownership, event loop, effect execution

pub mod common;
pub mod effects;
pub mod events;
pub mod page;
pub mod render;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod theme;
pub mod update;

use std::io::IsTerminal;
use std::sync::Arc;

use anyhow::Result;
pub use page::{CtaSlot, Page, PageOptions, build_page, render_plain};
pub use runtime::{RevealMode, TuiRuntime};
use sprawl_core::content::ContentData;
use sprawl_core::reveal::RevealScript;
pub use state::AppState;
use url::Url;

/// Runs the interactive landing page until the user quits.
///
/// Must be called from inside a multi-threaded tokio runtime when `mode` is
/// `RevealMode::Animated`; reveal timers are spawned on it.
pub fn run_landing_page(
    content: ContentData,
    script: Arc<RevealScript>,
    base_url: Url,
    mode: RevealMode,
) -> Result<()> {
    if !std::io::stdout().is_terminal() {
        anyhow::bail!("The interactive page needs a terminal; use `sprawl render` instead");
    }

    tracing::info!(?mode, %base_url, "Starting landing page");
    let state = AppState::new(content, script, base_url);
    let mut runtime = TuiRuntime::new(state, mode)?;
    runtime.run()
}
