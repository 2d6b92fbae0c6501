//! Application state.

use std::sync::Arc;

use sprawl_core::content::ContentData;
use sprawl_core::reveal::{RevealScript, Revealer};
use url::Url;

use crate::page::{self, CtaSlot, Geometry, Page, PageOptions};

/// Rows at the bottom of the screen taken by the status line.
pub const STATUS_HEIGHT: u16 = 1;

/// Last known terminal size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

/// Everything the reducer and renderer share.
pub struct AppState {
    /// Page content (defaults merged with overrides).
    pub content: ContentData,
    /// The terminal session next to the hero section.
    pub revealer: Revealer,
    /// Relative CTA links resolve against this.
    pub base_url: Url,
    pub viewport: Viewport,
    /// First page line shown.
    pub scroll_offset: usize,
    /// CTA highlighted for keyboard navigation.
    pub focus: Option<CtaSlot>,
    /// Blink phase of the session cursor.
    pub cursor_visible: bool,
    /// Transient message shown in the status line.
    pub notice: Option<String>,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(content: ContentData, script: Arc<RevealScript>, base_url: Url) -> Self {
        Self {
            content,
            revealer: Revealer::new(script),
            base_url,
            viewport: Viewport::default(),
            scroll_offset: 0,
            focus: None,
            cursor_visible: true,
            notice: None,
            should_quit: false,
        }
    }

    pub fn geometry(&self) -> Geometry {
        page::geometry(self.viewport.width)
    }

    pub fn page_options(&self) -> PageOptions {
        let script = self.revealer.script();
        PageOptions {
            width: self.geometry().width,
            focus: self.focus,
            cursor_visible: self.cursor_visible,
            session_rows: script.seed().len() + script.entries().len(),
        }
    }

    /// Lays out the page for the current viewport and session.
    pub fn page(&self) -> Page {
        page::build_page(&self.content, self.revealer.buffer(), &self.page_options())
    }

    /// Rows available to the page (the viewport minus the status line).
    pub fn page_rows(&self) -> usize {
        self.viewport.height.saturating_sub(STATUS_HEIGHT) as usize
    }

    /// Largest scroll offset for a page `page_len` lines long.
    pub fn max_scroll(&self, page_len: usize) -> usize {
        page_len.saturating_sub(self.page_rows())
    }
}
