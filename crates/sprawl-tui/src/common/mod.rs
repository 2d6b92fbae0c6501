//! Shared helpers for rendering.

pub mod scrollbar;
pub mod text;

pub use scrollbar::Scrollbar;
pub use text::{hard_wrap, truncate_with_ellipsis, wrap_text};
