//! Page scrollbar with a fixed-size thumb.
//!
//! ratatui's Scrollbar rounds both thumb ends on their own, so the thumb grows
//! and shrinks while scrolling. This widget computes one thumb length and
//! places it so it touches the bottom exactly at the last scroll position.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Widget;

use crate::theme;

const THUMB_SYMBOL: &str = "█";
const TRACK_SYMBOL: &str = "│";

#[derive(Debug, Clone)]
pub struct Scrollbar {
    total_lines: usize,
    viewport_height: usize,
    scroll_offset: usize,
}

impl Scrollbar {
    pub fn new(total_lines: usize, viewport_height: usize, scroll_offset: usize) -> Self {
        Self {
            total_lines,
            viewport_height,
            scroll_offset,
        }
    }

    fn should_display(&self) -> bool {
        self.total_lines > self.viewport_height
    }

    /// Returns `(thumb_start, thumb_len)` for a track of `track_len` rows.
    fn thumb(&self, track_len: usize) -> Option<(usize, usize)> {
        let max_scroll = self.total_lines.saturating_sub(self.viewport_height);
        if !self.should_display() || track_len == 0 || max_scroll == 0 {
            return None;
        }
        let viewport_len = self.viewport_height.min(track_len);

        // round(track_len * viewport_len / (total_lines - 1 + viewport_len))
        let denom = self
            .total_lines
            .saturating_sub(1)
            .saturating_add(viewport_len) as u64;
        let thumb_len = if denom > 0 {
            let numerator = track_len as u64 * viewport_len as u64;
            (((numerator + denom / 2) / denom) as usize).clamp(1, track_len)
        } else {
            track_len
        };

        let available = track_len.saturating_sub(thumb_len) as u64;
        let offset = self.scroll_offset.min(max_scroll) as u64;
        let thumb_start = (offset * available / max_scroll as u64) as usize;
        Some((thumb_start, thumb_len))
    }
}

impl Widget for Scrollbar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some((thumb_start, thumb_len)) = self.thumb(area.height as usize) else {
            return;
        };

        let x = area.x + area.width.saturating_sub(1);
        for (idx, y) in (area.y..area.y + area.height).enumerate() {
            let (symbol, color) = if idx >= thumb_start && idx < thumb_start + thumb_len {
                (THUMB_SYMBOL, theme::MUTED)
            } else {
                (TRACK_SYMBOL, theme::BORDER)
            };
            buf.set_string(x, y, symbol, Style::default().fg(color));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_when_content_fits() {
        assert!(!Scrollbar::new(10, 20, 0).should_display());
        assert!(!Scrollbar::new(20, 20, 0).should_display());
        assert!(Scrollbar::new(100, 20, 0).should_display());
    }

    #[test]
    fn test_thumb_size_is_stable_across_offsets() {
        let top = Scrollbar::new(100, 20, 0).thumb(20).unwrap();
        let middle = Scrollbar::new(100, 20, 40).thumb(20).unwrap();
        let bottom = Scrollbar::new(100, 20, 80).thumb(20).unwrap();

        assert_eq!(top.1, middle.1);
        assert_eq!(middle.1, bottom.1);
        assert_eq!(top.0, 0);
        assert_eq!(bottom.0 + bottom.1, 20);
    }

    #[test]
    fn test_offset_past_end_is_clamped() {
        let bottom = Scrollbar::new(100, 20, 80).thumb(20).unwrap();
        let past = Scrollbar::new(100, 20, 500).thumb(20).unwrap();
        assert_eq!(bottom, past);
    }
}
