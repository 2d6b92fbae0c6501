//! Pure view/render functions for the TUI.
//!
//! Functions here take `&AppState`, draw to a ratatui Frame, and never mutate
//! state or return effects.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::common::{Scrollbar, truncate_with_ellipsis};
use crate::state::{AppState, STATUS_HEIGHT};
use crate::theme;

const KEY_HINTS: &[(&str, &str)] = &[
    ("↑↓", "scroll"),
    ("tab", "links"),
    ("enter", "open"),
    ("q", "quit"),
];

/// Renders the entire TUI to the frame.
pub fn render(app: &AppState, frame: &mut Frame) {
    let area = frame.area();
    frame.render_widget(
        Block::default().style(Style::default().bg(theme::BACKGROUND)),
        area,
    );

    let rows = area.height.saturating_sub(STATUS_HEIGHT);
    let page = app.page();
    let geometry = app.geometry();

    let offset = app.scroll_offset.min(page.len());
    let end = (offset + rows as usize).min(page.len());
    let visible: Vec<Line<'static>> = page.lines[offset..end].to_vec();

    let page_area = Rect {
        x: geometry.left.min(area.width),
        y: area.y,
        width: (geometry.width as u16).min(area.width.saturating_sub(geometry.left)),
        height: rows,
    };
    frame.render_widget(Paragraph::new(visible), page_area);

    let scrollbar_area = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: rows,
    };
    frame.render_widget(
        Scrollbar::new(page.len(), rows as usize, offset),
        scrollbar_area,
    );

    let status_area = Rect {
        x: area.x,
        y: area.y + rows,
        width: area.width,
        height: STATUS_HEIGHT.min(area.height),
    };
    render_status_line(app, frame, status_area);
}

fn render_status_line(app: &AppState, frame: &mut Frame, area: Rect) {
    let mut spans = vec![Span::raw(" ")];
    for (i, (key, action)) in KEY_HINTS.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" · ", theme::fg(theme::BORDER)));
        }
        spans.push(Span::styled(*key, theme::bold(theme::MUTED)));
        spans.push(Span::styled(format!(" {action}"), theme::fg(theme::DIM)));
    }
    let hints_width: usize = spans.iter().map(|s| s.content.width()).sum();

    let detail = status_detail(app);
    let free = (area.width as usize).saturating_sub(hints_width + 2);
    if free > 3 && !detail.is_empty() {
        let detail = truncate_with_ellipsis(&detail, free);
        let pad = free.saturating_sub(detail.width());
        spans.push(Span::raw(" ".repeat(pad + 1)));
        spans.push(Span::styled(detail, theme::fg(theme::PURPLE_LIGHT)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Right side of the status line: a notice, the focused link, or the
/// session progress while it is still playing.
fn status_detail(app: &AppState) -> String {
    if let Some(notice) = &app.notice {
        return notice.clone();
    }
    if let Some(slot) = app.focus {
        return slot.button(&app.content).url.clone();
    }
    if app.revealer.is_active() && !app.revealer.is_complete() {
        return format!(
            "session {}/{}",
            app.revealer.buffer().revealed_count(),
            app.revealer.script().entries().len()
        );
    }
    String::new()
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use sprawl_core::content::ContentData;
    use sprawl_core::reveal::RevealScript;
    use url::Url;

    use super::*;
    use crate::events::UiEvent;
    use crate::page::CtaSlot;
    use crate::update::update;

    fn app(width: u16, height: u16) -> AppState {
        let mut app = AppState::new(
            ContentData::builtin(),
            Arc::new(RevealScript::terminal_session()),
            Url::parse("https://expanso.io/").unwrap(),
        );
        update(&mut app, UiEvent::Frame { width, height });
        app
    }

    fn draw(app: &AppState, width: u16, height: u16) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| render(app, frame)).unwrap();
        let buffer = terminal.backend().buffer();
        (0..height)
            .map(|y| {
                (0..width)
                    .map(|x| buffer[(x, y)].symbol().to_string())
                    .collect()
            })
            .collect()
    }

    #[test]
    fn test_renders_top_of_page_and_status_line() {
        let app = app(100, 30);
        let rows = draw(&app, 100, 30);

        assert!(rows.iter().any(|row| row.contains("Stop agent sprawl.")));
        assert!(rows[29].contains("quit"));
    }

    #[test]
    fn test_status_line_shows_focused_link() {
        let mut app = app(100, 30);
        app.focus = Some(CtaSlot::HeroPrimary);
        let rows = draw(&app, 100, 30);
        assert!(rows[29].contains("https://exso.cloud/get-started"));
    }

    #[test]
    fn test_scrolled_render_shows_later_lines() {
        let mut app = app(100, 30);
        app.scroll_offset = app.max_scroll(app.page().len());
        let rows = draw(&app, 100, 30);
        assert!(rows.iter().any(|row| row.contains("Talk to an Engineer")));
        assert!(!rows.iter().any(|row| row.contains("Stop agent sprawl.")));
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        let app = app(10, 2);
        let _ = draw(&app, 10, 2);
    }
}
