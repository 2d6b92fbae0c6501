//! TUI reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(app, event)`
//! and executes the returned effects.

use std::time::Duration;

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use sprawl_core::links::LinkTarget;

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::page::CtaSlot;
use crate::state::{AppState, Viewport};

/// Session cursor blink half-period.
pub const CURSOR_BLINK: Duration = Duration::from_millis(530);

/// Lines scrolled per mouse wheel notch.
const WHEEL_STEP: usize = 3;

/// The main reducer function.
pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Tick { elapsed } => {
            let phase = elapsed.as_millis() / CURSOR_BLINK.as_millis();
            app.cursor_visible = phase % 2 == 0;
            vec![]
        }
        UiEvent::Frame { width, height } => {
            app.viewport = Viewport { width, height };
            clamp_scroll(app);
            vec![]
        }
        UiEvent::Terminal(event) => handle_terminal_event(app, event),
        UiEvent::Reveal(fired) => {
            let appended = app.revealer.on_fired(fired);
            if appended > 0 {
                tracing::trace!(
                    appended,
                    revealed = app.revealer.buffer().revealed_count(),
                    "Session lines revealed"
                );
            }
            vec![]
        }
    }
}

fn handle_terminal_event(app: &mut AppState, event: Event) -> Vec<UiEffect> {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => handle_key(app, key),
        Event::Mouse(mouse) => handle_mouse(app, mouse),
        Event::Resize(width, height) => {
            app.viewport = Viewport { width, height };
            clamp_scroll(app);
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let page = app.page_rows().max(1);

    match key.code {
        KeyCode::Char('c') if ctrl => quit(app),
        KeyCode::Char('q') | KeyCode::Esc => quit(app),
        KeyCode::Up | KeyCode::Char('k') => scroll_by(app, -1),
        KeyCode::Down | KeyCode::Char('j') => scroll_by(app, 1),
        KeyCode::PageUp => scroll_by(app, -(page as isize)),
        KeyCode::PageDown | KeyCode::Char(' ') => scroll_by(app, page as isize),
        KeyCode::Home | KeyCode::Char('g') => scroll_to(app, 0),
        KeyCode::End | KeyCode::Char('G') => scroll_to(app, usize::MAX),
        KeyCode::Tab => focus(app, CtaSlot::next(app.focus)),
        KeyCode::BackTab => focus(app, CtaSlot::prev(app.focus)),
        KeyCode::Enter => match app.focus {
            Some(slot) => follow_link(app, slot),
            None => vec![],
        },
        _ => vec![],
    }
}

fn handle_mouse(app: &mut AppState, mouse: MouseEvent) -> Vec<UiEffect> {
    match mouse.kind {
        MouseEventKind::ScrollUp => scroll_by(app, -(WHEEL_STEP as isize)),
        MouseEventKind::ScrollDown => scroll_by(app, WHEEL_STEP as isize),
        MouseEventKind::Down(MouseButton::Left) => {
            let row = mouse.row as usize;
            let left = app.geometry().left;
            if row >= app.page_rows() || mouse.column < left {
                return vec![];
            }
            let line = app.scroll_offset + row;
            let column = (mouse.column - left) as usize;
            match app.page().cta_at(line, column) {
                Some(slot) => {
                    app.focus = Some(slot);
                    follow_link(app, slot)
                }
                None => vec![],
            }
        }
        _ => vec![],
    }
}

fn quit(app: &mut AppState) -> Vec<UiEffect> {
    app.should_quit = true;
    vec![UiEffect::Quit]
}

fn scroll_by(app: &mut AppState, delta: isize) -> Vec<UiEffect> {
    let target = app.scroll_offset.saturating_add_signed(delta);
    scroll_to(app, target)
}

fn scroll_to(app: &mut AppState, line: usize) -> Vec<UiEffect> {
    let max = app.max_scroll(app.page().len());
    app.scroll_offset = line.min(max);
    vec![]
}

fn clamp_scroll(app: &mut AppState) {
    let max = app.max_scroll(app.page().len());
    app.scroll_offset = app.scroll_offset.min(max);
}

/// Moves focus to `slot` and scrolls it into view.
fn focus(app: &mut AppState, slot: CtaSlot) -> Vec<UiEffect> {
    app.focus = Some(slot);
    app.notice = None;

    let page = app.page();
    let Some(spot) = page.cta(slot) else {
        return vec![];
    };
    let rows = app.page_rows().max(1);
    if spot.line < app.scroll_offset {
        app.scroll_offset = spot.line;
    } else if spot.line >= app.scroll_offset + rows {
        app.scroll_offset = (spot.line + 1).saturating_sub(rows);
    }
    app.scroll_offset = app.scroll_offset.min(app.max_scroll(page.len()));
    vec![]
}

fn follow_link(app: &mut AppState, slot: CtaSlot) -> Vec<UiEffect> {
    let raw = slot.button(&app.content).url.clone();

    match LinkTarget::resolve(&raw, &app.base_url) {
        Ok(LinkTarget::Anchor(id)) => {
            let page = app.page();
            match page.anchor_line(&id) {
                Some(line) => {
                    app.scroll_offset = line.min(app.max_scroll(page.len()));
                    app.notice = None;
                }
                None => {
                    tracing::warn!(anchor = %id, "Link points at an unknown anchor");
                    app.notice = Some(format!("No section named #{id}"));
                }
            }
            vec![]
        }
        Ok(LinkTarget::External(url)) => {
            tracing::info!(%url, "Opening link");
            app.notice = Some(format!("Opening {url}"));
            vec![UiEffect::OpenLink {
                url: url.to_string(),
            }]
        }
        Err(err) => {
            tracing::warn!(url = %raw, "Ignoring link: {err:#}");
            app.notice = Some(format!("Cannot open link: {err}"));
            vec![]
        }
    }
}
