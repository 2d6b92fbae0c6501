//! Page view model.
//!
//! `build_page` turns content plus the current session buffer into styled
//! lines for the whole page, remembering where anchors and CTA buttons landed
//! so the reducer can scroll to them and map mouse clicks back to buttons.
//! It is pure: the interactive renderer and the headless `render` command
//! share it.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use sprawl_core::content::{ContentData, CtaButton};
use sprawl_core::links::HOW_IT_WORKS_ANCHOR;
use sprawl_core::reveal::{DisplayBuffer, LineCategory};
use unicode_width::UnicodeWidthStr;

use crate::common::{hard_wrap, truncate_with_ellipsis, wrap_text};
use crate::theme;

/// Widest the page column grows on large terminals.
pub const MAX_CONTENT_WIDTH: usize = 96;
/// Narrowest column the layout is computed for.
pub const MIN_CONTENT_WIDTH: usize = 24;
/// Blank columns kept on each side of the page column.
pub const MARGIN: u16 = 2;

const TERMINAL_MAX_WIDTH: usize = 72;
const TERMINAL_TITLE: &str = "~/infrastructure";
const CURSOR: &str = "█";
const SUCCESS_PREFIX: &str = "+ ";
const PAIN_POINT_ICONS: [&str; 4] = ["∿", ">_", "</>", "☰"];
const CHECK: &str = "✓";
const QUOTE_MARK: &str = "❝";
const SPEC_COLUMN_WIDTH: usize = 22;
const STEP_INDENT: usize = 5;
const BUTTON_GAP: &str = "   ";
/// Columns a button adds around its label (` label → ` or `[ label ]`).
const BUTTON_CHROME: usize = 4;

/// One of the four call-to-action buttons on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CtaSlot {
    HeroPrimary,
    HeroSecondary,
    FinalPrimary,
    FinalSecondary,
}

impl CtaSlot {
    /// Focus order.
    pub const ALL: [CtaSlot; 4] = [
        CtaSlot::HeroPrimary,
        CtaSlot::HeroSecondary,
        CtaSlot::FinalPrimary,
        CtaSlot::FinalSecondary,
    ];

    pub fn button(self, content: &ContentData) -> &CtaButton {
        match self {
            CtaSlot::HeroPrimary => &content.hero.cta_primary,
            CtaSlot::HeroSecondary => &content.hero.cta_secondary,
            CtaSlot::FinalPrimary => &content.final_cta.cta_primary,
            CtaSlot::FinalSecondary => &content.final_cta.cta_secondary,
        }
    }

    /// Primary buttons are filled; the others are outlined.
    pub fn is_primary(self) -> bool {
        matches!(self, CtaSlot::HeroPrimary | CtaSlot::FinalPrimary)
    }

    /// Slot after `current`, wrapping around. `None` starts at the first.
    pub fn next(current: Option<Self>) -> Self {
        match current {
            None => Self::ALL[0],
            Some(slot) => Self::ALL[(slot.index() + 1) % Self::ALL.len()],
        }
    }

    /// Slot before `current`, wrapping around. `None` starts at the last.
    pub fn prev(current: Option<Self>) -> Self {
        let len = Self::ALL.len();
        match current {
            None => Self::ALL[len - 1],
            Some(slot) => Self::ALL[(slot.index() + len - 1) % len],
        }
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|s| *s == self).unwrap_or(0)
    }
}

/// Layout inputs that are not content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageOptions {
    /// Column width the page is laid out for.
    pub width: usize,
    /// Highlighted CTA.
    pub focus: Option<CtaSlot>,
    /// Blink phase of the session cursor.
    pub cursor_visible: bool,
    /// Rows reserved for session lines so the page does not shift while the
    /// session grows. The buffer length is used when it is larger.
    pub session_rows: usize,
}

/// Where a CTA button was drawn: page line plus column span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CtaSpot {
    pub slot: CtaSlot,
    pub line: usize,
    pub start: usize,
    pub end: usize,
}

/// A laid out page.
#[derive(Debug, Clone, Default)]
pub struct Page {
    pub lines: Vec<Line<'static>>,
    anchors: Vec<(String, usize)>,
    ctas: Vec<CtaSpot>,
}

impl Page {
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Line index of the anchor named `id`.
    pub fn anchor_line(&self, id: &str) -> Option<usize> {
        self.anchors
            .iter()
            .find(|(name, _)| name == id)
            .map(|(_, line)| *line)
    }

    pub fn cta(&self, slot: CtaSlot) -> Option<CtaSpot> {
        self.ctas.iter().copied().find(|spot| spot.slot == slot)
    }

    /// The button covering `column` of page line `line`, if any.
    pub fn cta_at(&self, line: usize, column: usize) -> Option<CtaSlot> {
        self.ctas
            .iter()
            .find(|spot| spot.line == line && (spot.start..spot.end).contains(&column))
            .map(|spot| spot.slot)
    }

    /// Lines without styling, trailing whitespace trimmed.
    pub fn to_plain_text(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
            out.push_str(text.trim_end());
            out.push('\n');
        }
        out
    }
}

/// Horizontal placement of the page column inside the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    /// First column of the page column.
    pub left: u16,
    /// Width of the page column.
    pub width: usize,
}

/// Fits the page column into a terminal `terminal_width` columns wide,
/// leaving margins and one column for the scrollbar.
pub fn geometry(terminal_width: u16) -> Geometry {
    let available = (terminal_width as usize).saturating_sub(2 * MARGIN as usize + 1);
    let width = available.clamp(MIN_CONTENT_WIDTH, MAX_CONTENT_WIDTH);
    let left = MARGIN + (available.saturating_sub(width) / 2) as u16;
    Geometry { left, width }
}

/// Lays out the whole page.
pub fn build_page(content: &ContentData, session: &DisplayBuffer, options: &PageOptions) -> Page {
    let mut page = PageBuilder::new(options);

    page.hero(content);
    page.terminal(session);
    page.rule();
    page.problem(content);
    page.rule();
    page.solution(content);
    page.rule();
    page.how_it_works(content);
    page.rule();
    page.proof(content);
    page.rule();
    page.testimonial(content);
    page.rule();
    page.tech_specs(content);
    page.rule();
    page.final_cta(content);

    page.finish()
}

/// Headless rendering: the page as plain text at `width` columns.
pub fn render_plain(content: &ContentData, session: &DisplayBuffer, width: usize) -> String {
    let options = PageOptions {
        width: width.clamp(MIN_CONTENT_WIDTH, MAX_CONTENT_WIDTH),
        focus: None,
        cursor_visible: true,
        session_rows: session.len(),
    };
    build_page(content, session, &options).to_plain_text()
}

struct PageBuilder<'a> {
    options: &'a PageOptions,
    width: usize,
    lines: Vec<Line<'static>>,
    anchors: Vec<(String, usize)>,
    ctas: Vec<CtaSpot>,
}

impl<'a> PageBuilder<'a> {
    fn new(options: &'a PageOptions) -> Self {
        Self {
            options,
            width: options.width.max(MIN_CONTENT_WIDTH),
            lines: Vec::new(),
            anchors: Vec::new(),
            ctas: Vec::new(),
        }
    }

    fn finish(self) -> Page {
        Page {
            lines: self.lines,
            anchors: self.anchors,
            ctas: self.ctas,
        }
    }

    // ------------------------------------------------------------------
    // Primitives
    // ------------------------------------------------------------------

    fn push(&mut self, line: Line<'static>) {
        self.lines.push(line);
    }

    fn blank(&mut self) {
        self.lines.push(Line::default());
    }

    fn rule(&mut self) {
        self.blank();
        self.push(Line::from(Span::styled(
            "─".repeat(self.width),
            theme::fg(theme::BORDER),
        )));
        self.blank();
    }

    fn anchor(&mut self, id: &str) {
        self.anchors.push((id.to_string(), self.lines.len()));
    }

    fn text(&mut self, text: &str, style: Style) {
        self.indented(text, 0, style);
    }

    fn indented(&mut self, text: &str, indent: usize, style: Style) {
        if text.is_empty() {
            return;
        }
        let pad = " ".repeat(indent);
        for part in wrap_text(text, self.width.saturating_sub(indent)) {
            self.push(Line::from(vec![
                Span::raw(pad.clone()),
                Span::styled(part, style),
            ]));
        }
    }

    fn centered_text(&mut self, text: &str, style: Style) {
        if text.is_empty() {
            return;
        }
        for part in wrap_text(text, self.width) {
            self.centered(vec![Span::styled(part, style)]);
        }
    }

    /// Centres spans in the column; returns the left padding used.
    fn centered(&mut self, spans: Vec<Span<'static>>) -> usize {
        let content_width: usize = spans.iter().map(|s| s.content.width()).sum();
        let pad = self.width.saturating_sub(content_width) / 2;
        let mut line = Vec::with_capacity(spans.len() + 1);
        line.push(Span::raw(" ".repeat(pad)));
        line.extend(spans);
        self.push(Line::from(line));
        pad
    }

    fn eyebrow(&mut self, text: &str, style: Style) {
        self.text(&text.to_uppercase(), style);
    }

    // ------------------------------------------------------------------
    // Buttons
    // ------------------------------------------------------------------

    fn button_span(&self, slot: CtaSlot, button: &CtaButton) -> Span<'static> {
        let focused = self.options.focus == Some(slot);
        let label =
            truncate_with_ellipsis(&button.text, self.width.saturating_sub(BUTTON_CHROME));
        if slot.is_primary() {
            let bg = if focused {
                theme::AMBER_DARK
            } else {
                theme::AMBER
            };
            let mut style = Style::default()
                .fg(theme::BACKGROUND)
                .bg(bg)
                .add_modifier(Modifier::BOLD);
            if focused {
                style = style.add_modifier(Modifier::UNDERLINED);
            }
            Span::styled(format!(" {label} → "), style)
        } else {
            let style = if focused {
                theme::bold(theme::PURPLE_LIGHT).add_modifier(Modifier::UNDERLINED)
            } else {
                theme::fg(theme::MUTED)
            };
            Span::styled(format!("[ {label} ]"), style)
        }
    }

    fn buttons(
        &mut self,
        content: &ContentData,
        primary: CtaSlot,
        secondary: CtaSlot,
        centered: bool,
    ) {
        let first = self.button_span(primary, primary.button(content));
        let second = self.button_span(secondary, secondary.button(content));
        let first_width = first.content.width();
        let second_width = second.content.width();

        if first_width + BUTTON_GAP.len() + second_width <= self.width {
            let line = self.lines.len();
            let spans = vec![first, Span::raw(BUTTON_GAP), second];
            let start = if centered {
                self.centered(spans)
            } else {
                self.push(Line::from(spans));
                0
            };
            let second_start = start + first_width + BUTTON_GAP.len();
            self.record_cta(primary, line, start, first_width);
            self.record_cta(secondary, line, second_start, second_width);
        } else {
            for (slot, span, width) in [
                (primary, first, first_width),
                (secondary, second, second_width),
            ] {
                let line = self.lines.len();
                let start = if centered {
                    self.centered(vec![span])
                } else {
                    self.push(Line::from(span));
                    0
                };
                self.record_cta(slot, line, start, width);
            }
        }
    }

    fn record_cta(&mut self, slot: CtaSlot, line: usize, start: usize, width: usize) {
        self.ctas.push(CtaSpot {
            slot,
            line,
            start,
            end: start + width,
        });
    }

    // ------------------------------------------------------------------
    // Sections
    // ------------------------------------------------------------------

    fn hero(&mut self, content: &ContentData) {
        let hero = &content.hero;
        self.blank();
        self.text(&hero.headline, theme::bold(theme::TEXT));
        self.text(&hero.subheadline, theme::bold(theme::PURPLE_LIGHT));
        self.blank();
        self.text(&hero.description, theme::fg(theme::MUTED));
        self.blank();
        self.buttons(content, CtaSlot::HeroPrimary, CtaSlot::HeroSecondary, false);
        self.blank();
    }

    fn terminal(&mut self, session: &DisplayBuffer) {
        let width = self.width.min(TERMINAL_MAX_WIDTH);
        let inner = width.saturating_sub(4);
        let border = theme::fg(theme::BORDER);
        let edge = "─".repeat(width.saturating_sub(2));

        self.push(Line::from(Span::styled(format!("╭{edge}╮"), border)));

        let title = truncate_with_ellipsis(TERMINAL_TITLE, inner.saturating_sub(7));
        let used = 7 + title.width();
        self.push(Line::from(vec![
            Span::styled("│ ", border),
            Span::styled("●", theme::fg(theme::DOT_RED)),
            Span::raw(" "),
            Span::styled("●", theme::fg(theme::DOT_YELLOW)),
            Span::raw(" "),
            Span::styled("●", theme::fg(theme::DOT_GREEN)),
            Span::raw("  "),
            Span::styled(title, theme::fg(theme::DIM)),
            Span::raw(" ".repeat(inner.saturating_sub(used))),
            Span::styled(" │", border),
        ]));

        self.push(Line::from(Span::styled(format!("├{edge}┤"), border)));

        for line in session.lines() {
            let category = line.category();
            let text = match category {
                Some(LineCategory::Success) => format!("{SUCCESS_PREFIX}{}", line.text()),
                _ => line.text().to_string(),
            };
            let text = truncate_with_ellipsis(&text, inner);
            let pad = inner.saturating_sub(text.width());
            self.push(Line::from(vec![
                Span::styled("│ ", border),
                Span::styled(text, theme::session_line(category)),
                Span::raw(" ".repeat(pad)),
                Span::styled(" │", border),
            ]));
        }

        let cursor = if self.options.cursor_visible {
            CURSOR
        } else {
            " "
        };
        self.push(Line::from(vec![
            Span::styled("│ ", border),
            Span::styled(cursor, theme::fg(theme::PURPLE)),
            Span::raw(" ".repeat(inner.saturating_sub(1))),
            Span::styled(" │", border),
        ]));

        let reserved = self.options.session_rows.max(session.len());
        for _ in session.len()..reserved {
            self.push(Line::from(vec![
                Span::styled("│ ", border),
                Span::raw(" ".repeat(inner)),
                Span::styled(" │", border),
            ]));
        }

        self.push(Line::from(Span::styled(format!("╰{edge}╯"), border)));
    }

    fn problem(&mut self, content: &ContentData) {
        let section = &content.problem_section;
        self.eyebrow(&section.eyebrow, theme::bold(theme::RED));
        self.text(&section.title, theme::bold(theme::TEXT));
        self.blank();
        self.text(&section.description, theme::fg(theme::MUTED));

        for (i, point) in section.pain_points.iter().enumerate() {
            self.blank();
            self.push(Line::from(vec![
                Span::styled(format!("{:02}", i + 1), theme::fg(theme::DIM)),
                Span::raw("  "),
                Span::styled(
                    PAIN_POINT_ICONS[i % PAIN_POINT_ICONS.len()],
                    theme::bold(theme::PURPLE_LIGHT),
                ),
            ]));
            self.text(&point.title, theme::bold(theme::TEXT));
            self.text(&point.description, theme::fg(theme::MUTED));
        }
    }

    fn solution(&mut self, content: &ContentData) {
        let section = &content.solution_section;
        self.eyebrow(&section.eyebrow, theme::bold(theme::GREEN));
        self.text(&section.title, theme::bold(theme::TEXT));
        self.blank();
        self.text(&section.description, theme::fg(theme::MUTED));

        for benefit in &section.benefits {
            self.blank();
            let title = wrap_text(&benefit.title, self.width.saturating_sub(2));
            for (i, part) in title.into_iter().enumerate() {
                let marker = if i == 0 { CHECK } else { " " };
                self.push(Line::from(vec![
                    Span::styled(marker, theme::bold(theme::PURPLE_LIGHT)),
                    Span::raw(" "),
                    Span::styled(part, theme::bold(theme::TEXT)),
                ]));
            }
            self.indented(&benefit.description, 2, theme::fg(theme::MUTED));
        }
    }

    fn how_it_works(&mut self, content: &ContentData) {
        let section = &content.how_it_works;
        self.anchor(HOW_IT_WORKS_ANCHOR);
        self.centered_text(&section.title, theme::bold(theme::TEXT));

        for step in &section.steps {
            self.blank();
            let title = wrap_text(&step.title, self.width.saturating_sub(STEP_INDENT));
            for (i, part) in title.into_iter().enumerate() {
                let number = if i == 0 {
                    format!("{:>3}", step.number)
                } else {
                    String::from("   ")
                };
                self.push(Line::from(vec![
                    Span::styled(number, theme::bold(theme::PURPLE_LIGHT)),
                    Span::raw("  "),
                    Span::styled(part, theme::bold(theme::TEXT)),
                ]));
            }
            if let Some(time) = &step.time {
                self.indented(time, STEP_INDENT, theme::fg(theme::GREEN));
            }
            self.indented(&step.description, STEP_INDENT, theme::fg(theme::MUTED));
            if let Some(code) = &step.code {
                self.code_block(code);
            }
        }
    }

    fn code_block(&mut self, code: &str) {
        let inner = self.width.saturating_sub(STEP_INDENT + 2);
        let pad = " ".repeat(STEP_INDENT);
        for line in code.lines() {
            let mut parts = hard_wrap(line, inner);
            if parts.is_empty() {
                parts.push(String::new());
            }
            for part in parts {
                self.push(Line::from(vec![
                    Span::raw(pad.clone()),
                    Span::styled("│ ", theme::fg(theme::BORDER)),
                    Span::styled(part, theme::fg(theme::CYAN)),
                ]));
            }
        }
    }

    fn proof(&mut self, content: &ContentData) {
        let section = &content.proof;
        self.centered_text(&section.title, theme::bold(theme::TEXT));

        for stat in &section.stats {
            self.blank();
            self.centered_text(&stat.metric, theme::bold(theme::PURPLE_LIGHT));
            self.centered_text(&stat.label, theme::bold(theme::TEXT));
            self.centered_text(&stat.description, theme::fg(theme::MUTED));
        }
    }

    fn testimonial(&mut self, content: &ContentData) {
        let section = &content.testimonial;
        self.centered(vec![Span::styled(QUOTE_MARK, theme::bold(theme::PURPLE))]);
        if !section.quote.is_empty() {
            let quote = format!("\u{201c}{}\u{201d}", section.quote);
            self.centered_text(
                &quote,
                theme::fg(theme::TEXT).add_modifier(Modifier::ITALIC),
            );
        }

        if !section.metric.is_empty() || !section.metric_label.is_empty() {
            self.blank();
            let metric = section.metric.width();
            if metric + 2 + section.metric_label.width() <= self.width {
                self.centered(vec![
                    Span::styled(section.metric.clone(), theme::bold(theme::PURPLE_LIGHT)),
                    Span::raw("  "),
                    Span::styled(section.metric_label.clone(), theme::fg(theme::MUTED)),
                ]);
            } else {
                self.centered_text(&section.metric, theme::bold(theme::PURPLE_LIGHT));
                self.centered_text(&section.metric_label, theme::fg(theme::MUTED));
            }
        }

        let attribution = match (section.author.is_empty(), section.company.is_empty()) {
            (false, false) => format!("{} - {}", section.author, section.company),
            (false, true) => section.author.clone(),
            (true, false) => section.company.clone(),
            (true, true) => String::new(),
        };
        if !attribution.is_empty() {
            self.blank();
            self.centered_text(&attribution, theme::fg(theme::DIM));
        }
    }

    fn tech_specs(&mut self, content: &ContentData) {
        let section = &content.tech_specs;
        self.centered_text(&section.title.to_uppercase(), theme::bold(theme::MUTED));

        let columns = (self.width / SPEC_COLUMN_WIDTH).clamp(1, 4);
        let column_width = self.width / columns;
        for row in section.specs.chunks(columns) {
            self.blank();
            let values = row.iter().map(|spec| (spec.value.as_str(), theme::bold(theme::TEXT)));
            let labels = row.iter().map(|spec| (spec.label.as_str(), theme::fg(theme::MUTED)));
            self.grid_row(values, column_width);
            self.grid_row(labels, column_width);
        }
    }

    fn grid_row<'s>(&mut self, cells: impl Iterator<Item = (&'s str, Style)>, column_width: usize) {
        let cells: Vec<_> = cells.collect();
        let used = column_width * cells.len();
        let mut spans = vec![Span::raw(" ".repeat(self.width.saturating_sub(used) / 2))];
        for (text, style) in cells {
            let text = truncate_with_ellipsis(text, column_width.saturating_sub(1));
            let free = column_width.saturating_sub(text.width());
            spans.push(Span::raw(" ".repeat(free / 2)));
            spans.push(Span::styled(text, style));
            spans.push(Span::raw(" ".repeat(free - free / 2)));
        }
        self.push(Line::from(spans));
    }

    fn final_cta(&mut self, content: &ContentData) {
        let section = &content.final_cta;
        self.centered_text(&section.title, theme::bold(theme::TEXT));
        self.blank();
        self.centered_text(&section.description, theme::fg(theme::MUTED));
        self.blank();
        self.buttons(content, CtaSlot::FinalPrimary, CtaSlot::FinalSecondary, true);
        self.blank();
    }
}
