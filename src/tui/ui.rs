// UI rendering logic
//
// Frame composition: fixed header, scrolling page window, one-line status
// bar, then the overlays (nav drawer, notification banner) on top.

use super::app::{App, H_MARGIN, HEADER_HEIGHT, STATUS_HEIGHT};
use super::components::{header, sections};
use crate::content::{Page, SECTION_IDS};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Main UI render function - called on every frame
pub fn draw(f: &mut Frame, app: &App) {
    // Paint the page background first
    f.render_widget(
        Block::default().style(Style::default().bg(app.theme.background)),
        f.area(),
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT), // Fixed navbar
            Constraint::Min(1),                // Page window
            Constraint::Length(STATUS_HEIGHT), // Status bar
        ])
        .split(f.area());

    header::render(f, chunks[0], app);

    // Page content is inset by the horizontal margin
    let page_area = Rect {
        x: chunks[1].x + H_MARGIN,
        y: chunks[1].y,
        width: chunks[1].width.saturating_sub(2 * H_MARGIN),
        height: chunks[1].height,
    };
    sections::render_page(f, page_area, app);

    render_status(f, chunks[2], app);

    // Overlays, drawn last so they sit on top
    if app.drawer_open {
        render_drawer(f, chunks[1], app);
    }
    if let Some(banner) = &app.notification {
        banner.render(f, f.area(), &app.theme);
    }
}

/// One-line status bar: key hints on the left, last log line on the right
fn render_status(f: &mut Frame, area: Rect, app: &App) {
    let hints = " q quit · ⇥ focus · t theme · 1-4 jump · m menu ";
    let mut spans = vec![Span::styled(hints, Style::default().fg(app.theme.muted))];

    if let Some(entry) = app.log_buffer.last() {
        let text = format!(
            "{} {} {}",
            entry.timestamp.format("%H:%M:%S"),
            entry.level.as_str(),
            entry.message
        );
        let used = hints.chars().count();
        let avail = (area.width as usize).saturating_sub(used + 1);
        let clipped: String = text.chars().take(avail).collect();
        let pad = avail.saturating_sub(clipped.chars().count());
        spans.push(Span::styled(" ".repeat(pad), Style::default()));
        spans.push(Span::styled(
            clipped,
            Style::default().fg(app.theme.border),
        ));
    }

    f.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().bg(app.theme.header_bg)),
        area,
    );
}

/// Compact-width nav drawer (the collapsed mobile menu)
fn render_drawer(f: &mut Frame, area: Rect, app: &App) {
    let width = 24.min(area.width);
    let height = (SECTION_IDS.len() as u16 + 2).min(area.height);
    let drawer_area = Rect::new(area.x, area.y, width, height);

    let lines: Vec<Line> = SECTION_IDS
        .iter()
        .enumerate()
        .map(|(i, id)| {
            let style = if app.keyboard_nav && app.focus == super::app::Focus::Link(i) {
                Style::default()
                    .fg(app.theme.highlight)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                Style::default().fg(app.theme.foreground)
            };
            Line::from(Span::styled(
                format!(" {} {}", i + 1, Page::nav_label(id)),
                style,
            ))
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.accent))
        .style(Style::default().bg(app.theme.background));

    f.render_widget(Clear, drawer_area);
    f.render_widget(Paragraph::new(lines).block(block), drawer_area);
}
