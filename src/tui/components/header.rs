// Fixed header bar (the navbar)
//
// Always pinned to the top. Past the elevation threshold it swaps to the
// brand background - the terminal translation of the semi-transparent
// blur backdrop. Nav links collapse into a drawer hint at compact widths.

use crate::content::{Page, SECTION_IDS};
use crate::tui::app::{App, Focus};
use crate::tui::effects::header_elevated;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let elevated = header_elevated(app.scroll.offset());

    // Scrolled past the threshold: brand background, light text.
    // At the top: the stylesheet default.
    let (bg, fg) = if elevated {
        (theme.header_elevated_bg, ratatui::style::Color::White)
    } else {
        (theme.header_bg, theme.header_fg)
    };
    let base = Style::default().bg(bg).fg(fg);

    let mut spans: Vec<Span> = vec![Span::styled(
        " ✦ my-blog ",
        base.add_modifier(Modifier::BOLD),
    )];

    if app.breakpoint().nav_collapsed() {
        // Compact: links live in the drawer
        let hint = if app.drawer_open { "☰ menu ▾" } else { "☰ menu ▸" };
        spans.push(Span::styled(format!("  {hint} (m)"), base));
    } else {
        for (i, id) in SECTION_IDS.iter().enumerate() {
            let label = Page::nav_label(id);
            let mut style = base;
            if app.keyboard_nav && app.focus == Focus::Link(i) {
                // Visible focus outline while keyboard navigation is active
                style = style
                    .fg(theme.highlight)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
            }
            spans.push(Span::styled(format!("  {}:{label}", i + 1), style));
        }
    }

    // Theme toggle glyph on the right
    let mut toggle_style = base;
    if app.keyboard_nav && app.focus == Focus::ThemeToggle {
        toggle_style = toggle_style
            .fg(theme.highlight)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
    }
    let used: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let toggle = format!("{} t ", app.theme_kind.icon());
    let pad = (area.width as usize)
        .saturating_sub(used + toggle.chars().count() + 2)
        .max(1);
    spans.push(Span::styled(" ".repeat(pad), base));
    spans.push(Span::styled(toggle, toggle_style));

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(if elevated { bg } else { theme.border }))
        .style(base);

    f.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}
