// Page body rendering
//
// Projects the virtual page (page coordinates) through the scroll offset
// onto the screen and paints whatever lands inside the viewport. Blocks that
// have not been revealed yet render in the hidden color; the reveal itself
// is tracked in App (effects::RevealTracker), not here.

use super::form;
use crate::tui::app::App;
use crate::tui::scroll::{BlockId, PageRect};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Map a page rect to its on-screen rect, clipped to the viewport.
/// None when the rect is entirely off screen.
pub fn project(area: Rect, scroll: usize, rect: PageRect) -> Option<Rect> {
    let bottom = rect.top + rect.height;
    let window_bottom = scroll + area.height as usize;
    if bottom <= scroll || rect.top >= window_bottom {
        return None;
    }
    let visible_top = rect.top.max(scroll);
    let visible_bottom = bottom.min(window_bottom);

    let y = area.y + (visible_top - scroll) as u16;
    let height = (visible_bottom - visible_top) as u16;
    let x = area.x + rect.x;
    if x >= area.right() {
        return None;
    }
    let width = rect.width.min(area.right() - x);
    Some(Rect::new(x, y, width, height))
}

pub fn render_page(f: &mut Frame, area: Rect, app: &App) {
    let scroll = app.scroll.offset();
    render_hero(f, area, app, scroll);
    render_about(f, area, app, scroll);
    render_posts(f, area, app, scroll);
    render_contact(f, area, app, scroll);
    render_footer(f, area, app, scroll);
}

/// Style for a revealable block: hidden until it has scrolled into view
fn reveal_style(app: &App, id: BlockId) -> Style {
    if app.reveal.is_revealed(id) {
        Style::default().fg(app.theme.foreground)
    } else {
        Style::default().fg(app.theme.hidden)
    }
}

fn heading(f: &mut Frame, area: Rect, app: &App, scroll: usize, top: usize, text: &str) {
    let rect = PageRect {
        x: 0,
        top,
        width: app.layout.width,
        height: 2,
    };
    let Some(screen) = project(area, scroll, rect) else {
        return;
    };
    let underline = "─".repeat(text.chars().count() + 2);
    let lines = vec![
        Line::from(Span::styled(
            text.to_string(),
            Style::default()
                .fg(app.theme.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(underline, Style::default().fg(app.theme.border))),
    ];
    f.render_widget(Paragraph::new(lines), screen);
}

fn render_hero(f: &mut Frame, area: Rect, app: &App, scroll: usize) {
    let Some(section) = app.layout.sections.iter().find(|s| s.id == "home") else {
        return;
    };
    let rect = PageRect {
        x: 0,
        top: section.top,
        width: app.layout.width,
        height: section.height,
    };
    let Some(screen) = project(area, scroll, rect) else {
        return;
    };

    let revealed = app.reveal.is_revealed(BlockId::Hero);
    // The typewriter owns the title text; absent hero means inert effect
    let title = app
        .typewriter
        .as_ref()
        .map(|tw| tw.visible().to_string())
        .unwrap_or_default();

    let title_color = if revealed { app.theme.accent } else { app.theme.hidden };
    let subtitle_color = if revealed { app.theme.muted } else { app.theme.hidden };
    let lines = vec![
        Line::default(),
        Line::default(),
        Line::default(),
        Line::from(Span::styled(
            title,
            Style::default().fg(title_color).add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(Span::styled(
            app.page.hero_subtitle,
            Style::default().fg(subtitle_color),
        )),
        Line::default(),
        Line::default(),
        Line::from(Span::styled("· · ·", Style::default().fg(app.theme.border))),
    ];
    f.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        screen,
    );
}

fn render_about(f: &mut Frame, area: Rect, app: &App, scroll: usize) {
    let Some(section) = app.layout.sections.iter().find(|s| s.id == "about") else {
        return;
    };
    heading(f, area, app, scroll, section.top, "About");

    let card_rect = PageRect {
        x: 0,
        top: section.top + 2,
        width: app.layout.width.min(72),
        height: app.page.about_lines.len() + 2,
    };
    let Some(screen) = project(area, scroll, card_rect) else {
        return;
    };

    let style = reveal_style(app, BlockId::Profile);
    let border = if app.reveal.is_revealed(BlockId::Profile) {
        app.theme.border
    } else {
        app.theme.hidden
    };
    let lines: Vec<Line> = app
        .page
        .about_lines
        .iter()
        .map(|l| Line::from(Span::styled(*l, style)))
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .title(" profile ")
        .title_style(Style::default().fg(app.theme.muted));
    f.render_widget(Paragraph::new(lines).block(block), screen);
}

fn render_posts(f: &mut Frame, area: Rect, app: &App, scroll: usize) {
    let Some(section) = app.layout.sections.iter().find(|s| s.id == "posts") else {
        return;
    };
    heading(f, area, app, scroll, section.top, "Posts");

    for (i, rect) in app.layout.cards.iter().enumerate() {
        let Some(screen) = project(area, scroll, *rect) else {
            continue;
        };
        let Some(card) = app.page.cards.get(i) else {
            continue;
        };

        let revealed = app.reveal.is_revealed(BlockId::Card(i));
        let hovered = app.hovered_card == Some(i);

        // Hover is the lifted state: accent border, bold title
        let border_color = if hovered {
            app.theme.accent
        } else if revealed {
            app.theme.border
        } else {
            app.theme.hidden
        };
        let mut title_style = Style::default().fg(if revealed {
            app.theme.foreground
        } else {
            app.theme.hidden
        });
        if hovered {
            title_style = title_style.add_modifier(Modifier::BOLD).fg(app.theme.accent);
        }
        let body_style = Style::default().fg(if revealed {
            app.theme.muted
        } else {
            app.theme.hidden
        });

        let lines = vec![
            Line::from(Span::styled(card.title, title_style)),
            Line::from(Span::styled(card.date, body_style)),
            Line::default(),
            Line::from(Span::styled(card.summary, body_style)),
        ];

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color));
        f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }).block(block), screen);
    }
}

fn render_contact(f: &mut Frame, area: Rect, app: &App, scroll: usize) {
    let Some(section) = app.layout.sections.iter().find(|s| s.id == "contact") else {
        return;
    };
    heading(f, area, app, scroll, section.top, "Contact");

    // Contact items, one row each
    for (i, item) in app.page.contact_items.iter().enumerate() {
        let rect = PageRect {
            x: 0,
            top: section.top + 2 + i,
            width: app.layout.width,
            height: 1,
        };
        let Some(screen) = project(area, scroll, rect) else {
            continue;
        };
        let style = reveal_style(app, BlockId::ContactItem(i));
        let line = Line::from(vec![
            Span::styled(format!("{:>8}  ", item.label), style.fg(app.theme.accent)),
            Span::styled(item.value, style),
        ]);
        f.render_widget(Paragraph::new(line), screen);
    }

    form::render(f, area, app, scroll);
}

fn render_footer(f: &mut Frame, area: Rect, app: &App, scroll: usize) {
    let rect = PageRect {
        x: 0,
        top: app.layout.total_height - 1,
        width: app.layout.width,
        height: 1,
    };
    let Some(screen) = project(area, scroll, rect) else {
        return;
    };
    let line = Line::from(Span::styled(
        "© my-blog · rendered entirely in your terminal",
        Style::default().fg(app.theme.muted),
    ));
    f.render_widget(Paragraph::new(line).alignment(Alignment::Center), screen);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_rect(top: usize, height: usize) -> PageRect {
        PageRect {
            x: 0,
            top,
            width: 40,
            height,
        }
    }

    #[test]
    fn project_offscreen_rects_to_none() {
        let area = Rect::new(2, 3, 76, 20);
        // Entirely above the window
        assert_eq!(project(area, 50, page_rect(10, 10)), None);
        // Entirely below the window
        assert_eq!(project(area, 0, page_rect(30, 5)), None);
    }

    #[test]
    fn project_maps_page_rows_to_screen_rows() {
        let area = Rect::new(2, 3, 76, 20);
        let screen = project(area, 10, page_rect(15, 4)).unwrap();
        assert_eq!(screen, Rect::new(2, 8, 40, 4));
    }

    #[test]
    fn project_clips_at_the_viewport_edges() {
        let area = Rect::new(2, 3, 76, 20);
        // Straddles the top edge: only the lower part is visible
        let screen = project(area, 10, page_rect(8, 6)).unwrap();
        assert_eq!(screen, Rect::new(2, 3, 40, 4));

        // Straddles the bottom edge
        let screen = project(area, 0, page_rect(18, 10)).unwrap();
        assert_eq!(screen, Rect::new(2, 21, 40, 2));
    }
}
