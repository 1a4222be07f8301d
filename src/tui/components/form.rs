// Contact form rendering
//
// Three bordered inputs and a send control, positioned by the page layout.
// Focused fields show a cursor; the keyboard-navigation outline uses the
// highlight color. Validation and submission live in App::submit_form.

use super::sections::project;
use crate::tui::app::{App, Focus, FormField};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const FIELDS: [(FormField, &str); 3] = [
    (FormField::Email, " email "),
    (FormField::Phone, " phone "),
    (FormField::Message, " message "),
];

pub fn render(f: &mut Frame, area: Rect, app: &App, scroll: usize) {
    for (field, title) in FIELDS {
        let rect = match field {
            FormField::Email => app.layout.form.email,
            FormField::Phone => app.layout.form.phone,
            FormField::Message => app.layout.form.message,
        };
        let Some(screen) = project(area, scroll, rect) else {
            continue;
        };

        let focused = app.focus == Focus::Field(field);
        let value = app.form.field(field);

        // Focus outline only while keyboard navigation is active; a plain
        // accent border marks the edited field otherwise
        let border_color = if focused && app.keyboard_nav {
            app.theme.highlight
        } else if focused {
            app.theme.accent
        } else {
            app.theme.border
        };

        let mut spans = vec![Span::styled(
            value.to_string(),
            Style::default().fg(app.theme.foreground),
        )];
        if focused {
            spans.push(Span::styled("▏", Style::default().fg(app.theme.accent)));
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .title(title)
            .title_style(Style::default().fg(app.theme.muted));
        f.render_widget(Paragraph::new(Line::from(spans)).block(block), screen);
    }

    // Send control
    if let Some(screen) = project(area, scroll, app.layout.form.send) {
        let focused = app.focus == Focus::Send;
        let border_color = if focused && app.keyboard_nav {
            app.theme.highlight
        } else if focused {
            app.theme.accent
        } else {
            app.theme.border
        };
        let label_style = if focused {
            Style::default()
                .fg(app.theme.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(app.theme.foreground)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color));
        f.render_widget(
            Paragraph::new(Line::from(Span::styled("Send ⏎", label_style)))
                .alignment(Alignment::Center)
                .block(block),
            screen,
        );
    }
}
