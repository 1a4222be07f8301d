//! Notification banner component
//!
//! A non-blocking overlay that auto-dismisses after five seconds. Renders in
//! the top-right corner on top of all other content. The app holds at most
//! one: showing a new banner evicts the prior one.

use crate::theme::Theme;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use std::time::{Duration, Instant};
use unicode_width::UnicodeWidthStr;

/// How long a banner stays up before auto-dismissal
const LIFETIME: Duration = Duration::from_millis(5000);

/// Banner width floor, matching the page's min-width styling
const MIN_WIDTH: u16 = 30;

/// Visual category of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationKind {
    Success,
    /// Styled with the danger palette color
    Error,
    #[default]
    Info,
    Warning,
}

impl NotificationKind {
    pub fn color(&self, theme: &Theme) -> Color {
        match self {
            NotificationKind::Success => theme.success,
            NotificationKind::Error => theme.danger,
            NotificationKind::Info => theme.info,
            NotificationKind::Warning => theme.warning,
        }
    }

    fn label(&self) -> &'static str {
        match self {
            NotificationKind::Success => "ok",
            NotificationKind::Error => "error",
            NotificationKind::Info => "info",
            NotificationKind::Warning => "warning",
        }
    }
}

/// A transient banner that auto-dismisses
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    created_at: Instant,
}

impl Notification {
    pub fn new(message: impl Into<String>, kind: NotificationKind) -> Self {
        Self {
            message: message.into(),
            kind,
            created_at: Instant::now(),
        }
    }

    /// Check if the banner has outlived its five seconds
    pub fn is_expired_at(&self, now: Instant) -> bool {
        now.checked_duration_since(self.created_at)
            .is_some_and(|elapsed| elapsed >= LIFETIME)
    }

    #[allow(dead_code)]
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Instant::now())
    }

    /// Render in the top-right corner, below the header.
    ///
    /// Uses `Clear` so the banner sits on top of page content.
    pub fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        // Width: message + padding + border, floored at MIN_WIDTH
        let width = (self.message.width() as u16 + 4)
            .max(MIN_WIDTH)
            .min(area.width.saturating_sub(4));
        let height = 3; // 1 line of text + 2 for borders

        // Top-right, offset 2 cells from the right edge, below the header
        let x = area.right().saturating_sub(width + 2);
        let y = area.top() + 4;

        let banner_area = Rect::new(x, y.min(area.bottom().saturating_sub(height)), width, height);

        let color = self.kind.color(theme);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color))
            .title(self.kind.label())
            .title_style(Style::default().fg(color))
            .style(Style::default().bg(theme.background));

        let text = Paragraph::new(self.message.as_str())
            .alignment(Alignment::Center)
            .style(Style::default().fg(theme.foreground))
            .block(block);

        f.render_widget(Clear, banner_area);
        f.render_widget(text, banner_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expires_after_five_seconds_not_before() {
        let banner = Notification::new("saved", NotificationKind::Success);
        let start = banner.created_at;
        assert!(!banner.is_expired_at(start));
        assert!(!banner.is_expired_at(start + Duration::from_millis(4999)));
        assert!(banner.is_expired_at(start + Duration::from_millis(5000)));
    }

    #[test]
    fn error_kind_maps_to_danger_color() {
        let theme = Theme::light();
        assert_eq!(NotificationKind::Error.color(&theme), theme.danger);
        assert_eq!(NotificationKind::Success.color(&theme), theme.success);
        assert_eq!(NotificationKind::Info.color(&theme), theme.info);
        assert_eq!(NotificationKind::Warning.color(&theme), theme.warning);
    }

    #[test]
    fn default_kind_is_info() {
        assert_eq!(NotificationKind::default(), NotificationKind::Info);
    }
}
