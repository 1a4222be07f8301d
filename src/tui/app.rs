// TUI application state
//
// The App owns everything the page behaviors touch: scroll position, reveal
// and typing state, hover target, theme, the single notification slot, the
// contact form, and the keyboard-navigation flag. Input handlers in mod.rs
// mutate it; ui.rs renders it.

use super::components::notification::{Notification, NotificationKind};
use super::effects::{RevealTracker, Typewriter};
use super::layout::Breakpoint;
use super::scroll::{PageLayout, SmoothScroll};
use crate::config::Config;
use crate::content::{Page, SECTION_IDS};
use crate::logging::LogBuffer;
use crate::storage::{Storage, THEME_KEY};
use crate::theme::{Theme, ThemeKind};
use crate::validate::ValidationPolicy;
use std::time::{Duration, Instant};

/// Header bar height in rows
pub const HEADER_HEIGHT: u16 = 3;

/// Status bar height in rows
pub const STATUS_HEIGHT: u16 = 1;

/// Horizontal page margin on each side
pub const H_MARGIN: u16 = 2;

/// Debounce duration for action keys (Enter, Esc, q)
/// Prevents rapid-fire triggers on terminals that don't send release events
const ACTION_DEBOUNCE: Duration = Duration::from_millis(150);

/// Contact form fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Email,
    Phone,
    Message,
}

/// Contact form input state
#[derive(Debug, Default)]
pub struct FormState {
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl FormState {
    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Email => &self.email,
            FormField::Phone => &self.phone,
            FormField::Message => &self.message,
        }
    }

    pub fn field_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Email => &mut self.email,
            FormField::Phone => &mut self.phone,
            FormField::Message => &mut self.message,
        }
    }

    pub fn clear(&mut self) {
        self.email.clear();
        self.phone.clear();
        self.message.clear();
    }
}

/// Everything Tab can land on, in cycle order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Link(usize),
    ThemeToggle,
    Field(FormField),
    Send,
}

/// Tab cycle: nav links, theme toggle, form fields, send control
const FOCUS_ORDER: [Focus; 9] = [
    Focus::Link(0),
    Focus::Link(1),
    Focus::Link(2),
    Focus::Link(3),
    Focus::ThemeToggle,
    Focus::Field(FormField::Email),
    Focus::Field(FormField::Phone),
    Focus::Field(FormField::Message),
    Focus::Send,
];

/// Main application state for the TUI
pub struct App {
    /// The page being rendered
    pub page: Page,

    /// Geometry for the current width
    pub layout: PageLayout,

    /// Page viewport: (content width, visible rows)
    pub viewport: (u16, u16),

    /// Eased viewport scroll
    pub scroll: SmoothScroll,

    /// One-way fade-in state for page blocks
    pub reveal: RevealTracker,

    /// Hero title animation (None when the page has no hero title)
    pub typewriter: Option<Typewriter>,

    /// The single notification slot - a new banner evicts the prior
    pub notification: Option<Notification>,

    /// Card currently under the mouse pointer
    pub hovered_card: Option<usize>,

    /// Set by Tab, cleared by any mouse press; gates the focus outline
    pub keyboard_nav: bool,

    /// Current focus position (outline only drawn while keyboard_nav)
    pub focus: Focus,

    /// Compact-width nav drawer open/closed
    pub drawer_open: bool,

    /// Contact form inputs
    pub form: FormState,

    /// Compiled validation patterns
    policy: ValidationPolicy,

    /// Current theme state and its palette
    pub theme_kind: ThemeKind,
    pub theme: Theme,

    /// Persisted preferences (the `theme` key)
    storage: Storage,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Log buffer for the status bar
    pub log_buffer: LogBuffer,

    /// Last time an action key was triggered (for debouncing)
    last_action_time: Option<Instant>,
}

impl App {
    pub fn with_config(config: &Config, storage: Storage, log_buffer: LogBuffer) -> Self {
        let page = Page::builtin();

        // Read persisted theme once at startup, default light
        let theme_kind = storage
            .get(THEME_KEY)
            .map(ThemeKind::from_name)
            .unwrap_or_default();
        let theme = theme_kind.palette();

        // Capture the hero title and blank it for the typing animation
        let typewriter = (!page.hero_title.is_empty()).then(|| Typewriter::new(page.hero_title));

        let layout = PageLayout::compute(&page, 76);

        Self {
            page,
            layout,
            viewport: (76, 20),
            scroll: SmoothScroll::new(),
            reveal: RevealTracker::new(),
            typewriter,
            notification: None,
            hovered_card: None,
            keyboard_nav: false,
            focus: Focus::Link(0),
            drawer_open: false,
            form: FormState::default(),
            policy: ValidationPolicy::with_phone_pattern(&config.validation.phone_pattern),
            theme_kind,
            theme,
            storage,
            should_quit: false,
            log_buffer,
            last_action_time: None,
        }
    }

    /// Recompute geometry for a terminal size. Called before each draw.
    pub fn resize(&mut self, width: u16, height: u16) {
        let content_width = width.saturating_sub(2 * H_MARGIN).max(20);
        let page_rows = height.saturating_sub(HEADER_HEIGHT + STATUS_HEIGHT).max(1);
        if self.layout.width != content_width {
            self.layout = PageLayout::compute(&self.page, content_width);
        }
        self.viewport = (content_width, page_rows);
        self.scroll.clamp_to(self.max_scroll());
    }

    pub fn breakpoint(&self) -> Breakpoint {
        Breakpoint::from_width(self.viewport.0 + 2 * H_MARGIN)
    }

    fn max_scroll(&self) -> usize {
        self.layout.max_scroll(self.viewport.1 as usize)
    }

    /// Advance timer-driven state one render tick
    pub fn tick(&mut self, now: Instant) {
        self.scroll.step();

        // Reveal check replaces the intersection observer
        self.reveal.observe(
            &self.layout.blocks,
            self.scroll.offset(),
            self.viewport.1 as usize,
        );

        // Auto-dismiss the banner; the take is guarded so an already
        // evicted banner is not removed twice
        if self
            .notification
            .as_ref()
            .is_some_and(|n| n.is_expired_at(now))
        {
            self.notification = None;
        }
    }

    /// Show a banner, evicting any existing one
    pub fn show_notification(&mut self, message: impl Into<String>, kind: NotificationKind) {
        let message = message.into();
        tracing::debug!("notification ({:?}): {}", kind, message);
        self.notification = Some(Notification::new(message, kind));
    }

    /// Smooth-scroll to a section by fragment id. Missing ids are a no-op.
    ///
    /// This is the external surface (no drawer side effect); nav links go
    /// through `activate_link` instead.
    pub fn scroll_to_section(&mut self, id: &str) {
        let Some(target) = self.layout.scroll_target_for(id) else {
            return;
        };
        self.scroll.animate_to(target.min(self.max_scroll()));
    }

    /// Activate a nav link: scroll to its section, and if the compact nav
    /// drawer is open, close it through its toggle
    pub fn activate_link(&mut self, index: usize) {
        let Some(id) = SECTION_IDS.get(index) else {
            return;
        };
        self.scroll_to_section(id);
        if self.drawer_open {
            self.toggle_drawer();
        }
    }

    pub fn toggle_drawer(&mut self) {
        self.drawer_open = !self.drawer_open;
    }

    /// Flip the theme, persist it, and reapply the palette
    pub fn toggle_theme(&mut self) {
        self.theme_kind = self.theme_kind.toggled();
        self.storage.set(THEME_KEY, self.theme_kind.as_str());
        self.theme = self.theme_kind.palette();
        tracing::info!("theme switched to {}", self.theme.name);
    }

    /// Validate and "submit" the contact form. No transmission happens -
    /// success just acknowledges and clears the fields.
    pub fn submit_form(&mut self) {
        let email_ok = self.policy.validate_email(self.form.email.trim());
        let phone_ok = self.policy.validate_phone(self.form.phone.trim());

        if email_ok && phone_ok {
            self.show_notification("Message sent successfully!", NotificationKind::Success);
            self.form.clear();
        } else {
            self.show_notification("Please check your input.", NotificationKind::Error);
        }
    }

    /// Move focus forward through the Tab cycle
    pub fn focus_next(&mut self) {
        let idx = FOCUS_ORDER.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = FOCUS_ORDER[(idx + 1) % FOCUS_ORDER.len()];
    }

    /// Move focus backward through the Tab cycle
    pub fn focus_prev(&mut self) {
        let idx = FOCUS_ORDER.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = FOCUS_ORDER[(idx + FOCUS_ORDER.len() - 1) % FOCUS_ORDER.len()];
    }

    /// Whether key input currently edits a form field
    pub fn editing(&self) -> bool {
        matches!(self.focus, Focus::Field(_))
    }

    pub fn input_char(&mut self, c: char) {
        if let Focus::Field(field) = self.focus {
            self.form.field_mut(field).push(c);
        }
    }

    pub fn backspace(&mut self) {
        if let Focus::Field(field) = self.focus {
            self.form.field_mut(field).pop();
        }
    }

    /// Mouse movement: hit-test cards for the hover effect
    pub fn pointer_moved(&mut self, col: u16, row: u16) {
        let page_top = HEADER_HEIGHT;
        let page_bottom = page_top + self.viewport.1;
        if row < page_top || row >= page_bottom || col < H_MARGIN {
            self.hovered_card = None;
            return;
        }
        let page_row = (row - page_top) as usize + self.scroll.offset();
        self.hovered_card = self.layout.card_at(col - H_MARGIN, page_row);
    }

    /// Any mouse press clears the keyboard-navigation flag
    pub fn pointer_pressed(&mut self) {
        self.keyboard_nav = false;
    }

    /// Manual scroll (keys, wheel) - instant, clamped
    pub fn scroll_by(&mut self, delta: i32) {
        let max = self.max_scroll();
        self.scroll.scroll_by(delta, max);
    }

    /// Check if an action should be debounced
    /// Returns true if action should be blocked (too soon since last action)
    pub fn should_debounce_action(&mut self) -> bool {
        let now = Instant::now();
        if let Some(last) = self.last_action_time {
            if now.duration_since(last) < ACTION_DEBOUNCE {
                return true;
            }
        }
        self.last_action_time = Some(now);
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::scroll::NAV_OFFSET;

    fn app() -> App {
        let config = Config::default();
        let storage = Storage::open(None);
        let mut app = App::with_config(&config, storage, LogBuffer::new());
        app.resize(80, 24);
        app
    }

    fn settle(app: &mut App) {
        for _ in 0..200 {
            app.tick(Instant::now());
            if app.scroll.is_settled() {
                break;
            }
        }
    }

    #[test]
    fn link_activation_targets_section_top_minus_nav_offset() {
        let mut app = app();
        let posts_top = app.layout.section_top("posts").unwrap();
        app.activate_link(2); // posts
        settle(&mut app);
        assert_eq!(app.scroll.offset(), posts_top - NAV_OFFSET);
    }

    #[test]
    fn missing_section_is_a_noop() {
        let mut app = app();
        app.scroll_by(7);
        app.scroll_to_section("no-such-section");
        settle(&mut app);
        assert_eq!(app.scroll.offset(), 7);
    }

    #[test]
    fn scroll_to_section_skips_the_drawer_side_effect() {
        let mut app = app();
        app.drawer_open = true;
        app.scroll_to_section("contact");
        assert!(app.drawer_open, "external scroll must not touch the drawer");

        app.activate_link(3);
        assert!(!app.drawer_open, "link activation closes the drawer");
    }

    #[test]
    fn scroll_target_is_clamped_to_page_end() {
        let mut app = app();
        app.resize(80, 200); // viewport taller than most of the page
        app.scroll_to_section("contact");
        settle(&mut app);
        assert!(app.scroll.offset() <= app.max_scroll());
    }

    #[test]
    fn submit_with_valid_input_notifies_success_and_clears() {
        let mut app = app();
        app.form.email = "a@b.com".to_string();
        app.form.phone = "010-1234-5678".to_string();
        app.form.message = "hi".to_string();
        app.submit_form();

        let banner = app.notification.as_ref().unwrap();
        assert_eq!(banner.kind, NotificationKind::Success);
        assert!(app.form.email.is_empty());
        assert!(app.form.phone.is_empty());
        assert!(app.form.message.is_empty());
    }

    #[test]
    fn submit_with_invalid_input_notifies_error_and_keeps_fields() {
        let mut app = app();
        app.form.email = "a@b".to_string(); // no tld
        app.form.phone = "010-1234-5678".to_string();
        app.submit_form();

        let banner = app.notification.as_ref().unwrap();
        assert_eq!(banner.kind, NotificationKind::Error);
        assert_eq!(app.form.email, "a@b");
        assert_eq!(app.form.phone, "010-1234-5678");
    }

    #[test]
    fn second_notification_evicts_the_first() {
        let mut app = app();
        app.show_notification("one", NotificationKind::Info);
        app.show_notification("two", NotificationKind::Warning);
        let banner = app.notification.as_ref().unwrap();
        assert_eq!(banner.message, "two");
    }

    #[test]
    fn expired_notification_is_removed_once() {
        let mut app = app();
        app.show_notification("bye", NotificationKind::Info);
        let later = Instant::now() + Duration::from_millis(5001);
        app.tick(later);
        assert!(app.notification.is_none());
        // A second tick with nothing shown must not panic or resurrect
        app.tick(later + Duration::from_secs(1));
        assert!(app.notification.is_none());
    }

    #[test]
    fn theme_toggle_persists_and_round_trips() {
        let mut app = app();
        assert_eq!(app.theme_kind, ThemeKind::Light);

        app.toggle_theme();
        assert_eq!(app.theme_kind, ThemeKind::Dark);
        assert_eq!(app.storage.get(THEME_KEY), Some("dark"));
        assert_eq!(app.theme.name, "dark");

        app.toggle_theme();
        assert_eq!(app.theme_kind, ThemeKind::Light);
        assert_eq!(app.storage.get(THEME_KEY), Some("light"));
    }

    #[test]
    fn focus_cycles_through_every_stop_and_wraps() {
        let mut app = app();
        let start = app.focus;
        for _ in 0..FOCUS_ORDER.len() {
            app.focus_next();
        }
        assert_eq!(app.focus, start);

        app.focus_prev();
        assert_eq!(app.focus, Focus::Send);
    }

    #[test]
    fn typing_edits_only_form_fields() {
        let mut app = app();
        app.input_char('x'); // focus is a nav link
        assert!(app.form.email.is_empty());

        app.focus = Focus::Field(FormField::Email);
        app.input_char('a');
        app.input_char('b');
        app.backspace();
        assert_eq!(app.form.email, "a");
    }

    #[test]
    fn pointer_press_clears_keyboard_nav() {
        let mut app = app();
        app.keyboard_nav = true;
        app.pointer_pressed();
        assert!(!app.keyboard_nav);
    }

    #[test]
    fn hover_tracks_cards_under_the_pointer() {
        let mut app = app();
        let rect = app.layout.cards[0];
        // Scroll so the card grid is on screen
        let grid_scroll = rect.top.saturating_sub(4);
        app.scroll_by(grid_scroll as i32);

        let screen_row = HEADER_HEIGHT + (rect.top - grid_scroll) as u16 + 1;
        app.pointer_moved(H_MARGIN + rect.x + 1, screen_row);
        assert_eq!(app.hovered_card, Some(0));

        // Pointer-leave resets to no hover
        app.pointer_moved(0, 0);
        assert_eq!(app.hovered_card, None);
    }

    #[test]
    fn hero_title_starts_blank_then_types() {
        let app = app();
        let tw = app.typewriter.as_ref().unwrap();
        // Before the initial delay nothing is visible
        assert_eq!(tw.visible(), "");
    }
}
