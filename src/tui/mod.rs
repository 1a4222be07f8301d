// TUI module - Terminal User Interface
//
// This module manages the terminal UI using ratatui. It handles:
// - Terminal initialization and cleanup
// - Event loop (keyboard/mouse input, render ticks)
// - Dispatching page behaviors on App

pub mod app;
pub mod components;
pub mod effects;
pub mod layout;
pub mod scroll;
pub mod ui;

use crate::config::Config;
use crate::logging::LogBuffer;
use crate::storage::Storage;
use anyhow::{Context, Result};
use app::{App, Focus};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::{Duration, Instant};

/// Run the TUI
///
/// Sets up the terminal, runs the event loop, and restores the terminal
/// when done. Blocks until the user quits (presses 'q').
pub async fn run_tui(config: Config, storage: Storage, log_buffer: LogBuffer) -> Result<()> {
    // Set up terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    // Create app state (reads the persisted theme, captures the hero title)
    let mut app = App::with_config(&config, storage, log_buffer);

    // Run the event loop
    let result = run_event_loop(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Main event loop
///
/// Two event sources, multiplexed with tokio::select!:
/// 1. Keyboard/mouse input (page behaviors)
/// 2. Render ticks (scroll animation, typing effect, banner expiry)
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    // 50ms ticks: smooth enough for the eased scroll and the 100ms/char
    // typing cadence
    let mut tick_interval = tokio::time::interval(Duration::from_millis(50));

    loop {
        // Geometry first, so input hit-tests agree with what is drawn
        let size = terminal.size().context("Failed to read terminal size")?;
        app.resize(size.width, size.height);

        terminal
            .draw(|f| ui::draw(f, app))
            .context("Failed to draw terminal")?;

        tokio::select! {
            // Keyboard or mouse input
            _ = async {
                if event::poll(Duration::from_millis(10)).unwrap_or(false) {
                    match event::read() {
                        Ok(Event::Key(key_event)) => handle_key_event(app, key_event),
                        Ok(Event::Mouse(mouse_event)) => handle_mouse_event(app, mouse_event),
                        _ => {}
                    }
                }
            } => {}

            // Render tick - advance timer-driven state
            _ = tick_interval.tick() => {
                app.tick(Instant::now());
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Handle keyboard input
/// Layered dispatch: form editing captures text first, then global keys,
/// then navigation
fn handle_key_event(app: &mut App, key_event: KeyEvent) {
    if key_event.kind != KeyEventKind::Press {
        return;
    }
    let key = key_event.code;

    // Tab drives focus and raises the keyboard-navigation flag, in or out
    // of the form
    match key {
        KeyCode::Tab => {
            app.keyboard_nav = true;
            app.focus_next();
            return;
        }
        KeyCode::BackTab => {
            app.keyboard_nav = true;
            app.focus_prev();
            return;
        }
        _ => {}
    }

    // Layer 1: form editing absorbs text input
    if app.editing() {
        match key {
            KeyCode::Char('s') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                if !app.should_debounce_action() {
                    app.submit_form();
                }
            }
            KeyCode::Char(c) => app.input_char(c),
            KeyCode::Backspace => app.backspace(),
            KeyCode::Enter => app.focus_next(),
            KeyCode::Esc => app.focus = Focus::Send,
            _ => handle_scroll_keys(app, key),
        }
        return;
    }

    // Layer 2: global keys
    match key {
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            if !app.should_debounce_action() {
                app.should_quit = true;
            }
        }
        KeyCode::Char('t') | KeyCode::Char('T') => {
            if !app.should_debounce_action() {
                app.toggle_theme();
            }
        }
        KeyCode::Char('m') | KeyCode::Char('M') => {
            if !app.should_debounce_action() {
                app.toggle_drawer();
            }
        }
        // Nav links: smooth-scroll to the section, closing the drawer
        KeyCode::Char(c @ '1'..='4') => {
            if !app.should_debounce_action() {
                app.activate_link((c as usize) - ('1' as usize));
            }
        }
        KeyCode::Enter => {
            if !app.should_debounce_action() {
                match app.focus {
                    Focus::Link(i) => app.activate_link(i),
                    Focus::ThemeToggle => app.toggle_theme(),
                    Focus::Send => app.submit_form(),
                    Focus::Field(_) => {}
                }
            }
        }
        KeyCode::Esc => {
            if app.drawer_open {
                app.toggle_drawer();
            }
        }
        _ => handle_scroll_keys(app, key),
    }
}

/// Manual scrolling - instant, no easing
fn handle_scroll_keys(app: &mut App, key: KeyCode) {
    let page = app.viewport.1 as i32;
    match key {
        KeyCode::Up => app.scroll_by(-1),
        KeyCode::Down => app.scroll_by(1),
        KeyCode::Char('k') if !app.editing() => app.scroll_by(-1),
        KeyCode::Char('j') if !app.editing() => app.scroll_by(1),
        KeyCode::PageUp => app.scroll_by(-page),
        KeyCode::PageDown => app.scroll_by(page),
        KeyCode::Home if !app.editing() => app.scroll_by(i32::MIN / 2),
        KeyCode::End if !app.editing() => app.scroll_by(i32::MAX / 2),
        _ => {}
    }
}

/// Handle mouse input
///
/// Movement drives the card hover effect; any press clears the
/// keyboard-navigation flag; the wheel scrolls the page.
fn handle_mouse_event(app: &mut App, mouse_event: MouseEvent) {
    match mouse_event.kind {
        MouseEventKind::Moved => {
            app.pointer_moved(mouse_event.column, mouse_event.row);
        }
        MouseEventKind::Down(_) => {
            app.pointer_pressed();
        }
        MouseEventKind::ScrollUp => app.scroll_by(-3),
        MouseEventKind::ScrollDown => app.scroll_by(3),
        _ => {}
    }
}
