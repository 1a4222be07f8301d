// pagecraft - a personal blog page for the terminal
//
// Renders a single scrollable page (hero, about, posts, contact) with the
// interactions of a small website: smooth-scrolling nav links, fade-in on
// scroll, a typed-out hero title, card hover highlights, a validated
// contact form, and a persisted light/dark theme toggle.
//
// Architecture:
// - content: the page model (sections, cards, contact entries)
// - tui (ratatui): layout, scroll and effect state, rendering
// - storage: TOML key-value store for the theme preference
// - config: phone pattern and logging options
// - logging: tracing capture into an in-app buffer

mod cli;
mod config;
mod content;
mod logging;
mod startup;
mod storage;
mod theme;
mod tui;
mod validate;

use anyhow::Result;
use config::{Config, LogRotation};
use logging::{LogBuffer, TuiLogLayer};
use std::time::Instant;
use storage::Storage;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    let boot = Instant::now();

    // Handle CLI commands first (config --show, --reset, --edit, --path)
    // If a command was handled, exit early
    if cli::handle_cli() {
        return Ok(());
    }

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();

    let config = Config::from_env();

    // Logs go to an in-app buffer, never stdout - the TUI owns the screen
    let log_buffer = LogBuffer::new();

    // Precedence: RUST_LOG env var > config file > default "info"
    let default_filter = format!("pagecraft={}", config.logging.level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());

    // Set up file logging if enabled (non-blocking writer with rotation)
    // The guard must be kept alive for the duration of the program to ensure logs flush
    let _file_guard: Option<tracing_appender::non_blocking::WorkerGuard> =
        if config.logging.file_enabled {
            if let Err(e) = std::fs::create_dir_all(&config.logging.file_dir) {
                eprintln!(
                    "Warning: Could not create log directory {:?}: {}",
                    config.logging.file_dir, e
                );
                // Fall back to buffer-only logging
                tracing_subscriber::registry()
                    .with(filter)
                    .with(TuiLogLayer::new(log_buffer.clone()))
                    .init();
                None
            } else {
                let file_appender = match config.logging.file_rotation {
                    LogRotation::Hourly => tracing_appender::rolling::hourly(
                        &config.logging.file_dir,
                        &config.logging.file_prefix,
                    ),
                    LogRotation::Daily => tracing_appender::rolling::daily(
                        &config.logging.file_dir,
                        &config.logging.file_prefix,
                    ),
                    LogRotation::Never => tracing_appender::rolling::never(
                        &config.logging.file_dir,
                        &config.logging.file_prefix,
                    ),
                };

                // Writes happen in a background thread
                let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

                tracing_subscriber::registry()
                    .with(filter)
                    .with(TuiLogLayer::new(log_buffer.clone()))
                    .with(
                        tracing_subscriber::fmt::layer()
                            .json()
                            .with_writer(non_blocking)
                            .with_ansi(false),
                    )
                    .init();

                Some(guard)
            }
        } else {
            tracing_subscriber::registry()
                .with(filter)
                .with(TuiLogLayer::new(log_buffer.clone()))
                .init();
            None
        };

    // Open the preference store (theme persistence)
    let storage = Storage::open_default();

    // Print startup banner before the TUI takes over the screen
    startup::print_startup(&config);
    startup::log_startup(&config);

    // The page needs no loading, so this is always fast; the number is
    // still logged as a sanity check for slow terminals
    tracing::info!("page ready in {}ms", boot.elapsed().as_millis());

    // Run the TUI in the main task
    // This blocks until the user quits (presses 'q')
    if let Err(e) = tui::run_tui(config, storage, log_buffer).await {
        tracing::error!("TUI error: {:?}", e);
        return Err(e);
    }

    tracing::info!("Shutdown complete");
    Ok(())
}
