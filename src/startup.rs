// Startup module - displays banner and module loading status
//
// Shows version info, config file status, and per-module status before
// the TUI takes over the screen.

use crate::config::{Config, VERSION};
use crate::storage::Storage;

/// ANSI color codes for terminal output
mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GREEN: &str = "\x1b[32m";
}

/// Module loading result for display
pub struct ModuleStatus {
    pub name: &'static str,
    pub enabled: bool,
    pub description: &'static str,
}

/// Print the startup banner and module loading status
/// This runs before the TUI takes over the screen
pub fn print_startup(config: &Config) {
    use colors::*;

    // Banner
    println!();
    println!("  {BOLD}{CYAN}pagecraft{RESET} {DIM}v{VERSION}{RESET}");
    println!("  {DIM}A personal blog page for the terminal{RESET}");
    println!();

    // Config file status
    if let Some(path) = Config::config_path() {
        if path.exists() {
            println!("  {DIM}Config:{RESET} {GREEN}✓{RESET} {}", path.display());
        } else {
            println!("  {DIM}Config:{RESET} {DIM}(using defaults){RESET}");
        }
    }
    if let Some(path) = Storage::default_path() {
        if path.exists() {
            println!("  {DIM}Prefs: {RESET} {GREEN}✓{RESET} {}", path.display());
        } else {
            println!("  {DIM}Prefs: {RESET} {DIM}(fresh - light theme){RESET}");
        }
    }
    println!();

    // Module loading
    println!("  {DIM}Loading modules...{RESET}");

    let modules = get_module_status(config);
    for module in &modules {
        print_module_status(module);
    }

    println!();
}

/// Get status of all modules based on config
fn get_module_status(config: &Config) -> Vec<ModuleStatus> {
    vec![
        ModuleStatus {
            name: "page",
            enabled: true, // Core, always on
            description: "Section and card layout",
        },
        ModuleStatus {
            name: "scroll",
            enabled: true,
            description: "Smooth section navigation",
        },
        ModuleStatus {
            name: "effects",
            enabled: true,
            description: "Reveal and typing animation",
        },
        ModuleStatus {
            name: "theme",
            enabled: true,
            description: "Light/dark with persistence",
        },
        ModuleStatus {
            name: "validation",
            enabled: true,
            description: "Contact form checks",
        },
        ModuleStatus {
            name: "file-log",
            enabled: config.logging.file_enabled,
            description: "Rotating log files",
        },
    ]
}

/// Print a single module's status
fn print_module_status(module: &ModuleStatus) {
    use colors::*;

    let (icon, style) = if module.enabled {
        (format!("{GREEN}✓{RESET}"), "")
    } else {
        (format!("{DIM}○{RESET}"), DIM)
    };

    println!(
        "    {icon} {style}{:<12}{RESET} {DIM}{}{RESET}",
        module.name, module.description
    );
}

/// Log the boot sequence to the in-app log buffer
/// These lines show up in the status bar once the TUI is running
pub fn log_startup(config: &Config) {
    tracing::info!("pagecraft v{}", VERSION);

    let modules = get_module_status(config);
    for module in &modules {
        let icon = if module.enabled { "✓" } else { "○" };
        tracing::info!("  {} {} - {}", icon, module.name, module.description);
    }
}
