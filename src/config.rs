// Configuration for pagecraft
//
// Configuration is loaded in order of precedence:
// 1. Environment variables (highest priority)
// 2. Config file (~/.config/pagecraft/config.toml)
// 3. Built-in defaults (lowest priority)
//
// The theme preference is NOT config - it lives in the key-value store
// (storage.toml) because the in-app toggle owns it.

use crate::validate::DEFAULT_PHONE_PATTERN;
use serde::Deserialize;
use std::path::PathBuf;

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Log file rotation policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogRotation {
    Hourly,
    #[default]
    Daily,
    Never,
}

impl LogRotation {
    fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "hourly" => LogRotation::Hourly,
            "never" => LogRotation::Never,
            _ => LogRotation::Daily,
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            LogRotation::Hourly => "hourly",
            LogRotation::Daily => "daily",
            LogRotation::Never => "never",
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    pub level: String,

    /// Also write logs to rotating files (in addition to the in-app buffer)
    pub file_enabled: bool,

    /// Directory for log files
    pub file_dir: PathBuf,

    /// Log file name prefix
    pub file_prefix: String,

    /// Rotation policy for log files
    pub file_rotation: LogRotation,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file_enabled: false,
            file_dir: PathBuf::from("./logs"),
            file_prefix: "pagecraft".to_string(),
            file_rotation: LogRotation::default(),
        }
    }
}

/// Contact form validation settings
#[derive(Debug, Clone)]
pub struct ValidationConfig {
    /// Regex the phone field must match. The default is the domestic
    /// 010-XXXX-XXXX plan; swap it out for other numbering plans.
    pub phone_pattern: String,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            phone_pattern: DEFAULT_PHONE_PATTERN.to_string(),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Contact form validation settings
    pub validation: ValidationConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Validation settings as loaded from config file
#[derive(Debug, Deserialize, Default)]
struct FileValidation {
    phone_pattern: Option<String>,
}

/// Logging settings as loaded from config file
#[derive(Debug, Deserialize, Default)]
struct FileLogging {
    level: Option<String>,
    file_enabled: Option<bool>,
    file_dir: Option<String>,
    file_prefix: Option<String>,
    file_rotation: Option<String>,
}

/// Config file structure
#[derive(Debug, Deserialize, Default)]
struct FileConfig {
    /// Optional [validation] section
    validation: Option<FileValidation>,

    /// Optional [logging] section
    logging: Option<FileLogging>,
}

impl Config {
    /// Get the config file path: ~/.config/pagecraft/config.toml
    /// Uses Unix-style ~/.config on all platforms for consistency
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("pagecraft").join("config.toml"))
    }

    /// Create config template if it doesn't exist
    /// Called during startup to help users discover configuration options
    pub fn ensure_config_exists() {
        let Some(path) = Self::config_path() else {
            return;
        };

        // Don't overwrite existing config
        if path.exists() {
            return;
        }

        // Create parent directory
        if let Some(parent) = path.parent() {
            if std::fs::create_dir_all(parent).is_err() {
                return; // Silently fail - config is optional
            }
        }

        let template = r#"# pagecraft configuration
# Uncomment and modify options as needed
# The theme preference is stored separately (storage.toml) by the in-app toggle.

# Contact form validation
# [validation]
# phone_pattern = "^010-\\d{4}-\\d{4}$"  # regex the phone field must match

# Logging configuration
# [logging]
# level = "info"          # trace, debug, info, warn, error (RUST_LOG overrides)
# file_enabled = false    # also write rotating log files
# file_dir = "./logs"
# file_prefix = "pagecraft"
# file_rotation = "daily" # hourly, daily, never
"#;

        // Write template (ignore errors - config is optional)
        let _ = std::fs::write(&path, template);
    }

    /// Load file config if it exists
    fn load_file_config() -> FileConfig {
        let Some(path) = Self::config_path() else {
            return FileConfig::default();
        };

        match std::fs::read_to_string(&path) {
            Ok(contents) => toml::from_str(&contents).unwrap_or_else(|e| {
                eprintln!("Warning: Failed to parse {}: {}", path.display(), e);
                FileConfig::default()
            }),
            Err(_) => FileConfig::default(), // File doesn't exist, use defaults
        }
    }

    /// Serialize config to TOML string (single source of truth for format)
    pub fn to_toml(&self) -> String {
        format!(
            r#"# pagecraft configuration
# The theme preference is stored separately (storage.toml) by the in-app toggle.

# Contact form validation
[validation]
phone_pattern = {phone:?}

# Logging configuration (RUST_LOG env var overrides)
[logging]
level = "{level}"
file_enabled = {file_enabled}
file_dir = "{file_dir}"
file_prefix = "{file_prefix}"
file_rotation = "{rotation}"
"#,
            phone = self.validation.phone_pattern,
            level = self.logging.level,
            file_enabled = self.logging.file_enabled,
            file_dir = self.logging.file_dir.display(),
            file_prefix = self.logging.file_prefix,
            rotation = self.logging.file_rotation.as_str(),
        )
    }

    /// Save current configuration to file
    pub fn save(&self) -> Result<(), std::io::Error> {
        let Some(path) = Self::config_path() else {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "Could not determine config path",
            ));
        };

        // Create parent directory if needed
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(&path, self.to_toml())
    }

    /// Load configuration: file -> env vars -> defaults
    pub fn from_env() -> Self {
        let file = Self::load_file_config();

        // Phone pattern: env > file > default
        let file_validation = file.validation.unwrap_or_default();
        let phone_pattern = std::env::var("PAGECRAFT_PHONE_PATTERN")
            .ok()
            .or(file_validation.phone_pattern)
            .unwrap_or_else(|| DEFAULT_PHONE_PATTERN.to_string());

        // Logging settings: file config only (RUST_LOG env var handled in main.rs)
        let file_logging = file.logging.unwrap_or_default();
        let logging = LoggingConfig {
            level: file_logging.level.unwrap_or_else(|| "info".to_string()),
            file_enabled: file_logging.file_enabled.unwrap_or(false),
            file_dir: file_logging
                .file_dir
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("./logs")),
            file_prefix: file_logging
                .file_prefix
                .unwrap_or_else(|| "pagecraft".to_string()),
            file_rotation: file_logging
                .file_rotation
                .as_deref()
                .map(LogRotation::from_name)
                .unwrap_or_default(),
        };

        Self {
            validation: ValidationConfig { phone_pattern },
            logging,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Serialized config must parse back - catches TOML format drift
    #[test]
    fn config_round_trips_through_toml() {
        let config = Config::default();
        let toml_str = config.to_toml();

        let parsed: Result<FileConfig, _> = toml::from_str(&toml_str);
        assert!(
            parsed.is_ok(),
            "Default config should round-trip.\nTOML:\n{}\nError: {:?}",
            toml_str,
            parsed.err()
        );

        let parsed = parsed.unwrap_or_default();
        let validation = parsed.validation.unwrap_or_default();
        assert_eq!(
            validation.phone_pattern.as_deref(),
            Some(DEFAULT_PHONE_PATTERN)
        );
    }

    #[test]
    fn rotation_names_round_trip() {
        for rotation in [LogRotation::Hourly, LogRotation::Daily, LogRotation::Never] {
            assert_eq!(LogRotation::from_name(rotation.as_str()), rotation);
        }
        // Unknown names fall back to daily
        assert_eq!(LogRotation::from_name("weekly"), LogRotation::Daily);
    }

    #[test]
    fn template_parses() {
        // The commented-out template must still be valid (empty) TOML
        let parsed: Result<FileConfig, _> = toml::from_str("# all comments\n");
        assert!(parsed.is_ok());
    }
}
