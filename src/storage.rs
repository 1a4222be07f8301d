// Key-value store for persisted preferences
//
// A single TOML file of string keys holds everything the app remembers
// between runs. Today that is exactly one key, `theme`, but the store is
// deliberately schema-free so it never needs a migration. Reads happen once
// at startup; writes happen on toggle.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Key under which the theme preference is persisted
pub const THEME_KEY: &str = "theme";

#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreFile {
    #[serde(flatten)]
    entries: BTreeMap<String, String>,
}

/// File-backed key-value store
#[derive(Debug)]
pub struct Storage {
    path: Option<PathBuf>,
    entries: BTreeMap<String, String>,
}

impl Storage {
    /// Open the store at the default location: ~/.config/pagecraft/storage.toml
    ///
    /// A missing or unparseable file yields an empty store - preferences are
    /// optional and must never block startup.
    pub fn open_default() -> Self {
        Self::open(Self::default_path())
    }

    /// Open the store at an explicit path (None disables persistence)
    pub fn open(path: Option<PathBuf>) -> Self {
        let entries = path
            .as_deref()
            .and_then(|p| std::fs::read_to_string(p).ok())
            .and_then(|contents| toml::from_str::<StoreFile>(&contents).ok())
            .map(|file| file.entries)
            .unwrap_or_default();

        Self { path, entries }
    }

    /// Default store path, Unix-style ~/.config on all platforms for consistency
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("pagecraft").join("storage.toml"))
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Set a key and write the store through to disk.
    ///
    /// Write errors are logged and swallowed: losing a preference is not
    /// worth interrupting the session over.
    pub fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());

        let Some(path) = self.path.as_deref() else {
            return;
        };

        if let Some(parent) = path.parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                tracing::warn!("Could not create {}: {}", parent.display(), e);
                return;
            }
        }

        let file = StoreFile {
            entries: self.entries.clone(),
        };
        match toml::to_string(&file) {
            Ok(contents) => {
                if let Err(e) = std::fs::write(path, contents) {
                    tracing::warn!("Could not write {}: {}", path.display(), e);
                }
            }
            Err(e) => tracing::warn!("Could not serialize store: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store_path(tag: &str) -> PathBuf {
        let unique = format!(
            "pagecraft-test-{}-{}-{}.toml",
            tag,
            std::process::id(),
            chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default()
        );
        std::env::temp_dir().join(unique)
    }

    #[test]
    fn missing_file_reads_empty() {
        let store = Storage::open(Some(temp_store_path("missing")));
        assert_eq!(store.get(THEME_KEY), None);
    }

    #[test]
    fn set_then_get_round_trips_through_disk() {
        let path = temp_store_path("roundtrip");
        let mut store = Storage::open(Some(path.clone()));
        store.set(THEME_KEY, "dark");
        assert_eq!(store.get(THEME_KEY), Some("dark"));

        // A fresh open sees the persisted value
        let reopened = Storage::open(Some(path.clone()));
        assert_eq!(reopened.get(THEME_KEY), Some("dark"));

        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn overwrite_replaces_value() {
        let path = temp_store_path("overwrite");
        let mut store = Storage::open(Some(path.clone()));
        store.set(THEME_KEY, "dark");
        store.set(THEME_KEY, "light");
        assert_eq!(store.get(THEME_KEY), Some("light"));

        let reopened = Storage::open(Some(path.clone()));
        assert_eq!(reopened.get(THEME_KEY), Some("light"));

        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn none_path_disables_persistence() {
        let mut store = Storage::open(None);
        store.set(THEME_KEY, "dark");
        assert_eq!(store.get(THEME_KEY), Some("dark")); // in-memory only
    }

    #[test]
    fn corrupt_file_reads_empty() {
        let path = temp_store_path("corrupt");
        std::fs::write(&path, "not [valid toml").unwrap();
        let store = Storage::open(Some(path.clone()));
        assert_eq!(store.get(THEME_KEY), None);
        let _ = std::fs::remove_file(path);
    }
}
