// MIT License
// Copyright (c) Valan Sai 2025
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions.
//
// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.


// External crates
use log::{debug, warn};

// Standard library
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};


/// Key-value storage for the small set of UI preferences that survive a
/// restart. `get`/`set` is the whole surface, so callers stay oblivious
/// to where the values actually live.
pub trait PrefStore {
    // Returns the stored value for key, if any
    fn get(&self, key: &str) -> Option<String>;

    // Stores value under key, replacing any previous value
    fn set(&mut self, key: &str, value: &str);
}

/// In-memory store. Used by the tests and as the fallback when the
/// platform offers no per-user data directory.
#[derive(Debug, Default, Clone)]
pub struct MemoryPrefStore {
    values: BTreeMap<String, String>,
}

impl MemoryPrefStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PrefStore for MemoryPrefStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }
}

/// Store backed by a flat TOML table on disk. Every `set` rewrites the
/// file, so a crash can lose at most the latest change.
pub struct FilePrefStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl FilePrefStore {
    /// Opens the store at `path`. A missing file is an empty store, and
    /// an unreadable or corrupt file is treated the same way so a broken
    /// preference file can never keep the app from starting.
    pub fn open(path: PathBuf) -> Self {
        let values = match fs::read_to_string(&path) {
            Ok(text) => match toml::from_str::<BTreeMap<String, String>>(&text) {
                Ok(values) => values,
                Err(e) => {
                    warn!("ignoring corrupt preference file {:?}: {}", path, e);
                    BTreeMap::new()
                }
            },
            Err(_) => BTreeMap::new(),
        };

        Self { path, values }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) {
        let text = match toml::to_string(&self.values) {
            Ok(text) => text,
            Err(e) => {
                warn!("failed to serialize preferences: {}", e);
                return;
            }
        };

        if let Some(parent) = self.path.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                warn!("failed to create preference directory {:?}: {}", parent, e);
                return;
            }
        }

        if let Err(e) = fs::write(&self.path, text) {
            warn!("failed to write preference file {:?}: {}", self.path, e);
        }
    }
}

impl PrefStore for FilePrefStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
        self.persist();
    }
}

/// Per-user directory holding the preference file and the log file.
pub fn default_data_dir() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join("transit-desk"))
}

/// Opens the preference file in the default data directory, degrading to
/// an in-memory store when the platform offers no such directory.
pub fn open_default_store() -> Box<dyn PrefStore> {
    match default_data_dir() {
        Some(dir) => {
            let path = dir.join("prefs.toml");
            debug!("using preference file {:?}", path);
            Box::new(FilePrefStore::open(path))
        }
        None => {
            warn!("no data directory available, preferences will not survive a restart");
            Box::new(MemoryPrefStore::new())
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn memory_store_returns_what_was_set() {
        let mut store = MemoryPrefStore::new();
        assert_eq!(store.get("app_theme"), None);

        store.set("app_theme", "dark");
        assert_eq!(store.get("app_theme").as_deref(), Some("dark"));

        store.set("app_theme", "sepia");
        assert_eq!(store.get("app_theme").as_deref(), Some("sepia"));
    }

    #[test]
    fn missing_file_is_an_empty_store() {
        let temp = TempDir::new().unwrap();
        let store = FilePrefStore::open(temp.path().join("prefs.toml"));
        assert_eq!(store.get("app_theme"), None);
    }

    #[test]
    fn values_survive_a_reopen() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("prefs.toml");

        let mut store = FilePrefStore::open(path.clone());
        store.set("app_theme", "sepia");
        store.set("window", "maximized");

        let reopened = FilePrefStore::open(path);
        assert_eq!(reopened.get("app_theme").as_deref(), Some("sepia"));
        assert_eq!(reopened.get("window").as_deref(), Some("maximized"));
    }

    #[test]
    fn set_creates_missing_parent_directories() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("dir").join("prefs.toml");

        let mut store = FilePrefStore::open(path.clone());
        store.set("app_theme", "dark");

        assert!(path.exists());
        let reopened = FilePrefStore::open(path);
        assert_eq!(reopened.get("app_theme").as_deref(), Some("dark"));
    }

    #[test]
    fn corrupt_file_degrades_to_empty_and_stays_writable() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("prefs.toml");
        fs::write(&path, "{{{ this is not toml").unwrap();

        let mut store = FilePrefStore::open(path.clone());
        assert_eq!(store.get("app_theme"), None);

        store.set("app_theme", "light");
        let reopened = FilePrefStore::open(path);
        assert_eq!(reopened.get("app_theme").as_deref(), Some("light"));
    }
}
