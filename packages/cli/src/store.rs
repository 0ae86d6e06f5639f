//! File-backed page-scoped storage.
//!
//! The browser keeps the session identity in page-scoped storage; a
//! terminal keeps it in a small JSON object file between invocations. The
//! file *is* the scope: `logout` deletes it, and a missing or unreadable
//! file simply means the next account-bound operation probes the portal
//! again.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing::warn;

use astropost::SessionStore;

/// [`SessionStore`] persisted as a JSON string map in one file.
pub struct FileStore {
    path: PathBuf,
    entries: Mutex<HashMap<String, String>>,
}

impl FileStore {
    /// Open the store at `path`, loading existing entries when the file is
    /// readable. A missing or malformed file starts the scope empty.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = fs::read_to_string(&path)
            .ok()
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default();
        Self {
            path,
            entries: Mutex::new(entries),
        }
    }

    /// Best-effort write-through. Losing the file costs one extra probe on
    /// the next run, so failures are logged, not raised.
    fn persist(&self, entries: &HashMap<String, String>) {
        let raw = match serde_json::to_string_pretty(entries) {
            Ok(raw) => raw,
            Err(error) => {
                warn!("session store: could not encode entries: {error}");
                return;
            }
        };
        if let Err(error) = fs::write(&self.path, raw) {
            warn!(
                "session store: could not write {}: {error}",
                self.path.display()
            );
        }
    }
}

impl SessionStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        let mut entries = self.entries.lock().unwrap();
        entries.insert(key.to_owned(), value.to_owned());
        self.persist(&entries);
    }

    fn clear(&self) {
        self.entries.lock().unwrap().clear();
        if let Err(error) = fs::remove_file(&self.path) {
            if error.kind() != ErrorKind::NotFound {
                warn!(
                    "session store: could not remove {}: {error}",
                    self.path.display()
                );
            }
        }
    }
}

/// Default scope file, shared by every shell on the same machine.
pub fn default_session_path() -> PathBuf {
    std::env::temp_dir().join("apost-session.json")
}
