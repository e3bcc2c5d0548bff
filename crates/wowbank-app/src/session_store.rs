//! Persisted session flag.
//!
//! One boolean-as-string flag file: read at startup, written on login,
//! deleted on logout. Absence of the file means "not logged in" -- never an error.

use std::path::PathBuf;

use wowbank_core::prelude::*;

const FLAG_FILENAME: &str = "session";

/// File-backed store for the logged-in flag.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Store under the platform-local data directory
    /// (`~/.local/share/wowbank/session` on Linux).
    pub fn new() -> Result<Self> {
        let base = dirs::data_local_dir().ok_or(Error::NoDataDir)?;
        Ok(Self::with_base_dir(base.join("wowbank")))
    }

    /// Store under an explicit base directory (used by tests).
    pub fn with_base_dir(base: impl Into<PathBuf>) -> Self {
        Self {
            path: base.into().join(FLAG_FILENAME),
        }
    }

    /// Read the persisted flag; a missing or unreadable file is `false`.
    pub fn load(&self) -> bool {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents.trim() == "true",
            Err(_) => false,
        }
    }

    /// Persist the flag, creating the parent directory if needed.
    pub fn save(&self, logged_in: bool) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| Error::store(format!("create {}: {e}", parent.display())))?;
        }
        std::fs::write(&self.path, if logged_in { "true" } else { "false" })
            .map_err(|e| Error::store(format!("write {}: {e}", self.path.display())))?;
        debug!("session flag saved: {}", logged_in);
        Ok(())
    }

    /// Remove the flag file; missing file is not an error.
    pub fn clear(&self) -> Result<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(Error::store(format!(
                "remove {}: {e}",
                self.path.display()
            ))),
        }
    }
}
