use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Session file name in cache directory
const SESSION_FILE: &str = "session.json";

/// The token pair returned by a successful login
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub access: String,
    pub refresh: String,
}

impl Session {
    pub fn new(access: impl Into<String>, refresh: impl Into<String>) -> Self {
        Self {
            access: access.into(),
            refresh: refresh.into(),
        }
    }
}

/// Holds the current session for an `ApiClient`.
///
/// The client reads it before every request and writes it on login,
/// logout and 401 handling.
pub trait SessionStore: Send + Sync {
    fn get(&self) -> Option<Session>;
    fn set(&self, session: Session) -> Result<()>;
    fn clear(&self) -> Result<()>;
}

fn lock(slot: &Mutex<Option<Session>>) -> MutexGuard<'_, Option<Session>> {
    slot.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Process-local store; the session ends with the process.
#[derive(Default)]
pub struct MemorySessionStore {
    current: Mutex<Option<Session>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_session(session: Session) -> Self {
        Self {
            current: Mutex::new(Some(session)),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self) -> Option<Session> {
        lock(&self.current).clone()
    }

    fn set(&self, session: Session) -> Result<()> {
        *lock(&self.current) = Some(session);
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        *lock(&self.current) = None;
        Ok(())
    }
}

/// Store persisted as JSON in the cache directory so a login survives
/// between runs.
pub struct FileSessionStore {
    cache_dir: PathBuf,
    current: Mutex<Option<Session>>,
}

impl FileSessionStore {
    /// Open the store, picking up a session saved by an earlier run.
    /// An unreadable session file is treated as no session.
    pub fn open(cache_dir: PathBuf) -> Self {
        let store = Self {
            cache_dir,
            current: Mutex::new(None),
        };
        match store.load() {
            Ok(session) => *lock(&store.current) = session,
            Err(e) => warn!(error = %e, "Ignoring unreadable session file"),
        }
        store
    }

    /// Load session from disk
    fn load(&self) -> Result<Option<Session>> {
        let path = self.session_path();
        if !path.exists() {
            return Ok(None);
        }
        let contents = std::fs::read_to_string(&path).context("Failed to read session file")?;
        let session: Session =
            serde_json::from_str(&contents).context("Failed to parse session file")?;
        Ok(Some(session))
    }

    fn session_path(&self) -> PathBuf {
        self.cache_dir.join(SESSION_FILE)
    }
}

impl SessionStore for FileSessionStore {
    fn get(&self) -> Option<Session> {
        lock(&self.current).clone()
    }

    fn set(&self, session: Session) -> Result<()> {
        let path = self.session_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create session directory")?;
        }
        let contents = serde_json::to_string_pretty(&session)?;
        std::fs::write(&path, contents).context("Failed to write session file")?;
        *lock(&self.current) = Some(session);
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        // Drop the in-memory copy first so a failed delete still logs the user out
        *lock(&self.current) = None;
        let path = self.session_path();
        if path.exists() {
            std::fs::remove_file(&path).context("Failed to remove session file")?;
        }
        Ok(())
    }
}
