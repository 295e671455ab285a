use anyhow::{Context, Result};
use keyring::Entry;
use tracing::debug;

use super::{Session, SessionStore};

const SERVICE_NAME: &str = "lsc-portal";
const ACCESS_ENTRY: &str = "access_token";
const REFRESH_ENTRY: &str = "refresh_token";

/// Session store backed by the OS keychain.
/// The two tokens are kept as separate entries under one service name.
pub struct KeyringSessionStore {
    service: String,
}

impl Default for KeyringSessionStore {
    fn default() -> Self {
        Self::new(SERVICE_NAME)
    }
}

impl KeyringSessionStore {
    pub fn new(service: impl Into<String>) -> Self {
        Self {
            service: service.into(),
        }
    }

    fn entry(&self, name: &str) -> Result<Entry> {
        Entry::new(&self.service, name).context("Failed to create keyring entry")
    }

    fn read(&self, name: &str) -> Option<String> {
        match self.entry(name).and_then(|e| {
            e.get_password()
                .context("Failed to retrieve token from keychain")
        }) {
            Ok(value) => Some(value),
            Err(e) => {
                debug!(entry = name, error = %e, "No token in keychain");
                None
            }
        }
    }

    fn delete(&self, name: &str) -> Result<()> {
        match self.entry(name)?.delete_credential() {
            Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
            Err(e) => Err(e).context("Failed to delete token from keychain"),
        }
    }
}

impl SessionStore for KeyringSessionStore {
    fn get(&self) -> Option<Session> {
        let access = self.read(ACCESS_ENTRY)?;
        let refresh = self.read(REFRESH_ENTRY)?;
        Some(Session { access, refresh })
    }

    fn set(&self, session: Session) -> Result<()> {
        self.entry(ACCESS_ENTRY)?
            .set_password(&session.access)
            .context("Failed to store access token in keychain")?;
        self.entry(REFRESH_ENTRY)?
            .set_password(&session.refresh)
            .context("Failed to store refresh token in keychain")?;
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        // Attempt both even if the first fails
        let access = self.delete(ACCESS_ENTRY);
        let refresh = self.delete(REFRESH_ENTRY);
        access.and(refresh)
    }
}
