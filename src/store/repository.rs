//! Session record store: the ordered session list, the single debt record
//! and user settings, each persisted as one JSON blob.
//!
//! Loading is best effort: a missing or unreadable blob leaves that part of
//! the state at its default and the error is logged. A blob that was read
//! but failed to parse is copied to `<key>.bak` before the first write that
//! replaces it. Writes happen before the in-memory state changes, so a
//! failed write leaves the store as it was.

use super::blob::BlobStore;
use crate::error::{RealityError, Result};
use crate::session::{DebtInfo, NewSession, Session, SessionUpdate, UserSettings};
use serde::de::DeserializeOwned;
use std::collections::HashMap;

pub const SESSIONS_KEY: &str = "gambling_sessions";
pub const DEBT_KEY: &str = "debt_info";
pub const SETTINGS_KEY: &str = "user_settings";

pub struct SessionStore<B: BlobStore> {
    backend: B,
    sessions: Vec<Session>,
    debt_info: Option<DebtInfo>,
    settings: UserSettings,
    /// Raw text of blobs that were present but failed to parse
    unparsed: HashMap<&'static str, String>,
}

fn load_blob<B: BlobStore, T: DeserializeOwned>(
    backend: &B,
    key: &'static str,
    unparsed: &mut HashMap<&'static str, String>,
) -> Option<T> {
    let raw = match backend.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(e) => {
            log::error!("Error loading '{}': {}", key, e);
            return None;
        }
    };
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            log::error!("Error parsing '{}': {}", key, e);
            unparsed.insert(key, raw);
            None
        }
    }
}

impl<B: BlobStore> SessionStore<B> {
    pub fn open(backend: B) -> Self {
        let mut unparsed = HashMap::new();
        let sessions: Vec<Session> =
            load_blob(&backend, SESSIONS_KEY, &mut unparsed).unwrap_or_default();
        let debt_info = load_blob(&backend, DEBT_KEY, &mut unparsed);
        let settings = load_blob(&backend, SETTINGS_KEY, &mut unparsed).unwrap_or_default();
        log::debug!(
            "Opened store with {} sessions, debt info {}",
            sessions.len(),
            if debt_info.is_some() { "present" } else { "absent" }
        );

        Self {
            backend,
            sessions,
            debt_info,
            settings,
            unparsed,
        }
    }

    /// Write `json` under `key`, first backing up an unparsed blob it would replace
    fn write_blob(&mut self, key: &'static str, json: &str) -> Result<()> {
        if let Some(raw) = self.unparsed.get(key) {
            let backup = format!("{}.bak", key);
            self.backend.set(&backup, raw)?;
            log::warn!(
                "Replacing unreadable '{}'; previous contents kept as '{}'",
                key,
                backup
            );
            self.unparsed.remove(key);
        }
        self.backend.set(key, json)
    }

    /// Sessions in insertion order
    pub fn sessions(&self) -> &[Session] {
        &self.sessions
    }

    pub fn session(&self, id: &str) -> Option<&Session> {
        self.sessions.iter().find(|s| s.id() == id)
    }

    pub fn debt_info(&self) -> Option<&DebtInfo> {
        self.debt_info.as_ref()
    }

    pub fn settings(&self) -> &UserSettings {
        &self.settings
    }

    fn save_sessions(&mut self, sessions: Vec<Session>) -> Result<()> {
        let json = serde_json::to_string(&sessions)?;
        self.write_blob(SESSIONS_KEY, &json)?;
        self.sessions = sessions;
        Ok(())
    }

    /// Append a new session; returns its generated id
    pub fn add_session(&mut self, new: NewSession) -> Result<String> {
        let session = Session::create(new);
        let id = session.id().to_string();
        let mut sessions = self.sessions.clone();
        sessions.push(session);
        self.save_sessions(sessions)?;
        log::info!("Added session {}", id);
        Ok(id)
    }

    /// Append already-built sessions, e.g. from a CSV import
    pub fn import_sessions(&mut self, imported: Vec<Session>) -> Result<usize> {
        let count = imported.len();
        let mut sessions = self.sessions.clone();
        sessions.extend(imported);
        self.save_sessions(sessions)?;
        log::info!("Imported {} sessions", count);
        Ok(count)
    }

    /// Replace the mutable fields of the session with this id
    pub fn update_session(&mut self, id: &str, update: SessionUpdate) -> Result<()> {
        let mut sessions = self.sessions.clone();
        let session = sessions
            .iter_mut()
            .find(|s| s.id() == id)
            .ok_or_else(|| RealityError::SessionNotFound(id.to_string()))?;
        session.apply(update);
        self.save_sessions(sessions)?;
        log::info!("Updated session {}", id);
        Ok(())
    }

    pub fn delete_session(&mut self, id: &str) -> Result<()> {
        if self.session(id).is_none() {
            return Err(RealityError::SessionNotFound(id.to_string()));
        }
        let sessions: Vec<Session> =
            self.sessions.iter().filter(|s| s.id() != id).cloned().collect();
        self.save_sessions(sessions)?;
        log::info!("Deleted session {}", id);
        Ok(())
    }

    /// Replace the debt record wholesale
    pub fn save_debt_info(&mut self, debt: DebtInfo) -> Result<()> {
        let json = serde_json::to_string(&debt)?;
        self.write_blob(DEBT_KEY, &json)?;
        self.debt_info = Some(debt);
        log::info!("Saved debt info");
        Ok(())
    }

    pub fn save_settings(&mut self, settings: UserSettings) -> Result<()> {
        let json = serde_json::to_string(&settings)?;
        self.write_blob(SETTINGS_KEY, &json)?;
        self.settings = settings;
        Ok(())
    }

    /// Remove every blob and reset to an empty store with default settings
    pub fn clear_all(&mut self) -> Result<()> {
        for key in [SESSIONS_KEY, DEBT_KEY, SETTINGS_KEY] {
            self.backend.delete(key)?;
        }
        self.sessions.clear();
        self.debt_info = None;
        self.settings = UserSettings::default();
        self.unparsed.clear();
        log::info!("Cleared all stored data");
        Ok(())
    }

    pub fn into_backend(self) -> B {
        self.backend
    }
}
