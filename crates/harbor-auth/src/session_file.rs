//! Persisted session between CLI invocations.
//!
//! Only the actor reference is stored; the actor itself is re-resolved from
//! the store on every run so status changes take effect immediately.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use harbor_config::GeneralConfig;
use harbor_core::entities::{Actor, ActorRef};
use harbor_core::enums::Role;
use serde::{Deserialize, Serialize};

use crate::error::AuthError;

const SESSION_FILE_NAME: &str = "session.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredSession {
    pub actor: ActorRef,
    /// Role at login time. Informational; the live role comes from the store.
    pub role: Role,
    pub logged_in_at: DateTime<Utc>,
}

impl StoredSession {
    #[must_use]
    pub fn for_actor(actor: &Actor, logged_in_at: DateTime<Utc>) -> Self {
        Self {
            actor: actor.actor_ref(),
            role: actor.role(),
            logged_in_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SessionFile {
    path: PathBuf,
}

impl SessionFile {
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Use `general.session_path` when set, otherwise `<config dir>/harbor/session.json`.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::SessionStore`] if no config directory can be determined.
    pub fn from_config(config: &GeneralConfig) -> Result<Self, AuthError> {
        if config.session_path.trim().is_empty() {
            Self::default_path().map(Self::new)
        } else {
            Ok(Self::new(PathBuf::from(config.session_path.trim())))
        }
    }

    /// # Errors
    ///
    /// Returns [`AuthError::SessionStore`] if no config directory can be determined.
    pub fn default_path() -> Result<PathBuf, AuthError> {
        dirs::config_dir()
            .map(|dir| dir.join("harbor").join(SESSION_FILE_NAME))
            .ok_or_else(|| {
                AuthError::SessionStore("config directory not found; cannot store session".into())
            })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored session. A missing file is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::SessionStore`] if the file exists but cannot be
    /// read or parsed.
    pub fn load(&self) -> Result<Option<StoredSession>, AuthError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(&self.path).map_err(|e| {
            AuthError::SessionStore(format!("read {}: {e}", self.path.display()))
        })?;
        if raw.trim().is_empty() {
            return Ok(None);
        }
        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|e| AuthError::SessionStore(format!("parse {}: {e}", self.path.display())))
    }

    /// # Errors
    ///
    /// Returns [`AuthError::SessionStore`] if the directory or file cannot be written.
    pub fn save(&self, session: &StoredSession) -> Result<(), AuthError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                AuthError::SessionStore(format!("mkdir {}: {e}", parent.display()))
            })?;
        }
        let json = serde_json::to_string_pretty(session)
            .map_err(|e| AuthError::SessionStore(format!("serialize session: {e}")))?;
        fs::write(&self.path, json)
            .map_err(|e| AuthError::SessionStore(format!("write {}: {e}", self.path.display())))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            if let Err(e) = fs::set_permissions(&self.path, fs::Permissions::from_mode(0o600)) {
                tracing::warn!("failed to chmod 0600 {}: {e}", self.path.display());
            }
        }

        Ok(())
    }

    /// Remove the stored session, if any.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::SessionStore`] if the file exists but cannot be removed.
    pub fn clear(&self) -> Result<(), AuthError> {
        if self.path.exists() {
            fs::remove_file(&self.path).map_err(|e| {
                AuthError::SessionStore(format!("failed to delete {}: {e}", self.path.display()))
            })?;
        }
        Ok(())
    }
}
