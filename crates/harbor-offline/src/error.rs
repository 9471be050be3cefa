use thiserror::Error;

#[derive(Debug, Error)]
pub enum OfflineError {
    #[error("offline and no cached copy of {path}")]
    Offline { path: String },

    #[error("network error for {path}: {reason}")]
    Network { path: String, reason: String },

    #[error("precache of {path} failed with status {status}")]
    Install { path: String, status: u16 },
}
