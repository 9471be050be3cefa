use anyhow::Context;
use harbor_auth::{AuthError, SessionFile, SessionResolver, StoredSession};
use harbor_config::HarborConfig;
use harbor_core::entities::Actor;
use harbor_store::{EntityStore, StoreOrigin, load_store};

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub config: HarborConfig,
    pub store: EntityStore,
    pub origin: StoreOrigin,
    pub session: SessionResolver,
    pub session_file: SessionFile,
}

impl AppContext {
    /// Load the store, then hydrate the persisted session against it.
    pub async fn init(config: HarborConfig) -> anyhow::Result<Self> {
        let loaded = load_store(&config.backend).await;
        let session_file =
            SessionFile::from_config(&config.general).context("failed to locate session file")?;

        let stored = match session_file.load() {
            Ok(stored) => stored,
            Err(error) => {
                tracing::warn!(%error, path = %session_file.path().display(), "ignoring unreadable session file");
                None
            }
        };

        let mut session = SessionResolver::new();
        session.hydrate(&loaded.store, stored.as_ref());

        Ok(Self {
            config,
            store: loaded.store,
            origin: loaded.origin,
            session,
            session_file,
        })
    }

    /// The logged-in actor, or an error pointing at `hbr login`.
    pub fn require_actor(&self) -> anyhow::Result<&Actor> {
        self.session
            .current_actor()
            .ok_or_else(|| AuthError::NotAuthenticated.into())
    }

    /// Persist the current actor, or clear the file when nobody is logged in.
    pub fn persist_session(&self) -> anyhow::Result<()> {
        match self.session.current_actor() {
            Some(actor) => self
                .session_file
                .save(&StoredSession::for_actor(actor, chrono::Utc::now()))
                .context("failed to save session"),
            None => self.session_file.clear().context("failed to clear session"),
        }
    }
}
