//! Shared state for one invocation: history store, optional remote client, RNG.

use crate::ai::GeminiClient;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::{HistoryStore, JsonFileStore};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{info, warn};

/// Result of trying the remote collaborator.
pub(crate) enum RemoteAttempt<T> {
    /// Remote guidance is off or not configured.
    Disabled,
    Succeeded(T),
    /// The call failed; holds the user-visible reason.
    Failed(String),
}

/// Everything an operation needs besides its own arguments.
pub struct GuidanceContext {
    store: Box<dyn HistoryStore>,
    remote: Option<GeminiClient>,
    rng: StdRng,
}

impl GuidanceContext {
    /// Creates a context from its parts.
    ///
    /// A `seed` makes every random choice reproducible; `None` draws from
    /// system entropy.
    pub fn new(store: Box<dyn HistoryStore>, remote: Option<GeminiClient>, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        GuidanceContext { store, remote, rng }
    }

    /// Builds the context described by `config`.
    ///
    /// Remote guidance is used only when `local_only` is false and an API
    /// key is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the remote client cannot be constructed.
    pub fn from_config(config: &Config, local_only: bool) -> AppResult<Self> {
        let store = Box::new(JsonFileStore::new(&config.data_dir));

        let remote = if local_only {
            info!("Local guidance only (--local)");
            None
        } else if config.remote_configured() {
            Some(GeminiClient::from_config(config)?)
        } else {
            info!("No Gemini API key configured, using local guidance");
            None
        };

        Ok(Self::new(store, remote, config.seed))
    }

    pub fn store(&self) -> &dyn HistoryStore {
        self.store.as_ref()
    }

    pub fn remote_enabled(&self) -> bool {
        self.remote.is_some()
    }

    pub fn rng(&mut self) -> &mut StdRng {
        &mut self.rng
    }

    /// Runs `call` against the remote client when there is one.
    ///
    /// Failures are logged here and reduced to their display text, so the
    /// caller only decides what to substitute.
    pub(crate) fn attempt_remote<T, F>(&self, what: &str, call: F) -> RemoteAttempt<T>
    where
        F: FnOnce(&GeminiClient) -> AppResult<T>,
    {
        let Some(client) = self.remote.as_ref() else {
            return RemoteAttempt::Disabled;
        };

        info!("Requesting remote {} from {}", what, client.model());
        match call(client) {
            Ok(value) => RemoteAttempt::Succeeded(value),
            Err(e) => {
                warn!("Remote {} failed, using local guidance: {}", what, e);
                RemoteAttempt::Failed(e.to_string())
            }
        }
    }
}
