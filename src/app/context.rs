use crate::app::session::Session;
use crate::domain::{AppConfig, AppError};
use crate::ports::{GenerationClient, KeyValueStore};

/// Application context holding dependencies for command execution.
pub struct AppContext<S: KeyValueStore, G: GenerationClient> {
    store: S,
    client: G,
    config: AppConfig,
}

impl<S: KeyValueStore, G: GenerationClient> AppContext<S, G> {
    /// Create a new application context.
    pub fn new(store: S, client: G, config: AppConfig) -> Self {
        Self { store, client, config }
    }

    /// Get a reference to the generation client.
    pub fn client(&self) -> &G {
        &self.client
    }

    /// Split the context back into its dependencies.
    pub fn into_parts(self) -> (S, G, AppConfig) {
        (self.store, self.client, self.config)
    }
}

impl<S: KeyValueStore + Clone, G: GenerationClient> AppContext<S, G> {
    /// Open a session over the context's store.
    pub fn open_session(&self) -> Result<Session<S>, AppError> {
        Session::open(self.store.clone(), &self.config)
    }
}
