use std::sync::Arc;

use secrecy::ExposeSecret;
use tokio::sync::OnceCell;

use super::{RemoteDataStore, SupabaseClient};
use crate::config::StoreSettings;

#[derive(thiserror::Error, Debug)]
pub enum StoreUnavailable {
    #[error("SUPABASE_URL and SUPABASE_KEY must be set in environment variables")]
    MissingCredentials,
    #[error("failed to build the store client")]
    Client(#[source] reqwest::Error),
}

/// Process-wide store handle, built the first time a request needs it.
///
/// Construction failures leave the handle empty, so the next request tries again.
#[derive(Clone)]
pub struct LazyStore {
    settings: StoreSettings,
    store: Arc<OnceCell<Arc<dyn RemoteDataStore>>>,
}

impl LazyStore {
    pub fn new(settings: StoreSettings) -> Self {
        Self {
            settings,
            store: Arc::new(OnceCell::new()),
        }
    }

    /// A handle that is already initialised with `store`.
    pub fn with_store(settings: StoreSettings, store: Arc<dyn RemoteDataStore>) -> Self {
        Self {
            settings,
            store: Arc::new(OnceCell::new_with(Some(store))),
        }
    }

    pub async fn get(&self) -> Result<Arc<dyn RemoteDataStore>, StoreUnavailable> {
        self.store
            .get_or_try_init(|| async { self.connect() })
            .await
            .cloned()
    }

    pub fn is_initialized(&self) -> bool {
        self.store.initialized()
    }

    fn connect(&self) -> Result<Arc<dyn RemoteDataStore>, StoreUnavailable> {
        let url = self
            .settings
            .url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
            .ok_or(StoreUnavailable::MissingCredentials)?;
        let key = self
            .settings
            .key
            .as_ref()
            .filter(|key| !key.expose_secret().trim().is_empty())
            .ok_or(StoreUnavailable::MissingCredentials)?;

        tracing::info!(url, "connecting to the waitlist store");
        let client = SupabaseClient::new(url.to_owned(), key.clone(), self.settings.timeout())
            .map_err(StoreUnavailable::Client)?;
        Ok(Arc::new(client))
    }
}
