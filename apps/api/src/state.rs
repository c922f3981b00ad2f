use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};

use crate::config::Config;
use crate::preferences::theme::{PreferenceStore, Theme};
use crate::profile::session::EditSession;
use crate::provider::DataProvider;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable data source. Default: MockDataProvider.
    pub provider: Arc<dyn DataProvider>,
    /// The single open profile edit, if any. `None` means no draft exists.
    pub edit_session: Arc<Mutex<Option<EditSession>>>,
    pub theme: Arc<RwLock<Theme>>,
    pub preferences: PreferenceStore,
}

impl AppState {
    pub fn new(config: Config, provider: Arc<dyn DataProvider>, theme: Theme) -> Self {
        let preferences = PreferenceStore::new(config.preferences_path.clone());
        AppState {
            config,
            provider,
            edit_session: Arc::new(Mutex::new(None)),
            theme: Arc::new(RwLock::new(theme)),
            preferences,
        }
    }
}
