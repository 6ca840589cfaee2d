use std::sync::Arc;

use tokio::sync::RwLock;

use crate::config::Config;
use crate::profile::session::Session;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// The one editing session this process serves. Import takes the write
    /// lock for the whole apply, so readers never see a partial import.
    pub session: Arc<RwLock<Session>>,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            session: Arc::new(RwLock::new(Session::new(config.id_strategy))),
        }
    }
}
