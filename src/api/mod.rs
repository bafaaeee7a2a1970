/// HTTP surface: routes, handlers, shared state, and error mapping.

use std::sync::Arc;

use crate::config::AppConfig;
use crate::store::PgStore;

pub mod error;
pub mod handlers;
pub mod routes;

/// Shared application state, cloned into every handler.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<PgStore>,
    pub config: Arc<AppConfig>,
}
