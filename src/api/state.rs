use std::sync::Arc;

use crate::store::Connector;

/// Shared application state for HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    pub connector: Arc<dyn Connector>,
}
