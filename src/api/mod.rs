mod cors;
mod error;
mod handlers;
mod path;
mod state;

pub use cors::{ALLOW_HEADERS, ALLOW_METHODS, ALLOW_ORIGIN};
pub use error::{ApiError, NOT_FOUND_MESSAGE};
pub use handlers::USAGE;
pub use state::AppState;

use std::sync::Arc;

use axum::Router;
use axum::middleware;
use axum::routing::get;
use log::info;
use tower::ServiceExt;

use crate::core::EntryGateError;
use crate::store::Connector;

pub struct EntryApi {
    state: AppState,
}

impl EntryApi {
    pub fn new(connector: Arc<dyn Connector>) -> Self {
        Self {
            state: AppState { connector },
        }
    }

    /// Routes not listed here, and other methods on listed paths, get the
    /// usage text. Paths are normalized before they are matched.
    pub fn router(&self) -> Router {
        let routes = Router::new()
            .route(
                "/api/entries",
                get(handlers::list_entries).fallback(handlers::usage),
            )
            .route(
                "/api/entries/{id}/css",
                get(handlers::entry_css).fallback(handlers::usage),
            )
            .route(
                "/api/entries/{id}/keywords",
                get(handlers::entry_keywords).fallback(handlers::usage),
            )
            .fallback(handlers::usage)
            .with_state(self.state.clone());

        let mut router = Router::new()
            .fallback_service(ServiceExt::<axum::extract::Request>::map_request(
                routes,
                path::normalize,
            ))
            .layer(middleware::from_fn(cors::preflight));
        for layer in cors::headers() {
            router = router.layer(layer);
        }
        router
    }

    pub async fn serve(self, addr: &str) -> Result<(), EntryGateError> {
        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| EntryGateError::IoError(format!("binding to {addr}: {e}")))?;
        info!("listening on {addr}");
        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| EntryGateError::IoError(format!("serving: {e}")))?;
        info!("server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            log::error!("failed to listen for ctrl-c: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                log::error!("failed to listen for SIGTERM: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("shutdown signal received");
}
