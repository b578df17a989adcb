use std::sync::Arc;

use crate::config::ServerConfig;
use crate::service::ProjectService;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Project resource service wrapping the injected store.
    pub projects: ProjectService,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
