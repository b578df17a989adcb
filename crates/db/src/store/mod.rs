//! Storage abstraction for projects.
//!
//! The service layer holds an `Arc<dyn ProjectStore>` so the process entry
//! point decides which backend is used: [`PgProjectStore`] in production,
//! [`MemoryProjectStore`] in tests.

mod memory;
mod postgres;

use async_trait::async_trait;
use folio_core::types::DbId;

use crate::models::project::{CreateProject, Project, UpdateProject};

pub use memory::MemoryProjectStore;
pub use postgres::PgProjectStore;

/// Errors raised by a [`ProjectStore`] backend.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The backend is shut down or otherwise not accepting work.
    #[error("Store unavailable")]
    Unavailable,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Persistence operations the project service relies on.
///
/// Listings are ordered newest first (`created_at DESC`, then `id DESC`).
#[async_trait]
pub trait ProjectStore: Send + Sync {
    /// Cheap, non-blocking readiness flag. Does not touch the network.
    fn is_available(&self) -> bool;

    /// Round-trip to the backend to prove it is reachable.
    async fn ping(&self) -> Result<(), StoreError>;

    async fn list(&self) -> Result<Vec<Project>, StoreError>;

    async fn list_featured(&self) -> Result<Vec<Project>, StoreError>;

    async fn find_by_id(&self, id: DbId) -> Result<Option<Project>, StoreError>;

    /// Persist a new project. The store assigns `id` and both timestamps.
    async fn create(&self, input: &CreateProject) -> Result<Project, StoreError>;

    /// Merge `input` onto the stored project and advance `updated_at`.
    ///
    /// Returns `None` when no project has this id.
    async fn update(&self, id: DbId, input: &UpdateProject)
        -> Result<Option<Project>, StoreError>;

    /// Remove a project permanently. Returns `false` when nothing matched.
    async fn delete(&self, id: DbId) -> Result<bool, StoreError>;
}
