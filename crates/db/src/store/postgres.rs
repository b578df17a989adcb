use async_trait::async_trait;
use folio_core::types::DbId;

use super::{ProjectStore, StoreError};
use crate::models::project::{CreateProject, Project, UpdateProject};
use crate::repositories::ProjectRepo;
use crate::DbPool;

/// PostgreSQL-backed [`ProjectStore`] delegating to [`ProjectRepo`].
#[derive(Clone)]
pub struct PgProjectStore {
    pool: DbPool,
}

impl PgProjectStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Close every pooled connection and wait for them to drain.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl ProjectStore for PgProjectStore {
    fn is_available(&self) -> bool {
        !self.pool.is_closed()
    }

    async fn ping(&self) -> Result<(), StoreError> {
        crate::health_check(&self.pool).await?;
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Project>, StoreError> {
        Ok(ProjectRepo::list(&self.pool).await?)
    }

    async fn list_featured(&self) -> Result<Vec<Project>, StoreError> {
        Ok(ProjectRepo::list_featured(&self.pool).await?)
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Project>, StoreError> {
        Ok(ProjectRepo::find_by_id(&self.pool, id).await?)
    }

    async fn create(&self, input: &CreateProject) -> Result<Project, StoreError> {
        Ok(ProjectRepo::create(&self.pool, input).await?)
    }

    async fn update(
        &self,
        id: DbId,
        input: &UpdateProject,
    ) -> Result<Option<Project>, StoreError> {
        Ok(ProjectRepo::update(&self.pool, id, input).await?)
    }

    async fn delete(&self, id: DbId) -> Result<bool, StoreError> {
        Ok(ProjectRepo::delete(&self.pool, id).await?)
    }
}
