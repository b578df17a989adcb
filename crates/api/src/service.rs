//! The project resource service.
//!
//! Sits between the HTTP handlers and the injected [`ProjectStore`]. Store
//! readiness is checked before every call; missing records become
//! [`CoreError::NotFound`]. Identifiers and request bodies arrive already
//! parsed and validated by the extractors.

use std::sync::Arc;

use folio_core::error::CoreError;
use folio_core::types::DbId;
use folio_db::models::project::{CreateProject, Project, UpdateProject};
use folio_db::ProjectStore;

use crate::error::AppResult;

const ENTITY: &str = "Project";

#[derive(Clone)]
pub struct ProjectService {
    store: Arc<dyn ProjectStore>,
}

impl ProjectService {
    pub fn new(store: Arc<dyn ProjectStore>) -> Self {
        Self { store }
    }

    fn ensure_available(&self) -> Result<(), CoreError> {
        if self.store.is_available() {
            Ok(())
        } else {
            tracing::warn!("Project store is not available");
            Err(CoreError::StoreUnavailable)
        }
    }

    fn not_found(id: DbId) -> CoreError {
        CoreError::NotFound {
            entity: ENTITY,
            id: id.to_string(),
        }
    }

    /// All projects, newest first.
    pub async fn list(&self) -> AppResult<Vec<Project>> {
        self.ensure_available()?;
        Ok(self.store.list().await?)
    }

    /// Featured projects, newest first.
    pub async fn list_featured(&self) -> AppResult<Vec<Project>> {
        self.ensure_available()?;
        Ok(self.store.list_featured().await?)
    }

    pub async fn get(&self, id: DbId) -> AppResult<Project> {
        self.ensure_available()?;
        let project = self
            .store
            .find_by_id(id)
            .await?
            .ok_or_else(|| Self::not_found(id))?;
        Ok(project)
    }

    pub async fn create(&self, input: &CreateProject) -> AppResult<Project> {
        self.ensure_available()?;
        let project = self.store.create(input).await?;
        tracing::info!(project_id = %project.id, title = %project.title, "Project created");
        Ok(project)
    }

    /// Merge `input` onto an existing project.
    pub async fn update(&self, id: DbId, input: &UpdateProject) -> AppResult<Project> {
        self.ensure_available()?;
        let project = self
            .store
            .update(id, input)
            .await?
            .ok_or_else(|| Self::not_found(id))?;
        tracing::info!(project_id = %project.id, "Project updated");
        Ok(project)
    }

    pub async fn delete(&self, id: DbId) -> AppResult<()> {
        self.ensure_available()?;
        if !self.store.delete(id).await? {
            return Err(Self::not_found(id).into());
        }
        tracing::info!(project_id = %id, "Project deleted");
        Ok(())
    }

    /// Whether the store answers a round-trip right now. Never fails.
    pub async fn store_connected(&self) -> bool {
        if !self.store.is_available() {
            return false;
        }
        match self.store.ping().await {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(error = %e, "Project store ping failed");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use folio_db::MemoryProjectStore;

    use super::*;
    use crate::error::AppError;

    fn service() -> (ProjectService, Arc<MemoryProjectStore>) {
        let store = Arc::new(MemoryProjectStore::new());
        (ProjectService::new(store.clone()), store)
    }

    fn input() -> CreateProject {
        CreateProject {
            title: "A".into(),
            description: "B".into(),
            long_description: None,
            image: "http://x".into(),
            tags: vec![],
            demo_link: None,
            code_link: None,
            featured: false,
            challenges: None,
            solutions: None,
        }
    }

    #[tokio::test]
    async fn missing_record_is_not_found() {
        let (service, _) = service();
        let id = uuid::Uuid::new_v4();
        assert_matches!(
            service.get(id).await,
            Err(AppError::Core(CoreError::NotFound { entity: "Project", .. }))
        );
        assert_matches!(
            service.delete(id).await,
            Err(AppError::Core(CoreError::NotFound { .. }))
        );
    }

    #[tokio::test]
    async fn delete_then_get_is_not_found() {
        let (service, _) = service();
        let project = service.create(&input()).await.unwrap();
        service.delete(project.id).await.unwrap();
        assert_matches!(
            service.get(project.id).await,
            Err(AppError::Core(CoreError::NotFound { .. }))
        );
    }

    #[tokio::test]
    async fn unavailable_store_short_circuits() {
        let (service, store) = service();
        store.set_available(false);

        assert_matches!(
            service.list().await,
            Err(AppError::Core(CoreError::StoreUnavailable))
        );
        assert_matches!(
            service.get(uuid::Uuid::new_v4()).await,
            Err(AppError::Core(CoreError::StoreUnavailable))
        );
        assert!(!service.store_connected().await);
    }

    #[tokio::test]
    async fn store_connected_when_available() {
        let (service, _) = service();
        assert!(service.store_connected().await);
    }
}
