use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use chrono::{Duration, Utc};
use folio_core::types::{DbId, Timestamp};
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{ProjectStore, StoreError};
use crate::models::project::{CreateProject, Project, UpdateProject};

/// In-process [`ProjectStore`] with the same ordering and merge semantics as
/// the PostgreSQL store.
///
/// Creation timestamps are strictly increasing, so newest-first ordering
/// matches reverse insertion order.
#[derive(Debug)]
pub struct MemoryProjectStore {
    projects: RwLock<Vec<Project>>,
    available: AtomicBool,
}

impl Default for MemoryProjectStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryProjectStore {
    pub fn new() -> Self {
        Self {
            projects: RwLock::new(Vec::new()),
            available: AtomicBool::new(true),
        }
    }

    /// Toggle availability to simulate the backend going away.
    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    fn ensure_available(&self) -> Result<(), StoreError> {
        if self.is_available() {
            Ok(())
        } else {
            Err(StoreError::Unavailable)
        }
    }

    fn sorted(mut projects: Vec<Project>) -> Vec<Project> {
        projects.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        projects
    }
}

/// Current time, bumped past `floor` when the clock has not moved.
fn now_after(floor: Option<Timestamp>) -> Timestamp {
    let now = Utc::now();
    match floor {
        Some(floor) if now <= floor => floor + Duration::microseconds(1),
        _ => now,
    }
}

#[async_trait]
impl ProjectStore for MemoryProjectStore {
    fn is_available(&self) -> bool {
        self.available.load(Ordering::SeqCst)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.ensure_available()
    }

    async fn list(&self) -> Result<Vec<Project>, StoreError> {
        self.ensure_available()?;
        let projects = self.projects.read().await;
        Ok(Self::sorted(projects.clone()))
    }

    async fn list_featured(&self) -> Result<Vec<Project>, StoreError> {
        self.ensure_available()?;
        let projects = self.projects.read().await;
        let featured = projects.iter().filter(|p| p.featured).cloned().collect();
        Ok(Self::sorted(featured))
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Project>, StoreError> {
        self.ensure_available()?;
        let projects = self.projects.read().await;
        Ok(projects.iter().find(|p| p.id == id).cloned())
    }

    async fn create(&self, input: &CreateProject) -> Result<Project, StoreError> {
        self.ensure_available()?;
        let mut projects = self.projects.write().await;

        let latest = projects.iter().map(|p| p.created_at).max();
        let now = now_after(latest);
        let project = Project {
            id: Uuid::new_v4(),
            title: input.title.clone(),
            description: input.description.clone(),
            long_description: input.long_description.clone(),
            image: input.image.clone(),
            tags: input.tags.clone(),
            demo_link: input.demo_link.clone(),
            code_link: input.code_link.clone(),
            featured: input.featured,
            challenges: input.challenges.clone(),
            solutions: input.solutions.clone(),
            created_at: now,
            updated_at: now,
        };
        projects.push(project.clone());
        Ok(project)
    }

    async fn update(
        &self,
        id: DbId,
        input: &UpdateProject,
    ) -> Result<Option<Project>, StoreError> {
        self.ensure_available()?;
        let mut projects = self.projects.write().await;

        let Some(project) = projects.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };
        input.merge_into(project);
        project.updated_at = now_after(Some(project.updated_at));
        Ok(Some(project.clone()))
    }

    async fn delete(&self, id: DbId) -> Result<bool, StoreError> {
        self.ensure_available()?;
        let mut projects = self.projects.write().await;

        let before = projects.len();
        projects.retain(|p| p.id != id);
        Ok(projects.len() < before)
    }
}
