//! Repository for the `projects` table.

use folio_core::types::DbId;
use sqlx::PgPool;

use crate::models::project::{CreateProject, Project, UpdateProject};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, description, long_description, image, tags, demo_link, \
     code_link, featured, challenges, solutions, created_at, updated_at";

/// Newest first; id breaks ties so listings are deterministic.
const ORDER: &str = "ORDER BY created_at DESC, id DESC";

/// Provides CRUD operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project, returning the created row.
    ///
    /// `id`, `created_at` and `updated_at` come from column defaults.
    pub async fn create(pool: &PgPool, input: &CreateProject) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects
                (title, description, long_description, image, tags,
                 demo_link, code_link, featured, challenges, solutions)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.long_description)
            .bind(&input.image)
            .bind(&input.tags)
            .bind(&input.demo_link)
            .bind(&input.code_link)
            .bind(input.featured)
            .bind(&input.challenges)
            .bind(&input.solutions)
            .fetch_one(pool)
            .await
    }

    /// Find a project by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all projects, most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects {ORDER}");
        sqlx::query_as::<_, Project>(&query).fetch_all(pool).await
    }

    /// List featured projects, most recently created first.
    pub async fn list_featured(pool: &PgPool) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE featured {ORDER}");
        sqlx::query_as::<_, Project>(&query).fetch_all(pool).await
    }

    /// Update a project. Only non-`None` fields in `input` are applied.
    ///
    /// `updated_at` always moves forward, even when two updates land within
    /// the same transaction timestamp. Returns `None` if no row with the
    /// given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProject,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                long_description = COALESCE($4, long_description),
                image = COALESCE($5, image),
                tags = COALESCE($6, tags),
                demo_link = COALESCE($7, demo_link),
                code_link = COALESCE($8, code_link),
                featured = COALESCE($9, featured),
                challenges = COALESCE($10, challenges),
                solutions = COALESCE($11, solutions),
                updated_at = GREATEST(NOW(), updated_at + INTERVAL '1 microsecond')
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.long_description)
            .bind(&input.image)
            .bind(&input.tags)
            .bind(&input.demo_link)
            .bind(&input.code_link)
            .bind(input.featured)
            .bind(&input.challenges)
            .bind(&input.solutions)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a project by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
