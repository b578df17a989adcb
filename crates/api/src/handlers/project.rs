//! Handlers for the `/projects` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use folio_db::models::project::{CreateProject, Project, UpdateProject};

use crate::error::AppResult;
use crate::extract::{ProjectId, ValidatedJson};
use crate::response::MessageResponse;
use crate::state::AppState;

/// POST /api/projects
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateProject>,
) -> AppResult<(StatusCode, Json<Project>)> {
    let project = state.projects.create(&input).await?;
    Ok((StatusCode::CREATED, Json(project)))
}

/// GET /api/projects
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Project>>> {
    let projects = state.projects.list().await?;
    Ok(Json(projects))
}

/// GET /api/projects/featured
pub async fn list_featured(State(state): State<AppState>) -> AppResult<Json<Vec<Project>>> {
    let projects = state.projects.list_featured().await?;
    Ok(Json(projects))
}

/// GET /api/projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    ProjectId(id): ProjectId,
) -> AppResult<Json<Project>> {
    let project = state.projects.get(id).await?;
    Ok(Json(project))
}

/// PUT /api/projects/{id}
pub async fn update(
    State(state): State<AppState>,
    ProjectId(id): ProjectId,
    ValidatedJson(input): ValidatedJson<UpdateProject>,
) -> AppResult<Json<Project>> {
    let project = state.projects.update(id, &input).await?;
    Ok(Json(project))
}

/// DELETE /api/projects/{id}
pub async fn delete(
    State(state): State<AppState>,
    ProjectId(id): ProjectId,
) -> AppResult<Json<MessageResponse>> {
    state.projects.delete(id).await?;
    Ok(Json(MessageResponse {
        message: "Project deleted successfully".to_string(),
    }))
}
