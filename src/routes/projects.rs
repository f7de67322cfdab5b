use axum::{
    extract::{Path, State},
    Json,
};
use sea_orm::{ActiveModelTrait, ActiveValue::NotSet, Set};

use crate::entities::project;
use crate::errors::ApiError;
use crate::models::{AddProjectQuery, ApiQuery, Project};
use crate::repository::{self, path_id};
use crate::resolve::{resolve, ForeignKind};
use crate::state::AppState;
use crate::validate::{present, slug_or_name};

const OBJECT: &str = "project";

pub async fn list_projects(State(state): State<AppState>) -> Result<Json<Vec<Project>>, ApiError> {
    Ok(Json(repository::list::<project::Entity, _>(&state.db).await?))
}

pub async fn get_project(
    State(state): State<AppState>,
    Path(project_id): Path<String>,
) -> Result<Json<Project>, ApiError> {
    let id = path_id(&project_id, OBJECT)?;
    Ok(Json(repository::find::<project::Entity, _>(&state.db, id, OBJECT).await?))
}

pub async fn add_project(
    State(state): State<AppState>,
    ApiQuery(req): ApiQuery<AddProjectQuery>,
) -> Result<Json<Project>, ApiError> {
    let name = present(req.name);
    let slug = slug_or_name(present(req.slug).as_deref(), name.as_deref())?;
    let owner = resolve(&state.db, ForeignKind::User, present(req.owner).as_deref(), "owner").await?;

    let new_project = project::ActiveModel {
        id: NotSet,
        name: name.map_or(NotSet, Set),
        slug: Set(slug),
        uri: Set(present(req.uri)),
        owner: Set(owner),
    };

    let created = new_project.insert(&state.db).await?;
    tracing::info!(id = created.id, "Created project {}", created.slug);
    Ok(Json(created))
}

pub async fn delete_project(
    State(state): State<AppState>,
    Path(project_id): Path<String>,
) -> Result<Json<Project>, ApiError> {
    let id = path_id(&project_id, OBJECT)?;
    Ok(Json(repository::remove::<project::Entity, _>(&state.db, id, OBJECT).await?))
}
