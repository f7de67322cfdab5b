use axum::{
    extract::{Path, State},
    Json,
};
use sea_orm::{ActiveModelTrait, ActiveValue::NotSet, Set};

use crate::entities::activity;
use crate::errors::ApiError;
use crate::models::{Activity, AddActivityQuery, ApiQuery};
use crate::repository::{self, path_id};
use crate::state::AppState;
use crate::validate::{present, slug_or_name};

const OBJECT: &str = "activity";

pub async fn list_activities(
    State(state): State<AppState>,
) -> Result<Json<Vec<Activity>>, ApiError> {
    Ok(Json(repository::list::<activity::Entity, _>(&state.db).await?))
}

pub async fn get_activity(
    State(state): State<AppState>,
    Path(activity_id): Path<String>,
) -> Result<Json<Activity>, ApiError> {
    let id = path_id(&activity_id, OBJECT)?;
    Ok(Json(repository::find::<activity::Entity, _>(&state.db, id, OBJECT).await?))
}

pub async fn add_activity(
    State(state): State<AppState>,
    ApiQuery(req): ApiQuery<AddActivityQuery>,
) -> Result<Json<Activity>, ApiError> {
    let name = present(req.name);
    let slug = slug_or_name(present(req.slug).as_deref(), name.as_deref())?;

    // With an explicit slug the name may still be missing; the store rejects it
    let new_activity = activity::ActiveModel {
        id: NotSet,
        name: name.map_or(NotSet, Set),
        slug: Set(slug),
    };

    let created = new_activity.insert(&state.db).await?;
    tracing::info!(id = created.id, "Created activity {}", created.slug);
    Ok(Json(created))
}

pub async fn delete_activity(
    State(state): State<AppState>,
    Path(activity_id): Path<String>,
) -> Result<Json<Activity>, ApiError> {
    let id = path_id(&activity_id, OBJECT)?;
    Ok(Json(repository::remove::<activity::Entity, _>(&state.db, id, OBJECT).await?))
}
