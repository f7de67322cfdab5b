use axum::{
    extract::{Path, State},
    Json,
};
use sea_orm::{ActiveModelTrait, ActiveValue::NotSet, IntoActiveModel, Set};

use crate::entities::time_entry;
use crate::errors::ApiError;
use crate::models::{AddTimeQuery, ApiQuery, TimeEntry, UpdateTimeQuery};
use crate::repository::{self, path_id};
use crate::resolve::{resolve, resolve_optional, ForeignKind};
use crate::state::AppState;
use crate::validate::{date_worked, duration_seconds, present, record_id};

const OBJECT: &str = "time entry";

pub async fn list_time_entries(
    State(state): State<AppState>,
) -> Result<Json<Vec<TimeEntry>>, ApiError> {
    Ok(Json(repository::list::<time_entry::Entity, _>(&state.db).await?))
}

pub async fn get_time_entry(
    State(state): State<AppState>,
    Path(time_id): Path<String>,
) -> Result<Json<TimeEntry>, ApiError> {
    let id = path_id(&time_id, OBJECT)?;
    Ok(Json(repository::find::<time_entry::Entity, _>(&state.db, id, OBJECT).await?))
}

pub async fn add_time_entry(
    State(state): State<AppState>,
    ApiQuery(req): ApiQuery<AddTimeQuery>,
) -> Result<Json<TimeEntry>, ApiError> {
    // Validate
    let duration = duration_seconds(req.duration.as_deref())?;
    let worked_on = date_worked(present(req.date).as_deref())?;

    // Resolve references
    let activity = resolve_optional(
        &state.db,
        ForeignKind::Activity,
        present(req.activity).as_deref(),
        "activity",
    )
    .await?;
    let project = resolve(
        &state.db,
        ForeignKind::Project,
        present(req.project).as_deref(),
        "project",
    )
    .await?;
    let user = resolve(&state.db, ForeignKind::User, present(req.user).as_deref(), "user").await?;

    let new_entry = time_entry::ActiveModel {
        id: NotSet,
        duration: Set(duration),
        user: Set(user),
        project: Set(project),
        activity: Set(activity),
        notes: Set(req.notes),
        issue_uri: Set(present(req.issue_uri)),
        date_worked: Set(worked_on),
        created_at: Set(chrono::Utc::now()),
        updated_at: Set(None),
    };

    let created = new_entry.insert(&state.db).await?;
    tracing::info!(id = created.id, duration = created.duration, "Created time entry");
    Ok(Json(created))
}

/// Apply the supplied fields to an existing entry.
///
/// Every supplied field is checked before the row is touched, so a rejected
/// update leaves the stored entry as it was.
pub async fn update_time_entry(
    State(state): State<AppState>,
    ApiQuery(req): ApiQuery<UpdateTimeQuery>,
) -> Result<Json<TimeEntry>, ApiError> {
    let id = match present(req.id) {
        Some(raw) => record_id(&raw)?,
        None => return Err(ApiError::not_found("id")),
    };
    let existing = repository::find::<time_entry::Entity, _>(&state.db, id, "id").await?;

    // Validate
    let duration = match present(req.duration) {
        Some(raw) => Some(duration_seconds(Some(&raw))?),
        None => None,
    };
    let worked_on = date_worked(present(req.date).as_deref())?;

    // Resolve references
    let activity = resolve_optional(
        &state.db,
        ForeignKind::Activity,
        present(req.activity).as_deref(),
        "activity",
    )
    .await?;
    let project = resolve_optional(
        &state.db,
        ForeignKind::Project,
        present(req.project).as_deref(),
        "project",
    )
    .await?;
    let user = resolve_optional(&state.db, ForeignKind::User, present(req.user).as_deref(), "user")
        .await?;

    let mut entry = existing.into_active_model();
    if let Some(duration) = duration {
        entry.duration = Set(duration);
    }
    if let Some(date) = worked_on {
        entry.date_worked = Set(Some(date));
    }
    if let Some(activity) = activity {
        entry.activity = Set(Some(activity));
    }
    if let Some(project) = project {
        entry.project = Set(project);
    }
    if let Some(user) = user {
        entry.user = Set(user);
    }
    if let Some(notes) = req.notes {
        entry.notes = Set(Some(notes));
    }
    if let Some(issue_uri) = present(req.issue_uri) {
        entry.issue_uri = Set(Some(issue_uri));
    }
    entry.updated_at = Set(Some(chrono::Utc::now()));

    let updated = entry.update(&state.db).await?;
    tracing::info!(id = updated.id, "Updated time entry");
    Ok(Json(updated))
}

pub async fn delete_time_entry(
    State(state): State<AppState>,
    Path(time_id): Path<String>,
) -> Result<Json<TimeEntry>, ApiError> {
    let id = path_id(&time_id, OBJECT)?;
    Ok(Json(repository::remove::<time_entry::Entity, _>(&state.db, id, OBJECT).await?))
}
