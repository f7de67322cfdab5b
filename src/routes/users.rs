use axum::{
    extract::{Path, State},
    Json,
};
use sea_orm::{ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, EntityTrait, QueryFilter, Set};

use crate::entities::user;
use crate::errors::ApiError;
use crate::models::{AddUserQuery, ApiQuery, UpdateUserQuery, User};
use crate::repository::{self, path_id};
use crate::state::AppState;
use crate::validate::present;

const OBJECT: &str = "user";

pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, ApiError> {
    Ok(Json(repository::list::<user::Entity, _>(&state.db).await?))
}

pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<User>, ApiError> {
    let id = path_id(&user_id, OBJECT)?;
    Ok(Json(repository::find::<user::Entity, _>(&state.db, id, OBJECT).await?))
}

pub async fn add_user(
    State(state): State<AppState>,
    ApiQuery(req): ApiQuery<AddUserQuery>,
) -> Result<Json<User>, ApiError> {
    // A missing username is left for the NOT NULL constraint to reject
    let new_user = user::ActiveModel {
        id: NotSet,
        username: req.username.map_or(NotSet, Set),
    };

    let created = new_user.insert(&state.db).await?;
    tracing::info!(id = created.id, "Created user {}", created.username);
    Ok(Json(created))
}

pub async fn update_user(
    State(state): State<AppState>,
    ApiQuery(req): ApiQuery<UpdateUserQuery>,
) -> Result<Json<User>, ApiError> {
    let username = present(req.username).ok_or_else(|| ApiError::not_found("username"))?;
    let Some(new_username) = present(req.new_username.clone()) else {
        return Err(ApiError::invalid_value(req.new_username.unwrap_or_default()));
    };

    let mut existing: user::ActiveModel = user::Entity::find()
        .filter(user::Column::Username.eq(&username))
        .one(&state.db)
        .await?
        .ok_or_else(|| ApiError::not_found(username.clone()))?
        .into();

    existing.username = Set(new_username);
    let updated = existing.update(&state.db).await?;
    tracing::info!(id = updated.id, "Renamed user {username} to {}", updated.username);
    Ok(Json(updated))
}

pub async fn delete_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<User>, ApiError> {
    let id = path_id(&user_id, OBJECT)?;
    Ok(Json(repository::remove::<user::Entity, _>(&state.db, id, OBJECT).await?))
}
