//! Single-row reads and deletes shared by every record kind.

use sea_orm::{ConnectionTrait, EntityTrait, PrimaryKeyTrait};

use crate::errors::ApiError;

/// Parse a path id. Anything that is not an integer cannot match a row.
pub fn path_id(raw: &str, object: &str) -> Result<i32, ApiError> {
    raw.parse().map_err(|_| ApiError::not_found(object))
}

pub async fn find<E, C>(db: &C, id: i32, object: &str) -> Result<E::Model, ApiError>
where
    E: EntityTrait,
    C: ConnectionTrait,
    <E::PrimaryKey as PrimaryKeyTrait>::ValueType: From<i32>,
{
    E::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| ApiError::not_found(object))
}

pub async fn list<E, C>(db: &C) -> Result<Vec<E::Model>, ApiError>
where
    E: EntityTrait,
    C: ConnectionTrait,
{
    Ok(E::find().all(db).await?)
}

/// Delete a row and return what it held.
pub async fn remove<E, C>(db: &C, id: i32, object: &str) -> Result<E::Model, ApiError>
where
    E: EntityTrait,
    C: ConnectionTrait,
    <E::PrimaryKey as PrimaryKeyTrait>::ValueType: From<i32>,
{
    let existing = find::<E, C>(db, id, object).await?;
    E::delete_by_id(id).exec(db).await?;
    tracing::info!(id, "Deleted {object}");
    Ok(existing)
}
