//! Natural-key lookups for foreign-key fields.
//!
//! Requests reference users by username and projects/activities by slug;
//! rows store the numeric id. A miss is reported as `InvalidForeignKey`
//! before anything is written. The store's own foreign-key constraint still
//! has the final say on the write itself.

use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QuerySelect};

use crate::entities::{activity, project, user};
use crate::errors::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForeignKind {
    User,
    Project,
    Activity,
}

/// Find the id behind a natural key, if any row has it.
pub async fn lookup<C: ConnectionTrait>(
    db: &C,
    kind: ForeignKind,
    reference: &str,
) -> Result<Option<i32>, DbErr> {
    match kind {
        ForeignKind::User => {
            user::Entity::find()
                .filter(user::Column::Username.eq(reference))
                .select_only()
                .column(user::Column::Id)
                .into_tuple::<i32>()
                .one(db)
                .await
        }
        ForeignKind::Project => {
            project::Entity::find()
                .filter(project::Column::Slug.eq(reference))
                .select_only()
                .column(project::Column::Id)
                .into_tuple::<i32>()
                .one(db)
                .await
        }
        ForeignKind::Activity => {
            activity::Entity::find()
                .filter(activity::Column::Slug.eq(reference))
                .select_only()
                .column(activity::Column::Id)
                .into_tuple::<i32>()
                .one(db)
                .await
        }
    }
}

/// Resolve a required reference. `field` names the request field in the
/// error, e.g. `owner` for a project's user.
pub async fn resolve<C: ConnectionTrait>(
    db: &C,
    kind: ForeignKind,
    reference: Option<&str>,
    field: &str,
) -> Result<i32, ApiError> {
    let Some(reference) = reference else {
        return Err(ApiError::foreign_key(field));
    };
    match lookup(db, kind, reference).await? {
        Some(id) => Ok(id),
        None => {
            tracing::debug!(?kind, reference, "Unknown reference");
            Err(ApiError::foreign_key(field))
        }
    }
}

/// Resolve a reference that may be left out; when given it must exist.
pub async fn resolve_optional<C: ConnectionTrait>(
    db: &C,
    kind: ForeignKind,
    reference: Option<&str>,
    field: &str,
) -> Result<Option<i32>, ApiError> {
    match reference {
        Some(_) => resolve(db, kind, reference, field).await.map(Some),
        None => Ok(None),
    }
}
