use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::{de::DeserializeOwned, Deserialize};

use crate::errors::ApiError;

// ─── Re-export entity models as response types ───

pub use crate::entities::activity::Model as Activity;
pub use crate::entities::project::Model as Project;
pub use crate::entities::time_entry::Model as TimeEntry;
pub use crate::entities::user::Model as User;

// ─── Query extraction ───

/// `Query` whose rejection is reported as an `InvalidValue` error.
pub struct ApiQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ApiQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_value(e.body_text()))?;
        Ok(Self(value))
    }
}

// ─── API Types ───
// All values arrive as query parameters. They are kept as strings here and
// checked by `validate`/`resolve` so each failure gets its own error kind.

#[derive(Debug, Default, Deserialize)]
pub struct AddUserQuery {
    pub username: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateUserQuery {
    pub username: Option<String>,
    pub new_username: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AddProjectQuery {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub uri: Option<String>,
    /// Username of the owner
    pub owner: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AddActivityQuery {
    pub name: Option<String>,
    pub slug: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AddTimeQuery {
    /// Activity slug
    pub activity: Option<String>,
    /// Project slug
    pub project: Option<String>,
    /// Username
    pub user: Option<String>,
    /// Minutes worked
    pub duration: Option<String>,
    pub notes: Option<String>,
    pub issue_uri: Option<String>,
    pub date: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateTimeQuery {
    pub id: Option<String>,
    pub activity: Option<String>,
    pub project: Option<String>,
    pub user: Option<String>,
    pub duration: Option<String>,
    pub notes: Option<String>,
    pub issue_uri: Option<String>,
    pub date: Option<String>,
}
