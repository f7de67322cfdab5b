//! In-memory database seeded with a small, fixed data set for tests.

use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, StatusCode},
    Router,
};
use chrono::TimeZone;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::str::FromStr;
use tower::ServiceExt;

use crate::entities::{activity, project, time_entry, user};
use crate::state::AppState;

/// Fresh migrated database holding:
///
/// - users: 1 deanj, 2 tschuy, 3 patcht
/// - projects: 1 gwm (owner 2), 2 pgd (owner 1), 3 wf (owner 2)
/// - activities: 1 doc, 2 dev, 3 sys
/// - time entries: 1 (12s, user 2, project 3, activity 2)
pub async fn seeded_db() -> DatabaseConnection {
    let options = SqliteConnectOptions::from_str("sqlite::memory:").unwrap();
    // One connection that never recycles, or the in-memory database is lost
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
        .unwrap();
    let db = crate::db::open(pool).await.unwrap();

    for username in ["deanj", "tschuy", "patcht"] {
        user::ActiveModel {
            username: Set(username.into()),
            ..Default::default()
        }
        .insert(&db)
        .await
        .unwrap();
    }

    let projects = [
        ("Ganeti Web Manager", "gwm", "https://code.osuosl.org/projects/ganeti-webmgr", 2),
        ("Protein Geometry Database", "pgd", "https://code.osuosl.org/projects/pgd", 1),
        ("Whats Fresh", "wf", "https://github.com/osu-cass/whats-fresh-api", 2),
    ];
    for (name, slug, uri, owner) in projects {
        project::ActiveModel {
            name: Set(name.into()),
            slug: Set(slug.into()),
            uri: Set(Some(uri.into())),
            owner: Set(owner),
            ..Default::default()
        }
        .insert(&db)
        .await
        .unwrap();
    }

    for (name, slug) in [("Documentation", "doc"), ("Development", "dev"), ("Systems", "sys")] {
        activity::ActiveModel {
            name: Set(name.into()),
            slug: Set(slug.into()),
            ..Default::default()
        }
        .insert(&db)
        .await
        .unwrap();
    }

    time_entry::ActiveModel {
        duration: Set(12),
        user: Set(2),
        project: Set(3),
        activity: Set(Some(2)),
        notes: Set(Some(String::new())),
        issue_uri: Set(Some(
            "https://github.com/osu-cass/whats-fresh-api/issues/56".into(),
        )),
        date_worked: Set(None),
        created_at: Set(chrono::Utc.with_ymd_and_hms(2015, 6, 1, 9, 0, 0).unwrap()),
        updated_at: Set(None),
        ..Default::default()
    }
    .insert(&db)
    .await
    .unwrap();

    db
}

pub async fn seeded_app() -> Router {
    crate::routes::router(AppState::new(seeded_db().await))
}

/// Send a body-less request and decode the JSON response.
pub async fn send(app: &Router, method: Method, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}
