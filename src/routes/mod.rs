pub mod activities;
pub mod projects;
pub mod time;
pub mod users;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        // Users
        .route("/users", get(users::list_users))
        .route("/users/add", post(users::add_user))
        .route("/users/update", post(users::update_user))
        .route("/users/{id}", get(users::get_user).delete(users::delete_user))
        // Projects
        .route("/projects", get(projects::list_projects))
        .route("/projects/add", post(projects::add_project))
        .route(
            "/projects/{id}",
            get(projects::get_project).delete(projects::delete_project),
        )
        // Activities
        .route("/activities", get(activities::list_activities))
        .route("/activities/add", post(activities::add_activity))
        .route(
            "/activities/{id}",
            get(activities::get_activity).delete(activities::delete_activity),
        )
        // Time entries
        .route("/time", get(time::list_time_entries))
        .route("/time/add", post(time::add_time_entry))
        .route("/time/update", post(time::update_time_entry))
        .route(
            "/time/{id}",
            get(time::get_time_entry).delete(time::delete_time_entry),
        )
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
