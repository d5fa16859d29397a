#![warn(clippy::pedantic, clippy::all, clippy::nursery)]
#![allow(clippy::single_match_else)]

use crate::routes::courses::{
    delete_course, get_course, get_courses, patch_course, post_new_course,
};
use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

#[macro_use]
extern crate tracing;

pub mod config;
pub mod data;
pub mod error;
pub mod routes;
pub mod state;

pub use state::AppState;

///Builds the full application router. Trailing slashes are significant on both routes.
#[must_use]
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/api/v1/courses/", get(get_courses).post(post_new_course))
        .route(
            "/api/v1/courses/{id}/",
            get(get_course).patch(patch_course).delete(delete_course),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
