//! JSON REST API handlers.
//!
//! - `GET  /api/entities`       — list all entities
//! - `GET  /api/entities/{id}`  — get single entity
//! - `POST /api/services/call`  — call a service on an entity

#[allow(clippy::missing_errors_doc)]
pub mod entities;
#[allow(clippy::missing_errors_doc)]
pub mod services;

use axum::Router;
use axum::routing::{get, post};

use climahub_app::ports::{EntityRepository, Integration};

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<R, I>() -> Router<AppState<R, I>>
where
    R: EntityRepository + 'static,
    I: Integration + 'static,
{
    Router::new()
        .route("/entities", get(entities::list::<R, I>))
        .route("/entities/{id}", get(entities::get::<R, I>))
        .route("/services/call", post(services::call::<R, I>))
}
