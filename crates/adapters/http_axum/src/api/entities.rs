//! JSON REST handlers for entities.

use std::str::FromStr;

use axum::Json;
use axum::extract::{Path, State};

use climahub_app::ports::{EntityRepository, Integration};
use climahub_domain::entity::Entity;
use climahub_domain::error::{HubError, ValidationError};
use climahub_domain::id::EntityId;

use crate::error::ApiError;
use crate::state::AppState;

/// `GET /api/entities`
pub async fn list<R, I>(State(state): State<AppState<R, I>>) -> Result<Json<Vec<Entity>>, ApiError>
where
    R: EntityRepository + 'static,
    I: Integration + 'static,
{
    let entities = state.entity_service.list_entities().await?;
    Ok(Json(entities))
}

/// `GET /api/entities/{id}`
pub async fn get<R, I>(
    State(state): State<AppState<R, I>>,
    Path(id): Path<String>,
) -> Result<Json<Entity>, ApiError>
where
    R: EntityRepository + 'static,
    I: Integration + 'static,
{
    let entity_id = EntityId::from_str(&id)
        .map_err(|_| HubError::from(ValidationError::InvalidId(id.clone())))?;
    let entity = state.entity_service.get_entity(entity_id).await?;
    Ok(Json(entity))
}
