//! Service calls — forward a command to the integration owning an entity.

use axum::Json;
use axum::extract::State;
use serde::Deserialize;

use climahub_app::ports::{EntityRepository, Integration};
use climahub_domain::entity::Entity;
use climahub_domain::id::EntityId;

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for `POST /api/services/call`.
#[derive(Debug, Deserialize)]
pub struct ServiceCallRequest {
    pub entity_id: EntityId,
    /// Service name, e.g. `turn_on` for a scene.
    pub service: String,
    #[serde(default)]
    pub data: serde_json::Value,
}

/// `POST /api/services/call`
///
/// Stores the snapshot the integration returns and responds with it.
pub async fn call<R, I>(
    State(state): State<AppState<R, I>>,
    Json(req): Json<ServiceCallRequest>,
) -> Result<Json<Entity>, ApiError>
where
    R: EntityRepository + 'static,
    I: Integration + 'static,
{
    tracing::debug!(entity_id = %req.entity_id, service = %req.service, "service call");
    let entity = state
        .integration
        .read()
        .await
        .handle_service_call(req.entity_id, &req.service, req.data)
        .await?;
    let stored = state.entity_service.upsert_entity(entity).await?;
    Ok(Json(stored))
}
