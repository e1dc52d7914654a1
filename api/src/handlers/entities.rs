//! Entity handlers
//!
//! Endpoints that drive the entity use cases.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::app::{CreateEntityInput, EntityOutput, RenameEntityInput};
use crate::domain::entities::ExampleEntityId;
use crate::error::AppError;
use crate::AppState;

/// Request body for creating an entity
#[derive(Debug, Deserialize)]
pub struct CreateEntityRequest {
    pub name: String,
    pub email: Option<String>,
    pub description: Option<String>,
}

/// Request body for renaming an entity
#[derive(Debug, Deserialize)]
pub struct RenameEntityRequest {
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct EntityResponse {
    pub id: String,
    pub name: String,
    pub email: Option<String>,
    pub description: Option<String>,
    pub created_at: String,
}

impl From<EntityOutput> for EntityResponse {
    fn from(output: EntityOutput) -> Self {
        Self {
            id: output.id.to_string(),
            name: output.name,
            email: output.email,
            description: output.description,
            created_at: output.created_at.to_rfc3339(),
        }
    }
}

fn parse_id(raw: &str) -> Result<ExampleEntityId, AppError> {
    raw.parse()
        .map_err(|_| AppError::BadRequest(format!("Invalid entity id: {}", raw)))
}

fn not_found(id: &ExampleEntityId) -> AppError {
    AppError::NotFound(format!("Entity {} not found", id))
}

/// POST /entities
pub async fn create_entity(
    State(state): State<AppState>,
    payload: Result<Json<CreateEntityRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<EntityResponse>), AppError> {
    let Json(request) = payload?;
    let output = state
        .create_entity
        .execute(CreateEntityInput {
            name: request.name,
            email: request.email,
            description: request.description,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(output.into())))
}

/// GET /entities
pub async fn list_entities(
    State(state): State<AppState>,
) -> Result<Json<Vec<EntityResponse>>, AppError> {
    let outputs = state.list_entities.execute().await?;
    Ok(Json(outputs.into_iter().map(EntityResponse::from).collect()))
}

/// GET /entities/:id
pub async fn get_entity(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<EntityResponse>, AppError> {
    let id = parse_id(&id)?;
    let output = state
        .get_entity
        .execute(&id)
        .await?
        .ok_or_else(|| not_found(&id))?;

    Ok(Json(output.into()))
}

/// PATCH /entities/:id
///
/// Rename an entity. The id and creation time are kept.
pub async fn rename_entity(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<RenameEntityRequest>, JsonRejection>,
) -> Result<Json<EntityResponse>, AppError> {
    let id = parse_id(&id)?;
    let Json(request) = payload?;
    let output = state
        .rename_entity
        .execute(RenameEntityInput {
            id,
            name: request.name,
        })
        .await?
        .ok_or_else(|| not_found(&id))?;

    Ok(Json(output.into()))
}

/// DELETE /entities/:id
pub async fn delete_entity(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let id = parse_id(&id)?;
    if state.delete_entity.execute(&id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(&id))
    }
}
