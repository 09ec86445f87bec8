use std::sync::Arc;

use axum::extract::State;
use chrono::Utc;

use crate::envelope::ApiResponse;
use crate::errors::AppError;
use crate::extract::{IdQuery, JsonBody, Path, Query};
use crate::models::{Client, ClientUpdate, NewClient};
use crate::state::AppState;

// GET /api/clients
pub async fn list(State(state): State<Arc<AppState>>) -> Result<ApiResponse<Vec<Client>>, AppError> {
    Ok(ApiResponse::ok(state.clients.list()?))
}

// GET /api/clients/:id
pub async fn get_one(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<ApiResponse<Client>, AppError> {
    state
        .clients
        .get(&id)?
        .map(ApiResponse::ok)
        .ok_or_else(|| AppError::NotFound(format!("client {id}")))
}

// POST /api/clients
pub async fn create(
    State(state): State<Arc<AppState>>,
    JsonBody(new): JsonBody<NewClient>,
) -> Result<ApiResponse<Client>, AppError> {
    let client = state.clients.append(Client::from_new(new, Utc::now()))?;
    tracing::info!(id = %client.id, "client created");
    Ok(ApiResponse::created(client))
}

// PUT /api/clients/:id
pub async fn update(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    JsonBody(changes): JsonBody<ClientUpdate>,
) -> Result<ApiResponse<Client>, AppError> {
    apply_update(&state, &id, changes)
}

// PUT /api/clients?id=
pub async fn update_by_query(
    State(state): State<Arc<AppState>>,
    Query(query): Query<IdQuery>,
    JsonBody(changes): JsonBody<ClientUpdate>,
) -> Result<ApiResponse<Client>, AppError> {
    apply_update(&state, &query.require()?, changes)
}

// DELETE /api/clients/:id
pub async fn remove(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<ApiResponse<()>, AppError> {
    remove_client(&state, &id)
}

// DELETE /api/clients?id=
pub async fn remove_by_query(
    State(state): State<Arc<AppState>>,
    Query(query): Query<IdQuery>,
) -> Result<ApiResponse<()>, AppError> {
    remove_client(&state, &query.require()?)
}

fn apply_update(
    state: &AppState,
    id: &str,
    changes: ClientUpdate,
) -> Result<ApiResponse<Client>, AppError> {
    let client = state
        .clients
        .update(id, Box::new(move |c: &mut Client| changes.apply(c)))?
        .ok_or_else(|| AppError::NotFound(format!("client {id}")))?;
    tracing::info!(id = %client.id, "client updated");
    Ok(ApiResponse::ok(client))
}

fn remove_client(state: &AppState, id: &str) -> Result<ApiResponse<()>, AppError> {
    if !state.clients.remove(id)? {
        return Err(AppError::NotFound(format!("client {id}")));
    }
    tracing::info!(id, "client deleted");
    Ok(ApiResponse::message("Client deleted successfully"))
}
