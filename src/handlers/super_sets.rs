use crate::errors::AppError;
use crate::models::{
    CreateSuperSetRequest, CreatedResponse, IdQuery, SuperSet, SuperSetView,
};
use crate::resolve;
use crate::state::AppState;
use crate::store::{new_id, persist_data};
use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Response};
use axum::Json;

pub async fn create_super_set(
    State(state): State<AppState>,
    Json(payload): Json<CreateSuperSetRequest>,
) -> Result<Json<CreatedResponse>, AppError> {
    let name = super::require_name(&payload.name)?;

    let mut data = state.store.lock().await;
    let id = new_id();
    data.super_sets.insert(
        id.clone(),
        SuperSet {
            id: id.clone(),
            name,
            set_ids: payload.set_ids,
        },
    );
    persist_data(&state.data_path, &data).await?;

    Ok(Json(CreatedResponse { id }))
}

/// With `?id=` returns the resolved super set; without it, lists every
/// stored super set record.
pub async fn get_super_sets(
    State(state): State<AppState>,
    Query(query): Query<IdQuery>,
) -> Result<Response, AppError> {
    let data = state.store.lock().await;

    if let Some(id) = query.id.filter(|id| !id.is_empty()) {
        let view = resolve::resolve_super_set(&data, &id)
            .ok_or_else(|| AppError::not_found("super set not found"))?;
        return Ok(Json(view).into_response());
    }

    let all: Vec<SuperSet> = data.super_sets.values().cloned().collect();
    Ok(Json(all).into_response())
}

pub async fn get_super_set_by_path(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SuperSetView>, AppError> {
    let data = state.store.lock().await;
    let view = resolve::resolve_super_set(&data, &id)
        .ok_or_else(|| AppError::not_found("super set not found"))?;

    Ok(Json(view))
}
