use crate::errors::AppError;
use crate::models::{
    ChecklistView, CollectionView, CreateViewRequest, GoalSetView, IdQuery, ReadOnlyView,
    SuperSetView, TrackedValueSetView, ViewKind, ViewLookupQuery,
};
use crate::resolve;
use crate::state::AppState;
use crate::store::{persist_data, StoreData};
use crate::views;
use axum::extract::{Query, State};
use axum::Json;

pub async fn create_view(
    State(state): State<AppState>,
    Json(payload): Json<CreateViewRequest>,
) -> Result<Json<ReadOnlyView>, AppError> {
    let parent_id = super::require_body_id(payload.parent_id, "parent")?;

    let mut data = state.store.lock().await;
    let view = views::get_or_create(&mut data, &parent_id, payload.kind);
    persist_data(&state.data_path, &data).await?;

    Ok(Json(view))
}

pub async fn get_view(
    State(state): State<AppState>,
    Query(query): Query<ViewLookupQuery>,
) -> Result<Json<ReadOnlyView>, AppError> {
    let parent_id = super::require_id(query.parent_id, "parent")?;
    let kind = query
        .kind
        .ok_or_else(|| AppError::invalid("type is required"))?;

    let data = state.store.lock().await;
    let view = views::lookup(&data, &parent_id, kind)
        .ok_or_else(|| AppError::not_found("read-only view not found"))?;

    Ok(Json(view))
}

fn parent_for(data: &StoreData, id: Option<String>, kind: ViewKind) -> Result<String, AppError> {
    let id = super::require_id(id, "view")?;
    views::parent_of(data, &id, kind)
        .ok_or_else(|| AppError::not_found("read-only view not found"))
}

pub async fn read_only_collection(
    State(state): State<AppState>,
    Query(query): Query<IdQuery>,
) -> Result<Json<CollectionView>, AppError> {
    let data = state.store.lock().await;
    let parent = parent_for(&data, query.id, ViewKind::Collection)?;
    let view = resolve::resolve_collection(&data, &parent)
        .ok_or_else(|| AppError::not_found("collection not found"))?;

    Ok(Json(view))
}

pub async fn read_only_goal_set(
    State(state): State<AppState>,
    Query(query): Query<IdQuery>,
) -> Result<Json<GoalSetView>, AppError> {
    let data = state.store.lock().await;
    let parent = parent_for(&data, query.id, ViewKind::GoalSet)?;
    let view = resolve::resolve_goal_set(&data, &parent)
        .ok_or_else(|| AppError::not_found("goal set not found"))?;

    Ok(Json(view))
}

pub async fn read_only_tracked_value_set(
    State(state): State<AppState>,
    Query(query): Query<IdQuery>,
) -> Result<Json<TrackedValueSetView>, AppError> {
    let data = state.store.lock().await;
    let parent = parent_for(&data, query.id, ViewKind::TrackedValueSet)?;
    let view = resolve::resolve_tracked_value_set(&data, &parent)
        .ok_or_else(|| AppError::not_found("tracked value set not found"))?;

    Ok(Json(view))
}

pub async fn read_only_checklist(
    State(state): State<AppState>,
    Query(query): Query<IdQuery>,
) -> Result<Json<ChecklistView>, AppError> {
    let data = state.store.lock().await;
    let parent = parent_for(&data, query.id, ViewKind::Checklist)?;
    let view = resolve::resolve_checklist(&data, &parent)
        .ok_or_else(|| AppError::not_found("checklist not found"))?;

    Ok(Json(view))
}

pub async fn read_only_super_set(
    State(state): State<AppState>,
    Query(query): Query<IdQuery>,
) -> Result<Json<SuperSetView>, AppError> {
    let data = state.store.lock().await;
    let parent = parent_for(&data, query.id, ViewKind::SuperSet)?;
    let view = resolve::resolve_super_set(&data, &parent)
        .ok_or_else(|| AppError::not_found("super set not found"))?;

    Ok(Json(view))
}
