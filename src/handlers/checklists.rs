use crate::errors::AppError;
use crate::models::{
    Checklist, ChecklistItem, ChecklistView, ClearChecklistItemRequest,
    CompleteChecklistItemRequest, CreateChecklistRequest, CreateNamedRequest, CreatedResponse,
    IdQuery, SuccessResponse,
};
use crate::resolve;
use crate::state::AppState;
use crate::store::{new_id, persist_data};
use axum::extract::{Query, State};
use axum::Json;

pub async fn create_checklist_item(
    State(state): State<AppState>,
    Json(payload): Json<CreateNamedRequest>,
) -> Result<Json<CreatedResponse>, AppError> {
    let name = super::require_name(&payload.name)?;

    let mut data = state.store.lock().await;
    let id = new_id();
    data.checklist_items.insert(
        id.clone(),
        ChecklistItem {
            id: id.clone(),
            name,
            completed_date: None,
        },
    );
    persist_data(&state.data_path, &data).await?;

    Ok(Json(CreatedResponse { id }))
}

pub async fn get_checklist_item(
    State(state): State<AppState>,
    Query(query): Query<IdQuery>,
) -> Result<Json<ChecklistItem>, AppError> {
    let id = super::require_id(query.id, "checklist item")?;
    let data = state.store.lock().await;
    let item = data
        .checklist_items
        .get(&id)
        .cloned()
        .ok_or_else(|| AppError::not_found("checklist item not found"))?;

    Ok(Json(item))
}

pub async fn complete_checklist_item(
    State(state): State<AppState>,
    Json(payload): Json<CompleteChecklistItemRequest>,
) -> Result<Json<SuccessResponse>, AppError> {
    let id = super::require_body_id(payload.id, "checklist item")?;
    super::require_date(&payload.date)?;

    let mut data = state.store.lock().await;
    let item = data
        .checklist_items
        .get_mut(&id)
        .ok_or_else(|| AppError::not_found("checklist item not found"))?;
    item.completed_date = Some(payload.date);
    persist_data(&state.data_path, &data).await?;

    Ok(Json(SuccessResponse { success: true }))
}

pub async fn clear_checklist_item(
    State(state): State<AppState>,
    Json(payload): Json<ClearChecklistItemRequest>,
) -> Result<Json<SuccessResponse>, AppError> {
    let id = super::require_body_id(payload.id, "checklist item")?;

    let mut data = state.store.lock().await;
    let item = data
        .checklist_items
        .get_mut(&id)
        .ok_or_else(|| AppError::not_found("checklist item not found"))?;
    item.completed_date = None;
    persist_data(&state.data_path, &data).await?;

    Ok(Json(SuccessResponse { success: true }))
}

pub async fn create_checklist(
    State(state): State<AppState>,
    Json(payload): Json<CreateChecklistRequest>,
) -> Result<Json<CreatedResponse>, AppError> {
    let name = super::require_name(&payload.name)?;
    if payload.checklist_item_ids.is_empty() {
        return Err(AppError::invalid(
            "checklistItemIds must be a non-empty array",
        ));
    }

    let mut data = state.store.lock().await;
    for item_id in &payload.checklist_item_ids {
        if !data.checklist_items.contains_key(item_id) {
            return Err(AppError::not_found(format!(
                "checklist item with id {item_id} not found"
            )));
        }
    }

    let id = new_id();
    data.checklists.insert(
        id.clone(),
        Checklist {
            id: id.clone(),
            name,
            checklist_item_ids: payload.checklist_item_ids,
        },
    );
    persist_data(&state.data_path, &data).await?;

    Ok(Json(CreatedResponse { id }))
}

pub async fn get_checklist(
    State(state): State<AppState>,
    Query(query): Query<IdQuery>,
) -> Result<Json<ChecklistView>, AppError> {
    let id = super::require_id(query.id, "checklist")?;
    let data = state.store.lock().await;
    let view = resolve::resolve_checklist(&data, &id)
        .ok_or_else(|| AppError::not_found("checklist not found"))?;

    Ok(Json(view))
}
