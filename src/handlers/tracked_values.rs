use crate::contributions::{record_value, today_key};
use crate::errors::AppError;
use crate::models::{
    CreateTrackedValueRequest, CreateTrackedValueSetRequest, CreatedResponse, IdQuery,
    RecordValueRequest, SuccessResponse, TrackedValue, TrackedValueSet, TrackedValueSetView,
    TrackedValueStats,
};
use crate::resolve;
use crate::state::AppState;
use crate::stats;
use crate::store::{new_id, persist_data};
use axum::extract::{Query, State};
use axum::Json;
use std::collections::BTreeMap;

pub async fn create_tracked_value(
    State(state): State<AppState>,
    Json(payload): Json<CreateTrackedValueRequest>,
) -> Result<Json<CreatedResponse>, AppError> {
    let name = super::require_name(&payload.name)?;
    super::require_finite(payload.target_value, "targetValue")?;

    let start_value = payload.start_value.unwrap_or(0.0);
    super::require_finite(start_value, "startValue")?;

    let start_date = match payload.start_date {
        Some(date) => {
            super::require_date(&date)?;
            date
        }
        None => today_key(),
    };

    let mut data = state.store.lock().await;
    let id = new_id();
    data.tracked_values.insert(
        id.clone(),
        TrackedValue {
            id: id.clone(),
            name,
            target_value: payload.target_value,
            start_value,
            start_date,
            values: BTreeMap::new(),
        },
    );
    persist_data(&state.data_path, &data).await?;

    Ok(Json(CreatedResponse { id }))
}

pub async fn get_tracked_value(
    State(state): State<AppState>,
    Query(query): Query<IdQuery>,
) -> Result<Json<TrackedValue>, AppError> {
    let id = super::require_id(query.id, "tracked value")?;
    let data = state.store.lock().await;
    let tracked = data
        .tracked_values
        .get(&id)
        .cloned()
        .ok_or_else(|| AppError::not_found("tracked value not found"))?;

    Ok(Json(tracked))
}

pub async fn record_snapshot(
    State(state): State<AppState>,
    Json(payload): Json<RecordValueRequest>,
) -> Result<Json<SuccessResponse>, AppError> {
    let id = super::require_body_id(payload.id, "tracked value")?;
    super::require_date(&payload.date)?;
    super::require_finite(payload.value, "value")?;

    let mut data = state.store.lock().await;
    let tracked = data
        .tracked_values
        .get_mut(&id)
        .ok_or_else(|| AppError::not_found(format!("tracked value with id {id} not found")))?;
    record_value(&mut tracked.values, &payload.date, payload.value);
    persist_data(&state.data_path, &data).await?;

    Ok(Json(SuccessResponse { success: true }))
}

pub async fn get_tracked_value_stats(
    State(state): State<AppState>,
    Query(query): Query<IdQuery>,
) -> Result<Json<TrackedValueStats>, AppError> {
    let id = super::require_id(query.id, "tracked value")?;
    let data = state.store.lock().await;
    let tracked = data
        .tracked_values
        .get(&id)
        .ok_or_else(|| AppError::not_found("tracked value not found"))?;

    Ok(Json(stats::tracked_value_stats(tracked)))
}

pub async fn create_tracked_value_set(
    State(state): State<AppState>,
    Json(payload): Json<CreateTrackedValueSetRequest>,
) -> Result<Json<CreatedResponse>, AppError> {
    let name = super::require_name(&payload.name)?;
    if payload.tracked_value_ids.is_empty() {
        return Err(AppError::invalid(
            "trackedValueIds must be a non-empty array",
        ));
    }

    let mut data = state.store.lock().await;
    for tracked_id in &payload.tracked_value_ids {
        if !data.tracked_values.contains_key(tracked_id) {
            return Err(AppError::not_found(format!(
                "tracked value with id {tracked_id} not found"
            )));
        }
    }

    let id = new_id();
    data.tracked_value_sets.insert(
        id.clone(),
        TrackedValueSet {
            id: id.clone(),
            name,
            tracked_value_ids: payload.tracked_value_ids,
        },
    );
    persist_data(&state.data_path, &data).await?;

    Ok(Json(CreatedResponse { id }))
}

pub async fn get_tracked_value_set(
    State(state): State<AppState>,
    Query(query): Query<IdQuery>,
) -> Result<Json<TrackedValueSetView>, AppError> {
    let id = super::require_id(query.id, "tracked value set")?;
    let data = state.store.lock().await;
    let view = resolve::resolve_tracked_value_set(&data, &id)
        .ok_or_else(|| AppError::not_found("tracked value set not found"))?;

    Ok(Json(view))
}
