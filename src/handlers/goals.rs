use crate::contributions::record_value;
use crate::errors::AppError;
use crate::models::{
    CreateGoalRequest, CreateGoalSetRequest, CreatedResponse, Goal, GoalSet, GoalSetView,
    GoalStats, IdQuery, RecordValueRequest, SuccessResponse,
};
use crate::resolve;
use crate::state::AppState;
use crate::stats;
use crate::store::{new_id, persist_data};
use axum::extract::{Query, State};
use axum::Json;
use std::collections::BTreeMap;

pub async fn create_goal(
    State(state): State<AppState>,
    Json(payload): Json<CreateGoalRequest>,
) -> Result<Json<CreatedResponse>, AppError> {
    let name = super::require_name(&payload.name)?;
    super::require_finite(payload.target_value, "targetValue")?;

    let mut data = state.store.lock().await;
    let id = new_id();
    data.goals.insert(
        id.clone(),
        Goal {
            id: id.clone(),
            name,
            target_value: payload.target_value,
            progress: BTreeMap::new(),
        },
    );
    persist_data(&state.data_path, &data).await?;

    Ok(Json(CreatedResponse { id }))
}

pub async fn get_goal(
    State(state): State<AppState>,
    Query(query): Query<IdQuery>,
) -> Result<Json<Goal>, AppError> {
    let id = super::require_id(query.id, "goal")?;
    let data = state.store.lock().await;
    let goal = data
        .goals
        .get(&id)
        .cloned()
        .ok_or_else(|| AppError::not_found("goal not found"))?;

    Ok(Json(goal))
}

pub async fn record_progress(
    State(state): State<AppState>,
    Json(payload): Json<RecordValueRequest>,
) -> Result<Json<SuccessResponse>, AppError> {
    let id = super::require_body_id(payload.id, "goal")?;
    super::require_date(&payload.date)?;
    super::require_finite(payload.value, "value")?;

    let mut data = state.store.lock().await;
    let goal = data
        .goals
        .get_mut(&id)
        .ok_or_else(|| AppError::not_found(format!("goal with id {id} not found")))?;
    record_value(&mut goal.progress, &payload.date, payload.value);
    persist_data(&state.data_path, &data).await?;

    Ok(Json(SuccessResponse { success: true }))
}

pub async fn get_goal_stats(
    State(state): State<AppState>,
    Query(query): Query<IdQuery>,
) -> Result<Json<GoalStats>, AppError> {
    let id = super::require_id(query.id, "goal")?;
    let data = state.store.lock().await;
    let goal = data
        .goals
        .get(&id)
        .ok_or_else(|| AppError::not_found("goal not found"))?;

    Ok(Json(stats::goal_stats(goal)))
}

pub async fn create_goal_set(
    State(state): State<AppState>,
    Json(payload): Json<CreateGoalSetRequest>,
) -> Result<Json<CreatedResponse>, AppError> {
    let name = super::require_name(&payload.name)?;
    if payload.goal_ids.is_empty() {
        return Err(AppError::invalid("goalIds must be a non-empty array"));
    }

    let mut data = state.store.lock().await;
    for goal_id in &payload.goal_ids {
        if !data.goals.contains_key(goal_id) {
            return Err(AppError::not_found(format!(
                "goal with id {goal_id} not found"
            )));
        }
    }

    let id = new_id();
    data.goal_sets.insert(
        id.clone(),
        GoalSet {
            id: id.clone(),
            name,
            goal_ids: payload.goal_ids,
        },
    );
    persist_data(&state.data_path, &data).await?;

    Ok(Json(CreatedResponse { id }))
}

pub async fn get_goal_set(
    State(state): State<AppState>,
    Query(query): Query<IdQuery>,
) -> Result<Json<GoalSetView>, AppError> {
    let id = super::require_id(query.id, "goal set")?;
    let data = state.store.lock().await;
    let view = resolve::resolve_goal_set(&data, &id)
        .ok_or_else(|| AppError::not_found("goal set not found"))?;

    Ok(Json(view))
}
