use crate::contributions::{self, today_key};
use crate::errors::AppError;
use crate::models::{
    Collection, CollectionView, CreateCollectionRequest, CreateNamedRequest, CreatedResponse,
    IdQuery, RecordAction, RecordContributionRequest, Streak, StreakStats, SuccessResponse,
};
use crate::resolve;
use crate::state::AppState;
use crate::stats;
use crate::store::{new_id, persist_data};
use axum::extract::{Query, State};
use axum::Json;
use std::collections::BTreeMap;

pub async fn create_streak(
    State(state): State<AppState>,
    Json(payload): Json<CreateNamedRequest>,
) -> Result<Json<CreatedResponse>, AppError> {
    let name = super::require_name(&payload.name)?;

    let mut data = state.store.lock().await;
    let id = new_id();
    data.streaks.insert(
        id.clone(),
        Streak {
            id: id.clone(),
            name,
            contributions: BTreeMap::new(),
        },
    );
    persist_data(&state.data_path, &data).await?;

    Ok(Json(CreatedResponse { id }))
}

pub async fn get_streak(
    State(state): State<AppState>,
    Query(query): Query<IdQuery>,
) -> Result<Json<Streak>, AppError> {
    let id = super::require_id(query.id, "streak")?;
    let data = state.store.lock().await;
    let streak = data
        .streaks
        .get(&id)
        .cloned()
        .ok_or_else(|| AppError::not_found("streak not found"))?;

    Ok(Json(streak))
}

pub async fn record_contribution(
    State(state): State<AppState>,
    Json(payload): Json<RecordContributionRequest>,
) -> Result<Json<SuccessResponse>, AppError> {
    let id = super::require_body_id(payload.id, "streak")?;
    let date = match payload.date {
        Some(date) => {
            super::require_date(&date)?;
            date
        }
        None => today_key(),
    };
    let action = payload.action.unwrap_or_default();

    let mut data = state.store.lock().await;
    let streak = data
        .streaks
        .get_mut(&id)
        .ok_or_else(|| AppError::not_found("streak not found"))?;

    match action {
        RecordAction::Increment => {
            contributions::increment(&mut streak.contributions, &date);
        }
        RecordAction::Decrement => {
            contributions::decrement(&mut streak.contributions, &date);
        }
        RecordAction::Clear => {
            if !contributions::clear_day(&mut streak.contributions, &date) {
                return Err(AppError::not_found(format!(
                    "no contribution recorded for {date}"
                )));
            }
        }
    }
    persist_data(&state.data_path, &data).await?;

    Ok(Json(SuccessResponse { success: true }))
}

pub async fn get_streak_stats(
    State(state): State<AppState>,
    Query(query): Query<IdQuery>,
) -> Result<Json<StreakStats>, AppError> {
    let id = super::require_id(query.id, "streak")?;
    let data = state.store.lock().await;
    let streak = data
        .streaks
        .get(&id)
        .ok_or_else(|| AppError::not_found("streak not found"))?;

    Ok(Json(stats::streak_stats(streak)))
}

pub async fn create_collection(
    State(state): State<AppState>,
    Json(payload): Json<CreateCollectionRequest>,
) -> Result<Json<CreatedResponse>, AppError> {
    let name = super::require_name(&payload.name)?;
    if payload.streak_ids.is_empty() {
        return Err(AppError::invalid("streakIds must be a non-empty array"));
    }

    let mut data = state.store.lock().await;
    for streak_id in &payload.streak_ids {
        if !data.streaks.contains_key(streak_id) {
            return Err(AppError::not_found(format!(
                "streak with id {streak_id} not found"
            )));
        }
    }

    let id = new_id();
    data.collections.insert(
        id.clone(),
        Collection {
            id: id.clone(),
            name,
            streak_ids: payload.streak_ids,
        },
    );
    persist_data(&state.data_path, &data).await?;

    Ok(Json(CreatedResponse { id }))
}

pub async fn get_collection(
    State(state): State<AppState>,
    Query(query): Query<IdQuery>,
) -> Result<Json<CollectionView>, AppError> {
    let id = super::require_id(query.id, "collection")?;
    let data = state.store.lock().await;
    let view = resolve::resolve_collection(&data, &id)
        .ok_or_else(|| AppError::not_found("collection not found"))?;

    Ok(Json(view))
}
