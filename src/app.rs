use crate::handlers::{checklists, goals, pages, read_only, streaks, super_sets, tracked_values};
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(pages::index))
        .route(
            "/api/streak",
            post(streaks::create_streak).get(streaks::get_streak),
        )
        .route("/api/streak/record", post(streaks::record_contribution))
        .route("/api/streak/stats", get(streaks::get_streak_stats))
        .route(
            "/api/collection",
            post(streaks::create_collection).get(streaks::get_collection),
        )
        .route(
            "/api/collection/read-only",
            get(read_only::read_only_collection),
        )
        .route("/api/goal", post(goals::create_goal).get(goals::get_goal))
        .route("/api/goal/record", post(goals::record_progress))
        .route("/api/goal/stats", get(goals::get_goal_stats))
        .route(
            "/api/goals",
            post(goals::create_goal_set).get(goals::get_goal_set),
        )
        .route("/api/goals/read-only", get(read_only::read_only_goal_set))
        .route(
            "/api/tracked-value",
            post(tracked_values::create_tracked_value).get(tracked_values::get_tracked_value),
        )
        .route(
            "/api/tracked-value/record",
            post(tracked_values::record_snapshot),
        )
        .route(
            "/api/tracked-value/stats",
            get(tracked_values::get_tracked_value_stats),
        )
        .route(
            "/api/tracked-values",
            post(tracked_values::create_tracked_value_set)
                .get(tracked_values::get_tracked_value_set),
        )
        .route(
            "/api/tracked-values/read-only",
            get(read_only::read_only_tracked_value_set),
        )
        .route(
            "/api/checklist-item",
            post(checklists::create_checklist_item).get(checklists::get_checklist_item),
        )
        .route(
            "/api/checklist-item/complete",
            post(checklists::complete_checklist_item),
        )
        .route(
            "/api/checklist-item/clear",
            post(checklists::clear_checklist_item),
        )
        .route(
            "/api/checklists",
            post(checklists::create_checklist).get(checklists::get_checklist),
        )
        .route(
            "/api/checklists/read-only",
            get(read_only::read_only_checklist),
        )
        .route(
            "/api/super-sets",
            post(super_sets::create_super_set).get(super_sets::get_super_sets),
        )
        .route("/api/super-sets/read-only", get(read_only::read_only_super_set))
        .route("/api/super-sets/:id", get(super_sets::get_super_set_by_path))
        .route(
            "/api/read-only",
            post(read_only::create_view).get(read_only::get_view),
        )
        .with_state(state)
}
