use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Daily activity counter. `contributions` maps a `YYYY-MM-DD` key to the
/// number of events recorded that day; a day never stores zero — it is
/// removed instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Streak {
    pub id: String,
    pub name: String,
    pub contributions: BTreeMap<String, u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Collection {
    pub id: String,
    pub name: String,
    pub streak_ids: Vec<String>,
}

/// Each `progress` entry is the delta recorded for that day, not a running
/// total; the total is summed on read.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: String,
    pub name: String,
    pub target_value: f64,
    pub progress: BTreeMap<String, f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalSet {
    pub id: String,
    pub name: String,
    pub goal_ids: Vec<String>,
}

/// Each `values` entry is an absolute snapshot for that day. The current
/// value is the entry with the greatest date key, falling back to
/// `start_value` when no snapshot exists.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackedValue {
    pub id: String,
    pub name: String,
    pub target_value: f64,
    pub start_value: f64,
    pub start_date: String,
    pub values: BTreeMap<String, f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackedValueSet {
    pub id: String,
    pub name: String,
    pub tracked_value_ids: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistItem {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_date: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Checklist {
    pub id: String,
    pub name: String,
    pub checklist_item_ids: Vec<String>,
}

/// Tag on a super-set entry. The entry's id refers to the *composite* one
/// level down: `Streak` tags a Collection, `TrackedValue` a
/// TrackedValueSet, `Goal` a GoalSet, `Checklist` a Checklist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SetKind {
    Streak,
    TrackedValue,
    Goal,
    Checklist,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetRef {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: SetKind,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuperSet {
    pub id: String,
    pub name: String,
    pub set_ids: Vec<SetRef>,
}

/// Tag on a read-only view naming which kind of record `parent_id` refers
/// to. Distinct vocabulary from [`SetKind`]: this one covers every
/// shareable kind, composites included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ViewKind {
    Streak,
    Collection,
    GoalSet,
    TrackedValueSet,
    Checklist,
    SuperSet,
}

/// Capability token granting non-mutating access to `parent_id` without
/// the original id. One token per `(parent_id, kind)` pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadOnlyView {
    pub id: String,
    pub parent_id: String,
    #[serde(rename = "type")]
    pub kind: ViewKind,
    pub created_at: String,
}

// Resolved composite shapes returned by the read surface.

#[derive(Debug, Serialize)]
pub struct CollectionView {
    pub name: String,
    pub streaks: Vec<Streak>,
}

#[derive(Debug, Serialize)]
pub struct GoalSetView {
    pub name: String,
    pub goals: Vec<Goal>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackedValueSetView {
    pub name: String,
    pub tracked_values: Vec<TrackedValue>,
}

#[derive(Debug, Serialize)]
pub struct ChecklistView {
    pub name: String,
    pub items: Vec<ChecklistItem>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ResolvedItems {
    Streaks(Vec<Streak>),
    TrackedValues(Vec<TrackedValue>),
    Goals(Vec<Goal>),
    ChecklistItems(Vec<ChecklistItem>),
}

#[derive(Debug, Serialize)]
pub struct ResolvedSet {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: SetKind,
    pub items: ResolvedItems,
}

#[derive(Debug, Serialize)]
pub struct SuperSetView {
    pub name: String,
    pub sets: Vec<ResolvedSet>,
}

// Request and response bodies.

#[derive(Debug, Deserialize)]
pub struct CreateNamedRequest {
    pub name: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordAction {
    #[default]
    Increment,
    Decrement,
    Clear,
}

#[derive(Debug, Deserialize)]
pub struct RecordContributionRequest {
    pub id: String,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub action: Option<RecordAction>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCollectionRequest {
    pub name: String,
    pub streak_ids: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGoalRequest {
    pub name: String,
    pub target_value: f64,
}

#[derive(Debug, Deserialize)]
pub struct RecordValueRequest {
    pub id: String,
    pub date: String,
    pub value: f64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGoalSetRequest {
    pub name: String,
    pub goal_ids: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTrackedValueRequest {
    pub name: String,
    pub target_value: f64,
    #[serde(default)]
    pub start_value: Option<f64>,
    #[serde(default)]
    pub start_date: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTrackedValueSetRequest {
    pub name: String,
    pub tracked_value_ids: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct CompleteChecklistItemRequest {
    pub id: String,
    pub date: String,
}

#[derive(Debug, Deserialize)]
pub struct ClearChecklistItemRequest {
    pub id: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateChecklistRequest {
    pub name: String,
    pub checklist_item_ids: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSuperSetRequest {
    pub name: String,
    pub set_ids: Vec<SetRef>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateViewRequest {
    pub parent_id: String,
    #[serde(rename = "type")]
    pub kind: ViewKind,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewLookupQuery {
    pub parent_id: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<ViewKind>,
}

#[derive(Debug, Deserialize)]
pub struct IdQuery {
    pub id: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreatedResponse {
    pub id: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SuccessResponse {
    pub success: bool,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreakStats {
    pub total: u64,
    pub days_active: u64,
    pub current_run: u64,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalStats {
    pub target_value: f64,
    pub total: f64,
    pub percent_complete: f64,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackedValueStats {
    pub target_value: f64,
    pub start_value: f64,
    pub current: f64,
    pub min: f64,
    pub max: f64,
}
