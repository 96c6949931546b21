use crate::errors::AppError;
use crate::models::{
    Checklist, ChecklistItem, Collection, Goal, GoalSet, ReadOnlyView, Streak, SuperSet,
    TrackedValue, TrackedValueSet,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::{env, path::Path, path::PathBuf};
use tokio::fs;
use tracing::error;
use uuid::Uuid;

/// The whole document store: one map per entity kind, keyed by generated
/// id. Serialized as a single JSON file.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct StoreData {
    pub streaks: BTreeMap<String, Streak>,
    pub collections: BTreeMap<String, Collection>,
    pub goals: BTreeMap<String, Goal>,
    pub goal_sets: BTreeMap<String, GoalSet>,
    pub tracked_values: BTreeMap<String, TrackedValue>,
    pub tracked_value_sets: BTreeMap<String, TrackedValueSet>,
    pub checklist_items: BTreeMap<String, ChecklistItem>,
    pub checklists: BTreeMap<String, Checklist>,
    pub super_sets: BTreeMap<String, SuperSet>,
    pub read_only_views: BTreeMap<String, ReadOnlyView>,
}

/// Opaque id, unique within each kind's map.
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

pub fn resolve_data_path() -> Result<PathBuf, std::io::Error> {
    if let Ok(path) = env::var("STREAKZ_DATA_PATH") {
        return Ok(PathBuf::from(path));
    }

    Ok(PathBuf::from("data/streakz.json"))
}

pub async fn load_data(path: &Path) -> StoreData {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(data) => data,
            Err(err) => {
                error!("failed to parse data file: {err}");
                StoreData::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => StoreData::default(),
        Err(err) => {
            error!("failed to read data file: {err}");
            StoreData::default()
        }
    }
}

pub async fn persist_data(path: &Path, data: &StoreData) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(data).map_err(AppError::internal)?;
    fs::write(path, payload).await.map_err(AppError::internal)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_ids_are_distinct() {
        assert_ne!(new_id(), new_id());
    }

    #[test]
    fn store_round_trips_through_json() {
        let mut data = StoreData::default();
        let id = new_id();
        data.streaks.insert(
            id.clone(),
            Streak {
                id: id.clone(),
                name: "Reading".into(),
                contributions: BTreeMap::from([("2024-03-01".to_string(), 2)]),
            },
        );

        let bytes = serde_json::to_vec(&data).unwrap();
        let parsed: StoreData = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(parsed.streaks[&id].contributions["2024-03-01"], 2);
    }

    #[test]
    fn missing_kinds_default_to_empty() {
        // Data files written before a kind existed still load.
        let parsed: StoreData = serde_json::from_str(r#"{"streaks":{}}"#).unwrap();
        assert!(parsed.super_sets.is_empty());
        assert!(parsed.read_only_views.is_empty());
    }
}
