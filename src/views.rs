use crate::models::{ReadOnlyView, ViewKind};
use crate::store::{new_id, StoreData};
use chrono::Utc;

/// Equality query over the token store. Never creates.
pub fn lookup(data: &StoreData, parent_id: &str, kind: ViewKind) -> Option<ReadOnlyView> {
    data.read_only_views
        .values()
        .find(|view| view.parent_id == parent_id && view.kind == kind)
        .cloned()
}

/// Idempotent token mint: an existing `(parent_id, kind)` token is returned
/// unchanged — same id, same `created_at`.
pub fn get_or_create(data: &mut StoreData, parent_id: &str, kind: ViewKind) -> ReadOnlyView {
    if let Some(existing) = lookup(data, parent_id, kind) {
        return existing;
    }

    let view = ReadOnlyView {
        id: new_id(),
        parent_id: parent_id.to_string(),
        kind,
        created_at: Utc::now().to_rfc3339(),
    };
    data.read_only_views.insert(view.id.clone(), view.clone());
    view
}

/// Resolves a token id back to its parent, requiring the expected kind.
pub fn parent_of(data: &StoreData, view_id: &str, kind: ViewKind) -> Option<String> {
    data.read_only_views
        .get(view_id)
        .filter(|view| view.kind == kind)
        .map(|view| view.parent_id.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_or_create_is_idempotent() {
        let mut data = StoreData::default();
        let first = get_or_create(&mut data, "P", ViewKind::Collection);
        let second = get_or_create(&mut data, "P", ViewKind::Collection);
        assert_eq!(first.id, second.id);
        assert_eq!(first.created_at, second.created_at);
        assert_eq!(data.read_only_views.len(), 1);
    }

    #[test]
    fn tokens_are_scoped_to_the_pair() {
        let mut data = StoreData::default();
        let collection = get_or_create(&mut data, "P", ViewKind::Collection);
        let super_set = get_or_create(&mut data, "P", ViewKind::SuperSet);
        let other = get_or_create(&mut data, "Q", ViewKind::Collection);
        assert_ne!(collection.id, super_set.id);
        assert_ne!(collection.id, other.id);
        assert_eq!(data.read_only_views.len(), 3);
    }

    #[test]
    fn lookup_never_creates() {
        let data = StoreData::default();
        assert!(lookup(&data, "P", ViewKind::Checklist).is_none());
        assert!(data.read_only_views.is_empty());
    }

    #[test]
    fn parent_of_requires_matching_kind() {
        let mut data = StoreData::default();
        let view = get_or_create(&mut data, "P", ViewKind::GoalSet);
        assert_eq!(parent_of(&data, &view.id, ViewKind::GoalSet), Some("P".into()));
        assert_eq!(parent_of(&data, &view.id, ViewKind::Checklist), None);
        assert_eq!(parent_of(&data, "missing", ViewKind::GoalSet), None);
    }
}
