//! Composite resolution: a composite record holds an ordered list of child
//! ids; resolving fetches each child, silently skipping ids that no longer
//! resolve, and preserves the listed order. Super sets add one more level
//! of indirection, dispatched on the entry's kind tag.

use crate::models::{
    ChecklistView, CollectionView, GoalSetView, ResolvedItems, ResolvedSet, SetKind, SetRef,
    SuperSetView, TrackedValueSetView,
};
use crate::store::StoreData;

pub fn resolve_collection(data: &StoreData, id: &str) -> Option<CollectionView> {
    let collection = data.collections.get(id)?;
    let streaks = collection
        .streak_ids
        .iter()
        .filter_map(|sid| data.streaks.get(sid).cloned())
        .collect();

    Some(CollectionView {
        name: collection.name.clone(),
        streaks,
    })
}

pub fn resolve_goal_set(data: &StoreData, id: &str) -> Option<GoalSetView> {
    let goal_set = data.goal_sets.get(id)?;
    let goals = goal_set
        .goal_ids
        .iter()
        .filter_map(|gid| data.goals.get(gid).cloned())
        .collect();

    Some(GoalSetView {
        name: goal_set.name.clone(),
        goals,
    })
}

pub fn resolve_tracked_value_set(data: &StoreData, id: &str) -> Option<TrackedValueSetView> {
    let set = data.tracked_value_sets.get(id)?;
    let tracked_values = set
        .tracked_value_ids
        .iter()
        .filter_map(|tid| data.tracked_values.get(tid).cloned())
        .collect();

    Some(TrackedValueSetView {
        name: set.name.clone(),
        tracked_values,
    })
}

pub fn resolve_checklist(data: &StoreData, id: &str) -> Option<ChecklistView> {
    let checklist = data.checklists.get(id)?;
    let items = checklist
        .checklist_item_ids
        .iter()
        .filter_map(|cid| data.checklist_items.get(cid).cloned())
        .collect();

    Some(ChecklistView {
        name: checklist.name.clone(),
        items,
    })
}

/// Two-level resolution. Entries whose composite record is missing are
/// dropped entirely; output order follows the stored `set_ids`.
pub fn resolve_super_set(data: &StoreData, id: &str) -> Option<SuperSetView> {
    let super_set = data.super_sets.get(id)?;
    let sets = super_set
        .set_ids
        .iter()
        .filter_map(|entry| resolve_set_entry(data, entry))
        .collect();

    Some(SuperSetView {
        name: super_set.name.clone(),
        sets,
    })
}

fn resolve_set_entry(data: &StoreData, entry: &SetRef) -> Option<ResolvedSet> {
    let (name, items) = match entry.kind {
        SetKind::Streak => {
            let view = resolve_collection(data, &entry.id)?;
            (view.name, ResolvedItems::Streaks(view.streaks))
        }
        SetKind::TrackedValue => {
            let view = resolve_tracked_value_set(data, &entry.id)?;
            (view.name, ResolvedItems::TrackedValues(view.tracked_values))
        }
        SetKind::Goal => {
            let view = resolve_goal_set(data, &entry.id)?;
            (view.name, ResolvedItems::Goals(view.goals))
        }
        SetKind::Checklist => {
            let view = resolve_checklist(data, &entry.id)?;
            (view.name, ResolvedItems::ChecklistItems(view.items))
        }
    };

    Some(ResolvedSet {
        id: entry.id.clone(),
        name,
        kind: entry.kind,
        items,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Collection, Goal, GoalSet, Streak, SuperSet};
    use std::collections::BTreeMap;

    fn streak(id: &str, name: &str) -> Streak {
        Streak {
            id: id.into(),
            name: name.into(),
            contributions: BTreeMap::new(),
        }
    }

    fn store_with_collection(streak_ids: &[&str]) -> StoreData {
        let mut data = StoreData::default();
        data.streaks.insert("a".into(), streak("a", "Reading"));
        data.streaks.insert("c".into(), streak("c", "Running"));
        data.collections.insert(
            "col".into(),
            Collection {
                id: "col".into(),
                name: "Habits".into(),
                streak_ids: streak_ids.iter().map(|s| s.to_string()).collect(),
            },
        );
        data
    }

    #[test]
    fn collection_skips_missing_children_preserving_order() {
        let data = store_with_collection(&["a", "b", "c"]);
        let view = resolve_collection(&data, "col").unwrap();
        assert_eq!(view.name, "Habits");
        let ids: Vec<&str> = view.streaks.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["a", "c"]);
    }

    #[test]
    fn missing_collection_is_none() {
        let data = StoreData::default();
        assert!(resolve_collection(&data, "nope").is_none());
    }

    #[test]
    fn super_set_drops_entries_with_missing_composites() {
        let mut data = StoreData::default();
        data.goals.insert(
            "g1".into(),
            Goal {
                id: "g1".into(),
                name: "Save".into(),
                target_value: 100.0,
                progress: BTreeMap::new(),
            },
        );
        data.goal_sets.insert(
            "y".into(),
            GoalSet {
                id: "y".into(),
                name: "Money".into(),
                goal_ids: vec!["g1".into()],
            },
        );
        data.super_sets.insert(
            "ss".into(),
            SuperSet {
                id: "ss".into(),
                name: "Everything".into(),
                set_ids: vec![
                    SetRef {
                        id: "x".into(),
                        kind: SetKind::Streak,
                    },
                    SetRef {
                        id: "y".into(),
                        kind: SetKind::Goal,
                    },
                ],
            },
        );

        let view = resolve_super_set(&data, "ss").unwrap();
        assert_eq!(view.sets.len(), 1);
        assert_eq!(view.sets[0].id, "y");
        assert_eq!(view.sets[0].kind, SetKind::Goal);
        match &view.sets[0].items {
            ResolvedItems::Goals(goals) => assert_eq!(goals[0].id, "g1"),
            other => panic!("unexpected items: {other:?}"),
        }
    }

    #[test]
    fn super_set_entry_kind_selects_the_composite_namespace() {
        // A collection and a goal set sharing the same id must not be
        // confused: the entry tag picks the namespace.
        let mut data = store_with_collection(&["a"]);
        data.goal_sets.insert(
            "col".into(),
            GoalSet {
                id: "col".into(),
                name: "Same id, other kind".into(),
                goal_ids: vec![],
            },
        );
        data.super_sets.insert(
            "ss".into(),
            SuperSet {
                id: "ss".into(),
                name: "S".into(),
                set_ids: vec![SetRef {
                    id: "col".into(),
                    kind: SetKind::Streak,
                }],
            },
        );

        let view = resolve_super_set(&data, "ss").unwrap();
        assert_eq!(view.sets[0].name, "Habits");
        assert!(matches!(&view.sets[0].items, ResolvedItems::Streaks(s) if s.len() == 1));
    }

    #[test]
    fn missing_super_set_is_none() {
        let data = StoreData::default();
        assert!(resolve_super_set(&data, "nope").is_none());
    }
}
