use crate::models::{Goal, GoalStats, Streak, StreakStats, TrackedValue, TrackedValueStats};
use chrono::{Duration, Local, NaiveDate};

pub fn streak_stats(streak: &Streak) -> StreakStats {
    streak_stats_at(Local::now().date_naive(), streak)
}

pub fn streak_stats_at(today: NaiveDate, streak: &Streak) -> StreakStats {
    let total = streak.contributions.values().sum();
    let days_active = streak.contributions.len() as u64;

    // Walk back from today while a contribution exists; any positive count
    // extends the run.
    let mut current_run = 0u64;
    let mut day = today;
    while streak.contributions.contains_key(&date_key(day)) {
        current_run += 1;
        day = day - Duration::days(1);
    }

    StreakStats {
        total,
        days_active,
        current_run,
    }
}

pub fn goal_stats(goal: &Goal) -> GoalStats {
    let total: f64 = goal.progress.values().sum();
    let percent_complete = if goal.target_value > 0.0 {
        (total / goal.target_value) * 100.0
    } else {
        0.0
    };

    GoalStats {
        target_value: goal.target_value,
        total,
        percent_complete,
    }
}

pub fn tracked_value_stats(tracked: &TrackedValue) -> TrackedValueStats {
    // Date keys sort lexicographically, so the map's last entry is the
    // latest snapshot.
    let current = tracked
        .values
        .iter()
        .next_back()
        .map(|(_, value)| *value)
        .unwrap_or(tracked.start_value);

    let mut min = tracked.start_value;
    let mut max = tracked.start_value;
    for value in tracked.values.values() {
        min = min.min(*value);
        max = max.max(*value);
    }

    TrackedValueStats {
        target_value: tracked.target_value,
        start_value: tracked.start_value,
        current,
        min,
        max,
    }
}

fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn streak_with(days: &[(&str, u64)]) -> Streak {
        Streak {
            id: "s".into(),
            name: "Reading".into(),
            contributions: days
                .iter()
                .map(|(date, count)| (date.to_string(), *count))
                .collect(),
        }
    }

    #[test]
    fn streak_run_counts_consecutive_days_ending_today() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        let streak = streak_with(&[
            ("2024-03-10", 1),
            ("2024-03-09", 2),
            ("2024-03-08", 1),
            ("2024-03-06", 4),
        ]);

        let stats = streak_stats_at(today, &streak);
        assert_eq!(stats.current_run, 3);
        assert_eq!(stats.days_active, 4);
        assert_eq!(stats.total, 8);
    }

    #[test]
    fn streak_run_is_zero_without_a_contribution_today() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        let streak = streak_with(&[("2024-03-09", 1)]);
        assert_eq!(streak_stats_at(today, &streak).current_run, 0);
    }

    #[test]
    fn goal_total_sums_daily_deltas() {
        let goal = Goal {
            id: "g".into(),
            name: "Save".into(),
            target_value: 100.0,
            progress: BTreeMap::from([
                ("2024-01-01".to_string(), 40.0),
                ("2024-01-02".to_string(), -10.0),
                ("2024-01-03".to_string(), 20.0),
            ]),
        };

        let stats = goal_stats(&goal);
        assert_eq!(stats.total, 50.0);
        assert_eq!(stats.percent_complete, 50.0);
    }

    #[test]
    fn goal_percent_is_zero_for_non_positive_target() {
        let goal = Goal {
            id: "g".into(),
            name: "Zero".into(),
            target_value: 0.0,
            progress: BTreeMap::from([("2024-01-01".to_string(), 5.0)]),
        };
        assert_eq!(goal_stats(&goal).percent_complete, 0.0);
    }

    #[test]
    fn tracked_value_current_is_latest_snapshot() {
        let tracked = TrackedValue {
            id: "t".into(),
            name: "Weight".into(),
            target_value: 70.0,
            start_value: 10.0,
            start_date: "2024-01-01".into(),
            values: BTreeMap::from([
                ("2024-01-05".to_string(), 15.0),
                ("2024-01-10".to_string(), 12.0),
            ]),
        };

        let stats = tracked_value_stats(&tracked);
        assert_eq!(stats.current, 12.0);
        assert_eq!(stats.min, 10.0);
        assert_eq!(stats.max, 15.0);
    }

    #[test]
    fn tracked_value_falls_back_to_start_value() {
        let tracked = TrackedValue {
            id: "t".into(),
            name: "Weight".into(),
            target_value: 70.0,
            start_value: 10.0,
            start_date: "2024-01-01".into(),
            values: BTreeMap::new(),
        };

        let stats = tracked_value_stats(&tracked);
        assert_eq!(stats.current, 10.0);
        assert_eq!(stats.min, 10.0);
        assert_eq!(stats.max, 10.0);
    }
}
