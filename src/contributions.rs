use chrono::Local;
use std::collections::BTreeMap;

/// Adds one event to `date`, returning the new count. Days start at zero.
pub fn increment(contributions: &mut BTreeMap<String, u64>, date: &str) -> u64 {
    let count = contributions.entry(date.to_string()).or_insert(0);
    *count = count.saturating_add(1);
    *count
}

/// Removes one event from `date`, flooring at zero. A day that reaches
/// zero is deleted from the map, never stored as zero. Decrementing an
/// absent day is a no-op.
pub fn decrement(contributions: &mut BTreeMap<String, u64>, date: &str) -> u64 {
    match contributions.get_mut(date) {
        Some(count) if *count > 1 => {
            *count -= 1;
            *count
        }
        Some(_) => {
            contributions.remove(date);
            0
        }
        None => 0,
    }
}

/// Drops the whole entry for `date`. Returns false when there was nothing
/// recorded for that day.
pub fn clear_day(contributions: &mut BTreeMap<String, u64>, date: &str) -> bool {
    contributions.remove(date).is_some()
}

/// Overwrites the entry for `date`. Last write wins; prior same-day values
/// are not accumulated. Callers reject non-finite values first.
pub fn record_value(values: &mut BTreeMap<String, f64>, date: &str, value: f64) {
    values.insert(date.to_string(), value);
}

/// Shape check only: `YYYY-MM-DD`. Date keys are otherwise opaque and are
/// never validated for calendar correctness.
pub fn is_date_key(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 10
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| match i {
                4 | 7 => *b == b'-',
                _ => b.is_ascii_digit(),
            })
}

pub fn today_key() -> String {
    Local::now().date_naive().format("%Y-%m-%d").to_string()
}
