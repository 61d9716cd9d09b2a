//! Aggregates over parsed entries and tasks.

use crate::entry::{Entry, Task};
use chrono::{Duration, NaiveDate, NaiveTime};
use serde::Serialize;
use std::collections::BTreeMap;

/// The working span of one day, from the first task start to the last.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DaySpan {
    pub date: NaiveDate,
    pub start: NaiveTime,
    pub end: NaiveTime,
    #[serde(serialize_with = "crate::entry::serialize_duration")]
    pub elapsed: Duration,
    pub task_count: usize,
}

impl DaySpan {
    /// `None` for an entry without tasks.
    pub fn of(entry: &Entry) -> Option<Self> {
        let first = entry.tasks.first()?;
        let last = entry.tasks.last()?;
        Some(Self {
            date: entry.date,
            start: first.start_time,
            end: last.start_time,
            elapsed: last.start_time - first.start_time,
            task_count: entry.tasks.len(),
        })
    }
}

/// Total duration per tag, ordered by tag. A task with several tags counts
/// toward each of them; a tag repeated on one task counts once.
pub fn tag_totals<'a>(tasks: impl IntoIterator<Item = &'a Task>) -> Vec<(String, Duration)> {
    let mut totals: BTreeMap<&str, Duration> = BTreeMap::new();
    for task in tasks {
        let mut seen: Vec<&str> = Vec::with_capacity(task.tags.len());
        for tag in &task.tags {
            if seen.contains(&tag.as_str()) {
                continue;
            }
            seen.push(tag.as_str());
            *totals.entry(tag.as_str()).or_insert_with(Duration::zero) += task.duration;
        }
    }
    totals
        .into_iter()
        .map(|(tag, total)| (tag.to_string(), total))
        .collect()
}
