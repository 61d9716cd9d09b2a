use crate::dates::format_duration;
use crate::error::FormatError;
use crate::parse_entries::parse_entry;
use crate::render::format_entry;
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Serialize, Serializer};
use std::str::FromStr;

/// One calendar day of the journal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub date: NaiveDate,
    pub to_do: Vec<String>,
    pub done: Vec<String>,
    /// In file order. Never sorted by the parser.
    pub tasks: Vec<Task>,
}

/// One logged work item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    /// Wall-clock start, on the date of the owning entry.
    pub start_time: NaiveTime,
    pub tags: Vec<String>,
    pub title: String,
    pub body: String,
    /// Time until the next task starts. Zero for the last task of the day.
    #[serde(serialize_with = "serialize_duration")]
    pub duration: Duration,
}

/// A task lifted out of its entry, together with the entry's date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatedTask {
    pub date: NaiveDate,
    #[serde(flatten)]
    pub task: Task,
}

impl Entry {
    /// A fresh entry for `date`, carrying the to-do list of `previous` forward.
    pub fn new_day(date: NaiveDate, previous: Option<&Entry>) -> Self {
        Self {
            date,
            to_do: previous.map(|e| e.to_do.clone()).unwrap_or_default(),
            done: Vec::new(),
            tasks: Vec::new(),
        }
    }

    /// Renders the entry in its on-disk text form.
    pub fn to_text(&self) -> Result<String, FormatError> {
        format_entry(self)
    }

    /// `true` when no task starts before the one above it.
    pub fn is_chronological(&self) -> bool {
        self.tasks
            .windows(2)
            .all(|pair| pair[0].start_time <= pair[1].start_time)
    }

    pub fn dated_tasks(&self) -> impl Iterator<Item = DatedTask> + '_ {
        self.tasks.iter().map(|task| DatedTask {
            date: self.date,
            task: task.clone(),
        })
    }
}

impl FromStr for Entry {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_entry(s)
    }
}

impl DatedTask {
    pub fn started_at(&self) -> NaiveDateTime {
        self.date.and_time(self.task.start_time)
    }
}

pub(crate) fn serialize_duration<S: Serializer>(
    duration: &Duration,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format_duration(*duration))
}
