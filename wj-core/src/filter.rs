use crate::dates::parse_date_duration;
use crate::entry::DatedTask;
use anyhow::{Result, anyhow};
use chrono::NaiveDateTime;

/// Predicates applied to a flattened task collection. Unset fields match everything.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TaskFilter {
    /// Keep tasks carrying exactly this tag (case-sensitive).
    pub tag: Option<String>,
    /// Keep tasks that started at or after this instant.
    pub since: Option<NaiveDateTime>,
}

impl TaskFilter {
    /// Builds a filter from user input, e.g. `--tag work --last 2w`.
    ///
    /// `last` is resolved against `now`.
    pub fn from_args(tag: Option<&str>, last: Option<&str>, now: NaiveDateTime) -> Result<Self> {
        let since = match last {
            Some(last) => {
                let span = parse_date_duration(last)?;
                Some(
                    now.checked_sub_signed(span)
                        .ok_or_else(|| anyhow!("`{last}` reaches too far back"))?,
                )
            }
            None => None,
        };
        Ok(Self {
            tag: tag.map(str::to_string),
            since,
        })
    }

    pub fn matches(&self, task: &DatedTask) -> bool {
        if let Some(tag) = &self.tag {
            if !task.task.tags.iter().any(|t| t == tag) {
                return false;
            }
        }
        if let Some(since) = self.since {
            if task.started_at() < since {
                return false;
            }
        }
        true
    }

    pub fn apply(&self, tasks: impl IntoIterator<Item = DatedTask>) -> Vec<DatedTask> {
        tasks.into_iter().filter(|t| self.matches(t)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::Entry;
    use crate::tests::common::{SAMPLE_ENTRY, date, time};

    fn sample_tasks() -> Vec<DatedTask> {
        let entry: Entry = SAMPLE_ENTRY.parse().unwrap();
        entry.dated_tasks().collect()
    }

    #[test]
    fn default_filter_keeps_everything() {
        let tasks = sample_tasks();
        assert_eq!(TaskFilter::default().apply(tasks.clone()), tasks);
    }

    #[test]
    fn tag_filter_is_exact_and_case_sensitive() {
        let filter = TaskFilter {
            tag: Some("work".to_string()),
            ..Default::default()
        };
        let titles: Vec<String> = filter
            .apply(sample_tasks())
            .into_iter()
            .map(|t| t.task.title)
            .collect();
        assert_eq!(titles, ["Review pull requests", "Fix flaky test"]);

        let filter = TaskFilter {
            tag: Some("Work".to_string()),
            ..Default::default()
        };
        assert!(filter.apply(sample_tasks()).is_empty());
    }

    #[test]
    fn cutoff_uses_entry_date_and_start_time() {
        let filter = TaskFilter {
            since: Some(date(2024, 3, 4).and_time(time(10, 15))),
            ..Default::default()
        };
        let kept = filter.apply(sample_tasks());
        assert_eq!(kept.len(), 2);
        assert_eq!(kept[0].task.start_time, time(10, 15));
    }

    #[test]
    fn from_args_resolves_relative_cutoff() {
        let now = date(2024, 3, 11).and_time(time(12, 0));
        let filter = TaskFilter::from_args(Some("work"), Some("1w"), now).unwrap();
        assert_eq!(filter.tag.as_deref(), Some("work"));
        assert_eq!(filter.since, Some(date(2024, 3, 4).and_time(time(12, 0))));

        let kept = filter.apply(sample_tasks());
        assert!(kept.is_empty());

        let filter = TaskFilter::from_args(None, Some("2w"), now).unwrap();
        assert_eq!(filter.apply(sample_tasks()).len(), 3);
    }

    #[test]
    fn from_args_rejects_bad_spans() {
        let now = date(2024, 3, 11).and_time(time(12, 0));
        assert!(TaskFilter::from_args(None, Some("7 days"), now).is_err());
    }
}
