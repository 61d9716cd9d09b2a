use crate::Config;
use chrono::{NaiveDate, NaiveTime};
use std::path::PathBuf;

/// A well-formed entry, exactly as the serializer writes it.
pub const SAMPLE_ENTRY: &str = "March 4, 2024

To Do
- Write release notes
- Reply to infra thread

Done
- Merge config loader
09:00 work,review Review pull requests
Left comments on the parser change.

Needs a second pass tomorrow.
10:15 work Fix flaky test
Root cause was a shared temp dir.
12:30 lunch Lunch
";

/// Test helper to create a default `Config` for testing purposes.
///
/// This is the single source of truth for test configuration.
/// If you add a field to `Config`, you only need to update it here.
pub fn mk_config(journal_dir: PathBuf) -> Config {
    Config {
        journal_dir,
        extension: "txt".to_string(),
        lookback_days: 14,
        editor: None,
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn time(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}
