use chrono::NaiveDate;
use std::path::{Path, PathBuf};

/// `2024-03-04.txt`
pub fn day_file_name(date: NaiveDate, extension: &str) -> String {
    format!("{}.{extension}", date.format("%Y-%m-%d"))
}

pub fn day_path(root: &Path, date: NaiveDate, extension: &str) -> PathBuf {
    root.join(day_file_name(date, extension))
}

pub fn is_journal_file(path: &Path, extension: &str) -> bool {
    path.is_file() && path.extension().is_some_and(|ext| ext == extension)
}
