//! Parses the text of a daily journal file into a structured [`Entry`].

use crate::dates::DATE_HEADER_PARSE_FORMAT;
use crate::entry::{Entry, Task};
use crate::error::FormatError;
use crate::scanner::scan;
use chrono::{Duration, NaiveDate, NaiveTime};
use once_cell::sync::Lazy;
use regex::Regex;

static START_TIME: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{2}:[0-9]{2}$").unwrap());
static TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").unwrap());

/// Parses the entire content of a daily journal file.
///
/// The file is expected to look like this:
///
/// ```text
/// March 4, 2024
///
/// To Do
/// - Write release notes
///
/// Done
/// - Merge config loader
///
/// 09:00 work,review Review pull requests
/// Left comments on the parser change.
/// ```
///
/// Either the whole entry parses, or a [`FormatError`] naming the first problem
/// is returned. Task durations are derived from the start of the following task.
pub fn parse_entry(text: &str) -> Result<Entry, FormatError> {
    let segments = scan(text)?;

    let header = segments.header.map(|range| &text[range]).unwrap_or_default();
    let date = parse_date_header(header)?;
    let to_do = parse_dash_list(&text[segments.to_do]);
    let done = parse_dash_list(&text[segments.done]);

    let mut tasks = segments
        .tasks
        .into_iter()
        .map(|range| parse_task_block(&text[range]))
        .collect::<Result<Vec<_>, _>>()?;
    derive_durations(&mut tasks);

    Ok(Entry {
        date,
        to_do,
        done,
        tasks,
    })
}

/// Same as [`parse_entry`], for raw file content.
pub fn parse_entry_bytes(bytes: &[u8]) -> Result<Entry, FormatError> {
    let text = std::str::from_utf8(bytes).map_err(|_| FormatError::NotUtf8)?;
    parse_entry(text)
}

fn parse_date_header(line: &str) -> Result<NaiveDate, FormatError> {
    NaiveDate::parse_from_str(line.trim(), DATE_HEADER_PARSE_FORMAT)
        .map_err(|_| FormatError::InvalidDate(line.trim().to_string()))
}

/// Reads a `- item` list. Whitespace-only lines are dropped, so a blank
/// segment gives an empty list. A bare `-` is kept as an item.
pub fn parse_dash_list(segment: &str) -> Vec<String> {
    segment
        .trim()
        .lines()
        .map(strip_cr)
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.strip_prefix("- ").unwrap_or(line).to_string())
        .collect()
}

/// Parses one task: a title line `HH:MM tag[,tag] Title` and the body lines
/// below it. The returned task has a zero duration.
pub fn parse_task_block(block: &str) -> Result<Task, FormatError> {
    let (title_line, body) = block.split_once('\n').unwrap_or((block, ""));
    let title_line = strip_cr(title_line);

    let mut parts = title_line.splitn(3, ' ');
    let (Some(time), Some(tags), Some(title)) = (parts.next(), parts.next(), parts.next())
    else {
        return Err(FormatError::MalformedTitleLine(title_line.to_string()));
    };

    let start_time = parse_start_time(time)?;
    let tags = parse_tags(tags)?;
    let body = body
        .lines()
        .map(strip_cr)
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string();

    Ok(Task {
        start_time,
        tags,
        title: title.to_string(),
        body,
        duration: Duration::zero(),
    })
}

/// Drops every trailing `\r`, as the scanner does for marker and title lines.
fn strip_cr(line: &str) -> &str {
    line.trim_end_matches('\r')
}

pub fn parse_start_time(time: &str) -> Result<NaiveTime, FormatError> {
    if !START_TIME.is_match(time) {
        return Err(FormatError::InvalidTime(time.to_string()));
    }
    NaiveTime::parse_from_str(time, "%H:%M").map_err(|_| FormatError::InvalidTime(time.to_string()))
}

pub fn parse_tags(group: &str) -> Result<Vec<String>, FormatError> {
    group
        .split(',')
        .map(|tag| check_tag(tag, group).map(|()| tag.to_string()))
        .collect()
}

/// One tag token, as found in `group`.
pub(crate) fn check_tag(tag: &str, group: &str) -> Result<(), FormatError> {
    if tag.is_empty() {
        Err(FormatError::EmptyTag(group.to_string()))
    } else if !TAG.is_match(tag) {
        Err(FormatError::IllegalTag(tag.to_string()))
    } else {
        Ok(())
    }
}

/// Sets each task's duration to the gap until the next task starts.
///
/// The last task stays at zero. Out-of-order start times give negative
/// durations; nothing is clamped or reordered.
pub fn derive_durations(tasks: &mut [Task]) {
    for i in 1..tasks.len() {
        tasks[i - 1].duration = tasks[i].start_time - tasks[i - 1].start_time;
    }
    if let Some(last) = tasks.last_mut() {
        last.duration = Duration::zero();
    }
}
