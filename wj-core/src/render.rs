//! Renders entries back to their on-disk text.
//!
//! Layout:
//!
//! ```text
//! March 4, 2024
//!
//! To Do
//! - item
//!
//! Done
//! - item
//! HH:MM tag,tag Title
//! Body…
//! HH:MM tag Title
//! ```
//!
//! Text produced here reads back into an identical [`Entry`]. Anything that
//! would not is refused with a [`FormatError`].

use crate::dates::DATE_HEADER_FORMAT;
use crate::entry::{Entry, Task};
use crate::error::FormatError;
use crate::parse_entries::check_tag;
use crate::scanner::{DONE_MARKER, TO_DO_MARKER, is_title_line};
use chrono::NaiveDate;

/// `March 4, 2024`
pub fn format_day_header(date: NaiveDate) -> String {
    date.format(DATE_HEADER_FORMAT).to_string()
}

/// Renders a whole entry.
pub fn format_entry(entry: &Entry) -> Result<String, FormatError> {
    let mut out = format_day_header(entry.date);
    out.push_str("\n\n");
    push_list(&mut out, TO_DO_MARKER, &entry.to_do)?;
    out.push('\n');
    push_list(&mut out, DONE_MARKER, &entry.done)?;
    for task in &entry.tasks {
        out.push_str(&format_task_block(task)?);
    }
    Ok(out)
}

/// Renders a task's title line and body, each line newline-terminated.
pub fn format_task_block(task: &Task) -> Result<String, FormatError> {
    single_line(&task.title)?;
    let tags = task.tags.join(",");
    if task.tags.is_empty() {
        return Err(FormatError::EmptyTag(tags));
    }
    for tag in &task.tags {
        check_tag(tag, &tags)?;
    }

    let mut block = format!(
        "{} {} {}\n",
        task.start_time.format("%H:%M"),
        tags,
        task.title
    );
    if !task.body.is_empty() {
        if task.body.trim() != task.body {
            return Err(FormatError::LostWhitespace(task.body.clone()));
        }
        for line in task.body.split('\n') {
            single_line(line)?;
            if is_title_line(line) {
                return Err(FormatError::AmbiguousBody(line.to_string()));
            }
        }
        block.push_str(&task.body);
        block.push('\n');
    }
    Ok(block)
}

/// The list ends where its segment is trimmed, so only the last item must not
/// end in whitespace.
fn push_list(out: &mut String, marker: &str, items: &[String]) -> Result<(), FormatError> {
    out.push_str(marker);
    out.push('\n');
    for (i, item) in items.iter().enumerate() {
        single_line(item)?;
        let line = format!("- {item}");
        if i + 1 == items.len() && line.trim_end() != line {
            return Err(FormatError::LostWhitespace(item.clone()));
        }
        out.push_str(&line);
        out.push('\n');
    }
    Ok(())
}

/// No `\n`, and no trailing `\r` the parser would drop.
fn single_line(field: &str) -> Result<(), FormatError> {
    if field.contains('\n') || field.ends_with('\r') {
        return Err(FormatError::MultilineField(field.to_string()));
    }
    Ok(())
}
