use crate::render::{Renderer, pretty_duration};
use anyhow::Result;
use chrono::NaiveDateTime;
use wj_core::{DaySpan, Journal, TaskFilter};

const ROW_DATE_FORMAT: &str = "%a %b %d %Y";
const ROW_TIME_FORMAT: &str = "%H:%M";

pub fn list_entries_mode(journal: &Journal, renderer: &Renderer, json: bool) -> Result<()> {
    let result = journal.read_entries();
    let spans: Vec<DaySpan> = result.entries.iter().filter_map(DaySpan::of).collect();

    if json {
        renderer.print_json(&spans)?;
    } else if spans.is_empty() {
        renderer.print_info("No entries found.");
    } else {
        let rows: Vec<Vec<String>> = spans
            .iter()
            .map(|span| {
                vec![
                    span.date.format(ROW_DATE_FORMAT).to_string(),
                    span.start.format(ROW_TIME_FORMAT).to_string(),
                    span.end.format(ROW_TIME_FORMAT).to_string(),
                    pretty_duration(span.elapsed),
                    span.task_count.to_string(),
                ]
            })
            .collect();
        renderer.print_table(
            &["Date", "Start Time", "End Time", "Duration", "Task Count"],
            &rows,
        );
    }
    renderer.print_errors(&result.errors);
    Ok(())
}

pub fn list_tasks_mode(
    journal: &Journal,
    renderer: &Renderer,
    tag: Option<&str>,
    last: Option<&str>,
    now: NaiveDateTime,
    json: bool,
) -> Result<()> {
    let filter = TaskFilter::from_args(tag, last, now)?;
    let result = journal.read_tasks(&filter);

    if json {
        renderer.print_json(&result.tasks)?;
    } else if result.tasks.is_empty() {
        renderer.print_info("No tasks found.");
    } else {
        let rows: Vec<Vec<String>> = result
            .tasks
            .iter()
            .map(|dated| {
                vec![
                    dated.date.format(ROW_DATE_FORMAT).to_string(),
                    dated.task.start_time.format(ROW_TIME_FORMAT).to_string(),
                    pretty_duration(dated.task.duration),
                    dated.task.tags.join(","),
                    dated.task.title.clone(),
                ]
            })
            .collect();
        renderer.print_table(&["Date", "Start Time", "Duration", "Tags", "Title"], &rows);
    }
    renderer.print_errors(&result.errors);
    Ok(())
}

pub fn dump_mode(journal: &Journal, renderer: &Renderer) -> Result<()> {
    let result = journal.read_entries();
    renderer.print_json(&result.entries)?;
    renderer.print_errors(&result.errors);
    Ok(())
}
