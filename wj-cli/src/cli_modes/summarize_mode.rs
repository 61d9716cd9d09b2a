use crate::render::{Renderer, pretty_duration};
use anyhow::Result;
use std::path::Path;
use wj_core::{DaySpan, Journal, render::format_day_header, tag_totals};

pub fn summarize_mode(journal: &Journal, renderer: &Renderer, file: &Path) -> Result<()> {
    let entry = journal.read_entry(file)?;

    let heading = match DaySpan::of(&entry) {
        Some(span) => format!(
            "{}: {} tasks, {} to {} ({})",
            format_day_header(entry.date),
            span.task_count,
            span.start.format("%H:%M"),
            span.end.format("%H:%M"),
            pretty_duration(span.elapsed).trim_start()
        ),
        None => format_day_header(entry.date),
    };
    renderer.print_info(&heading);

    let rows: Vec<Vec<String>> = entry
        .tasks
        .iter()
        .map(|task| {
            vec![
                task.start_time.format("%H:%M").to_string(),
                pretty_duration(task.duration),
                task.tags.join(","),
                task.title.clone(),
            ]
        })
        .collect();
    renderer.print_table(&["Start Time", "Duration", "Tags", "Title"], &rows);

    let totals: Vec<Vec<String>> = tag_totals(&entry.tasks)
        .into_iter()
        .map(|(tag, total)| vec![tag, pretty_duration(total)])
        .collect();
    println!();
    renderer.print_table(&["Tag", "Total"], &totals);
    Ok(())
}
