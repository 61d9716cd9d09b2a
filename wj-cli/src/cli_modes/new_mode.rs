use super::editor_utils::{open_file_in_editor, resolve_editor};
use crate::render::Renderer;
use anyhow::Result;
use chrono::NaiveDate;
use wj_core::Journal;

pub fn new_mode(journal: &Journal, renderer: &Renderer, today: NaiveDate, edit: bool) -> Result<()> {
    let new_day = journal.create_day(today)?;
    renderer.print_info(&format!("Created {}", new_day.path.display()));
    if let Some(from) = new_day.carried_from {
        renderer.print_info(&format!(
            "Carried {} to-do items forward from {}.",
            new_day.entry.to_do.len(),
            from
        ));
    }

    if edit {
        let editor = resolve_editor(journal.config.editor.as_deref());
        open_file_in_editor(&editor, &new_day.path)?;
    }
    Ok(())
}
