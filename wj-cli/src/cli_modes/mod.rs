mod editor_utils;
mod new_mode;
mod read_mode;
mod summarize_mode;

pub use new_mode::new_mode;
pub use read_mode::{dump_mode, list_entries_mode, list_tasks_mode};
pub use summarize_mode::summarize_mode;
