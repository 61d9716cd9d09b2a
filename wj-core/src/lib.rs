pub mod config;
pub mod dates;
pub mod entry;
pub mod error;
pub mod filter;
pub mod journal;
pub mod parse_entries;
pub mod paths;
pub mod render;
pub mod scanner;
pub mod summary;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use entry::{DatedTask, Entry, Task};
pub use error::FormatError;
pub use filter::TaskFilter;
pub use journal::{Journal, NewDay, QueryError, QueryResult, TaskQueryResult};
pub use parse_entries::{parse_entry, parse_entry_bytes};
pub use render::format_entry;
pub use summary::{DaySpan, tag_totals};
