//! The core `Journal` struct and its associated types, providing the primary API for interaction.

use crate::config::Config;
use crate::entry::{DatedTask, Entry};
use crate::error::FormatError;
use crate::filter::TaskFilter;
use crate::parse_entries::parse_entry_bytes;
use crate::paths::{day_path, is_journal_file};
use anyhow::{Context, Result, bail};
use chrono::{Duration, NaiveDate};
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// The central struct for all journal operations.
///
/// An instance of `Journal` holds the configuration and provides methods for
/// reading from and writing to the day files.
#[derive(Debug)]
pub struct Journal {
    pub config: Config,
}

/// Represents a per-file problem that occurred during a query.
///
/// Reported next to the entries that did load, without stopping the query.
#[derive(Debug)]
pub enum QueryError {
    FileError { path: PathBuf, error: anyhow::Error },
    MalformedEntry { path: PathBuf, error: FormatError },
}

/// The complete result of a query, containing successfully parsed entries and any errors.
#[derive(Debug)]
pub struct QueryResult {
    pub entries: Vec<Entry>,
    pub errors: Vec<QueryError>,
}

#[derive(Debug)]
pub struct TaskQueryResult {
    pub tasks: Vec<DatedTask>,
    pub errors: Vec<QueryError>,
}

/// A freshly written day file.
#[derive(Debug)]
pub struct NewDay {
    pub path: PathBuf,
    pub entry: Entry,
    /// Date of the entry whose to-do list was carried forward, if any.
    pub carried_from: Option<NaiveDate>,
}

impl Journal {
    /// Creates a new `Journal` instance, loading configuration from standard paths.
    pub fn new() -> Result<Self> {
        let config = Config::load()?;
        Self::with_config(config)
    }

    /// Creates a new `Journal` instance with a specific `Config`.
    ///
    /// This also ensures that the journal's root directory exists.
    pub fn with_config(config: Config) -> Result<Self> {
        fs::create_dir_all(&config.journal_dir)
            .with_context(|| format!("creating {}", config.journal_dir.display()))?;
        Ok(Self { config })
    }

    pub fn day_path(&self, date: NaiveDate) -> PathBuf {
        day_path(&self.config.journal_dir, date, &self.config.extension)
    }

    /// Reads and parses a single day file.
    pub fn read_entry(&self, path: &Path) -> Result<Entry> {
        let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
        parse_entry_bytes(&bytes).with_context(|| format!("parsing {}", path.display()))
    }

    /// Reads every day file in the journal directory, oldest first.
    ///
    /// Files that cannot be read or parsed are reported in
    /// [`QueryResult::errors`]; the remaining files are still loaded.
    pub fn read_entries(&self) -> QueryResult {
        let mut entries = Vec::new();
        let mut errors = Vec::new();

        let dir = &self.config.journal_dir;
        let listing = match fs::read_dir(dir) {
            Ok(listing) => listing,
            Err(error) => {
                errors.push(QueryError::FileError {
                    path: dir.clone(),
                    error: anyhow::Error::new(error).context("listing journal directory"),
                });
                return QueryResult { entries, errors };
            }
        };

        let mut paths = Vec::new();
        for dir_entry in listing {
            match dir_entry {
                Ok(dir_entry) => {
                    let path = dir_entry.path();
                    if is_journal_file(&path, &self.config.extension) {
                        paths.push(path);
                    }
                }
                Err(error) => errors.push(QueryError::FileError {
                    path: dir.clone(),
                    error: error.into(),
                }),
            }
        }
        paths.sort();
        debug!(count = paths.len(), dir = %dir.display(), "reading day files");

        for path in paths {
            let bytes = match fs::read(&path) {
                Ok(bytes) => bytes,
                Err(error) => {
                    warn!(path = %path.display(), %error, "skipping unreadable day file");
                    errors.push(QueryError::FileError {
                        path,
                        error: error.into(),
                    });
                    continue;
                }
            };
            match parse_entry_bytes(&bytes) {
                Ok(entry) => {
                    if !entry.is_chronological() {
                        warn!(
                            path = %path.display(),
                            "tasks are out of order, some durations are negative"
                        );
                    }
                    entries.push(entry);
                }
                Err(error) => {
                    warn!(path = %path.display(), %error, "skipping malformed day file");
                    errors.push(QueryError::MalformedEntry { path, error });
                }
            }
        }

        QueryResult { entries, errors }
    }

    /// Every task of every readable entry, flattened and filtered.
    pub fn read_tasks(&self, filter: &TaskFilter) -> TaskQueryResult {
        let QueryResult { entries, errors } = self.read_entries();
        let tasks = filter.apply(entries.iter().flat_map(|entry| entry.dated_tasks()));
        TaskQueryResult { tasks, errors }
    }

    /// The most recent entry before `today`, looking back at most
    /// `lookback_days` days.
    ///
    /// A day file that exists but does not parse is an error.
    pub fn last_entry(&self, today: NaiveDate) -> Result<Option<Entry>> {
        for days_back in 1..=i64::from(self.config.lookback_days) {
            let date = today - Duration::days(days_back);
            let path = self.day_path(date);
            match fs::read(&path) {
                Ok(bytes) => {
                    debug!(path = %path.display(), "found previous entry");
                    let entry = parse_entry_bytes(&bytes)
                        .with_context(|| format!("parsing previous entry {}", path.display()))?;
                    return Ok(Some(entry));
                }
                Err(error) if error.kind() == ErrorKind::NotFound => continue,
                Err(error) => {
                    return Err(error).with_context(|| format!("reading {}", path.display()));
                }
            }
        }
        Ok(None)
    }

    /// Writes the day file for `today`, carrying forward the to-do list of the
    /// most recent earlier entry. Never overwrites an existing file.
    pub fn create_day(&self, today: NaiveDate) -> Result<NewDay> {
        let path = self.day_path(today);
        if path.exists() {
            bail!("the entry {} already exists", path.display());
        }

        let previous = self.last_entry(today)?;
        let entry = Entry::new_day(today, previous.as_ref());
        let text = entry
            .to_text()
            .context("rendering the new entry (is the previous to-do list well formed?)")?;

        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .with_context(|| format!("creating {}", path.display()))?;
        file.write_all(text.as_bytes())
            .with_context(|| format!("writing {}", path.display()))?;

        let carried_from = previous.map(|e| e.date);
        info!(path = %path.display(), ?carried_from, "created day file");
        Ok(NewDay {
            path,
            entry,
            carried_from,
        })
    }
}
