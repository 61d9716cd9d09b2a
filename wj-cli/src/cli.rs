use crate::render::ColorMode;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// wj: plain-text work journal
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    /// Journal directory to use instead of the configured one.
    #[arg(long, short = 'd', env = "WJ_DATA_DIR", global = true)]
    pub data_directory: Option<PathBuf>,
    /// Control ANSI colors in output.
    /// By default, colors are disabled when output is redirected (e.g with `>` or `|`).
    #[arg(long, value_enum, default_value_t = ColorMode::Auto, global = true)]
    pub color: ColorMode,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create today's entry, carrying the to-do list of the last one forward.
    New {
        /// Open the new entry in $EDITOR.
        #[arg(long, short)]
        edit: bool,
    },
    /// List entries or tasks.
    List {
        #[command(subcommand)]
        what: ListCommand,
    },
    /// Print every entry as JSON.
    Dump,
    /// Show task durations and per-tag totals for a single day file.
    Summarize {
        /// Path to the day file.
        file: PathBuf,
    },
    /// Print the journal directory.
    Path,
}

#[derive(Subcommand, Debug)]
pub enum ListCommand {
    /// One row per day: start, end, duration and task count.
    Entries {
        #[arg(long)]
        json: bool,
    },
    /// One row per task.
    Tasks {
        /// Only tasks carrying this tag.
        #[arg(long, short)]
        tag: Option<String>,
        /// Only tasks started within this span, e.g. `7d` or `2w`.
        #[arg(long, short)]
        last: Option<String>,
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["wj", "list", "tasks", "-d", "/tmp/j", "--tag", "work"])
            .unwrap();
        assert_eq!(cli.data_directory, Some(PathBuf::from("/tmp/j")));
        match cli.command {
            Command::List {
                what: ListCommand::Tasks { tag, last, json },
            } => {
                assert_eq!(tag.as_deref(), Some("work"));
                assert_eq!(last, None);
                assert!(!json);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}
