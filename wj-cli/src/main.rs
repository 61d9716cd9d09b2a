mod cli;
mod cli_modes;
mod render;

use anyhow::Result;
use chrono::Local;
use clap::Parser;
use cli::{Cli, Command, ListCommand};
use cli_modes::{dump_mode, list_entries_mode, list_tasks_mode, new_mode, summarize_mode};
use render::{RenderOptions, Renderer};
use std::process::ExitCode;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use wj_core::{Config, Journal};

fn main() -> ExitCode {
    init_tracing();
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("wj: {e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr, filtered by `RUST_LOG` (default `warn`).
fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load()?;
    if let Some(dir) = &cli.data_directory {
        config.journal_dir = dir.clone();
    }
    let journal = Journal::with_config(config)?;
    let renderer = Renderer::new(Some(RenderOptions {
        use_color: cli.color.use_color(),
    }));

    match &cli.command {
        Command::New { edit } => {
            new_mode(&journal, &renderer, Local::now().date_naive(), *edit)
        }
        Command::List { what } => match what {
            ListCommand::Entries { json } => list_entries_mode(&journal, &renderer, *json),
            ListCommand::Tasks { tag, last, json } => list_tasks_mode(
                &journal,
                &renderer,
                tag.as_deref(),
                last.as_deref(),
                Local::now().naive_local(),
                *json,
            ),
        },
        Command::Dump => dump_mode(&journal, &renderer),
        Command::Summarize { file } => summarize_mode(&journal, &renderer, file),
        Command::Path => {
            renderer.print_info(&journal.config.journal_dir.display().to_string());
            Ok(())
        }
    }
}
