use super::theme::OneDark;
use anyhow::Result;
use serde::Serialize;
use tabled::{
    builder::Builder,
    settings::{Padding, Style},
};
use termimad::{
    MadSkin,
    crossterm::style::{Color, Stylize},
};
use wj_core::QueryError;

/// Gap between columns of a plain table.
const COLUMN_GAP: usize = 4;

#[derive(Clone)]
pub struct RenderOptions {
    pub use_color: bool,
}

pub struct Renderer {
    skin: MadSkin,
    opts: RenderOptions,
}

impl Renderer {
    pub fn new(config: Option<RenderOptions>) -> Self {
        Self {
            skin: OneDark::default_onedark_skin(),
            opts: config.unwrap_or(RenderOptions { use_color: true }),
        }
    }

    pub fn print_md(&self, md: &str) {
        self.skin.print_text(md);
    }

    pub fn print_info(&self, message: &str) {
        if self.opts.use_color {
            let md = format!("|-|\n| {} |\n|-|\n", md_cell(message));
            self.skin.print_text(&md);
        } else {
            println!("{message}");
        }
    }

    pub fn print_table(&self, headers: &[&str], rows: &[Vec<String>]) {
        if self.opts.use_color {
            self.print_md(&markdown_table(headers, rows));
        } else {
            print!("{}", plain_table(headers, rows));
        }
    }

    pub fn print_json<T: Serialize + ?Sized>(&self, value: &T) -> Result<()> {
        println!("{}", serde_json::to_string_pretty(value)?);
        Ok(())
    }

    /// Writes per-file problems to stderr so stdout stays machine-readable.
    pub fn print_errors(&self, errors: &[QueryError]) {
        if errors.is_empty() {
            return;
        }
        let heading = "Errors:";
        if self.opts.use_color {
            eprintln!("{}", heading.with(Color::Red).bold());
        } else {
            eprintln!("{heading}");
        }
        for error in errors {
            match error {
                QueryError::FileError { path, error } => {
                    eprintln!("* Could not process '{}': {:#}", path.display(), error);
                }
                QueryError::MalformedEntry { path, error } => {
                    eprintln!("* Could not parse '{}': {}", path.display(), error);
                }
            }
        }
    }
}

/// Left-aligned columns separated by [`COLUMN_GAP`] spaces, one line per row.
fn plain_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut builder = Builder::default();
    builder.push_record(headers.iter().map(|h| h.to_string()));
    for row in rows {
        builder.push_record(row.iter().cloned());
    }

    let mut table = builder.build();
    table
        .with(Style::empty())
        .with(Padding::new(0, COLUMN_GAP, 0, 0));

    let mut out = String::new();
    for line in table.to_string().lines() {
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

fn markdown_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let rule = format!("|{}\n", "-|".repeat(headers.len()));
    let mut md = format!("|{}\n", ":-|".repeat(headers.len()));
    md.push('|');
    for header in headers {
        md.push_str(&format!("**{}**|", md_cell(header)));
    }
    md.push('\n');
    md.push_str(&rule);
    for row in rows {
        md.push('|');
        for cell in row {
            md.push_str(&md_cell(cell));
            md.push('|');
        }
        md.push('\n');
    }
    md.push_str(&rule);
    md
}

fn md_cell(text: &str) -> String {
    text.replace('|', "¦")
}
