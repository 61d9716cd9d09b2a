use anyhow::{Context, Result, bail};
use std::{path::Path, process::Command};
use tracing::debug;

/// Configured editor, then `$VISUAL`, then `$EDITOR`, then `vim`.
pub fn resolve_editor(editor: Option<&str>) -> String {
    editor
        .map(str::to_string)
        .or_else(|| std::env::var("VISUAL").ok())
        .or_else(|| std::env::var("EDITOR").ok())
        .unwrap_or_else(|| "vim".into())
}

/// Runs `editor_cmd` on `path` and waits for it. The command may carry
/// arguments, e.g. `code --wait`.
pub fn open_file_in_editor(editor_cmd: &str, path: &Path) -> Result<()> {
    let mut parts = editor_cmd.split_whitespace();
    let Some(program) = parts.next() else {
        bail!("the editor command is empty");
    };
    debug!(editor = editor_cmd, path = %path.display(), "opening editor");
    let status = Command::new(program)
        .args(parts)
        .arg(path)
        .status()
        .with_context(|| format!("starting editor `{editor_cmd}`"))?;
    if !status.success() {
        bail!("Editor exited with status {}", status);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_editor_wins() {
        assert_eq!(resolve_editor(Some("nano")), "nano");
    }

    #[test]
    fn empty_editor_command_is_an_error() {
        let err = open_file_in_editor("  ", Path::new("x.txt")).unwrap_err();
        assert!(err.to_string().contains("empty"));
    }

    #[cfg(unix)]
    #[test]
    fn editor_failure_is_reported() {
        let err = open_file_in_editor("false", Path::new("x.txt")).unwrap_err();
        assert!(err.to_string().contains("Editor exited"));
    }
}
