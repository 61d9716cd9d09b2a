use anyhow::{Context, Result};
use directories::BaseDirs;
use serde::Deserialize;
use std::{fs, path::PathBuf};

#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding one text file per day.
    pub journal_dir: PathBuf,
    /// Extension of day files, without the dot. Default is `txt`.
    pub extension: String,
    /// How many days back `wj new` looks for the previous entry. Default is 14.
    pub lookback_days: u32,
    /// Preferred editor name/binary (e.g. hx for Helix). Optional; the CLI will fall back to $VISUAL/$EDITOR.
    pub editor: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    journal_dir: Option<PathBuf>,
    extension: Option<String>,
    lookback_days: Option<u32>,
    editor: Option<String>,
}

impl Config {
    /// Public entrypoint: load config from disk (first XDG path, then native) and apply defaults.
    pub fn load() -> Result<Self> {
        let file_config = Self::read_file_config()?;
        Ok(Self::from_file_config(file_config))
    }

    fn from_file_config(file_config: FileConfig) -> Self {
        let extension = file_config
            .extension
            .map(|ext| ext.trim_start_matches('.').to_string())
            .filter(|ext| !ext.is_empty())
            .unwrap_or_else(|| "txt".to_string());

        Self {
            journal_dir: file_config
                .journal_dir
                .unwrap_or_else(Self::default_journal_dir),
            extension,
            lookback_days: file_config.lookback_days.unwrap_or(14),
            editor: file_config.editor,
        }
    }

    /// Default journal root: `{data_dir}/wj`
    /// - macOS:   `~/Library/Application Support/wj`
    /// - Linux:   `$XDG_DATA_HOME/wj` or `~/.local/share/wj`
    /// - Windows: `%APPDATA%\wj`
    fn default_journal_dir() -> PathBuf {
        if let Some(base) = BaseDirs::new() {
            base.data_dir().join("wj")
        } else {
            PathBuf::from("./wj")
        }
    }

    fn config_file_paths() -> Vec<PathBuf> {
        let mut v = Vec::new();
        if let Some(b) = BaseDirs::new() {
            v.push(b.home_dir().join(".config").join("wj").join("config.toml"));
            v.push(b.config_dir().join("wj").join("config.toml"));
        }
        v
    }

    /// Read the first existing config file and parse it.
    fn read_file_config() -> Result<FileConfig> {
        for path in Self::config_file_paths() {
            if !path.exists() {
                continue;
            }
            let s =
                fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
            return Self::parse_file(&s).with_context(|| format!("parsing {}", path.display()));
        }
        Ok(FileConfig::default())
    }

    /// Parse a TOML string into `FileConfig`.
    fn parse_file(s: &str) -> Result<FileConfig> {
        Ok(toml::from_str::<FileConfig>(s)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn candidates_prioritize_xdg_then_native() {
        if let Some(b) = BaseDirs::new() {
            let expected_xdg = b.home_dir().join(".config").join("wj").join("config.toml");
            let expected_native = b.config_dir().join("wj").join("config.toml");
            let c = Config::config_file_paths();
            assert_eq!(c.first(), Some(&expected_xdg));
            assert_eq!(c.get(1), Some(&expected_native));
        }
    }

    #[test]
    fn parse_file_accepts_all_keys() {
        let toml = r#"
            journal_dir = "/tmp/work-journal"
            extension = ".wj"
            lookback_days = 30
            editor = "hx"
        "#;
        let config = Config::from_file_config(Config::parse_file(toml).unwrap());
        assert_eq!(config.journal_dir, Path::new("/tmp/work-journal"));
        assert_eq!(config.extension, "wj");
        assert_eq!(config.lookback_days, 30);
        assert_eq!(config.editor.as_deref(), Some("hx"));
    }

    #[test]
    fn empty_file_falls_back_to_defaults() {
        let config = Config::from_file_config(Config::parse_file("").unwrap());
        assert_eq!(config.extension, "txt");
        assert_eq!(config.lookback_days, 14);
        assert!(config.editor.is_none());
        assert!(config.journal_dir.ends_with("wj"));
    }

    #[test]
    fn parse_file_rejects_wrong_types() {
        assert!(Config::parse_file("lookback_days = \"two weeks\"").is_err());
    }
}
