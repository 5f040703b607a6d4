use anyhow::{Context, Result};
use directories::BaseDirs;
use serde::Deserialize;
use std::{fs, path::PathBuf};

use crate::paths::expand_home;

/// Journal root used when nothing else is configured. Relative to the working directory.
pub const DEFAULT_JOURNAL_DIR: &str = ".auroralog/journals";
/// Extra bullet prompts appended to the starter text.
pub const DEFAULT_PROMPT_SUGGESTIONS: usize = 2;

#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding one `YYYY-MM.md` file per month.
    pub journal_dir: PathBuf,
    /// Preferred editor name/binary. Optional; the CLI will fall back to $VISUAL/$EDITOR.
    pub editor: Option<String>,
    /// How many extra prompts are listed under the suggested one when an entry is empty.
    pub prompt_suggestions: usize,
}

#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    journal_dir: Option<PathBuf>,
    editor: Option<String>,
    prompt_suggestions: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self::from_file_config(FileConfig::default())
    }
}

impl Config {
    /// Load config from disk (first XDG path, then native) and apply defaults.
    /// No config file means defaults; a file that can't be read or parsed is an error.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_paths())
    }

    fn load_from(candidates: &[PathBuf]) -> Result<Self> {
        let file_config = Self::read_file_config(candidates)?;
        Ok(Self::from_file_config(file_config))
    }

    /// Same config rooted somewhere else.
    pub fn with_journal_dir(self, journal_dir: PathBuf) -> Self {
        Self {
            journal_dir: expand_home(&journal_dir),
            ..self
        }
    }

    fn from_file_config(file_config: FileConfig) -> Self {
        let journal_dir = file_config
            .journal_dir
            .unwrap_or_else(|| PathBuf::from(DEFAULT_JOURNAL_DIR));

        Self {
            journal_dir: expand_home(&journal_dir),
            editor: file_config.editor,
            prompt_suggestions: file_config
                .prompt_suggestions
                .unwrap_or(DEFAULT_PROMPT_SUGGESTIONS),
        }
    }

    fn config_file_paths() -> Vec<PathBuf> {
        let mut v = Vec::new();
        if let Some(b) = BaseDirs::new() {
            let xdg = b
                .home_dir()
                .join(".config")
                .join("auroralog")
                .join("config.toml");
            v.push(xdg);
            let native = b.config_dir().join("auroralog").join("config.toml");
            if !v.contains(&native) {
                v.push(native);
            }
        }
        v
    }

    /// Read the first existing config file and parse it.
    fn read_file_config(candidates: &[PathBuf]) -> Result<FileConfig> {
        for path in candidates {
            if !path.exists() {
                continue;
            }
            tracing::debug!(path = %path.display(), "reading config");
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
