use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::CorpusResult;
use crate::registry::CorpusKind;

/// Construction inputs for a corpus strategy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorpusConfig {
    /// Strategy to load.
    pub mode: CorpusKind,
    /// File holding one symbol per line.
    pub chars_file: PathBuf,
    /// Root of the corpus documents or name lists.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub corpus_dir: Option<PathBuf>,
    /// Requested sample length, before per-strategy overrides.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<usize>,
    /// Seed for loading and sampling.
    #[serde(default)]
    pub seed: u64,
    /// Reference date for identifier birth dates; defaults to the local date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub today: Option<NaiveDate>,
}

impl CorpusConfig {
    pub fn new(mode: CorpusKind, chars_file: impl Into<PathBuf>) -> Self {
        Self {
            mode,
            chars_file: chars_file.into(),
            corpus_dir: None,
            length: None,
            seed: 0,
            today: None,
        }
    }

    pub fn with_corpus_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.corpus_dir = Some(dir.into());
        self
    }

    pub fn with_length(mut self, length: usize) -> Self {
        self.length = Some(length);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    /// Length after the strategy's overrides.
    pub fn effective_length(&self) -> usize {
        self.mode.effective_length(self.length)
    }

    pub fn from_toml_str(content: &str) -> CorpusResult<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_toml_file(path: &Path) -> CorpusResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_toml_with_defaults() {
        let config = CorpusConfig::from_toml_str(
            r#"
mode = "eng"
chars_file = "data/chars/eng.txt"
corpus_dir = "data/corpus"
"#,
        )
        .expect("parse config");
        assert_eq!(config.mode, CorpusKind::Eng);
        assert_eq!(config.seed, 0);
        assert_eq!(config.length, None);
        assert_eq!(config.effective_length(), 3);
    }

    #[test]
    fn parses_today_and_cardid_mode() {
        let config = CorpusConfig::from_toml_str(
            r#"
mode = "cardid"
chars_file = "chars.txt"
seed = 7
today = "2024-03-01"
"#,
        )
        .expect("parse config");
        assert_eq!(config.mode, CorpusKind::CardId);
        assert_eq!(config.today, NaiveDate::from_ymd_opt(2024, 3, 1));
        assert_eq!(config.effective_length(), 18);
    }
}
