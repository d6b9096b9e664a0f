use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::CorpusError;

/// Requested length when the caller does not pass one.
pub const DEFAULT_LENGTH: usize = 10;

/// Word count used by the English strategy when the default length is requested.
pub const ENG_DEFAULT_WORDS: usize = 3;
pub const ID_NUMBER_LENGTH: usize = 18;
pub const NAME_LENGTH: usize = 10;
pub const SOHU_LENGTH: usize = 12;

/// Registered corpus strategies, addressed by their mode name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CorpusKind {
    Random,
    Chn,
    Eng,
    #[serde(rename = "cardid")]
    CardId,
    Name,
    Sohu,
}

impl CorpusKind {
    pub const ALL: [CorpusKind; 6] = [
        CorpusKind::Random,
        CorpusKind::Chn,
        CorpusKind::Eng,
        CorpusKind::CardId,
        CorpusKind::Name,
        CorpusKind::Sohu,
    ];

    pub fn name(self) -> &'static str {
        match self {
            CorpusKind::Random => "random",
            CorpusKind::Chn => "chn",
            CorpusKind::Eng => "eng",
            CorpusKind::CardId => "cardid",
            CorpusKind::Name => "name",
            CorpusKind::Sohu => "sohu",
        }
    }

    /// Whether the strategy reads anything from a corpus directory.
    pub fn requires_corpus_dir(self) -> bool {
        !matches!(self, CorpusKind::Random | CorpusKind::CardId)
    }

    /// Whether the corpus directory is scanned recursively for `*.txt` documents.
    pub fn scans_documents(self) -> bool {
        matches!(self, CorpusKind::Chn | CorpusKind::Eng | CorpusKind::Sohu)
    }

    /// Applies the per-strategy length overrides to a requested length.
    pub fn effective_length(self, requested: Option<usize>) -> usize {
        let requested = requested.unwrap_or(DEFAULT_LENGTH);
        match self {
            CorpusKind::Eng if requested == DEFAULT_LENGTH => ENG_DEFAULT_WORDS,
            CorpusKind::CardId => ID_NUMBER_LENGTH,
            CorpusKind::Name => NAME_LENGTH,
            CorpusKind::Sohu => SOHU_LENGTH,
            _ => requested,
        }
    }
}

impl fmt::Display for CorpusKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CorpusKind {
    type Err = CorpusError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        CorpusKind::ALL
            .into_iter()
            .find(|kind| kind.name() == value)
            .ok_or_else(|| CorpusError::UnknownMode(value.to_string()))
    }
}
