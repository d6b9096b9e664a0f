use std::path::PathBuf;

use thiserror::Error;

/// Errors emitted while loading or sampling a corpus.
#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("chars file not found: {0}")]
    CharsetNotFound(PathBuf),
    #[error("chars file {0} defines no symbols")]
    EmptyCharset(PathBuf),
    #[error("corpus mode '{0}' requires a corpus directory")]
    CorpusDirRequired(String),
    #[error("corpus not found: no .txt files under {0}")]
    CorpusNotFound(PathBuf),
    #[error("name list not found: {0}")]
    NameListMissing(PathBuf),
    #[error("name list is empty: {0}")]
    NameListEmpty(PathBuf),
    #[error("unknown corpus mode: {0}")]
    UnknownMode(String),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("insufficient corpus in {source_name}: need more than {required}, have {available}")]
    InsufficientCorpus {
        source_name: String,
        required: usize,
        available: usize,
    },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("toml error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Convenience alias for corpus results.
pub type CorpusResult<T> = std::result::Result<T, CorpusError>;
