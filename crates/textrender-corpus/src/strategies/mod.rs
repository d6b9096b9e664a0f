//! Corpus strategies and the dispatch enum that selects one per run.

mod chn;
mod eng;
mod id_card;
mod name;
mod random;
mod sohu;

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use rand::{Rng, RngCore};
use tracing::info;

use crate::charset::CharacterSet;
use crate::config::CorpusConfig;
use crate::errors::{CorpusError, CorpusResult};
use crate::registry::CorpusKind;
use crate::sources::discover_text_files;

pub use chn::{ChnCorpus, SEPARATORS};
pub use eng::EngCorpus;
pub use id_card::{
    CHECK_CODES, Gender, ID_WEIGHTS, IdCorpus, generate_id_number, id_check_digit,
    is_valid_id_number,
};
pub use name::{
    FAMILY_COMMON_FILE, FAMILY_RARE_FILE, GIVEN_COMMON_FILE, GIVEN_RARE_FILE, NameCorpus,
};
pub use random::RandomCorpus;
pub use sohu::SohuCorpus;

/// State shared by every strategy: what the base constructor prepares
/// before the strategy's own `load` runs.
#[derive(Debug, Clone)]
pub struct CorpusSource {
    pub kind: CorpusKind,
    pub charset: CharacterSet,
    pub corpus_dir: Option<PathBuf>,
    /// Documents found by the recursive scan; empty for strategies that do not scan.
    pub files: Vec<PathBuf>,
    pub length: usize,
    pub today: NaiveDate,
}

impl CorpusSource {
    /// Loads the character set, resolves the length and discovers documents.
    pub fn prepare(config: &CorpusConfig) -> CorpusResult<Self> {
        let kind = config.mode;
        let charset = CharacterSet::load(&config.chars_file)?;
        let length = config.effective_length();
        if length == 0 {
            return Err(CorpusError::InvalidConfig(format!(
                "sample length for '{kind}' must be greater than zero"
            )));
        }

        let corpus_dir = if kind.requires_corpus_dir() {
            let dir = config
                .corpus_dir
                .clone()
                .ok_or_else(|| CorpusError::CorpusDirRequired(kind.to_string()))?;
            Some(dir)
        } else {
            config.corpus_dir.clone()
        };

        let files = match (&corpus_dir, kind.scans_documents()) {
            (Some(dir), true) => {
                info!(mode = %kind, corpus_dir = %dir.display(), "loading corpus");
                discover_text_files(dir)?
            }
            _ => Vec::new(),
        };

        Ok(Self {
            kind,
            charset,
            corpus_dir,
            files,
            length,
            today: config
                .today
                .unwrap_or_else(|| chrono::Local::now().date_naive()),
        })
    }

    pub(crate) fn require_dir(&self) -> CorpusResult<&Path> {
        self.corpus_dir
            .as_deref()
            .ok_or_else(|| CorpusError::CorpusDirRequired(self.kind.to_string()))
    }
}

/// Capability interface every corpus strategy implements.
pub trait CorpusStrategy {
    /// Reads backing data into memory. Called exactly once per instance.
    fn load(source: CorpusSource, rng: &mut dyn RngCore) -> CorpusResult<Self>
    where
        Self: Sized;

    fn source(&self) -> &CorpusSource;

    /// Produces one sample. Never mutates the loaded data.
    fn get_sample(&self, rng: &mut dyn RngCore) -> CorpusResult<String>;

    fn kind(&self) -> CorpusKind {
        self.source().kind
    }

    fn length(&self) -> usize {
        self.source().length
    }
}

/// One loaded strategy, selected by [`CorpusKind`].
#[derive(Debug, Clone)]
pub enum Corpus {
    Random(RandomCorpus),
    Eng(EngCorpus),
    Chn(ChnCorpus),
    Id(IdCorpus),
    Name(NameCorpus),
    Sohu(SohuCorpus),
}

impl Corpus {
    /// Prepares the shared state and loads the configured strategy.
    pub fn open(config: &CorpusConfig, rng: &mut dyn RngCore) -> CorpusResult<Self> {
        let source = CorpusSource::prepare(config)?;
        Self::load(source, rng)
    }

    fn strategy(&self) -> &dyn CorpusStrategy {
        match self {
            Corpus::Random(corpus) => corpus,
            Corpus::Eng(corpus) => corpus,
            Corpus::Chn(corpus) => corpus,
            Corpus::Id(corpus) => corpus,
            Corpus::Name(corpus) => corpus,
            Corpus::Sohu(corpus) => corpus,
        }
    }
}

impl CorpusStrategy for Corpus {
    fn load(source: CorpusSource, rng: &mut dyn RngCore) -> CorpusResult<Self> {
        Ok(match source.kind {
            CorpusKind::Random => Corpus::Random(RandomCorpus::load(source, rng)?),
            CorpusKind::Eng => Corpus::Eng(EngCorpus::load(source, rng)?),
            CorpusKind::Chn => Corpus::Chn(ChnCorpus::load(source, rng)?),
            CorpusKind::CardId => Corpus::Id(IdCorpus::load(source, rng)?),
            CorpusKind::Name => Corpus::Name(NameCorpus::load(source, rng)?),
            CorpusKind::Sohu => Corpus::Sohu(SohuCorpus::load(source, rng)?),
        })
    }

    fn source(&self) -> &CorpusSource {
        self.strategy().source()
    }

    fn get_sample(&self, rng: &mut dyn RngCore) -> CorpusResult<String> {
        self.strategy().get_sample(rng)
    }
}

/// Uniform pick from a non-empty slice.
pub(crate) fn pick<'a, T>(values: &'a [T], rng: &mut dyn RngCore) -> Option<&'a T> {
    if values.is_empty() {
        return None;
    }
    values.get(rng.random_range(0..values.len()))
}

/// Random window of `width` chars starting in `[0, len - width)`.
///
/// Callers guarantee `symbols.len() > width`.
pub(crate) fn window(symbols: &[char], width: usize, rng: &mut dyn RngCore) -> String {
    let start = rng.random_range(0..symbols.len() - width);
    symbols[start..start + width].iter().collect()
}
