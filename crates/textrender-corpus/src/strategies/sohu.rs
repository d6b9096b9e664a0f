use rand::{Rng, RngCore};
use tracing::debug;

use super::{CorpusSource, CorpusStrategy, pick, window};
use crate::errors::{CorpusError, CorpusResult};
use crate::sources::read_clean_lines;

/// Windows over a document re-read from disk on every call.
///
/// Nothing is cached: each sample picks a file, cleans it and cuts a window
/// of `length` or `length - 1` symbols.
#[derive(Debug, Clone)]
pub struct SohuCorpus {
    source: CorpusSource,
}

impl CorpusStrategy for SohuCorpus {
    fn load(source: CorpusSource, _rng: &mut dyn RngCore) -> CorpusResult<Self> {
        Ok(Self { source })
    }

    fn source(&self) -> &CorpusSource {
        &self.source
    }

    fn get_sample(&self, rng: &mut dyn RngCore) -> CorpusResult<String> {
        let length = self.source.length;
        let path = pick(&self.source.files, rng).ok_or_else(|| {
            CorpusError::CorpusNotFound(self.source.corpus_dir.clone().unwrap_or_default())
        })?;

        let whole_line: Vec<char> = read_clean_lines(path)?
            .concat()
            .chars()
            .filter(|ch| self.source.charset.contains(*ch))
            .collect();
        let jitter = rng.random_range(0..2_usize);
        let width = length - jitter;

        if whole_line.len() <= length {
            debug!(path = %path.display(), chars = whole_line.len(), "sohu document too short");
            return Err(CorpusError::InsufficientCorpus {
                source_name: path.display().to_string(),
                required: length,
                available: whole_line.len(),
            });
        }
        Ok(window(&whole_line, width, rng))
    }
}
