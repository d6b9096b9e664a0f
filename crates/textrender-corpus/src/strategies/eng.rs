use std::fs;

use rand::{Rng, RngCore};
use tracing::{debug, info};

use super::{CorpusSource, CorpusStrategy};
use crate::errors::{CorpusError, CorpusResult};

/// Tokens shorter than this (after filtering) are dropped.
const MIN_WORD_CHARS: usize = 3;

/// Contiguous word windows over a flat token list built from every document.
#[derive(Debug, Clone)]
pub struct EngCorpus {
    source: CorpusSource,
    words: Vec<String>,
}

impl EngCorpus {
    pub fn words(&self) -> &[String] {
        &self.words
    }
}

impl CorpusStrategy for EngCorpus {
    fn load(source: CorpusSource, _rng: &mut dyn RngCore) -> CorpusResult<Self> {
        let mut words = Vec::new();
        for (idx, path) in source.files.iter().enumerate() {
            debug!(file = idx, path = %path.display(), "loading eng corpus file");
            let data = fs::read_to_string(path)?;
            for line in data.split('\n') {
                for token in line.split(' ') {
                    let word = source.charset.filter(token.trim());
                    if word.chars().count() >= MIN_WORD_CHARS {
                        words.push(word);
                    }
                }
            }
            debug!(words = words.len(), "eng word count");
        }

        info!(
            files = source.files.len(),
            words = words.len(),
            "eng corpus loaded"
        );
        Ok(Self { source, words })
    }

    fn source(&self) -> &CorpusSource {
        &self.source
    }

    fn get_sample(&self, rng: &mut dyn RngCore) -> CorpusResult<String> {
        let length = self.source.length;
        if self.words.len() <= length {
            return Err(CorpusError::InsufficientCorpus {
                source_name: "eng word list".to_string(),
                required: length,
                available: self.words.len(),
            });
        }

        let start = rng.random_range(0..self.words.len() - length);
        Ok(self.words[start..start + length].join(" "))
    }
}
