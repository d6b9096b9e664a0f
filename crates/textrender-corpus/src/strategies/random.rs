use rand::RngCore;

use super::{CorpusSource, CorpusStrategy};
use crate::errors::CorpusResult;

/// Independent uniform draws from the character set.
#[derive(Debug, Clone)]
pub struct RandomCorpus {
    source: CorpusSource,
}

impl CorpusStrategy for RandomCorpus {
    fn load(source: CorpusSource, _rng: &mut dyn RngCore) -> CorpusResult<Self> {
        Ok(Self { source })
    }

    fn source(&self) -> &CorpusSource {
        &self.source
    }

    fn get_sample(&self, rng: &mut dyn RngCore) -> CorpusResult<String> {
        let charset = &self.source.charset;
        Ok((0..self.source.length)
            .map(|_| charset.choose(rng))
            .collect())
    }
}
