use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::config::CorpusConfig;
use crate::errors::CorpusResult;
use crate::strategies::{Corpus, CorpusStrategy};

/// A loaded corpus paired with its own seeded random stream.
///
/// The same configuration and seed always yield the same sequence of samples.
#[derive(Debug, Clone)]
pub struct Sampler {
    corpus: Corpus,
    rng: ChaCha8Rng,
}

impl Sampler {
    pub fn new(config: &CorpusConfig) -> CorpusResult<Self> {
        Self::with_seed(config, config.seed)
    }

    pub fn with_seed(config: &CorpusConfig, seed: u64) -> CorpusResult<Self> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let corpus = Corpus::open(config, &mut rng)?;
        Ok(Self { corpus, rng })
    }

    pub fn get_sample(&mut self) -> CorpusResult<String> {
        self.corpus.get_sample(&mut self.rng)
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }
}

/// Mixes a run seed with a label into an independent stream seed.
pub fn hash_seed(seed: u64, key: &str) -> u64 {
    let mut hash = seed ^ 0xcbf29ce484222325;
    for byte in key.as_bytes() {
        hash ^= *byte as u64;
        hash = hash.wrapping_mul(0x100000001b3);
    }
    hash
}
