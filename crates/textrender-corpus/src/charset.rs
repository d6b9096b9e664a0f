use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use rand::{Rng, RngCore};
use tracing::debug;

use crate::errors::{CorpusError, CorpusResult};

/// Allow-listed alphabet of symbols that may appear in a sample.
///
/// Symbols keep the order of their first appearance in the chars file so
/// that seeded draws are reproducible across runs.
#[derive(Debug, Clone)]
pub struct CharacterSet {
    symbols: Vec<char>,
    index: HashSet<char>,
}

impl CharacterSet {
    /// Loads a chars file: the first character of every non-empty line is a
    /// symbol. A line holding a single space contributes the space symbol.
    pub fn load(path: &Path) -> CorpusResult<Self> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Err(CorpusError::CharsetNotFound(path.to_path_buf()));
            }
            Err(err) => return Err(CorpusError::Io(err)),
        };

        let symbols = contents
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .filter_map(|line| line.chars().next());
        let charset = Self::collect(symbols, path.to_path_buf())?;

        debug!(
            path = %path.display(),
            symbols = charset.len(),
            "character set loaded"
        );
        Ok(charset)
    }

    /// Builds a set from in-memory symbols.
    pub fn from_symbols<I>(symbols: I) -> CorpusResult<Self>
    where
        I: IntoIterator<Item = char>,
    {
        Self::collect(symbols, PathBuf::from("<memory>"))
    }

    fn collect<I>(symbols: I, origin: PathBuf) -> CorpusResult<Self>
    where
        I: IntoIterator<Item = char>,
    {
        let mut ordered = Vec::new();
        let mut index = HashSet::new();
        for symbol in symbols {
            if index.insert(symbol) {
                ordered.push(symbol);
            }
        }
        if ordered.is_empty() {
            return Err(CorpusError::EmptyCharset(origin));
        }
        Ok(Self {
            symbols: ordered,
            index,
        })
    }

    pub fn contains(&self, symbol: char) -> bool {
        self.index.contains(&symbol)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    /// Keeps only the symbols of `text` that belong to the set.
    pub fn filter(&self, text: &str) -> String {
        text.chars().filter(|ch| self.contains(*ch)).collect()
    }

    /// Draws one symbol uniformly.
    pub fn choose(&self, rng: &mut dyn RngCore) -> char {
        self.symbols[rng.random_range(0..self.symbols.len())]
    }
}
