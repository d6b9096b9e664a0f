use rand::RngCore;
use tracing::{debug, info, warn};

use super::{CorpusSource, CorpusStrategy, pick, window};
use crate::errors::{CorpusError, CorpusResult};
use crate::sources::read_clean_lines;

/// Separators used to glue the lines of one document together.
pub const SEPARATORS: [char; 7] = [',', '，', '：', '-', ' ', ';', '。'];

/// Fixed-length windows over whole documents, each flattened into one line.
#[derive(Debug, Clone)]
pub struct ChnCorpus {
    source: CorpusSource,
    documents: Vec<Vec<char>>,
}

impl ChnCorpus {
    pub fn documents(&self) -> impl Iterator<Item = String> + '_ {
        self.documents.iter().map(|doc| doc.iter().collect())
    }

    pub fn document_count(&self) -> usize {
        self.documents.len()
    }
}

impl CorpusStrategy for ChnCorpus {
    fn load(source: CorpusSource, rng: &mut dyn RngCore) -> CorpusResult<Self> {
        let total = source.files.len();
        let mut documents = Vec::new();
        for (idx, path) in source.files.iter().enumerate() {
            debug!(file = idx + 1, total, path = %path.display(), "loading chn corpus");
            let lines = read_clean_lines(path)?;
            let separator = pick(&SEPARATORS, rng).copied().unwrap_or(' ').to_string();
            let joined = lines.join(separator.as_str());

            let filtered: Vec<char> = joined
                .chars()
                .filter(|ch| source.charset.contains(*ch))
                .collect();
            if filtered.len() > source.length {
                documents.push(filtered);
            } else {
                debug!(
                    path = %path.display(),
                    chars = filtered.len(),
                    length = source.length,
                    "chn document too short, discarded"
                );
            }
        }

        if documents.is_empty() {
            warn!(
                files = total,
                length = source.length,
                "no chn document is long enough"
            );
            return Err(CorpusError::InsufficientCorpus {
                source_name: "chn corpus".to_string(),
                required: source.length,
                available: 0,
            });
        }

        info!(
            files = total,
            documents = documents.len(),
            "chn corpus loaded"
        );
        Ok(Self { source, documents })
    }

    fn source(&self) -> &CorpusSource {
        &self.source
    }

    fn get_sample(&self, rng: &mut dyn RngCore) -> CorpusResult<String> {
        let Some(document) = pick(&self.documents, rng) else {
            return Err(CorpusError::InsufficientCorpus {
                source_name: "chn corpus".to_string(),
                required: self.source.length,
                available: 0,
            });
        };
        Ok(window(document, self.source.length, rng))
    }
}
