//! Corpus sampling for synthetic OCR text images.
//!
//! A corpus strategy turns a character set plus raw text sources (free-text
//! documents, name lists, or nothing at all) into sample strings handed to
//! the renderer. Strategies load once and then sample independently per call
//! from a caller-provided random stream.

pub mod charset;
pub mod config;
pub mod errors;
pub mod pool;
pub mod registry;
pub mod sampler;
pub mod sources;
pub mod strategies;

pub use charset::CharacterSet;
pub use config::CorpusConfig;
pub use errors::{CorpusError, CorpusResult};
pub use pool::{SampleOutcome, generate_samples};
pub use registry::CorpusKind;
pub use sampler::Sampler;
pub use strategies::{Corpus, CorpusSource, CorpusStrategy};
