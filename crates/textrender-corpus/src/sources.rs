use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

use crate::errors::{CorpusError, CorpusResult};

/// Extension of the corpus documents picked up by the recursive scan.
pub const CORPUS_EXTENSION: &str = "txt";

const NOISE: &[&str] = &["\u{3000}", "&nbsp", "\u{0}"];

/// Recursively collects `*.txt` files under `root`, sorted by path.
///
/// Dot-prefixed files and directories below the root are skipped.
pub fn discover_text_files(root: &Path) -> CorpusResult<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_hidden(entry))
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(err) => {
                warn!(
                    root = %root.display(),
                    error = %err,
                    "skipping unreadable corpus entry"
                );
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| {
            path.extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| ext == CORPUS_EXTENSION)
        })
        .collect();
    files.sort();

    if files.is_empty() {
        return Err(CorpusError::CorpusNotFound(root.to_path_buf()));
    }

    debug!(root = %root.display(), files = files.len(), "corpus files discovered");
    Ok(files)
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.file_name().to_str().is_some_and(|name| name.starts_with('.'))
}

/// Reads a UTF-8 file as lines, without line terminators.
pub fn read_lines(path: &Path) -> CorpusResult<Vec<String>> {
    let contents = fs::read_to_string(path)?;
    Ok(contents.lines().map(str::to_string).collect())
}

/// Cleans one raw line of free text.
///
/// Returns `None` when nothing usable remains, or when the trimmed raw line
/// is a single character.
pub fn clean_line(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    let mut cleaned = trimmed.to_string();
    for noise in NOISE {
        if cleaned.contains(noise) {
            cleaned = cleaned.replace(noise, "");
        }
    }

    if cleaned.is_empty() || trimmed.chars().count() <= 1 {
        return None;
    }
    Some(cleaned)
}

/// Reads a document and keeps its cleaned lines in order.
pub fn read_clean_lines(path: &Path) -> CorpusResult<Vec<String>> {
    let contents = fs::read_to_string(path)?;
    Ok(contents.lines().filter_map(clean_line).collect())
}
