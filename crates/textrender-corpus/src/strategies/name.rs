use std::path::Path;

use rand::{Rng, RngCore};
use tracing::info;

use super::{CorpusSource, CorpusStrategy, pick};
use crate::errors::{CorpusError, CorpusResult};
use crate::sources::read_lines;

pub const FAMILY_COMMON_FILE: &str = "family_common400.txt";
pub const FAMILY_RARE_FILE: &str = "family_rare629.txt";
pub const GIVEN_COMMON_FILE: &str = "given_common3980.txt";
pub const GIVEN_RARE_FILE: &str = "given_rare2537.txt";

const RARE_PROBABILITY: f64 = 0.01;
const SINGLE_GIVEN_PROBABILITY: f64 = 0.3;

/// Full names assembled from common and rare family/given components.
#[derive(Debug, Clone)]
pub struct NameCorpus {
    source: CorpusSource,
    family_common: Vec<String>,
    family_rare: Vec<String>,
    given_common: Vec<String>,
    given_rare: Vec<String>,
}

impl NameCorpus {
    pub fn family_rare(&self) -> &[String] {
        &self.family_rare
    }

    pub fn family_common(&self) -> &[String] {
        &self.family_common
    }

    fn component<'a>(common: &'a [String], rare: &'a [String], rng: &mut dyn RngCore) -> &'a str {
        let list = if rng.random_bool(RARE_PROBABILITY) {
            rare
        } else {
            common
        };
        pick(list, rng).map(String::as_str).unwrap_or_default()
    }
}

impl CorpusStrategy for NameCorpus {
    fn load(source: CorpusSource, _rng: &mut dyn RngCore) -> CorpusResult<Self> {
        let dir = source.require_dir()?;
        let family_common = load_name_list(dir, FAMILY_COMMON_FILE)?;
        let family_rare = load_name_list(dir, FAMILY_RARE_FILE)?;
        let given_common = load_name_list(dir, GIVEN_COMMON_FILE)?;
        let given_rare = load_name_list(dir, GIVEN_RARE_FILE)?;

        info!(
            family_common = family_common.len(),
            family_rare = family_rare.len(),
            given_common = given_common.len(),
            given_rare = given_rare.len(),
            "name lists loaded"
        );
        Ok(Self {
            source,
            family_common,
            family_rare,
            given_common,
            given_rare,
        })
    }

    fn source(&self) -> &CorpusSource {
        &self.source
    }

    fn get_sample(&self, rng: &mut dyn RngCore) -> CorpusResult<String> {
        let mut name = Self::component(&self.family_common, &self.family_rare, rng).to_string();
        let given_parts = if rng.random_bool(SINGLE_GIVEN_PROBABILITY) {
            1
        } else {
            2
        };
        for _ in 0..given_parts {
            name.push_str(Self::component(&self.given_common, &self.given_rare, rng));
        }

        let mut chars = name.chars();
        if let (Some(first), Some(second), None) = (chars.next(), chars.next(), chars.next()) {
            return Ok(format!("{first}  {second}"));
        }
        Ok(name)
    }
}

fn load_name_list(dir: &Path, file: &str) -> CorpusResult<Vec<String>> {
    let path = dir.join(file);
    if !path.is_file() {
        return Err(CorpusError::NameListMissing(path));
    }
    let names: Vec<String> = read_lines(&path)?
        .into_iter()
        .map(|line| line.trim().to_string())
        .filter(|line| !line.is_empty())
        .collect();
    if names.is_empty() {
        return Err(CorpusError::NameListEmpty(path));
    }
    Ok(names)
}
