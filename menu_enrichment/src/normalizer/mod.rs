mod similarity;

use lazy_static::lazy_static;
use regex::Regex;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

pub use similarity::weighted_ratio;

/// Best scores must be strictly above this to count as a match.
pub const THRESHOLD: f64 = 80.0;

lazy_static! {
    static ref PARENTHESIZED: Regex =
        Regex::new(r"\([^)]*\)").expect("PARENTHESIZED regex to compile");
    static ref BRACKETED: Regex = Regex::new(r"\[.*?\]").expect("BRACKETED regex to compile");
}

#[derive(Debug, Error)]
pub enum NormalizerError {
    #[error("failed to open normalization dictionary {path}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to read line {line} of the normalization dictionary")]
    Read {
        line: usize,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed normalization dictionary record on line {line}")]
    Malformed {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Deserialize)]
struct DictionaryRecord {
    menu_name: String,
    canonical_name: String,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DictionaryMatch<'a> {
    pub menu_name: &'a str,
    pub canonical_name: &'a str,
    pub score: f64,
}

pub fn passes_threshold(score: f64) -> bool {
    score > THRESHOLD
}

/// Removes `(..)` and then `[..]` annotations. Neither pass understands
/// nesting, so `((대))` leaves a stray `)` behind.
fn strip_annotations(name: &str) -> String {
    let without_parentheses = PARENTHESIZED.replace_all(name, "");
    BRACKETED
        .replace_all(&without_parentheses, "")
        .trim()
        .to_string()
}

/// Maps raw menu names to canonical ones using a dictionary of historical
/// names. Entries keep the order of the dictionary file, which decides ties.
#[derive(Debug, Default)]
pub struct MenuNormalizer {
    entries: Vec<(String, String)>,
    positions: HashMap<String, usize>,
}

impl MenuNormalizer {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, NormalizerError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| NormalizerError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(BufReader::new(file))
    }

    /// Reads one JSON record per line. Blank lines are ignored, anything
    /// else that is not a record fails the whole load.
    pub fn from_reader(reader: impl BufRead) -> Result<Self, NormalizerError> {
        let mut normalizer = Self::default();
        for (index, line) in reader.lines().enumerate() {
            let line_number = index + 1;
            let line = line.map_err(|source| NormalizerError::Read {
                line: line_number,
                source,
            })?;
            if line.trim().is_empty() {
                continue;
            }
            let record: DictionaryRecord =
                serde_json::from_str(&line).map_err(|source| NormalizerError::Malformed {
                    line: line_number,
                    source,
                })?;
            normalizer.insert(record.menu_name, record.canonical_name);
        }
        Ok(normalizer)
    }

    /// A repeated name keeps its first position and takes the latest value.
    fn insert(&mut self, menu_name: String, canonical_name: String) {
        match self.positions.get(&menu_name) {
            Some(&position) => self.entries[position].1 = canonical_name,
            None => {
                self.positions.insert(menu_name.clone(), self.entries.len());
                self.entries.push((menu_name, canonical_name));
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Highest scoring dictionary entry for the cleaned name, the earliest
    /// one on ties. `None` only for an empty dictionary.
    pub fn best_match(&self, name: &str) -> Option<DictionaryMatch<'_>> {
        let cleaned = strip_annotations(name);

        if let Some(&position) = self.positions.get(cleaned.as_str()) {
            let (menu_name, canonical_name) = &self.entries[position];
            return Some(DictionaryMatch {
                menu_name,
                canonical_name,
                score: 100.0,
            });
        }

        self.entries
            .iter()
            .map(|(menu_name, canonical_name)| DictionaryMatch {
                menu_name,
                canonical_name,
                score: weighted_ratio(&cleaned, menu_name),
            })
            .fold(None, |best, candidate| match best {
                Some(best) if best.score >= candidate.score => Some(best),
                _ => Some(candidate),
            })
    }

    pub fn normalize(&self, name: &str) -> Option<&str> {
        match self.best_match(name) {
            Some(found) if passes_threshold(found.score) => Some(found.canonical_name),
            Some(found) => {
                debug!(
                    menu_name = name,
                    closest = found.menu_name,
                    score = found.score,
                    "no canonical name"
                );
                None
            }
            None => None,
        }
    }
}
