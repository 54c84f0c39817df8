//! Hanzi → toned pinyin dictionary.
//!
//! The embedded asset is one entry per line: `<hex code point>=>syllable`.
//! Bad lines are dropped while parsing; the asset is trusted data, so there
//! is nothing useful to report to callers beyond a debug trace.


use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::Path;
use std::sync::OnceLock;

use tracing::{debug, debug_span};

pub const DEFAULT_DICT: &str = include_str!("default_pinyin.txt");

const SEPARATOR: &str = "=>";

static CUSTOM_SOURCE: OnceLock<String> = OnceLock::new();

#[derive(Debug, thiserror::Error)]
pub enum DictError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("dictionary source has no valid entries")]
    Empty,

    #[error("pinyin dictionary already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Default)]
pub struct PinyinDict {
    entries: HashMap<char, String>,
}

impl PinyinDict {
    /// Parse dictionary text, skipping lines without a `=>` separator or with
    /// a code point that is not valid hex or not a Unicode scalar value.
    pub fn parse(source: &str) -> Self {
        let _span = debug_span!("parse_dict", bytes = source.len()).entered();
        let mut entries = HashMap::new();
        let mut skipped = 0usize;
        for line in source.lines() {
            match parse_line(line) {
                Some((hanzi, syllable)) => {
                    entries.insert(hanzi, syllable.to_string());
                }
                None => skipped += 1,
            }
        }
        debug!(entries = entries.len(), skipped);
        Self { entries }
    }

    /// Read and parse a dictionary file.
    pub fn load(path: &Path) -> Result<Self, DictError> {
        let text = fs::read_to_string(path)?;
        Ok(Self::parse(&text))
    }

    /// Register a custom dictionary source before the first `global()` call.
    pub fn init_custom(source: String) -> Result<(), DictError> {
        // Validate eagerly
        if Self::parse(&source).is_empty() {
            return Err(DictError::Empty);
        }
        CUSTOM_SOURCE
            .set(source)
            .map_err(|_| DictError::AlreadyInitialized)
    }

    /// The dictionary source the process-wide engine is built from.
    pub fn global_source() -> &'static str {
        CUSTOM_SOURCE
            .get()
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_DICT)
    }

    pub fn get(&self, hanzi: char) -> Option<&str> {
        self.entries.get(&hanzi).map(|s| s.as_str())
    }

    pub fn contains(&self, hanzi: char) -> bool {
        self.entries.contains_key(&hanzi)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries sorted by code point.
    pub fn iter(&self) -> impl Iterator<Item = (char, &str)> {
        let mut sorted: Vec<(char, &str)> = self
            .entries
            .iter()
            .map(|(&c, s)| (c, s.as_str()))
            .collect();
        sorted.sort_unstable_by_key(|&(c, _)| c);
        sorted.into_iter()
    }
}

impl FromIterator<(char, String)> for PinyinDict {
    fn from_iter<I: IntoIterator<Item = (char, String)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

fn parse_line(line: &str) -> Option<(char, &str)> {
    let mut parts = line.split(SEPARATOR);
    let hex = parts.next()?;
    let syllable = parts.next()?;
    let code = u32::from_str_radix(hex, 16).ok()?;
    let hanzi = char::from_u32(code)?;
    Some((hanzi, syllable))
}
