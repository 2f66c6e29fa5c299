use anyhow::{bail, Context, Result};
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Lowercased stopwords, fixed for the duration of a run.
#[derive(Debug, Clone, Default)]
pub struct StopwordSet {
    words: HashSet<String>,
}

impl StopwordSet {
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    /// Parse one word per line; blank lines are ignored.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut words = HashSet::new();
        for line in reader.lines() {
            let word = line?.trim().to_lowercase();
            if word.is_empty() { continue; }
            words.insert(word);
        }
        Ok(Self { words })
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let f = File::open(path).with_context(|| format!("opening stopwords file {}", path.display()))?;
        let set = Self::from_reader(BufReader::new(f))
            .with_context(|| format!("reading stopwords file {}", path.display()))?;
        tracing::info!(count = set.len(), path = %path.display(), "loaded stopwords");
        Ok(set)
    }

    /// Load from `primary`, or from `fallback` when `primary` does not exist.
    ///
    /// Neither file existing is a configuration error.
    pub fn load_with_fallback<P: AsRef<Path>, F: AsRef<Path>>(primary: P, fallback: F) -> Result<(Self, PathBuf)> {
        let primary = primary.as_ref();
        let fallback = fallback.as_ref();
        if primary.is_file() {
            return Ok((Self::load(primary)?, primary.to_path_buf()));
        }
        if fallback.is_file() {
            tracing::warn!(missing = %primary.display(), using = %fallback.display(), "stopwords file not found, using fallback");
            return Ok((Self::load(fallback)?, fallback.to_path_buf()));
        }
        bail!(
            "stopwords file {} does not exist (also tried {})",
            primary.display(),
            fallback.display()
        )
    }

    /// Case-insensitive membership test.
    pub fn contains(&self, word: &str) -> bool {
        if self.words.contains(word) {
            return true;
        }
        let lower = word.to_lowercase();
        lower != word && self.words.contains(&lower)
    }

    pub fn len(&self) -> usize { self.words.len() }

    pub fn is_empty(&self) -> bool { self.words.is_empty() }
}
