use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufRead, BufReader, Cursor};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::tokenizer::tokenize_line;
use crate::vocabulary::{DocId, TermMap, Vocabulary};

/// Per-document presence maps, keyed by document identifier.
#[derive(Debug, Clone, Default)]
pub struct DocumentIndex {
    docs: BTreeMap<DocId, TermMap>,
}

impl DocumentIndex {
    /// Presence map for `id`, created empty on first use.
    pub fn entry(&mut self, id: &str) -> &mut TermMap {
        self.docs.entry(id.to_string()).or_default()
    }

    pub fn get(&self, id: &str) -> Option<&TermMap> { self.docs.get(id) }

    pub fn len(&self) -> usize { self.docs.len() }

    pub fn is_empty(&self) -> bool { self.docs.is_empty() }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &TermMap)> + '_ {
        self.docs.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = (&str, &mut TermMap)> + '_ {
        self.docs.iter_mut().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of documents whose presence map holds `term`.
    pub fn containing(&self, term: &str) -> usize {
        self.docs.values().filter(|terms| terms.contains(term)).count()
    }
}

/// Global vocabulary plus the per-document index it was built from.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    pub(crate) vocabulary: Vocabulary,
    pub(crate) documents: DocumentIndex,
}

impl Corpus {
    pub fn new() -> Self { Self::default() }

    pub fn vocabulary(&self) -> &Vocabulary { &self.vocabulary }

    pub fn documents(&self) -> &DocumentIndex { &self.documents }

    pub fn document_count(&self) -> usize { self.documents.len() }

    /// Read a document line by line, marking each token present in it and counting it globally.
    ///
    /// Adding an existing id extends that document.
    pub fn add_document<R: BufRead>(&mut self, id: &str, reader: R) -> Result<()> {
        let presence = self.documents.entry(id);
        for line in reader.lines() {
            let line = line?;
            for token in tokenize_line(&line) {
                self.vocabulary.add(&token, 1);
                presence.mark_present(&token);
            }
        }
        Ok(())
    }

    pub fn add_text(&mut self, id: &str, text: &str) -> Result<()> {
        self.add_document(id, Cursor::new(text))
    }
}

/// Discovers text documents under a directory and feeds them into a [`Corpus`].
#[derive(Debug, Clone)]
pub struct CorpusLoader {
    extension: String,
}

impl Default for CorpusLoader {
    fn default() -> Self { Self::new("txt") }
}

impl CorpusLoader {
    pub fn new(extension: &str) -> Self {
        Self { extension: extension.trim_start_matches('.').to_string() }
    }

    /// `primary` if it is a directory, else `fallback` if that is one, else `primary`.
    pub fn resolve_root<P: AsRef<Path>, F: AsRef<Path>>(primary: P, fallback: F) -> PathBuf {
        let primary = primary.as_ref();
        let fallback = fallback.as_ref();
        if !primary.is_dir() && fallback.is_dir() {
            tracing::warn!(missing = %primary.display(), using = %fallback.display(), "corpus directory not found, using fallback");
            return fallback.to_path_buf();
        }
        primary.to_path_buf()
    }

    fn matches(&self, path: &Path) -> bool {
        path.extension().and_then(|s| s.to_str()) == Some(self.extension.as_str())
    }

    /// Load every matching file below `root`. Returns the number of documents loaded.
    ///
    /// Finding nothing is only a warning; the corpus is left as it was.
    pub fn load_dir<P: AsRef<Path>>(&self, corpus: &mut Corpus, root: P) -> Result<usize> {
        let root = root.as_ref();
        let mut files: Vec<PathBuf> = Vec::new();
        for entry in WalkDir::new(root).sort_by_file_name() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    tracing::warn!(root = %root.display(), error = %err, "skipping unreadable path");
                    continue;
                }
            };
            let p = entry.path();
            if p.is_file() && self.matches(p) {
                files.push(p.to_path_buf());
            }
        }

        for file in &files {
            self.load_file(corpus, file)?;
        }

        if files.is_empty() {
            tracing::warn!(root = %root.display(), extension = %self.extension, "no documents found");
        } else {
            tracing::info!(loaded = files.len(), root = %root.display(), "loaded documents");
        }
        Ok(files.len())
    }

    pub fn load_file<P: AsRef<Path>>(&self, corpus: &mut Corpus, path: P) -> Result<()> {
        let path = path.as_ref();
        let f = File::open(path).with_context(|| format!("opening document {}", path.display()))?;
        let id = path.display().to_string();
        corpus
            .add_document(&id, BufReader::new(f))
            .with_context(|| format!("reading document {}", path.display()))?;
        tracing::debug!(document = %id, "loaded document");
        Ok(())
    }
}
