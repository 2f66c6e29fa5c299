use std::path::PathBuf;

use crate::report::DEFAULT_TOP_N;

pub const DEFAULT_STOPWORDS_FILE: &str = "stopwords.txt";
pub const FALLBACK_STOPWORDS_FILE: &str = "data/stopwords.txt";
pub const DEFAULT_CORPUS_ROOT: &str = "proprietary/transcripts";
pub const FALLBACK_CORPUS_ROOT: &str = "data/transcripts";
pub const DEFAULT_EXTENSION: &str = "txt";
pub const DEFAULT_REPORT_PATH: &str = "report.csv";

/// Settings for one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    pub stopwords_file: PathBuf,
    pub stopwords_fallback: PathBuf,
    pub corpus_root: PathBuf,
    pub corpus_fallback: PathBuf,
    /// Document file extension, without the dot.
    pub extension: String,
    pub top_n: usize,
    pub report_path: PathBuf,
    /// Full `word,count` dump; skipped when unset.
    pub vocabulary_path: Option<PathBuf>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            stopwords_file: PathBuf::from(DEFAULT_STOPWORDS_FILE),
            stopwords_fallback: PathBuf::from(FALLBACK_STOPWORDS_FILE),
            corpus_root: PathBuf::from(DEFAULT_CORPUS_ROOT),
            corpus_fallback: PathBuf::from(FALLBACK_CORPUS_ROOT),
            extension: DEFAULT_EXTENSION.to_string(),
            top_n: DEFAULT_TOP_N,
            report_path: PathBuf::from(DEFAULT_REPORT_PATH),
            vocabulary_path: None,
        }
    }
}
