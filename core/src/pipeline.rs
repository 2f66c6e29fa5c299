use anyhow::Result;
use tracing::Span;

use crate::config::PipelineConfig;
use crate::corpus::{Corpus, CorpusLoader};
use crate::normalizer::Normalizer;
use crate::report::ReportWriter;
use crate::stats::Statistics;
use crate::stemmer::Stem;
use crate::stopwords::StopwordSet;

/// One batch run: load stopwords, load the corpus, normalize, export.
///
/// Everything logged during the run is recorded under the pipeline's span.
pub struct Pipeline {
    config: PipelineConfig,
    span: Span,
}

impl Pipeline {
    pub fn new(config: PipelineConfig) -> Self {
        let span = tracing::info_span!("pipeline", corpus = %config.corpus_root.display());
        Self { config, span }
    }

    /// Build the normalized corpus. A missing stopwords file is fatal; an empty corpus is not.
    pub fn run<S: Stem + ?Sized>(&self, stemmer: &S) -> Result<Corpus> {
        let _guard = self.span.enter();
        let (stopwords, _) = StopwordSet::load_with_fallback(&self.config.stopwords_file, &self.config.stopwords_fallback)?;

        let root = CorpusLoader::resolve_root(&self.config.corpus_root, &self.config.corpus_fallback);
        let mut corpus = Corpus::new();
        CorpusLoader::new(&self.config.extension).load_dir(&mut corpus, &root)?;

        Normalizer::new(&stopwords, stemmer).normalize_corpus(&mut corpus);
        Ok(corpus)
    }

    /// Write the term report and, if configured, the vocabulary dump.
    pub fn export(&self, corpus: &Corpus) -> Result<usize> {
        let _guard = self.span.enter();
        let writer = ReportWriter::new(self.config.top_n);
        let rows = writer.write_stats_file(&Statistics::new(corpus), &self.config.report_path)?;
        if let Some(path) = &self.config.vocabulary_path {
            writer.write_vocabulary_file(corpus.vocabulary(), path)?;
        }
        Ok(rows)
    }
}
