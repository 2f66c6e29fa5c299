use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};
use wordstats_core::config::{
    DEFAULT_CORPUS_ROOT, DEFAULT_EXTENSION, DEFAULT_REPORT_PATH, DEFAULT_STOPWORDS_FILE, FALLBACK_CORPUS_ROOT,
    FALLBACK_STOPWORDS_FILE,
};
use wordstats_core::{IdentityStemmer, Pipeline, PipelineConfig, SnowballStemmer, Statistics, DEFAULT_TOP_N};

#[derive(Parser, Debug)]
#[command(name = "wordstats")]
#[command(about = "Build a normalized vocabulary from a text corpus and report TF-IDF statistics", long_about = None)]
struct Cli {
    /// Stopwords file, one word per line
    #[arg(long, env = "STOPWORDS_FILE", default_value = DEFAULT_STOPWORDS_FILE)]
    stopwords: PathBuf,
    /// Stopwords file tried when the first one is missing
    #[arg(long, default_value = FALLBACK_STOPWORDS_FILE)]
    stopwords_fallback: PathBuf,
    /// Root directory of the documents
    #[arg(long, env = "TRANSCRIPT_LOCATION", default_value = DEFAULT_CORPUS_ROOT)]
    corpus: PathBuf,
    /// Corpus directory tried when the first one is missing
    #[arg(long, default_value = FALLBACK_CORPUS_ROOT)]
    corpus_fallback: PathBuf,
    /// Extension of document files
    #[arg(long, default_value = DEFAULT_EXTENSION)]
    extension: String,
    /// Number of terms in the report
    #[arg(long, env = "WORDSTATS_TOP_N", default_value_t = DEFAULT_TOP_N)]
    top: usize,
    /// Report output path
    #[arg(long, env = "WORDSTATS_REPORT", default_value = DEFAULT_REPORT_PATH)]
    report: PathBuf,
    /// Also dump every term with its count to this path
    #[arg(long, env = "WORDSTATS_VOCABULARY")]
    vocabulary: Option<PathBuf>,
    /// Skip the stemming fold
    #[arg(long, default_value_t = false)]
    no_stem: bool,
    /// Log at debug level unless RUST_LOG says otherwise. Setting DEBUG to any value does the same.
    #[arg(long)]
    debug: bool,
}

impl Cli {
    fn debug_enabled(&self) -> bool {
        self.debug || std::env::var_os("DEBUG").is_some()
    }

    fn pipeline_config(&self) -> PipelineConfig {
        PipelineConfig {
            stopwords_file: self.stopwords.clone(),
            stopwords_fallback: self.stopwords_fallback.clone(),
            corpus_root: self.corpus.clone(),
            corpus_fallback: self.corpus_fallback.clone(),
            extension: self.extension.clone(),
            top_n: self.top,
            report_path: self.report.clone(),
            vocabulary_path: self.vocabulary.clone(),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let level = if cli.debug_enabled() { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    fmt().with_env_filter(filter).init();

    let pipeline = Pipeline::new(cli.pipeline_config());
    let corpus = if cli.no_stem {
        pipeline.run(&IdentityStemmer)?
    } else {
        pipeline.run(&SnowballStemmer::english())?
    };
    let rows = pipeline.export(&corpus)?;

    let stats = Statistics::new(&corpus);
    tracing::info!(
        documents = stats.total_documents(),
        terms = corpus.vocabulary().len(),
        tokens = stats.token_count(),
        rows,
        "done"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_map_onto_pipeline_config() {
        let cli = Cli::try_parse_from([
            "wordstats",
            "--stopwords",
            "stop.txt",
            "--corpus",
            "docs",
            "--top",
            "5",
            "--vocabulary",
            "words.csv",
        ])
        .unwrap();
        let config = cli.pipeline_config();
        assert_eq!(config.stopwords_file, PathBuf::from("stop.txt"));
        assert_eq!(config.corpus_root, PathBuf::from("docs"));
        assert_eq!(config.top_n, 5);
        assert_eq!(config.vocabulary_path, Some(PathBuf::from("words.csv")));
        assert_eq!(config.extension, DEFAULT_EXTENSION);
    }

    #[test]
    fn any_debug_value_enables_debug_logging() {
        for value in ["1", "yes", ""] {
            std::env::set_var("DEBUG", value);
            let cli = Cli::try_parse_from(["wordstats"]).unwrap();
            assert!(cli.debug_enabled(), "DEBUG={value:?}");
        }
        std::env::remove_var("DEBUG");
        assert!(Cli::try_parse_from(["wordstats", "--debug"]).unwrap().debug_enabled());
    }
}
