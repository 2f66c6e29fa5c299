pub mod config;
pub mod corpus;
pub mod normalizer;
pub mod pipeline;
pub mod report;
pub mod stats;
pub mod stemmer;
pub mod stopwords;
pub mod tokenizer;
pub mod vocabulary;

pub use config::PipelineConfig;
pub use corpus::{Corpus, CorpusLoader, DocumentIndex};
pub use normalizer::{NormalizeReport, Normalizer};
pub use pipeline::Pipeline;
pub use report::{ReportWriter, DEFAULT_TOP_N};
pub use stats::{Statistics, TermRecord};
pub use stemmer::{IdentityStemmer, MappedStemmer, SnowballStemmer, Stem};
pub use stopwords::StopwordSet;
pub use vocabulary::{DocId, TermMap, Vocabulary};
