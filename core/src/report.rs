use anyhow::{Context, Result};
use csv::WriterBuilder;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::stats::{Statistics, TermRecord};
use crate::vocabulary::Vocabulary;

pub const DEFAULT_TOP_N: usize = 30;

/// Writes term statistics and vocabulary dumps as CSV.
#[derive(Debug, Clone, Copy)]
pub struct ReportWriter {
    top_n: usize,
}

impl Default for ReportWriter {
    fn default() -> Self { Self::new(DEFAULT_TOP_N) }
}

impl ReportWriter {
    pub fn new(top_n: usize) -> Self { Self { top_n } }

    /// Header row, then one row per top-N term. Returns the number of data rows.
    pub fn write_stats<W: Write>(&self, stats: &Statistics<'_>, writer: W) -> Result<usize> {
        let mut wtr = WriterBuilder::new().has_headers(false).from_writer(writer);
        wtr.write_record(TermRecord::COLUMNS)?;
        let records = stats.top_terms(self.top_n);
        for record in &records {
            wtr.serialize(record)?;
        }
        wtr.flush()?;
        Ok(records.len())
    }

    /// Every term with its count, most frequent first.
    pub fn write_vocabulary<W: Write>(&self, vocabulary: &Vocabulary, writer: W) -> Result<usize> {
        let mut wtr = WriterBuilder::new().has_headers(false).from_writer(writer);
        wtr.write_record(["word", "count"])?;
        let entries = vocabulary.sorted_by_count();
        for (word, count) in &entries {
            wtr.serialize((word, count))?;
        }
        wtr.flush()?;
        Ok(entries.len())
    }

    pub fn write_stats_file<P: AsRef<Path>>(&self, stats: &Statistics<'_>, path: P) -> Result<usize> {
        let path = path.as_ref();
        let f = File::create(path).with_context(|| format!("creating report {}", path.display()))?;
        let rows = self.write_stats(stats, f).with_context(|| format!("writing report {}", path.display()))?;
        tracing::info!(rows, path = %path.display(), "wrote term report");
        Ok(rows)
    }

    pub fn write_vocabulary_file<P: AsRef<Path>>(&self, vocabulary: &Vocabulary, path: P) -> Result<usize> {
        let path = path.as_ref();
        let f = File::create(path).with_context(|| format!("creating vocabulary {}", path.display()))?;
        let rows = self
            .write_vocabulary(vocabulary, f)
            .with_context(|| format!("writing vocabulary {}", path.display()))?;
        tracing::info!(rows, path = %path.display(), "wrote vocabulary");
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::Corpus;

    #[test]
    fn header_record_keys_match_columns() {
        let mut buf = Vec::new();
        {
            let mut wtr = WriterBuilder::new().has_headers(true).from_writer(&mut buf);
            wtr.serialize(TermRecord::header()).unwrap();
            wtr.flush().unwrap();
        }
        let out = String::from_utf8(buf).unwrap();
        let header = out.lines().next().unwrap();
        assert_eq!(header, TermRecord::COLUMNS.join(","));
    }

    #[test]
    fn vocabulary_dump_is_sorted() {
        let mut c = Corpus::new();
        c.add_text("1", "b a b c b a").unwrap();
        let mut out = Vec::new();
        let rows = ReportWriter::default().write_vocabulary(c.vocabulary(), &mut out).unwrap();
        assert_eq!(rows, 3);
        assert_eq!(String::from_utf8(out).unwrap(), "word,count\nb,3\na,2\nc,1\n");
    }

    #[test]
    fn empty_corpus_still_writes_header() {
        let c = Corpus::new();
        let mut out = Vec::new();
        let rows = ReportWriter::default().write_stats(&Statistics::new(&c), &mut out).unwrap();
        assert_eq!(rows, 0);
        assert_eq!(String::from_utf8(out).unwrap(), "term,tf,tf_weighted,df,idf,tf_idf,probability\n");
    }
}
