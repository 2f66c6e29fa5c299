use serde::Serialize;

use crate::corpus::Corpus;

/// One report row. Field order is the column order of the exported table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TermRecord {
    pub term: Option<String>,
    pub tf: u64,
    pub tf_weighted: f64,
    pub df: usize,
    pub idf: f64,
    pub tf_idf: f64,
    pub probability: f64,
}

impl TermRecord {
    pub const COLUMNS: [&'static str; 7] = ["term", "tf", "tf_weighted", "df", "idf", "tf_idf", "probability"];

    /// The header-row record: no term, every number zero.
    pub fn header() -> Self {
        Self { term: None, tf: 0, tf_weighted: 0.0, df: 0, idf: 0.0, tf_idf: 0.0, probability: 0.0 }
    }
}

/// Read-only term statistics over a normalized corpus.
pub struct Statistics<'a> {
    corpus: &'a Corpus,
}

impl<'a> Statistics<'a> {
    pub fn new(corpus: &'a Corpus) -> Self { Self { corpus } }

    pub fn total_documents(&self) -> usize { self.corpus.document_count() }

    /// Raw corpus-wide count.
    pub fn term_frequency(&self, term: &str) -> u64 { self.corpus.vocabulary().get(term) }

    /// Documents containing the term. Scans every document.
    pub fn document_frequency(&self, term: &str) -> usize {
        self.corpus.documents().containing(term)
    }

    /// `ln(N / df)`; 0 for a term with no count, and 0 when `df` is 0.
    pub fn inverse_document_frequency(&self, term: &str, df: usize) -> f64 {
        if self.term_frequency(term) == 0 {
            return 0.0;
        }
        if df == 0 {
            tracing::warn!(term, "term is in the vocabulary but in no document");
            return 0.0;
        }
        (self.total_documents() as f64 / df as f64).ln()
    }

    /// `1 + ln(tf)`, or 0 when tf is 0.
    pub fn weighted_tf(tf: u64) -> f64 {
        if tf > 0 { 1.0 + (tf as f64).ln() } else { 0.0 }
    }

    /// Sum of all vocabulary counts, recomputed on every call.
    pub fn token_count(&self) -> u64 { self.corpus.vocabulary().total() }

    pub fn probability(&self, term: &str) -> f64 {
        probability(self.term_frequency(term), self.token_count())
    }

    /// Full record for `term`; `None` gives [`TermRecord::header`].
    pub fn term_record(&self, term: Option<&str>) -> TermRecord {
        match term {
            Some(t) => self.record_with_total(t, self.token_count()),
            None => TermRecord::header(),
        }
    }

    fn record_with_total(&self, term: &str, total: u64) -> TermRecord {
        let tf = self.term_frequency(term);
        let df = self.document_frequency(term);
        let idf = self.inverse_document_frequency(term, df);
        TermRecord {
            term: Some(term.to_string()),
            tf,
            tf_weighted: Self::weighted_tf(tf),
            df,
            idf,
            tf_idf: tf as f64 * idf,
            probability: probability(tf, total),
        }
    }

    /// Every term by count descending. Ties follow the vocabulary's lexicographic order.
    pub fn sorted_terms(&self) -> Vec<(&'a str, u64)> {
        self.corpus.vocabulary().sorted_by_count()
    }

    /// Records for the `n` most frequent terms.
    pub fn top_terms(&self, n: usize) -> Vec<TermRecord> {
        let total = self.token_count();
        self.sorted_terms()
            .into_iter()
            .take(n)
            .map(|(term, _)| self.record_with_total(term, total))
            .collect()
    }
}

fn probability(tf: u64, total: u64) -> f64 {
    if total == 0 { 0.0 } else { tf as f64 / total as f64 }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus() -> Corpus {
        let mut c = Corpus::new();
        c.add_text("1", "star star moon").unwrap();
        c.add_text("2", "star sun").unwrap();
        c
    }

    #[test]
    fn frequencies_and_weights() {
        let c = corpus();
        let s = Statistics::new(&c);
        assert_eq!(s.term_frequency("star"), 3);
        assert_eq!(s.document_frequency("star"), 2);
        assert_eq!(s.document_frequency("moon"), 1);
        assert_eq!(s.inverse_document_frequency("star", 2), 0.0);
        assert!((s.inverse_document_frequency("moon", 1) - 2f64.ln()).abs() < 1e-12);
        assert!((Statistics::weighted_tf(3) - (1.0 + 3f64.ln())).abs() < 1e-12);
        assert_eq!(Statistics::weighted_tf(0), 0.0);
        assert_eq!(s.token_count(), 5);
        assert!((s.probability("star") - 0.6).abs() < 1e-12);
    }

    #[test]
    fn unknown_term_and_zero_df_are_zero() {
        let c = corpus();
        let s = Statistics::new(&c);
        assert_eq!(s.inverse_document_frequency("comet", 1), 0.0);
        assert_eq!(s.inverse_document_frequency("star", 0), 0.0);
        let r = s.term_record(Some("comet"));
        assert_eq!(r.tf, 0);
        assert_eq!(r.tf_weighted, 0.0);
        assert_eq!(r.idf, 0.0);
        assert_eq!(r.probability, 0.0);
    }

    #[test]
    fn header_record_is_all_zero() {
        let c = corpus();
        let s = Statistics::new(&c);
        assert_eq!(s.term_record(None), TermRecord::header());
        assert!(TermRecord::header().term.is_none());
    }

    #[test]
    fn empty_corpus_degrades_to_zero() {
        let c = Corpus::new();
        let s = Statistics::new(&c);
        assert_eq!(s.token_count(), 0);
        assert_eq!(s.probability("star"), 0.0);
        assert!(s.sorted_terms().is_empty());
        assert!(s.top_terms(30).is_empty());
    }

    #[test]
    fn moon_record() {
        let c = corpus();
        let r = Statistics::new(&c).term_record(Some("moon"));
        assert_eq!(r.term.as_deref(), Some("moon"));
        assert_eq!(r.tf, 1);
        assert_eq!(r.df, 1);
        assert!((r.tf_idf - 2f64.ln()).abs() < 1e-12);
        assert!((r.probability - 0.2).abs() < 1e-12);
    }
}
