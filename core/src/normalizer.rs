//! Folds raw tokens into a canonical vocabulary.
//!
//! Three passes run in order, each seeing only what the previous one left:
//! stopword removal, punctuation folding, stem folding. The same passes are
//! applied to the global vocabulary and, independently, to each document's
//! presence map so document frequencies line up with vocabulary terms.

use crate::corpus::Corpus;
use crate::stemmer::Stem;
use crate::stopwords::StopwordSet;
use crate::tokenizer::{has_non_word, strip_non_word};
use crate::vocabulary::TermMap;

/// What a normalization run did to one map.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NormalizeReport {
    pub stopwords_removed: usize,
    pub stopword_mass: u64,
    pub punctuation_folded: usize,
    pub punctuation_dropped: usize,
    pub punctuation_mass: u64,
    pub stems_merged: usize,
    pub stem_mass: u64,
}

impl NormalizeReport {
    /// Count mass discarded by stopword and empty/stopword punctuation drops.
    pub fn dropped_mass(&self) -> u64 { self.stopword_mass + self.punctuation_mass }

    fn absorb(&mut self, other: NormalizeReport) {
        self.stopwords_removed += other.stopwords_removed;
        self.stopword_mass += other.stopword_mass;
        self.punctuation_folded += other.punctuation_folded;
        self.punctuation_dropped += other.punctuation_dropped;
        self.punctuation_mass += other.punctuation_mass;
        self.stems_merged += other.stems_merged;
        self.stem_mass += other.stem_mass;
    }
}

pub struct Normalizer<'a, S: Stem + ?Sized> {
    stopwords: &'a StopwordSet,
    stemmer: &'a S,
}

impl<'a, S: Stem + ?Sized> Normalizer<'a, S> {
    pub fn new(stopwords: &'a StopwordSet, stemmer: &'a S) -> Self {
        Self { stopwords, stemmer }
    }

    /// Stopword removal and punctuation folding in one walk over a key snapshot.
    ///
    /// A punctuated token's count moves to its cleaned form; when the cleaned
    /// form is empty or a stopword the count is discarded.
    pub fn fold_surface_forms(&self, terms: &mut TermMap) -> NormalizeReport {
        let mut report = NormalizeReport::default();
        for token in terms.snapshot_keys() {
            if self.stopwords.contains(&token) {
                if let Some(count) = terms.remove(&token) {
                    report.stopwords_removed += 1;
                    report.stopword_mass += count;
                }
                continue;
            }

            if !has_non_word(&token) { continue; }
            let Some(count) = terms.remove(&token) else { continue };
            let cleaned = strip_non_word(&token);
            if !cleaned.is_empty() && !self.stopwords.contains(&cleaned) {
                terms.add(&cleaned, count);
                report.punctuation_folded += 1;
            } else {
                report.punctuation_dropped += 1;
                report.punctuation_mass += count;
            }
        }
        report
    }

    /// Add each token's count to its stem's entry. Tokens keep their own entries.
    ///
    /// Stems are accumulated on the side and merged after the walk, so a stem
    /// produced here is never itself re-stemmed in the same run.
    pub fn fold_stems(&self, terms: &mut TermMap) -> NormalizeReport {
        let mut report = NormalizeReport::default();
        let mut stemmed = TermMap::new();
        for (token, count) in terms.iter() {
            let stem = self.stemmer.stem(token);
            if stem != token && !self.stopwords.contains(&stem) {
                stemmed.add(&stem, count);
                report.stems_merged += 1;
                report.stem_mass += count;
            }
        }
        for (stem, count) in stemmed.iter() {
            terms.add(stem, count);
        }
        report
    }

    pub fn normalize(&self, terms: &mut TermMap) -> NormalizeReport {
        let mut report = self.fold_surface_forms(terms);
        report.absorb(self.fold_stems(terms));
        report
    }

    /// Normalize the vocabulary and every document. Returns the vocabulary's report.
    pub fn normalize_corpus(&self, corpus: &mut Corpus) -> NormalizeReport {
        tracing::info!(terms = corpus.vocabulary.len(), tokens = corpus.vocabulary.total(), "word tokens before filtering");
        let report = self.normalize(&mut corpus.vocabulary);
        for (id, terms) in corpus.documents.iter_mut() {
            let doc_report = self.normalize(terms);
            tracing::debug!(document = id, terms = terms.len(), stems = doc_report.stems_merged, "normalized document");
        }
        tracing::info!(
            terms = corpus.vocabulary.len(),
            tokens = corpus.vocabulary.total(),
            stopwords = report.stopwords_removed,
            folded = report.punctuation_folded,
            dropped = report.punctuation_dropped,
            stems = report.stems_merged,
            "word tokens after filtering"
        );
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stemmer::{IdentityStemmer, MappedStemmer};

    fn map(entries: &[(&str, u64)]) -> TermMap {
        entries.iter().map(|(k, v)| (*k, *v)).collect()
    }

    #[test]
    fn stopwords_are_removed_outright() {
        let stop = StopwordSet::from_words(["the", "a"]);
        let n = Normalizer::new(&stop, &IdentityStemmer);
        let mut terms = map(&[("the", 4), ("a", 1), ("star", 2)]);
        let report = n.normalize(&mut terms);
        assert_eq!(terms, map(&[("star", 2)]));
        assert_eq!(report.stopwords_removed, 2);
        assert_eq!(report.stopword_mass, 5);
    }

    #[test]
    fn punctuation_folds_into_cleaned_token() {
        let stop = StopwordSet::default();
        let n = Normalizer::new(&stop, &IdentityStemmer);
        let mut terms = map(&[("star,", 1), ("star.", 2), ("star", 1)]);
        n.normalize(&mut terms);
        assert_eq!(terms, map(&[("star", 4)]));
    }

    #[test]
    fn cleaned_stopword_and_empty_tokens_are_dropped() {
        let stop = StopwordSet::from_words(["the"]);
        let n = Normalizer::new(&stop, &IdentityStemmer);
        let mut terms = map(&[("the,", 3), ("--", 1), ("sky.", 1)]);
        let report = n.fold_surface_forms(&mut terms);
        assert_eq!(terms, map(&[("sky", 1)]));
        assert_eq!(report.punctuation_dropped, 2);
        assert_eq!(report.punctuation_mass, 4);
        assert_eq!(report.punctuation_folded, 1);
    }

    #[test]
    fn stems_absorb_variants_and_originals_stay() {
        let stop = StopwordSet::default();
        let stemmer = MappedStemmer::new([("running", "run"), ("runs", "run")]);
        let n = Normalizer::new(&stop, &stemmer);
        let mut terms = map(&[("running", 2), ("runs", 1), ("run", 1)]);
        let report = n.fold_stems(&mut terms);
        assert_eq!(terms, map(&[("running", 2), ("runs", 1), ("run", 4)]));
        assert_eq!(report.stem_mass, 3);
    }

    #[test]
    fn stems_that_are_stopwords_are_not_merged() {
        let stop = StopwordSet::from_words(["be"]);
        let stemmer = MappedStemmer::new([("being", "be")]);
        let n = Normalizer::new(&stop, &stemmer);
        let mut terms = map(&[("being", 2)]);
        n.fold_stems(&mut terms);
        assert_eq!(terms, map(&[("being", 2)]));
    }

    #[test]
    fn stems_see_folded_punctuation() {
        let stop = StopwordSet::default();
        let stemmer = MappedStemmer::new([("stars", "star")]);
        let n = Normalizer::new(&stop, &stemmer);
        let mut terms = map(&[("stars,", 2)]);
        n.normalize(&mut terms);
        assert_eq!(terms, map(&[("stars", 2), ("star", 2)]));
    }
}
