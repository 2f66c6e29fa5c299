use rust_stemmers::{Algorithm, Stemmer};
use std::collections::HashMap;

/// Maps a token to its canonical root.
pub trait Stem {
    fn stem(&self, token: &str) -> String;
}

/// English Snowball stemmer.
pub struct SnowballStemmer {
    inner: Stemmer,
}

impl SnowballStemmer {
    pub fn english() -> Self {
        Self { inner: Stemmer::create(Algorithm::English) }
    }
}

impl Default for SnowballStemmer {
    fn default() -> Self { Self::english() }
}

impl Stem for SnowballStemmer {
    fn stem(&self, token: &str) -> String {
        self.inner.stem(token).into_owned()
    }
}

/// Leaves every token unchanged, which turns the stem fold into a no-op.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityStemmer;

impl Stem for IdentityStemmer {
    fn stem(&self, token: &str) -> String { token.to_string() }
}

/// Fixed token → stem table; tokens not in the table stem to themselves.
#[derive(Debug, Clone, Default)]
pub struct MappedStemmer {
    table: HashMap<String, String>,
}

impl MappedStemmer {
    pub fn new<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self { table: pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect() }
    }
}

impl Stem for MappedStemmer {
    fn stem(&self, token: &str) -> String {
        self.table.get(token).cloned().unwrap_or_else(|| token.to_string())
    }
}

impl<F> Stem for F
where
    F: Fn(&str) -> String,
{
    fn stem(&self, token: &str) -> String { self(token) }
}
