use std::collections::BTreeMap;

/// Stable identifier of a loaded document, usually its source path.
pub type DocId = String;

/// Token counts keyed by normalized token.
///
/// Iteration is lexicographic, so anything sorted by count breaks ties by token.
/// Used both for the global vocabulary and for each document's presence map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TermMap {
    counts: BTreeMap<String, u64>,
}

/// Global token → occurrence count across the whole corpus.
pub type Vocabulary = TermMap;

impl TermMap {
    pub fn new() -> Self { Self::default() }

    /// Add `count` to the token's entry, creating it if absent.
    pub fn add(&mut self, token: &str, count: u64) {
        match self.counts.get_mut(token) {
            Some(c) => *c += count,
            None => {
                self.counts.insert(token.to_string(), count);
            }
        }
    }

    /// Record the token as present without increasing an existing entry.
    pub fn mark_present(&mut self, token: &str) {
        if !self.counts.contains_key(token) {
            self.counts.insert(token.to_string(), 1);
        }
    }

    /// Count for the token, 0 when absent.
    pub fn get(&self, token: &str) -> u64 {
        self.counts.get(token).copied().unwrap_or(0)
    }

    pub fn contains(&self, token: &str) -> bool { self.counts.contains_key(token) }

    pub fn remove(&mut self, token: &str) -> Option<u64> { self.counts.remove(token) }

    /// Owned copy of the current keys, for passes that mutate the map while walking it.
    pub fn snapshot_keys(&self) -> Vec<String> {
        self.counts.keys().cloned().collect()
    }

    pub fn len(&self) -> usize { self.counts.len() }

    pub fn is_empty(&self) -> bool { self.counts.is_empty() }

    /// Sum of all counts.
    pub fn total(&self) -> u64 { self.counts.values().sum() }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.counts.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// All entries by count descending; equal counts keep lexicographic order.
    pub fn sorted_by_count(&self) -> Vec<(&str, u64)> {
        let mut entries: Vec<(&str, u64)> = self.iter().collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries
    }
}

impl<S: AsRef<str>> FromIterator<(S, u64)> for TermMap {
    fn from_iter<I: IntoIterator<Item = (S, u64)>>(iter: I) -> Self {
        let mut map = TermMap::new();
        for (token, count) in iter {
            map.add(token.as_ref(), count);
        }
        map
    }
}
