//! In-memory collection of student scores.

use std::collections::HashMap;

/// Mapping of student name to score that remembers insertion order.
///
/// Re-inserting an existing name overwrites the score but keeps the entry
/// where it was first inserted. Statistics never depend on the order; the
/// results table and extremum tie-breaks do.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoreStore {
    entries: Vec<(String, f64)>,
    index: HashMap<String, usize>,
}

impl ScoreStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or updates a score, returning the previous value if any.
    pub fn insert(&mut self, name: impl Into<String>, score: f64) -> Option<f64> {
        let name = name.into();
        match self.index.get(&name) {
            Some(&pos) => Some(std::mem::replace(&mut self.entries[pos].1, score)),
            None => {
                self.index.insert(name.clone(), self.entries.len());
                self.entries.push((name, score));
                None
            }
        }
    }

    /// Merges every entry of `other` into this store, in `other`'s order.
    pub fn merge(&mut self, other: ScoreStore) {
        for (name, score) in other.entries {
            self.insert(name, score);
        }
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.index.get(name).map(|&pos| self.entries[pos].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.index.clear();
    }

    /// Iterates over `(name, score)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(name, score)| (name.as_str(), *score))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn scores(&self) -> Vec<f64> {
        self.entries.iter().map(|(_, score)| *score).collect()
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for ScoreStore {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        let mut store = ScoreStore::new();
        store.extend(iter);
        store
    }
}

impl<S: Into<String>> Extend<(S, f64)> for ScoreStore {
    fn extend<I: IntoIterator<Item = (S, f64)>>(&mut self, iter: I) {
        for (name, score) in iter {
            self.insert(name, score);
        }
    }
}
