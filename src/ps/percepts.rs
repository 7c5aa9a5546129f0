//! Append-only table mapping percept keys to dense row indices

use std::collections::HashMap;

/// Insertion-ordered percept table.
///
/// Keys receive indices `0, 1, 2, ...` in the order they are first seen. An
/// assigned index never changes and is never reused.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PerceptTable {
    indices: HashMap<String, usize>,
    /// Keys by index
    keys: Vec<String>,
}

impl PerceptTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of percepts seen so far
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Index assigned to `key`, if it has been seen
    pub fn index_of(&self, key: &str) -> Option<usize> {
        self.indices.get(key).copied()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.indices.contains_key(key)
    }

    /// Key stored at `index`
    pub fn key(&self, index: usize) -> Option<&str> {
        self.keys.get(index).map(String::as_str)
    }

    /// Index of `key`, assigning the next free index if it is new.
    ///
    /// Returns the index and whether the key was inserted by this call.
    pub fn insert(&mut self, key: String) -> (usize, bool) {
        if let Some(index) = self.index_of(&key) {
            return (index, false);
        }
        let index = self.keys.len();
        self.indices.insert(key.clone(), index);
        self.keys.push(key);
        (index, true)
    }

    /// `(index, key)` pairs in index order
    pub fn iter(&self) -> impl Iterator<Item = (usize, &str)> + '_ {
        self.keys.iter().map(String::as_str).enumerate()
    }
}
