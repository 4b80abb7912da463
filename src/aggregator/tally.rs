//! Insertion-ordered count of distinct paths.
//!
//! A path key is the space-joined sequence of point tokens exactly as
//! they appeared in the log, so `"1 2"` and `"2 1"` are different paths.

use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A distinct path and how many times it was completed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathCount {
    /// Space-joined point tokens
    pub path: String,

    /// Number of completed records with this exact path
    pub count: u64,
}

/// Path tally, ordered by first observation
#[derive(Debug, Clone, Default)]
pub struct PathTally {
    entries: Vec<PathCount>,
    index: HashMap<String, usize>,
}

impl PathTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one completed record for `path`
    pub fn record(&mut self, path: String) {
        if let Some(&slot) = self.index.get(&path) {
            self.entries[slot].count += 1;
            return;
        }

        debug!("New path #{}: {:?}", self.entries.len() + 1, path);
        self.index.insert(path.clone(), self.entries.len());
        self.entries.push(PathCount { path, count: 1 });
    }

    /// Count for `path`, if it was ever recorded
    pub fn get(&self, path: &str) -> Option<u64> {
        self.index.get(path).map(|&slot| self.entries[slot].count)
    }

    /// Entries in first-seen order
    pub fn entries(&self) -> &[PathCount] {
        &self.entries
    }

    /// Number of distinct paths
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts (equals the number of `end` markers seen)
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|e| e.count).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_order_is_kept() {
        let mut tally = PathTally::new();
        tally.record("3".to_string());
        tally.record("1 2".to_string());
        tally.record("3".to_string());

        let paths: Vec<&str> = tally.entries().iter().map(|e| e.path.as_str()).collect();
        assert_eq!(paths, vec!["3", "1 2"]);
        assert_eq!(tally.get("3"), Some(2));
        assert_eq!(tally.total(), 3);
    }

    #[test]
    fn test_order_sensitive_keys() {
        let mut tally = PathTally::new();
        tally.record("1 2".to_string());
        tally.record("2 1".to_string());

        assert_eq!(tally.len(), 2);
        assert_eq!(tally.get("1 2"), Some(1));
        assert_eq!(tally.get("2 1"), Some(1));
    }

    #[test]
    fn test_empty_path_is_a_valid_key() {
        let mut tally = PathTally::new();
        tally.record(String::new());
        assert_eq!(tally.get(""), Some(1));
    }
}
