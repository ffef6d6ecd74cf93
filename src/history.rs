//! Bounded, newest-first log of rendered key combinations

use std::collections::VecDeque;

/// Maximum number of history entries kept.
pub const HISTORY_LIMIT: usize = 50;

#[derive(Debug)]
pub struct KeyHistory {
    entries: VecDeque<String>,
    limit: usize,
}

impl KeyHistory {
    pub fn new(limit: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(limit),
            limit,
        }
    }

    /// Append a rendered combination, evicting the oldest entries past
    /// the limit.
    pub fn push(&mut self, text: impl Into<String>) {
        self.entries.push_back(text.into());
        while self.entries.len() > self.limit {
            self.entries.pop_front();
        }
    }

    /// Entries newest first, one per panel line.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().rev().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for KeyHistory {
    fn default() -> Self {
        Self::new(HISTORY_LIMIT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_order() {
        let mut history = KeyHistory::default();
        history.push("A");
        history.push("Ctrl + C");
        history.push("B");

        let lines: Vec<&str> = history.lines().collect();
        assert_eq!(lines, ["B", "Ctrl + C", "A"]);
    }

    #[test]
    fn test_limit_evicts_oldest() {
        let mut history = KeyHistory::default();
        for i in 0..HISTORY_LIMIT {
            history.push(i.to_string());
        }
        assert_eq!(history.len(), HISTORY_LIMIT);

        history.push("newest");
        assert_eq!(history.len(), HISTORY_LIMIT);

        let lines: Vec<&str> = history.lines().collect();
        assert_eq!(lines.first(), Some(&"newest"));
        // "0" was the oldest entry and is gone
        assert!(!lines.contains(&"0"));
        assert!(lines.contains(&"1"));
    }

    #[test]
    fn test_small_limit() {
        let mut history = KeyHistory::new(2);
        history.push("A");
        history.push("B");
        history.push("C");
        let lines: Vec<&str> = history.lines().collect();
        assert_eq!(lines, ["C", "B"]);
    }

    #[test]
    fn test_empty() {
        let history = KeyHistory::default();
        assert!(history.is_empty());
        assert_eq!(history.lines().count(), 0);
    }
}
