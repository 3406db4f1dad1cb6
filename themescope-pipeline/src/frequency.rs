//! Corpus-wide phrase occurrence counter.

use std::collections::HashMap;

/// Counts every phrase occurrence across the corpus, remembering the order
/// in which phrases were first seen. Ranking ties resolve to that order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhraseFrequency {
    counts: Vec<(String, usize)>,
    positions: HashMap<String, usize>,
}

impl PhraseFrequency {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, phrase: &str) {
        match self.positions.get(phrase) {
            Some(&pos) => self.counts[pos].1 += 1,
            None => {
                self.positions.insert(phrase.to_string(), self.counts.len());
                self.counts.push((phrase.to_string(), 1));
            }
        }
    }

    pub fn add_all<S: AsRef<str>>(&mut self, phrases: &[S]) {
        for p in phrases {
            self.add(p.as_ref());
        }
    }

    pub fn count(&self, phrase: &str) -> usize {
        self.positions
            .get(phrase)
            .map(|&pos| self.counts[pos].1)
            .unwrap_or(0)
    }

    /// The `n` most frequent phrases, highest count first.
    pub fn top(&self, n: usize) -> Vec<(String, usize)> {
        let mut ranked = self.counts.clone();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(n);
        ranked
    }

    /// Total occurrences.
    pub fn total(&self) -> usize {
        self.counts.iter().map(|(_, c)| c).sum()
    }

    /// Distinct phrases.
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_accumulate() {
        let mut f = PhraseFrequency::new();
        f.add_all(&["a", "b", "a"]);
        assert_eq!(f.count("a"), 2);
        assert_eq!(f.count("b"), 1);
        assert_eq!(f.count("zzz"), 0);
        assert_eq!(f.total(), 3);
        assert_eq!(f.distinct(), 2);
    }

    #[test]
    fn ties_rank_by_first_seen() {
        let mut f = PhraseFrequency::new();
        f.add_all(&["late", "early", "early", "late", "solo"]);
        let top = f.top(3);
        assert_eq!(
            top,
            vec![("late".to_string(), 2), ("early".to_string(), 2), ("solo".to_string(), 1)]
        );
    }

    #[test]
    fn top_is_capped() {
        let mut f = PhraseFrequency::new();
        f.add_all(&["a", "b", "c"]);
        assert_eq!(f.top(2).len(), 2);
        assert_eq!(f.top(10).len(), 3);
        assert!(PhraseFrequency::new().top(5).is_empty());
    }
}
