//! In-memory phrase vector cache using moka.
//!
//! Keys are blake3 hashes of the exact input text.

use moka::sync::Cache;

pub struct PhraseCache {
    cache: Cache<String, Vec<f32>>,
}

impl PhraseCache {
    /// Create a cache holding at most `max_entries` vectors.
    pub fn new(max_entries: u64) -> Self {
        Self {
            cache: Cache::builder().max_capacity(max_entries).build(),
        }
    }

    /// Cache key for a text.
    pub fn key(text: &str) -> String {
        blake3::hash(text.as_bytes()).to_hex().to_string()
    }

    pub fn get(&self, text: &str) -> Option<Vec<f32>> {
        self.cache.get(&Self::key(text))
    }

    pub fn insert(&self, text: &str, embedding: Vec<f32>) {
        self.cache.insert(Self::key(text), embedding);
    }

    /// Approximate entry count; moka applies writes lazily.
    pub fn len(&self) -> u64 {
        self.cache.run_pending_tasks();
        self.cache.entry_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.cache.invalidate_all();
    }
}
