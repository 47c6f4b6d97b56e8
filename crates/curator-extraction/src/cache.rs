//! L1 in-memory feature cache using moka.
//!
//! Keys are blake3 hashes of the encoded image bytes.

use std::time::Duration;

use moka::sync::Cache;

pub struct FeatureCache {
    cache: Cache<String, Vec<f32>>,
}

impl FeatureCache {
    pub fn new(max_entries: u64) -> Self {
        let cache = Cache::builder()
            .max_capacity(max_entries)
            .time_to_idle(Duration::from_secs(3600))
            .build();
        Self { cache }
    }

    /// Content key for an encoded image.
    pub fn key_for(image: &[u8]) -> String {
        blake3::hash(image).to_hex().to_string()
    }

    pub fn get(&self, key: &str) -> Option<Vec<f32>> {
        self.cache.get(key)
    }

    pub fn insert(&self, key: String, features: Vec<f32>) {
        self.cache.insert(key, features);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_bytes_same_key() {
        assert_eq!(FeatureCache::key_for(b"abc"), FeatureCache::key_for(b"abc"));
        assert_ne!(FeatureCache::key_for(b"abc"), FeatureCache::key_for(b"abd"));
    }

    #[test]
    fn insert_and_get() {
        let cache = FeatureCache::new(10);
        let key = FeatureCache::key_for(b"image");
        cache.insert(key.clone(), vec![1.0, 2.0]);
        assert_eq!(cache.get(&key), Some(vec![1.0, 2.0]));
        assert_eq!(cache.get("missing"), None);
    }
}
