use sha2::{Digest, Sha256};
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Computes the cache key for a translation request.
///
/// The key covers exactly the language pair, the domain context, and the
/// raw source text. The text is deliberately not normalized: lookups are
/// exact-phrase only, so casing or whitespace variants are distinct
/// entries.
pub fn cache_key(source_lang: &str, target_lang: &str, context: &str, text: &str) -> String {
    let cache_input = serde_json::json!([source_lang, target_lang, context, text]);

    let mut hasher = Sha256::new();
    hasher.update(cache_input.to_string().as_bytes());
    hex::encode(hasher.finalize())
}

/// Process-local store of completed translations.
///
/// Unbounded, keyed by [`cache_key`], and gone at process exit; nothing
/// is persisted. Reads and writes each take the lock once with no await
/// in between, so interleaved requests are safe. Concurrent writers for
/// the same key are allowed; the last write wins.
#[derive(Debug, Default)]
pub struct TranslationCache {
    entries: RwLock<HashMap<String, String>>,
}

impl TranslationCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the stored translation for `key`, if any.
    pub async fn get(&self, key: &str) -> Option<String> {
        self.entries.read().await.get(key).cloned()
    }

    /// Stores `translated` under `key`, replacing any previous entry.
    pub async fn put(&self, key: String, translated: String) {
        self.entries.write().await.insert(key, translated);
    }

    /// Removes every entry. Idempotent.
    pub async fn clear(&self) {
        self.entries.write().await.clear();
    }

    /// Number of cached translations.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Returns `true` if nothing is cached.
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}
