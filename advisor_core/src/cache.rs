//! Bounded cache of deterministic replies.

use lru::LruCache;
use std::num::NonZeroUsize;

use crate::intent::Audience;
use crate::knowledge_base::Language;

/// Cache key: trimmed, lower-cased query text plus who asked and in which
/// language. Inner whitespace is kept: `who  are you` and `who are you`
/// classify differently.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    query: String,
    audience: Audience,
    language: Language,
}

impl CacheKey {
    pub fn new(query: &str, audience: Audience, language: Language) -> Self {
        Self {
            query: query.trim().to_lowercase(),
            audience,
            language,
        }
    }
}

/// LRU cache of replies. A capacity of zero disables caching.
#[derive(Debug)]
pub struct ResponseCache<V> {
    inner: Option<LruCache<CacheKey, V>>,
}

impl<V: Clone> ResponseCache<V> {
    /// Cache holding at most `capacity` replies.
    pub fn new(capacity: usize) -> Self {
        Self {
            inner: NonZeroUsize::new(capacity).map(LruCache::new),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.inner.is_some()
    }

    /// Look up a reply, marking it most recently used.
    pub fn get(&mut self, key: &CacheKey) -> Option<V> {
        self.inner.as_mut()?.get(key).cloned()
    }

    /// Store a reply, evicting the least recently used one when full.
    pub fn put(&mut self, key: CacheKey, value: V) {
        if let Some(cache) = self.inner.as_mut() {
            cache.put(key, value);
        }
    }

    pub fn len(&self) -> usize {
        self.inner.as_ref().map_or(0, LruCache::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn capacity(&self) -> usize {
        self.inner.as_ref().map_or(0, |c| c.cap().get())
    }
}
