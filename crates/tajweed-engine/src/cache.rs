// Memo cache for annotation results, keyed on (text, options)

use std::hash::{Hash, Hasher};

use hashbrown::{Equivalent, HashMap};
use tajweed_core::enums::AnnotateOptions;
use tajweed_core::segment::AnnotatedSegment;

/// Default number of cached verses.
pub const DEFAULT_CACHE_SIZE: usize = 256;

#[derive(Debug, Clone, PartialEq, Eq)]
struct CacheKey {
    text: String,
    options: AnnotateOptions,
}

impl Hash for CacheKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.text.as_str().hash(state);
        self.options.hash(state);
    }
}

/// Borrowed form of [`CacheKey`], so lookups need not allocate.
struct CacheKeyRef<'a> {
    text: &'a str,
    options: AnnotateOptions,
}

impl Hash for CacheKeyRef<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.text.hash(state);
        self.options.hash(state);
    }
}

impl Equivalent<CacheKey> for CacheKeyRef<'_> {
    fn equivalent(&self, key: &CacheKey) -> bool {
        self.text == key.text && self.options == key.options
    }
}

/// A bounded cache of annotation results.
///
/// When full, the whole cache is dropped before inserting: verses are
/// re-rendered in bursts (one screen at a time), so recency tracking buys
/// little. A capacity of 0 disables caching.
pub struct AnnotationCache {
    capacity: usize,
    entries: HashMap<CacheKey, Vec<AnnotatedSegment>>,
}

impl AnnotationCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: HashMap::with_capacity(capacity.min(DEFAULT_CACHE_SIZE)),
        }
    }

    pub fn get(&self, text: &str, options: AnnotateOptions) -> Option<&[AnnotatedSegment]> {
        self.entries
            .get(&CacheKeyRef { text, options })
            .map(Vec::as_slice)
    }

    pub fn insert(&mut self, text: &str, options: AnnotateOptions, segments: Vec<AnnotatedSegment>) {
        if self.capacity == 0 {
            return;
        }
        if self.entries.len() >= self.capacity {
            tracing::debug!(capacity = self.capacity, "annotation cache full, clearing");
            self.entries.clear();
        }
        let key = CacheKey {
            text: text.to_string(),
            options,
        };
        self.entries.insert(key, segments);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for AnnotationCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_SIZE)
    }
}
