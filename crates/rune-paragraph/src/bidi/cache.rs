use core::hash::Hash;

use hashbrown::HashMap;

use crate::bidi::{BidiReorderer, VisualText};

#[derive(Debug, Clone)]
struct CacheEntry {
    logical: String,
    visual: VisualText,
}

/// Last reorder result per owner (e.g. a widget id).
///
/// Lets caret and selection queries reuse index maps across frames
/// without reordering again. An entry is recomputed whenever its owner's
/// text changes.
///
/// The cache is plain owned state behind `&mut self`. To share one
/// between threads, wrap it in a `Mutex`.
#[derive(Debug)]
pub struct IndexMapCache<K> {
    entries: HashMap<K, CacheEntry>,
}

impl<K> Default for IndexMapCache<K> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl<K: Hash + Eq> IndexMapCache<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached result for `key` if it was computed for exactly `logical`,
    /// otherwise reorder `logical` and store it.
    pub fn get_or_reorder(&mut self, key: K, logical: &str) -> &VisualText {
        let entry = self.entries.entry(key).or_insert_with(|| CacheEntry {
            logical: String::new(),
            visual: VisualText::empty(),
        });
        if entry.logical != logical {
            entry.logical = logical.to_owned();
            entry.visual = BidiReorderer::reorder(logical);
        }
        &entry.visual
    }

    /// Cached result for `key`, regardless of the text it was built from.
    pub fn get(&self, key: &K) -> Option<&VisualText> {
        self.entries.get(key).map(|entry| &entry.visual)
    }

    /// Drop the entry for `key` (e.g. when its widget is destroyed).
    pub fn remove(&mut self, key: &K) -> Option<VisualText> {
        self.entries.remove(key).map(|entry| entry.visual)
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
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};
    use std::thread;

    use super::*;

    #[test]
    fn reuses_entry_for_same_text() {
        let mut cache = IndexMapCache::new();
        let first = cache.get_or_reorder(1u32, "abc אב").clone();
        let second = cache.get_or_reorder(1u32, "abc אב").clone();
        assert_eq!(first, second);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn recomputes_when_text_changes() {
        let mut cache = IndexMapCache::new();
        cache.get_or_reorder("label", "abc");
        let visual = cache.get_or_reorder("label", "אב");
        assert_eq!(visual.as_str(), "בא");
        assert_eq!(cache.get(&"label").map(VisualText::as_str), Some("בא"));
    }

    #[test]
    fn empty_text_for_new_key_is_cached() {
        let mut cache = IndexMapCache::new();
        assert!(cache.get_or_reorder(7u8, "").is_empty());
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn remove_and_clear() {
        let mut cache = IndexMapCache::new();
        cache.get_or_reorder(1u32, "a");
        cache.get_or_reorder(2u32, "b");
        assert!(cache.remove(&1).is_some());
        assert!(cache.get(&1).is_none());
        cache.clear();
        assert!(cache.is_empty());
    }

    #[test]
    fn shared_behind_mutex() {
        let cache = Arc::new(Mutex::new(IndexMapCache::<u32>::new()));
        let handles: Vec<_> = (0..4u32)
            .map(|id| {
                let cache = Arc::clone(&cache);
                thread::spawn(move || {
                    let mut cache = cache.lock().unwrap();
                    cache.get_or_reorder(id, "abc אבג").as_str().to_owned()
                })
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), "abc גבא");
        }
        assert_eq!(cache.lock().unwrap().len(), 4);
    }
}
