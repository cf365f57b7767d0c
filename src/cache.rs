//! Formatter cache store.
//!
//! A [`CacheStore`] holds one sub-cache per formatter kind. Entries are never
//! evicted individually: a store lives as long as the scope that created it
//! (typically one locale configuration) and is dropped as a whole, which
//! releases every cached formatter at once.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use crate::formatter::{
    DateTimeFormat, ListFormat, NumberFormat, PluralRules, RelativeTimeFormat,
};
use crate::kind::FormatterKind;
use crate::message::MessageFormat;

/// Cached instances of one formatter kind, keyed by derived cache key.
pub struct SubCache<F> {
    entries: RefCell<HashMap<String, Rc<F>>>,
}

impl<F> SubCache<F> {
    fn new() -> Self {
        Self {
            entries: RefCell::new(HashMap::new()),
        }
    }

    /// Returns the instance stored under `key`, if any.
    pub fn get(&self, key: &str) -> Option<Rc<F>> {
        self.entries.borrow().get(key).cloned()
    }

    /// Stores `value` under `key` and returns the instance now cached there.
    ///
    /// If an entry appeared for `key` in the meantime (a constructor that
    /// re-entered the cache with the same arguments), the existing instance
    /// wins so that every caller observes the same one.
    pub fn insert(&self, key: String, value: Rc<F>) -> Rc<F> {
        self.entries
            .borrow_mut()
            .entry(key)
            .or_insert(value)
            .clone()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.borrow().contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl<F> fmt::Debug for SubCache<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let entries = self.entries.borrow();
        let mut keys: Vec<&String> = entries.keys().collect();
        keys.sort();
        f.debug_set().entries(keys).finish()
    }
}

/// One sub-cache per formatter kind.
///
/// The set of sub-caches is fixed; only their contents grow.
#[derive(Debug)]
pub struct CacheStore {
    pub date_time: SubCache<DateTimeFormat>,
    pub number: SubCache<NumberFormat>,
    pub message: SubCache<MessageFormat>,
    pub relative_time: SubCache<RelativeTimeFormat>,
    pub plural_rules: SubCache<PluralRules>,
    pub list: SubCache<ListFormat>,
}

impl CacheStore {
    /// Create a store with six empty sub-caches.
    pub fn new() -> Self {
        CacheStore {
            date_time: SubCache::new(),
            number: SubCache::new(),
            message: SubCache::new(),
            relative_time: SubCache::new(),
            plural_rules: SubCache::new(),
            list: SubCache::new(),
        }
    }

    /// Number of cached instances of one kind.
    pub fn len(&self, kind: FormatterKind) -> usize {
        match kind {
            FormatterKind::DateTime => self.date_time.len(),
            FormatterKind::Number => self.number.len(),
            FormatterKind::Message => self.message.len(),
            FormatterKind::RelativeTime => self.relative_time.len(),
            FormatterKind::PluralRules => self.plural_rules.len(),
            FormatterKind::List => self.list.len(),
        }
    }

    /// Total number of cached instances across all kinds.
    pub fn total_len(&self) -> usize {
        FormatterKind::ALL.iter().map(|kind| self.len(*kind)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total_len() == 0
    }
}

impl Default for CacheStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Create a fresh, empty cache store.
pub fn create_cache_store() -> CacheStore {
    CacheStore::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_store_is_empty() {
        let store = create_cache_store();
        assert!(store.is_empty());
        for kind in FormatterKind::ALL {
            assert_eq!(store.len(kind), 0);
        }
    }

    #[test]
    fn test_insert_keeps_first_value() {
        let cache: SubCache<u32> = SubCache::new();
        let first = cache.insert("k".to_string(), Rc::new(1));
        let second = cache.insert("k".to_string(), Rc::new(2));
        assert!(Rc::ptr_eq(&first, &second));
        assert_eq!(*second, 1);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_get_returns_shared_instance() {
        let cache: SubCache<String> = SubCache::new();
        assert!(cache.get("k").is_none());
        let stored = cache.insert("k".to_string(), Rc::new("v".to_string()));
        let fetched = cache.get("k").unwrap();
        assert!(Rc::ptr_eq(&stored, &fetched));
        assert!(cache.contains_key("k"));
    }

    #[test]
    fn test_debug_lists_keys() {
        let cache: SubCache<u32> = SubCache::new();
        cache.insert("b".to_string(), Rc::new(1));
        cache.insert("a".to_string(), Rc::new(2));
        assert_eq!(format!("{:?}", cache), r#"{"a", "b"}"#);
    }
}
