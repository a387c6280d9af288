//! Process-wide translation cache.

use crate::i18n::{Locale, TranslationBundle};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Loaded bundles keyed by the locale that was requested.
///
/// Entries are only ever added. Two tasks racing to fill the same locale
/// store identical content, so the last write simply wins.
#[derive(Debug, Default)]
pub struct TranslationCache {
    entries: RwLock<HashMap<Locale, Arc<TranslationBundle>>>,
}

impl TranslationCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, locale: Locale) -> Option<Arc<TranslationBundle>> {
        self.entries
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .get(&locale)
            .cloned()
    }

    pub fn put(&self, locale: Locale, bundle: Arc<TranslationBundle>) {
        self.entries
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .insert(locale, bundle);
    }

    pub fn contains(&self, locale: Locale) -> bool {
        self.get(locale).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every entry. Only meant for tests.
    pub fn clear(&self) {
        self.entries
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bundle(json: &str) -> Arc<TranslationBundle> {
        Arc::new(TranslationBundle::from_json(json).unwrap())
    }

    #[test]
    fn test_get_put() {
        let cache = TranslationCache::new();
        let fr = Locale::from_code("fr").unwrap();

        assert!(cache.get(fr).is_none());
        cache.put(fr, bundle(r#"{"a":"b"}"#));
        assert_eq!(cache.get(fr).unwrap().get_value("a"), Some("b"));
        assert!(cache.contains(fr));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_entries_are_per_locale() {
        let cache = TranslationCache::new();
        cache.put(Locale::from_code("ca").unwrap(), bundle(r#"{"a":"es"}"#));
        assert!(!cache.contains(Locale::from_code("es").unwrap()));
    }

    #[test]
    fn test_clear() {
        let cache = TranslationCache::new();
        cache.put(Locale::DEFAULT, bundle("{}"));
        cache.clear();
        assert!(cache.is_empty());
    }

    #[test]
    fn test_concurrent_puts_of_same_locale() {
        let cache = Arc::new(TranslationCache::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let cache = Arc::clone(&cache);
                std::thread::spawn(move || cache.put(Locale::DEFAULT, bundle(r#"{"k":"v"}"#)))
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get(Locale::DEFAULT).unwrap().get_value("k"), Some("v"));
    }
}
