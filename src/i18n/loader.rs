//! Translation loading with graceful degradation.
//!
//! A load tries, in order: the cache, the locale's own bundle, its registered
//! fallback, and the default locale. When everything fails it returns an
//! empty bundle so pages render with raw keys instead of erroring.

use crate::i18n::{
    BundleError, BundleSource, Locale, TranslationBundle, TranslationCache, TranslationMetrics,
    Translator,
};
use futures::future::join_all;
use std::sync::Arc;
use tracing::{debug, error, warn};

pub struct TranslationLoader {
    source: Arc<dyn BundleSource>,
    cache: TranslationCache,
    metrics: Arc<TranslationMetrics>,
}

impl TranslationLoader {
    pub fn new(source: Arc<dyn BundleSource>) -> Self {
        Self {
            source,
            cache: TranslationCache::new(),
            metrics: Arc::new(TranslationMetrics::new()),
        }
    }

    pub fn cache(&self) -> &TranslationCache {
        &self.cache
    }

    pub fn metrics(&self) -> &TranslationMetrics {
        &self.metrics
    }

    /// Load the bundle for `locale`. Never fails.
    ///
    /// A fallback bundle is cached under `locale` itself. A default-locale
    /// rescue is not cached, so a later load retries the locale's own
    /// bundle once its source recovers.
    pub async fn load(&self, locale: Locale) -> Arc<TranslationBundle> {
        if let Some(bundle) = self.cache.get(locale) {
            self.metrics.record_cache_hit();
            return bundle;
        }
        self.metrics.record_cache_miss();

        match self.fetch(locale).await {
            Ok(bundle) => {
                debug!("Loaded translations for {}", locale);
                let bundle = Arc::new(bundle);
                self.cache.put(locale, Arc::clone(&bundle));
                return bundle;
            }
            Err(e) => warn!("Failed to load translations for {}, trying fallback: {}", locale, e),
        }

        if let Some(fallback) = locale.fallback() {
            match self.fetch(fallback).await {
                Ok(bundle) => {
                    warn!("Serving {} translations for {}", fallback, locale);
                    self.metrics.record_fallback_served();
                    let bundle = Arc::new(bundle);
                    self.cache.put(locale, Arc::clone(&bundle));
                    return bundle;
                }
                Err(e) => warn!("Fallback {} for {} also failed: {}", fallback, locale, e),
            }
        }

        if !locale.is_default() {
            match self.fetch(Locale::DEFAULT).await {
                Ok(bundle) => {
                    warn!("Serving {} translations for {}", Locale::DEFAULT, locale);
                    self.metrics.record_default_served();
                    return Arc::new(bundle);
                }
                Err(e) => error!("Failed to load default {} translations: {}", Locale::DEFAULT, e),
            }
        }

        error!("No translations available for {}, serving empty bundle", locale);
        self.metrics.record_empty_served();
        Arc::new(TranslationBundle::default())
    }

    /// Load `locale` and bind a translator to it.
    pub async fn translator(&self, locale: Locale) -> Translator {
        let bundle = self.load(locale).await;
        Translator::new(locale, bundle, Arc::clone(&self.metrics))
    }

    /// Warm the cache for several locales concurrently.
    pub async fn preload(&self, locales: &[Locale]) {
        join_all(locales.iter().map(|&locale| self.load(locale))).await;
        debug!("Preloaded {} locales, {} cached", locales.len(), self.cache.len());
    }

    async fn fetch(&self, locale: Locale) -> Result<TranslationBundle, BundleError> {
        self.metrics.record_fetch();
        let result = self.source.fetch(locale).await;
        if result.is_err() {
            self.metrics.record_fetch_failure();
        }
        result
    }
}
