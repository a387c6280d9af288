//! Internationalization (i18n) module for per-request locale resolution.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for locales, country map, regional rules and fallbacks
//! - `locale`: Type-safe `Locale` that can only hold supported codes
//! - `geo`: Locale detection from edge geo signals
//! - `accept_language`: `Accept-Language` header ranking
//! - `preference`: URL > cookie > header > geo cascade
//! - `path` / `cookie`: Locale prefix and preference cookie codecs
//! - `bundle` / `source` / `cache` / `loader`: Translation bundles with fallback loading
//! - `metrics`: Translation loading counters
//!
//! # Example
//!
//! ```rust,ignore
//! use growfolio_locale::i18n::{geo, preference, GeoSignal, Locale};
//!
//! let geo_locale = geo::detect(&GeoSignal {
//!     country: Some("ES".into()),
//!     region_code: Some("ES-CT".into()),
//!     ..Default::default()
//! });
//! let locale = preference::resolve(None, None, geo_locale, Some("fr;q=0.5"));
//! ```

pub mod accept_language;
mod bundle;
mod cache;
pub mod cookie;
pub mod geo;
mod loader;
mod locale;
mod metrics;
pub mod path;
pub mod preference;
mod registry;
mod source;

pub use bundle::{interpolate, TranslationBundle, TranslationValue, Translator};
pub use cache::TranslationCache;
pub use geo::GeoSignal;
pub use loader::TranslationLoader;
pub use locale::{Locale, LocaleError};
pub use metrics::{MetricsReport, TranslationMetrics};
pub use registry::{CountryLanguages, LanguageConfig, LanguageGroup, LocaleRegistry, RegionalRule};
pub use source::{BundleError, BundleSource, FsBundleSource, HttpBundleSource, StaticBundleSource};
