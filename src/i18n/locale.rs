//! Locale type: validated, copyable locale representation.
//!
//! A `Locale` can only be built from a code present in the registry, so any
//! value flowing through the request pipeline is already known to be
//! supported.

use crate::i18n::{LanguageConfig, LocaleRegistry};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocaleError {
    #[error("Unsupported locale code: '{0}'")]
    Unsupported(String),
}

/// A supported locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Locale {
    /// Short language code (e.g., "en", "ca")
    code: &'static str,
}

impl Locale {
    /// The locale served when no signal resolves to anything else.
    pub const DEFAULT: Locale = Locale { code: "en" };

    /// Build a locale from registry data. Only for codes known to be supported.
    pub(crate) const fn from_static(code: &'static str) -> Locale {
        Locale { code }
    }

    /// Create a Locale from a code string.
    ///
    /// # Returns
    /// * `Ok(Locale)` if the code is one of the supported locales
    /// * `Err(LocaleError::Unsupported)` otherwise
    pub fn from_code(code: &str) -> Result<Locale, LocaleError> {
        LocaleRegistry::get()
            .get_by_code(code)
            .map(|config| Locale { code: config.code })
            .ok_or_else(|| LocaleError::Unsupported(code.to_string()))
    }

    /// Every supported locale, in registry order.
    pub fn all() -> Vec<Locale> {
        LocaleRegistry::get()
            .list_all()
            .into_iter()
            .map(|config| Locale { code: config.code })
            .collect()
    }

    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Get the full locale configuration from the registry.
    ///
    /// # Panics
    /// Panics if the code is not found in the registry. This cannot happen for
    /// locales built through `from_code` or taken from registry data.
    pub fn config(&self) -> &'static LanguageConfig {
        LocaleRegistry::get()
            .get_by_code(self.code)
            .expect("Locale code should always be valid")
    }

    /// English name of the language (e.g., "Catalan").
    pub fn name(&self) -> &'static str {
        self.config().name
    }

    /// Native name of the language (e.g., "Català").
    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    pub fn is_default(&self) -> bool {
        *self == Locale::DEFAULT
    }

    /// The locale whose bundle stands in for this one, if any.
    pub fn fallback(&self) -> Option<Locale> {
        LocaleRegistry::get().fallback_for(*self)
    }
}

impl Default for Locale {
    fn default() -> Self {
        Locale::DEFAULT
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code)
    }
}

impl FromStr for Locale {
    type Err = LocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Locale::from_code(s)
    }
}

impl serde::Serialize for Locale {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code)
    }
}
