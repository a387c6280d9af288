//! Translation bundles and key lookup.
//!
//! A bundle is one locale's strings as a tree: keys map either to a string
//! or to a nested table. Lookups use dotted paths (`"hero.headline"`).

use crate::i18n::{Locale, TranslationMetrics};
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::{Arc, OnceLock};
use tracing::warn;

/// A node of a translation tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TranslationValue {
    Text(String),
    Nested(BTreeMap<String, TranslationValue>),
    /// Arrays, numbers and the like. Kept so the rest of the bundle still
    /// loads, but never rendered.
    Other(serde_json::Value),
}

/// One locale's strings. Never mutated once loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TranslationBundle(BTreeMap<String, TranslationValue>);

impl TranslationBundle {
    /// Parse a bundle from its JSON representation.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Look up a dotted key.
    ///
    /// Returns `None` if a segment is missing or the key names anything
    /// other than a string.
    pub fn get_value(&self, dotted_path: &str) -> Option<&str> {
        let mut segments = dotted_path.split('.');
        let mut node = self.0.get(segments.next()?)?;

        for segment in segments {
            match node {
                TranslationValue::Nested(children) => node = children.get(segment)?,
                TranslationValue::Text(_) | TranslationValue::Other(_) => return None,
            }
        }

        match node {
            TranslationValue::Text(text) => Some(text),
            TranslationValue::Nested(_) | TranslationValue::Other(_) => None,
        }
    }
}

static PLACEHOLDER_REGEX: OnceLock<Regex> = OnceLock::new();

fn placeholder_regex() -> &'static Regex {
    PLACEHOLDER_REGEX.get_or_init(|| Regex::new(r"\{(\w+)\}").expect("Invalid placeholder regex"))
}

/// Replace `{name}` tokens with the matching parameter. Unknown tokens stay as they are.
pub fn interpolate(template: &str, params: &[(&str, &dyn fmt::Display)]) -> String {
    placeholder_regex()
        .replace_all(template, |caps: &Captures| {
            params
                .iter()
                .find(|(name, _)| *name == &caps[1])
                .map(|(_, value)| value.to_string())
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

/// Renders keys of one bundle.
///
/// Rendering never fails: a missing key is logged and rendered as the key
/// itself.
#[derive(Clone)]
pub struct Translator {
    locale: Locale,
    bundle: Arc<TranslationBundle>,
    metrics: Arc<TranslationMetrics>,
}

impl Translator {
    pub fn new(
        locale: Locale,
        bundle: Arc<TranslationBundle>,
        metrics: Arc<TranslationMetrics>,
    ) -> Self {
        Self {
            locale,
            bundle,
            metrics,
        }
    }

    /// The locale that was requested, which may differ from the bundle's
    /// origin after a fallback.
    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn bundle(&self) -> &TranslationBundle {
        &self.bundle
    }

    pub fn t(&self, key: &str) -> String {
        self.t_with(key, &[])
    }

    pub fn t_with(&self, key: &str, params: &[(&str, &dyn fmt::Display)]) -> String {
        let Some(value) = self.bundle.get_value(key) else {
            warn!("Missing translation for {}: {}", self.locale, key);
            self.metrics.record_missing_key();
            return key.to_string();
        };

        if params.is_empty() {
            value.to_string()
        } else {
            interpolate(value, params)
        }
    }
}

impl fmt::Debug for Translator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Translator")
            .field("locale", &self.locale)
            .field("keys", &self.bundle.0.len())
            .finish()
    }
}
