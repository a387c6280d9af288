//! Locale prefixes in URL paths.
//!
//! Every user-facing path starts with a locale segment (`/fr/about`). A first
//! segment that is not a supported locale is an ordinary path segment.

use crate::i18n::Locale;
use axum::http::Uri;

fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|segment| !segment.is_empty())
}

/// The locale named by the first path segment, if it is a supported one.
pub fn extract_locale(path: &str) -> Option<Locale> {
    segments(path)
        .next()
        .and_then(|first| Locale::from_code(first).ok())
}

/// Path and query of `uri` with its locale prefix set to `locale`.
///
/// An existing locale segment is replaced, otherwise one is prepended. The
/// query string is kept verbatim.
pub fn with_locale(uri: &Uri, locale: Locale) -> String {
    let mut parts: Vec<&str> = segments(uri.path()).collect();

    if parts.first().is_some_and(|first| extract_locale(first).is_some()) {
        parts[0] = locale.code();
    } else {
        parts.insert(0, locale.code());
    }

    let mut result = format!("/{}", parts.join("/"));
    if let Some(query) = uri.query() {
        result.push('?');
        result.push_str(query);
    }
    result
}

/// `path` without its locale prefix. Returns `/` when nothing else remains.
pub fn without_locale(path: &str) -> String {
    let mut parts = segments(path);

    match parts.next() {
        Some(first) if extract_locale(first).is_some() => {
            format!("/{}", parts.collect::<Vec<_>>().join("/"))
        }
        _ => path.to_string(),
    }
}
