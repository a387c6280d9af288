//! Preference cascade: URL > cookie > Accept-Language > geo.

use crate::i18n::{accept_language, Locale};

/// Pick the locale to serve from the four request signals.
///
/// The first present source wins; signals are never blended. `geo` is
/// always defined, so the cascade cannot fail.
pub fn resolve(
    url_locale: Option<Locale>,
    cookie_locale: Option<Locale>,
    geo_locale: Locale,
    accept_header: Option<&str>,
) -> Locale {
    if let Some(locale) = url_locale {
        return locale;
    }

    if let Some(locale) = cookie_locale {
        return locale;
    }

    accept_header
        .map(accept_language::parse)
        .unwrap_or_default()
        .iter()
        .find_map(|code| Locale::from_code(code).ok())
        .unwrap_or(geo_locale)
}
