//! Geo-location based locale detection.
//!
//! The hosting edge supplies a country, and sometimes a city and a region
//! code, for each request. Regional rules are checked first; the
//! country-level locale is used when none of them match.

use crate::i18n::{Locale, LocaleRegistry};
use axum::http::HeaderMap;
use serde::{Deserialize, Serialize};

/// Edge-provided visitor location headers.
pub const COUNTRY_HEADER: &str = "cf-ipcountry";
pub const CITY_HEADER: &str = "cf-ipcity";
pub const REGION_CODE_HEADER: &str = "cf-region-code";
pub const TIMEZONE_HEADER: &str = "cf-timezone";

/// Per-request geo hints. Every field is optional and untrusted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeoSignal {
    pub country: Option<String>,
    pub city: Option<String>,
    pub region_code: Option<String>,
    pub timezone: Option<String>,
}

impl GeoSignal {
    /// Read the signal from edge visitor-location headers.
    ///
    /// Missing, empty or non-UTF-8 headers are treated as absent.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let read = |name: &str| {
            headers
                .get(name)
                .and_then(|value| std::str::from_utf8(value.as_bytes()).ok())
                .map(str::trim)
                .filter(|value| !value.is_empty())
                .map(str::to_string)
        };

        Self {
            country: read(COUNTRY_HEADER),
            city: read(CITY_HEADER),
            region_code: read(REGION_CODE_HEADER),
            timezone: read(TIMEZONE_HEADER),
        }
    }
}

/// Detect the locale for a geo signal.
pub fn detect(signal: &GeoSignal) -> Locale {
    let registry = LocaleRegistry::get();

    let Some(country) = signal.country.as_deref() else {
        return Locale::DEFAULT;
    };

    for rule in registry
        .regional_rules()
        .iter()
        .filter(|rule| rule.country == country)
    {
        if let Some(region_code) = signal.region_code.as_deref() {
            if !rule.regions.is_empty() {
                // The edge may send "ES-CT" or just "CT"
                let region = region_code
                    .strip_prefix(country)
                    .and_then(|rest| rest.strip_prefix('-'))
                    .unwrap_or(region_code);
                if rule.regions.contains(&region) {
                    return rule.locale;
                }
            }
        }

        if let Some(city) = signal.city.as_deref() {
            if !rule.cities.is_empty() {
                let city = city.trim().to_lowercase();
                if rule.cities.iter().any(|c| c.to_lowercase() == city) {
                    return rule.locale;
                }
            }
        }
    }

    registry
        .locale_for_country(country)
        .unwrap_or(Locale::DEFAULT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn signal(country: Option<&str>, city: Option<&str>, region: Option<&str>) -> GeoSignal {
        GeoSignal {
            country: country.map(String::from),
            city: city.map(String::from),
            region_code: region.map(String::from),
            timezone: None,
        }
    }

    #[test]
    fn test_no_country_returns_default() {
        assert_eq!(detect(&GeoSignal::default()), Locale::DEFAULT);
        assert_eq!(
            detect(&signal(None, Some("Barcelona"), Some("ES-CT"))),
            Locale::DEFAULT
        );
    }

    #[test]
    fn test_catalonia_region_with_prefix() {
        assert_eq!(detect(&signal(Some("ES"), None, Some("ES-CT"))).code(), "ca");
    }

    #[test]
    fn test_catalonia_region_without_prefix() {
        assert_eq!(detect(&signal(Some("ES"), None, Some("CT"))).code(), "ca");
    }

    #[test]
    fn test_madrid_falls_back_to_country() {
        assert_eq!(detect(&signal(Some("ES"), Some("Madrid"), None)).code(), "es");
    }

    #[test]
    fn test_basque_and_galician_regions() {
        assert_eq!(detect(&signal(Some("ES"), None, Some("ES-PV"))).code(), "eu");
        assert_eq!(detect(&signal(Some("ES"), None, Some("NC"))).code(), "eu");
        assert_eq!(detect(&signal(Some("ES"), None, Some("GA"))).code(), "gl");
    }

    #[test]
    fn test_city_match_is_case_insensitive_and_trimmed() {
        assert_eq!(detect(&signal(Some("ES"), Some("  bilbao "), None)).code(), "eu");
        assert_eq!(detect(&signal(Some("ES"), Some("A CORUÑA"), None)).code(), "gl");
    }

    #[test]
    fn test_wales() {
        assert_eq!(detect(&signal(Some("GB"), Some("Cardiff"), None)).code(), "cy");
        assert_eq!(detect(&signal(Some("GB"), None, Some("GB-WLS"))).code(), "cy");
        assert_eq!(detect(&signal(Some("GB"), None, None)).code(), "en");
        assert_eq!(detect(&signal(Some("GB"), Some("London"), Some("ENG"))).code(), "en");
    }

    #[test]
    fn test_sami_in_three_countries() {
        assert_eq!(detect(&signal(Some("FI"), None, Some("FI-19"))).code(), "se");
        assert_eq!(detect(&signal(Some("SE"), Some("Kiruna"), None)).code(), "se");
        assert_eq!(detect(&signal(Some("NO"), Some("Tromsø"), None)).code(), "se");
        assert_eq!(detect(&signal(Some("NO"), Some("Oslo"), None)).code(), "en");
    }

    #[test]
    fn test_corsica_and_friesland() {
        assert_eq!(detect(&signal(Some("FR"), None, Some("FR-2A"))).code(), "co");
        assert_eq!(detect(&signal(Some("FR"), Some("Paris"), None)).code(), "fr");
        assert_eq!(detect(&signal(Some("NL"), Some("Leeuwarden"), None)).code(), "fy");
    }

    #[test]
    fn test_region_rule_for_other_country_ignored() {
        // "CT" is a Catalan region only within Spain
        assert_eq!(detect(&signal(Some("IT"), None, Some("CT"))).code(), "it");
    }

    #[test]
    fn test_region_wins_over_later_city_rule() {
        // Region says Catalonia, city says Bilbao: the earlier Catalan rule wins
        assert_eq!(
            detect(&signal(Some("ES"), Some("Bilbao"), Some("ES-CT"))).code(),
            "ca"
        );
    }

    #[test]
    fn test_unknown_country_returns_default() {
        assert_eq!(detect(&signal(Some("US"), Some("Boston"), None)), Locale::DEFAULT);
    }

    #[test]
    fn test_from_headers() {
        let mut headers = HeaderMap::new();
        headers.insert(COUNTRY_HEADER, HeaderValue::from_static("ES"));
        headers.insert(CITY_HEADER, HeaderValue::from_static("Barcelona"));
        headers.insert(REGION_CODE_HEADER, HeaderValue::from_static("CT"));
        headers.insert(TIMEZONE_HEADER, HeaderValue::from_static("Europe/Madrid"));

        let signal = GeoSignal::from_headers(&headers);
        assert_eq!(signal.country.as_deref(), Some("ES"));
        assert_eq!(signal.city.as_deref(), Some("Barcelona"));
        assert_eq!(signal.region_code.as_deref(), Some("CT"));
        assert_eq!(signal.timezone.as_deref(), Some("Europe/Madrid"));
    }

    #[test]
    fn test_from_headers_utf8_city_and_blank_country() {
        let mut headers = HeaderMap::new();
        headers.insert(COUNTRY_HEADER, HeaderValue::from_static("  "));
        headers.insert(
            CITY_HEADER,
            HeaderValue::from_bytes("Tromsø".as_bytes()).unwrap(),
        );

        let signal = GeoSignal::from_headers(&headers);
        assert_eq!(signal.country, None);
        assert_eq!(signal.city.as_deref(), Some("Tromsø"));
    }
}
