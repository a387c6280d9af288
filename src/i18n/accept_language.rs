//! `Accept-Language` header parsing.

use std::cmp::Ordering;

/// One ranked entry of an `Accept-Language` header.
#[derive(Debug, Clone, PartialEq)]
struct Ranked {
    code: String,
    quality: f32,
}

/// Parse an `Accept-Language` header into primary language codes, best first.
///
/// Only the primary subtag is kept and lowercased ("en-US" becomes "en").
/// A missing or unparsable quality counts as `1.0`. Entries with equal
/// quality keep their header order.
pub fn parse(header: &str) -> Vec<String> {
    let mut ranked: Vec<Ranked> = header
        .split(',')
        .filter_map(|entry| {
            let entry = entry.trim();
            let (tag, quality) = match entry.split_once(";q=") {
                Some((tag, q)) => (tag, parse_quality(q)),
                None => (entry, 1.0),
            };

            // Drop any other parameters ("en;level=1")
            let tag = tag.split(';').next().unwrap_or(tag).trim();
            let code = tag.split('-').next().unwrap_or(tag).to_lowercase();
            if code.is_empty() {
                return None;
            }

            Some(Ranked { code, quality })
        })
        .collect();

    // Vec::sort_by is stable, which keeps ties in header order. `-0` and `0` tie.
    ranked.sort_by(|a, b| b.quality.partial_cmp(&a.quality).unwrap_or(Ordering::Equal));

    ranked.into_iter().map(|r| r.code).collect()
}

/// Reads the q-value up to the next parameter (`0.8;level=1` is `0.8`).
fn parse_quality(raw: &str) -> f32 {
    let value = raw.split(';').next().unwrap_or(raw);
    match value.trim().parse::<f32>() {
        Ok(q) if q.is_finite() => q,
        _ => 1.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorts_by_quality() {
        assert_eq!(parse("fr;q=0.5,en;q=0.9"), vec!["en", "fr"]);
    }

    #[test]
    fn test_primary_subtag_lowercased() {
        assert_eq!(
            parse("en-US,en;q=0.9,CA-es;q=0.8"),
            vec!["en", "en", "ca"]
        );
    }

    #[test]
    fn test_ties_keep_header_order() {
        assert_eq!(
            parse("de;q=0.5,fr,it;q=0.5,nl,es;q=0.5"),
            vec!["fr", "nl", "de", "it", "es"]
        );
    }

    #[test]
    fn test_missing_quality_is_one() {
        assert_eq!(parse("pl;q=0.99,sv"), vec!["sv", "pl"]);
    }

    #[test]
    fn test_malformed_quality_defaults_to_one() {
        // "abc" is not a number: the entry is kept with quality 1.0
        assert_eq!(parse("en;q=0.8,fr;q=abc"), vec!["fr", "en"]);
        assert_eq!(parse("en;q=0.8,fr;q=NaN"), vec!["fr", "en"]);
    }

    #[test]
    fn test_negative_zero_ties_with_zero() {
        assert_eq!(parse("de;q=-0,fr;q=0"), vec!["de", "fr"]);
    }

    #[test]
    fn test_parameters_after_quality_are_ignored() {
        assert_eq!(parse("en;q=0.8;level=1,fr;q=0.9"), vec!["fr", "en"]);
    }

    #[test]
    fn test_whitespace_tolerated() {
        assert_eq!(parse(" es-ES;q=0.4 , ca ;q= 0.6 "), vec!["ca", "es"]);
    }

    #[test]
    fn test_empty_header() {
        assert!(parse("").is_empty());
        assert!(parse(" , ,").is_empty());
    }

    #[test]
    fn test_wildcard_is_kept_as_is() {
        assert_eq!(parse("*;q=0.1,de"), vec!["de", "*"]);
    }

    #[test]
    fn test_output_never_longer_than_entries() {
        let header = "a,b;q=0.1,c-d;q=x,,e";
        assert!(parse(header).len() <= header.split(',').count());
    }
}
