//! Locale preference cookie.

use crate::i18n::Locale;

/// Name of the cookie that stores the visitor's locale choice.
pub const COOKIE_NAME: &str = "growfolio-lang";

/// Cookie lifetime: one year, in seconds.
pub const MAX_AGE_SECS: u32 = 60 * 60 * 24 * 365;

/// `Set-Cookie` value persisting `locale`.
pub fn encode(locale: Locale) -> String {
    format!(
        "{}={}; Path=/; Max-Age={}; SameSite=Lax",
        COOKIE_NAME, locale, MAX_AGE_SECS
    )
}

/// Locale stored in a `Cookie` request header, if present and supported.
///
/// Only a pair whose name is exactly [`COOKIE_NAME`] is considered, so
/// `old-growfolio-lang=fr` does not count.
pub fn decode(cookie_header: &str) -> Option<Locale> {
    cookie_header
        .split(';')
        .filter_map(|pair| pair.split_once('='))
        .find(|(name, _)| name.trim() == COOKIE_NAME)
        .and_then(|(_, value)| Locale::from_code(value.trim().trim_matches('"')).ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn locale(code: &str) -> Locale {
        Locale::from_code(code).unwrap()
    }

    #[test]
    fn test_encode_wire_format() {
        assert_eq!(
            encode(locale("ca")),
            "growfolio-lang=ca; Path=/; Max-Age=31536000; SameSite=Lax"
        );
    }

    #[test]
    fn test_decode_among_other_cookies() {
        assert_eq!(
            decode("session=abc123; growfolio-lang=eu; theme=dark"),
            Some(locale("eu"))
        );
    }

    #[test]
    fn test_decode_absent() {
        assert_eq!(decode(""), None);
        assert_eq!(decode("session=abc123"), None);
    }

    #[test]
    fn test_decode_unsupported_value() {
        assert_eq!(decode("growfolio-lang=xx"), None);
        assert_eq!(decode("growfolio-lang="), None);
    }

    #[test]
    fn test_decode_rejects_suffix_named_cookie() {
        assert_eq!(decode("old-growfolio-lang=fr"), None);
        assert_eq!(decode("old-growfolio-lang=fr; growfolio-lang=de"), Some(locale("de")));
    }

    #[test]
    fn test_decode_rejects_prefix_named_cookie() {
        assert_eq!(decode("growfolio-lang-v2=fr"), None);
    }

    #[test]
    fn test_decode_value_is_not_a_prefix_match() {
        assert_eq!(decode("growfolio-lang=frx"), None);
    }

    proptest! {
        #[test]
        fn prop_round_trip(index in 0usize..31) {
            let l = Locale::all()[index];
            prop_assert_eq!(decode(&encode(l)), Some(l));
        }
    }
}
