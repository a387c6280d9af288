//! Locale registry: Single source of truth for all supported locales.
//!
//! Holds the 31 supported locales together with the country → locale map,
//! the ordered regional override rules and the fallback graph. It uses a
//! singleton pattern with `OnceLock` so that every request shares the same
//! immutable data.

use crate::i18n::Locale;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Which family a locale belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageGroup {
    /// One of the 24 official EU languages
    Official,
    /// A regional language served inside a country with another default
    Regional,
}

/// Configuration for a supported locale.
#[derive(Debug, Clone, serde::Serialize)]
pub struct LanguageConfig {
    /// Short language code used in URLs and cookies (e.g., "en", "ca")
    pub code: &'static str,

    /// English name of the language (e.g., "Catalan")
    pub name: &'static str,

    /// Native name of the language (e.g., "Català")
    pub native_name: &'static str,

    /// Flag shown next to the language in pickers
    pub flag: &'static str,

    pub group: LanguageGroup,

    /// Whether this is the default locale (only one should be true)
    pub is_default: bool,
}

/// A sub-national override.
///
/// The rule matches when the country is equal and either the region code or
/// the city matches. An empty `regions` or `cities` slice means "no condition
/// of that kind".
#[derive(Debug, Clone)]
pub struct RegionalRule {
    /// ISO 3166-1 alpha-2 country code
    pub country: &'static str,

    /// ISO 3166-2 subdivision codes without the country prefix
    pub regions: &'static [&'static str],

    /// City names, compared case-insensitively
    pub cities: &'static [&'static str],

    pub locale: Locale,
}

/// Locales offered for one country in a language picker.
#[derive(Debug, Clone, serde::Serialize)]
pub struct CountryLanguages {
    pub country: &'static str,
    pub flag: &'static str,
    pub locales: Vec<Locale>,
}

/// Global locale registry singleton.
pub struct LocaleRegistry {
    languages: Vec<LanguageConfig>,
    country_to_locale: HashMap<&'static str, Locale>,
    regional_rules: Vec<RegionalRule>,
    fallbacks: HashMap<Locale, Locale>,
    by_country: Vec<CountryLanguages>,
}

/// Global registry instance (initialized lazily)
static REGISTRY: OnceLock<LocaleRegistry> = OnceLock::new();

impl LocaleRegistry {
    /// Get the global locale registry instance.
    pub fn get() -> &'static LocaleRegistry {
        REGISTRY.get_or_init(|| LocaleRegistry {
            languages: default_languages(),
            country_to_locale: default_country_map(),
            regional_rules: default_regional_rules(),
            fallbacks: default_fallbacks(),
            by_country: default_languages_by_country(),
        })
    }

    /// Get a locale configuration by its code.
    ///
    /// # Returns
    /// * `Some(&LanguageConfig)` if the code is one of the supported locales
    /// * `None` otherwise (matching is exact and case-sensitive)
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// Check if a code is one of the supported locales.
    pub fn is_supported(&self, code: &str) -> bool {
        self.get_by_code(code).is_some()
    }

    /// All supported locales, in registry order.
    pub fn list_all(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().collect()
    }

    /// All locales of one group.
    pub fn list_group(&self, group: LanguageGroup) -> Vec<&LanguageConfig> {
        self.languages
            .iter()
            .filter(|lang| lang.group == group)
            .collect()
    }

    /// Country-level default locale for an ISO country code.
    pub fn locale_for_country(&self, country: &str) -> Option<Locale> {
        self.country_to_locale.get(country).copied()
    }

    /// Regional override rules in evaluation order.
    pub fn regional_rules(&self) -> &[RegionalRule] {
        &self.regional_rules
    }

    /// The locale to serve when `locale`'s own bundle is unavailable.
    pub fn fallback_for(&self, locale: Locale) -> Option<Locale> {
        self.fallbacks.get(&locale).copied()
    }

    /// Locales grouped by country, for language pickers.
    pub fn languages_by_country(&self) -> &[CountryLanguages] {
        &self.by_country
    }
}

fn lang(
    code: &'static str,
    name: &'static str,
    native_name: &'static str,
    flag: &'static str,
    group: LanguageGroup,
) -> LanguageConfig {
    LanguageConfig {
        code,
        name,
        native_name,
        flag,
        group,
        is_default: code == "en",
    }
}

/// Default locale configurations: 24 EU official languages followed by
/// the 7 regional ones.
fn default_languages() -> Vec<LanguageConfig> {
    use LanguageGroup::{Official, Regional};

    vec![
        lang("en", "English", "English", "🇬🇧", Official),
        lang("bg", "Bulgarian", "Български", "🇧🇬", Official),
        lang("hr", "Croatian", "Hrvatski", "🇭🇷", Official),
        lang("cs", "Czech", "Čeština", "🇨🇿", Official),
        lang("da", "Danish", "Dansk", "🇩🇰", Official),
        lang("nl", "Dutch", "Nederlands", "🇳🇱", Official),
        lang("et", "Estonian", "Eesti", "🇪🇪", Official),
        lang("fi", "Finnish", "Suomi", "🇫🇮", Official),
        lang("fr", "French", "Français", "🇫🇷", Official),
        lang("de", "German", "Deutsch", "🇩🇪", Official),
        lang("el", "Greek", "Ελληνικά", "🇬🇷", Official),
        lang("hu", "Hungarian", "Magyar", "🇭🇺", Official),
        lang("ga", "Irish", "Gaeilge", "🇮🇪", Official),
        lang("it", "Italian", "Italiano", "🇮🇹", Official),
        lang("lv", "Latvian", "Latviešu", "🇱🇻", Official),
        lang("lt", "Lithuanian", "Lietuvių", "🇱🇹", Official),
        lang("mt", "Maltese", "Malti", "🇲🇹", Official),
        lang("pl", "Polish", "Polski", "🇵🇱", Official),
        lang("pt", "Portuguese", "Português", "🇵🇹", Official),
        lang("ro", "Romanian", "Română", "🇷🇴", Official),
        lang("sk", "Slovak", "Slovenčina", "🇸🇰", Official),
        lang("sl", "Slovenian", "Slovenščina", "🇸🇮", Official),
        lang("es", "Spanish", "Español", "🇪🇸", Official),
        lang("sv", "Swedish", "Svenska", "🇸🇪", Official),
        lang("ca", "Catalan", "Català", "🏴", Regional),
        lang("eu", "Basque", "Euskara", "🏴", Regional),
        lang("gl", "Galician", "Galego", "🏴", Regional),
        lang("cy", "Welsh", "Cymraeg", "🏴󠁧󠁢󠁷󠁬󠁳󠁿", Regional),
        lang("fy", "Frisian", "Frysk", "🏴", Regional),
        lang("se", "Sami", "Sámegiella", "🏳️", Regional),
        lang("co", "Corsican", "Corsu", "🏴", Regional),
    ]
}

/// ISO 3166-1 alpha-2 country code → primary locale.
fn default_country_map() -> HashMap<&'static str, Locale> {
    [
        // EU
        ("AT", "de"),
        ("BE", "nl"), // Dutch-speaking majority
        ("BG", "bg"),
        ("HR", "hr"),
        ("CY", "el"),
        ("CZ", "cs"),
        ("DK", "da"),
        ("EE", "et"),
        ("FI", "fi"),
        ("FR", "fr"),
        ("DE", "de"),
        ("GR", "el"),
        ("HU", "hu"),
        ("IE", "en"),
        ("IT", "it"),
        ("LV", "lv"),
        ("LT", "lt"),
        ("LU", "fr"),
        ("MT", "mt"),
        ("NL", "nl"),
        ("PL", "pl"),
        ("PT", "pt"),
        ("RO", "ro"),
        ("SK", "sk"),
        ("SI", "sl"),
        ("ES", "es"),
        ("SE", "sv"),
        // Non-EU Europe
        ("GB", "en"),
        ("CH", "de"),
        ("NO", "en"), // Norwegian is not supported
        ("IS", "en"),
        ("LI", "de"),
        ("AD", "ca"),
        ("MC", "fr"),
        ("SM", "it"),
        ("VA", "it"),
    ]
    .into_iter()
    .map(|(country, code)| (country, Locale::from_static(code)))
    .collect()
}

/// Regional override rules. Order matters: the first matching rule wins.
fn default_regional_rules() -> Vec<RegionalRule> {
    fn rule(
        country: &'static str,
        regions: &'static [&'static str],
        cities: &'static [&'static str],
        code: &'static str,
    ) -> RegionalRule {
        RegionalRule {
            country,
            regions,
            cities,
            locale: Locale::from_static(code),
        }
    }

    vec![
        // Spain: Catalonia, Valencia, Balearic Islands
        rule("ES", &["CT", "VC", "IB"], &[], "ca"),
        rule(
            "ES",
            &[],
            &[
                "Barcelona",
                "Tarragona",
                "Girona",
                "Lleida",
                "Valencia",
                "Alicante",
                "Castellón",
                "Palma",
                "Ibiza",
            ],
            "ca",
        ),
        // Spain: Basque Country, Navarra
        rule("ES", &["PV", "NC"], &[], "eu"),
        rule(
            "ES",
            &[],
            &[
                "Bilbao",
                "San Sebastián",
                "Vitoria-Gasteiz",
                "Pamplona",
                "Donostia",
            ],
            "eu",
        ),
        // Spain: Galicia
        rule("ES", &["GA"], &[], "gl"),
        rule(
            "ES",
            &[],
            &[
                "A Coruña",
                "Vigo",
                "Santiago de Compostela",
                "Ourense",
                "Lugo",
                "Pontevedra",
                "Ferrol",
            ],
            "gl",
        ),
        // United Kingdom: Wales
        rule("GB", &["WLS"], &[], "cy"),
        rule(
            "GB",
            &[],
            &[
                "Cardiff",
                "Swansea",
                "Newport",
                "Wrexham",
                "Bangor",
                "Aberystwyth",
                "Carmarthen",
                "Llandudno",
            ],
            "cy",
        ),
        // Netherlands: Friesland
        rule("NL", &["FR"], &[], "fy"),
        rule(
            "NL",
            &[],
            &[
                "Leeuwarden",
                "Ljouwert",
                "Drachten",
                "Heerenveen",
                "Sneek",
                "Harlingen",
            ],
            "fy",
        ),
        // Finland: Lapland
        rule("FI", &["19"], &[], "se"),
        rule(
            "FI",
            &[],
            &["Rovaniemi", "Inari", "Utsjoki", "Enontekiö", "Sodankylä"],
            "se",
        ),
        // Sweden: Norrbotten, Västerbotten, Jämtland
        rule("SE", &["BD", "AC", "Z"], &[], "se"),
        rule(
            "SE",
            &[],
            &["Kiruna", "Gällivare", "Jokkmokk", "Arvidsjaur"],
            "se",
        ),
        // Norway: Troms og Finnmark, Nordland
        rule("NO", &["54", "55", "18"], &[], "se"),
        rule(
            "NO",
            &[],
            &["Tromsø", "Alta", "Hammerfest", "Kautokeino", "Karasjok"],
            "se",
        ),
        // France: Corsica
        rule("FR", &["94", "2A", "2B"], &[], "co"),
        rule(
            "FR",
            &[],
            &[
                "Ajaccio",
                "Bastia",
                "Corte",
                "Porto-Vecchio",
                "Calvi",
                "Bonifacio",
            ],
            "co",
        ),
    ]
}

/// Locale → locale whose bundle is served when the first one is missing.
fn default_fallbacks() -> HashMap<Locale, Locale> {
    [
        ("ca", "es"),
        ("eu", "es"),
        ("gl", "es"),
        ("cy", "en"),
        ("fy", "nl"),
        ("se", "fi"),
        ("co", "fr"),
        ("ga", "en"),
        ("mt", "en"),
    ]
    .into_iter()
    .map(|(from, to)| (Locale::from_static(from), Locale::from_static(to)))
    .collect()
}

fn default_languages_by_country() -> Vec<CountryLanguages> {
    const TABLE: &[(&str, &str, &[&str])] = &[
        ("Ireland", "🇮🇪", &["en", "ga"]),
        ("Spain", "🇪🇸", &["es", "ca", "eu", "gl"]),
        ("France", "🇫🇷", &["fr", "co"]),
        ("Germany", "🇩🇪", &["de"]),
        ("Italy", "🇮🇹", &["it"]),
        ("Netherlands", "🇳🇱", &["nl", "fy"]),
        ("Portugal", "🇵🇹", &["pt"]),
        ("Poland", "🇵🇱", &["pl"]),
        ("Greece", "🇬🇷", &["el"]),
        ("Romania", "🇷🇴", &["ro"]),
        ("Hungary", "🇭🇺", &["hu"]),
        ("Czech Republic", "🇨🇿", &["cs"]),
        ("Slovakia", "🇸🇰", &["sk"]),
        ("Bulgaria", "🇧🇬", &["bg"]),
        ("Croatia", "🇭🇷", &["hr"]),
        ("Slovenia", "🇸🇮", &["sl"]),
        ("Finland", "🇫🇮", &["fi", "se"]),
        ("Sweden", "🇸🇪", &["sv"]),
        ("Denmark", "🇩🇰", &["da"]),
        ("Wales", "🏴󠁧󠁢󠁷󠁬󠁳󠁿", &["cy"]),
        ("Estonia", "🇪🇪", &["et"]),
        ("Latvia", "🇱🇻", &["lv"]),
        ("Lithuania", "🇱🇹", &["lt"]),
        ("Malta", "🇲🇹", &["mt"]),
    ];

    TABLE
        .iter()
        .map(|&(country, flag, codes)| CountryLanguages {
            country,
            flag,
            locales: codes.iter().map(|code| Locale::from_static(code)).collect(),
        })
        .collect()
}
