//! Where translation bundles come from.
//!
//! Bundles are addressed by locale code: `<code>.json` in a directory, under
//! a base URL, or in memory.

use crate::i18n::{Locale, TranslationBundle};
use futures::future::{BoxFuture, FutureExt};
use std::collections::HashMap;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BundleError {
    #[error("No bundle for locale '{0}'")]
    NotFound(Locale),

    #[error("Failed to read bundle for '{locale}': {source}")]
    Io {
        locale: Locale,
        #[source]
        source: io::Error,
    },

    #[error("Bundle request for '{locale}' returned {status}")]
    Status {
        locale: Locale,
        status: reqwest::StatusCode,
    },

    #[error("Bundle request for '{locale}' failed: {source}")]
    Http {
        locale: Locale,
        #[source]
        source: reqwest::Error,
    },

    #[error("Invalid bundle for '{locale}': {source}")]
    Parse {
        locale: Locale,
        #[source]
        source: serde_json::Error,
    },
}

/// Fetches the bundle of a locale.
pub trait BundleSource: Send + Sync {
    fn fetch(&self, locale: Locale) -> BoxFuture<'_, Result<TranslationBundle, BundleError>>;
}

/// Reads `<dir>/<code>.json` from disk.
#[derive(Debug, Clone)]
pub struct FsBundleSource {
    dir: PathBuf,
}

impl FsBundleSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl BundleSource for FsBundleSource {
    fn fetch(&self, locale: Locale) -> BoxFuture<'_, Result<TranslationBundle, BundleError>> {
        let path = self.dir.join(format!("{}.json", locale));

        async move {
            let content = match tokio::fs::read_to_string(&path).await {
                Ok(content) => content,
                Err(e) if e.kind() == io::ErrorKind::NotFound => {
                    return Err(BundleError::NotFound(locale))
                }
                Err(source) => return Err(BundleError::Io { locale, source }),
            };

            TranslationBundle::from_json(&content)
                .map_err(|source| BundleError::Parse { locale, source })
        }
        .boxed()
    }
}

/// Fetches `<base_url>/<code>.json` over HTTP.
#[derive(Debug, Clone)]
pub struct HttpBundleSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpBundleSource {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }
}

impl BundleSource for HttpBundleSource {
    fn fetch(&self, locale: Locale) -> BoxFuture<'_, Result<TranslationBundle, BundleError>> {
        let url = format!("{}/{}.json", self.base_url, locale);

        async move {
            let response = self
                .client
                .get(&url)
                .send()
                .await
                .map_err(|source| BundleError::Http { locale, source })?;

            let status = response.status();
            if status == reqwest::StatusCode::NOT_FOUND {
                return Err(BundleError::NotFound(locale));
            }
            if !status.is_success() {
                return Err(BundleError::Status { locale, status });
            }

            let body = response
                .text()
                .await
                .map_err(|source| BundleError::Http { locale, source })?;

            TranslationBundle::from_json(&body)
                .map_err(|source| BundleError::Parse { locale, source })
        }
        .boxed()
    }
}

/// In-memory bundles, for embedding and tests.
#[derive(Debug, Clone, Default)]
pub struct StaticBundleSource {
    bundles: HashMap<Locale, TranslationBundle>,
}

impl StaticBundleSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bundle(mut self, locale: Locale, bundle: TranslationBundle) -> Self {
        self.bundles.insert(locale, bundle);
        self
    }
}

impl BundleSource for StaticBundleSource {
    fn fetch(&self, locale: Locale) -> BoxFuture<'_, Result<TranslationBundle, BundleError>> {
        let result = self
            .bundles
            .get(&locale)
            .cloned()
            .ok_or(BundleError::NotFound(locale));

        futures::future::ready(result).boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use wiremock::{
        matchers::{method, path},
        Mock, MockServer, ResponseTemplate,
    };

    fn locale(code: &str) -> Locale {
        Locale::from_code(code).unwrap()
    }

    // ==================== FsBundleSource Tests ====================

    #[tokio::test]
    async fn test_fs_source_reads_bundle() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("fr.json"), r#"{"nav":{"home":"Accueil"}}"#).unwrap();

        let bundle = FsBundleSource::new(dir.path())
            .fetch(locale("fr"))
            .await
            .expect("Should load");
        assert_eq!(bundle.get_value("nav.home"), Some("Accueil"));
    }

    #[tokio::test]
    async fn test_fs_source_missing_file() {
        let dir = TempDir::new().unwrap();

        let result = FsBundleSource::new(dir.path()).fetch(locale("ca")).await;
        assert!(matches!(result, Err(BundleError::NotFound(l)) if l.code() == "ca"));
    }

    #[tokio::test]
    async fn test_fs_source_invalid_json() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("de.json"), "{ not json").unwrap();

        let result = FsBundleSource::new(dir.path()).fetch(locale("de")).await;
        assert!(matches!(result, Err(BundleError::Parse { .. })));
    }

    // ==================== HttpBundleSource Tests ====================

    #[tokio::test]
    async fn test_http_source_fetches_bundle() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/locales/nl.json"))
            .respond_with(
                ResponseTemplate::new(200).set_body_string(r#"{"hero":{"headline":"Groei"}}"#),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let source = HttpBundleSource::new(
            reqwest::Client::new(),
            format!("{}/locales/", mock_server.uri()),
        );
        let bundle = source.fetch(locale("nl")).await.expect("Should load");
        assert_eq!(bundle.get_value("hero.headline"), Some("Groei"));
    }

    #[tokio::test]
    async fn test_http_source_not_found() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/eu.json"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let source = HttpBundleSource::new(reqwest::Client::new(), mock_server.uri());
        let result = source.fetch(locale("eu")).await;
        assert!(matches!(result, Err(BundleError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_http_source_server_error() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/pt.json"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&mock_server)
            .await;

        let source = HttpBundleSource::new(reqwest::Client::new(), mock_server.uri());
        let err = source.fetch(locale("pt")).await.unwrap_err();
        assert!(matches!(err, BundleError::Status { status, .. } if status.as_u16() == 503));
        assert!(err.to_string().contains("503"));
    }

    #[tokio::test]
    async fn test_http_source_invalid_body() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/it.json"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&mock_server)
            .await;

        let source = HttpBundleSource::new(reqwest::Client::new(), mock_server.uri());
        let result = source.fetch(locale("it")).await;
        assert!(matches!(result, Err(BundleError::Parse { .. })));
    }

    // ==================== StaticBundleSource Tests ====================

    #[tokio::test]
    async fn test_static_source() {
        let source = StaticBundleSource::new().with_bundle(
            Locale::DEFAULT,
            TranslationBundle::from_json(r#"{"a":"b"}"#).unwrap(),
        );

        assert!(source.fetch(Locale::DEFAULT).await.is_ok());
        assert!(matches!(
            source.fetch(locale("sv")).await,
            Err(BundleError::NotFound(_))
        ));
    }
}
