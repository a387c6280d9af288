//! HTTP routes served behind the locale middleware.

use crate::i18n::{
    path, CountryLanguages, LanguageConfig, LanguageGroup, Locale, LocaleRegistry,
    MetricsReport, TranslationLoader,
};
use crate::middleware::{locale_middleware, GeoInfo, LocaleContext};
use axum::{
    extract::State,
    http::{StatusCode, Uri},
    middleware,
    response::{IntoResponse, Json, Response},
    routing::get,
    Extension, Router,
};
use serde::Serialize;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub loader: Arc<TranslationLoader>,
}

/// Link to the current page in another locale.
#[derive(Debug, Serialize)]
pub struct Alternate {
    pub locale: Locale,
    pub native_name: &'static str,
    pub href: String,
}

/// What a page handler hands to the renderer.
#[derive(Debug, Serialize)]
pub struct PageView {
    pub locale: Locale,
    /// Request path without its locale prefix
    pub path: String,
    pub title: String,
    pub tagline: String,
    pub alternates: Vec<Alternate>,
    pub geo: GeoInfo,
}

#[derive(Debug, Serialize)]
pub struct LocalesView {
    pub default: Locale,
    pub locales: Vec<&'static LanguageConfig>,
    pub official: Vec<&'static str>,
    pub regional: Vec<&'static str>,
    pub by_country: &'static [CountryLanguages],
}

/// Build the application router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/locales", get(list_locales))
        .route("/api/metrics", get(metrics))
        .route("/:locale", get(page))
        .route("/:locale/", get(page))
        .route("/:locale/*rest", get(page))
        .fallback(not_found)
        .layer(middleware::from_fn(locale_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn list_locales() -> Json<LocalesView> {
    let registry = LocaleRegistry::get();
    let codes = |group: LanguageGroup| -> Vec<&'static str> {
        registry
            .list_group(group)
            .into_iter()
            .map(|lang| lang.code)
            .collect()
    };

    Json(LocalesView {
        default: Locale::DEFAULT,
        locales: registry.list_all(),
        official: codes(LanguageGroup::Official),
        regional: codes(LanguageGroup::Regional),
        by_country: registry.languages_by_country(),
    })
}

async fn metrics(State(state): State<AppState>) -> Json<MetricsReport> {
    Json(state.loader.metrics().report())
}

async fn page(
    State(state): State<AppState>,
    context: Option<Extension<LocaleContext>>,
    uri: Uri,
) -> Response {
    // Asset-like and API paths reach this route without a locale context
    let Some(Extension(context)) = context else {
        return not_found().await.into_response();
    };

    let tr = state.loader.translator(context.locale).await;
    let supported = Locale::all();

    let view = PageView {
        locale: context.locale,
        path: path::without_locale(uri.path()),
        title: tr.t("meta.title"),
        tagline: tr.t_with("hero.tagline", &[("count", &supported.len())]),
        alternates: supported
            .into_iter()
            .map(|locale| Alternate {
                locale,
                native_name: locale.native_name(),
                href: path::with_locale(&uri, locale),
            })
            .collect(),
        geo: context.geo,
    };

    Json(view).into_response()
}

async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "Not Found")
}
