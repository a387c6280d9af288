//! Locale resolution middleware.
//!
//! Every request outside the asset and API prefixes is either redirected to
//! a locale-prefixed URL or passed on with a [`LocaleContext`] in its
//! extensions. When the URL names a locale the visitor has not stored yet,
//! the response carries a cookie remembering it.

use crate::i18n::{cookie, geo, path, preference, GeoSignal, Locale};
use axum::{
    extract::Request,
    http::{header, HeaderMap, HeaderValue, StatusCode, Uri},
    middleware::Next,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::{debug, warn};

/// Paths under this prefix are private assets (`/_astro/...`, `/_image`).
pub const PRIVATE_PREFIX: &str = "/_";

pub const API_PREFIX: &str = "/api/";

/// Where the locale detected from geo data came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeoInfo {
    pub country: Option<String>,
    pub city: Option<String>,
    pub region_code: Option<String>,
    pub detected: Locale,
}

/// Per-request locale information handed to handlers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocaleContext {
    /// The locale the page is served in
    pub locale: Locale,
    pub url_locale: Option<Locale>,
    pub cookie_locale: Option<Locale>,
    pub geo: GeoInfo,
}

/// What the middleware does with a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// Hand the request to the next handler untouched
    Skip,
    /// Send a 302 to this location
    Redirect(String),
    /// Serve the request in the given context
    Continue(LocaleContext),
}

/// Static assets, API routes and anything that looks like a file.
pub fn should_skip(path: &str) -> bool {
    path.starts_with(PRIVATE_PREFIX) || path.starts_with(API_PREFIX) || path.contains('.')
}

/// Decide how to handle a request from its URI, headers and geo signal.
pub fn decide(uri: &Uri, headers: &HeaderMap, signal: &GeoSignal) -> Decision {
    let request_path = uri.path();
    if should_skip(request_path) {
        return Decision::Skip;
    }

    let url_locale = path::extract_locale(request_path);
    let cookie_locale = cookie_header(headers).and_then(|value| cookie::decode(&value));
    let geo_locale = geo::detect(signal);
    let accept_header = headers
        .get(header::ACCEPT_LANGUAGE)
        .and_then(|value| value.to_str().ok());

    let locale = preference::resolve(url_locale, cookie_locale, geo_locale, accept_header);

    if request_path == "/" {
        return Decision::Redirect(format!("/{}/", locale));
    }

    if url_locale.is_none() {
        let query = uri.query().map(|q| format!("?{}", q)).unwrap_or_default();
        return Decision::Redirect(format!("/{}{}{}", locale, request_path, query));
    }

    Decision::Continue(LocaleContext {
        locale,
        url_locale,
        cookie_locale,
        geo: GeoInfo {
            country: signal.country.clone(),
            city: signal.city.clone(),
            region_code: signal.region_code.clone(),
            detected: geo_locale,
        },
    })
}

/// All `Cookie` headers joined, since HTTP/2 clients may split them.
fn cookie_header(headers: &HeaderMap) -> Option<String> {
    let values: Vec<&str> = headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .collect();

    if values.is_empty() {
        None
    } else {
        Some(values.join("; "))
    }
}

/// Axum middleware applying [`decide`] to each request.
///
/// A [`GeoSignal`] placed in the request extensions by an outer layer takes
/// precedence over the edge geo headers.
pub async fn locale_middleware(mut request: Request, next: Next) -> Response {
    let signal = request
        .extensions()
        .get::<GeoSignal>()
        .cloned()
        .unwrap_or_else(|| GeoSignal::from_headers(request.headers()));

    let context = match decide(request.uri(), request.headers(), &signal) {
        Decision::Skip => return next.run(request).await,
        Decision::Redirect(location) => {
            debug!("Redirecting {} to {}", request.uri().path(), location);
            return found(&location);
        }
        Decision::Continue(context) => context,
    };

    let remember = context
        .url_locale
        .filter(|&url_locale| Some(url_locale) != context.cookie_locale);

    request.extensions_mut().insert(context);
    let mut response = next.run(request).await;

    if let Some(locale) = remember {
        match HeaderValue::from_str(&cookie::encode(locale)) {
            Ok(value) => {
                response.headers_mut().append(header::SET_COOKIE, value);
            }
            Err(e) => warn!("Failed to build locale cookie for {}: {}", locale, e),
        }
    }

    response
}

/// A 302 Found response. Axum's `Redirect::temporary` is a 307.
fn found(location: &str) -> Response {
    match HeaderValue::from_str(location) {
        Ok(value) => (StatusCode::FOUND, [(header::LOCATION, value)]).into_response(),
        Err(e) => {
            warn!("Invalid redirect location {}: {}", location, e);
            StatusCode::BAD_REQUEST.into_response()
        }
    }
}
