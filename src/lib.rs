//! Locale resolution and translation loading for the Growfolio site.
//!
//! Each request is resolved to one of 31 locales from its URL prefix, the
//! stored preference cookie, the `Accept-Language` header and the edge geo
//! signal, in that order. Translation bundles are loaded with a bounded
//! fallback chain and cached for the lifetime of the process.

pub mod config;
pub mod i18n;
pub mod middleware;
pub mod server;
