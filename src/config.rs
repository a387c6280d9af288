use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    // Environment: "development" or "production"
    pub environment: String,

    // Web server
    pub port: u16,

    // Translation bundles
    pub locales_dir: String,
    pub locales_base_url: Option<String>,
    pub preload_translations: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            environment: std::env::var("ENVIRONMENT")
                .unwrap_or_else(|_| "development".to_string()),

            port: match std::env::var("PORT") {
                Ok(port) => port
                    .parse()
                    .with_context(|| format!("PORT must be a valid port number, got '{}'", port))?,
                Err(_) => 8080,
            },

            // Bundles are read from disk unless a base URL is configured
            locales_dir: std::env::var("LOCALES_DIR").unwrap_or_else(|_| "locales".to_string()),
            locales_base_url: std::env::var("LOCALES_BASE_URL")
                .ok()
                .filter(|url| !url.trim().is_empty()),

            preload_translations: std::env::var("PRELOAD_TRANSLATIONS")
                .ok()
                .map(|v| matches!(v.trim().to_lowercase().as_str(), "1" | "true" | "yes"))
                .unwrap_or(false),
        })
    }
}
