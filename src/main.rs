use anyhow::{Context, Result};
use growfolio_locale::config::Config;
use growfolio_locale::i18n::{
    BundleSource, FsBundleSource, HttpBundleSource, Locale, TranslationLoader,
};
use growfolio_locale::server::{build_router, AppState};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("growfolio_locale=info".parse()?),
        )
        .init();

    let config = Config::from_env()?;
    info!("Starting locale service ({})", config.environment);

    let source: Arc<dyn BundleSource> = match &config.locales_base_url {
        Some(base_url) => {
            info!("Loading translation bundles from {}", base_url);
            Arc::new(HttpBundleSource::new(reqwest::Client::new(), base_url.as_str()))
        }
        None => {
            info!("Loading translation bundles from {}/", config.locales_dir);
            Arc::new(FsBundleSource::new(&config.locales_dir))
        }
    };

    let loader = Arc::new(TranslationLoader::new(source));
    if config.preload_translations {
        loader.preload(&Locale::all()).await;
        info!("✓ Preloaded {} translation bundles", loader.cache().len());
    }

    let app = build_router(AppState { loader });

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("✓ Listening on {}", addr);

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
