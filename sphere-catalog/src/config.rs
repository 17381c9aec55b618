//! Backend connection configuration

use anyhow::Context;

/// Connection settings for the hosted backend.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Project base URL, without a trailing slash (e.g. `https://xyz.supabase.co`).
    pub base_url: String,
    /// Public (anon) API key, sent as both `apikey` and bearer token.
    pub api_key: String,
}

impl CatalogConfig {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            api_key: api_key.into(),
        }
    }

    /// Load settings from `SPHERE_BASE_URL` / `SPHERE_API_KEY`, reading a
    /// `.env` file first when one is present.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let base_url =
            std::env::var("SPHERE_BASE_URL").context("SPHERE_BASE_URL is not set")?;
        let api_key = std::env::var("SPHERE_API_KEY").context("SPHERE_API_KEY is not set")?;

        Ok(Self::new(base_url, api_key))
    }
}
