//! Connection settings for the hosted backend service.

use anyhow::Context;
use tracing::info;

pub const DEFAULT_SUPABASE_URL: &str = "http://localhost:54321";
pub const DEFAULT_SITE_URL: &str = "http://localhost:8080";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    pub url: String,
    pub anon_key: String,
    pub site_url: String,
}

impl BackendConfig {
    pub fn new(url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        Self { url: url.into(), anon_key: anon_key.into(), site_url: DEFAULT_SITE_URL.to_string() }
    }

    pub fn from_env() -> anyhow::Result<Self> {
        let url = std::env::var("SUPABASE_URL").unwrap_or_else(|_| {
            info!("SUPABASE_URL not set, using default: {DEFAULT_SUPABASE_URL}");
            DEFAULT_SUPABASE_URL.to_string()
        });
        let anon_key = std::env::var("SUPABASE_ANON_KEY").context("SUPABASE_ANON_KEY is not set")?;
        let site_url = std::env::var("SITE_URL").unwrap_or(DEFAULT_SITE_URL.to_string());
        Ok(Self { url: url.trim_end_matches('/').to_string(), anon_key, site_url })
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.url.trim_end_matches('/'), path.trim_start_matches('/'))
    }

    /// Where the confirmation email of a new account sends the user.
    pub fn signup_redirect_url(&self) -> String {
        format!("{}/profile", self.site_url.trim_end_matches('/'))
    }
}
