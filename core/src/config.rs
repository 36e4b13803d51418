//! Target service configuration.
//!
//! Resolved once at startup and handed to every client, so nothing below
//! this module reads the process environment.

pub const BASE_URL_ENV: &str = "BASE_URL";
pub const DEFAULT_BASE_URL: &str = "https://fakerestapi.azurewebsites.net";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub base_url: String,
}

impl Config {
    /// Load `.env` if present, then resolve `BASE_URL`.
    pub fn from_env() -> Self {
        // A missing `.env` is the normal case.
        let _ = dotenvy::dotenv();
        Self::resolve(std::env::var(BASE_URL_ENV).ok())
    }

    /// Unset or blank values fall back to `DEFAULT_BASE_URL`.
    pub fn resolve(value: Option<String>) -> Self {
        match value.as_deref().map(str::trim) {
            Some(url) if !url.is_empty() => Self::with_base_url(url),
            _ => Self::with_base_url(DEFAULT_BASE_URL),
        }
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }
}
