use std::{env, time::Duration};

pub const DEFAULT_API_URL: &str = "http://localhost:8080";
pub const DEFAULT_SEARCH_DEBOUNCE_MS: u64 = 300;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_url: String,
    pub search_debounce: Duration,
    pub user: Option<String>,
    pub password: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_url = lookup("STOREFRONT_API_URL")
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let api_url = normalize_api_url(&api_url)?;
        let debounce_ms = lookup("STOREFRONT_SEARCH_DEBOUNCE_MS")
            .and_then(|ms| ms.parse::<u64>().ok())
            .unwrap_or(DEFAULT_SEARCH_DEBOUNCE_MS);
        Ok(Self {
            api_url,
            search_debounce: Duration::from_millis(debounce_ms),
            user: lookup("STOREFRONT_USER"),
            password: lookup("STOREFRONT_PASSWORD"),
        })
    }

    /// Replaces the backend URL, applying the same checks as `from_env`.
    pub fn set_api_url(&mut self, raw: &str) -> anyhow::Result<()> {
        self.api_url = normalize_api_url(raw)?;
        Ok(())
    }

    pub fn with_api_url(api_url: impl Into<String>) -> Self {
        let api_url: String = api_url.into();
        Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            ..Self::default()
        }
    }
}

/// Trims the URL and its trailing slashes; anything but http(s) is rejected.
pub fn normalize_api_url(raw: &str) -> anyhow::Result<String> {
    let url = raw.trim();
    if !url.starts_with("http://") && !url.starts_with("https://") {
        anyhow::bail!("backend URL must be an http(s) URL, got {url:?}");
    }
    Ok(url.trim_end_matches('/').to_string())
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            search_debounce: Duration::from_millis(DEFAULT_SEARCH_DEBOUNCE_MS),
            user: None,
            password: None,
        }
    }
}
