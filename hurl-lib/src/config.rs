use std::path::PathBuf;

/// Hostname this service is published under. Requests aimed back at it are refused.
pub const DEFAULT_WEBSITE: &str = "hurl.it";
pub const DEFAULT_STORE_PATH: &str = "db";

const WEBSITE_VAR: &str = "WEBSITE";
const DEBUG_VAR: &str = "DEBUG";
const STORE_PATH_VAR: &str = "HURL_DB";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HurlConfig {
    pub website: String,
    pub debug: bool,
    pub store_path: PathBuf,
}

impl Default for HurlConfig {
    fn default() -> Self {
        Self {
            website: DEFAULT_WEBSITE.to_string(),
            debug: false,
            store_path: PathBuf::from(DEFAULT_STORE_PATH),
        }
    }
}

impl HurlConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup. Unset and empty values fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let defaults = Self::default();

        Self {
            website: get(WEBSITE_VAR).unwrap_or(defaults.website),
            debug: get(DEBUG_VAR).is_some(),
            store_path: get(STORE_PATH_VAR)
                .map(PathBuf::from)
                .unwrap_or(defaults.store_path),
        }
    }

    pub fn with_website(mut self, website: impl Into<String>) -> Self {
        self.website = website.into();
        self
    }

    pub fn with_store_path(mut self, store_path: impl Into<PathBuf>) -> Self {
        self.store_path = store_path.into();
        self
    }
}
