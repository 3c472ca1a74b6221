use crate::config::HurlConfig;
use reqwest::Url;

const VALID_SCHEMES: [&str; 2] = ["http", "https"];

/// Decides whether a URL may be requested at all.
///
/// Only the scheme and a self-reference to our own host are checked.
/// Private and internal addresses are not filtered here.
#[derive(Debug, Clone)]
pub struct TargetValidator {
    website: String,
}

impl TargetValidator {
    pub fn new(config: &HurlConfig) -> Self {
        Self {
            website: config.website.clone(),
        }
    }

    pub fn is_invalid(&self, url: &str) -> bool {
        let Ok(parsed) = Url::parse(url) else {
            return true;
        };

        if !VALID_SCHEMES.contains(&parsed.scheme()) {
            return true;
        }

        parsed
            .host_str()
            .is_some_and(|host| host.eq_ignore_ascii_case(&self.website))
    }
}
