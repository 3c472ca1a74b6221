use crate::headers::HeaderSet;
use crate::model::AuthScheme;
use base64::{engine::general_purpose::STANDARD, Engine as _};

pub struct Credentials<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

pub fn basic_token(username: &str, password: &str) -> String {
    STANDARD.encode(format!("{username}:{password}"))
}

/// Adds the header for `scheme`. Schemes without an encoding leave `headers` untouched.
pub fn apply_auth(scheme: AuthScheme, credentials: &Credentials, headers: HeaderSet) -> HeaderSet {
    match scheme {
        AuthScheme::Basic => headers.set(
            reqwest::header::AUTHORIZATION.as_str(),
            format!(
                "Basic {}",
                basic_token(credentials.username, credentials.password)
            ),
        ),
        AuthScheme::None => headers,
    }
}
