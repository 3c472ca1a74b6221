use crate::client::ExecutionError;
use crate::store::StoreError;
use std::fmt;
use std::io;

/// Shown when the target URL is refused by the validator.
pub const INVALID_TARGET_MESSAGE: &str = "That's... wait.. what?!";
/// Shown when the rate limiter turns a submission away.
pub const RATE_LIMITED_MESSAGE: &str = "Calm down and try my margarita!";

#[derive(Debug)]
pub enum HurlError {
    Io(io::Error),
    InvalidTarget(String),
    Validation(String),
    RateLimited,
    Execution(ExecutionError),
    Store(StoreError),
    NotFound(String),
    Generic(String),
}

impl HurlError {
    /// Message safe to place in a browser-rendered error payload.
    pub fn user_message(&self) -> String {
        match self {
            HurlError::InvalidTarget(_) => INVALID_TARGET_MESSAGE.to_string(),
            HurlError::RateLimited => RATE_LIMITED_MESSAGE.to_string(),
            other => html_escape::encode_quoted_attribute(&other.to_string()).into_owned(),
        }
    }
}

impl fmt::Display for HurlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HurlError::Io(err) => write!(f, "IO error: {err}"),
            HurlError::InvalidTarget(url) => write!(f, "Refusing to request URL: {url}"),
            HurlError::Validation(msg) => write!(f, "Validation error: {msg}"),
            HurlError::RateLimited => write!(f, "Rate limit exceeded"),
            HurlError::Execution(err) => write!(f, "{err}"),
            HurlError::Store(err) => write!(f, "{err}"),
            HurlError::NotFound(id) => write!(f, "Not found: {id}"),
            HurlError::Generic(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for HurlError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HurlError::Io(err) => Some(err),
            HurlError::Execution(err) => Some(err),
            HurlError::Store(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for HurlError {
    fn from(err: io::Error) -> Self {
        HurlError::Io(err)
    }
}

impl From<ExecutionError> for HurlError {
    fn from(err: ExecutionError) -> Self {
        HurlError::Execution(err)
    }
}

impl From<StoreError> for HurlError {
    fn from(err: StoreError) -> Self {
        HurlError::Store(err)
    }
}

impl From<String> for HurlError {
    fn from(msg: String) -> Self {
        HurlError::Generic(msg)
    }
}

impl From<&str> for HurlError {
    fn from(msg: &str) -> Self {
        HurlError::Generic(msg.to_string())
    }
}
