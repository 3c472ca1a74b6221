use hurl_lib::HurlError;

/// Exit codes for the hurl CLI
/// Following standard Unix/POSIX conventions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// General/unspecified error
    GeneralError = 1,
    /// Refused target or malformed submission
    InvalidRequest = 3,
    /// Store or IO error
    StoreError = 4,
    /// Hurl or view not found
    NotFoundError = 5,
    /// Network or HTTP error
    NetworkError = 6,
    /// Submission turned away by the rate limiter
    RateLimited = 7,
}

impl ExitCode {
    pub fn code(&self) -> i32 {
        *self as i32
    }
}

impl From<&HurlError> for ExitCode {
    fn from(error: &HurlError) -> Self {
        match error {
            HurlError::Io(_) | HurlError::Store(_) => ExitCode::StoreError,
            HurlError::InvalidTarget(_) | HurlError::Validation(_) => ExitCode::InvalidRequest,
            HurlError::RateLimited => ExitCode::RateLimited,
            HurlError::Execution(_) => ExitCode::NetworkError,
            HurlError::NotFound(_) => ExitCode::NotFoundError,
            HurlError::Generic(_) => ExitCode::GeneralError,
        }
    }
}

impl From<&Box<dyn std::error::Error>> for ExitCode {
    fn from(error: &Box<dyn std::error::Error>) -> Self {
        error
            .downcast_ref::<HurlError>()
            .map(ExitCode::from)
            .unwrap_or(ExitCode::GeneralError)
    }
}
