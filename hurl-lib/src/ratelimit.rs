use crate::model::RequestForm;

/// Policy point consulted before a submission is processed.
pub trait RateLimiter: Send + Sync {
    fn is_limited(&self, form: &RequestForm) -> bool;
}

/// Never limits anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unlimited;

impl RateLimiter for Unlimited {
    fn is_limited(&self, _form: &RequestForm) -> bool {
        false
    }
}
