use crate::client::{RequestExecutor, Transport};
use crate::config::HurlConfig;
use crate::core::error::HurlError;
use crate::formatter;
use crate::model::{RequestForm, RequestSpec, Snapshot, ViewArtifacts};
use crate::ratelimit::{RateLimiter, Unlimited};
use crate::store::{KeyValueStore, SnapshotStore};
use crate::validator::TargetValidator;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    pub header: String,
    pub body: String,
    pub request: String,
    pub hurl_id: String,
    pub view_id: String,
}

/// The payload handed back to whoever submitted the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SubmitResponse {
    Success(Submission),
    Error { error: String },
}

impl SubmitResponse {
    pub fn from_error(error: &HurlError) -> Self {
        SubmitResponse::Error {
            error: error.user_message(),
        }
    }
}

impl From<Result<Submission, HurlError>> for SubmitResponse {
    fn from(result: Result<Submission, HurlError>) -> Self {
        match result {
            Ok(submission) => SubmitResponse::Success(submission),
            Err(error) => SubmitResponse::from_error(&error),
        }
    }
}

pub struct HurlService<S: KeyValueStore, T: Transport, R: RateLimiter = Unlimited> {
    validator: TargetValidator,
    executor: RequestExecutor<T>,
    store: SnapshotStore<S>,
    limiter: R,
}

impl<S: KeyValueStore, T: Transport> HurlService<S, T, Unlimited> {
    pub fn new(config: &HurlConfig, store: S, transport: T) -> Self {
        Self {
            validator: TargetValidator::new(config),
            executor: RequestExecutor::new(transport),
            store: SnapshotStore::new(store),
            limiter: Unlimited,
        }
    }
}

impl<S: KeyValueStore, T: Transport, R: RateLimiter> HurlService<S, T, R> {
    pub fn with_rate_limiter<L: RateLimiter>(self, limiter: L) -> HurlService<S, T, L> {
        HurlService {
            validator: self.validator,
            executor: self.executor,
            store: self.store,
            limiter,
        }
    }

    pub fn store(&self) -> &SnapshotStore<S> {
        &self.store
    }

    /// Handles one submission. Failures become an error payload, never a panic.
    pub async fn submit(&self, form: RequestForm) -> SubmitResponse {
        self.try_submit(form).await.into()
    }

    pub async fn try_submit(&self, form: RequestForm) -> Result<Submission, HurlError> {
        if self.limiter.is_limited(&form) {
            return Err(HurlError::RateLimited);
        }

        let spec = RequestSpec::from_form(form)?;
        if self.validator.is_invalid(&spec.url) {
            return Err(HurlError::InvalidTarget(spec.url));
        }

        let exchange = self.executor.execute(&spec).await?;

        let artifacts = ViewArtifacts {
            header: formatter::format_headers(&exchange.response_headers),
            body: formatter::format_body(
                exchange.content_type.as_deref(),
                &exchange.response_body,
            ),
            request: formatter::format_request(
                &exchange.sent_header_lines,
                &exchange.outbound_body,
            ),
        };

        let hurl_id = self.store.save_hurl(&spec)?;
        let view_id = self.store.save_view(&artifacts)?;

        Ok(Submission {
            header: artifacts.header,
            body: artifacts.body,
            request: artifacts.request,
            hurl_id,
            view_id,
        })
    }

    pub fn lookup(&self, id: &str) -> Result<Option<Snapshot>, HurlError> {
        Ok(self.store.find_hurl_or_view(id)?)
    }

    pub fn lookup_pair(
        &self,
        hurl_id: &str,
        view_id: &str,
    ) -> Result<Option<(Snapshot, Snapshot)>, HurlError> {
        Ok(self.store.find_pair(hurl_id, view_id)?)
    }
}
