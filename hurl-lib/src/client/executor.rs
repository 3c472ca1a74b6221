use super::http::ExecutionError;
use super::transport::{OutboundRequest, Transport};
use crate::auth::{self, Credentials};
use crate::debug_log;
use crate::fields;
use crate::headers::HeaderSet;
use crate::model::{CapturedExchange, RequestSpec};
use reqwest::{Method, Url};

/// Content type reported for any URL whose path ends in `.js`.
pub const SCRIPT_CONTENT_TYPE: &str = "text/javascript";

pub struct RequestExecutor<T: Transport> {
    transport: T,
}

impl<T: Transport> RequestExecutor<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Sends `spec` once and records what went out and came back.
    ///
    /// The URL must already have passed [`crate::validator::TargetValidator`].
    pub async fn execute(&self, spec: &RequestSpec) -> Result<CapturedExchange, ExecutionError> {
        let method_name = spec.normalized_method();
        let method = Method::from_bytes(method_name.as_bytes())
            .map_err(|_| ExecutionError::new(format!("Invalid HTTP method: {method_name}")))?;
        let url = Url::parse(&spec.url)
            .map_err(|e| ExecutionError::new(format!("Invalid URL '{}': {e}", spec.url)))?;

        let credentials = Credentials {
            username: spec.username.as_deref().unwrap_or_default(),
            password: spec.password.as_deref().unwrap_or_default(),
        };
        // auth first so an explicit header of the same name replaces it
        let headers = auth::apply_auth(spec.auth, &credentials, HeaderSet::base())
            .with_all(fields::collect_headers(&spec.header_keys, &spec.header_vals));
        let body = spec.outbound_body(&method_name);

        debug_log!("{method_name} {url}");

        let response = self
            .transport
            .send(OutboundRequest {
                method,
                url: url.clone(),
                headers,
                body: body.clone(),
                follow_redirects: spec.follow_redirects,
            })
            .await?;

        debug_log!("{}", response.sent_header_lines.join("\n"));
        if !body.is_empty() {
            debug_log!("{}", body.echo());
        }
        debug_log!("{}", response.header_block);

        let content_type = if url.path().ends_with(".js") {
            Some(SCRIPT_CONTENT_TYPE.to_string())
        } else {
            response.content_type
        };

        Ok(CapturedExchange {
            sent_header_lines: response.sent_header_lines,
            response_headers: response.header_block,
            response_body: response.body,
            content_type,
            outbound_body: body,
        })
    }
}
