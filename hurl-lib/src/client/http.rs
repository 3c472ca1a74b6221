use super::transport::{OutboundRequest, Transport, TransportFuture, TransportResponse};
use crate::core::json;
use crate::model::OutboundBody;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_LENGTH, CONTENT_TYPE, HOST};
use reqwest::redirect::Policy;
use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub struct ExecutionError {
    pub message: String,
}

impl ExecutionError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for ExecutionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for ExecutionError {}

impl From<reqwest::Error> for ExecutionError {
    fn from(error: reqwest::Error) -> Self {
        ExecutionError {
            message: error_chain(&error),
        }
    }
}

// reqwest keeps the useful part (DNS, refused, TLS) in the source chain.
fn error_chain(error: &dyn Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}

/// Sends requests with a fresh reqwest client each time.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReqwestTransport;

impl ReqwestTransport {
    pub fn new() -> Self {
        ReqwestTransport
    }
}

impl Transport for ReqwestTransport {
    fn send<'a>(&'a self, request: OutboundRequest) -> TransportFuture<'a> {
        Box::pin(execute_request(request))
    }
}

pub async fn execute_request(
    outbound: OutboundRequest,
) -> Result<TransportResponse, ExecutionError> {
    let redirect = if outbound.follow_redirects {
        Policy::default()
    } else {
        Policy::none()
    };
    let client = reqwest::Client::builder().redirect(redirect).build()?;

    let mut header_map = HeaderMap::new();
    for (name, value) in outbound.headers.iter() {
        let header_name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| ExecutionError::new(format!("Invalid header name '{name}': {e}")))?;
        let header_value = HeaderValue::from_str(value)
            .map_err(|e| ExecutionError::new(format!("Invalid value for header '{name}': {e}")))?;
        header_map.insert(header_name, header_value);
    }

    let mut req_builder = client.request(outbound.method.clone(), outbound.url.clone());

    req_builder = match &outbound.body {
        OutboundBody::Empty => req_builder,
        OutboundBody::Fields(fields) if fields.is_empty() => req_builder,
        OutboundBody::Fields(fields) => req_builder.form(fields),
        OutboundBody::Raw(raw) => {
            let labelled = json::is_json_content(raw)
                && !outbound.headers.contains(CONTENT_TYPE.as_str());
            if labelled {
                req_builder
                    .header(CONTENT_TYPE, json::CONTENT_TYPE)
                    .body(raw.clone())
            } else {
                req_builder.body(raw.clone())
            }
        }
    };

    // after the body, so user headers replace the form content type
    let request = req_builder.headers(header_map).build()?;
    let sent_header_lines = wire_header_lines(&request);

    let response = client.execute(request).await?;
    let header_block = response_header_block(&response);
    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);

    // decoded with the declared charset, UTF-8 otherwise
    let body = response.text().await?;

    Ok(TransportResponse {
        sent_header_lines,
        header_block,
        body,
        content_type,
    })
}

/// The request as it goes on the wire: request line, host, headers, length.
fn wire_header_lines(request: &reqwest::Request) -> Vec<String> {
    let url = request.url();
    let mut target = url.path().to_string();
    if let Some(query) = url.query() {
        target.push('?');
        target.push_str(query);
    }

    let mut lines = vec![format!(
        "{} {} {:?}",
        request.method(),
        target,
        request.version()
    )];

    // an explicit Host header is sent instead and listed with the others
    if !request.headers().contains_key(HOST) {
        if let Some(host) = url.host_str() {
            match url.port() {
                Some(port) => lines.push(format!("host: {host}:{port}")),
                None => lines.push(format!("host: {host}")),
            }
        }
    }

    for (name, value) in request.headers() {
        lines.push(format!(
            "{}: {}",
            name,
            String::from_utf8_lossy(value.as_bytes())
        ));
    }

    if !request.headers().contains_key(CONTENT_LENGTH) {
        if let Some(bytes) = request.body().and_then(|body| body.as_bytes()) {
            lines.push(format!("content-length: {}", bytes.len()));
        }
    }

    lines
}

fn response_header_block(response: &reqwest::Response) -> String {
    let mut lines = vec![format!("{:?} {}", response.version(), response.status())];
    for (name, value) in response.headers() {
        lines.push(format!(
            "{}: {}",
            name,
            String::from_utf8_lossy(value.as_bytes())
        ));
    }
    lines.join("\r\n")
}
