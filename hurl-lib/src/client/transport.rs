use super::http::ExecutionError;
use crate::headers::HeaderSet;
use crate::model::OutboundBody;
use reqwest::{Method, Url};
use std::future::Future;
use std::pin::Pin;

#[derive(Debug, Clone)]
pub struct OutboundRequest {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderSet,
    pub body: OutboundBody,
    pub follow_redirects: bool,
}

/// What the transport saw going out and coming back.
#[derive(Debug, Clone, Default)]
pub struct TransportResponse {
    /// Request line and header lines as transmitted, including ones the transport added.
    pub sent_header_lines: Vec<String>,
    pub header_block: String,
    pub body: String,
    pub content_type: Option<String>,
}

pub type TransportFuture<'a> =
    Pin<Box<dyn Future<Output = Result<TransportResponse, ExecutionError>> + Send + 'a>>;

pub trait Transport: Send + Sync {
    fn send<'a>(&'a self, request: OutboundRequest) -> TransportFuture<'a>;
}
