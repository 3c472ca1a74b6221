mod executor;
mod http;
mod transport;

pub use executor::{RequestExecutor, SCRIPT_CONTENT_TYPE};
pub use http::{ExecutionError, ReqwestTransport};
pub use transport::{OutboundRequest, Transport, TransportFuture, TransportResponse};
