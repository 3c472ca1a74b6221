pub mod auth;
pub mod client;
pub mod config;
pub mod core;
pub mod fields;
pub mod formatter;
pub mod headers;
pub mod model;
pub mod ratelimit;
pub mod service;
pub mod store;
pub mod validator;

pub use client::{ExecutionError, ReqwestTransport, RequestExecutor, Transport};
pub use config::HurlConfig;
pub use crate::core::error::HurlError;
pub use model::{
    AuthScheme, CapturedExchange, Hurl, OutboundBody, RequestForm, RequestSpec, Snapshot, View,
    ViewArtifacts,
};
pub use service::{HurlService, Submission, SubmitResponse};
pub use store::{FileStore, KeyValueStore, MemoryStore, SnapshotStore, StoreError};
pub use validator::TargetValidator;
