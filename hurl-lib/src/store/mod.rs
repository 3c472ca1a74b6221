//! Content-addressed persistence for hurls and views.

mod file;
mod memory;
mod snapshot;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use snapshot::SnapshotStore;

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use serde_json::Value;
use sha1::{Digest, Sha1};
use std::fmt;
use std::io;

lazy_static! {
    static ref ID_REGEX: Regex = Regex::new(r"^[0-9a-f]{40}$").unwrap();
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Namespace {
    Hurls,
    Views,
}

impl Namespace {
    pub fn as_str(&self) -> &'static str {
        match self {
            Namespace::Hurls => "hurls",
            Namespace::Views => "views",
        }
    }
}

/// The key-value engine behind the snapshot store.
///
/// Saving an id that already exists must succeed without changing anything.
pub trait KeyValueStore: Send + Sync {
    fn save(&self, namespace: Namespace, id: &str, value: &Value) -> Result<(), StoreError>;

    fn find(&self, namespace: Namespace, id: &str) -> Result<Option<Value>, StoreError>;
}

#[derive(Debug)]
pub enum StoreError {
    Io(io::Error),
    Serialization(serde_json::Error),
    InvalidId(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Io(err) => write!(f, "Store IO error: {err}"),
            StoreError::Serialization(err) => write!(f, "Store serialization error: {err}"),
            StoreError::InvalidId(id) => write!(f, "Invalid record id: {id}"),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Io(err) => Some(err),
            StoreError::Serialization(err) => Some(err),
            StoreError::InvalidId(_) => None,
        }
    }
}

impl From<io::Error> for StoreError {
    fn from(err: io::Error) -> Self {
        StoreError::Io(err)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Serialization(err)
    }
}

/// SHA-1 hex of the canonical JSON form of `content`.
pub fn content_id<T: Serialize + ?Sized>(content: &T) -> Result<String, StoreError> {
    let canonical = serde_json::to_string(content)?;
    let mut hasher = Sha1::new();
    hasher.update(canonical.as_bytes());
    Ok(format!("{:x}", hasher.finalize()))
}

pub fn is_valid_id(id: &str) -> bool {
    ID_REGEX.is_match(id)
}
