use super::{is_valid_id, KeyValueStore, Namespace, StoreError};
use crate::debug_log;
use serde_json::Value;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// One JSON document per record under `<root>/<namespace>/<id>.json`.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn record_path(&self, namespace: Namespace, id: &str) -> PathBuf {
        self.root
            .join(namespace.as_str())
            .join(format!("{id}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn save(&self, namespace: Namespace, id: &str, value: &Value) -> Result<(), StoreError> {
        if !is_valid_id(id) {
            return Err(StoreError::InvalidId(id.to_string()));
        }

        let path = self.record_path(namespace, id);
        if path.exists() {
            debug_log!("{} {id} already stored", namespace.as_str());
            return Ok(());
        }

        let dir = self.root.join(namespace.as_str());
        fs::create_dir_all(&dir)?;

        // rename is atomic, so racing writers of the same id never expose a partial file
        let temp = dir.join(format!(".{id}.{}.tmp", Uuid::new_v4()));
        fs::write(&temp, serde_json::to_vec_pretty(value)?)?;
        if let Err(err) = fs::rename(&temp, &path) {
            let _ = fs::remove_file(&temp);
            return Err(err.into());
        }

        debug_log!("saved {} {id}", namespace.as_str());
        Ok(())
    }

    fn find(&self, namespace: Namespace, id: &str) -> Result<Option<Value>, StoreError> {
        if !is_valid_id(id) {
            return Ok(None);
        }

        match fs::read_to_string(self.record_path(namespace, id)) {
            Ok(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }
}
