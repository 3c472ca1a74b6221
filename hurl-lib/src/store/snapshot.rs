use super::{content_id, KeyValueStore, Namespace, StoreError};
use crate::model::{Hurl, RequestSpec, Snapshot, View, ViewArtifacts};
use serde::de::DeserializeOwned;

/// Derives ids for hurls and views and hands them to the backing store.
pub struct SnapshotStore<S: KeyValueStore> {
    backend: S,
}

impl<S: KeyValueStore> SnapshotStore<S> {
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    pub fn save_hurl(&self, spec: &RequestSpec) -> Result<String, StoreError> {
        let id = content_id(spec)?;
        let record = Hurl {
            id: id.clone(),
            spec: spec.clone(),
        };
        self.backend
            .save(Namespace::Hurls, &id, &serde_json::to_value(&record)?)?;
        Ok(id)
    }

    pub fn save_view(&self, artifacts: &ViewArtifacts) -> Result<String, StoreError> {
        let id = content_id(artifacts)?;
        let record = View {
            id: id.clone(),
            artifacts: artifacts.clone(),
        };
        self.backend
            .save(Namespace::Views, &id, &serde_json::to_value(&record)?)?;
        Ok(id)
    }

    pub fn find_hurl(&self, id: &str) -> Result<Option<Hurl>, StoreError> {
        self.find_record(Namespace::Hurls, id)
    }

    pub fn find_view(&self, id: &str) -> Result<Option<View>, StoreError> {
        self.find_record(Namespace::Views, id)
    }

    /// Hurls take precedence when an id exists in both namespaces.
    pub fn find_hurl_or_view(&self, id: &str) -> Result<Option<Snapshot>, StoreError> {
        if let Some(hurl) = self.find_hurl(id)? {
            return Ok(Some(Snapshot::Hurl(hurl)));
        }
        Ok(self.find_view(id)?.map(Snapshot::View))
    }

    /// Both records, or nothing if either is missing.
    pub fn find_pair(
        &self,
        hurl_id: &str,
        view_id: &str,
    ) -> Result<Option<(Snapshot, Snapshot)>, StoreError> {
        let Some(hurl) = self.find_hurl_or_view(hurl_id)? else {
            return Ok(None);
        };
        Ok(self.find_hurl_or_view(view_id)?.map(|view| (hurl, view)))
    }

    fn find_record<T: DeserializeOwned>(
        &self,
        namespace: Namespace,
        id: &str,
    ) -> Result<Option<T>, StoreError> {
        self.backend
            .find(namespace, id)?
            .map(serde_json::from_value)
            .transpose()
            .map_err(StoreError::from)
    }
}
