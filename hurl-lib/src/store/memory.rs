use super::{KeyValueStore, Namespace, StoreError};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Mutex<HashMap<(Namespace, String), Value>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStore for MemoryStore {
    fn save(&self, namespace: Namespace, id: &str, value: &Value) -> Result<(), StoreError> {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .entry((namespace, id.to_string()))
            .or_insert_with(|| value.clone());
        Ok(())
    }

    fn find(&self, namespace: Namespace, id: &str) -> Result<Option<Value>, StoreError> {
        Ok(self
            .records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&(namespace, id.to_string()))
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_namespaces_are_separate() {
        let store = MemoryStore::new();
        store.save(Namespace::Hurls, "a", &json!(1)).unwrap();
        store.save(Namespace::Views, "a", &json!(2)).unwrap();

        assert_eq!(store.find(Namespace::Hurls, "a").unwrap(), Some(json!(1)));
        assert_eq!(store.find(Namespace::Views, "a").unwrap(), Some(json!(2)));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_first_write_wins() {
        let store = MemoryStore::new();
        store.save(Namespace::Hurls, "a", &json!(1)).unwrap();
        store.save(Namespace::Hurls, "a", &json!(2)).unwrap();
        assert_eq!(store.find(Namespace::Hurls, "a").unwrap(), Some(json!(1)));
        assert_eq!(store.len(), 1);
        assert!(store.find(Namespace::Hurls, "b").unwrap().is_none());
    }
}
