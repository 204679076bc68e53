//! In-memory object store

use crate::{ObjectStore, ObjectStoreError};
use async_trait::async_trait;
use bytes::Bytes;
use std::collections::HashMap;
use std::sync::RwLock;
use tracing::debug;

/// Object store backed by a map of (bucket, key) to bytes
#[derive(Debug, Default)]
pub struct InMemoryObjectStore {
    objects: RwLock<HashMap<(String, String), Bytes>>,
}

impl InMemoryObjectStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace an object
    pub fn put(
        &self,
        bucket: &str,
        key: &str,
        body: impl Into<Bytes>,
    ) -> Result<(), ObjectStoreError> {
        let mut objects = self
            .objects
            .write()
            .map_err(|e| ObjectStoreError::Lock(e.to_string()))?;

        objects.insert((bucket.to_string(), key.to_string()), body.into());
        debug!("Stored object {}/{}", bucket, key);
        Ok(())
    }

    /// Number of stored objects
    pub fn len(&self) -> usize {
        self.objects.read().map(|o| o.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl ObjectStore for InMemoryObjectStore {
    async fn get(&self, bucket: &str, key: &str) -> Result<Bytes, ObjectStoreError> {
        let objects = self
            .objects
            .read()
            .map_err(|e| ObjectStoreError::Lock(e.to_string()))?;

        objects
            .get(&(bucket.to_string(), key.to_string()))
            .cloned()
            .ok_or_else(|| ObjectStoreError::NotFound {
                bucket: bucket.to_string(),
                key: key.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_put_and_get() {
        let store = InMemoryObjectStore::new();
        store.put("bucket", "images/a.png", vec![1u8, 2, 3]).unwrap();

        let body = store.get("bucket", "images/a.png").await.unwrap();
        assert_eq!(body.as_ref(), &[1, 2, 3]);
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_missing_key_reports_no_such_key() {
        let store = InMemoryObjectStore::new();
        store.put("bucket", "present", Bytes::from_static(b"x")).unwrap();

        let err = store.get("bucket", "absent").await.unwrap_err();
        assert!(matches!(err, ObjectStoreError::NotFound { .. }));
        assert!(err.to_string().contains("NoSuchKey"));
    }

    #[tokio::test]
    async fn test_bucket_is_part_of_the_address() {
        let store = InMemoryObjectStore::new();
        store.put("one", "k", Bytes::from_static(b"x")).unwrap();

        assert!(store.get("two", "k").await.is_err());
    }

    #[tokio::test]
    async fn test_put_replaces() {
        let store = InMemoryObjectStore::new();
        assert!(store.is_empty());
        store.put("b", "k", Bytes::from_static(b"old")).unwrap();
        store.put("b", "k", Bytes::from_static(b"new")).unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(store.get("b", "k").await.unwrap().as_ref(), b"new");
    }
}
