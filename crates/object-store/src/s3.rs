//! S3-backed object store

use crate::{ObjectStore, ObjectStoreError};
use async_trait::async_trait;
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::Client;
use bytes::Bytes;
use sdk_error::describe_sdk_error;
use tracing::{debug, error};

/// Object store reading through `GetObject`
#[derive(Debug, Clone)]
pub struct S3ObjectStore {
    client: Client,
}

impl S3ObjectStore {
    /// Wrap a configured S3 client
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ObjectStore for S3ObjectStore {
    async fn get(&self, bucket: &str, key: &str) -> Result<Bytes, ObjectStoreError> {
        let resp = self
            .client
            .get_object()
            .bucket(bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| {
                error!("GetObject failed for {}/{}: {}", bucket, key, DisplayErrorContext(&e));
                ObjectStoreError::Request(describe_sdk_error("GetObject", &e))
            })?;

        let body = resp
            .body
            .collect()
            .await
            .map_err(|e| ObjectStoreError::Body(e.to_string()))?
            .into_bytes();

        debug!("Fetched {}/{} ({} bytes)", bucket, key, body.len());
        Ok(body)
    }
}
