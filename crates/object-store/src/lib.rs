//! Object Store Layer
//!
//! Read-only `get(bucket, key)` access to image blobs, backed by S3 in
//! production and by an in-memory map for local runs and tests.

mod memory;
mod s3;

pub use memory::InMemoryObjectStore;
pub use s3::S3ObjectStore;

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;

/// Object store errors
#[derive(Debug, Error)]
pub enum ObjectStoreError {
    /// Request rejected or failed in transit; message is already rendered
    #[error("{0}")]
    Request(String),
    #[error("An error occurred (NoSuchKey) when calling the GetObject operation: The specified key does not exist.")]
    NotFound { bucket: String, key: String },
    #[error("Failed to read object body: {0}")]
    Body(String),
    #[error("Lock error: {0}")]
    Lock(String),
}

/// Blob source addressed by bucket and key
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Fetch the full object body
    async fn get(&self, bucket: &str, key: &str) -> Result<Bytes, ObjectStoreError>;
}
