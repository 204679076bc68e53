//! SageMaker runtime endpoint

use crate::{InferenceEndpoint, InferenceError};
use async_trait::async_trait;
use aws_sdk_sagemakerruntime::error::DisplayErrorContext;
use aws_sdk_sagemakerruntime::primitives::Blob;
use aws_sdk_sagemakerruntime::Client;
use sdk_error::describe_sdk_error;
use tracing::{debug, error};

/// Endpoint invoked through `InvokeEndpoint`
#[derive(Debug, Clone)]
pub struct SageMakerEndpoint {
    client: Client,
}

impl SageMakerEndpoint {
    /// Wrap a configured SageMaker runtime client
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl InferenceEndpoint for SageMakerEndpoint {
    async fn invoke(
        &self,
        endpoint_name: &str,
        body: Vec<u8>,
        content_type: &str,
    ) -> Result<Vec<u8>, InferenceError> {
        let resp = self
            .client
            .invoke_endpoint()
            .endpoint_name(endpoint_name)
            .content_type(content_type)
            .body(Blob::new(body))
            .send()
            .await
            .map_err(|e| {
                error!("InvokeEndpoint {} failed: {}", endpoint_name, DisplayErrorContext(&e));
                InferenceError::Invoke(describe_sdk_error("InvokeEndpoint", &e))
            })?;

        let body = response_body(resp.body)?;
        debug!("{} answered with {} bytes", endpoint_name, body.len());
        Ok(body)
    }
}

/// A missing body and a zero-length body are both empty responses
fn response_body(body: Option<Blob>) -> Result<Vec<u8>, InferenceError> {
    let body = body.map(Blob::into_inner).unwrap_or_default();
    if body.is_empty() {
        return Err(InferenceError::EmptyResponse);
    }
    Ok(body)
}
