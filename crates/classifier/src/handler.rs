//! Inference request handler

use crate::{AppConfig, HandlerError, InvocationEvent, ResponseEnvelope};
use image_preprocess::{PreprocessError, Preprocessor};
use inference_client::{classify, Classification, InferenceEndpoint};
use object_store::ObjectStore;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Fetch, preprocess, classify. Built once per process and shared by all invocations.
pub struct CorrosionHandler {
    endpoint_name: String,
    preprocessor: Preprocessor,
    store: Arc<dyn ObjectStore>,
    endpoint: Arc<dyn InferenceEndpoint>,
}

impl CorrosionHandler {
    /// Create a new handler
    pub fn new(
        endpoint_name: impl Into<String>,
        preprocessor: Preprocessor,
        store: Arc<dyn ObjectStore>,
        endpoint: Arc<dyn InferenceEndpoint>,
    ) -> Self {
        Self {
            endpoint_name: endpoint_name.into(),
            preprocessor,
            store,
            endpoint,
        }
    }

    /// Create a handler from loaded configuration
    pub fn from_config(
        config: &AppConfig,
        store: Arc<dyn ObjectStore>,
        endpoint: Arc<dyn InferenceEndpoint>,
    ) -> Result<Self, PreprocessError> {
        let preprocessor = Preprocessor::new(config.preprocess_config())?;
        Ok(Self::new(
            config.endpoint_name.clone(),
            preprocessor,
            store,
            endpoint,
        ))
    }

    pub fn endpoint_name(&self) -> &str {
        &self.endpoint_name
    }

    /// Handle one invocation. Never fails: every error becomes an envelope.
    pub async fn handle(&self, event: &Value) -> ResponseEnvelope {
        match self.process(event).await {
            Ok(classification) => {
                info!(
                    score = classification.score,
                    verdict = %classification.verdict,
                    "Classified image"
                );
                ResponseEnvelope::prediction(classification.verdict)
            }
            Err(err @ HandlerError::MissingLocation) => {
                warn!("Rejected invocation: {}", err);
                ResponseEnvelope::from_error(&err)
            }
            Err(err) => {
                error!("Invocation failed: {}", err);
                ResponseEnvelope::from_error(&err)
            }
        }
    }

    /// Run the pipeline and return the typed outcome
    pub async fn process(&self, event: &Value) -> Result<Classification, HandlerError> {
        let location = InvocationEvent::from_value(event)?;
        info!(bucket = %location.bucket, key = %location.key, "Processing image");

        let bytes = self.store.get(&location.bucket, &location.key).await?;
        debug!("Fetched {} bytes", bytes.len());

        let tensor = self.preprocessor.preprocess(&bytes)?;
        debug!("Tensor shape {:?}", tensor.shape());

        let classification =
            classify(self.endpoint.as_ref(), &self.endpoint_name, tensor.view()).await?;
        Ok(classification)
    }
}
