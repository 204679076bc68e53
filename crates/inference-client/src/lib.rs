//! Remote Inference Client
//!
//! Sends a preprocessed image tensor to a hosted binary classifier and maps
//! the returned score onto a corrosion verdict.

pub mod json;
mod payload;
mod sagemaker;
mod verdict;

pub use payload::{EndpointRequest, EndpointResponse};
pub use sagemaker::SageMakerEndpoint;
pub use verdict::Verdict;

use async_trait::async_trait;
use ndarray::ArrayView4;
use thiserror::Error;
use tracing::debug;

/// Content type sent with every endpoint request
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Errors while talking to the endpoint or interpreting its answer
#[derive(Debug, Error)]
pub enum InferenceError {
    #[error("Failed to encode request payload: {0}")]
    Encode(serde_json::Error),
    /// Invocation failed; message is already rendered
    #[error("{0}")]
    Invoke(String),
    #[error("Endpoint returned an empty body")]
    EmptyResponse,
    #[error("Failed to decode endpoint response: {0}")]
    Decode(serde_json::Error),
    #[error("Endpoint response has no predictions[0][0] score")]
    MissingScore,
    #[error("Score {0} is not a number")]
    NonNumericScore(String),
    #[error("Cannot round non-finite score {0}")]
    NonFiniteScore(f64),
}

/// Synchronous request/response inference endpoint
#[async_trait]
pub trait InferenceEndpoint: Send + Sync {
    /// Invoke `endpoint_name` with an encoded body and return the raw response body
    async fn invoke(
        &self,
        endpoint_name: &str,
        body: Vec<u8>,
        content_type: &str,
    ) -> Result<Vec<u8>, InferenceError>;
}

/// Outcome of a single classification
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification {
    /// Raw `predictions[0][0]`
    pub score: f64,
    pub verdict: Verdict,
}

/// Encode `tensor`, invoke the endpoint and interpret the score
pub async fn classify<E>(
    endpoint: &E,
    endpoint_name: &str,
    tensor: ArrayView4<'_, f32>,
) -> Result<Classification, InferenceError>
where
    E: InferenceEndpoint + ?Sized,
{
    let body = EndpointRequest::new(tensor).to_json()?;
    debug!("Invoking {} with {} byte payload", endpoint_name, body.len());

    let raw = endpoint.invoke(endpoint_name, body, CONTENT_TYPE_JSON).await?;
    let score = EndpointResponse::from_slice(&raw)?.score()?;
    let verdict = Verdict::from_score(score)?;

    Ok(Classification { score, verdict })
}
