//! Handler error taxonomy

use image_preprocess::PreprocessError;
use inference_client::InferenceError;
use object_store::ObjectStoreError;
use thiserror::Error;

/// Every way an invocation can fail
#[derive(Debug, Error)]
pub enum HandlerError {
    /// `s3_bucket` or `s3_key` absent from the event
    #[error("S3 bucket or key not provided")]
    MissingLocation,

    #[error("Invalid type for parameter {field}, value: {value}, type: {kind}, valid types: string")]
    InvalidField {
        field: &'static str,
        value: String,
        kind: &'static str,
    },

    #[error(transparent)]
    Fetch(#[from] ObjectStoreError),

    #[error(transparent)]
    Preprocess(#[from] PreprocessError),

    #[error(transparent)]
    Inference(#[from] InferenceError),
}

impl HandlerError {
    /// HTTP-style status reported in the envelope
    pub fn status_code(&self) -> u16 {
        match self {
            HandlerError::MissingLocation => 400,
            _ => 500,
        }
    }
}
