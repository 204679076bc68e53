//! Endpoint request and response payloads

use crate::{json, InferenceError};
use ndarray::{ArrayView4, ArrayViewD};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

/// `{"instances": [...]}` with the tensor written as nested arrays
#[derive(Debug, Serialize)]
pub struct EndpointRequest<'a> {
    instances: NestedArray<'a>,
}

impl<'a> EndpointRequest<'a> {
    pub fn new(tensor: ArrayView4<'a, f32>) -> Self {
        Self {
            instances: NestedArray(tensor.into_dyn()),
        }
    }

    /// Encode as JSON text
    pub fn to_json(&self) -> Result<Vec<u8>, InferenceError> {
        json::to_vec(self).map_err(InferenceError::Encode)
    }
}

/// Array view serialized as one JSON list per axis.
/// Values are widened to `f64` so they print at full precision.
#[derive(Debug)]
struct NestedArray<'a>(ArrayViewD<'a, f32>);

impl Serialize for NestedArray<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if self.0.ndim() <= 1 {
            serializer.collect_seq(self.0.iter().map(|&v| f64::from(v)))
        } else {
            serializer.collect_seq(self.0.outer_iter().map(NestedArray))
        }
    }
}

/// `{"predictions": [[score, ...], ...]}`; rows are kept as raw JSON
/// because only the first cell is ever read
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EndpointResponse {
    pub predictions: Vec<Value>,
}

impl EndpointResponse {
    pub fn from_slice(bytes: &[u8]) -> Result<Self, InferenceError> {
        serde_json::from_slice(bytes).map_err(InferenceError::Decode)
    }

    /// `predictions[0][0]`
    pub fn score(&self) -> Result<f64, InferenceError> {
        let cell = self
            .predictions
            .first()
            .and_then(|row| row.get(0))
            .ok_or(InferenceError::MissingScore)?;
        cell.as_f64()
            .ok_or_else(|| InferenceError::NonNumericScore(cell.to_string()))
    }
}
