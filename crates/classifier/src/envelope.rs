//! Response envelope

use crate::HandlerError;
use inference_client::{json, Verdict};
use serde::Serialize;
use tracing::error;

/// Body used if the real body cannot be encoded
const FALLBACK_ERROR_BODY: &str = r#"{"error": "failed to encode response body"}"#;

/// `{"statusCode": .., "body": "<json text>"}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope {
    pub status_code: u16,
    pub body: String,
}

#[derive(Serialize)]
struct PredictionBody {
    prediction: Verdict,
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
}

impl ResponseEnvelope {
    /// 200 with `{"prediction": ..}`
    pub fn prediction(verdict: Verdict) -> Self {
        Self::with_body(200, &PredictionBody { prediction: verdict })
    }

    /// Error status with `{"error": ..}`
    pub fn from_error(err: &HandlerError) -> Self {
        let message = err.to_string();
        Self::with_body(err.status_code(), &ErrorBody { error: &message })
    }

    fn with_body<T: Serialize>(status_code: u16, body: &T) -> Self {
        match json::to_string(body) {
            Ok(body) => Self { status_code, body },
            Err(e) => {
                error!("Failed to encode response body: {}", e);
                Self {
                    status_code: 500,
                    body: FALLBACK_ERROR_BODY.to_string(),
                }
            }
        }
    }
}
