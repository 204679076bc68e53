//! AWS SDK Error Rendering
//!
//! Formats service errors as
//! `An error occurred (<Code>) when calling the <Op> operation: <Message>`,
//! which is the text surfaced in `{"error": ...}` response bodies. Errors
//! without a service code (timeouts, dispatch failures) fall back to the
//! full error chain.

use aws_smithy_types::error::display::DisplayErrorContext;
use aws_smithy_types::error::metadata::ProvideErrorMetadata;
use std::error::Error;

/// Render `err` raised by `operation`
pub fn describe_sdk_error<E>(operation: &str, err: &E) -> String
where
    E: ProvideErrorMetadata + Error,
{
    match (err.code(), err.message()) {
        (Some(code), Some(message)) => format!(
            "An error occurred ({}) when calling the {} operation: {}",
            code, operation, message
        ),
        (Some(code), None) => format!(
            "An error occurred ({}) when calling the {} operation",
            code, operation
        ),
        _ => DisplayErrorContext(err).to_string(),
    }
}
