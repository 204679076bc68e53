//! Corrosion Classifier Function
//!
//! Lambda handler that fetches an image from S3, preprocesses it, asks a
//! remote endpoint for a corrosion score and answers with a JSON verdict.

pub mod envelope;
pub mod error;
pub mod event;
pub mod handler;
pub mod settings;

pub use envelope::ResponseEnvelope;
pub use error::HandlerError;
pub use event::InvocationEvent;
pub use handler::CorrosionHandler;
pub use settings::{AppConfig, ConfigError, LogFormat};

use tracing_subscriber::EnvFilter;

/// Initialize logging.
///
/// Timestamps are left to the log sink (CloudWatch stamps every line).
pub fn init_logging(
    level: &str,
    format: LogFormat,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = EnvFilter::try_new(level)?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .without_time();

    match format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Text => builder.with_ansi(false).try_init(),
    }
}
