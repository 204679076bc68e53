//! Corrosion Classifier - Lambda Entry Point

use anyhow::Context;
use aws_config::BehaviorVersion;
use aws_sdk_s3::config::Region;
use classifier::{init_logging, AppConfig, CorrosionHandler, ResponseEnvelope};
use inference_client::SageMakerEndpoint;
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use object_store::S3ObjectStore;
use serde_json::Value;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = AppConfig::load().context("failed to load configuration")?;
    init_logging(&config.log_level, config.log_format)?;

    info!("=== Corrosion Classifier v{} ===", env!("CARGO_PKG_VERSION"));

    let mut loader = aws_config::defaults(BehaviorVersion::latest());
    if let Some(region) = &config.region {
        loader = loader.region(Region::new(region.clone()));
    }
    let sdk_config = loader.load().await;

    let mut s3_config = aws_sdk_s3::config::Builder::from(&sdk_config);
    if let Some(url) = &config.s3_endpoint_url {
        info!("Using custom S3 endpoint {}", url);
        s3_config = s3_config.endpoint_url(url).force_path_style(true);
    }
    let store = S3ObjectStore::new(aws_sdk_s3::Client::from_conf(s3_config.build()));
    let endpoint = SageMakerEndpoint::new(aws_sdk_sagemakerruntime::Client::new(&sdk_config));

    let handler = CorrosionHandler::from_config(&config, Arc::new(store), Arc::new(endpoint))
        .context("failed to build handler")?;
    info!("Serving inference endpoint {}", handler.endpoint_name());

    run(service_fn(|event: LambdaEvent<Value>| function_handler(&handler, event))).await
}

async fn function_handler(
    handler: &CorrosionHandler,
    event: LambdaEvent<Value>,
) -> Result<ResponseEnvelope, Error> {
    let (payload, context) = event.into_parts();
    info!(request_id = %context.request_id, "Received invocation");

    Ok(handler.handle(&payload).await)
}
