//! S3 client construction.

use aws_config::BehaviorVersion;

/// Build an S3 client from the ambient AWS configuration (environment,
/// profile, or instance role).
pub async fn build_client() -> aws_sdk_s3::Client {
    let config = aws_config::load_defaults(BehaviorVersion::latest()).await;
    aws_sdk_s3::Client::new(&config)
}
