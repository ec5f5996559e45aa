//! Bedrock runtime client construction.

use aws_config::BehaviorVersion;

/// Build a Bedrock runtime client from the ambient AWS configuration
/// (environment, profile, or instance role).
pub async fn build_client() -> aws_sdk_bedrockruntime::Client {
    let config = aws_config::load_defaults(BehaviorVersion::latest()).await;
    aws_sdk_bedrockruntime::Client::new(&config)
}
