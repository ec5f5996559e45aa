//! Concrete sink implementations wired into the orchestrator.

use aws_sdk_s3::Client as S3Client;

use clinsight_core::models::consultation::ConsultationResult;
use clinsight_core::s3_keys;
use clinsight_engine::error::BoxError;
use clinsight_engine::orchestrator::ResultSink;
use clinsight_storage::state;

/// Persists each consultation result as one JSON object.
pub struct StoredConsultations {
    s3: S3Client,
    bucket: String,
}

impl StoredConsultations {
    pub fn new(s3: S3Client, bucket: impl Into<String>) -> Self {
        Self {
            s3,
            bucket: bucket.into(),
        }
    }
}

impl ResultSink for StoredConsultations {
    async fn store(&self, result: &ConsultationResult) -> Result<(), BoxError> {
        let key = s3_keys::consultation(result.id);
        state::save_json(&self.s3, &self.bucket, &key, result).await?;
        Ok(())
    }
}
