//! Clinical alert emission.
//!
//! Alerts are emitted twice: as a structured tracing event (so high-risk
//! presentations are visible in the log stream immediately) and as a JSON
//! object in the alert prefix of the bucket. Either half failing is logged
//! by the caller and never fails the pipeline.

use aws_sdk_s3::Client as S3Client;
use tracing::warn;

use clinsight_core::models::alert::ClinicalAlert;
use clinsight_core::s3_keys;
use clinsight_engine::error::BoxError;
use clinsight_engine::orchestrator::AlertSink;
use clinsight_storage::state;

use crate::events::AuditEvent;

/// The default alert sink: tracing + S3 persistence.
pub struct ClinicalAlertEmitter {
    s3: S3Client,
    bucket: String,
}

impl ClinicalAlertEmitter {
    pub fn new(s3: S3Client, bucket: impl Into<String>) -> Self {
        Self {
            s3,
            bucket: bucket.into(),
        }
    }
}

impl AlertSink for ClinicalAlertEmitter {
    async fn emit(&self, alert: &ClinicalAlert) -> Result<(), BoxError> {
        warn!(
            alert_id = %alert.id,
            severity = ?alert.severity,
            timeline = %alert.recommended_timeline,
            "clinical alert raised"
        );

        AuditEvent::new("alert_emitted", "clinical_alert", alert.id.to_string()).emit();

        let key = s3_keys::alert(alert.id);
        state::save_json(&self.s3, &self.bucket, &key, alert).await?;
        Ok(())
    }
}
