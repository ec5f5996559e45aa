use std::sync::Arc;

use aws_sdk_s3::Client as S3Client;

use clinsight_audit::alerts::ClinicalAlertEmitter;
use clinsight_bedrock::narrative::BedrockEnricher;
use clinsight_engine::orchestrator::DecisionSupport;
use clinsight_knowledge::ClinicalKnowledgeBase;

use crate::sinks::StoredConsultations;

/// The fully wired decision-support pipeline used by this service.
pub type Decision =
    DecisionSupport<ClinicalKnowledgeBase, ClinicalAlertEmitter, StoredConsultations, BedrockEnricher>;

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub s3: S3Client,
    pub bucket: String,
    pub decision: Arc<Decision>,
}
