use std::env;
use std::sync::Arc;

use axum::middleware as axum_mw;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::EnvFilter;

mod error;
mod middleware;
mod routes;
mod sinks;
mod state;

use clinsight_audit::alerts::ClinicalAlertEmitter;
use clinsight_bedrock::narrative::BedrockEnricher;
use clinsight_engine::orchestrator::DecisionSupport;
use clinsight_knowledge::ClinicalKnowledgeBase;
use sinks::StoredConsultations;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging for CloudWatch
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let bucket = env::var("CLINSIGHT_BUCKET").unwrap_or_else(|_| "clinsight".to_string());

    let s3 = clinsight_storage::client::build_client().await;

    let enricher = match env::var("CLINSIGHT_MODEL_ID") {
        Ok(model_id) if !model_id.is_empty() => {
            let bedrock = clinsight_bedrock::client::build_client().await;
            Some(BedrockEnricher::new(bedrock, model_id))
        }
        _ => {
            tracing::info!("CLINSIGHT_MODEL_ID not set; narrative enrichment disabled");
            None
        }
    };

    let decision = DecisionSupport::new(
        ClinicalKnowledgeBase::new(),
        ClinicalAlertEmitter::new(s3.clone(), bucket.clone()),
        StoredConsultations::new(s3.clone(), bucket.clone()),
    )
    .with_optional_enricher(enricher);

    let state = AppState {
        s3,
        bucket,
        decision: Arc::new(decision),
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        // Health (no auth)
        .route("/health", get(routes::health::health_check))
        // Knowledge base (public schema data)
        .route("/conditions", get(routes::conditions::list_conditions))
        .route(
            "/conditions/{key}",
            get(routes::conditions::get_condition_detail),
        )
        // Pipeline
        .route(
            "/consultations",
            post(routes::consultations::create_consultation),
        )
        .route(
            "/consultations",
            get(routes::consultations::list_consultations),
        )
        .route(
            "/consultations/{id}",
            get(routes::consultations::get_consultation),
        )
        .route("/alerts", get(routes::alerts::list_alerts))
        .layer(axum_mw::from_fn(middleware::audit::audit_log))
        .layer(cors)
        .with_state(state);

    lambda_http::run(app).await.map_err(|e| eyre::eyre!(e))
}
