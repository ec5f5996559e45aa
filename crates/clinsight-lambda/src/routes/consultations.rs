use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;
use uuid::Uuid;

use clinsight_core::models::consultation::ConsultationResult;
use clinsight_core::models::evidence::ClinicalFinding;
use clinsight_core::models::patient::PatientContext;
use clinsight_core::s3_keys;
use clinsight_storage::objects;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ConsultationRequest {
    pub patient_id: String,
    #[serde(default)]
    pub symptoms: Vec<String>,
    #[serde(default)]
    pub context: PatientContext,
    #[serde(default)]
    pub findings: Vec<ClinicalFinding>,
}

/// Run the decision-support pipeline for one patient presentation.
pub async fn create_consultation(
    State(state): State<AppState>,
    Json(req): Json<ConsultationRequest>,
) -> Result<Json<ConsultationResult>, ApiError> {
    let result = state
        .decision
        .assess_and_diagnose(&req.patient_id, &req.symptoms, &req.context, &req.findings)
        .await?;
    Ok(Json(result))
}

pub async fn list_consultations(
    State(state): State<AppState>,
) -> Result<Json<Vec<ConsultationResult>>, ApiError> {
    let keys =
        objects::list_objects(&state.s3, &state.bucket, s3_keys::CONSULTATIONS_PREFIX).await?;

    let mut consultations = Vec::new();
    for key in &keys {
        let output = objects::get_object(&state.s3, &state.bucket, key).await?;
        let consultation: ConsultationResult = serde_json::from_slice(&output.body)?;
        consultations.push(consultation);
    }

    Ok(Json(consultations))
}

pub async fn get_consultation(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ConsultationResult>, ApiError> {
    let key = s3_keys::consultation(id);
    let output = objects::get_object(&state.s3, &state.bucket, &key).await?;
    let consultation: ConsultationResult = serde_json::from_slice(&output.body)?;
    Ok(Json(consultation))
}
