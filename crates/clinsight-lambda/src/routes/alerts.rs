use axum::extract::State;
use axum::Json;

use clinsight_core::models::alert::ClinicalAlert;
use clinsight_core::s3_keys;
use clinsight_storage::objects;

use crate::error::ApiError;
use crate::state::AppState;

pub async fn list_alerts(
    State(state): State<AppState>,
) -> Result<Json<Vec<ClinicalAlert>>, ApiError> {
    let keys = objects::list_objects(&state.s3, &state.bucket, s3_keys::ALERTS_PREFIX).await?;

    let mut alerts = Vec::new();
    for key in &keys {
        let output = objects::get_object(&state.s3, &state.bucket, key).await?;
        let alert: ClinicalAlert = serde_json::from_slice(&output.body)?;
        alerts.push(alert);
    }

    Ok(Json(alerts))
}
