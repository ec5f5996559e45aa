use axum::extract::Path;
use axum::Json;

use clinsight_knowledge::conditions::{self, ConditionProfile};

use crate::error::ApiError;

/// List all condition profiles in the knowledge base.
pub async fn list_conditions() -> Json<Vec<ConditionProfile>> {
    Json(conditions::all().to_vec())
}

pub async fn get_condition_detail(
    Path(key): Path<String>,
) -> Result<Json<ConditionProfile>, ApiError> {
    conditions::lookup(&key)
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("unknown condition: {key}")))
}
