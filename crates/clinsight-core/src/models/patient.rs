use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Patient context consumed by the pipeline.
///
/// Everything defaults to empty so partial intake data deserializes
/// cleanly; the scorers treat missing data as contributing nothing.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PatientContext {
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub medical_history: Vec<String>,
    #[serde(default)]
    pub comorbidities: Vec<String>,
    #[serde(default)]
    pub medications: Vec<String>,
}

impl PatientContext {
    pub fn age_or_default(&self) -> u32 {
        self.age.unwrap_or(0)
    }

    pub fn is_male(&self) -> bool {
        self.gender
            .as_deref()
            .is_some_and(|g| g.eq_ignore_ascii_case("male") || g.eq_ignore_ascii_case("m"))
    }
}
