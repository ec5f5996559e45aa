//! S3 key/path conventions.
//!
//! Pure string functions — no AWS SDK dependency. These define the canonical
//! layout of objects in the Clinsight S3 bucket.

use uuid::Uuid;

pub fn consultation(id: Uuid) -> String {
    format!("consultations/{id}.json")
}

pub fn alert(id: Uuid) -> String {
    format!("alerts/{id}.json")
}

pub fn patient_consultations_prefix(patient_id: &str) -> String {
    format!("patients/{patient_id}/consultations/")
}

pub const CONSULTATIONS_PREFIX: &str = "consultations/";

pub const ALERTS_PREFIX: &str = "alerts/";
