pub mod alerts;
pub mod conditions;
pub mod consultations;
pub mod health;
