//! clinsight-bedrock
//!
//! Narrative enrichment via the Bedrock Converse API. Turns a rule-derived
//! diagnostic hypothesis into clinician-readable rationale text. Advisory
//! only: nothing returned from here feeds back into probabilities or
//! priorities.

pub mod client;
pub mod error;
pub mod narrative;
pub mod tokens;
