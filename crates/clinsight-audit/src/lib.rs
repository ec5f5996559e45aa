//! clinsight-audit
//!
//! Structured audit events and the clinical alert sink.

pub mod alerts;
pub mod events;
