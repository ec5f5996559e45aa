//! clinsight-engine
//!
//! The decision-support pipeline: evidence extraction, Bayesian differential
//! diagnosis, diagnostic suggestions, workup planning, and weighted risk
//! assessment, sequenced by the orchestrator. Pure given its inputs apart
//! from the optional narrative-enrichment call and the fire-and-forget
//! sinks, both consumed through traits.

pub mod error;
pub mod evidence;
pub mod orchestrator;
pub mod reasoning;
pub mod risk;
pub mod suggest;
pub mod workup;
