//! clinsight-core
//!
//! Pure domain types, error vocabulary, and S3 key conventions.
//! No AWS SDK dependency — this is the shared vocabulary of the Clinsight
//! system.

pub mod error;
pub mod models;
pub mod s3_keys;
