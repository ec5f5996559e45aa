use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Token counts for a single model invocation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TokenCount {
    pub input: u64,
    pub output: u64,
}
