use thiserror::Error;

#[derive(Debug, Error)]
pub enum KnowledgeError {
    #[error("unknown condition: {0}")]
    UnknownCondition(String),

    #[error("unknown finding: {0}")]
    UnknownFinding(String),
}
