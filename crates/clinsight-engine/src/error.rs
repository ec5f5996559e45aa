use thiserror::Error;

/// Boxed collaborator error. Sink and enrichment failures are logged, never
/// propagated, so callers only need something printable.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, Error)]
pub enum DecisionError {
    /// The request failed validation; nothing was computed.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}
