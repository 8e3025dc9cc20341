/// Result alias for simulation operations.
pub type SimResult<T> = Result<T, SimError>;

/// Errors raised while configuring a batch.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SimError {
    /// The trial mode name is not recognized.
    #[error("unknown trial mode '{0}' (expected independent or paired)")]
    UnknownMode(String),
}
