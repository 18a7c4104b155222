use wt_core::CoreError;

/// Alias for `Result<T, SimError>`.
pub type SimResult<T> = Result<T, SimError>;

/// Errors raised while running a simulation.
#[derive(Debug, thiserror::Error)]
pub enum SimError {
    /// A world or entity store operation failed.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// No kind with this name is registered.
    #[error("unknown kind: {0}")]
    UnknownKind(String),

    /// A kind specification is inconsistent.
    #[error("invalid kind {kind}: {reason}")]
    InvalidKind {
        /// The kind's name.
        kind: String,
        /// What is wrong with it.
        reason: String,
    },

    /// A custom system failed.
    #[error("system error: {0}")]
    SystemError(String),
}
