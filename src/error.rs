use thiserror::Error;

/// Failures reported by queue operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QueueError {
    /// A slot or string reservation could not be satisfied
    #[error("allocation failed")]
    Allocation,

    /// The queue handle was absent
    #[error("queue handle is absent")]
    InvalidHandle,

    /// The operation needs at least one element
    #[error("queue is empty")]
    Empty,
}

impl From<std::collections::TryReserveError> for QueueError {
    fn from(_: std::collections::TryReserveError) -> Self {
        QueueError::Allocation
    }
}
