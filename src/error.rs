use crate::domain::{ColumnId, TaskId};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, KanbanError>;

/// Every error returned by a board operation leaves the board unchanged.
#[derive(Debug, Error)]
pub enum KanbanError {
    #[error("Column not found: {0}")]
    ColumnNotFound(ColumnId),

    #[error("Task not found: {0}")]
    TaskNotFound(TaskId),

    #[error("Cannot move {0} onto itself")]
    SelfReference(String),

    #[error("Board invariant violated: {0}")]
    InvariantViolation(String),

    #[error("Invalid column ID format: {0}")]
    InvalidColumnId(String),

    #[error("Invalid task ID format: {0}")]
    InvalidTaskId(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl KanbanError {
    /// True for errors the UI can trigger through a stale or self-targeting
    /// event. These are expected and carry no fault.
    pub fn is_benign(&self) -> bool {
        matches!(
            self,
            Self::ColumnNotFound(_) | Self::TaskNotFound(_) | Self::SelfReference(_)
        )
    }
}
