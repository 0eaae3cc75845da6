use crate::domain::column::ColumnId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Unique identifier for a task within a board session (e.g., TASK1, TASK2)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TaskId(u64);

impl TaskId {
    const PREFIX: &'static str = "TASK";

    /// Creates a new TaskId from a counter
    pub fn new(counter: u64) -> Self {
        Self(counter)
    }

    /// Returns the counter value
    pub fn number(&self) -> u64 {
        self.0
    }
}

impl FromStr for TaskId {
    type Err = crate::error::KanbanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.to_uppercase();
        normalized
            .strip_prefix(Self::PREFIX)
            .and_then(|digits| digits.parse::<u64>().ok())
            .map(Self)
            .ok_or_else(|| crate::error::KanbanError::InvalidTaskId(s.to_string()))
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", Self::PREFIX, self.0)
    }
}

/// A content-bearing card that belongs to exactly one column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub column_id: ColumnId,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new task in the given column
    pub fn new(id: TaskId, column_id: ColumnId, content: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            column_id,
            content,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replaces the content
    pub fn set_content(&mut self, content: String) {
        self.content = content;
        self.updated_at = Utc::now();
    }

    /// Moves the task into another column. Returns false when it already
    /// belongs there, in which case nothing is touched.
    pub fn reassign(&mut self, column_id: ColumnId) -> bool {
        if self.column_id == column_id {
            return false;
        }
        self.column_id = column_id;
        self.updated_at = Utc::now();
        true
    }
}
