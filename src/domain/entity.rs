use crate::domain::column::ColumnId;
use crate::domain::task::TaskId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// What kind of board item an [`Entity`] refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Column,
    Task,
}

/// A reference to anything on the board that can be clicked, dragged or
/// hovered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "id", rename_all = "lowercase")]
pub enum Entity {
    Column(ColumnId),
    Task(TaskId),
}

impl Entity {
    pub fn kind(&self) -> EntityKind {
        match self {
            Self::Column(_) => EntityKind::Column,
            Self::Task(_) => EntityKind::Task,
        }
    }
}

impl From<ColumnId> for Entity {
    fn from(id: ColumnId) -> Self {
        Self::Column(id)
    }
}

impl From<TaskId> for Entity {
    fn from(id: TaskId) -> Self {
        Self::Task(id)
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Column(id) => write!(f, "{}", id),
            Self::Task(id) => write!(f, "{}", id),
        }
    }
}
