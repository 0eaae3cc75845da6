//! Read-only projection of a session for the rendering layer.

use crate::domain::{Column, Entity, Task};
use crate::drag::DragOverlay;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct TaskView<'a> {
    /// 1-based position inside its column
    pub number: usize,
    pub task: &'a Task,
    /// Rendered as an empty slot because the task floats in the overlay
    pub placeholder: bool,
    pub editing: bool,
}

#[derive(Debug, Serialize)]
pub struct ColumnView<'a> {
    /// 1-based position on the board
    pub number: usize,
    pub column: &'a Column,
    pub placeholder: bool,
    pub editing: bool,
    pub tasks: Vec<TaskView<'a>>,
}

/// Everything needed to draw one frame of the board
#[derive(Debug, Serialize)]
pub struct BoardView<'a> {
    pub name: &'a str,
    pub columns: Vec<ColumnView<'a>>,
    pub overlay: Option<DragOverlay>,
    pub editing: Option<Entity>,
}
