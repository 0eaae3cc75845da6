use crate::domain::{ColumnId, Entity, TaskId};
use crate::drag::Point;

/// Everything the rendering layer can ask a [`BoardSession`](crate::BoardSession) to do
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    CreateColumn,
    DeleteColumn(ColumnId),
    RenameColumn(ColumnId, String),
    CreateTask(ColumnId),
    DeleteTask(TaskId),
    UpdateTask(TaskId, String),

    DragStart(Entity),
    DragOver {
        active: Entity,
        over: Option<Entity>,
    },
    DragEnd,
    DragCancel,

    /// Raw pointer input; clicks and drags are told apart by the session
    PointerDown {
        target: Entity,
        at: Point,
    },
    PointerMove {
        to: Point,
        over: Option<Entity>,
    },
    PointerUp,

    /// Input lost focus, or Enter/Escape was pressed
    FinishEditing,
}
