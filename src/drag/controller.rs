//! Drag-reorder state machine.
//!
//! A drag session exists from drag start until drag end or cancel. While it
//! lives, every drag-over event is turned into a move on the [`Board`] right
//! away, so the board order already reflects the gesture when it ends.

use crate::domain::{Board, Column, ColumnId, Entity, EntityKind, Task, TaskId};
use crate::error::Result;
use serde::Serialize;
use tracing::{debug, trace, warn};

/// Column and its tasks as they were when the drag started
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnSnapshot {
    pub column: Column,
    pub tasks: Vec<Task>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    DraggingColumn {
        active: ColumnId,
        snapshot: ColumnSnapshot,
        /// Last drop target a drag-over named. Leaving every target keeps it,
        /// so coming back to the same target does not move again.
        last_over: Option<Entity>,
    },
    DraggingTask {
        active: TaskId,
        snapshot: Task,
        last_over: Option<Entity>,
    },
}

/// Input to the state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragEvent {
    Start(Entity),
    /// The pointer is over `over`, or over no drop target at all
    Over {
        active: Entity,
        over: Option<Entity>,
    },
    End,
    Cancel,
}

impl DragState {
    pub fn is_dragging(&self) -> bool {
        !matches!(self, Self::Idle)
    }

    pub fn kind(&self) -> Option<EntityKind> {
        self.active().map(|entity| entity.kind())
    }

    /// The entity being dragged
    pub fn active(&self) -> Option<Entity> {
        match self {
            Self::Idle => None,
            Self::DraggingColumn { active, .. } => Some(Entity::Column(*active)),
            Self::DraggingTask { active, .. } => Some(Entity::Task(*active)),
        }
    }

    /// Consumes the current state and returns the next one, applying any
    /// move the event calls for to `board`.
    pub fn transition(self, event: DragEvent, board: &mut Board) -> Self {
        match event {
            DragEvent::Start(entity) => {
                if let Some(active) = self.active() {
                    debug!(%active, requested = %entity, "drag already in progress, ignoring start");
                    return self;
                }
                Self::start(entity, board)
            }
            DragEvent::Over { active, over } => {
                let mut state = self;
                if let Err(err) = state.drag_over(active, over, board) {
                    if err.is_benign() {
                        trace!(error = %err, "drag over skipped");
                    } else {
                        warn!(error = %err, "drag over rejected");
                    }
                }
                state
            }
            DragEvent::End => {
                if let Some(active) = self.active() {
                    debug!(%active, "drag ended");
                }
                Self::Idle
            }
            DragEvent::Cancel => {
                if let Some(active) = self.active() {
                    debug!(%active, "drag cancelled");
                }
                Self::Idle
            }
        }
    }

    fn start(entity: Entity, board: &Board) -> Self {
        match entity {
            Entity::Column(id) => match board.column(id) {
                Some(column) => {
                    debug!(column = %id, "drag started");
                    Self::DraggingColumn {
                        active: id,
                        snapshot: ColumnSnapshot {
                            column: column.clone(),
                            tasks: board.tasks_in(id).cloned().collect(),
                        },
                        last_over: None,
                    }
                }
                None => {
                    debug!(column = %id, "drag start on missing column");
                    Self::Idle
                }
            },
            Entity::Task(id) => match board.task(id) {
                Some(task) => {
                    debug!(task = %id, "drag started");
                    Self::DraggingTask {
                        active: id,
                        snapshot: task.clone(),
                        last_over: None,
                    }
                }
                None => {
                    debug!(task = %id, "drag start on missing task");
                    Self::Idle
                }
            },
        }
    }

    /// Applies the move for a drag-over event. Only a change of hover target
    /// moves anything; the order already reflects the last target.
    fn drag_over(&mut self, active: Entity, over: Option<Entity>, board: &mut Board) -> Result<()> {
        if self.active() != Some(active) {
            trace!(%active, "drag over for an entity that is not being dragged");
            return Ok(());
        }

        let Some(over) = over else {
            return Ok(());
        };
        let last_over = match self {
            Self::Idle => return Ok(()),
            Self::DraggingColumn { last_over, .. } | Self::DraggingTask { last_over, .. } => last_over,
        };
        if *last_over == Some(over) {
            return Ok(());
        }
        *last_over = Some(over);

        match (&*self, over) {
            (Self::DraggingColumn { active, .. }, Entity::Column(over)) => {
                board.move_column(*active, over)
            }
            (Self::DraggingTask { active, .. }, Entity::Task(over)) => board.move_task(*active, over),
            (Self::DraggingTask { active, .. }, Entity::Column(column)) => {
                board.move_task_onto_column(*active, column)
            }
            _ => Ok(()),
        }
    }
}

/// What the rendering layer floats under the pointer while dragging
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum DragOverlay {
    Column {
        /// 1-based position the column currently occupies
        number: Option<usize>,
        column: Column,
        tasks: Vec<Task>,
    },
    Task {
        /// 1-based position inside the column the task currently sits in
        number: Option<usize>,
        task: Task,
    },
}

/// Owns the drag state for one board session
#[derive(Debug, Default)]
pub struct DragController {
    state: DragState,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn is_dragging(&self) -> bool {
        self.state.is_dragging()
    }

    pub fn active(&self) -> Option<Entity> {
        self.state.active()
    }

    pub fn handle(&mut self, event: DragEvent, board: &mut Board) {
        let state = std::mem::take(&mut self.state);
        self.state = state.transition(event, board);
    }

    /// True for the entity whose regular slot shows a placeholder because it
    /// is being rendered in the overlay instead
    pub fn is_hidden(&self, entity: Entity) -> bool {
        self.state.active() == Some(entity)
    }

    /// Builds the overlay from the drag snapshot. Positions and a dragged
    /// column's task list come from the live board, falling back to the
    /// snapshot once the column is gone.
    pub fn overlay(&self, board: &Board) -> Option<DragOverlay> {
        match &self.state {
            DragState::Idle => None,
            DragState::DraggingColumn { active, snapshot, .. } => {
                let tasks = if board.column(*active).is_some() {
                    board.tasks_in(*active).cloned().collect()
                } else {
                    snapshot.tasks.clone()
                };
                Some(DragOverlay::Column {
                    number: board.column_number(*active),
                    column: snapshot.column.clone(),
                    tasks,
                })
            }
            DragState::DraggingTask { active, snapshot, .. } => Some(DragOverlay::Task {
                number: board.task_number(*active),
                task: snapshot.clone(),
            }),
        }
    }
}
