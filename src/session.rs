use crate::domain::{Board, BoardConfig, Column, ColumnId, Entity, Task, TaskId};
use crate::drag::{DragController, DragEvent, DragOverlay, DragState, Gesture, Point, PointerSensor};
use crate::edit::EditState;
use crate::error::Result;
use crate::intent::Intent;
use crate::view::{BoardView, ColumnView, TaskView};
use tracing::{debug, warn};

/// One interactive board, owned by a single rendering layer.
///
/// Every intent runs to completion before the next one is accepted. Stale or
/// self-targeting intents are dropped quietly; the board never reports a
/// fault back to the caller.
///
/// # Examples
/// ```
/// use kanban_core::{BoardSession, Entity, Intent};
///
/// let mut session = BoardSession::default();
/// let todo = session.create_column();
/// let done = session.create_column();
/// let task = session.create_task(todo).unwrap();
///
/// session.apply(Intent::DragStart(Entity::Task(task)));
/// session.apply(Intent::DragOver {
///     active: Entity::Task(task),
///     over: Some(Entity::Column(done)),
/// });
/// session.apply(Intent::DragEnd);
///
/// assert_eq!(session.board().task(task).unwrap().column_id, done);
/// ```
#[derive(Debug)]
pub struct BoardSession {
    board: Board,
    drag: DragController,
    sensor: PointerSensor,
    edit: EditState,
}

impl BoardSession {
    /// Starts an empty board
    pub fn new(config: BoardConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::with_config(config))
    }

    fn with_config(config: BoardConfig) -> Self {
        debug!(board = %config.name, "board session started");
        Self {
            sensor: PointerSensor::new(config.activation_distance),
            board: Board::new(config),
            drag: DragController::new(),
            edit: EditState::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn columns(&self) -> &[Column] {
        self.board.columns()
    }

    pub fn tasks(&self) -> &[Task] {
        self.board.tasks()
    }

    pub fn tasks_in(&self, column_id: ColumnId) -> impl Iterator<Item = &Task> + '_ {
        self.board.tasks_in(column_id)
    }

    pub fn drag_state(&self) -> &DragState {
        self.drag.state()
    }

    pub fn drag_overlay(&self) -> Option<DragOverlay> {
        self.drag.overlay(&self.board)
    }

    pub fn is_hidden(&self, entity: Entity) -> bool {
        self.drag.is_hidden(entity)
    }

    pub fn editing(&self) -> Option<Entity> {
        self.edit.editing()
    }

    /// Runs one intent. Returns the entity it created, if any.
    pub fn apply(&mut self, intent: Intent) -> Option<Entity> {
        match intent {
            Intent::CreateColumn => return Some(self.create_column().into()),
            Intent::DeleteColumn(id) => {
                self.delete_column(id);
            }
            Intent::RenameColumn(id, title) => {
                self.rename_column(id, title);
            }
            Intent::CreateTask(column_id) => return self.create_task(column_id).map(Entity::Task),
            Intent::DeleteTask(id) => {
                self.delete_task(id);
            }
            Intent::UpdateTask(id, content) => {
                self.update_task(id, content);
            }
            Intent::DragStart(entity) => {
                self.drag_start(entity);
            }
            Intent::DragOver { active, over } => self.drag_over(active, over),
            Intent::DragEnd => self.drag_end(),
            Intent::DragCancel => self.drag_cancel(),
            Intent::PointerDown { target, at } => self.pointer_down(target, at),
            Intent::PointerMove { to, over } => self.pointer_move(to, over),
            Intent::PointerUp => self.pointer_up(),
            Intent::FinishEditing => self.finish_editing(),
        }
        None
    }

    pub fn create_column(&mut self) -> ColumnId {
        self.board.create_column()
    }

    pub fn delete_column(&mut self, id: ColumnId) -> bool {
        let deleted = accept("delete column", self.board.delete_column(id)).is_some();
        self.forget_removed();
        deleted
    }

    pub fn rename_column(&mut self, id: ColumnId, title: impl Into<String>) -> bool {
        accept("rename column", self.board.rename_column(id, title)).is_some()
    }

    pub fn create_task(&mut self, column_id: ColumnId) -> Option<TaskId> {
        accept("create task", self.board.create_task(column_id))
    }

    pub fn delete_task(&mut self, id: TaskId) -> bool {
        let deleted = accept("delete task", self.board.delete_task(id)).is_some();
        self.forget_removed();
        deleted
    }

    pub fn update_task(&mut self, id: TaskId, content: impl Into<String>) -> bool {
        accept("update task", self.board.update_task(id, content)).is_some()
    }

    /// Begins dragging `entity` unless it is being edited. Returns whether a
    /// drag is in progress afterwards.
    pub fn drag_start(&mut self, entity: Entity) -> bool {
        if self.edit.is_editing(entity) {
            debug!(%entity, "entity is in edit mode, not dragging");
            return self.drag.is_dragging();
        }
        self.drag.handle(DragEvent::Start(entity), &mut self.board);
        self.drag.is_dragging()
    }

    pub fn drag_over(&mut self, active: Entity, over: Option<Entity>) {
        self.drag
            .handle(DragEvent::Over { active, over }, &mut self.board);
    }

    pub fn drag_end(&mut self) {
        self.drag.handle(DragEvent::End, &mut self.board);
    }

    pub fn drag_cancel(&mut self) {
        self.drag.handle(DragEvent::Cancel, &mut self.board);
        self.sensor.reset();
    }

    pub fn pointer_down(&mut self, target: Entity, at: Point) {
        if !self.board.contains(target) {
            debug!(%target, "pointer down on unknown entity");
            return;
        }
        let draggable = !self.edit.is_editing(target) && !self.drag.is_dragging();
        self.sensor.press(target, at, draggable);
    }

    /// Moves the pointer to `to`, currently above `over`. Activates a drag
    /// once the pointer has travelled far enough and reorders live while
    /// dragging.
    pub fn pointer_move(&mut self, to: Point, over: Option<Entity>) {
        if let Some(Gesture::DragStarted(entity)) = self.sensor.move_to(to) {
            if !self.drag_start(entity) {
                self.sensor.reset();
                return;
            }
        }
        if let Some(active) = self.drag.active() {
            self.drag_over(active, over);
        }
    }

    pub fn pointer_up(&mut self) {
        match self.sensor.release() {
            Some(Gesture::Click(entity)) if self.board.contains(entity) => self.edit.click(entity),
            Some(Gesture::DragReleased(_)) => self.drag_end(),
            _ => {}
        }
    }

    pub fn finish_editing(&mut self) {
        self.edit.finish();
    }

    /// Builds the frame the rendering layer draws
    pub fn view(&self) -> BoardView<'_> {
        let columns = self
            .board
            .columns()
            .iter()
            .enumerate()
            .map(|(index, column)| ColumnView {
                number: index + 1,
                column,
                placeholder: self.is_hidden(Entity::Column(column.id)),
                editing: self.edit.is_editing(Entity::Column(column.id)),
                tasks: self
                    .board
                    .tasks_in(column.id)
                    .enumerate()
                    .map(|(index, task)| TaskView {
                        number: index + 1,
                        task,
                        placeholder: self.is_hidden(Entity::Task(task.id)),
                        editing: self.edit.is_editing(Entity::Task(task.id)),
                    })
                    .collect(),
            })
            .collect();

        BoardView {
            name: &self.board.config.name,
            columns,
            overlay: self.drag_overlay(),
            editing: self.edit.editing(),
        }
    }

    /// Drops drag, press and edit state that points at deleted entities
    fn forget_removed(&mut self) {
        let board = &self.board;
        self.edit.retain(|entity| board.contains(entity));

        if self.drag.active().is_some_and(|e| !self.board.contains(e)) {
            self.drag_cancel();
        }
        if self.sensor.target().is_some_and(|e| !self.board.contains(e)) {
            self.sensor.reset();
        }
    }
}

impl Default for BoardSession {
    fn default() -> Self {
        Self::with_config(BoardConfig::default())
    }
}

/// Logs a rejected board operation and turns it into `None`
fn accept<T>(operation: &str, result: Result<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) if err.is_benign() => {
            debug!(operation, error = %err, "ignored stale intent");
            None
        }
        Err(err) => {
            warn!(operation, error = %err, "intent rejected");
            None
        }
    }
}
