use crate::domain::column::{Column, ColumnId};
use crate::domain::entity::Entity;
use crate::domain::ordering::{array_move, insert_before};
use crate::domain::task::{Task, TaskId};
use crate::error::{KanbanError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{debug, trace, warn};

/// Board configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub name: String,
    /// Prefix of the generated title for new columns ("Column 3")
    pub column_title_prefix: String,
    /// Prefix of the generated content for new tasks ("Task 7")
    pub task_content_prefix: String,
    /// Distance in pixels the pointer has to travel from its press point
    /// before a press turns into a drag
    pub activation_distance: f64,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            name: "Kanban Board".to_string(),
            column_title_prefix: "Column".to_string(),
            task_content_prefix: "Task".to_string(),
            activation_distance: 3.0,
        }
    }
}

impl BoardConfig {
    /// Parses a configuration from JSON. Missing fields fall back to their
    /// defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.activation_distance.is_finite() || self.activation_distance < 0.0 {
            return Err(KanbanError::ConfigError(format!(
                "activation_distance must be a non-negative number, got {}",
                self.activation_distance
            )));
        }
        if self.column_title_prefix.trim().is_empty() {
            return Err(KanbanError::ConfigError(
                "column_title_prefix must not be empty".to_string(),
            ));
        }
        if self.task_content_prefix.trim().is_empty() {
            return Err(KanbanError::ConfigError(
                "task_content_prefix must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Kanban board state
///
/// Columns are kept in display order. Tasks share a single ordered sequence;
/// the order of a column's tasks is their relative order in that sequence.
#[derive(Debug, Serialize)]
pub struct Board {
    pub config: BoardConfig,
    columns: Vec<Column>,
    tasks: Vec<Task>,
    next_column_number: u64,
    next_task_number: u64,
}

impl Board {
    pub fn new(config: BoardConfig) -> Self {
        Self {
            config,
            columns: Vec::new(),
            tasks: Vec::new(),
            next_column_number: 1,
            next_task_number: 1,
        }
    }

    fn next_column_id(&mut self) -> ColumnId {
        let id = ColumnId::new(self.next_column_number);
        self.next_column_number += 1;
        id
    }

    fn next_task_id(&mut self) -> TaskId {
        let id = TaskId::new(self.next_task_number);
        self.next_task_number += 1;
        id
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Tasks of one column, in display order
    pub fn tasks_in(&self, column_id: ColumnId) -> impl Iterator<Item = &Task> + '_ {
        self.tasks.iter().filter(move |t| t.column_id == column_id)
    }

    pub fn column(&self, id: ColumnId) -> Option<&Column> {
        self.columns.iter().find(|c| c.id == id)
    }

    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Whether the referenced column or task is still on the board
    pub fn contains(&self, entity: Entity) -> bool {
        match entity {
            Entity::Column(id) => self.column(id).is_some(),
            Entity::Task(id) => self.task(id).is_some(),
        }
    }

    /// 1-based display position of a column
    pub fn column_number(&self, id: ColumnId) -> Option<usize> {
        self.columns.iter().position(|c| c.id == id).map(|i| i + 1)
    }

    /// 1-based display position of a task inside its column
    pub fn task_number(&self, id: TaskId) -> Option<usize> {
        let task = self.task(id)?;
        self.tasks_in(task.column_id)
            .position(|t| t.id == id)
            .map(|i| i + 1)
    }

    fn column_index(&self, id: ColumnId) -> Result<usize> {
        self.columns
            .iter()
            .position(|c| c.id == id)
            .ok_or(KanbanError::ColumnNotFound(id))
    }

    fn task_index(&self, id: TaskId) -> Result<usize> {
        self.tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or(KanbanError::TaskNotFound(id))
    }

    /// Appends a column with a generated title
    pub fn create_column(&mut self) -> ColumnId {
        let id = self.next_column_id();
        let title = format!("{} {}", self.config.column_title_prefix, self.columns.len() + 1);
        debug!(column = %id, %title, "created column");
        self.columns.push(Column::new(id, title));
        id
    }

    /// Removes a column together with every task it holds. Returns how many
    /// tasks went with it.
    pub fn delete_column(&mut self, id: ColumnId) -> Result<usize> {
        let index = self.column_index(id)?;
        self.columns.remove(index);

        let before = self.tasks.len();
        self.tasks.retain(|t| t.column_id != id);
        let removed = before - self.tasks.len();

        debug!(column = %id, removed_tasks = removed, "deleted column");
        debug_assert!(self.check_invariants().is_ok());
        Ok(removed)
    }

    pub fn rename_column(&mut self, id: ColumnId, title: impl Into<String>) -> Result<()> {
        let index = self.column_index(id)?;
        let title = title.into();
        trace!(column = %id, %title, "renamed column");
        self.columns[index].set_title(title);
        Ok(())
    }

    /// Appends a task to `column_id`. Unknown columns are rejected so that no
    /// task can reference a column that does not exist.
    pub fn create_task(&mut self, column_id: ColumnId) -> Result<TaskId> {
        if self.column(column_id).is_none() {
            warn!(column = %column_id, "refusing to create task in unknown column");
            return Err(KanbanError::ColumnNotFound(column_id));
        }

        let id = self.next_task_id();
        let content = format!("{} {}", self.config.task_content_prefix, self.tasks.len() + 1);
        debug!(task = %id, column = %column_id, "created task");
        self.tasks.push(Task::new(id, column_id, content));
        Ok(id)
    }

    pub fn delete_task(&mut self, id: TaskId) -> Result<()> {
        let index = self.task_index(id)?;
        self.tasks.remove(index);
        debug!(task = %id, "deleted task");
        Ok(())
    }

    pub fn update_task(&mut self, id: TaskId, content: impl Into<String>) -> Result<()> {
        let index = self.task_index(id)?;
        self.tasks[index].set_content(content.into());
        trace!(task = %id, "updated task content");
        Ok(())
    }

    /// Moves `active` to the position currently held by `over`
    pub fn move_column(&mut self, active: ColumnId, over: ColumnId) -> Result<()> {
        if active == over {
            return Err(KanbanError::SelfReference(active.to_string()));
        }
        let from = self.column_index(active)?;
        let to = self.column_index(over)?;

        array_move(&mut self.columns, from, to);
        debug!(column = %active, from, to, "moved column");
        Ok(())
    }

    /// Moves `active` to the position of `over` in the shared task sequence.
    ///
    /// When `over` sits in another column, `active` first joins that column
    /// and is then placed directly before `over`.
    pub fn move_task(&mut self, active: TaskId, over: TaskId) -> Result<()> {
        if active == over {
            return Err(KanbanError::SelfReference(active.to_string()));
        }
        let from = self.task_index(active)?;
        let to = self.task_index(over)?;
        let target_column = self.tasks[to].column_id;

        if self.tasks[from].reassign(target_column) {
            let landed = insert_before(&mut self.tasks, from, to);
            debug!(task = %active, column = %target_column, from, to = ?landed, "moved task across columns");
        } else {
            array_move(&mut self.tasks, from, to);
            debug!(task = %active, from, to, "moved task");
        }
        Ok(())
    }

    /// Moves `active` into `column_id` without changing its place in the
    /// shared sequence. Used when hovering empty column space.
    pub fn move_task_onto_column(&mut self, active: TaskId, column_id: ColumnId) -> Result<()> {
        if self.column(column_id).is_none() {
            return Err(KanbanError::ColumnNotFound(column_id));
        }
        let index = self.task_index(active)?;

        if self.tasks[index].reassign(column_id) {
            debug!(task = %active, column = %column_id, "moved task onto column");
        }
        Ok(())
    }

    /// Verifies that ids are unique and every task references a live column
    pub fn check_invariants(&self) -> Result<()> {
        let mut column_ids = HashSet::with_capacity(self.columns.len());
        for column in &self.columns {
            if !column_ids.insert(column.id) {
                return Err(KanbanError::InvariantViolation(format!(
                    "duplicate column {}",
                    column.id
                )));
            }
        }

        let mut task_ids = HashSet::with_capacity(self.tasks.len());
        for task in &self.tasks {
            if !task_ids.insert(task.id) {
                return Err(KanbanError::InvariantViolation(format!(
                    "duplicate task {}",
                    task.id
                )));
            }
            if !column_ids.contains(&task.column_id) {
                return Err(KanbanError::InvariantViolation(format!(
                    "task {} references missing column {}",
                    task.id, task.column_id
                )));
            }
        }
        Ok(())
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(BoardConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(board: &Board) -> Vec<TaskId> {
        board.tasks().iter().map(|t| t.id).collect()
    }

    fn column_ids(board: &Board) -> Vec<ColumnId> {
        board.columns().iter().map(|c| c.id).collect()
    }

    #[test]
    fn test_board_creation() {
        let board = Board::default();
        assert!(board.columns().is_empty());
        assert!(board.tasks().is_empty());
        assert_eq!(board.config.activation_distance, 3.0);
    }

    #[test]
    fn test_create_column_titles_follow_count() {
        let mut board = Board::default();
        let c1 = board.create_column();
        let c2 = board.create_column();

        assert_eq!(board.column(c1).unwrap().title, "Column 1");
        assert_eq!(board.column(c2).unwrap().title, "Column 2");

        board.delete_column(c1).unwrap();
        let c3 = board.create_column();
        assert_eq!(board.column(c3).unwrap().title, "Column 2");
        assert_ne!(c3, c1);
    }

    #[test]
    fn test_ids_are_never_reused() {
        let mut board = Board::default();
        let c1 = board.create_column();
        let t1 = board.create_task(c1).unwrap();
        board.delete_task(t1).unwrap();
        let t2 = board.create_task(c1).unwrap();
        assert_ne!(t1, t2);
    }

    #[test]
    fn test_ids_continue_past_u32_range() {
        let mut board = Board::default();
        board.next_column_number = u64::from(u32::MAX);
        board.next_task_number = u64::from(u32::MAX);

        let c1 = board.create_column();
        let c2 = board.create_column();
        let t1 = board.create_task(c1).unwrap();
        let t2 = board.create_task(c2).unwrap();

        assert_eq!(c2.number(), u64::from(u32::MAX) + 1);
        assert_eq!(t2.to_string(), "TASK4294967296");
        assert_ne!(t1, t2);
        board.check_invariants().unwrap();
    }

    #[test]
    fn test_delete_column_cascades() {
        let mut board = Board::default();
        let c1 = board.create_column();
        let c2 = board.create_column();
        board.create_task(c1).unwrap();
        let t2 = board.create_task(c2).unwrap();
        board.create_task(c1).unwrap();

        assert_eq!(board.delete_column(c1).unwrap(), 2);
        assert_eq!(column_ids(&board), vec![c2]);
        assert_eq!(ids(&board), vec![t2]);
        board.check_invariants().unwrap();
    }

    #[test]
    fn test_missing_ids_are_no_ops() {
        let mut board = Board::default();
        let c1 = board.create_column();
        let t1 = board.create_task(c1).unwrap();
        let before_columns = board.columns().to_vec();
        let before_tasks = board.tasks().to_vec();

        let ghost_column = ColumnId::new(99);
        let ghost_task = TaskId::new(99);
        assert!(matches!(
            board.delete_column(ghost_column),
            Err(KanbanError::ColumnNotFound(_))
        ));
        assert!(board.rename_column(ghost_column, "x").is_err());
        assert!(board.delete_task(ghost_task).is_err());
        assert!(board.update_task(ghost_task, "x").is_err());
        assert!(board.move_column(c1, ghost_column).is_err());
        assert!(board.move_task(t1, ghost_task).is_err());
        assert!(board.move_task_onto_column(ghost_task, c1).is_err());

        assert_eq!(board.columns(), before_columns.as_slice());
        assert_eq!(board.tasks(), before_tasks.as_slice());
    }

    #[test]
    fn test_contains() {
        let mut board = Board::default();
        let c1 = board.create_column();
        let t1 = board.create_task(c1).unwrap();

        assert!(board.contains(Entity::Column(c1)));
        assert!(board.contains(Entity::Task(t1)));

        board.delete_column(c1).unwrap();
        assert!(!board.contains(Entity::Column(c1)));
        assert!(!board.contains(Entity::Task(t1)));
    }

    #[test]
    fn test_create_task_rejects_unknown_column() {
        let mut board = Board::default();
        let result = board.create_task(ColumnId::new(1));
        assert!(matches!(result, Err(KanbanError::ColumnNotFound(_))));
        assert!(board.tasks().is_empty());
    }

    #[test]
    fn test_task_content_follows_total_count() {
        let mut board = Board::default();
        let c1 = board.create_column();
        let c2 = board.create_column();
        board.create_task(c1).unwrap();
        let t2 = board.create_task(c2).unwrap();
        assert_eq!(board.task(t2).unwrap().content, "Task 2");
    }

    #[test]
    fn test_rename_and_update() {
        let mut board = Board::default();
        let c1 = board.create_column();
        let t1 = board.create_task(c1).unwrap();

        board.rename_column(c1, "Backlog").unwrap();
        board.update_task(t1, "Write release notes").unwrap();

        assert_eq!(board.column(c1).unwrap().title, "Backlog");
        assert_eq!(board.task(t1).unwrap().content, "Write release notes");
    }

    #[test]
    fn test_move_column() {
        let mut board = Board::default();
        let c1 = board.create_column();
        let c2 = board.create_column();
        let c3 = board.create_column();

        board.move_column(c1, c3).unwrap();
        assert_eq!(column_ids(&board), vec![c2, c3, c1]);

        board.move_column(c1, c2).unwrap();
        assert_eq!(column_ids(&board), vec![c1, c2, c3]);
        assert_eq!(board.column_number(c3), Some(3));
    }

    #[test]
    fn test_move_task_within_column() {
        let mut board = Board::default();
        let c1 = board.create_column();
        let t1 = board.create_task(c1).unwrap();
        let t2 = board.create_task(c1).unwrap();
        let t3 = board.create_task(c1).unwrap();

        board.move_task(t1, t3).unwrap();
        assert_eq!(ids(&board), vec![t2, t3, t1]);
        assert!(board.tasks().iter().all(|t| t.column_id == c1));
        assert_eq!(board.task_number(t1), Some(3));
    }

    #[test]
    fn test_move_task_across_columns_lands_before_target() {
        let mut board = Board::default();
        let c1 = board.create_column();
        let c2 = board.create_column();
        let t1 = board.create_task(c1).unwrap();
        let t2 = board.create_task(c1).unwrap();
        let t3 = board.create_task(c2).unwrap();

        board.move_task(t1, t3).unwrap();

        assert_eq!(ids(&board), vec![t2, t1, t3]);
        assert_eq!(board.task(t1).unwrap().column_id, c2);
        assert_eq!(board.task(t2).unwrap().column_id, c1);
        assert_eq!(board.task_number(t1), Some(1));
    }

    #[test]
    fn test_move_task_across_columns_upwards() {
        let mut board = Board::default();
        let c1 = board.create_column();
        let c2 = board.create_column();
        let t1 = board.create_task(c1).unwrap();
        let t2 = board.create_task(c2).unwrap();
        let t3 = board.create_task(c2).unwrap();

        board.move_task(t3, t1).unwrap();

        assert_eq!(ids(&board), vec![t3, t1, t2]);
        assert_eq!(board.task(t3).unwrap().column_id, c1);
    }

    #[test]
    fn test_move_task_onto_column_keeps_sequence_index() {
        let mut board = Board::default();
        let c1 = board.create_column();
        let c2 = board.create_column();
        let t1 = board.create_task(c1).unwrap();
        let t2 = board.create_task(c1).unwrap();

        board.move_task_onto_column(t1, c2).unwrap();

        assert_eq!(ids(&board), vec![t1, t2]);
        assert_eq!(board.task(t1).unwrap().column_id, c2);
        assert_eq!(board.tasks_in(c2).count(), 1);
    }

    #[test]
    fn test_move_task_onto_unknown_column_is_rejected() {
        let mut board = Board::default();
        let c1 = board.create_column();
        let t1 = board.create_task(c1).unwrap();

        let result = board.move_task_onto_column(t1, ColumnId::new(42));
        assert!(matches!(result, Err(KanbanError::ColumnNotFound(_))));
        assert_eq!(board.task(t1).unwrap().column_id, c1);
    }

    #[test]
    fn test_self_moves_leave_board_unchanged() {
        let mut board = Board::default();
        let c1 = board.create_column();
        board.create_column();
        let t1 = board.create_task(c1).unwrap();
        board.create_task(c1).unwrap();

        let before = serde_json::to_string(&board).unwrap();

        assert!(matches!(
            board.move_column(c1, c1),
            Err(KanbanError::SelfReference(_))
        ));
        assert!(matches!(
            board.move_task(t1, t1),
            Err(KanbanError::SelfReference(_))
        ));
        board.move_task_onto_column(t1, c1).unwrap();

        assert_eq!(serde_json::to_string(&board).unwrap(), before);
    }

    #[test]
    fn test_config_from_json() {
        let config = BoardConfig::from_json(r#"{"name": "Sprint", "activation_distance": 8}"#).unwrap();
        assert_eq!(config.name, "Sprint");
        assert_eq!(config.activation_distance, 8.0);
        assert_eq!(config.column_title_prefix, "Column");
    }

    #[test]
    fn test_config_validation() {
        assert!(matches!(
            BoardConfig::from_json(r#"{"activation_distance": -1}"#),
            Err(KanbanError::ConfigError(_))
        ));
        assert!(matches!(
            BoardConfig::from_json(r#"{"task_content_prefix": "  "}"#),
            Err(KanbanError::ConfigError(_))
        ));
        assert!(matches!(
            BoardConfig::from_json("not json"),
            Err(KanbanError::SerializationError(_))
        ));
    }

    #[test]
    fn test_custom_prefixes() {
        let config = BoardConfig {
            column_title_prefix: "Lane".to_string(),
            task_content_prefix: "Card".to_string(),
            ..BoardConfig::default()
        };
        let mut board = Board::new(config);
        let c1 = board.create_column();
        let t1 = board.create_task(c1).unwrap();
        assert_eq!(board.column(c1).unwrap().title, "Lane 1");
        assert_eq!(board.task(t1).unwrap().content, "Card 1");
    }
}
