//! # Kanban Core
//!
//! Board model and drag-reorder state machine for interactive kanban boards.
//!
//! A [`BoardSession`] owns the ordered columns and tasks of one board and
//! turns rendering-layer intents (create, rename, delete, pointer and drag
//! events) into board updates. Rendering itself lives outside this crate.

pub mod domain;
pub mod drag;
pub mod edit;
pub mod error;
pub mod intent;
pub mod session;
pub mod view;

// Re-export commonly used types
pub use domain::{
    board::{Board, BoardConfig},
    column::{Column, ColumnId},
    entity::{Entity, EntityKind},
    task::{Task, TaskId},
};
pub use drag::{DragController, DragEvent, DragOverlay, DragState, Point};
pub use error::{KanbanError, Result};
pub use intent::Intent;
pub use session::BoardSession;
pub use view::BoardView;
