pub mod board;
pub mod column;
pub mod entity;
pub mod ordering;
pub mod task;

pub use board::{Board, BoardConfig};
pub use column::{Column, ColumnId};
pub use entity::{Entity, EntityKind};
pub use ordering::{array_move, insert_before};
pub use task::{Task, TaskId};
