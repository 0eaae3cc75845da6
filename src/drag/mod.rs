pub mod controller;
pub mod sensor;

pub use controller::{ColumnSnapshot, DragController, DragEvent, DragOverlay, DragState};
pub use sensor::{Gesture, Point, PointerSensor};
