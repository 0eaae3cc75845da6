use crate::domain::Entity;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Pointer position in the rendering layer's coordinate space
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
enum PointerState {
    #[default]
    Released,
    Pressed {
        target: Entity,
        origin: Point,
        draggable: bool,
    },
    Dragging {
        target: Entity,
    },
}

/// What a pointer gesture turned out to be
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    /// The pointer travelled far enough for a drag to begin
    DragStarted(Entity),
    /// The pointer was released while dragging
    DragReleased(Entity),
    /// The pointer was released before a drag began
    Click(Entity),
}

/// Tells clicks and drags apart.
///
/// A press only becomes a drag once the pointer has moved strictly more than
/// `activation_distance` away from where it went down.
#[derive(Debug, Clone)]
pub struct PointerSensor {
    activation_distance: f64,
    state: PointerState,
}

impl PointerSensor {
    pub fn new(activation_distance: f64) -> Self {
        Self {
            activation_distance,
            state: PointerState::Released,
        }
    }

    pub fn activation_distance(&self) -> f64 {
        self.activation_distance
    }

    pub fn is_pressed(&self) -> bool {
        !matches!(self.state, PointerState::Released)
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, PointerState::Dragging { .. })
    }

    /// Records a press on `target`. A press on an entity that is not
    /// `draggable` can still end as a click.
    pub fn press(&mut self, target: Entity, at: Point, draggable: bool) {
        if self.is_pressed() {
            trace!(%target, "pointer already down, ignoring press");
            return;
        }
        self.state = PointerState::Pressed {
            target,
            origin: at,
            draggable,
        };
    }

    pub fn move_to(&mut self, to: Point) -> Option<Gesture> {
        match self.state {
            PointerState::Pressed {
                target,
                origin,
                draggable: true,
            } if origin.distance_to(to) > self.activation_distance => {
                trace!(%target, distance = origin.distance_to(to), "drag activated");
                self.state = PointerState::Dragging { target };
                Some(Gesture::DragStarted(target))
            }
            _ => None,
        }
    }

    pub fn release(&mut self) -> Option<Gesture> {
        match std::mem::take(&mut self.state) {
            PointerState::Released => None,
            PointerState::Pressed { target, .. } => Some(Gesture::Click(target)),
            PointerState::Dragging { target } => Some(Gesture::DragReleased(target)),
        }
    }

    /// Forgets the current press without producing a gesture
    pub fn reset(&mut self) {
        self.state = PointerState::Released;
    }

    /// The entity the current press started on
    pub fn target(&self) -> Option<Entity> {
        match self.state {
            PointerState::Released => None,
            PointerState::Pressed { target, .. } | PointerState::Dragging { target } => Some(target),
        }
    }
}
