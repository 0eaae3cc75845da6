use crate::domain::Entity;
use tracing::trace;

/// Tracks which column title or task content is being edited in place.
///
/// Only one entity is in edit mode at a time. An entity in edit mode cannot
/// be dragged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditState {
    editing: Option<Entity>,
}

impl EditState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn editing(&self) -> Option<Entity> {
        self.editing
    }

    pub fn is_editing(&self, entity: Entity) -> bool {
        self.editing == Some(entity)
    }

    /// A click on a column always enters edit mode; a click on a task
    /// toggles it.
    pub fn click(&mut self, entity: Entity) {
        self.editing = match entity {
            Entity::Task(_) if self.is_editing(entity) => None,
            _ => Some(entity),
        };
        trace!(editing = ?self.editing, "edit mode changed");
    }

    /// Leaves edit mode (blur, Enter or Escape)
    pub fn finish(&mut self) -> Option<Entity> {
        self.editing.take()
    }

    /// Drops edit mode if the edited entity no longer satisfies `alive`
    pub fn retain(&mut self, alive: impl Fn(Entity) -> bool) {
        if let Some(entity) = self.editing {
            if !alive(entity) {
                trace!(%entity, "edited entity removed");
                self.editing = None;
            }
        }
    }
}
