//! Selection state mirrored off scene events.

use nyvo_core::{ObjectId, SceneEvent};

/// Tracks the active selection and notifies the host when it clears, so
/// selection-dependent toolbars can close.
pub struct SelectionTracker {
    selected: Vec<ObjectId>,
    on_cleared: Option<Box<dyn FnMut()>>,
}

impl SelectionTracker {
    pub fn new() -> Self {
        Self {
            selected: Vec::new(),
            on_cleared: None,
        }
    }

    /// Install the clear-selection callback.
    pub fn set_on_cleared<F: FnMut() + 'static>(&mut self, callback: F) {
        self.on_cleared = Some(Box::new(callback));
    }

    /// Fold one scene event into the mirror.
    pub fn handle(&mut self, event: &SceneEvent) {
        match event {
            SceneEvent::SelectionCreated(ids) | SceneEvent::SelectionUpdated(ids) => {
                self.selected = ids.clone();
            }
            SceneEvent::SelectionCleared => {
                self.selected.clear();
                if let Some(callback) = self.on_cleared.as_mut() {
                    callback();
                }
            }
            _ => {}
        }
    }

    pub fn selected(&self) -> &[ObjectId] {
        &self.selected
    }

    pub fn first(&self) -> Option<ObjectId> {
        self.selected.first().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }
}

impl Default for SelectionTracker {
    fn default() -> Self {
        Self::new()
    }
}
