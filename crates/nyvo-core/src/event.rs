//! Scene change notifications.
//!
//! The scene queues an event per mutation; the session drains the queue
//! after each operation and fans events out to the selection tracker,
//! history, and save hook. Everything is single-threaded and synchronous:
//! handlers observe events in queue order.

use crate::id::ObjectId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SceneEvent {
    ObjectAdded(ObjectId),
    ObjectRemoved(ObjectId),
    ObjectModified(ObjectId),
    SelectionCreated(Vec<ObjectId>),
    SelectionUpdated(Vec<ObjectId>),
    SelectionCleared,
}

impl SceneEvent {
    /// True for the events that change document content — exactly the ones
    /// that checkpoint history and trigger autosave. Selection and style
    /// churn never checkpoints.
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            SceneEvent::ObjectAdded(_) | SceneEvent::ObjectRemoved(_) | SceneEvent::ObjectModified(_)
        )
    }
}
