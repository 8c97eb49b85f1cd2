//! Single-slot clipboard.

use nyvo_core::VisualObject;

/// Offset applied to every paste, in workspace units.
pub const PASTE_OFFSET: f32 = 10.0;

/// Holds the cloned objects of the last copy. One slot: a new copy
/// replaces it, an empty copy leaves it untouched.
pub struct Clipboard {
    slot: Vec<VisualObject>,
}

impl Clipboard {
    pub fn new() -> Self {
        Self { slot: Vec::new() }
    }

    /// Store clones of the given objects. An empty selection leaves the
    /// slot as it was.
    pub fn copy_from(&mut self, objects: Vec<VisualObject>) -> bool {
        if objects.is_empty() {
            log::debug!("clipboard: nothing selected, slot kept");
            return false;
        }
        self.slot = objects;
        true
    }

    pub fn is_empty(&self) -> bool {
        self.slot.is_empty()
    }

    /// Clone the slot for insertion: fresh ids, offset from the stored
    /// position, interactive flags forced on. The slot itself never moves,
    /// so repeated pastes land on the same spot.
    pub fn paste(&self) -> Vec<VisualObject> {
        self.slot
            .iter()
            .map(|template| {
                let mut object = template.duplicate();
                object.left += PASTE_OFFSET;
                object.top += PASTE_OFFSET;
                object.selectable = true;
                object.evented = true;
                object
            })
            .collect()
    }
}

impl Default for Clipboard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nyvo_core::{Color, ObjectKind};

    fn rect_at(left: f32, top: f32) -> VisualObject {
        let mut o = VisualObject::new(ObjectKind::Rect {
            width: 100.0,
            height: 100.0,
            rx: 0.0,
            ry: 0.0,
        });
        o.left = left;
        o.top = top;
        o.fill = Some(Color::rgba(0.0, 0.0, 1.0, 1.0));
        o
    }

    #[test]
    fn empty_copy_keeps_the_slot() {
        let mut clipboard = Clipboard::new();
        assert!(clipboard.copy_from(vec![rect_at(0.0, 0.0)]));

        assert!(!clipboard.copy_from(Vec::new()));
        assert!(!clipboard.is_empty(), "slot must survive an empty copy");
    }

    #[test]
    fn paste_offsets_and_remints_ids() {
        let mut clipboard = Clipboard::new();
        let original = rect_at(100.0, 100.0);
        let original_id = original.id;
        clipboard.copy_from(vec![original]);

        let pasted = clipboard.paste();
        assert_eq!(pasted.len(), 1);
        assert_eq!((pasted[0].left, pasted[0].top), (110.0, 110.0));
        assert_ne!(pasted[0].id, original_id);
        assert!(pasted[0].evented);
    }

    #[test]
    fn repeated_pastes_land_on_the_same_spot() {
        let mut clipboard = Clipboard::new();
        clipboard.copy_from(vec![rect_at(100.0, 100.0)]);

        let first = clipboard.paste();
        let second = clipboard.paste();
        assert_eq!((first[0].left, first[0].top), (110.0, 110.0));
        assert_eq!((second[0].left, second[0].top), (110.0, 110.0));
        assert_ne!(first[0].id, second[0].id);
    }

    #[test]
    fn pasting_an_empty_slot_yields_nothing() {
        let clipboard = Clipboard::new();
        assert!(clipboard.paste().is_empty());
    }
}
