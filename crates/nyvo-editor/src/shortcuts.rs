//! Keyboard chord to editor action mapping.

/// Editor-level action a key chord resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorAction {
    Delete,
    Undo,
    Redo,
    Copy,
    Paste,
    Duplicate,
    Save,
    SelectAll,
}

/// The built-in chord table. Ctrl and the platform command key are
/// interchangeable.
pub struct ShortcutMap;

impl ShortcutMap {
    pub fn resolve(key: &str, ctrl: bool, shift: bool, alt: bool, meta: bool) -> Option<EditorAction> {
        if alt {
            return None;
        }
        let cmd = ctrl || meta;
        if cmd {
            return match (key.to_ascii_lowercase().as_str(), shift) {
                ("z", false) => Some(EditorAction::Undo),
                ("z", true) | ("y", _) => Some(EditorAction::Redo),
                ("c", false) => Some(EditorAction::Copy),
                ("v", false) => Some(EditorAction::Paste),
                ("d", false) => Some(EditorAction::Duplicate),
                ("s", false) => Some(EditorAction::Save),
                ("a", false) => Some(EditorAction::SelectAll),
                _ => None,
            };
        }
        match key {
            "Delete" | "Backspace" => Some(EditorAction::Delete),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_chords_resolve() {
        assert_eq!(ShortcutMap::resolve("z", true, false, false, false), Some(EditorAction::Undo));
        assert_eq!(ShortcutMap::resolve("Z", true, true, false, false), Some(EditorAction::Redo));
        assert_eq!(ShortcutMap::resolve("y", true, false, false, false), Some(EditorAction::Redo));
        assert_eq!(ShortcutMap::resolve("s", false, false, false, true), Some(EditorAction::Save));
        assert_eq!(ShortcutMap::resolve("a", true, false, false, false), Some(EditorAction::SelectAll));
    }

    #[test]
    fn bare_letters_do_nothing() {
        assert_eq!(ShortcutMap::resolve("z", false, false, false, false), None);
        assert_eq!(ShortcutMap::resolve("s", false, true, false, false), None);
    }

    #[test]
    fn alt_suppresses_every_chord() {
        assert_eq!(ShortcutMap::resolve("z", true, false, true, false), None);
        assert_eq!(ShortcutMap::resolve("Backspace", false, false, true, false), None);
    }

    #[test]
    fn both_delete_keys_resolve_without_modifiers() {
        assert_eq!(ShortcutMap::resolve("Delete", false, false, false, false), Some(EditorAction::Delete));
        assert_eq!(ShortcutMap::resolve("Backspace", false, false, false, false), Some(EditorAction::Delete));
        assert_eq!(ShortcutMap::resolve("Backspace", true, false, false, false), None);
    }
}
