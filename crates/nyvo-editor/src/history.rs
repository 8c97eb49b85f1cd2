//! Linear snapshot history.
//!
//! Each entry is the serialized object list after one structural change —
//! whole-scene snapshots, not inverse operations. A cursor walks the line:
//! undo steps back, redo steps forward, and a new recording first truncates
//! everything past the cursor so a stale redo branch can never be replayed
//! onto a diverged scene.
//!
//! While the session applies a snapshot (undo, redo, document load) the
//! gate is `Restoring` and recordings are dropped: the restore itself must
//! not become a new entry.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HistoryGate {
    #[default]
    Idle,
    Restoring,
}

pub struct History {
    entries: Vec<String>,
    cursor: usize,
    gate: HistoryGate,
}

impl History {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            cursor: 0,
            gate: HistoryGate::Idle,
        }
    }

    /// Append a snapshot at the cursor, discarding any redo branch.
    /// Returns false when the gate is closed.
    pub fn record(&mut self, snapshot: String) -> bool {
        if self.gate == HistoryGate::Restoring {
            log::trace!("history: restore in flight, snapshot dropped");
            return false;
        }
        self.entries.truncate(self.cursor + 1);
        self.entries.push(snapshot);
        self.cursor = self.entries.len() - 1;
        true
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    /// The entry one step back, without moving the cursor.
    pub fn peek_back(&self) -> Option<&str> {
        if self.can_undo() {
            self.entries.get(self.cursor - 1).map(String::as_str)
        } else {
            None
        }
    }

    /// The entry one step forward, without moving the cursor.
    pub fn peek_forward(&self) -> Option<&str> {
        if self.can_redo() {
            self.entries.get(self.cursor + 1).map(String::as_str)
        } else {
            None
        }
    }

    /// Move the cursor one step back. No-op at the boundary.
    pub fn step_back(&mut self) {
        if self.can_undo() {
            self.cursor -= 1;
        }
    }

    /// Move the cursor one step forward. No-op at the boundary.
    pub fn step_forward(&mut self) {
        if self.can_redo() {
            self.cursor += 1;
        }
    }

    pub fn begin_restore(&mut self) {
        self.gate = HistoryGate::Restoring;
    }

    pub fn end_restore(&mut self) {
        self.gate = HistoryGate::Idle;
    }

    pub fn is_restoring(&self) -> bool {
        self.gate == HistoryGate::Restoring
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> History {
        let mut h = History::new();
        h.record("s0".to_string());
        h.record("s1".to_string());
        h.record("s2".to_string());
        h
    }

    #[test]
    fn fresh_history_has_no_moves() {
        let h = History::new();
        assert!(!h.can_undo());
        assert!(!h.can_redo());
        assert_eq!(h.peek_back(), None);
        assert_eq!(h.peek_forward(), None);
    }

    #[test]
    fn a_single_entry_still_has_no_moves() {
        let mut h = History::new();
        h.record("seed".to_string());
        assert!(!h.can_undo(), "the seed entry is the floor, not an undo");
        assert!(!h.can_redo());
    }

    #[test]
    fn recording_advances_the_cursor() {
        let h = filled();
        assert_eq!(h.len(), 3);
        assert_eq!(h.cursor(), 2);
        assert!(h.can_undo());
        assert!(!h.can_redo());
    }

    #[test]
    fn stepping_walks_the_line() {
        let mut h = filled();
        assert_eq!(h.peek_back(), Some("s1"));

        h.step_back();
        assert_eq!(h.cursor(), 1);
        assert_eq!(h.peek_back(), Some("s0"));
        assert_eq!(h.peek_forward(), Some("s2"));

        h.step_forward();
        assert_eq!(h.cursor(), 2);
        assert!(!h.can_redo());
    }

    #[test]
    fn boundary_steps_are_no_ops() {
        let mut h = filled();
        h.step_forward();
        assert_eq!(h.cursor(), 2);

        h.step_back();
        h.step_back();
        h.step_back();
        assert_eq!(h.cursor(), 0);
    }

    #[test]
    fn recording_after_undo_discards_the_redo_branch() {
        let mut h = filled();
        h.step_back();
        h.step_back();
        assert!(h.can_redo());

        h.record("s3".to_string());
        assert_eq!(h.len(), 2, "s1 and s2 must be gone");
        assert!(!h.can_redo());
        assert_eq!(h.peek_back(), Some("s0"));
    }

    #[test]
    fn the_gate_suppresses_recording() {
        let mut h = filled();
        h.begin_restore();
        assert!(!h.record("ghost".to_string()));
        assert_eq!(h.len(), 3);

        h.end_restore();
        assert!(h.record("real".to_string()));
        assert_eq!(h.len(), 4);
    }
}
