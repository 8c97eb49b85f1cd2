use lasso::{Spur, ThreadedRodeo};
use std::fmt;
use std::sync::LazyLock;

/// Global string interner for object IDs — fast comparisons, low memory.
static INTERNER: LazyLock<ThreadedRodeo> = LazyLock::new(ThreadedRodeo::default);

/// A lightweight, interned identifier for objects on the canvas.
/// Internally a `Spur` index — 4 bytes, Copy, Eq, Hash in O(1).
///
/// IDs are runtime-only: the document format carries none, so loads and
/// pastes mint fresh ones.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjectId(Spur);

impl ObjectId {
    /// Intern a new string as an ObjectId, or return existing if already interned.
    pub fn intern(s: &str) -> Self {
        ObjectId(INTERNER.get_or_intern(s))
    }

    /// Resolve back to a string slice.
    pub fn as_str(&self) -> &str {
        INTERNER.resolve(&self.0)
    }

    /// Generate a unique anonymous ID.
    pub fn anonymous() -> Self {
        Self::with_prefix("obj")
    }

    /// Generate a unique ID with a kind prefix (e.g. `rect_1`, `circle_2`).
    pub fn with_prefix(prefix: &str) -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        let n = COUNTER.fetch_add(1, Ordering::Relaxed);
        Self::intern(&format!("{prefix}_{n}"))
    }
}

impl fmt::Debug for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interning_roundtrip() {
        let a = ObjectId::intern("hero_banner");
        let b = ObjectId::intern("hero_banner");
        assert_eq!(a, b);
        assert_eq!(a.as_str(), "hero_banner");
    }

    #[test]
    fn anonymous_ids_are_unique() {
        let a = ObjectId::anonymous();
        let b = ObjectId::anonymous();
        assert_ne!(a, b);
    }

    #[test]
    fn prefixed_ids_carry_their_prefix() {
        let id = ObjectId::with_prefix("rect");
        assert!(id.as_str().starts_with("rect_"));
    }
}
