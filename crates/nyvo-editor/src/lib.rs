pub mod clipboard;
pub mod editor;
pub mod history;
pub mod selection;
pub mod shapes;
pub mod shortcuts;
pub mod style;
pub mod viewport;

pub use clipboard::Clipboard;
pub use editor::{EditorSession, SavePayload, SessionOptions};
pub use history::History;
pub use selection::SelectionTracker;
pub use shortcuts::{EditorAction, ShortcutMap};
pub use style::StyleDefaults;
