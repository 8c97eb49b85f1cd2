pub mod event;
pub mod filter;
pub mod id;
pub mod model;
pub mod scene;
pub mod snapshot;

pub use event::SceneEvent;
pub use filter::{BlendMode, FILTER_NAMES, ImageFilter};
pub use id::ObjectId;
pub use model::*;
pub use scene::{Brush, Scene, ViewportTransform};
pub use snapshot::{SNAPSHOT_VERSION, SceneSnapshot, WorkspaceMeta};
