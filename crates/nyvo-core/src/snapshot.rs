//! Snapshot wire format.
//!
//! One struct serves two masters: history entries (objects only — undo
//! never touches the workspace) and export documents (workspace metadata
//! included so a load can rebuild the page).

use crate::model::{Color, VisualObject};
use serde::{Deserialize, Serialize};

pub const SNAPSHOT_VERSION: &str = "1.0";

/// Page-level state persisted in export documents.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceMeta {
    pub width: f32,
    pub height: f32,
    pub fill: Color,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneSnapshot {
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub workspace: Option<WorkspaceMeta>,
    pub objects: Vec<VisualObject>,
}

impl SceneSnapshot {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ObjectKind, VisualObject};

    fn snapshot(workspace: Option<WorkspaceMeta>) -> SceneSnapshot {
        let mut rect = VisualObject::new(ObjectKind::Rect {
            width: 400.0,
            height: 400.0,
            rx: 0.0,
            ry: 0.0,
        });
        rect.fill = Some(Color::rgba(0.0, 0.0, 1.0, 1.0));
        SceneSnapshot {
            version: SNAPSHOT_VERSION.to_string(),
            workspace,
            objects: vec![rect],
        }
    }

    #[test]
    fn history_entries_omit_the_workspace_key() {
        let json = snapshot(None).to_json().unwrap();
        assert!(!json.contains("\"workspace\""));

        let back = SceneSnapshot::from_json(&json).unwrap();
        assert_eq!(back.workspace, None);
        assert_eq!(back.objects.len(), 1);
    }

    #[test]
    fn export_documents_carry_workspace_metadata() {
        let meta = WorkspaceMeta {
            width: 900.0,
            height: 1200.0,
            fill: Color::WHITE,
        };
        let json = snapshot(Some(meta)).to_json().unwrap();
        let back = SceneSnapshot::from_json(&json).unwrap();

        assert_eq!(back.workspace, Some(meta));
        assert_eq!(back.version, SNAPSHOT_VERSION);
    }
}
