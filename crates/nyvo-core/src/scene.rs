//! The live scene: objects, selection, viewport, brush, and the event queue.
//!
//! `Scene` is the single mutable surface under the editor session. Every
//! mutation queues a [`SceneEvent`]; nothing is observed until the session
//! drains the queue, so multi-step operations stay atomic from the
//! outside. The **workspace** — the printable page rectangle — is stored
//! apart from the object list: it never serializes as an object, never
//! joins the selection, and survives restores.
//!
//! Rendering is out of scope here. `request_render()` bumps a frame
//! counter so hosts (and tests) can observe repaint scheduling.

use crate::event::SceneEvent;
use crate::id::ObjectId;
use crate::model::{Color, ObjectKind, ResolvedBounds, VisualObject};
use crate::snapshot::{SNAPSHOT_VERSION, SceneSnapshot, WorkspaceMeta};
use std::collections::{HashMap, VecDeque};

/// `name` of the workspace rectangle.
pub const WORKSPACE_NAME: &str = "workspace";

// ─── Viewport ────────────────────────────────────────────────────────────

/// Uniform zoom plus translation, screen = scene × zoom + t.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportTransform {
    pub zoom: f32,
    pub tx: f32,
    pub ty: f32,
}

impl ViewportTransform {
    pub const fn identity() -> Self {
        Self {
            zoom: 1.0,
            tx: 0.0,
            ty: 0.0,
        }
    }

    /// Row-major 2×3 affine matrix, `[a, b, c, d, e, f]`.
    pub fn as_matrix(&self) -> [f32; 6] {
        [self.zoom, 0.0, 0.0, self.zoom, self.tx, self.ty]
    }

    /// Rescale while keeping the given screen point over the same scene
    /// point.
    pub fn zoom_to_point(&mut self, px: f32, py: f32, zoom: f32) {
        let scene_x = (px - self.tx) / self.zoom;
        let scene_y = (py - self.ty) / self.zoom;
        self.zoom = zoom;
        self.tx = px - scene_x * zoom;
        self.ty = py - scene_y * zoom;
    }
}

impl Default for ViewportTransform {
    fn default() -> Self {
        Self::identity()
    }
}

// ─── Brush ───────────────────────────────────────────────────────────────

/// Freehand brush settings, synced from the stroke defaults when drawing
/// mode is enabled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Brush {
    pub color: Color,
    pub width: f32,
}

impl Default for Brush {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            width: 1.0,
        }
    }
}

// ─── Scene ───────────────────────────────────────────────────────────────

pub struct Scene {
    width: f32,  // container px
    height: f32, // container px
    workspace: VisualObject,
    objects: Vec<VisualObject>, // index 0 = back of the paint order
    active: Vec<ObjectId>,
    viewport: ViewportTransform,
    coords: HashMap<ObjectId, ResolvedBounds>,
    drawing_mode: bool,
    brush: Brush,
    events: VecDeque<SceneEvent>,
    frames: u64,
}

fn make_workspace(width: f32, height: f32) -> VisualObject {
    let mut ws = VisualObject::new(ObjectKind::Rect {
        width,
        height,
        rx: 0.0,
        ry: 0.0,
    });
    ws.id = ObjectId::intern(WORKSPACE_NAME);
    ws.name = Some(WORKSPACE_NAME.to_string());
    ws.fill = Some(Color::WHITE);
    ws.selectable = false;
    ws.has_controls = false;
    ws
}

impl Scene {
    pub fn new(workspace_width: f32, workspace_height: f32) -> Self {
        Self {
            width: 0.0,
            height: 0.0,
            workspace: make_workspace(workspace_width, workspace_height),
            objects: Vec::new(),
            active: Vec::new(),
            viewport: ViewportTransform::identity(),
            coords: HashMap::new(),
            drawing_mode: false,
            brush: Brush::default(),
            events: VecDeque::new(),
            frames: 0,
        }
    }

    // ─── Container & viewport ────────────────────────────────────────────

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn set_dimensions(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    pub fn viewport(&self) -> &ViewportTransform {
        &self.viewport
    }

    pub fn viewport_mut(&mut self) -> &mut ViewportTransform {
        &mut self.viewport
    }

    /// Schedule a repaint. Headless: only the frame counter moves.
    pub fn request_render(&mut self) {
        self.frames += 1;
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    // ─── Workspace ───────────────────────────────────────────────────────

    pub fn workspace(&self) -> &VisualObject {
        &self.workspace
    }

    pub fn workspace_mut(&mut self) -> &mut VisualObject {
        &mut self.workspace
    }

    /// Page metadata in export form.
    pub fn workspace_meta(&self) -> WorkspaceMeta {
        let b = self.workspace.bounds();
        WorkspaceMeta {
            width: b.width,
            height: b.height,
            fill: self.workspace.fill.unwrap_or(Color::WHITE),
        }
    }

    // ─── Objects ─────────────────────────────────────────────────────────

    pub fn add(&mut self, object: VisualObject) -> ObjectId {
        let id = object.id;
        self.coords.insert(id, object.bounds());
        self.objects.push(object);
        self.events.push_back(SceneEvent::ObjectAdded(id));
        self.request_render();
        id
    }

    pub fn remove(&mut self, id: ObjectId) -> Option<VisualObject> {
        let index = self.objects.iter().position(|o| o.id == id)?;
        let object = self.objects.remove(index);
        self.coords.remove(&id);
        self.events.push_back(SceneEvent::ObjectRemoved(id));
        if self.active.contains(&id) {
            self.active.retain(|a| *a != id);
            if self.active.is_empty() {
                self.events.push_back(SceneEvent::SelectionCleared);
            } else {
                self.events
                    .push_back(SceneEvent::SelectionUpdated(self.active.clone()));
            }
        }
        self.request_render();
        Some(object)
    }

    pub fn get(&self, id: ObjectId) -> Option<&VisualObject> {
        self.objects.iter().find(|o| o.id == id)
    }

    pub fn get_mut(&mut self, id: ObjectId) -> Option<&mut VisualObject> {
        self.objects.iter_mut().find(|o| o.id == id)
    }

    /// Back-to-front paint order.
    pub fn objects(&self) -> &[VisualObject] {
        &self.objects
    }

    /// Remove every object wholesale. Emits one selection clear at most —
    /// no per-object events.
    pub fn clear(&mut self) {
        self.objects.clear();
        self.coords.clear();
        if !self.active.is_empty() {
            self.active.clear();
            self.events.push_back(SceneEvent::SelectionCleared);
        }
        self.request_render();
    }

    /// Queue a content-change notification for an interactively mutated
    /// object.
    pub fn notify_modified(&mut self, id: ObjectId) {
        if self.get(id).is_some() {
            self.events.push_back(SceneEvent::ObjectModified(id));
        }
    }

    // ─── Selection ───────────────────────────────────────────────────────

    pub fn set_active(&mut self, ids: Vec<ObjectId>) {
        let ids: Vec<ObjectId> = ids
            .into_iter()
            .filter(|id| self.get(*id).is_some())
            .collect();
        if ids.is_empty() {
            self.clear_active();
            return;
        }
        if self.active == ids {
            return;
        }
        let event = if self.active.is_empty() {
            SceneEvent::SelectionCreated(ids.clone())
        } else {
            SceneEvent::SelectionUpdated(ids.clone())
        };
        self.active = ids;
        self.events.push_back(event);
        self.request_render();
    }

    pub fn clear_active(&mut self) {
        if self.active.is_empty() {
            return;
        }
        self.active.clear();
        self.events.push_back(SceneEvent::SelectionCleared);
        self.request_render();
    }

    pub fn active(&self) -> &[ObjectId] {
        &self.active
    }

    /// Ids eligible for select-all. The workspace is never eligible.
    pub fn selectable_ids(&self) -> Vec<ObjectId> {
        self.objects
            .iter()
            .filter(|o| o.selectable)
            .map(|o| o.id)
            .collect()
    }

    // ─── Coordinates ─────────────────────────────────────────────────────

    /// Recompute the cached bounds of one object. Required after any
    /// geometry mutation; the cache is stale until then.
    pub fn set_coords(&mut self, id: ObjectId) {
        let Some(bounds) = self.get(id).map(|o| o.bounds()) else {
            return;
        };
        self.coords.insert(id, bounds);
    }

    pub fn set_coords_all(&mut self) {
        self.coords = self.objects.iter().map(|o| (o.id, o.bounds())).collect();
    }

    pub fn coords(&self, id: ObjectId) -> Option<ResolvedBounds> {
        self.coords.get(&id).copied()
    }

    /// Align an object's bounds center with the workspace center.
    pub fn center_object(&mut self, id: ObjectId) {
        let (wx, wy) = self.workspace.bounds().center();
        let Some(object) = self.get_mut(id) else {
            return;
        };
        let (cx, cy) = object.bounds().center();
        object.left += wx - cx;
        object.top += wy - cy;
        let bounds = object.bounds();
        self.coords.insert(id, bounds);
    }

    // ─── Z-order ─────────────────────────────────────────────────────────

    /// Move an object one step toward the front. Returns false when it
    /// could not move.
    pub fn bring_forward(&mut self, id: ObjectId) -> bool {
        let Some(index) = self.objects.iter().position(|o| o.id == id) else {
            return false;
        };
        if index + 1 >= self.objects.len() {
            return false; // already frontmost
        }
        self.objects.swap(index, index + 1);
        self.request_render();
        true
    }

    /// Move an object one step toward the back.
    pub fn send_backwards(&mut self, id: ObjectId) -> bool {
        let Some(index) = self.objects.iter().position(|o| o.id == id) else {
            return false;
        };
        if index == 0 {
            return false; // already backmost
        }
        self.objects.swap(index, index - 1);
        self.request_render();
        true
    }

    // ─── Drawing mode ────────────────────────────────────────────────────

    pub fn drawing_mode(&self) -> bool {
        self.drawing_mode
    }

    pub fn set_drawing_mode(&mut self, on: bool) {
        self.drawing_mode = on;
    }

    pub fn brush(&self) -> &Brush {
        &self.brush
    }

    pub fn brush_mut(&mut self) -> &mut Brush {
        &mut self.brush
    }

    // ─── Events & snapshots ──────────────────────────────────────────────

    /// Drain the pending event queue in FIFO order.
    pub fn take_events(&mut self) -> Vec<SceneEvent> {
        self.events.drain(..).collect()
    }

    /// Serialize the object list (history form — no workspace metadata).
    pub fn snapshot(&self) -> SceneSnapshot {
        SceneSnapshot {
            version: SNAPSHOT_VERSION.to_string(),
            workspace: None,
            objects: self.objects.clone(),
        }
    }

    /// Replace the scene contents atomically. Applies workspace metadata
    /// when the snapshot carries it. Emits only a selection clear —
    /// restores are not object churn.
    pub fn restore(&mut self, snapshot: SceneSnapshot) {
        if let Some(meta) = snapshot.workspace {
            if let ObjectKind::Rect { width, height, .. } = &mut self.workspace.kind {
                *width = meta.width;
                *height = meta.height;
            }
            self.workspace.fill = Some(meta.fill);
        }
        self.objects = snapshot.objects;
        if !self.active.is_empty() {
            self.active.clear();
            self.events.push_back(SceneEvent::SelectionCleared);
        }
        self.set_coords_all();
        self.request_render();
    }
}
