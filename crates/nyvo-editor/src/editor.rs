//! The editor session: one façade owning the scene, history, selection,
//! clipboard, and style defaults, exposing every toolbar operation.
//!
//! Mutations funnel through here so the event pump can keep history and
//! the autosave callback in step with the scene. Content changes (object
//! added, removed, modified) checkpoint history; selection, style, and
//! z-order changes never do.

use nyvo_core::{
    Color, FontStyle, ImageFilter, ObjectId, ObjectKind, Point, SNAPSHOT_VERSION, Scene,
    SceneSnapshot, TextAlign, TextStyle, ViewportTransform, VisualObject, WorkspaceMeta,
};
use nyvo_export::{
    ExportResult, JPEG_QUALITY, Rasterizer, RgbaImage, encode_jpeg, encode_png, parse_document,
    render_svg, to_document_json,
};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::clipboard::Clipboard;
use crate::history::History;
use crate::selection::SelectionTracker;
use crate::shapes;
use crate::shortcuts::{EditorAction, ShortcutMap};
use crate::style::{FONT_SIZE, FONT_WEIGHT, StyleDefaults};
use crate::viewport;

// ─── Session setup ───────────────────────────────────────────────────────

/// Initial sizing and style for a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SessionOptions {
    pub container_width: f32,
    pub container_height: f32,
    pub workspace_width: f32,
    pub workspace_height: f32,
    pub defaults: StyleDefaults,
}

impl SessionOptions {
    /// Parse options from their JSON form, the shape embedders hand over.
    /// Missing keys take the defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            container_width: 0.0,
            container_height: 0.0,
            workspace_width: 900.0,
            workspace_height: 1200.0,
            defaults: StyleDefaults::default(),
        }
    }
}

/// What the autosave callback receives: the serialized objects plus the
/// workspace size they were captured at.
pub struct SavePayload<'a> {
    pub json: &'a str,
    pub width: f32,
    pub height: f32,
}

type SaveCallback = Box<dyn FnMut(SavePayload<'_>)>;

pub struct EditorSession {
    scene: Scene,
    history: History,
    selection: SelectionTracker,
    clipboard: Clipboard,
    style: StyleDefaults,
    save_callback: Option<SaveCallback>,
}

impl EditorSession {
    pub fn new(options: SessionOptions) -> Self {
        let mut scene = Scene::new(options.workspace_width, options.workspace_height);
        scene.set_dimensions(options.container_width, options.container_height);
        viewport::auto_zoom(&mut scene);

        let mut session = Self {
            scene,
            history: History::new(),
            selection: SelectionTracker::new(),
            clipboard: Clipboard::new(),
            style: options.defaults,
            save_callback: None,
        };
        // the pristine document is the undo floor
        if let Some(json) = session.try_snapshot_json() {
            session.history.record(json);
        }
        session
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn style_defaults(&self) -> &StyleDefaults {
        &self.style
    }

    /// Install the autosave hook. It fires after every content change,
    /// explicit save, undo, redo, and load.
    pub fn on_save<F: FnMut(SavePayload<'_>) + 'static>(&mut self, callback: F) {
        self.save_callback = Some(Box::new(callback));
    }

    /// Install the selection-cleared hook, for closing style toolbars.
    pub fn on_clear_selection<F: FnMut() + 'static>(&mut self, callback: F) {
        self.selection.set_on_cleared(callback);
    }

    // ─── Event pump ──────────────────────────────────────────────────────

    fn try_snapshot_json(&self) -> Option<String> {
        match self.scene.snapshot().to_json() {
            Ok(json) => Some(json),
            Err(err) => {
                log::error!("document serialization failed: {err}");
                None
            }
        }
    }

    /// Drain scene events in order: mirror the selection, and on each
    /// content change serialize once, checkpoint unless the history gate
    /// is closed, and notify the autosave hook regardless of the gate.
    fn pump(&mut self) {
        for event in self.scene.take_events() {
            log::trace!("scene event: {event:?}");
            self.selection.handle(&event);
            if event.is_structural()
                && let Some(json) = self.try_snapshot_json()
            {
                if !self.history.is_restoring() {
                    self.history.record(json.clone());
                }
                self.notify_save(&json);
            }
        }
    }

    fn notify_save(&mut self, json: &str) {
        let meta = self.scene.workspace_meta();
        if let Some(callback) = self.save_callback.as_mut() {
            callback(SavePayload {
                json,
                width: meta.width,
                height: meta.height,
            });
        }
    }

    // ─── History ─────────────────────────────────────────────────────────

    /// Serialize and notify the autosave hook. `suppress_history` skips
    /// the checkpoint, for saves that are not edits.
    pub fn save(&mut self, suppress_history: bool) {
        if let Some(json) = self.try_snapshot_json() {
            if !suppress_history {
                self.history.record(json.clone());
            }
            self.notify_save(&json);
        }
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Step back one entry. A no-op at the floor or while a restore is
    /// already in flight; a malformed entry leaves everything untouched.
    pub fn undo(&mut self) {
        if self.history.is_restoring() {
            return;
        }
        let Some(entry) = self.history.peek_back().map(str::to_owned) else {
            return;
        };
        let snapshot = match SceneSnapshot::from_json(&entry) {
            Ok(snapshot) => snapshot,
            Err(err) => {
                log::error!("undo entry is unreadable: {err}");
                return;
            }
        };

        self.history.begin_restore();
        self.history.step_back();
        self.scene.restore(snapshot);
        self.pump();
        self.notify_save(&entry);
        self.history.end_restore();
        log::debug!("undo to entry {}", self.history.cursor());
    }

    /// Step forward one entry. Mirror of [`EditorSession::undo`].
    pub fn redo(&mut self) {
        if self.history.is_restoring() {
            return;
        }
        let Some(entry) = self.history.peek_forward().map(str::to_owned) else {
            return;
        };
        let snapshot = match SceneSnapshot::from_json(&entry) {
            Ok(snapshot) => snapshot,
            Err(err) => {
                log::error!("redo entry is unreadable: {err}");
                return;
            }
        };

        self.history.begin_restore();
        self.history.step_forward();
        self.scene.restore(snapshot);
        self.pump();
        self.notify_save(&entry);
        self.history.end_restore();
        log::debug!("redo to entry {}", self.history.cursor());
    }

    // ─── Viewport and workspace ──────────────────────────────────────────

    pub fn auto_zoom(&mut self) {
        viewport::auto_zoom(&mut self.scene);
    }

    pub fn zoom_in(&mut self) {
        viewport::zoom_in(&mut self.scene);
    }

    pub fn zoom_out(&mut self) {
        viewport::zoom_out(&mut self.scene);
    }

    /// Record a new container size and refit.
    pub fn resize(&mut self, width: f32, height: f32) {
        viewport::resize(&mut self.scene, width, height);
    }

    pub fn workspace(&self) -> WorkspaceMeta {
        self.scene.workspace_meta()
    }

    /// Resize the page, refit the view, and save. The page itself lives
    /// outside the snapshot objects, so the save is explicit.
    pub fn change_size(&mut self, width: f32, height: f32) {
        let page = self.scene.workspace_mut();
        if let ObjectKind::Rect {
            width: w,
            height: h,
            ..
        } = &mut page.kind
        {
            *w = width;
            *h = height;
        }
        viewport::auto_zoom(&mut self.scene);
        self.save(false);
    }

    pub fn change_background(&mut self, color: Color) {
        self.scene.workspace_mut().fill = Some(color);
        self.scene.request_render();
        self.save(false);
    }

    // ─── Drawing mode ────────────────────────────────────────────────────

    /// Enter freehand drawing: the selection is discarded and the brush
    /// picks up the stroke defaults.
    pub fn enable_drawing_mode(&mut self) {
        self.scene.clear_active();
        let brush = self.scene.brush_mut();
        brush.color = self.style.stroke_color;
        brush.width = self.style.stroke_width;
        self.scene.set_drawing_mode(true);
        self.scene.request_render();
        self.pump();
    }

    pub fn disable_drawing_mode(&mut self) {
        self.scene.set_drawing_mode(false);
        self.scene.request_render();
    }

    pub fn drawing_mode(&self) -> bool {
        self.scene.drawing_mode()
    }

    /// Commit a finished freehand stroke. Strokes are inserted unselected.
    pub fn add_path(&mut self, points: &[Point]) {
        if points.is_empty() {
            return;
        }
        let path = shapes::freehand_path(points, self.scene.brush());
        self.scene.add(path);
        self.pump();
    }

    // ─── Objects ─────────────────────────────────────────────────────────

    /// Center the object on the page, insert it, and select it.
    fn insert(&mut self, object: VisualObject) -> ObjectId {
        let id = self.scene.add(object);
        self.scene.center_object(id);
        self.scene.set_active(vec![id]);
        self.pump();
        id
    }

    pub fn add_rectangle(&mut self) -> ObjectId {
        let shape = shapes::rectangle(&self.style);
        self.insert(shape)
    }

    pub fn add_soft_rectangle(&mut self) -> ObjectId {
        let shape = shapes::soft_rectangle(&self.style);
        self.insert(shape)
    }

    pub fn add_circle(&mut self) -> ObjectId {
        let shape = shapes::circle(&self.style);
        self.insert(shape)
    }

    pub fn add_triangle(&mut self) -> ObjectId {
        let shape = shapes::triangle(&self.style);
        self.insert(shape)
    }

    pub fn add_inverse_triangle(&mut self) -> ObjectId {
        let shape = shapes::inverse_triangle(&self.style);
        self.insert(shape)
    }

    pub fn add_diamond(&mut self) -> ObjectId {
        let shape = shapes::diamond(&self.style);
        self.insert(shape)
    }

    pub fn add_text(&mut self, text: &str) -> ObjectId {
        self.add_text_sized(text, FONT_SIZE, FONT_WEIGHT)
    }

    pub fn add_text_sized(&mut self, text: &str, font_size: f32, font_weight: u16) -> ObjectId {
        let shape = shapes::textbox(text, font_size, font_weight, &self.style);
        self.insert(shape)
    }

    /// Insert an image scaled down to fit the page. Returns `None` for
    /// empty natural sizes.
    pub fn add_image(&mut self, src: &str, width: f32, height: f32) -> Option<ObjectId> {
        if width <= 0.0 || height <= 0.0 {
            log::warn!("ignoring image with empty natural size {width}x{height}: {src}");
            return None;
        }
        let meta = self.scene.workspace_meta();
        let mut shape = shapes::image(src, width, height);
        shape.scale_to_width(meta.width);
        if shape.bounds().height > meta.height {
            shape.scale_to_height(meta.height);
        }
        Some(self.insert(shape))
    }

    /// Remove every selected object. Each removal is its own checkpoint,
    /// so undo brings them back one at a time.
    pub fn delete(&mut self) {
        let ids = self.scene.active().to_vec();
        for id in ids {
            self.scene.remove(id);
            self.pump();
        }
    }

    pub fn select(&mut self, ids: Vec<ObjectId>) {
        self.scene.set_active(ids);
        self.pump();
    }

    pub fn select_all(&mut self) {
        let ids = self.scene.selectable_ids();
        self.scene.set_active(ids);
        self.pump();
    }

    pub fn discard_selection(&mut self) {
        self.scene.clear_active();
        self.pump();
    }

    pub fn selected_ids(&self) -> &[ObjectId] {
        self.selection.selected()
    }

    pub fn selected_objects(&self) -> Vec<&VisualObject> {
        self.selection
            .selected()
            .iter()
            .filter_map(|&id| self.scene.get(id))
            .collect()
    }

    // ─── Gestures ────────────────────────────────────────────────────────

    /// Interaction-end position change. Checkpoints.
    pub fn move_object(&mut self, id: ObjectId, left: f32, top: f32) {
        let Some(object) = self.scene.get_mut(id) else {
            return;
        };
        object.left = left;
        object.top = top;
        self.scene.set_coords(id);
        self.scene.notify_modified(id);
        self.scene.request_render();
        self.pump();
    }

    /// Interaction-end rotation change, in degrees. Checkpoints.
    pub fn rotate_object(&mut self, id: ObjectId, angle: f32) {
        let Some(object) = self.scene.get_mut(id) else {
            return;
        };
        object.angle = angle;
        self.scene.set_coords(id);
        self.scene.notify_modified(id);
        self.scene.request_render();
        self.pump();
    }

    /// Interaction-end scale change. Checkpoints.
    pub fn scale_object(&mut self, id: ObjectId, scale_x: f32, scale_y: f32) {
        let Some(object) = self.scene.get_mut(id) else {
            return;
        };
        object.scale_x = scale_x;
        object.scale_y = scale_y;
        self.scene.set_coords(id);
        self.scene.notify_modified(id);
        self.scene.request_render();
        self.pump();
    }

    // ─── Z-order ─────────────────────────────────────────────────────────

    /// Step every selected object one layer toward the front. Repaint
    /// only; stacking changes never checkpoint.
    pub fn bring_forward(&mut self) {
        let ids = self.scene.active().to_vec();
        for id in ids {
            self.scene.bring_forward(id);
        }
    }

    /// Step every selected object one layer toward the back.
    pub fn send_backwards(&mut self) {
        let ids = self.scene.active().to_vec();
        for id in ids {
            self.scene.send_backwards(id);
        }
    }

    // ─── Clipboard ───────────────────────────────────────────────────────

    /// Copy the selection into the single clipboard slot.
    pub fn copy(&mut self) {
        let objects = self
            .scene
            .active()
            .iter()
            .filter_map(|&id| self.scene.get(id))
            .cloned()
            .collect();
        self.clipboard.copy_from(objects);
    }

    /// Insert the slot contents offset down-right and select the paste.
    pub fn paste(&mut self) {
        let pasted = self.clipboard.paste();
        if pasted.is_empty() {
            return;
        }
        let mut ids = Vec::with_capacity(pasted.len());
        for object in pasted {
            ids.push(self.scene.add(object));
            self.pump();
        }
        self.scene.set_active(ids);
        self.pump();
    }

    pub fn duplicate(&mut self) {
        self.copy();
        self.paste();
    }

    // ─── Style ───────────────────────────────────────────────────────────

    fn update_text_styles(&mut self, mut apply: impl FnMut(&mut TextStyle)) {
        let ids = self.scene.active().to_vec();
        for id in ids {
            if let Some(object) = self.scene.get_mut(id)
                && let ObjectKind::Textbox { style, .. } = &mut object.kind
            {
                apply(style);
                self.scene.set_coords(id);
            }
        }
        self.scene.request_render();
    }

    fn first_selected(&self) -> Option<&VisualObject> {
        self.selection.first().and_then(|id| self.scene.get(id))
    }

    fn first_selected_text(&self) -> Option<&TextStyle> {
        self.first_selected().and_then(|o| match &o.kind {
            ObjectKind::Textbox { style, .. } => Some(style),
            _ => None,
        })
    }

    pub fn change_fill(&mut self, color: Color) {
        self.style.fill_color = color;
        let ids = self.scene.active().to_vec();
        for id in ids {
            if let Some(object) = self.scene.get_mut(id) {
                object.fill = Some(color);
            }
        }
        self.scene.request_render();
    }

    /// Stroke color doubles as the text color: on text objects it lands
    /// on the fill. The drawing brush follows.
    pub fn change_stroke(&mut self, color: Color) {
        self.style.stroke_color = color;
        self.scene.brush_mut().color = color;
        let ids = self.scene.active().to_vec();
        for id in ids {
            if let Some(object) = self.scene.get_mut(id) {
                if object.is_text() {
                    object.fill = Some(color);
                } else {
                    object.stroke = Some(color);
                }
            }
        }
        self.scene.request_render();
    }

    pub fn change_stroke_width(&mut self, width: f32) {
        self.style.stroke_width = width;
        self.scene.brush_mut().width = width;
        let ids = self.scene.active().to_vec();
        for id in ids {
            if let Some(object) = self.scene.get_mut(id) {
                object.stroke_width = width;
            }
            self.scene.set_coords(id);
        }
        self.scene.request_render();
    }

    pub fn change_dash(&mut self, dash: &[f32]) {
        self.style.stroke_dash_array = dash.iter().copied().collect();
        let ids = self.scene.active().to_vec();
        for id in ids {
            if let Some(object) = self.scene.get_mut(id) {
                object.stroke_dash_array = dash.iter().copied().collect();
            }
        }
        self.scene.request_render();
    }

    /// Opacity applies to the selection only; there is no opacity default.
    pub fn change_opacity(&mut self, opacity: f32) {
        let opacity = opacity.clamp(0.0, 1.0);
        let ids = self.scene.active().to_vec();
        for id in ids {
            if let Some(object) = self.scene.get_mut(id) {
                object.opacity = opacity;
            }
        }
        self.scene.request_render();
    }

    pub fn change_font_family(&mut self, family: &str) {
        self.style.font_family = family.to_owned();
        self.update_text_styles(|style| style.font_family = family.to_owned());
    }

    pub fn change_font_size(&mut self, size: f32) {
        if size <= 0.0 {
            return;
        }
        self.update_text_styles(|style| style.font_size = size);
    }

    pub fn change_font_weight(&mut self, weight: u16) {
        self.update_text_styles(|style| style.font_weight = weight);
    }

    pub fn change_font_style(&mut self, font_style: FontStyle) {
        self.update_text_styles(|style| style.font_style = font_style);
    }

    pub fn change_underline(&mut self, on: bool) {
        self.update_text_styles(|style| style.underline = on);
    }

    pub fn change_linethrough(&mut self, on: bool) {
        self.update_text_styles(|style| style.linethrough = on);
    }

    pub fn change_text_align(&mut self, align: TextAlign) {
        self.update_text_styles(|style| style.text_align = align);
    }

    /// Swap the filter list on every selected image. `"none"` and unknown
    /// names clear it.
    pub fn change_image_filter(&mut self, name: &str) {
        let filter = ImageFilter::from_name(name);
        let ids = self.scene.active().to_vec();
        for id in ids {
            if let Some(object) = self.scene.get_mut(id)
                && let ObjectKind::Image { filters, .. } = &mut object.kind
            {
                filters.clear();
                if let Some(filter) = filter.clone() {
                    filters.push(filter);
                }
            }
        }
        self.scene.request_render();
    }

    pub fn active_fill(&self) -> Color {
        self.first_selected()
            .and_then(|o| o.fill)
            .unwrap_or(self.style.fill_color)
    }

    /// On text objects the fill is the reported stroke color.
    pub fn active_stroke(&self) -> Color {
        match self.first_selected() {
            Some(o) if o.is_text() => o.fill.unwrap_or(self.style.stroke_color),
            Some(o) => o.stroke.unwrap_or(self.style.stroke_color),
            None => self.style.stroke_color,
        }
    }

    pub fn active_stroke_width(&self) -> f32 {
        self.first_selected()
            .map_or(self.style.stroke_width, |o| o.stroke_width)
    }

    pub fn active_dash(&self) -> SmallVec<[f32; 4]> {
        self.first_selected()
            .map_or_else(|| self.style.stroke_dash_array.clone(), |o| {
                o.stroke_dash_array.clone()
            })
    }

    pub fn active_opacity(&self) -> f32 {
        self.first_selected().map_or(1.0, |o| o.opacity)
    }

    pub fn active_font_family(&self) -> String {
        self.first_selected_text()
            .map_or_else(|| self.style.font_family.clone(), |s| s.font_family.clone())
    }

    pub fn active_font_size(&self) -> f32 {
        self.first_selected_text().map_or(FONT_SIZE, |s| s.font_size)
    }

    pub fn active_font_weight(&self) -> u16 {
        self.first_selected_text()
            .map_or(FONT_WEIGHT, |s| s.font_weight)
    }

    pub fn active_font_style(&self) -> FontStyle {
        self.first_selected_text()
            .map_or_else(FontStyle::default, |s| s.font_style)
    }

    pub fn active_underline(&self) -> bool {
        self.first_selected_text().is_some_and(|s| s.underline)
    }

    pub fn active_linethrough(&self) -> bool {
        self.first_selected_text().is_some_and(|s| s.linethrough)
    }

    pub fn active_text_align(&self) -> TextAlign {
        self.first_selected_text()
            .map_or_else(TextAlign::default, |s| s.text_align)
    }

    pub fn active_image_filters(&self) -> Vec<ImageFilter> {
        self.first_selected().map_or_else(Vec::new, |o| match &o.kind {
            ObjectKind::Image { filters, .. } => filters.iter().cloned().collect(),
            _ => Vec::new(),
        })
    }

    // ─── Export ──────────────────────────────────────────────────────────

    fn export_snapshot(&self) -> SceneSnapshot {
        SceneSnapshot {
            version: SNAPSHOT_VERSION.to_owned(),
            workspace: Some(self.scene.workspace_meta()),
            objects: self.scene.objects().to_vec(),
        }
    }

    /// Capture the page at 1:1 through the given rasterizer, then refit
    /// the view. The refit happens on the failure path too.
    fn capture(
        &mut self,
        rasterizer: &mut dyn Rasterizer,
        encode: impl FnOnce(&RgbaImage) -> ExportResult<Vec<u8>>,
    ) -> ExportResult<Vec<u8>> {
        let meta = self.scene.workspace_meta();
        *self.scene.viewport_mut() = ViewportTransform::identity();
        self.scene.request_render();

        let doc = self.export_snapshot();
        let result = rasterizer
            .rasterize(&doc, meta.width as u32, meta.height as u32)
            .and_then(|frame| encode(&frame));

        self.auto_zoom();
        result
    }

    pub fn save_png(&mut self, rasterizer: &mut dyn Rasterizer) -> ExportResult<Vec<u8>> {
        self.capture(rasterizer, encode_png)
    }

    pub fn save_jpeg(&mut self, rasterizer: &mut dyn Rasterizer) -> ExportResult<Vec<u8>> {
        self.capture(rasterizer, |frame| encode_jpeg(frame, JPEG_QUALITY))
    }

    pub fn save_svg(&mut self) -> String {
        *self.scene.viewport_mut() = ViewportTransform::identity();
        self.scene.request_render();
        let svg = render_svg(self.scene.workspace(), self.scene.objects());
        self.auto_zoom();
        svg
    }

    pub fn save_json(&mut self) -> ExportResult<String> {
        *self.scene.viewport_mut() = ViewportTransform::identity();
        self.scene.request_render();
        let json = to_document_json(&self.export_snapshot());
        self.auto_zoom();
        json
    }

    /// Replace the document. Malformed input fails before any state is
    /// touched; a successful load refits the view and checkpoints once.
    pub fn load_json(&mut self, json: &str) -> ExportResult<()> {
        let doc = parse_document(json)?;
        log::info!("loading document with {} objects", doc.objects.len());
        self.scene.restore(doc);
        self.auto_zoom();
        self.pump();
        self.save(false);
        Ok(())
    }

    // ─── Input ───────────────────────────────────────────────────────────

    /// Route a key chord through the shortcut table. Returns whether the
    /// chord was handled.
    pub fn handle_key(&mut self, key: &str, ctrl: bool, shift: bool, alt: bool, meta: bool) -> bool {
        let Some(action) = ShortcutMap::resolve(key, ctrl, shift, alt, meta) else {
            return false;
        };
        log::debug!("shortcut: {action:?}");
        match action {
            EditorAction::Delete => self.delete(),
            EditorAction::Undo => self.undo(),
            EditorAction::Redo => self.redo(),
            EditorAction::Copy => self.copy(),
            EditorAction::Paste => self.paste(),
            EditorAction::Duplicate => self.duplicate(),
            EditorAction::Save => self.save(true),
            EditorAction::SelectAll => self.select_all(),
        }
        true
    }
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new(SessionOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> EditorSession {
        EditorSession::new(SessionOptions {
            container_width: 1200.0,
            container_height: 900.0,
            ..SessionOptions::default()
        })
    }

    #[test]
    fn construction_seeds_the_floor_entry() {
        let s = session();
        assert_eq!(s.history().len(), 1);
        assert!(!s.can_undo());
        assert!(!s.can_redo());
    }

    #[test]
    fn options_round_trip_through_json() {
        let options = SessionOptions {
            workspace_width: 600.0,
            ..SessionOptions::default()
        };
        let json = serde_json::to_string(&options).unwrap();
        assert!(json.contains("\"workspaceWidth\":600.0"));
        assert_eq!(SessionOptions::from_json(&json).unwrap(), options);
    }

    #[test]
    fn partial_options_fill_in_defaults() {
        let options = SessionOptions::from_json(r#"{"containerWidth": 800.0}"#).unwrap();
        assert_eq!(options.container_width, 800.0);
        assert_eq!(options.workspace_width, 900.0);
        assert_eq!(options.defaults, StyleDefaults::default());
    }

    #[test]
    fn inserted_shapes_are_centered_and_selected() {
        let mut s = session();
        let id = s.add_rectangle();

        let bounds = s.scene().coords(id).unwrap_or_default();
        assert_eq!(bounds.center(), (450.0, 600.0));
        assert_eq!(s.selected_ids(), &[id]);
    }

    #[test]
    fn empty_images_are_rejected() {
        let mut s = session();
        assert!(s.add_image("p.png", 0.0, 300.0).is_none());
        assert_eq!(s.history().len(), 1, "no checkpoint for a rejected image");
    }

    #[test]
    fn unbound_chords_report_unhandled() {
        let mut s = session();
        assert!(!s.handle_key("q", true, false, false, false));
        assert!(s.handle_key("s", true, false, false, false));
    }
}
