//! Viewport fitting and zoom stepping.
//!
//! Auto-zoom is the classic fit-to-screen: find the scale that fits the
//! workspace inside the container, keep a margin, center the page. It runs
//! after container resizes, page resizes, and document loads, and running
//! it twice in a row is a fixed point.

use nyvo_core::{Scene, ViewportTransform};

/// Fraction of the fitting scale used, leaving a margin around the page.
pub const ZOOM_RATIO: f32 = 0.85;
pub const ZOOM_STEP: f32 = 0.05;
pub const MIN_ZOOM: f32 = 0.2;
pub const MAX_ZOOM: f32 = 1.3;

/// Scale that fits `(content_w, content_h)` inside `(frame_w, frame_h)`.
fn find_scale_to_fit(content_w: f32, content_h: f32, frame_w: f32, frame_h: f32) -> f32 {
    (frame_w / content_w).min(frame_h / content_h)
}

/// Fit the workspace in the container and center it.
pub fn auto_zoom(scene: &mut Scene) {
    let (width, height) = (scene.width(), scene.height());
    if width <= 0.0 || height <= 0.0 {
        return; // container not measured yet
    }

    let page = scene.workspace().bounds();
    let zoom = find_scale_to_fit(page.width, page.height, width, height) * ZOOM_RATIO;
    let (cx, cy) = page.center();

    let vt = scene.viewport_mut();
    *vt = ViewportTransform::identity();
    vt.zoom_to_point(width / 2.0, height / 2.0, zoom);
    vt.tx = (width / 2.0 - cx * zoom).round();
    vt.ty = (height / 2.0 - cy * zoom).round();

    scene.set_coords_all();
    scene.request_render();
}

/// Step zoom in about the container center, clamped to [`MAX_ZOOM`].
pub fn zoom_in(scene: &mut Scene) {
    let zoom = (scene.viewport().zoom + ZOOM_STEP).min(MAX_ZOOM);
    step_to(scene, zoom);
}

/// Step zoom out about the container center, clamped to [`MIN_ZOOM`].
pub fn zoom_out(scene: &mut Scene) {
    let zoom = (scene.viewport().zoom - ZOOM_STEP).max(MIN_ZOOM);
    step_to(scene, zoom);
}

fn step_to(scene: &mut Scene, zoom: f32) {
    let (px, py) = (scene.width() / 2.0, scene.height() / 2.0);
    scene.viewport_mut().zoom_to_point(px, py, zoom);
    scene.request_render();
}

/// Record a container resize and refit.
pub fn resize(scene: &mut Scene, width: f32, height: f32) {
    scene.set_dimensions(width, height);
    auto_zoom(scene);
}
