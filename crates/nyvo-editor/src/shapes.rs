//! Object factories for the creation toolbar.
//!
//! Every shape spawns at the same spot with the session's style defaults
//! applied; the session centers it on the workspace before inserting it.

use nyvo_core::{Brush, ObjectId, ObjectKind, Point, TextStyle, VisualObject};
use smallvec::SmallVec;

use crate::style::StyleDefaults;

/// Where new shapes land before being centered on the workspace.
const SPAWN: f32 = 100.0;

/// Corner radius of the soft rectangle preset.
const SOFT_RADIUS: f32 = 50.0;

/// Rough glyph advance as a fraction of the font size, for sizing text boxes.
const GLYPH_ASPECT: f32 = 0.6;

fn styled(kind: ObjectKind, style: &StyleDefaults) -> VisualObject {
    let mut o = VisualObject::new(kind);
    o.id = ObjectId::with_prefix(o.kind.tag());
    o.left = SPAWN;
    o.top = SPAWN;
    o.fill = Some(style.fill_color);
    o.stroke = Some(style.stroke_color);
    o.stroke_width = style.stroke_width;
    o.stroke_dash_array = style.stroke_dash_array.clone();
    o
}

pub fn rectangle(style: &StyleDefaults) -> VisualObject {
    styled(
        ObjectKind::Rect { width: 400.0, height: 400.0, rx: 0.0, ry: 0.0 },
        style,
    )
}

pub fn soft_rectangle(style: &StyleDefaults) -> VisualObject {
    styled(
        ObjectKind::Rect {
            width: 400.0,
            height: 400.0,
            rx: SOFT_RADIUS,
            ry: SOFT_RADIUS,
        },
        style,
    )
}

pub fn circle(style: &StyleDefaults) -> VisualObject {
    styled(ObjectKind::Circle { radius: 200.0 }, style)
}

pub fn triangle(style: &StyleDefaults) -> VisualObject {
    styled(ObjectKind::Triangle { width: 400.0, height: 400.0 }, style)
}

/// Triangle pointing down, expressed as a polygon.
pub fn inverse_triangle(style: &StyleDefaults) -> VisualObject {
    styled(
        ObjectKind::Polygon {
            points: vec![
                Point::new(0.0, 0.0),
                Point::new(400.0, 0.0),
                Point::new(200.0, 400.0),
            ],
            width: 400.0,
            height: 400.0,
        },
        style,
    )
}

pub fn diamond(style: &StyleDefaults) -> VisualObject {
    styled(
        ObjectKind::Polygon {
            points: vec![
                Point::new(300.0, 0.0),
                Point::new(600.0, 300.0),
                Point::new(300.0, 600.0),
                Point::new(0.0, 300.0),
            ],
            width: 600.0,
            height: 600.0,
        },
        style,
    )
}

/// Text box sized to roughly fit its longest line. Text takes the default
/// fill but never a stroke.
pub fn textbox(text: &str, font_size: f32, font_weight: u16, style: &StyleDefaults) -> VisualObject {
    let columns = text
        .lines()
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0)
        .max(1);
    let mut o = VisualObject::new(ObjectKind::Textbox {
        text: text.to_owned(),
        width: columns as f32 * font_size * GLYPH_ASPECT,
        style: TextStyle {
            font_family: style.font_family.clone(),
            font_size,
            font_weight,
            ..TextStyle::default()
        },
    });
    o.id = ObjectId::with_prefix(o.kind.tag());
    o.left = SPAWN;
    o.top = SPAWN;
    o.fill = Some(style.fill_color);
    o
}

/// Image at its native size. The session rescales it to the workspace
/// before inserting.
pub fn image(src: &str, width: f32, height: f32) -> VisualObject {
    let mut o = VisualObject::new(ObjectKind::Image {
        src: src.to_owned(),
        width,
        height,
        filters: SmallVec::new(),
    });
    o.id = ObjectId::with_prefix(o.kind.tag());
    o.left = SPAWN;
    o.top = SPAWN;
    o
}

/// Freehand stroke from pointer samples in workspace coordinates. The
/// samples are rebased so the object's origin sits at their bounding box
/// corner, matching every other shape.
pub fn freehand_path(points: &[Point], brush: &Brush) -> VisualObject {
    let (left, top) = points.first().map_or((0.0, 0.0), |first| {
        points
            .iter()
            .fold((first.x, first.y), |(x, y), p| (x.min(p.x), y.min(p.y)))
    });
    let local = points
        .iter()
        .map(|p| Point::new(p.x - left, p.y - top))
        .collect();

    let mut o = VisualObject::new(ObjectKind::Path { points: local });
    o.id = ObjectId::with_prefix(o.kind.tag());
    o.left = left;
    o.top = top;
    o.stroke = Some(brush.color);
    o.stroke_width = brush.width;
    o
}

#[cfg(test)]
mod tests {
    use super::*;
    use nyvo_core::Color;

    #[test]
    fn shapes_carry_the_style_defaults() {
        let style = StyleDefaults {
            fill_color: Color::rgba(1.0, 0.0, 0.0, 1.0),
            stroke_width: 4.0,
            ..StyleDefaults::default()
        };
        let o = rectangle(&style);

        assert_eq!(o.fill, Some(style.fill_color));
        assert_eq!(o.stroke, Some(style.stroke_color));
        assert_eq!(o.stroke_width, 4.0);
        assert_eq!((o.left, o.top), (SPAWN, SPAWN));
        assert!(o.id.as_str().starts_with("rect_"));
    }

    #[test]
    fn polygon_presets_have_their_vertices() {
        let style = StyleDefaults::default();

        match &inverse_triangle(&style).kind {
            ObjectKind::Polygon { points, width, height } => {
                assert_eq!(points.len(), 3);
                assert_eq!(points[2], Point::new(200.0, 400.0));
                assert_eq!((*width, *height), (400.0, 400.0));
            }
            other => panic!("expected a polygon, got {other:?}"),
        }

        match &diamond(&style).kind {
            ObjectKind::Polygon { points, width, height } => {
                assert_eq!(points.len(), 4);
                assert_eq!(points[3], Point::new(0.0, 300.0));
                assert_eq!((*width, *height), (600.0, 600.0));
            }
            other => panic!("expected a polygon, got {other:?}"),
        }
    }

    #[test]
    fn textbox_width_follows_the_longest_line() {
        let style = StyleDefaults::default();
        let o = textbox("hi\nwidest line\nok", 50.0, 400, &style);

        match &o.kind {
            ObjectKind::Textbox { width, style: text, .. } => {
                assert_eq!(*width, 11.0 * 50.0 * GLYPH_ASPECT);
                assert_eq!(text.font_size, 50.0);
            }
            other => panic!("expected a textbox, got {other:?}"),
        }
        assert!(o.stroke.is_none(), "text never takes a stroke");
    }

    #[test]
    fn freehand_paths_are_rebased_to_their_corner() {
        let brush = Brush {
            color: Color::rgba(0.0, 1.0, 0.0, 1.0),
            width: 3.0,
        };
        let samples = [
            Point::new(120.0, 80.0),
            Point::new(100.0, 140.0),
            Point::new(160.0, 90.0),
        ];
        let o = freehand_path(&samples, &brush);

        assert_eq!((o.left, o.top), (100.0, 80.0));
        match &o.kind {
            ObjectKind::Path { points } => {
                assert_eq!(points[0], Point::new(20.0, 0.0));
                assert_eq!(points[1], Point::new(0.0, 60.0));
            }
            other => panic!("expected a path, got {other:?}"),
        }
        assert_eq!(o.stroke, Some(brush.color));
        assert_eq!(o.stroke_width, 3.0);
        assert!(o.fill.is_none(), "strokes are not filled");
    }
}
