//! Core data model for Nyvo documents.
//!
//! A document is a flat, z-ordered list of [`VisualObject`]s over a fixed
//! workspace rectangle. Every object carries one [`ObjectKind`] (its
//! geometry) plus the shared paint and interaction fields. The wire format
//! is camelCase JSON with the kind flattened under a `type` tag, so a
//! serialized rectangle reads `{"type": "rect", "left": 100, ...}`.

use crate::filter::ImageFilter;
use crate::id::ObjectId;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use smallvec::SmallVec;

/// Textbox line height as a multiple of the font size.
pub const LINE_HEIGHT: f32 = 1.16;

// ─── Color ───────────────────────────────────────────────────────────────

/// RGBA color. Stored as 4 × f32 [0.0, 1.0].
///
/// Serializes as its CSS string form, `rgba(R, G, B, A)` with integer
/// 0..=255 channels, which is what the document format traffics in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

/// Helper to parse a single hex digit.
fn hex_val(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

/// One channel from a doubled short-form digit (`#f00` → `ff`).
fn hex_short(c: u8) -> Option<f32> {
    Some((hex_val(c)? * 17) as f32 / 255.0)
}

/// One channel from a two-digit pair.
fn hex_pair(hi: u8, lo: u8) -> Option<f32> {
    Some((hex_val(hi)? << 4 | hex_val(lo)?) as f32 / 255.0)
}

impl Color {
    pub const WHITE: Self = Self::rgba(1.0, 1.0, 1.0, 1.0);
    pub const BLACK: Self = Self::rgba(0.0, 0.0, 0.0, 1.0);
    pub const TRANSPARENT: Self = Self::rgba(0.0, 0.0, 0.0, 0.0);

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Parse a hex color string: `#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA`.
    /// The string may optionally start with `#`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        let b = hex.as_bytes();

        match b.len() {
            3 => Some(Self::rgba(
                hex_short(b[0])?,
                hex_short(b[1])?,
                hex_short(b[2])?,
                1.0,
            )),
            4 => Some(Self::rgba(
                hex_short(b[0])?,
                hex_short(b[1])?,
                hex_short(b[2])?,
                hex_short(b[3])?,
            )),
            6 => Some(Self::rgba(
                hex_pair(b[0], b[1])?,
                hex_pair(b[2], b[3])?,
                hex_pair(b[4], b[5])?,
                1.0,
            )),
            8 => Some(Self::rgba(
                hex_pair(b[0], b[1])?,
                hex_pair(b[2], b[3])?,
                hex_pair(b[4], b[5])?,
                hex_pair(b[6], b[7])?,
            )),
            _ => None,
        }
    }

    /// Parse the CSS color forms the document format uses: hex,
    /// `rgb(R, G, B)`, `rgba(R, G, B, A)`, and the three keywords
    /// `white`/`black`/`transparent`.
    pub fn from_css(css: &str) -> Option<Self> {
        let css = css.trim();
        if css.starts_with('#') {
            return Self::from_hex(css);
        }

        let lower = css.to_ascii_lowercase();
        match lower.as_str() {
            "white" => return Some(Self::WHITE),
            "black" => return Some(Self::BLACK),
            "transparent" => return Some(Self::TRANSPARENT),
            _ => {}
        }

        let (body, has_alpha) = if let Some(rest) = lower.strip_prefix("rgba(") {
            (rest, true)
        } else if let Some(rest) = lower.strip_prefix("rgb(") {
            (rest, false)
        } else {
            return None;
        };
        let body = body.strip_suffix(')')?;

        let mut parts = body.split(',').map(str::trim);
        let r = parts.next()?.parse::<f32>().ok()?;
        let g = parts.next()?.parse::<f32>().ok()?;
        let b = parts.next()?.parse::<f32>().ok()?;
        let a = if has_alpha {
            parts.next()?.parse::<f32>().ok()?
        } else {
            1.0
        };
        if parts.next().is_some() {
            return None;
        }

        Some(Self::rgba(
            (r / 255.0).clamp(0.0, 1.0),
            (g / 255.0).clamp(0.0, 1.0),
            (b / 255.0).clamp(0.0, 1.0),
            a.clamp(0.0, 1.0),
        ))
    }

    /// Canonical CSS form: `rgba(0, 0, 255, 1)`, alpha trimmed to at most
    /// two decimals.
    pub fn to_css(&self) -> String {
        format!(
            "rgba({}, {}, {}, {})",
            channel_u8(self.r),
            channel_u8(self.g),
            channel_u8(self.b),
            format_alpha(self.a),
        )
    }
}

fn channel_u8(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

fn format_alpha(a: f32) -> String {
    let s = format!("{:.2}", a.clamp(0.0, 1.0));
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_css())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Color::from_css(&s)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid color string {s:?}")))
    }
}

// ─── Geometry ────────────────────────────────────────────────────────────

/// A point in workspace coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned bounding box in workspace coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ResolvedBounds {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl ResolvedBounds {
    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px <= self.x + self.width && py >= self.y && py <= self.y + self.height
    }

    pub fn center(&self) -> (f32, f32) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

// ─── Text ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontStyle {
    #[default]
    Normal,
    Italic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
    Justify,
}

/// Typography for a textbox. Everything here is selection-scoped in the
/// editor: only the font family persists as a creation default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TextStyle {
    pub font_family: String,
    pub font_size: f32,
    pub font_weight: u16,
    pub font_style: FontStyle,
    pub underline: bool,
    pub linethrough: bool,
    pub text_align: TextAlign,
    /// In-place text editing toggle, persisted for host UIs.
    pub editable: bool,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_family: "Arial".to_string(),
            font_size: 50.0,
            font_weight: 400,
            font_style: FontStyle::Normal,
            underline: false,
            linethrough: false,
            text_align: TextAlign::Left,
            editable: true,
        }
    }
}

// ─── Object kinds ────────────────────────────────────────────────────────

/// Geometry of a visual object. Tagged `type` on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ObjectKind {
    Rect {
        width: f32,
        height: f32,
        #[serde(default)]
        rx: f32,
        #[serde(default)]
        ry: f32,
    },
    Circle {
        radius: f32,
    },
    /// Isosceles triangle, apex at top center.
    Triangle {
        width: f32,
        height: f32,
    },
    /// Closed polygon. Points are local to the `left`/`top` anchor.
    Polygon {
        points: Vec<Point>,
        width: f32,
        height: f32,
    },
    Textbox {
        text: String,
        width: f32,
        #[serde(default)]
        style: TextStyle,
    },
    Image {
        src: String,
        width: f32,
        height: f32,
        #[serde(default)]
        filters: SmallVec<[ImageFilter; 1]>,
    },
    /// Freehand stroke. Points are local to the anchor, stroke-only.
    Path {
        points: Vec<Point>,
    },
}

impl ObjectKind {
    /// Wire tag, also used as the id prefix for factory-made objects.
    pub fn tag(&self) -> &'static str {
        match self {
            ObjectKind::Rect { .. } => "rect",
            ObjectKind::Circle { .. } => "circle",
            ObjectKind::Triangle { .. } => "triangle",
            ObjectKind::Polygon { .. } => "polygon",
            ObjectKind::Textbox { .. } => "textbox",
            ObjectKind::Image { .. } => "image",
            ObjectKind::Path { .. } => "path",
        }
    }
}

// ─── Visual objects ──────────────────────────────────────────────────────

/// A single object on the canvas: geometry plus paint, transform, and
/// interaction flags. `angle` is degrees clockwise about the `left`/`top`
/// anchor, matching the interactive rotation handle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualObject {
    /// Runtime identity. Never serialized; loads and pastes mint fresh ids.
    #[serde(skip, default = "ObjectId::anonymous")]
    pub id: ObjectId,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub name: Option<String>,
    #[serde(flatten)]
    pub kind: ObjectKind,
    pub left: f32,
    pub top: f32,
    #[serde(default)]
    pub angle: f32, // degrees
    #[serde(default = "one")]
    pub scale_x: f32,
    #[serde(default = "one")]
    pub scale_y: f32,
    /// `None` paints nothing; freehand paths are stroke-only.
    pub fill: Option<Color>,
    #[serde(default)]
    pub stroke: Option<Color>,
    #[serde(default = "one")]
    pub stroke_width: f32,
    #[serde(default)]
    pub stroke_dash_array: SmallVec<[f32; 4]>,
    #[serde(default = "one")]
    pub opacity: f32,
    #[serde(default = "yes")]
    pub selectable: bool,
    #[serde(default = "yes")]
    pub has_controls: bool,
    #[serde(default = "yes")]
    pub evented: bool,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub gradient_angle: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub link_data: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub extension: Option<String>,
    // Key spelling is part of the established document format.
    #[serde(
        rename = "extenstionType",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub extension_type: Option<String>,
}

fn one() -> f32 {
    1.0
}

fn yes() -> bool {
    true
}

impl VisualObject {
    pub fn new(kind: ObjectKind) -> Self {
        Self {
            id: ObjectId::anonymous(),
            name: None,
            kind,
            left: 0.0,
            top: 0.0,
            angle: 0.0,
            scale_x: 1.0,
            scale_y: 1.0,
            fill: None,
            stroke: None,
            stroke_width: 1.0,
            stroke_dash_array: SmallVec::new(),
            opacity: 1.0,
            selectable: true,
            has_controls: true,
            evented: true,
            gradient_angle: None,
            link_data: None,
            extension: None,
            extension_type: None,
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self.kind, ObjectKind::Textbox { .. })
    }

    pub fn is_image(&self) -> bool {
        matches!(self.kind, ObjectKind::Image { .. })
    }

    /// Unscaled, unrotated extent of the geometry.
    pub fn native_size(&self) -> (f32, f32) {
        match &self.kind {
            ObjectKind::Rect { width, height, .. }
            | ObjectKind::Triangle { width, height }
            | ObjectKind::Polygon { width, height, .. }
            | ObjectKind::Image { width, height, .. } => (*width, *height),
            ObjectKind::Circle { radius } => (radius * 2.0, radius * 2.0),
            ObjectKind::Textbox { text, width, style } => {
                let lines = text.lines().count().max(1) as f32;
                (*width, lines * style.font_size * LINE_HEIGHT)
            }
            ObjectKind::Path { points } => point_extent(points),
        }
    }

    /// Axis-aligned box of the scaled, rotated object.
    pub fn bounds(&self) -> ResolvedBounds {
        let (w, h) = self.native_size();
        let w = w * self.scale_x;
        let h = h * self.scale_y;

        if self.angle == 0.0 {
            return ResolvedBounds {
                x: self.left,
                y: self.top,
                width: w,
                height: h,
            };
        }

        let (sin, cos) = self.angle.to_radians().sin_cos();
        let mut min_x = f32::MAX;
        let mut min_y = f32::MAX;
        let mut max_x = f32::MIN;
        let mut max_y = f32::MIN;
        for (x, y) in [(0.0, 0.0), (w, 0.0), (w, h), (0.0, h)] {
            let rx = x * cos - y * sin;
            let ry = x * sin + y * cos;
            min_x = min_x.min(rx);
            min_y = min_y.min(ry);
            max_x = max_x.max(rx);
            max_y = max_y.max(ry);
        }

        ResolvedBounds {
            x: self.left + min_x,
            y: self.top + min_y,
            width: max_x - min_x,
            height: max_y - min_y,
        }
    }

    /// Set a uniform scale so the unrotated width matches `target`.
    pub fn scale_to_width(&mut self, target: f32) {
        let (w, _) = self.native_size();
        if w > 0.0 {
            let s = target / w;
            self.scale_x = s;
            self.scale_y = s;
        }
    }

    /// Set a uniform scale so the unrotated height matches `target`.
    pub fn scale_to_height(&mut self, target: f32) {
        let (_, h) = self.native_size();
        if h > 0.0 {
            let s = target / h;
            self.scale_x = s;
            self.scale_y = s;
        }
    }

    /// Deep copy under a fresh id.
    #[must_use]
    pub fn duplicate(&self) -> Self {
        let mut copy = self.clone();
        copy.id = ObjectId::anonymous();
        copy
    }
}

fn point_extent(points: &[Point]) -> (f32, f32) {
    if points.is_empty() {
        return (0.0, 0.0);
    }
    let mut min = points[0];
    let mut max = points[0];
    for p in points {
        min.x = min.x.min(p.x);
        min.y = min.y.min(p.y);
        max.x = max.x.max(p.x);
        max.y = max.y.max(p.y);
    }
    (max.x - min.x, max.y - min.y)
}
