//! Creation defaults and catalogs.
//!
//! [`StyleDefaults`] carries exactly the properties that persist as
//! defaults for future objects: fill, stroke color, stroke width, dash
//! pattern, font family. Font size/weight/style, decorations, alignment,
//! and opacity are selection-scoped and never persist.

use nyvo_core::Color;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

pub const FILL_COLOR: Color = Color::rgba(0.0, 0.0, 1.0, 1.0);
pub const STROKE_COLOR: Color = Color::rgba(0.0, 0.0, 1.0, 1.0);
pub const STROKE_WIDTH: f32 = 2.0;
pub const FONT_FAMILY: &str = "Arial";
pub const FONT_SIZE: f32 = 50.0;
pub const FONT_WEIGHT: u16 = 400;

/// Font picker catalog.
pub const FONTS: [&str; 28] = [
    "Arial",
    "Arial Black",
    "Bookman",
    "Brush Script MT",
    "Calibri",
    "Candara",
    "Comic Sans MS",
    "Consolas",
    "Constantia",
    "Corbel",
    "Courier New",
    "Franklin Gothic Medium",
    "Garamond",
    "Geneva",
    "Georgia",
    "Helvetica",
    "Impact",
    "Lucida Console",
    "Lucida Sans Unicode",
    "Palatino",
    "Perpetua",
    "Rockwell",
    "Segoe UI",
    "Sylfaen",
    "Tahoma",
    "Times New Roman",
    "Trebuchet MS",
    "Verdana",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StyleDefaults {
    pub fill_color: Color,
    pub stroke_color: Color,
    pub stroke_width: f32,
    pub stroke_dash_array: SmallVec<[f32; 4]>,
    pub font_family: String,
}

impl Default for StyleDefaults {
    fn default() -> Self {
        Self {
            fill_color: FILL_COLOR,
            stroke_color: STROKE_COLOR,
            stroke_width: STROKE_WIDTH,
            stroke_dash_array: SmallVec::new(),
            font_family: FONT_FAMILY.to_string(),
        }
    }
}
