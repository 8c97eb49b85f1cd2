//! Image filter catalog.
//!
//! Filters are descriptive: the engine stores and serializes them, a
//! renderer applies them. [`ImageFilter::from_name`] builds each effect with
//! its preset parameters, which is what the editor's filter picker uses.

use crate::model::Color;
use serde::{Deserialize, Serialize};

/// Picker catalog, `"none"` first.
pub const FILTER_NAMES: [&str; 23] = [
    "none",
    "polaroid",
    "sepia",
    "kodachrome",
    "contrast",
    "brightness",
    "grayscale",
    "brownie",
    "vintage",
    "technicolor",
    "pixelate",
    "invert",
    "blur",
    "sharpen",
    "emboss",
    "removecolor",
    "blacknwhite",
    "vibrance",
    "blendcolor",
    "huerotate",
    "resize",
    "saturation",
    "gamma",
];

/// 3×3 convolution kernel for the sharpen preset.
pub const SHARPEN_MATRIX: [f32; 9] = [0.0, -1.0, 0.0, -1.0, 5.0, -1.0, 0.0, -1.0, 0.0];

/// 3×3 convolution kernel for the emboss preset.
pub const EMBOSS_MATRIX: [f32; 9] = [1.0, 1.0, 1.0, 1.0, 0.7, -1.0, -1.0, -1.0, -1.0];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlendMode {
    #[default]
    Multiply,
    Add,
    Diff,
    Screen,
    Subtract,
    Darken,
    Lighten,
    Overlay,
    Exclusion,
    Tint,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ResizeType {
    Bilinear,
    #[default]
    Hermite,
    SliceHack,
    Lanczos,
}

/// One image effect. Tagged `type` on the wire, tag equal to the catalog
/// name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ImageFilter {
    Polaroid,
    Sepia,
    Kodachrome,
    Contrast { contrast: f32 },
    Brightness { brightness: f32 },
    Grayscale,
    Brownie,
    Vintage,
    Technicolor,
    Pixelate { blocksize: u32 },
    Invert,
    Blur { blur: f32 },
    Sharpen { matrix: [f32; 9] },
    Emboss { matrix: [f32; 9] },
    RemoveColor { threshold: f32, distance: f32 },
    #[serde(rename = "blacknwhite")]
    BlackWhite,
    Vibrance { vibrance: f32 },
    BlendColor { color: Color, mode: BlendMode, alpha: f32 },
    HueRotate { rotation: f32 },
    #[serde(rename_all = "camelCase")]
    Resize {
        scale_x: f32,
        scale_y: f32,
        resize_type: ResizeType,
    },
    Saturation { saturation: f32 },
    Gamma { gamma: [f32; 3] },
}

impl ImageFilter {
    /// Build the preset effect for a catalog name. `"none"` and unknown
    /// names yield `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "polaroid" => Some(Self::Polaroid),
            "sepia" => Some(Self::Sepia),
            "kodachrome" => Some(Self::Kodachrome),
            "contrast" => Some(Self::Contrast { contrast: 0.3 }),
            "brightness" => Some(Self::Brightness { brightness: 0.8 }),
            "grayscale" => Some(Self::Grayscale),
            "brownie" => Some(Self::Brownie),
            "vintage" => Some(Self::Vintage),
            "technicolor" => Some(Self::Technicolor),
            "pixelate" => Some(Self::Pixelate { blocksize: 4 }),
            "invert" => Some(Self::Invert),
            "blur" => Some(Self::Blur { blur: 0.5 }),
            "sharpen" => Some(Self::Sharpen {
                matrix: SHARPEN_MATRIX,
            }),
            "emboss" => Some(Self::Emboss {
                matrix: EMBOSS_MATRIX,
            }),
            "removecolor" => Some(Self::RemoveColor {
                threshold: 0.2,
                distance: 0.5,
            }),
            "blacknwhite" => Some(Self::BlackWhite),
            "vibrance" => Some(Self::Vibrance { vibrance: 1.0 }),
            "blendcolor" => Some(Self::BlendColor {
                color: Color::rgba(0.0, 1.0, 0.0, 1.0),
                mode: BlendMode::Multiply,
                alpha: 1.0,
            }),
            "huerotate" => Some(Self::HueRotate { rotation: 0.5 }),
            "resize" => Some(Self::Resize {
                scale_x: 0.5,
                scale_y: 0.5,
                resize_type: ResizeType::Hermite,
            }),
            "saturation" => Some(Self::Saturation { saturation: 1.0 }),
            "gamma" => Some(Self::Gamma {
                gamma: [1.0, 0.5, 2.1],
            }),
            _ => None,
        }
    }

    /// Catalog name of this effect.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Polaroid => "polaroid",
            Self::Sepia => "sepia",
            Self::Kodachrome => "kodachrome",
            Self::Contrast { .. } => "contrast",
            Self::Brightness { .. } => "brightness",
            Self::Grayscale => "grayscale",
            Self::Brownie => "brownie",
            Self::Vintage => "vintage",
            Self::Technicolor => "technicolor",
            Self::Pixelate { .. } => "pixelate",
            Self::Invert => "invert",
            Self::Blur { .. } => "blur",
            Self::Sharpen { .. } => "sharpen",
            Self::Emboss { .. } => "emboss",
            Self::RemoveColor { .. } => "removecolor",
            Self::BlackWhite => "blacknwhite",
            Self::Vibrance { .. } => "vibrance",
            Self::BlendColor { .. } => "blendcolor",
            Self::HueRotate { .. } => "huerotate",
            Self::Resize { .. } => "resize",
            Self::Saturation { .. } => "saturation",
            Self::Gamma { .. } => "gamma",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_catalog_name_builds_its_effect() {
        for name in FILTER_NAMES.iter().skip(1) {
            let effect = ImageFilter::from_name(name)
                .unwrap_or_else(|| panic!("no effect for catalog name {name:?}"));
            assert_eq!(effect.name(), *name);
        }
    }

    #[test]
    fn none_and_unknown_build_nothing() {
        assert_eq!(ImageFilter::from_name("none"), None);
        assert_eq!(ImageFilter::from_name("solarize"), None);
    }

    #[test]
    fn preset_parameters() {
        assert_eq!(
            ImageFilter::from_name("contrast"),
            Some(ImageFilter::Contrast { contrast: 0.3 })
        );
        assert_eq!(
            ImageFilter::from_name("pixelate"),
            Some(ImageFilter::Pixelate { blocksize: 4 })
        );
        match ImageFilter::from_name("blendcolor") {
            Some(ImageFilter::BlendColor { color, mode, alpha }) => {
                assert_eq!(color.to_css(), "rgba(0, 255, 0, 1)");
                assert_eq!(mode, BlendMode::Multiply);
                assert_eq!(alpha, 1.0);
            }
            other => panic!("expected blendcolor preset, got {other:?}"),
        }
    }

    #[test]
    fn wire_tags_match_catalog_names() {
        let bw = serde_json::to_value(ImageFilter::BlackWhite).unwrap();
        assert_eq!(bw["type"], "blacknwhite");

        let resize = serde_json::to_value(ImageFilter::from_name("resize").unwrap()).unwrap();
        assert_eq!(resize["type"], "resize");
        assert_eq!(resize["scaleX"], 0.5);
        assert_eq!(resize["resizeType"], "hermite");

        let back: ImageFilter = serde_json::from_value(resize).unwrap();
        assert_eq!(back.name(), "resize");
    }
}
