//! Rasterizer seam and frame encoding.
//!
//! Drawing pixels is the host's job — a GPU canvas, a software renderer, a
//! test stub. The engine hands the host a document plus output size and
//! gets an RGBA frame back; encoding that frame to PNG or JPEG happens
//! here.

use crate::error::ExportResult;
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::{DynamicImage, ExtendedColorType, ImageEncoder};

pub use image::RgbaImage;

/// Baseline JPEG quality for exports.
pub const JPEG_QUALITY: u8 = 80;

/// Turns a document into pixels at the requested size.
pub trait Rasterizer {
    fn rasterize(
        &mut self,
        doc: &nyvo_core::SceneSnapshot,
        width: u32,
        height: u32,
    ) -> ExportResult<RgbaImage>;
}

/// Encode an RGBA frame as PNG.
pub fn encode_png(frame: &RgbaImage) -> ExportResult<Vec<u8>> {
    let mut out = Vec::new();
    PngEncoder::new(&mut out).write_image(
        frame.as_raw(),
        frame.width(),
        frame.height(),
        ExtendedColorType::Rgba8,
    )?;
    Ok(out)
}

/// Encode an RGBA frame as JPEG. Alpha is dropped — JPEG has none.
pub fn encode_jpeg(frame: &RgbaImage, quality: u8) -> ExportResult<Vec<u8>> {
    let rgb = DynamicImage::ImageRgba8(frame.clone()).to_rgb8();
    let mut out = Vec::new();
    JpegEncoder::new_with_quality(&mut out, quality).write_image(
        rgb.as_raw(),
        rgb.width(),
        rgb.height(),
        ExtendedColorType::Rgb8,
    )?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn white_frame() -> RgbaImage {
        RgbaImage::from_pixel(4, 4, Rgba([255, 255, 255, 255]))
    }

    #[test]
    fn png_output_carries_the_signature() {
        let bytes = encode_png(&white_frame()).unwrap();
        assert_eq!(&bytes[..4], &[0x89, b'P', b'N', b'G']);
    }

    #[test]
    fn jpeg_output_carries_the_signature() {
        let bytes = encode_jpeg(&white_frame(), JPEG_QUALITY).unwrap();
        assert_eq!(&bytes[..2], &[0xFF, 0xD8]);
    }
}
