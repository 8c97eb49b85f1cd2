pub mod error;
pub mod json;
pub mod raster;
pub mod svg;

pub use error::{ExportError, ExportResult};
pub use json::{DOCUMENT_KEYS, parse_document, to_document_json};
pub use raster::{JPEG_QUALITY, Rasterizer, RgbaImage, encode_jpeg, encode_png};
pub use svg::render_svg;
