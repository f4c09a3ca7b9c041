/// Scaled previews of the selected source image
use std::path::Path;

use image::imageops::FilterType;
use image::DynamicImage;

use super::convert::decode;
use super::error::ConvertResult;

/// Width of the preview bounding box
pub const PREVIEW_WIDTH: u32 = 400;
/// Height of the preview bounding box
pub const PREVIEW_HEIGHT: u32 = 300;

/// A decoded, scaled image ready to hand to the UI
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preview {
    pub width: u32,
    pub height: u32,
    /// Tightly packed RGBA8 pixels, row major
    pub rgba: Vec<u8>,
}

/// Decode `path` and scale it to fit the preview box
pub fn load_preview(path: &Path) -> ConvertResult<Preview> {
    let image = decode(path)?;
    Ok(fit_preview(&image, PREVIEW_WIDTH, PREVIEW_HEIGHT))
}

/// Scale `image` to the largest size fitting `max_width` x `max_height`,
/// keeping its aspect ratio. Small images are enlarged.
pub fn fit_preview(image: &DynamicImage, max_width: u32, max_height: u32) -> Preview {
    let scaled = image.resize(max_width, max_height, FilterType::Lanczos3).to_rgba8();

    Preview {
        width: scaled.width(),
        height: scaled.height(),
        rgba: scaled.into_raw(),
    }
}
