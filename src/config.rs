//! Process-wide settings. Nothing here is read from disk or the environment.

use crate::imaging::format::TargetFormat;
use crate::imaging::preview::{PREVIEW_HEIGHT, PREVIEW_WIDTH};

/// Fixed settings for the running application
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Window and heading title
    pub title: &'static str,
    /// Window size in logical pixels; the window is not resizable
    pub window_size: (f32, f32),
    /// Preview bounding box in logical pixels
    pub preview_size: (f32, f32),
    /// Format selected when the app starts
    pub default_format: TargetFormat,
    /// Text shown at the bottom of the window
    pub footer: &'static str,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Image Format Converter",
            window_size: (600.0, 500.0),
            preview_size: (PREVIEW_WIDTH as f32, PREVIEW_HEIGHT as f32),
            default_format: TargetFormat::Bmp,
            footer: concat!("Image Format Converter v", env!("CARGO_PKG_VERSION"), " | License: AGPL"),
        }
    }
}
