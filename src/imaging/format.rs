//! The fixed set of output formats and what each one needs from the encoder.

use std::fmt;
use std::str::FromStr;

use image::ImageFormat;

use super::error::ConvertError;

/// Extensions accepted by the source file picker.
pub const SOURCE_EXTENSIONS: [&str; 8] = ["jpg", "jpeg", "png", "bmp", "gif", "tiff", "webp", "ico"];

/// JPEG quality used for every JPG conversion.
pub const JPEG_QUALITY: u8 = 85;

/// In-memory pixel layout an image must have before it is encoded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PixelMode {
    /// Opaque 8-bit RGB
    Rgb,
    /// 8-bit RGB with alpha
    Rgba,
}

impl PixelMode {
    pub fn has_alpha(self) -> bool {
        matches!(self, PixelMode::Rgba)
    }
}

/// Encoder settings applied on save.
///
/// `Default` means "no options": the encoder runs with its own defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EncodeOptions {
    /// Lossy quality, 1-100
    pub quality: Option<u8>,
    /// Request an optimised (smaller) bitstream
    pub optimize: bool,
}

impl EncodeOptions {
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

/// Output format chosen by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TargetFormat {
    #[default]
    Bmp,
    Gif,
    Ico,
    Jpg,
    Png,
    Tiff,
    Webp,
}

impl TargetFormat {
    /// Every supported format, in the order the picker lists them
    pub const ALL: [TargetFormat; 7] = [
        TargetFormat::Bmp,
        TargetFormat::Gif,
        TargetFormat::Ico,
        TargetFormat::Jpg,
        TargetFormat::Png,
        TargetFormat::Tiff,
        TargetFormat::Webp,
    ];

    /// Upper-case identifier shown in the UI ("JPG", "TIFF", ...)
    pub fn identifier(self) -> &'static str {
        match self {
            TargetFormat::Bmp => "BMP",
            TargetFormat::Gif => "GIF",
            TargetFormat::Ico => "ICO",
            TargetFormat::Jpg => "JPG",
            TargetFormat::Png => "PNG",
            TargetFormat::Tiff => "TIFF",
            TargetFormat::Webp => "WEBP",
        }
    }

    /// File extension of converted files, the lower-cased identifier
    pub fn extension(self) -> &'static str {
        match self {
            TargetFormat::Bmp => "bmp",
            TargetFormat::Gif => "gif",
            TargetFormat::Ico => "ico",
            TargetFormat::Jpg => "jpg",
            TargetFormat::Png => "png",
            TargetFormat::Tiff => "tiff",
            TargetFormat::Webp => "webp",
        }
    }

    /// Encoder used to write this format. JPG is written by the JPEG encoder.
    pub fn encoder_format(self) -> ImageFormat {
        match self {
            TargetFormat::Bmp => ImageFormat::Bmp,
            TargetFormat::Gif => ImageFormat::Gif,
            TargetFormat::Ico => ImageFormat::Ico,
            TargetFormat::Jpg => ImageFormat::Jpeg,
            TargetFormat::Png => ImageFormat::Png,
            TargetFormat::Tiff => ImageFormat::Tiff,
            TargetFormat::Webp => ImageFormat::WebP,
        }
    }

    /// Pixel mode the image is normalised to before encoding
    pub fn pixel_mode(self) -> PixelMode {
        match self {
            TargetFormat::Png | TargetFormat::Webp | TargetFormat::Gif => PixelMode::Rgba,
            _ => PixelMode::Rgb,
        }
    }

    /// Encoder settings. Only JPG gets any.
    pub fn encode_options(self) -> EncodeOptions {
        match self {
            TargetFormat::Jpg => EncodeOptions {
                quality: Some(JPEG_QUALITY),
                optimize: true,
            },
            _ => EncodeOptions::default(),
        }
    }
}

impl fmt::Display for TargetFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

impl FromStr for TargetFormat {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|format| format.identifier().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ConvertError::UnsupportedFormat(s.to_string()))
    }
}
