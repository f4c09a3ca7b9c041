//! Converting a source image into one of the supported target formats.
//!
//! A conversion decodes the source, normalises its pixel mode for the target
//! encoder, and writes `<stem>_converted.<ext>` next to the source. The
//! source file itself is only ever read.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use image::imageops::FilterType;
use image::{DynamicImage, ImageReader, RgbImage};
use jpeg_encoder::{ColorType as JpegColorType, Encoder as JpegEncoder};
use tracing::{debug, info};

use super::error::{ConvertError, ConvertResult};
use super::format::{EncodeOptions, PixelMode, TargetFormat, JPEG_QUALITY};

/// Token appended to the source stem to name the converted file
pub const OUTPUT_SUFFIX: &str = "_converted";

/// ICO frames cannot be larger than this on either side
const ICO_MAX_DIMENSION: u32 = 256;

/// A single user-triggered conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionRequest {
    source: PathBuf,
    format: TargetFormat,
}

impl ConversionRequest {
    pub fn new(source: impl Into<PathBuf>, format: TargetFormat) -> Self {
        Self {
            source: source.into(),
            format,
        }
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn format(&self) -> TargetFormat {
        self.format
    }

    /// Where this request will write its output
    pub fn destination(&self) -> PathBuf {
        destination_path(&self.source, self.format)
    }
}

/// Derive the output path: same directory, `<stem>_converted.<ext>`
pub fn destination_path(source: &Path, format: TargetFormat) -> PathBuf {
    let mut name = source.file_stem().unwrap_or_default().to_os_string();
    name.push(OUTPUT_SUFFIX);
    name.push(".");
    name.push(format.extension());
    source.with_file_name(name)
}

/// Decode an image, trusting its contents over its extension
pub fn decode(path: &Path) -> ConvertResult<DynamicImage> {
    let reader = ImageReader::open(path)
        .map_err(|e| ConvertError::open(path, e))?
        .with_guessed_format()
        .map_err(|e| ConvertError::open(path, e))?;

    reader.decode().map_err(|e| ConvertError::decode(path, e))
}

/// Bring `image` into the 8-bit `mode` the target encoder expects.
///
/// Dropping alpha (RGBA -> RGB) discards transparency; that loss is
/// accepted and never reported as an error.
pub fn normalize_mode(image: DynamicImage, mode: PixelMode) -> DynamicImage {
    match (mode, image) {
        (PixelMode::Rgb, image @ DynamicImage::ImageRgb8(_)) => image,
        (PixelMode::Rgba, image @ DynamicImage::ImageRgba8(_)) => image,
        (PixelMode::Rgb, image) => DynamicImage::ImageRgb8(image.to_rgb8()),
        (PixelMode::Rgba, image) => DynamicImage::ImageRgba8(image.to_rgba8()),
    }
}

/// Shrink images that would not fit in an ICO frame
fn fit_ico(image: DynamicImage) -> DynamicImage {
    if image.width() <= ICO_MAX_DIMENSION && image.height() <= ICO_MAX_DIMENSION {
        return image;
    }

    debug!(
        width = image.width(),
        height = image.height(),
        "Downscaling to fit an ICO frame"
    );
    image.resize(ICO_MAX_DIMENSION, ICO_MAX_DIMENSION, FilterType::Lanczos3)
}

/// Encode opaque RGB pixels as baseline JPEG with `options` applied.
/// `destination` only labels errors.
pub fn encode_jpeg<W: Write>(
    image: &RgbImage,
    options: EncodeOptions,
    writer: W,
    destination: &Path,
) -> ConvertResult<()> {
    let (Ok(width), Ok(height)) = (u16::try_from(image.width()), u16::try_from(image.height())) else {
        return Err(ConvertError::TooLarge {
            path: destination.to_path_buf(),
            width: image.width(),
            height: image.height(),
        });
    };

    let mut encoder = JpegEncoder::new(writer, options.quality.unwrap_or(JPEG_QUALITY));
    encoder.set_optimized_huffman_tables(options.optimize);
    encoder
        .encode(image.as_raw(), width, height, JpegColorType::Rgb)
        .map_err(|e| ConvertError::jpeg(destination, e))
}

/// Write `image` to `destination` with the target format's encoder
fn encode(image: &DynamicImage, destination: &Path, format: TargetFormat) -> ConvertResult<()> {
    let options = format.encode_options();
    if !options.is_default() {
        debug!(?options, format = %format, "Applying encoder options");
    }

    match format {
        TargetFormat::Jpg => {
            let file = File::create(destination).map_err(|e| ConvertError::io(destination, e))?;
            let mut writer = BufWriter::new(file);

            encode_jpeg(&image.to_rgb8(), options, &mut writer, destination)?;

            writer.flush().map_err(|e| ConvertError::io(destination, e))
        }
        // ICO frames are stored as 32-bit PNGs; the pixels are already opaque.
        TargetFormat::Ico => DynamicImage::ImageRgba8(image.to_rgba8())
            .save_with_format(destination, format.encoder_format())
            .map_err(|e| ConvertError::encode(destination, e)),
        _ => image
            .save_with_format(destination, format.encoder_format())
            .map_err(|e| ConvertError::encode(destination, e)),
    }
}

/// Run a conversion and return the path of the written file
pub fn convert(request: &ConversionRequest) -> ConvertResult<PathBuf> {
    let format = request.format();
    let source = request.source();

    let image = decode(source)?;
    debug!(
        source = %source.display(),
        color = ?image.color(),
        width = image.width(),
        height = image.height(),
        "Decoded source image"
    );

    let mut image = normalize_mode(image, format.pixel_mode());
    if format == TargetFormat::Ico {
        image = fit_ico(image);
    }

    let destination = request.destination();
    if destination == source {
        return Err(ConvertError::SourceCollision(destination));
    }

    if let Some(parent) = destination.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| ConvertError::io(parent, e))?;
    }

    encode(&image, &destination, format)?;

    info!(
        source = %source.display(),
        destination = %destination.display(),
        format = %format,
        alpha = format.pixel_mode().has_alpha(),
        "Converted image"
    );
    Ok(destination)
}
