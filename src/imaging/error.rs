//! Error types for decoding and converting images.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Everything that can go wrong while previewing or converting an image.
///
/// The shell only ever shows the `Display` text to the user, so every
/// variant carries enough context to stand on its own in a dialog.
#[derive(Error, Debug)]
pub enum ConvertError {
    /// Source file could not be opened or sniffed
    #[error("cannot open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Source file is not a decodable image
    #[error("cannot decode {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Target encoder rejected the image or failed while writing it
    #[error("cannot encode {}: {source}", .path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// JPEG encoder failed
    #[error("cannot encode {}: {source}", .path.display())]
    Jpeg {
        path: PathBuf,
        #[source]
        source: jpeg_encoder::EncodingError,
    },

    /// Dimensions exceed what the target encoder can store
    #[error("cannot encode {}: {width}x{height} is too large for this format", .path.display())]
    TooLarge { path: PathBuf, width: u32, height: u32 },

    /// Destination directory or file could not be created
    #[error("cannot write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Destination would replace the source file
    #[error("refusing to overwrite source file {}", .0.display())]
    SourceCollision(PathBuf),

    /// Format identifier outside the supported set
    #[error("unsupported target format: {0}")]
    UnsupportedFormat(String),
}

/// Convenience result type for imaging operations.
pub type ConvertResult<T> = Result<T, ConvertError>;

impl ConvertError {
    pub fn open(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Open { path: path.into(), source }
    }

    pub fn decode(path: impl Into<PathBuf>, source: image::ImageError) -> Self {
        Self::Decode { path: path.into(), source }
    }

    pub fn encode(path: impl Into<PathBuf>, source: image::ImageError) -> Self {
        Self::Encode { path: path.into(), source }
    }

    pub fn jpeg(path: impl Into<PathBuf>, source: jpeg_encoder::EncodingError) -> Self {
        Self::Jpeg { path: path.into(), source }
    }

    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_path() {
        let err = ConvertError::io(
            "/tmp/out/photo_converted.bmp",
            io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
        );
        let message = err.to_string();
        assert!(message.contains("/tmp/out/photo_converted.bmp"));
        assert!(message.contains("permission denied"));
    }

    #[test]
    fn test_unsupported_format_message() {
        let err = ConvertError::UnsupportedFormat("xcf".to_string());
        assert_eq!(err.to_string(), "unsupported target format: xcf");
    }
}
