/// Shared data structures for the application state
///
/// These structs represent the data model that flows between
/// the imaging layer and the UI layer.
use std::path::{Path, PathBuf};

use crate::imaging::error::ConvertError;

/// The image the user picked. Replaced on every new selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceImage {
    path: PathBuf,
}

impl SourceImage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File name only (e.g., "photo.png"), for status text
    pub fn file_name(&self) -> String {
        display_name(&self.path)
    }
}

/// Destination path of the written file, or why nothing was written
pub type ConversionResult = Result<PathBuf, ConvertError>;

/// File name of `path`, falling back to the whole path
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
