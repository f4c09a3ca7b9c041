/// Image decoding, previewing and format conversion
///
/// This module handles:
/// - The fixed set of target formats and their encoder settings (format.rs)
/// - Decoding a source file and writing a converted copy (convert.rs)
/// - Scaled previews for the UI (preview.rs)
/// - The error type shared by all of the above (error.rs)

pub mod convert;
pub mod error;
pub mod format;
pub mod preview;

#[cfg(test)]
pub(crate) mod testing;
