//! Presentation state machine.
//!
//! The UI turns clicks into [`Intent`]s and feeds them to [`Shell::handle`].
//! The shell owns everything the window displays and never touches a
//! toolkit type, so it runs just as well headless.

use std::path::PathBuf;

use tracing::{error, info, warn};

use super::data::{display_name, ConversionResult, SourceImage};
use crate::imaging::convert::{convert, ConversionRequest};
use crate::imaging::format::TargetFormat;
use crate::imaging::preview::{load_preview, Preview};

/// Where the shell is in its select/convert cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Nothing selected; the placeholder is showing
    #[default]
    Empty,
    /// A preview is showing and a format can be chosen
    Selected,
    /// The last conversion wrote a file
    Converted,
    /// The last conversion failed
    Failed,
}

/// Something the user asked for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// A file was picked; `None` when the dialog was cancelled
    Select(Option<PathBuf>),
    /// A different target format was chosen
    ChooseFormat(TargetFormat),
    /// Convert the current selection
    Convert,
}

/// Severity of a message shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

impl NoticeLevel {
    /// Dialog title for this level
    pub fn title(self) -> &'static str {
        match self {
            NoticeLevel::Info => "Success",
            NoticeLevel::Warning => "Warning",
            NoticeLevel::Error => "Error",
        }
    }
}

/// A user-facing message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Info, message: message.into() }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Warning, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Error, message: message.into() }
    }
}

/// Everything the window shows, plus the current selection
#[derive(Debug, Default)]
pub struct Shell {
    phase: Phase,
    selection: Option<SourceImage>,
    preview: Option<Preview>,
    format: TargetFormat,
    status: Option<Notice>,
}

impl Shell {
    pub fn new(format: TargetFormat) -> Self {
        Self {
            format,
            ..Self::default()
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn selection(&self) -> Option<&SourceImage> {
        self.selection.as_ref()
    }

    pub fn preview(&self) -> Option<&Preview> {
        self.preview.as_ref()
    }

    pub fn format(&self) -> TargetFormat {
        self.format
    }

    /// Status line under the controls
    pub fn status(&self) -> Option<&Notice> {
        self.status.as_ref()
    }

    /// Apply `intent`. Returns a notice when the UI should also raise a
    /// modal dialog; the status line is updated either way.
    pub fn handle(&mut self, intent: Intent) -> Option<Notice> {
        match intent {
            Intent::Select(None) => None,
            Intent::Select(Some(path)) => self.select(path),
            Intent::ChooseFormat(format) => {
                self.format = format;
                None
            }
            Intent::Convert => self.convert(),
        }
    }

    fn select(&mut self, path: PathBuf) -> Option<Notice> {
        match load_preview(&path) {
            Ok(preview) => {
                let source = SourceImage::new(path);
                info!(path = %source.path().display(), "Selected image");

                self.status = Some(Notice::info(format!("Selected: {}", source.file_name())));
                self.selection = Some(source);
                self.preview = Some(preview);
                self.phase = Phase::Selected;
                None
            }
            Err(err) => {
                error!(path = %path.display(), error = %err, "Failed to load preview");

                self.selection = None;
                self.preview = None;
                self.phase = Phase::Empty;
                Some(self.report(Notice::error(format!("Failed to load image: {err}"))))
            }
        }
    }

    fn convert(&mut self) -> Option<Notice> {
        let Some(source) = &self.selection else {
            warn!("Convert requested with no image selected");
            return Some(self.report(Notice::warning("Please select an image first!")));
        };

        let request = ConversionRequest::new(source.path(), self.format);
        let result: ConversionResult = convert(&request);

        match result {
            Ok(destination) => {
                self.phase = Phase::Converted;
                self.status = Some(Notice::info(format!(
                    "Converted! Saved as: {}",
                    display_name(&destination)
                )));
                Some(Notice::info(format!("Image saved to: {}", destination.display())))
            }
            Err(err) => {
                error!(
                    source = %request.source().display(),
                    format = %request.format(),
                    error = %err,
                    "Conversion failed"
                );

                self.phase = Phase::Failed;
                Some(self.report(Notice::error(format!("Conversion failed: {err}"))))
            }
        }
    }

    /// Show `notice` in the status line and hand it back for a dialog
    fn report(&mut self, notice: Notice) -> Notice {
        self.status = Some(notice.clone());
        notice
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::imaging::convert::destination_path;
    use crate::imaging::testing::{rgb_image, rgba_image, write_corrupt, write_fixture};
    use image::{ColorType, ImageFormat};
    use std::fs;
    use tempfile::tempdir;

    fn file_count(dir: &std::path::Path) -> usize {
        fs::read_dir(dir).unwrap().count()
    }

    #[test]
    fn test_starts_empty_with_default_format() {
        let shell = Shell::new(TargetFormat::default());
        assert_eq!(shell.phase(), Phase::Empty);
        assert_eq!(shell.format(), TargetFormat::Bmp);
        assert!(shell.selection().is_none());
        assert!(shell.preview().is_none());
        assert!(shell.status().is_none());
    }

    #[test]
    fn test_cancelled_dialog_changes_nothing() {
        let dir = tempdir().unwrap();
        let path = write_fixture(dir.path(), "photo.png", &rgb_image(10, 10), ImageFormat::Png);

        let mut shell = Shell::default();
        shell.handle(Intent::Select(Some(path.clone())));
        assert_eq!(shell.handle(Intent::Select(None)), None);

        assert_eq!(shell.phase(), Phase::Selected);
        assert_eq!(shell.selection().unwrap().path(), path);
    }

    #[test]
    fn test_select_shows_preview() {
        let dir = tempdir().unwrap();
        let path = write_fixture(dir.path(), "photo.png", &rgba_image(40, 30), ImageFormat::Png);

        let mut shell = Shell::default();
        let notice = shell.handle(Intent::Select(Some(path)));

        assert_eq!(notice, None);
        assert_eq!(shell.phase(), Phase::Selected);
        assert!(shell.preview().is_some());
        assert_eq!(shell.status(), Some(&Notice::info("Selected: photo.png")));
    }

    #[test]
    fn test_convert_without_selection_warns() {
        let dir = tempdir().unwrap();
        let mut shell = Shell::new(TargetFormat::Png);

        let notice = shell.handle(Intent::Convert).unwrap();

        assert_eq!(notice.level, NoticeLevel::Warning);
        assert_eq!(notice.message, "Please select an image first!");
        assert_eq!(shell.phase(), Phase::Empty);
        assert_eq!(file_count(dir.path()), 0);
    }

    #[test]
    fn test_select_then_convert() {
        let dir = tempdir().unwrap();
        let path = write_fixture(dir.path(), "photo.png", &rgba_image(40, 30), ImageFormat::Png);

        let mut shell = Shell::default();
        shell.handle(Intent::Select(Some(path.clone())));
        shell.handle(Intent::ChooseFormat(TargetFormat::Bmp));
        let notice = shell.handle(Intent::Convert).unwrap();

        let expected = dir.path().join("photo_converted.bmp");
        assert_eq!(notice.level, NoticeLevel::Info);
        assert!(notice.message.contains(&expected.display().to_string()));
        assert_eq!(shell.phase(), Phase::Converted);
        assert_eq!(
            shell.status(),
            Some(&Notice::info("Converted! Saved as: photo_converted.bmp"))
        );
        assert_eq!(image::open(&expected).unwrap().color(), ColorType::Rgb8);
    }

    #[test]
    fn test_converted_can_convert_again() {
        let dir = tempdir().unwrap();
        let path = write_fixture(dir.path(), "photo.bmp", &rgb_image(16, 16), ImageFormat::Bmp);

        let mut shell = Shell::new(TargetFormat::Jpg);
        shell.handle(Intent::Select(Some(path.clone())));
        shell.handle(Intent::Convert);
        shell.handle(Intent::ChooseFormat(TargetFormat::Webp));
        shell.handle(Intent::Convert);

        assert_eq!(shell.phase(), Phase::Converted);
        assert!(destination_path(&path, TargetFormat::Jpg).exists());
        assert!(destination_path(&path, TargetFormat::Webp).exists());
    }

    #[test]
    fn test_corrupt_selection_resets_to_empty() {
        let dir = tempdir().unwrap();
        let good = write_fixture(dir.path(), "good.png", &rgb_image(10, 10), ImageFormat::Png);
        let bad = write_corrupt(dir.path(), "bad.png");

        let mut shell = Shell::default();
        shell.handle(Intent::Select(Some(good)));
        let notice = shell.handle(Intent::Select(Some(bad))).unwrap();

        assert_eq!(notice.level, NoticeLevel::Error);
        assert!(notice.message.starts_with("Failed to load image:"));
        assert_eq!(shell.status(), Some(&notice));
        assert_eq!(shell.phase(), Phase::Empty);
        assert!(shell.selection().is_none());
        assert!(shell.preview().is_none());

        // Nothing left to convert
        let warning = shell.handle(Intent::Convert).unwrap();
        assert_eq!(warning.level, NoticeLevel::Warning);
        assert_eq!(file_count(dir.path()), 2);
    }

    #[test]
    fn test_failed_conversion_keeps_selection() {
        let dir = tempdir().unwrap();
        let path = write_fixture(dir.path(), "photo.png", &rgb_image(10, 10), ImageFormat::Png);

        let mut shell = Shell::default();
        shell.handle(Intent::Select(Some(path.clone())));

        // The file goes bad between preview and convert
        fs::write(&path, b"truncated").unwrap();
        let notice = shell.handle(Intent::Convert).unwrap();

        assert_eq!(notice.level, NoticeLevel::Error);
        assert!(notice.message.starts_with("Conversion failed:"));
        assert_eq!(shell.phase(), Phase::Failed);
        assert_eq!(shell.selection().unwrap().path(), path);
        assert!(shell.preview().is_some());
        assert!(!destination_path(&path, TargetFormat::Bmp).exists());
    }

    #[test]
    fn test_failed_can_recover() {
        let dir = tempdir().unwrap();
        let path = write_fixture(dir.path(), "photo.png", &rgb_image(10, 10), ImageFormat::Png);
        let bytes = fs::read(&path).unwrap();

        let mut shell = Shell::default();
        shell.handle(Intent::Select(Some(path.clone())));
        fs::write(&path, b"truncated").unwrap();
        shell.handle(Intent::Convert);
        assert_eq!(shell.phase(), Phase::Failed);

        fs::write(&path, bytes).unwrap();
        shell.handle(Intent::Convert);
        assert_eq!(shell.phase(), Phase::Converted);
    }

    #[test]
    fn test_choose_format_keeps_phase() {
        let mut shell = Shell::default();
        assert_eq!(shell.handle(Intent::ChooseFormat(TargetFormat::Tiff)), None);
        assert_eq!(shell.format(), TargetFormat::Tiff);
        assert_eq!(shell.phase(), Phase::Empty);
    }
}
