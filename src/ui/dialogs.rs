/// Native dialogs. These block the event thread until dismissed.
use std::path::PathBuf;

use rfd::{FileDialog, MessageButtons, MessageDialog, MessageLevel};

use crate::imaging::format::SOURCE_EXTENSIONS;
use crate::state::shell::{Notice, NoticeLevel};

/// Ask for a single image file; `None` if cancelled
pub fn pick_source_image() -> Option<PathBuf> {
    let mut dialog = FileDialog::new()
        .set_title("Select Image")
        .add_filter("Image files", &SOURCE_EXTENSIONS);

    if let Some(pictures) = dirs::picture_dir() {
        dialog = dialog.set_directory(pictures);
    }

    dialog.pick_file()
}

/// Show `notice` in a modal message box
pub fn show_notice(notice: &Notice) {
    let level = match notice.level {
        NoticeLevel::Info => MessageLevel::Info,
        NoticeLevel::Warning => MessageLevel::Warning,
        NoticeLevel::Error => MessageLevel::Error,
    };

    MessageDialog::new()
        .set_level(level)
        .set_title(notice.level.title())
        .set_description(notice.message.as_str())
        .set_buttons(MessageButtons::Ok)
        .show();
}
