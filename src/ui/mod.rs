/// UI support for the main window
///
/// - Bundled window icon (icon.rs)
/// - Colours and widget styles (style.rs)
/// - Native file picker and message dialogs (dialogs.rs)

pub mod dialogs;
pub mod icon;
pub mod style;
