/// The application icon, compiled into the binary
use iced::window;
use tracing::warn;

/// PNG bytes of the bundled icon
pub const ICON_PNG: &[u8] = include_bytes!("../../assets/icon.png");

/// Decode the bundled icon for the window. A broken icon is not worth
/// refusing to start over, so failure just means no icon.
pub fn app_icon() -> Option<window::Icon> {
    match window::icon::from_file_data(ICON_PNG, None) {
        Ok(icon) => Some(icon),
        Err(err) => {
            warn!(error = %err, "Could not load bundled icon");
            None
        }
    }
}
