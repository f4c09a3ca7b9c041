//! Light stylesheet for the converter window.

use iced::widget::{button, container, pick_list};
use iced::{Background, Border, Color, Shadow, Theme};

use crate::state::shell::NoticeLevel;

/// Opaque colour from 8-bit channels, usable in `const` items
macro_rules! rgb {
    ($r:expr, $g:expr, $b:expr) => {
        Color {
            r: $r as f32 / 255.0,
            g: $g as f32 / 255.0,
            b: $b as f32 / 255.0,
            a: 1.0,
        }
    };
}

pub const BACKGROUND: Color = rgb!(0xf5, 0xf5, 0xf5);
pub const TEXT: Color = rgb!(0x33, 0x33, 0x33);
pub const MUTED: Color = rgb!(0x99, 0x99, 0x99);
pub const ACCENT: Color = rgb!(0x4c, 0xaf, 0x50);
pub const ACCENT_HOVER: Color = rgb!(0x45, 0xa0, 0x49);
pub const WARNING: Color = rgb!(0xff, 0x98, 0x00);
pub const DANGER: Color = rgb!(0xf4, 0x43, 0x36);
const FIELD_BORDER: Color = rgb!(0xdd, 0xdd, 0xdd);
const PREVIEW_BORDER: Color = rgb!(0xcc, 0xcc, 0xcc);

/// Status line colour for a notice level
pub fn status_color(level: NoticeLevel) -> Color {
    match level {
        NoticeLevel::Info => ACCENT,
        NoticeLevel::Warning => WARNING,
        NoticeLevel::Error => DANGER,
    }
}

/// Whole-window background
pub fn window(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(BACKGROUND)),
        text_color: Some(TEXT),
        ..container::Style::default()
    }
}

/// White box with a light border around the preview
pub fn preview_box(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color::WHITE)),
        text_color: Some(MUTED),
        border: Border {
            color: PREVIEW_BORDER,
            width: 2.0,
            radius: 5.0.into(),
        },
        ..container::Style::default()
    }
}

/// Green action buttons
pub fn action_button(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => ACCENT_HOVER,
        button::Status::Active | button::Status::Disabled => ACCENT,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: Color::WHITE,
        border: Border {
            radius: 4.0.into(),
            ..Border::default()
        },
        shadow: Shadow::default(),
    }
}

/// Format selector with a thin rounded border
pub fn format_picker(theme: &Theme, status: pick_list::Status) -> pick_list::Style {
    pick_list::Style {
        text_color: TEXT,
        background: Background::Color(Color::WHITE),
        border: Border {
            color: FIELD_BORDER,
            width: 1.0,
            radius: 4.0.into(),
        },
        ..pick_list::default(theme, status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_colors_differ() {
        let colors = [
            status_color(NoticeLevel::Info),
            status_color(NoticeLevel::Warning),
            status_color(NoticeLevel::Error),
        ];
        assert_ne!(colors[0], colors[1]);
        assert_ne!(colors[1], colors[2]);
        assert_ne!(colors[0], colors[2]);
    }

    #[test]
    fn test_palette_matches_hex_values() {
        assert_eq!(BACKGROUND, Color::from_rgb8(0xf5, 0xf5, 0xf5));
        assert_eq!(ACCENT, Color::from_rgb8(0x4c, 0xaf, 0x50));
        assert_eq!(ACCENT_HOVER, Color::from_rgb8(0x45, 0xa0, 0x49));
        assert_eq!(DANGER, Color::from_rgb8(0xf4, 0x43, 0x36));
    }

    #[test]
    fn test_button_darkens_on_hover() {
        let idle = action_button(&Theme::Light, button::Status::Active);
        let hovered = action_button(&Theme::Light, button::Status::Hovered);
        assert_eq!(idle.background, Some(Background::Color(ACCENT)));
        assert_eq!(hovered.background, Some(Background::Color(ACCENT_HOVER)));
    }
}
