use iced::widget::{button, column, container, image, pick_list, row, text, Space};
use iced::{font, window, Alignment, Element, Font, Length, Size, Task, Theme};

mod config;
mod imaging;
mod logging;
mod state;
mod ui;

use config::AppConfig;
use imaging::format::TargetFormat;
use state::shell::{Intent, Phase, Shell};
use ui::{dialogs, icon, style};

const BOLD: Font = Font {
    weight: font::Weight::Bold,
    ..Font::DEFAULT
};

/// Main application state
struct ImageConverter {
    /// Fixed window and layout settings
    config: AppConfig,
    /// Selection, preview and status, driven by intents
    shell: Shell,
    /// GPU handle for the current preview, rebuilt only when it changes
    preview: Option<image::Handle>,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// User clicked "Select Image"
    SelectPressed,
    /// User picked a target format
    FormatPicked(TargetFormat),
    /// User clicked "Convert & Save"
    ConvertPressed,
}

impl ImageConverter {
    /// Create a new instance of the application
    fn new(config: AppConfig) -> (Self, Task<Message>) {
        tracing::info!(title = config.title, "Image converter started");

        let shell = Shell::new(config.default_format);
        (
            ImageConverter {
                config,
                shell,
                preview: None,
            },
            Task::none(),
        )
    }

    /// Turn the message into an intent and let the shell handle it
    fn update(&mut self, message: Message) -> Task<Message> {
        let intent = match message {
            Message::SelectPressed => Intent::Select(dialogs::pick_source_image()),
            Message::FormatPicked(format) => Intent::ChooseFormat(format),
            Message::ConvertPressed => Intent::Convert,
        };
        let selecting = matches!(intent, Intent::Select(Some(_)));

        if let Some(notice) = self.shell.handle(intent) {
            dialogs::show_notice(&notice);
        }

        if selecting {
            self.preview = self
                .shell
                .preview()
                .map(|p| image::Handle::from_rgba(p.width, p.height, p.rgba.clone()));
        }

        Task::none()
    }

    /// Build the user interface
    fn view(&self) -> Element<'_, Message> {
        let (preview_width, preview_height) = self.config.preview_size;

        let preview: Element<Message> = match (self.shell.phase(), &self.preview) {
            (Phase::Empty, _) | (_, None) => text("Please select an image").into(),
            (_, Some(handle)) => image(handle.clone()).into(),
        };

        let preview_box = container(preview)
            .center_x(Length::Fixed(preview_width))
            .center_y(Length::Fixed(preview_height))
            .style(style::preview_box);

        let controls = row![
            button(text("Select Image"))
                .on_press(Message::SelectPressed)
                .width(120)
                .padding([8, 16])
                .style(style::action_button),
            text("Target format:"),
            pick_list(
                &TargetFormat::ALL[..],
                Some(self.shell.format()),
                Message::FormatPicked,
            )
            .width(100)
            .padding(5)
            .style(style::format_picker),
            button(text("Convert & Save"))
                .on_press(Message::ConvertPressed)
                .width(120)
                .padding([8, 16])
                .style(style::action_button),
        ]
        .spacing(10)
        .align_y(Alignment::Center);

        let status = match self.shell.status() {
            Some(notice) => text(notice.message.as_str())
                .size(12)
                .color(style::status_color(notice.level)),
            None => text("").size(12),
        };

        let content = column![
            text(self.config.title).size(20).font(BOLD),
            preview_box,
            controls,
            status,
            Space::with_height(Length::Fill),
            text(self.config.footer).size(13).color(style::MUTED),
        ]
        .spacing(15)
        .padding(20)
        .align_x(Alignment::Center);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(style::window)
            .into()
    }

    /// Window title, naming the selected file once there is one
    fn title(&self) -> String {
        match self.shell.selection() {
            Some(source) => format!("{} - {}", self.config.title, source.file_name()),
            None => self.config.title.to_string(),
        }
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Light
    }
}

/// Fixed-size window with the bundled icon
fn window_settings(config: &AppConfig) -> window::Settings {
    let (width, height) = config.window_size;
    window::Settings {
        size: Size::new(width, height),
        resizable: false,
        icon: icon::app_icon(),
        ..window::Settings::default()
    }
}

fn main() -> iced::Result {
    logging::init();

    let config = AppConfig::default();
    let settings = window_settings(&config);

    iced::application(ImageConverter::title, ImageConverter::update, ImageConverter::view)
        .theme(ImageConverter::theme)
        .window(settings)
        .centered()
        .run_with(move || ImageConverter::new(config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::imaging::testing::{rgb_image, write_fixture};
    use ::image::ImageFormat;
    use tempfile::tempdir;

    #[test]
    fn test_title_follows_selection() {
        let dir = tempdir().unwrap();
        let path = write_fixture(dir.path(), "photo.png", &rgb_image(10, 10), ImageFormat::Png);

        let (mut app, _) = ImageConverter::new(AppConfig::default());
        assert_eq!(app.title(), "Image Format Converter");

        app.shell.handle(Intent::Select(Some(path)));
        assert_eq!(app.title(), "Image Format Converter - photo.png");
        assert_eq!(app.shell.phase(), Phase::Selected);
    }

    #[test]
    fn test_format_message_reaches_shell() {
        let (mut app, _) = ImageConverter::new(AppConfig::default());
        let _ = app.update(Message::FormatPicked(TargetFormat::Webp));
        assert_eq!(app.shell.format(), TargetFormat::Webp);
    }
}
