pub mod canvas;
pub mod preview;
pub mod properties;
pub mod sidebar;

use iced::widget::{button, column, container, horizontal_space, mouse_area, row, text, text_input};
use iced::{Alignment, Background, Border, Element, Length, Padding};

use crate::app::{App, Message};

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let palette = self.palette();

        let body: Element<'_, Message> = match &self.preview {
            Some(responses) => self.view_form_preview(responses),
            None => row![self.view_sidebar(), self.view_canvas(), self.view_properties()]
                .height(Length::Fill)
                .into(),
        };

        let content = column![self.view_header(), body, self.view_status_bar()];

        let main_view = container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(move |_| container::Style {
                background: Some(Background::Color(palette.bg_dark)),
                ..Default::default()
            });

        // Releases not claimed by the canvas or a sidebar item end the drag
        mouse_area(main_view)
            .on_release(Message::DragCancelled)
            .into()
    }

    fn view_header(&self) -> Element<'_, Message> {
        let palette = self.palette();

        let title = text_input("Form Title", &self.store.state().title)
            .on_input(Message::TitleChanged)
            .size(20)
            .width(Length::Fixed(420.0))
            .style(move |theme, status| {
                let base = text_input::default(theme, status);
                text_input::Style {
                    background: Background::Color(palette.bg_medium),
                    border: Border::default(),
                    value: palette.text_primary,
                    ..base
                }
            });

        let save = button(text("Save").size(14))
            .padding(Padding::from([8, 16]))
            .style(move |_, status| {
                let bg = match status {
                    button::Status::Hovered | button::Status::Pressed => palette.text_primary,
                    _ => palette.accent,
                };
                button::Style {
                    background: Some(Background::Color(bg)),
                    text_color: palette.bg_dark,
                    border: Border {
                        radius: 4.0.into(),
                        ..Default::default()
                    },
                    ..Default::default()
                }
            })
            .on_press(Message::Save);

        let mode = if self.preview.is_some() { "Edit" } else { "Preview" };
        let toggle = button(text(mode).size(14))
            .padding(Padding::from([8, 16]))
            .style(move |_, status| button::Style {
                background: Some(Background::Color(match status {
                    button::Status::Hovered | button::Status::Pressed => palette.bg_active,
                    _ => palette.bg_light,
                })),
                text_color: palette.text_primary,
                border: Border {
                    color: palette.border,
                    width: 1.0,
                    radius: 4.0.into(),
                },
                ..Default::default()
            })
            .on_press(Message::PreviewToggled);

        container(
            row![title, horizontal_space(), toggle, save]
                .spacing(16)
                .align_y(Alignment::Center),
        )
        .padding(Padding::from([12, 16]))
        .width(Length::Fill)
        .style(move |_| container::Style {
            background: Some(Background::Color(palette.bg_medium)),
            border: Border {
                color: palette.border,
                width: 1.0,
                radius: 0.0.into(),
            },
            ..Default::default()
        })
        .into()
    }

    fn view_status_bar(&self) -> Element<'_, Message> {
        let palette = self.palette();
        let count = self.store.fields().len();
        let fields = if count == 1 {
            "1 field".to_string()
        } else {
            format!("{} fields", count)
        };

        container(
            row![
                text(self.status_message.as_str()).size(12).color(palette.text_secondary),
                horizontal_space(),
                text(fields).size(12).color(palette.text_muted),
            ]
            .align_y(Alignment::Center),
        )
        .padding(Padding::from([4, 12]))
        .width(Length::Fill)
        .style(move |_| container::Style {
            background: Some(Background::Color(palette.bg_medium)),
            ..Default::default()
        })
        .into()
    }
}
