use iced::widget::{button, checkbox, column, container, row, scrollable, text, text_input, Column, Space};
use iced::{Alignment, Background, Border, Element, Length, Padding};

use formforge_core::properties::{self, PropertiesView, PropertyControl};
use formforge_core::PropertyEdit;

use crate::app::{App, Message};
use crate::theme::Palette;

impl App {
    pub fn view_properties(&self) -> Element<'_, Message> {
        let palette = self.palette();

        let content: Element<'_, Message> = match properties::properties_view(self.store.state()) {
            PropertiesView::NoSelection { prompt } => column![
                container(text(prompt).size(13).color(palette.text_muted))
                    .center_x(Length::Fill)
                    .padding(Padding::from([32, 0])),
                self.view_form_settings(),
            ]
            .into(),

            PropertiesView::Editing(editor) => {
                let mut panel = Column::new().spacing(16).push(heading("Field Properties", palette));
                for control in editor.controls {
                    panel = panel.push(self.view_control(control));
                }
                panel.into()
            }
        };

        container(scrollable(content).height(Length::Fill))
            .padding(16)
            .width(Length::Fixed(self.ui.properties_width))
            .height(Length::Fill)
            .style(move |_| container::Style {
                background: Some(Background::Color(palette.bg_light)),
                border: Border {
                    color: palette.border,
                    width: 1.0,
                    radius: 0.0.into(),
                },
                ..Default::default()
            })
            .into()
    }

    fn view_control(&self, control: PropertyControl) -> Element<'_, Message> {
        let palette = self.palette();

        match control {
            PropertyControl::Label(value) => labeled(
                "Label",
                text_input("", &value)
                    .on_input(|v| Message::PropertyEdited(PropertyEdit::Label(v)))
                    .padding(8),
                palette,
            ),

            PropertyControl::Description(value) => labeled(
                "Description (optional)",
                text_input("", &value)
                    .on_input(|v| Message::PropertyEdited(PropertyEdit::Description(v)))
                    .padding(8),
                palette,
            ),

            PropertyControl::Placeholder(value) => labeled(
                "Placeholder",
                text_input("", &value)
                    .on_input(|v| Message::PropertyEdited(PropertyEdit::Placeholder(v)))
                    .padding(8),
                palette,
            ),

            PropertyControl::Options(options) => {
                let mut list = Column::new().spacing(6);
                for (index, option) in options.iter().enumerate() {
                    list = list.push(
                        row![
                            text_input("", option)
                                .on_input(move |value| {
                                    Message::PropertyEdited(PropertyEdit::Option { index, value })
                                })
                                .padding(Padding::from([4, 8])),
                            button(text("×").size(14))
                                .padding(Padding::from([2, 8]))
                                .style(move |_, status| button::Style {
                                    background: None,
                                    text_color: match status {
                                        button::Status::Hovered => palette.danger,
                                        _ => palette.text_muted,
                                    },
                                    ..Default::default()
                                })
                                .on_press(Message::PropertyEdited(PropertyEdit::RemoveOption(index))),
                        ]
                        .spacing(6)
                        .align_y(Alignment::Center),
                    );
                }
                list = list.push(
                    button(text("+ Add option").size(12))
                        .padding(0)
                        .style(move |_, _| button::Style {
                            background: None,
                            text_color: palette.accent,
                            ..Default::default()
                        })
                        .on_press(Message::PropertyEdited(PropertyEdit::AddOption)),
                );
                labeled("Options", list, palette)
            }

            PropertyControl::Price(value) => {
                let shown = self.price_draft.clone().unwrap_or(value);
                labeled(
                    "Price ($)",
                    text_input("0.00", &shown)
                        .on_input(|v| Message::PropertyEdited(PropertyEdit::Price(v)))
                        .padding(8),
                    palette,
                )
            }

            PropertyControl::Required(required) => checkbox("Required", required)
                .on_toggle(|checked| Message::PropertyEdited(PropertyEdit::Required(checked)))
                .size(16)
                .text_size(13)
                .into(),
        }
    }

    fn view_form_settings(&self) -> Element<'_, Message> {
        let palette = self.palette();
        let settings = &self.store.state().settings;

        column![
            heading("Form Settings", palette),
            labeled(
                "Theme",
                text_input("default", &settings.theme)
                    .on_input(Message::ThemeChanged)
                    .padding(8),
                palette,
            ),
            labeled(
                "Submit button text",
                text_input("Submit", &settings.submit_button_text)
                    .on_input(Message::SubmitTextChanged)
                    .padding(8),
                palette,
            ),
            checkbox("Show progress bar", settings.show_progress_bar)
                .on_toggle(Message::ProgressBarToggled)
                .size(16)
                .text_size(13),
        ]
        .spacing(16)
        .into()
    }
}

fn heading<'a>(title: &'a str, palette: Palette) -> Element<'a, Message> {
    column![
        text(title).size(16).color(palette.text_primary),
        Space::with_height(4),
    ]
    .into()
}

fn labeled<'a>(
    label: &'a str,
    control: impl Into<Element<'a, Message>>,
    palette: Palette,
) -> Element<'a, Message> {
    column![text(label).size(12).color(palette.text_secondary), control.into()]
        .spacing(4)
        .into()
}
