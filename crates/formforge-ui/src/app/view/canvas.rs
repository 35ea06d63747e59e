use iced::widget::{
    button, column, container, horizontal_space, mouse_area, row, scrollable, text, Column, Row,
};
use iced::{Alignment, Background, Border, Element, Length, Padding};

use formforge_core::canvas::{self, CanvasItem, CanvasView, FieldPreview};

use crate::app::{App, DragState, Message};
use crate::theme::Palette;

impl App {
    pub fn view_canvas(&self) -> Element<'_, Message> {
        let palette = self.palette();

        let content: Element<'_, Message> = match canvas::canvas_view(self.store.state()) {
            CanvasView::Empty { headline, hint } => container(
                container(
                    column![
                        text(headline).size(15).color(palette.text_secondary),
                        text(hint).size(12).color(palette.text_muted),
                    ]
                    .spacing(8)
                    .align_x(Alignment::Center),
                )
                .padding(48)
                .style(move |_| container::Style {
                    background: Some(Background::Color(palette.bg_medium)),
                    border: Border {
                        color: palette.border,
                        width: 2.0,
                        radius: 8.0.into(),
                    },
                    ..Default::default()
                }),
            )
            .center(Length::Fill)
            .into(),

            CanvasView::Fields(items) => {
                let cards: Vec<Element<'_, Message>> = items
                    .into_iter()
                    .map(|item| self.view_canvas_item(item))
                    .collect();

                scrollable(
                    container(Column::with_children(cards).spacing(16).max_width(672.0))
                        .center_x(Length::Fill)
                        .padding(32),
                )
                .height(Length::Fill)
                .into()
            }
        };

        let drop_hover = matches!(self.drag, Some(DragState::NewField(_)));

        let area = container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(move |_| container::Style {
                background: Some(Background::Color(if drop_hover {
                    palette.drop_target
                } else {
                    palette.bg_dark
                })),
                ..Default::default()
            });

        mouse_area(area).on_release(Message::CanvasReleased).into()
    }

    fn view_canvas_item(&self, item: CanvasItem) -> Element<'_, Message> {
        let palette = self.palette();
        let selected = item.selected;

        let mut label = Row::new()
            .push(text(item.label).size(14).color(palette.text_primary))
            .spacing(4);
        if item.required {
            label = label.push(text("*").size(14).color(palette.danger));
        }

        let mut header = row![label, horizontal_space()].align_y(Alignment::Center);
        if selected {
            header = header.push(
                button(text("Delete").size(12))
                    .padding(Padding::from([2, 8]))
                    .style(move |_, status| {
                        let color = match status {
                            button::Status::Hovered | button::Status::Pressed => palette.danger,
                            _ => palette.text_muted,
                        };
                        button::Style {
                            background: None,
                            text_color: color,
                            ..Default::default()
                        }
                    })
                    .on_press(Message::DeleteField(item.id)),
            );
        }

        let mut body = Column::new().push(header).spacing(8);
        if let Some(description) = item.description {
            body = body.push(text(description).size(12).color(palette.text_muted));
        }
        body = body.push(view_preview(item.preview, palette));

        let card = container(body)
            .padding(16)
            .width(Length::Fill)
            .style(move |_| container::Style {
                background: Some(Background::Color(palette.bg_medium)),
                border: Border {
                    color: if selected { palette.accent } else { palette.border },
                    width: if selected { 2.0 } else { 1.0 },
                    radius: 8.0.into(),
                },
                ..Default::default()
            });

        mouse_area(card)
            .on_press(Message::FieldPressed(item.id))
            .on_release(Message::FieldReleased(item.id))
            .into()
    }
}

/// Disabled input drawn under a field's label.
fn view_preview<'a>(preview: FieldPreview, palette: Palette) -> Element<'a, Message> {
    match preview {
        FieldPreview::TextInput { placeholder }
        | FieldPreview::NumberInput { placeholder }
        | FieldPreview::PhoneInput { placeholder }
        | FieldPreview::EmailInput { placeholder } => input_box(placeholder, 1, palette),

        FieldPreview::TextArea { placeholder, rows } => input_box(placeholder, rows, palette),

        FieldPreview::Choices { options } => Column::with_children(options.into_iter().map(
            |option| {
                row![
                    text("○").size(14).color(palette.text_muted),
                    text(option).size(13).color(palette.text_primary),
                ]
                .spacing(8)
                .align_y(Alignment::Center)
                .into()
            },
        ))
        .spacing(6)
        .into(),

        FieldPreview::DatePicker => input_box("mm/dd/yyyy".to_string(), 1, palette),

        FieldPreview::FileDrop { prompt } => framed(
            container(text(prompt).size(13).color(palette.text_muted)).center_x(Length::Fill),
            palette,
        ),

        FieldPreview::Payment { price } => framed(
            column![
                text("Payment field").size(13).color(palette.text_muted),
                container(
                    text(format!("Price: ${}", price))
                        .size(12)
                        .color(palette.text_secondary),
                )
                .padding(8)
                .width(Length::Fill)
                .style(move |_| container::Style {
                    background: Some(Background::Color(palette.bg_light)),
                    border: Border {
                        radius: 4.0.into(),
                        ..Default::default()
                    },
                    ..Default::default()
                }),
            ]
            .spacing(8),
            palette,
        ),
    }
}

fn input_box<'a>(placeholder: String, rows: u16, palette: Palette) -> Element<'a, Message> {
    let height = 20.0 * f32::from(rows.max(1)) + 16.0;
    container(text(placeholder).size(13).color(palette.text_muted))
        .padding(Padding::from([8, 12]))
        .width(Length::Fill)
        .height(Length::Fixed(height))
        .style(move |_| outline(palette))
        .into()
}

pub(super) fn framed<'a>(content: impl Into<Element<'a, Message>>, palette: Palette) -> Element<'a, Message> {
    container(content)
        .padding(16)
        .width(Length::Fill)
        .style(move |_| outline(palette))
        .into()
}

pub(super) fn outline(palette: Palette) -> container::Style {
    container::Style {
        border: Border {
            color: palette.border,
            width: 1.0,
            radius: 6.0.into(),
        },
        ..Default::default()
    }
}
