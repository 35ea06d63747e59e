use iced::widget::{
    button, column, container, progress_bar, radio, row, scrollable, text, text_input, Button,
    Column, Row, TextInput,
};
use iced::{Alignment, Background, Border, Element, Length, Padding};

use formforge_core::preview::{self, PreviewForm, PreviewItem, PreviewView};
use formforge_core::{FieldId, FieldPreview, Responses};

use super::canvas::{framed, outline};
use crate::app::{App, Message};
use crate::theme::Palette;

impl App {
    pub fn view_form_preview(&self, responses: &Responses) -> Element<'_, Message> {
        let palette = self.palette();

        let content: Element<'_, Message> =
            match preview::preview_view(self.store.state(), responses) {
                PreviewView::Form(form) => scrollable(
                    container(view_form(form, palette))
                        .center_x(Length::Fill)
                        .padding(32),
                )
                .height(Length::Fill)
                .into(),

                PreviewView::Submitted { headline, detail } => container(
                    card(
                        column![
                            text("✓").size(32).color(palette.accent),
                            text(headline).size(20).color(palette.text_primary),
                            text(detail).size(13).color(palette.text_secondary),
                            submit_button("Fill in again", palette)
                                .on_press(Message::PreviewReset),
                        ]
                        .spacing(12)
                        .align_x(Alignment::Center),
                        palette,
                    ),
                )
                .center(Length::Fill)
                .into(),
            };

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(move |_| container::Style {
                background: Some(Background::Color(palette.bg_dark)),
                ..Default::default()
            })
            .into()
    }
}

fn view_form<'a>(form: PreviewForm, palette: Palette) -> Element<'a, Message> {
    let mut body = Column::new()
        .spacing(24)
        .push(text(form.title).size(24).color(palette.text_primary));

    if let Some(progress) = form.progress {
        body = body.push(progress_bar(0.0..=1.0, progress).height(6));
    }

    for item in form.fields {
        body = body.push(view_item(item, palette));
    }

    body = body.push(
        submit_button(form.submit_label, palette)
            .width(Length::Fill)
            .on_press(Message::PreviewSubmitted),
    );

    card(body.max_width(672.0), palette)
}

fn view_item<'a>(item: PreviewItem, palette: Palette) -> Element<'a, Message> {
    let PreviewItem {
        id,
        label,
        required,
        description,
        input,
        answer,
        error,
        ..
    } = item;

    let mut title = Row::new()
        .push(text(label).size(14).color(palette.text_primary))
        .spacing(4);
    if required {
        title = title.push(text("*").size(14).color(palette.danger));
    }

    let mut field = Column::new().push(title).spacing(6);
    if let Some(description) = description {
        field = field.push(text(description).size(12).color(palette.text_muted));
    }
    field = field.push(view_input(id, input, answer.as_deref().unwrap_or_default(), palette));
    if let Some(error) = error {
        field = field.push(text(error).size(12).color(palette.danger));
    }
    field.into()
}

/// The input a respondent fills in.
fn view_input<'a>(
    id: FieldId,
    input: FieldPreview,
    answer: &str,
    palette: Palette,
) -> Element<'a, Message> {
    let line = Padding::from([8, 12]);

    match input {
        FieldPreview::TextInput { placeholder }
        | FieldPreview::NumberInput { placeholder }
        | FieldPreview::PhoneInput { placeholder }
        | FieldPreview::EmailInput { placeholder } => {
            answer_input(id, &placeholder, answer, line).into()
        }

        // Single line stand-in; the answer is still free text
        FieldPreview::TextArea { placeholder, .. } => {
            answer_input(id, &placeholder, answer, Padding::from([24, 12])).into()
        }

        FieldPreview::DatePicker => answer_input(id, "mm/dd/yyyy", answer, line).into(),

        FieldPreview::Choices { options } => {
            let selected = options.iter().position(|o| o == answer);
            Column::with_children(options.into_iter().enumerate().map(|(index, option)| {
                let value = option.clone();
                radio(option, index, selected, move |_| {
                    Message::PreviewAnswered(id, value)
                })
                .size(14)
                .text_size(13)
                .into()
            }))
            .spacing(8)
            .into()
        }

        FieldPreview::FileDrop { prompt } => framed(
            container(text(prompt).size(13).color(palette.text_muted)).center_x(Length::Fill),
            palette,
        ),

        FieldPreview::Payment { price } => framed(
            column![
                text(format!("Payment: ${}", price))
                    .size(13)
                    .color(palette.text_primary),
                text_input("Card number", "").padding(8),
                row![
                    text_input("MM/YY", "").padding(8),
                    text_input("CVC", "").padding(8),
                ]
                .spacing(8),
            ]
            .spacing(8),
            palette,
        ),
    }
}

fn answer_input<'a>(
    id: FieldId,
    placeholder: &str,
    answer: &str,
    padding: Padding,
) -> TextInput<'a, Message> {
    text_input(placeholder, answer)
        .on_input(move |value| Message::PreviewAnswered(id, value))
        .padding(padding)
}

fn submit_button<'a>(label: impl Into<String>, palette: Palette) -> Button<'a, Message> {
    button(
        container(text(label.into()).size(14).color(palette.bg_dark)).center_x(Length::Fill),
    )
    .padding(Padding::from([10, 16]))
    .style(move |_, status| button::Style {
        background: Some(Background::Color(match status {
            button::Status::Hovered | button::Status::Pressed => palette.text_primary,
            _ => palette.accent,
        })),
        border: Border {
            radius: 4.0.into(),
            ..Default::default()
        },
        ..Default::default()
    })
}

fn card<'a>(content: impl Into<Element<'a, Message>>, palette: Palette) -> Element<'a, Message> {
    container(content)
        .padding(32)
        .style(move |_| container::Style {
            background: Some(Background::Color(palette.bg_medium)),
            ..outline(palette)
        })
        .into()
}
