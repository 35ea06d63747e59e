use iced::widget::{column, container, mouse_area, row, scrollable, text, Column, Space};
use iced::{Alignment, Background, Border, Element, Length, Padding};

use formforge_core::sidebar::{self, SidebarItem};

use crate::app::{App, DragState, Message};

impl App {
    pub fn view_sidebar(&self) -> Element<'_, Message> {
        let palette = self.palette();

        let items: Vec<Element<'_, Message>> = sidebar::sidebar_items()
            .into_iter()
            .map(|item| self.view_sidebar_item(item))
            .collect();

        let content = column![
            text(sidebar::HEADING.to_uppercase())
                .size(11)
                .color(palette.text_secondary),
            Space::with_height(12),
            scrollable(Column::with_children(items).spacing(8)).height(Length::Fill),
        ];

        container(content)
            .padding(16)
            .width(Length::Fixed(self.ui.sidebar_width))
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

    fn view_sidebar_item(&self, item: SidebarItem) -> Element<'_, Message> {
        let palette = self.palette();
        let dragging = self.drag == Some(DragState::NewField(item.field_type));

        let body = container(
            row![
                text(item.icon)
                    .size(14)
                    .width(Length::Fixed(28.0))
                    .color(palette.text_muted),
                text(item.label).size(13).color(palette.text_primary),
            ]
            .align_y(Alignment::Center),
        )
        .padding(Padding::from([10, 12]))
        .width(Length::Fill)
        .style(move |_| container::Style {
            background: Some(Background::Color(if dragging {
                palette.bg_active
            } else {
                palette.bg_medium
            })),
            border: Border {
                color: palette.border,
                width: 1.0,
                radius: 6.0.into(),
            },
            ..Default::default()
        });

        // Only the field type travels with the drag
        let payload = item.drag_payload();
        mouse_area(body)
            .on_press(Message::DragStarted(payload))
            .on_release(Message::SidebarReleased(payload))
            .into()
    }
}
