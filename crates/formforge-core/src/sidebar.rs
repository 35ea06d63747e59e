//! Sidebar: the field registry rendered as drag sources.

use crate::canvas::DropPayload;
use crate::field::FieldType;
use crate::registry;

/// Heading above the list of field types.
pub const HEADING: &str = "Field Types";

/// One draggable entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SidebarItem {
    pub field_type: FieldType,
    pub label: &'static str,
    pub icon: &'static str,
}

impl SidebarItem {
    /// The payload carried while this item is dragged.
    pub fn drag_payload(&self) -> DropPayload {
        DropPayload::new(self.field_type)
    }
}

/// Short glyph drawn next to each type name.
pub fn icon(field_type: FieldType) -> &'static str {
    match field_type {
        FieldType::ShortText => "Aa",
        FieldType::LongText => "¶",
        FieldType::MultipleChoice => "◉",
        FieldType::Number => "#",
        FieldType::Date => "▦",
        FieldType::FileUpload => "⇪",
        FieldType::Phone => "☎",
        FieldType::Email => "@",
        FieldType::Payment => "$",
    }
}

/// Returns the sidebar entries in registry order.
pub fn sidebar_items() -> Vec<SidebarItem> {
    registry::list_field_types()
        .iter()
        .map(|info| SidebarItem {
            field_type: info.field_type,
            label: info.display_name,
            icon: icon(info.field_type),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_items_follow_registry() {
        let items = sidebar_items();
        assert_eq!(items.len(), 9);
        assert_eq!(items[0].label, "Short Text");
        assert_eq!(items[8].label, "Payment");
    }

    #[test]
    fn test_payload_carries_only_type() {
        for item in sidebar_items() {
            assert_eq!(item.drag_payload(), DropPayload::new(item.field_type));
        }
    }
}
