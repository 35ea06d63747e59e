//! Canvas: the drop target and the ordered preview of the form.
//!
//! The canvas never edits fields directly. A drop creates a field from
//! registry defaults and hands it to the store; rendering is a pure
//! function of the current snapshot.

use rust_decimal::Decimal;

use crate::field::{Field, FieldId, FieldKind, FieldType};
use crate::registry;
use crate::store::{FormState, FormStore};
use crate::CoreResult;

/// Shown when the form has no fields yet.
pub const EMPTY_HEADLINE: &str = "Drag and drop field types from the sidebar";
pub const EMPTY_HINT: &str = "or click a field type to add it to your form";

/// Payload carried by a drag from the sidebar: only the field type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropPayload {
    pub field_type: FieldType,
}

impl DropPayload {
    pub fn new(field_type: FieldType) -> Self {
        Self { field_type }
    }

    /// Builds a payload from a string type id such as `"short_text"`.
    pub fn parse(id: &str) -> CoreResult<Self> {
        Ok(Self::new(id.parse()?))
    }
}

/// Handles a drop on the canvas: creates a field with registry defaults
/// and appends it. The new field becomes the selection.
pub fn drop_on_canvas(store: &mut FormStore, payload: DropPayload) -> CoreResult<FieldId> {
    let field = registry::new_field(payload.field_type);
    tracing::info!("Adding {} field {}", payload.field_type, field.id());
    store.add_field(field)
}

/// What the canvas shows.
#[derive(Debug, Clone, PartialEq)]
pub enum CanvasView {
    Empty {
        headline: &'static str,
        hint: &'static str,
    },
    Fields(Vec<CanvasItem>),
}

/// One rendered field.
#[derive(Debug, Clone, PartialEq)]
pub struct CanvasItem {
    pub id: FieldId,
    pub label: String,
    pub required: bool,
    pub description: Option<String>,
    pub selected: bool,
    pub preview: FieldPreview,
}

/// Disabled input shown under a field's label.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldPreview {
    TextInput { placeholder: String },
    TextArea { placeholder: String, rows: u16 },
    Choices { options: Vec<String> },
    NumberInput { placeholder: String },
    DatePicker,
    FileDrop { prompt: &'static str },
    PhoneInput { placeholder: String },
    EmailInput { placeholder: String },
    Payment { price: String },
}

impl FieldPreview {
    /// Builds the preview for a field.
    pub fn of(field: &Field) -> Self {
        let placeholder = |fallback: &str| {
            field
                .placeholder()
                .filter(|p| !p.is_empty())
                .unwrap_or(fallback)
                .to_string()
        };

        match &field.kind {
            FieldKind::ShortText { .. } => FieldPreview::TextInput {
                placeholder: placeholder("Short text answer"),
            },
            FieldKind::LongText { .. } => FieldPreview::TextArea {
                placeholder: placeholder("Long text answer"),
                rows: 3,
            },
            FieldKind::MultipleChoice { options } => FieldPreview::Choices {
                options: options.clone(),
            },
            FieldKind::Number { .. } => FieldPreview::NumberInput {
                placeholder: placeholder("Number"),
            },
            FieldKind::Date => FieldPreview::DatePicker,
            FieldKind::FileUpload => FieldPreview::FileDrop {
                prompt: "Click to upload file",
            },
            FieldKind::Phone { .. } => FieldPreview::PhoneInput {
                placeholder: placeholder("Phone number"),
            },
            FieldKind::Email { .. } => FieldPreview::EmailInput {
                placeholder: placeholder("Email address"),
            },
            FieldKind::Payment { price } => FieldPreview::Payment {
                price: format_price(*price),
            },
        }
    }
}

/// Formats a price with at least two decimals and never rounds, so the
/// amount shown is the amount stored.
pub fn format_price(price: Option<Decimal>) -> String {
    let Some(mut price) = price else {
        return "0.00".to_string();
    };
    if price.scale() < 2 {
        price.rescale(2);
    }
    price.to_string()
}

/// Renders the current snapshot as canvas items, in list order.
pub fn canvas_view(state: &FormState) -> CanvasView {
    if state.fields.is_empty() {
        return CanvasView::Empty {
            headline: EMPTY_HEADLINE,
            hint: EMPTY_HINT,
        };
    }

    let items = state
        .fields
        .iter()
        .map(|field| CanvasItem {
            id: field.id(),
            label: field.label.clone(),
            required: field.required,
            description: field.description.clone().filter(|d| !d.is_empty()),
            selected: state.selected == Some(field.id()),
            preview: FieldPreview::of(field),
        })
        .collect();

    CanvasView::Fields(items)
}
