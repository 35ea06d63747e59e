//! Properties panel: editing controls for the selected field.
//!
//! ## Learning: Read-Modify-Write
//!
//! Every control change copies the selected field, changes one attribute on
//! the copy and writes the whole record back with
//! `FieldPatch::from(field)`. The store still receives a patch, but one that
//! lists every attribute, so the panel never has to know which attributes a
//! patch may omit.

use rust_decimal::Decimal;
use std::str::FromStr;

use crate::field::{Field, FieldKind};
use crate::store::{FormState, FormStore};
use crate::{CoreError, CoreResult};

/// Shown when no field is selected.
pub const NO_SELECTION_PROMPT: &str = "Select a field to edit properties";

/// What the panel shows.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertiesView {
    NoSelection { prompt: &'static str },
    Editing(FieldEditor),
}

/// Controls for one field, in display order.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldEditor {
    pub field: Field,
    pub controls: Vec<PropertyControl>,
}

/// One editing control with its current value.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyControl {
    Label(String),
    Description(String),
    /// Text-like fields only
    Placeholder(String),
    /// Multiple choice only
    Options(Vec<String>),
    /// Payment only; empty when no price is set
    Price(String),
    Required(bool),
}

/// A change made through one of the controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyEdit {
    Label(String),
    Description(String),
    Placeholder(String),
    Option { index: usize, value: String },
    AddOption,
    RemoveOption(usize),
    Price(String),
    Required(bool),
}

/// Builds the panel for the current selection.
pub fn properties_view(state: &FormState) -> PropertiesView {
    let Some(field) = state.selected_field() else {
        return PropertiesView::NoSelection {
            prompt: NO_SELECTION_PROMPT,
        };
    };

    let mut controls = vec![
        PropertyControl::Label(field.label.clone()),
        PropertyControl::Description(field.description.clone().unwrap_or_default()),
    ];

    match &field.kind {
        FieldKind::ShortText { placeholder }
        | FieldKind::LongText { placeholder }
        | FieldKind::Number { placeholder }
        | FieldKind::Phone { placeholder }
        | FieldKind::Email { placeholder } => {
            controls.push(PropertyControl::Placeholder(
                placeholder.clone().unwrap_or_default(),
            ));
        }
        FieldKind::MultipleChoice { options } => {
            controls.push(PropertyControl::Options(options.clone()));
        }
        FieldKind::Payment { price } => {
            controls.push(PropertyControl::Price(
                price.map(|p| p.to_string()).unwrap_or_default(),
            ));
        }
        FieldKind::Date | FieldKind::FileUpload => {}
    }

    controls.push(PropertyControl::Required(field.required));

    PropertiesView::Editing(FieldEditor {
        field: field.clone(),
        controls,
    })
}

/// Applies a control change to the selected field.
pub fn apply_property_edit(store: &mut FormStore, edit: PropertyEdit) -> CoreResult<()> {
    let mut field = store.selected_field().cloned().ok_or(CoreError::NoSelection)?;
    edit_field(&mut field, edit)?;
    store.update_field(field.into())
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() { None } else { Some(value) }
}

/// Parses a price typed by the user. Empty clears the price.
pub fn parse_price(input: &str) -> CoreResult<Option<Decimal>> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }
    let price = Decimal::from_str(input).map_err(|_| CoreError::InvalidPrice(input.to_string()))?;
    if price.is_sign_negative() && !price.is_zero() {
        return Err(CoreError::InvalidPrice(input.to_string()));
    }
    Ok(Some(price))
}

fn edit_field(field: &mut Field, edit: PropertyEdit) -> CoreResult<()> {
    match edit {
        PropertyEdit::Label(label) => field.label = label,
        PropertyEdit::Description(text) => field.description = non_empty(text),
        PropertyEdit::Required(required) => field.required = required,

        PropertyEdit::Placeholder(text) => match &mut field.kind {
            FieldKind::ShortText { placeholder }
            | FieldKind::LongText { placeholder }
            | FieldKind::Number { placeholder }
            | FieldKind::Phone { placeholder }
            | FieldKind::Email { placeholder } => *placeholder = non_empty(text),
            _ => return Err(not_applicable(field, "placeholder")),
        },

        PropertyEdit::Option { index, value } => {
            let options = options_mut(field)?;
            let len = options.len();
            let slot = options
                .get_mut(index)
                .ok_or(CoreError::OptionOutOfRange { index, len })?;
            *slot = value;
        }
        PropertyEdit::AddOption => {
            let options = options_mut(field)?;
            let next = format!("Option {}", options.len() + 1);
            options.push(next);
        }
        PropertyEdit::RemoveOption(index) => {
            let options = options_mut(field)?;
            if index >= options.len() {
                return Err(CoreError::OptionOutOfRange {
                    index,
                    len: options.len(),
                });
            }
            options.remove(index);
        }

        PropertyEdit::Price(input) => {
            let parsed = parse_price(&input)?;
            match &mut field.kind {
                FieldKind::Payment { price } => *price = parsed,
                _ => return Err(not_applicable(field, "price")),
            }
        }
    }
    Ok(())
}

fn options_mut(field: &mut Field) -> CoreResult<&mut Vec<String>> {
    let field_type = field.field_type();
    match &mut field.kind {
        FieldKind::MultipleChoice { options } => Ok(options),
        _ => Err(CoreError::AttributeNotApplicable {
            attribute: "options",
            field_type,
        }),
    }
}

fn not_applicable(field: &Field, attribute: &'static str) -> CoreError {
    CoreError::AttributeNotApplicable {
        attribute,
        field_type: field.field_type(),
    }
}
