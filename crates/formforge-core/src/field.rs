//! Field definitions.
//!
//! ## Learning: Tagged Unions
//!
//! Each field type carries different attributes: only text-like fields have a
//! placeholder, only multiple choice has options, only payment has a price.
//! `FieldKind` encodes that in the type system, so "a price on an email
//! field" cannot be represented and every renderer must `match` all nine
//! variants.
//!
//! `FieldId` is a newtype wrapper around `Uuid`, like every other id in the
//! crate: it can't be confused with a plain string.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::{CoreError, CoreResult};

/// Unique identifier for a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FieldId(Uuid);

impl FieldId {
    /// Creates a new unique field ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for FieldId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The closed set of supported field types, in registry order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    ShortText,
    LongText,
    MultipleChoice,
    Number,
    Date,
    FileUpload,
    Phone,
    Email,
    Payment,
}

impl FieldType {
    /// Every field type, in the order the sidebar lists them.
    pub const ALL: [FieldType; 9] = [
        FieldType::ShortText,
        FieldType::LongText,
        FieldType::MultipleChoice,
        FieldType::Number,
        FieldType::Date,
        FieldType::FileUpload,
        FieldType::Phone,
        FieldType::Email,
        FieldType::Payment,
    ];

    /// Returns the stable string identifier (`"short_text"`, ...).
    pub const fn id(&self) -> &'static str {
        match self {
            FieldType::ShortText => "short_text",
            FieldType::LongText => "long_text",
            FieldType::MultipleChoice => "multiple_choice",
            FieldType::Number => "number",
            FieldType::Date => "date",
            FieldType::FileUpload => "file_upload",
            FieldType::Phone => "phone",
            FieldType::Email => "email",
            FieldType::Payment => "payment",
        }
    }

    /// Returns the human-readable name. Also the default label.
    pub const fn display_name(&self) -> &'static str {
        match self {
            FieldType::ShortText => "Short Text",
            FieldType::LongText => "Long Text",
            FieldType::MultipleChoice => "Multiple Choice",
            FieldType::Number => "Number",
            FieldType::Date => "Date",
            FieldType::FileUpload => "File Upload",
            FieldType::Phone => "Phone",
            FieldType::Email => "Email",
            FieldType::Payment => "Payment",
        }
    }

    /// Returns true for types that accept a placeholder.
    pub fn is_text_like(&self) -> bool {
        matches!(
            self,
            FieldType::ShortText
                | FieldType::LongText
                | FieldType::Number
                | FieldType::Phone
                | FieldType::Email
        )
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for FieldType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldType::ALL
            .into_iter()
            .find(|t| t.id() == s)
            .ok_or_else(|| CoreError::UnknownFieldType(s.to_string()))
    }
}

/// Type-specific attributes of a field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FieldKind {
    ShortText {
        #[serde(default)]
        placeholder: Option<String>,
    },
    LongText {
        #[serde(default)]
        placeholder: Option<String>,
    },
    MultipleChoice {
        #[serde(default)]
        options: Vec<String>,
    },
    Number {
        #[serde(default)]
        placeholder: Option<String>,
    },
    Date,
    FileUpload,
    Phone {
        #[serde(default)]
        placeholder: Option<String>,
    },
    Email {
        #[serde(default)]
        placeholder: Option<String>,
    },
    Payment {
        #[serde(default)]
        price: Option<Decimal>,
    },
}

impl FieldKind {
    /// Returns the type tag of this kind.
    pub fn field_type(&self) -> FieldType {
        match self {
            FieldKind::ShortText { .. } => FieldType::ShortText,
            FieldKind::LongText { .. } => FieldType::LongText,
            FieldKind::MultipleChoice { .. } => FieldType::MultipleChoice,
            FieldKind::Number { .. } => FieldType::Number,
            FieldKind::Date => FieldType::Date,
            FieldKind::FileUpload => FieldType::FileUpload,
            FieldKind::Phone { .. } => FieldType::Phone,
            FieldKind::Email { .. } => FieldType::Email,
            FieldKind::Payment { .. } => FieldType::Payment,
        }
    }

    fn placeholder_mut(&mut self) -> Option<&mut Option<String>> {
        match self {
            FieldKind::ShortText { placeholder }
            | FieldKind::LongText { placeholder }
            | FieldKind::Number { placeholder }
            | FieldKind::Phone { placeholder }
            | FieldKind::Email { placeholder } => Some(placeholder),
            _ => None,
        }
    }
}

/// One input definition within a form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    id: FieldId,

    /// Display text
    pub label: String,

    /// Whether an answer is mandatory
    pub required: bool,

    /// Help text shown under the label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Type tag and type-specific attributes
    #[serde(flatten)]
    pub kind: FieldKind,
}

impl Field {
    /// Creates a field with the given id; not required, no description.
    pub fn new(id: FieldId, label: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            id,
            label: label.into(),
            required: false,
            description: None,
            kind,
        }
    }

    /// Returns the field's id.
    pub fn id(&self) -> FieldId {
        self.id
    }

    /// Returns the field's type tag.
    pub fn field_type(&self) -> FieldType {
        self.kind.field_type()
    }

    /// Returns the placeholder of a text-like field.
    pub fn placeholder(&self) -> Option<&str> {
        match &self.kind {
            FieldKind::ShortText { placeholder }
            | FieldKind::LongText { placeholder }
            | FieldKind::Number { placeholder }
            | FieldKind::Phone { placeholder }
            | FieldKind::Email { placeholder } => placeholder.as_deref(),
            _ => None,
        }
    }

    /// Returns the options of a multiple choice field.
    pub fn options(&self) -> Option<&[String]> {
        match &self.kind {
            FieldKind::MultipleChoice { options } => Some(options),
            _ => None,
        }
    }

    /// Returns the price of a payment field, if one is set.
    pub fn price(&self) -> Option<Decimal> {
        match &self.kind {
            FieldKind::Payment { price } => *price,
            _ => None,
        }
    }

    /// Merges the attributes listed in `patch` into this field.
    ///
    /// The patch is checked before anything is written, so on error the
    /// field is left untouched. The patch id is not compared here; the store
    /// does the lookup.
    pub fn apply(&mut self, patch: &FieldPatch) -> CoreResult<()> {
        let field_type = self.field_type();
        let not_applicable = |attribute| CoreError::AttributeNotApplicable {
            attribute,
            field_type,
        };

        if patch.placeholder.is_some() && !field_type.is_text_like() {
            return Err(not_applicable("placeholder"));
        }
        if patch.options.is_some() && field_type != FieldType::MultipleChoice {
            return Err(not_applicable("options"));
        }
        if let Some(price) = &patch.price {
            if field_type != FieldType::Payment {
                return Err(not_applicable("price"));
            }
            if let Some(p) = price {
                if p.is_sign_negative() && !p.is_zero() {
                    return Err(CoreError::InvalidPrice(p.to_string()));
                }
            }
        }

        if let Some(label) = &patch.label {
            self.label = label.clone();
        }
        if let Some(required) = patch.required {
            self.required = required;
        }
        if let Some(description) = &patch.description {
            self.description = description.clone();
        }
        if let (Some(value), Some(slot)) = (&patch.placeholder, self.kind.placeholder_mut()) {
            *slot = value.clone();
        }
        match (&mut self.kind, &patch.options, &patch.price) {
            (FieldKind::MultipleChoice { options }, Some(new), _) => *options = new.clone(),
            (FieldKind::Payment { price }, _, Some(new)) => *price = *new,
            _ => {}
        }

        Ok(())
    }
}

/// A partial update for one field.
///
/// `None` means "leave unchanged". For optional attributes the inner
/// `Option` is the new value, so `Some(None)` clears it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPatch {
    pub id: FieldId,
    pub label: Option<String>,
    pub required: Option<bool>,
    pub description: Option<Option<String>>,
    pub placeholder: Option<Option<String>>,
    pub options: Option<Vec<String>>,
    pub price: Option<Option<Decimal>>,
}

impl FieldPatch {
    /// Creates an empty patch targeting `id`.
    pub fn new(id: FieldId) -> Self {
        Self {
            id,
            label: None,
            required: None,
            description: None,
            placeholder: None,
            options: None,
            price: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_required(mut self, required: bool) -> Self {
        self.required = Some(required);
        self
    }

    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = Some(description);
        self
    }

    pub fn with_placeholder(mut self, placeholder: Option<String>) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    pub fn with_options(mut self, options: Vec<String>) -> Self {
        self.options = Some(options);
        self
    }

    pub fn with_price(mut self, price: Option<Decimal>) -> Self {
        self.price = Some(price);
        self
    }
}

/// A full record becomes a patch listing every attribute that applies to
/// its type.
impl From<Field> for FieldPatch {
    fn from(field: Field) -> Self {
        let patch = FieldPatch::new(field.id)
            .with_label(field.label)
            .with_required(field.required)
            .with_description(field.description);

        match field.kind {
            FieldKind::ShortText { placeholder }
            | FieldKind::LongText { placeholder }
            | FieldKind::Number { placeholder }
            | FieldKind::Phone { placeholder }
            | FieldKind::Email { placeholder } => patch.with_placeholder(placeholder),
            FieldKind::MultipleChoice { options } => patch.with_options(options),
            FieldKind::Payment { price } => patch.with_price(price),
            FieldKind::Date | FieldKind::FileUpload => patch,
        }
    }
}
