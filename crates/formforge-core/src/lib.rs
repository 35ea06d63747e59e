//! # Formforge Core
//!
//! Form model, field registry and state management.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                        FormStore                          │
//! │  ┌─────────────┐ ┌─────────────┐ ┌──────────────────────┐ │
//! │  │  FormState  │ │  EventBus   │ │  Snapshot (watch)    │ │
//! │  └─────────────┘ └─────────────┘ └──────────────────────┘ │
//! │         ▲                                                 │
//! │         │ reduce(state, action)                           │
//! └─────────┼─────────────────────────────────────────────────┘
//!           │
//!   ┌───────┴───────┬──────────────────┬─────────────┬─────────────┐
//!   │    Canvas     │ Properties Panel │   Sidebar   │   Preview   │
//!   └───────────────┴──────────────────┴─────────────┴─────────────┘
//!                           │
//!                    Field Registry
//! ```
//!
//! The view-model modules (`canvas`, `preview`, `properties`, `sidebar`)
//! describe what to render and translate user gestures into store actions.
//! They do not depend on any GUI toolkit, so the UI crate only maps them
//! onto widgets.

pub mod canvas;
pub mod config;
pub mod event;
pub mod field;
pub mod preview;
pub mod properties;
pub mod registry;
pub mod settings;
pub mod sidebar;
pub mod store;

pub use canvas::{CanvasItem, CanvasView, DropPayload, FieldPreview};
pub use config::Config;
pub use event::{EventBus, EventHandler, FormEvent};
pub use field::{Field, FieldId, FieldKind, FieldPatch, FieldType};
pub use preview::{PreviewForm, PreviewItem, PreviewView, Responses};
pub use properties::{FieldEditor, PropertiesView, PropertyControl, PropertyEdit};
pub use registry::FieldTypeInfo;
pub use settings::{FormSettings, SettingsPatch};
pub use sidebar::SidebarItem;
pub use store::{Action, FormState, FormStore};

/// Result type for core operations
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur in core operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    #[error("Field not found: {0}")]
    FieldNotFound(FieldId),

    #[error("Field already exists: {0}")]
    DuplicateField(FieldId),

    #[error("Reorder must be a permutation of the current {expected} fields")]
    InvalidReorder { expected: usize },

    #[error("Attribute `{attribute}` does not apply to {field_type} fields")]
    AttributeNotApplicable {
        attribute: &'static str,
        field_type: FieldType,
    },

    #[error("Unknown field type: {0}")]
    UnknownFieldType(String),

    #[error("No field selected")]
    NoSelection,

    #[error("Option {index} is out of range ({len} options)")]
    OptionOutOfRange { index: usize, len: usize },

    #[error("Invalid price: {0}")]
    InvalidPrice(String),
}
