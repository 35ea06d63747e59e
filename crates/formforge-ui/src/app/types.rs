use formforge_core::{Config, FieldId, FieldType};

#[derive(Debug, Default)]
pub struct Flags {
    pub config: Config,
    /// Overrides the configured title of the new form
    pub title: Option<String>,
}

/// What the pointer is carrying between press and release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragState {
    /// A field type picked up from the sidebar
    NewField(FieldType),
    /// An existing field being moved within the canvas
    MoveField(FieldId),
}
