use iced::keyboard;

use formforge_core::{DropPayload, FieldId, PropertyEdit};

#[derive(Debug, Clone)]
pub enum Message {
    // Header
    TitleChanged(String),
    Save,
    PreviewToggled,

    // Sidebar drag source
    DragStarted(DropPayload),
    SidebarReleased(DropPayload),

    // Canvas
    CanvasReleased,
    FieldPressed(FieldId),
    FieldReleased(FieldId),
    DeleteField(FieldId),
    DragCancelled,

    // Properties panel
    PropertyEdited(PropertyEdit),

    // Form settings
    ThemeChanged(String),
    ProgressBarToggled(bool),
    SubmitTextChanged(String),

    // Preview
    PreviewAnswered(FieldId, String),
    PreviewSubmitted,
    PreviewReset,

    // Keyboard
    KeyPressed(keyboard::Key, keyboard::Modifiers),
}
