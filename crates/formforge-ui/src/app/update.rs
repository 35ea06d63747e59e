use iced::{keyboard, Task};

use formforge_core::canvas::drop_on_canvas;
use formforge_core::properties::apply_property_edit;
use formforge_core::{CoreResult, DropPayload, FieldId, PropertyEdit, Responses, SettingsPatch};

use super::{App, DragState, Message};

impl App {
    pub fn update(&mut self, message: Message) -> Task<Message> {
        let result = match message {
            Message::TitleChanged(title) => self.store.rename_form(title),

            Message::Save => {
                let _ = self.save();
                Ok(())
            }

            Message::PreviewToggled => {
                self.drag = None;
                self.preview = match self.preview.take() {
                    Some(_) => {
                        self.status_message = "Editing".to_string();
                        None
                    }
                    None => {
                        self.status_message = "Previewing | Answers are not saved".to_string();
                        Some(Responses::new())
                    }
                };
                Ok(())
            }

            Message::DragStarted(payload) => {
                self.drag = Some(DragState::NewField(payload.field_type));
                Ok(())
            }

            // Press and release on the same sidebar item is a click
            Message::SidebarReleased(payload) => match self.drag.take() {
                Some(DragState::NewField(dragged)) if dragged == payload.field_type => {
                    self.drop_field(payload)
                }
                _ => Ok(()),
            },

            Message::CanvasReleased => match self.drag.take() {
                Some(DragState::NewField(field_type)) => {
                    self.drop_field(DropPayload::new(field_type))
                }
                _ => Ok(()),
            },

            Message::FieldPressed(id) => {
                self.drag = Some(DragState::MoveField(id));
                self.select(Some(id))
            }

            Message::FieldReleased(target) => match self.drag.take() {
                Some(DragState::NewField(field_type)) => {
                    self.drop_field(DropPayload::new(field_type))
                }
                Some(DragState::MoveField(source)) if source != target => {
                    self.move_onto(source, target)
                }
                _ => Ok(()),
            },

            Message::DeleteField(id) => self.delete(id),

            Message::DragCancelled => {
                self.drag = None;
                Ok(())
            }

            Message::PropertyEdited(edit) => {
                if let PropertyEdit::Price(input) = &edit {
                    self.price_draft = Some(input.clone());
                }
                apply_property_edit(&mut self.store, edit)
            }

            Message::ThemeChanged(theme) => {
                self.store.update_form_settings(SettingsPatch::theme(theme))
            }
            Message::ProgressBarToggled(show) => self
                .store
                .update_form_settings(SettingsPatch::show_progress_bar(show)),
            Message::SubmitTextChanged(text) => self
                .store
                .update_form_settings(SettingsPatch::submit_button_text(text)),

            Message::PreviewAnswered(id, value) => {
                if let Some(responses) = &mut self.preview {
                    responses.set_answer(id, value);
                }
                Ok(())
            }
            Message::PreviewSubmitted => {
                if let Some(responses) = &mut self.preview {
                    let missing = responses.submit(self.store.state()).len();
                    self.status_message = match missing {
                        0 => "Response recorded".to_string(),
                        1 => "1 required field is empty".to_string(),
                        n => format!("{} required fields are empty", n),
                    };
                }
                Ok(())
            }
            Message::PreviewReset => {
                if let Some(responses) = &mut self.preview {
                    responses.reset();
                }
                Ok(())
            }

            Message::KeyPressed(key, modifiers) => self.handle_key(key, modifiers),
        };

        if let Err(err) = result {
            tracing::warn!("{}", err);
            self.status_message = err.to_string();
        }

        Task::none()
    }

    fn drop_field(&mut self, payload: DropPayload) -> CoreResult<()> {
        drop_on_canvas(&mut self.store, payload)?;
        self.price_draft = None;
        self.status_message = format!("Added {} field", payload.field_type.display_name());
        Ok(())
    }

    fn select(&mut self, id: Option<FieldId>) -> CoreResult<()> {
        if self.store.state().selected == id {
            return Ok(());
        }
        self.price_draft = None;
        self.store.select_field(id)
    }

    fn delete(&mut self, id: FieldId) -> CoreResult<()> {
        self.store.delete_field(id)?;
        self.price_draft = None;
        self.status_message = "Field deleted".to_string();
        Ok(())
    }

    /// Drops `source` at the position currently held by `target`.
    fn move_onto(&mut self, source: FieldId, target: FieldId) -> CoreResult<()> {
        let index = self.store.state().position(target).unwrap_or(usize::MAX);
        self.store.move_field(source, index)
    }

    /// Logs the form as JSON and returns it.
    fn save(&mut self) -> Option<String> {
        let state = self.store.state();
        match state.to_json() {
            Ok(json) => {
                tracing::info!(
                    title = %state.title,
                    fields = state.fields.len(),
                    "Saving form\n{}",
                    json
                );
                self.status_message = format!(
                    "Saved \"{}\" ({} fields)",
                    state.title,
                    state.fields.len()
                );
                Some(json)
            }
            Err(err) => {
                tracing::error!("Failed to serialize form: {}", err);
                self.status_message = format!("Save failed: {}", err);
                None
            }
        }
    }

    fn handle_key(
        &mut self,
        key: keyboard::Key,
        modifiers: keyboard::Modifiers,
    ) -> CoreResult<()> {
        use keyboard::key::Named;

        match key.as_ref() {
            keyboard::Key::Named(Named::Delete | Named::Backspace) if self.preview.is_none() => {
                match self.store.selected_field().map(|f| f.id()) {
                    Some(id) => self.delete(id),
                    None => Ok(()),
                }
            }
            keyboard::Key::Named(Named::Escape) => {
                self.drag = None;
                self.select(None)
            }
            keyboard::Key::Character("s") if modifiers.command() => {
                let _ = self.save();
                Ok(())
            }
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Flags;
    use formforge_core::{FieldType, FormStore};

    fn app() -> App {
        App::new(Flags::default()).0
    }

    fn drag_type(app: &mut App, field_type: FieldType) {
        let _ = app.update(Message::DragStarted(DropPayload::new(field_type)));
    }

    fn field_ids(store: &FormStore) -> Vec<FieldId> {
        store.fields().iter().map(|f| f.id()).collect()
    }

    #[test]
    fn test_drop_on_canvas_adds_field() {
        let mut app = app();
        drag_type(&mut app, FieldType::Email);
        let _ = app.update(Message::CanvasReleased);

        assert_eq!(app.store.fields().len(), 1);
        assert_eq!(app.store.fields()[0].field_type(), FieldType::Email);
        assert!(app.drag.is_none());
        assert_eq!(app.status_message, "Added Email field");
    }

    #[test]
    fn test_click_on_sidebar_adds_field() {
        let mut app = app();
        let payload = DropPayload::new(FieldType::Date);
        let _ = app.update(Message::DragStarted(payload));
        let _ = app.update(Message::SidebarReleased(payload));

        assert_eq!(app.store.fields().len(), 1);
    }

    #[test]
    fn test_cancelled_drag_adds_nothing() {
        let mut app = app();
        drag_type(&mut app, FieldType::Phone);
        let _ = app.update(Message::DragCancelled);
        let _ = app.update(Message::CanvasReleased);

        assert!(app.store.fields().is_empty());
    }

    #[test]
    fn test_release_on_other_sidebar_item_adds_nothing() {
        let mut app = app();
        drag_type(&mut app, FieldType::Phone);
        let _ = app.update(Message::SidebarReleased(DropPayload::new(FieldType::Email)));

        assert!(app.store.fields().is_empty());
        assert!(app.drag.is_none());
    }

    #[test]
    fn test_drag_field_onto_another_reorders() {
        let mut app = app();
        for field_type in [FieldType::ShortText, FieldType::Number, FieldType::Date] {
            drag_type(&mut app, field_type);
            let _ = app.update(Message::CanvasReleased);
        }
        let ids = field_ids(&app.store);

        let _ = app.update(Message::FieldPressed(ids[2]));
        let _ = app.update(Message::FieldReleased(ids[0]));

        assert_eq!(field_ids(&app.store), vec![ids[2], ids[0], ids[1]]);
        assert_eq!(app.store.state().selected, Some(ids[2]));
    }

    #[test]
    fn test_click_on_field_selects_without_moving() {
        let mut app = app();
        for field_type in [FieldType::ShortText, FieldType::Number] {
            drag_type(&mut app, field_type);
            let _ = app.update(Message::CanvasReleased);
        }
        let ids = field_ids(&app.store);

        let _ = app.update(Message::FieldPressed(ids[0]));
        let _ = app.update(Message::FieldReleased(ids[0]));

        assert_eq!(field_ids(&app.store), ids);
        assert_eq!(app.store.state().selected, Some(ids[0]));
    }

    #[test]
    fn test_property_errors_reach_status_bar() {
        let mut app = app();
        drag_type(&mut app, FieldType::Payment);
        let _ = app.update(Message::CanvasReleased);

        let _ = app.update(Message::PropertyEdited(PropertyEdit::Price("1.2.3".to_string())));
        assert_eq!(app.status_message, "Invalid price: 1.2.3");
        assert_eq!(app.price_draft.as_deref(), Some("1.2.3"));
        assert_eq!(app.store.fields()[0].price(), None);
    }

    #[test]
    fn test_delete_field_clears_selection() {
        let mut app = app();
        drag_type(&mut app, FieldType::LongText);
        let _ = app.update(Message::CanvasReleased);
        let id = app.store.fields()[0].id();

        let _ = app.update(Message::DeleteField(id));

        assert!(app.store.fields().is_empty());
        assert_eq!(app.store.state().selected, None);
    }

    #[test]
    fn test_title_and_settings_messages() {
        let mut app = app();
        let _ = app.update(Message::TitleChanged("Customer Feedback Form".to_string()));
        let _ = app.update(Message::SubmitTextChanged("Send".to_string()));
        let _ = app.update(Message::ProgressBarToggled(false));

        let state = app.store.state();
        assert_eq!(state.title, "Customer Feedback Form");
        assert_eq!(state.settings.submit_button_text, "Send");
        assert!(!state.settings.show_progress_bar);
        assert_eq!(app.title(), "Customer Feedback Form - Formforge");
    }

    #[test]
    fn test_flags_title_overrides_config() {
        let flags = Flags {
            title: Some("Event Signup".to_string()),
            ..Default::default()
        };
        let (app, _) = App::new(flags);
        assert_eq!(app.store.state().title, "Event Signup");
    }

    #[test]
    fn test_save_returns_form_json() {
        let mut app = app();
        let _ = app.update(Message::TitleChanged("Event Signup".to_string()));
        drag_type(&mut app, FieldType::MultipleChoice);
        let _ = app.update(Message::CanvasReleased);

        let json = app.save().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["title"], "Event Signup");
        assert_eq!(value["fields"][0]["type"], "multiple_choice");
        assert_eq!(value["settings"]["submit_button_text"], "Submit");
        assert_eq!(app.status_message, "Saved \"Event Signup\" (1 fields)");
    }

    #[test]
    fn test_preview_submit_flow() {
        let mut app = app();
        drag_type(&mut app, FieldType::ShortText);
        let _ = app.update(Message::CanvasReleased);
        let _ = app.update(Message::PropertyEdited(PropertyEdit::Required(true)));
        let id = app.store.fields()[0].id();

        let _ = app.update(Message::PreviewToggled);
        let _ = app.update(Message::PreviewSubmitted);
        assert_eq!(app.status_message, "1 required field is empty");

        let _ = app.update(Message::PreviewAnswered(id, "Ada".to_string()));
        let _ = app.update(Message::PreviewSubmitted);
        assert_eq!(app.status_message, "Response recorded");
        assert!(app.preview.as_ref().unwrap().is_submitted());

        let _ = app.update(Message::PreviewReset);
        assert!(!app.preview.as_ref().unwrap().is_submitted());

        let _ = app.update(Message::PreviewToggled);
        assert!(app.preview.is_none());
        assert_eq!(app.store.fields().len(), 1);
    }

    #[test]
    fn test_delete_key_ignored_while_previewing() {
        let mut app = app();
        drag_type(&mut app, FieldType::Email);
        let _ = app.update(Message::CanvasReleased);
        let _ = app.update(Message::PreviewToggled);

        let _ = app.update(Message::KeyPressed(
            keyboard::Key::Named(keyboard::key::Named::Delete),
            keyboard::Modifiers::default(),
        ));

        assert_eq!(app.store.fields().len(), 1);
    }
}
