//! Form state store.
//!
//! ## Learning: Reducers and Snapshots
//!
//! Every change goes through [`reduce`], a pure function from the current
//! state and an [`Action`] to the next state. [`FormStore`] owns the current
//! snapshot behind an `Arc`: readers clone the `Arc` and keep an immutable
//! view even after later edits replace it.
//!
//! The store is owned by the UI thread and mutated through `&mut self`, so no
//! locking is involved. Other parts of the program observe it through the
//! event bus or the snapshot channel.

use serde::Serialize;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tokio::sync::{broadcast, watch};

use crate::event::{EventBus, FormEvent};
use crate::field::{Field, FieldId, FieldPatch};
use crate::settings::{FormSettings, SettingsPatch};
use crate::{CoreError, CoreResult};

/// Title given to forms created without one.
pub const DEFAULT_TITLE: &str = "Untitled Form";

/// One immutable snapshot of the form being edited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormState {
    /// Form title shown in the header
    pub title: String,

    /// Fields in display and submission order
    pub fields: Vec<Field>,

    /// Currently selected field, if any. Editor state, not saved.
    #[serde(skip)]
    pub selected: Option<FieldId>,

    /// Form-level settings
    pub settings: FormSettings,

    /// Bumped on every successful action
    #[serde(skip)]
    pub revision: u64,
}

impl FormState {
    /// Creates an empty form.
    pub fn new(title: impl Into<String>, settings: FormSettings) -> Self {
        Self {
            title: title.into(),
            fields: Vec::new(),
            selected: None,
            settings,
            revision: 0,
        }
    }

    /// Returns the field with the given id.
    pub fn field(&self, id: FieldId) -> Option<&Field> {
        self.fields.iter().find(|f| f.id() == id)
    }

    /// Returns the index of the field with the given id.
    pub fn position(&self, id: FieldId) -> Option<usize> {
        self.fields.iter().position(|f| f.id() == id)
    }

    /// Returns the selected field.
    ///
    /// A selection pointing at a field that no longer exists yields `None`.
    pub fn selected_field(&self) -> Option<&Field> {
        self.selected.and_then(|id| self.field(id))
    }

    /// Serializes the form (title, fields, settings) as pretty JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new(DEFAULT_TITLE, FormSettings::default())
    }
}

/// Store actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Append a field and select it
    AddField(Field),
    /// Merge attributes into an existing field
    UpdateField(FieldPatch),
    /// Remove a field
    DeleteField(FieldId),
    /// Replace the field order
    ReorderFields(Vec<FieldId>),
    /// Move the selection pointer
    SelectField(Option<FieldId>),
    /// Merge form-level settings
    UpdateFormSettings(SettingsPatch),
    /// Change the form title
    RenameForm(String),
}

impl Action {
    /// Returns a short name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Action::AddField(_) => "add_field",
            Action::UpdateField(_) => "update_field",
            Action::DeleteField(_) => "delete_field",
            Action::ReorderFields(_) => "reorder_fields",
            Action::SelectField(_) => "select_field",
            Action::UpdateFormSettings(_) => "update_form_settings",
            Action::RenameForm(_) => "rename_form",
        }
    }

    fn event(&self, next: &FormState) -> FormEvent {
        let revision = next.revision;
        match self {
            Action::AddField(field) => FormEvent::FieldAdded {
                id: field.id(),
                revision,
            },
            Action::UpdateField(patch) => FormEvent::FieldUpdated {
                id: patch.id,
                revision,
            },
            Action::DeleteField(id) => FormEvent::FieldDeleted { id: *id, revision },
            Action::ReorderFields(_) => FormEvent::FieldsReordered { revision },
            Action::SelectField(selected) => FormEvent::SelectionChanged {
                selected: *selected,
                revision,
            },
            Action::UpdateFormSettings(_) => FormEvent::SettingsChanged { revision },
            Action::RenameForm(_) => FormEvent::TitleChanged { revision },
        }
    }
}

/// Computes the state that follows `action`.
///
/// Pure: `state` is never modified and an error means no new state.
pub fn reduce(state: &FormState, action: &Action) -> CoreResult<FormState> {
    let mut next = state.clone();

    match action {
        Action::AddField(field) => {
            if state.position(field.id()).is_some() {
                return Err(CoreError::DuplicateField(field.id()));
            }
            next.fields.push(field.clone());
            next.selected = Some(field.id());
        }

        Action::UpdateField(patch) => {
            let index = state
                .position(patch.id)
                .ok_or(CoreError::FieldNotFound(patch.id))?;
            next.fields[index].apply(patch)?;
        }

        Action::DeleteField(id) => {
            let index = state.position(*id).ok_or(CoreError::FieldNotFound(*id))?;
            next.fields.remove(index);
            if next.selected == Some(*id) {
                next.selected = None;
            }
        }

        Action::ReorderFields(order) => {
            next.fields = permute(&state.fields, order)?;
        }

        Action::SelectField(selected) => {
            next.selected = *selected;
        }

        Action::UpdateFormSettings(patch) => {
            next.settings.merge(patch);
        }

        Action::RenameForm(title) => {
            next.title = title.clone();
        }
    }

    next.revision = state.revision + 1;
    Ok(next)
}

/// Rearranges `fields` to follow `order`, which must name every field once.
fn permute(fields: &[Field], order: &[FieldId]) -> CoreResult<Vec<Field>> {
    let invalid = || CoreError::InvalidReorder {
        expected: fields.len(),
    };

    if order.len() != fields.len() {
        return Err(invalid());
    }
    let unique: HashSet<_> = order.iter().collect();
    if unique.len() != order.len() {
        return Err(invalid());
    }

    let mut by_id: HashMap<FieldId, &Field> = fields.iter().map(|f| (f.id(), f)).collect();
    order
        .iter()
        .map(|id| by_id.remove(id).cloned().ok_or_else(invalid))
        .collect()
}

/// The single source of truth for the form being edited.
pub struct FormStore {
    /// Current snapshot
    state: Arc<FormState>,

    /// Change notifications
    event_bus: EventBus,

    /// Latest snapshot for watchers
    snapshots: watch::Sender<Arc<FormState>>,
}

impl FormStore {
    /// Creates a store holding an empty, untitled form.
    pub fn new() -> Self {
        Self::with_state(FormState::default())
    }

    /// Creates a store starting from `state`.
    pub fn with_state(state: FormState) -> Self {
        let state = Arc::new(state);
        let (snapshots, _) = watch::channel(Arc::clone(&state));
        Self {
            state,
            event_bus: EventBus::new(),
            snapshots,
        }
    }

    /// Applies an action, publishing the new snapshot on success.
    pub fn dispatch(&mut self, action: Action) -> CoreResult<()> {
        match reduce(&self.state, &action) {
            Ok(next) => {
                tracing::debug!(
                    action = action.name(),
                    revision = next.revision,
                    fields = next.fields.len(),
                    "Form state updated"
                );
                let event = action.event(&next);
                self.state = Arc::new(next);
                self.snapshots.send_replace(Arc::clone(&self.state));
                self.event_bus.emit(event);
                Ok(())
            }
            Err(err) => {
                tracing::warn!(action = action.name(), "Rejected form action: {}", err);
                Err(err)
            }
        }
    }

    // ==================== Field Operations ====================

    /// Appends a field and selects it.
    pub fn add_field(&mut self, field: Field) -> CoreResult<FieldId> {
        let id = field.id();
        self.dispatch(Action::AddField(field))?;
        Ok(id)
    }

    /// Merges the listed attributes into the matching field.
    pub fn update_field(&mut self, patch: FieldPatch) -> CoreResult<()> {
        self.dispatch(Action::UpdateField(patch))
    }

    /// Removes a field, clearing the selection if it pointed there.
    pub fn delete_field(&mut self, id: FieldId) -> CoreResult<()> {
        self.dispatch(Action::DeleteField(id))
    }

    /// Replaces the field order. `order` must be a permutation of the
    /// current ids.
    pub fn reorder_fields(&mut self, order: Vec<FieldId>) -> CoreResult<()> {
        self.dispatch(Action::ReorderFields(order))
    }

    /// Moves one field to `to_index`, clamped to the end of the list.
    pub fn move_field(&mut self, id: FieldId, to_index: usize) -> CoreResult<()> {
        let from = self.state.position(id).ok_or(CoreError::FieldNotFound(id))?;
        let mut order: Vec<FieldId> = self.state.fields.iter().map(Field::id).collect();
        order.remove(from);
        order.insert(to_index.min(order.len()), id);
        self.reorder_fields(order)
    }

    /// Sets the selection pointer. Existence is not checked.
    pub fn select_field(&mut self, id: Option<FieldId>) -> CoreResult<()> {
        if let Some(id) = id {
            if self.state.position(id).is_none() {
                tracing::debug!("Selecting unknown field {}", id);
            }
        }
        self.dispatch(Action::SelectField(id))
    }

    // ==================== Form Operations ====================

    /// Shallow-merges form-level settings.
    pub fn update_form_settings(&mut self, patch: SettingsPatch) -> CoreResult<()> {
        self.dispatch(Action::UpdateFormSettings(patch))
    }

    /// Changes the form title.
    pub fn rename_form(&mut self, title: impl Into<String>) -> CoreResult<()> {
        self.dispatch(Action::RenameForm(title.into()))
    }

    // ==================== Accessors ====================

    /// Returns the current snapshot.
    pub fn snapshot(&self) -> Arc<FormState> {
        Arc::clone(&self.state)
    }

    /// Returns the current state by reference.
    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Returns the fields in order.
    pub fn fields(&self) -> &[Field] {
        &self.state.fields
    }

    /// Returns a field by id.
    pub fn field(&self, id: FieldId) -> CoreResult<&Field> {
        self.state.field(id).ok_or(CoreError::FieldNotFound(id))
    }

    /// Returns the selected field, if the selection points at one.
    pub fn selected_field(&self) -> Option<&Field> {
        self.state.selected_field()
    }

    // ==================== Subscriptions ====================

    /// Subscribes to change events.
    pub fn subscribe(&self) -> broadcast::Receiver<FormEvent> {
        self.event_bus.subscribe()
    }

    /// Subscribes to snapshots. The receiver always holds the latest one.
    pub fn watch(&self) -> watch::Receiver<Arc<FormState>> {
        self.snapshots.subscribe()
    }
}

impl Default for FormStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::FieldType;
    use crate::registry::new_field;
    use proptest::prelude::*;

    fn store_with(types: &[FieldType]) -> (FormStore, Vec<FieldId>) {
        let mut store = FormStore::new();
        let ids = types
            .iter()
            .map(|t| store.add_field(new_field(*t)).unwrap())
            .collect();
        (store, ids)
    }

    fn ids(store: &FormStore) -> Vec<FieldId> {
        store.fields().iter().map(Field::id).collect()
    }

    #[test]
    fn test_short_text_scenario() {
        let mut store = FormStore::new();
        let id = store.add_field(new_field(FieldType::ShortText)).unwrap();

        assert_eq!(store.fields().len(), 1);
        let field = store.field(id).unwrap();
        assert_eq!(field.field_type(), FieldType::ShortText);
        assert_eq!(field.label, "Short Text");
        assert!(!field.required);

        store.select_field(Some(id)).unwrap();
        store
            .update_field(FieldPatch::new(id).with_required(true))
            .unwrap();

        let field = store.field(id).unwrap();
        assert!(field.required);
        assert_eq!(field.label, "Short Text");
    }

    #[test]
    fn test_add_selects_new_field() {
        let (store, ids) = store_with(&[FieldType::Email, FieldType::Date]);
        assert_eq!(store.state().selected, Some(ids[1]));
        assert_eq!(store.selected_field().unwrap().field_type(), FieldType::Date);
    }

    #[test]
    fn test_add_rejects_duplicate_id() {
        let mut store = FormStore::new();
        let field = new_field(FieldType::Phone);
        store.add_field(field.clone()).unwrap();

        assert_eq!(
            store.add_field(field.clone()),
            Err(CoreError::DuplicateField(field.id()))
        );
        assert_eq!(store.fields().len(), 1);
    }

    #[test]
    fn test_unknown_id_is_an_error() {
        let (mut store, _) = store_with(&[FieldType::Number]);
        let before = store.snapshot();
        let ghost = FieldId::new();

        assert_eq!(
            store.update_field(FieldPatch::new(ghost).with_label("x")),
            Err(CoreError::FieldNotFound(ghost))
        );
        assert_eq!(store.delete_field(ghost), Err(CoreError::FieldNotFound(ghost)));
        assert_eq!(*store.snapshot(), *before);
    }

    #[test]
    fn test_delete_selected_clears_selection() {
        let (mut store, ids) = store_with(&[FieldType::ShortText, FieldType::LongText]);
        store.select_field(Some(ids[0])).unwrap();
        store.delete_field(ids[0]).unwrap();

        assert_eq!(store.state().selected, None);
        assert_eq!(self::ids(&store), vec![ids[1]]);
    }

    #[test]
    fn test_delete_other_keeps_selection() {
        let (mut store, ids) = store_with(&[FieldType::ShortText, FieldType::LongText]);
        store.delete_field(ids[0]).unwrap();
        assert_eq!(store.state().selected, Some(ids[1]));
    }

    #[test]
    fn test_reorder_requires_permutation() {
        let (mut store, ids) =
            store_with(&[FieldType::ShortText, FieldType::Email, FieldType::Date]);

        store.reorder_fields(vec![ids[2], ids[0], ids[1]]).unwrap();
        assert_eq!(self::ids(&store), vec![ids[2], ids[0], ids[1]]);

        let err = CoreError::InvalidReorder { expected: 3 };
        assert_eq!(store.reorder_fields(vec![ids[0], ids[1]]), Err(err.clone()));
        assert_eq!(
            store.reorder_fields(vec![ids[0], ids[0], ids[1]]),
            Err(err.clone())
        );
        assert_eq!(
            store.reorder_fields(vec![ids[0], ids[1], FieldId::new()]),
            Err(err)
        );
        assert_eq!(self::ids(&store), vec![ids[2], ids[0], ids[1]]);
    }

    #[test]
    fn test_move_field_clamps_index() {
        let (mut store, ids) =
            store_with(&[FieldType::ShortText, FieldType::Email, FieldType::Date]);

        store.move_field(ids[0], 99).unwrap();
        assert_eq!(self::ids(&store), vec![ids[1], ids[2], ids[0]]);

        store.move_field(ids[0], 0).unwrap();
        assert_eq!(self::ids(&store), vec![ids[0], ids[1], ids[2]]);

        store.move_field(ids[2], 1).unwrap();
        assert_eq!(self::ids(&store), vec![ids[0], ids[2], ids[1]]);
    }

    #[test]
    fn test_select_does_not_validate() {
        let (mut store, _) = store_with(&[FieldType::Date]);
        let ghost = FieldId::new();

        store.select_field(Some(ghost)).unwrap();
        assert_eq!(store.state().selected, Some(ghost));
        assert!(store.selected_field().is_none());

        store.select_field(None).unwrap();
        assert_eq!(store.state().selected, None);
    }

    #[test]
    fn test_settings_and_title() {
        let mut store = FormStore::new();
        assert_eq!(store.state().title, DEFAULT_TITLE);

        store
            .update_form_settings(SettingsPatch::show_progress_bar(false))
            .unwrap();
        store.rename_form("Customer Feedback").unwrap();

        let state = store.state();
        assert!(!state.settings.show_progress_bar);
        assert_eq!(state.settings.submit_button_text, "Submit");
        assert_eq!(state.title, "Customer Feedback");
    }

    #[test]
    fn test_snapshots_are_immutable() {
        let mut store = FormStore::new();
        let before = store.snapshot();
        store.add_field(new_field(FieldType::Email)).unwrap();

        assert!(before.fields.is_empty());
        assert_eq!(before.revision, 0);
        assert_eq!(store.state().revision, 1);
    }

    #[test]
    fn test_failed_action_keeps_revision() {
        let mut store = FormStore::new();
        let _ = store.delete_field(FieldId::new());
        assert_eq!(store.state().revision, 0);
    }

    #[test]
    fn test_watch_sees_latest_snapshot() {
        let mut store = FormStore::new();
        let mut rx = store.watch();

        store.add_field(new_field(FieldType::Number)).unwrap();
        store.rename_form("Survey").unwrap();

        assert!(rx.has_changed().unwrap());
        let latest = rx.borrow_and_update().clone();
        assert_eq!(latest.revision, 2);
        assert_eq!(latest.title, "Survey");
    }

    #[tokio::test]
    async fn test_events_follow_actions() {
        let mut store = FormStore::new();
        let mut rx = store.subscribe();

        let id = store.add_field(new_field(FieldType::Payment)).unwrap();
        store.delete_field(id).unwrap();

        assert_eq!(
            rx.recv().await.unwrap(),
            FormEvent::FieldAdded { id, revision: 1 }
        );
        assert_eq!(
            rx.recv().await.unwrap(),
            FormEvent::FieldDeleted { id, revision: 2 }
        );
    }

    #[test]
    fn test_to_json_skips_editor_state() {
        let (store, _) = store_with(&[FieldType::MultipleChoice]);
        let json: serde_json::Value = serde_json::from_str(&store.state().to_json().unwrap()).unwrap();

        assert_eq!(json["title"], DEFAULT_TITLE);
        assert_eq!(json["fields"][0]["options"][2], "Option 3");
        assert!(json.get("revision").is_none());
        assert!(json.get("selected").is_none());
    }

    fn field_types() -> impl Strategy<Value = Vec<FieldType>> {
        prop::collection::vec(prop::sample::select(FieldType::ALL.to_vec()), 0..16)
    }

    proptest! {
        #[test]
        fn prop_add_preserves_count_and_order(types in field_types()) {
            let (store, ids) = store_with(&types);
            prop_assert_eq!(store.fields().len(), types.len());
            prop_assert_eq!(self::ids(&store), ids);
            let stored: Vec<_> = store.fields().iter().map(Field::field_type).collect();
            prop_assert_eq!(stored, types);
        }

        #[test]
        fn prop_update_touches_only_target(
            types in prop::collection::vec(prop::sample::select(FieldType::ALL.to_vec()), 1..12),
            pick in any::<prop::sample::Index>(),
            label in "[a-zA-Z ]{0,12}",
        ) {
            let (mut store, ids) = store_with(&types);
            let target = ids[pick.index(ids.len())];
            let before = store.snapshot();

            store.update_field(FieldPatch::new(target).with_label(label.clone())).unwrap();

            for (old, new) in before.fields.iter().zip(store.fields()) {
                if old.id() == target {
                    let mut expected = old.clone();
                    expected.label = label.clone();
                    prop_assert_eq!(new, &expected);
                } else {
                    prop_assert_eq!(new, old);
                }
            }
        }

        #[test]
        fn prop_delete_removes_exactly_one(
            types in prop::collection::vec(prop::sample::select(FieldType::ALL.to_vec()), 1..12),
            pick in any::<prop::sample::Index>(),
            select_target in any::<bool>(),
        ) {
            let (mut store, ids) = store_with(&types);
            let target = ids[pick.index(ids.len())];
            if select_target {
                store.select_field(Some(target)).unwrap();
            }
            let selected_before = store.state().selected;

            store.delete_field(target).unwrap();

            let expected: Vec<_> = ids.iter().copied().filter(|id| *id != target).collect();
            prop_assert_eq!(self::ids(&store), expected);
            if selected_before == Some(target) {
                prop_assert_eq!(store.state().selected, None);
            } else {
                prop_assert_eq!(store.state().selected, selected_before);
            }
        }

        #[test]
        fn prop_add_then_delete_restores_list(types in field_types(), extra in prop::sample::select(FieldType::ALL.to_vec())) {
            let (mut store, _) = store_with(&types);
            let before = store.fields().to_vec();

            let id = store.add_field(new_field(extra)).unwrap();
            store.delete_field(id).unwrap();

            prop_assert_eq!(store.fields(), before.as_slice());
        }
    }
}
