//! Preview: the form as a respondent fills it in.
//!
//! ## Learning: Borrowed State, Owned Answers
//!
//! The preview never touches the store. It reads a `FormState` snapshot and
//! keeps the respondent's answers in a separate [`Responses`] value keyed by
//! `FieldId`, so switching back to editing leaves the form exactly as it
//! was. Answers for fields deleted in the meantime are simply never looked
//! up again.

use std::collections::HashMap;

use crate::canvas::FieldPreview;
use crate::field::{Field, FieldId, FieldKind};
use crate::store::FormState;

/// Caption used when the form's submit text is empty.
pub const DEFAULT_SUBMIT_LABEL: &str = "Submit";

/// Shown under a required field left blank on submit.
pub const REQUIRED_MESSAGE: &str = "This field is required";

/// Shown after a successful submit.
pub const CONFIRMATION_HEADLINE: &str = "Thank you for your submission!";
pub const CONFIRMATION_DETAIL: &str = "Your response has been recorded.";

/// Returns true if a respondent can type or pick an answer for the field.
///
/// File uploads and payments are shown but collect nothing in the preview.
pub fn is_answerable(field: &Field) -> bool {
    !matches!(field.kind, FieldKind::FileUpload | FieldKind::Payment { .. })
}

/// Answers entered in the preview.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Responses {
    answers: HashMap<FieldId, String>,

    /// Required fields left blank on the last submit
    missing: Vec<FieldId>,

    submitted: bool,
}

impl Responses {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the answer for a field.
    pub fn answer(&self, id: FieldId) -> Option<&str> {
        self.answers.get(&id).map(String::as_str)
    }

    /// Records an answer. Empty text removes it.
    pub fn set_answer(&mut self, id: FieldId, value: String) {
        if value.is_empty() {
            self.answers.remove(&id);
        } else {
            self.missing.retain(|m| *m != id);
            self.answers.insert(id, value);
        }
    }

    /// Checks required fields and marks the responses submitted if none is
    /// blank. Returns the ids still missing an answer.
    pub fn submit(&mut self, state: &FormState) -> &[FieldId] {
        self.missing = state
            .fields
            .iter()
            .filter(|f| f.required && is_answerable(f) && self.answer(f.id()).is_none())
            .map(Field::id)
            .collect();
        self.submitted = self.missing.is_empty();

        if self.submitted {
            tracing::info!(
                title = %state.title,
                answers = self.answers.len(),
                "Preview submitted"
            );
        }
        &self.missing
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    /// Clears every answer, ready to fill the form again.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// What the preview shows.
#[derive(Debug, Clone, PartialEq)]
pub enum PreviewView {
    Form(PreviewForm),
    Submitted {
        headline: &'static str,
        detail: &'static str,
    },
}

/// The fillable form.
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewForm {
    pub title: String,

    /// Share of answerable fields with an answer, present when the form
    /// shows a progress bar
    pub progress: Option<f32>,

    pub fields: Vec<PreviewItem>,
    pub submit_label: String,
}

/// One field as a respondent sees it.
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewItem {
    pub id: FieldId,
    pub label: String,
    pub required: bool,
    pub description: Option<String>,
    pub input: FieldPreview,
    pub answerable: bool,
    pub answer: Option<String>,
    pub error: Option<&'static str>,
}

/// Renders the snapshot with the given answers.
pub fn preview_view(state: &FormState, responses: &Responses) -> PreviewView {
    if responses.submitted {
        return PreviewView::Submitted {
            headline: CONFIRMATION_HEADLINE,
            detail: CONFIRMATION_DETAIL,
        };
    }

    let fields: Vec<PreviewItem> = state
        .fields
        .iter()
        .map(|field| PreviewItem {
            id: field.id(),
            label: field.label.clone(),
            required: field.required,
            description: field.description.clone().filter(|d| !d.is_empty()),
            input: FieldPreview::of(field),
            answerable: is_answerable(field),
            answer: responses.answer(field.id()).map(str::to_string),
            error: responses
                .missing
                .contains(&field.id())
                .then_some(REQUIRED_MESSAGE),
        })
        .collect();

    let progress = state.settings.show_progress_bar.then(|| {
        let answerable = fields.iter().filter(|f| f.answerable).count();
        let answered = fields
            .iter()
            .filter(|f| f.answerable && f.answer.is_some())
            .count();
        if answerable == 0 {
            0.0
        } else {
            answered as f32 / answerable as f32
        }
    });

    let submit_label = match state.settings.submit_button_text.trim() {
        "" => DEFAULT_SUBMIT_LABEL.to_string(),
        text => text.to_string(),
    };

    PreviewView::Form(PreviewForm {
        title: state.title.clone(),
        progress,
        fields,
        submit_label,
    })
}
