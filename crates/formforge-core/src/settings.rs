//! Form-level settings.

use serde::{Deserialize, Serialize};

/// Settings that apply to the whole form rather than one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormSettings {
    /// Theme name applied to the published form
    pub theme: String,

    /// Show a progress bar while filling in the form
    pub show_progress_bar: bool,

    /// Caption of the submit button
    pub submit_button_text: String,
}

impl Default for FormSettings {
    fn default() -> Self {
        Self {
            theme: "default".to_string(),
            show_progress_bar: true,
            submit_button_text: "Submit".to_string(),
        }
    }
}

impl FormSettings {
    /// Shallow-merges the listed settings.
    pub fn merge(&mut self, patch: &SettingsPatch) {
        if let Some(theme) = &patch.theme {
            self.theme = theme.clone();
        }
        if let Some(show) = patch.show_progress_bar {
            self.show_progress_bar = show;
        }
        if let Some(text) = &patch.submit_button_text {
            self.submit_button_text = text.clone();
        }
    }
}

/// A partial update for [`FormSettings`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsPatch {
    pub theme: Option<String>,
    pub show_progress_bar: Option<bool>,
    pub submit_button_text: Option<String>,
}

impl SettingsPatch {
    pub fn theme(theme: impl Into<String>) -> Self {
        Self {
            theme: Some(theme.into()),
            ..Default::default()
        }
    }

    pub fn show_progress_bar(show: bool) -> Self {
        Self {
            show_progress_bar: Some(show),
            ..Default::default()
        }
    }

    pub fn submit_button_text(text: impl Into<String>) -> Self {
        Self {
            submit_button_text: Some(text.into()),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = FormSettings::default();
        assert_eq!(settings.theme, "default");
        assert!(settings.show_progress_bar);
        assert_eq!(settings.submit_button_text, "Submit");
    }

    #[test]
    fn test_merge_is_shallow() {
        let mut settings = FormSettings::default();
        settings.merge(&SettingsPatch::submit_button_text("Send"));

        assert_eq!(settings.submit_button_text, "Send");
        assert_eq!(settings.theme, "default");
        assert!(settings.show_progress_bar);
    }
}
