//! Application state definitions

use super::forms::LabelsForm;
use super::notification::Notification;
use crate::labels::{expand, ConfigEntry, LabelToken};

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    // Form
    pub form: LabelsForm,

    // Output, recomputed from the form on every change
    pub entries: Vec<ConfigEntry>,

    // Labels panel selection
    pub selected_entry: usize,
    pub selected_token: LabelToken,

    // UI state
    pub notification: Option<Notification>,
}

impl AppState {
    /// Recompute labels from the current form
    pub fn refresh_entries(&mut self) {
        self.entries = expand(&self.form.to_form_state());
        if self.selected_entry >= self.entries.len() {
            self.selected_entry = self.entries.len().saturating_sub(1);
        }
    }

    /// Export actions are only available with output to copy
    pub fn can_export(&self) -> bool {
        !self.entries.is_empty()
    }

    /// Currently selected label token, if any
    pub fn selected_text(&self) -> Option<&str> {
        self.entries
            .get(self.selected_entry)
            .map(|e| e.token(self.selected_token))
    }

    /// Move selection down
    pub fn move_selection_down(&mut self) {
        let max = self.entries.len();
        if max > 0 && self.selected_entry < max - 1 {
            self.selected_entry += 1;
        }
    }

    /// Move selection up
    pub fn move_selection_up(&mut self) {
        if self.selected_entry > 0 {
            self.selected_entry -= 1;
        }
    }

    /// Drop the notification once it has expired
    pub fn clear_expired_notification(&mut self) {
        if self
            .notification
            .as_ref()
            .is_some_and(Notification::is_expired)
        {
            self.notification = None;
        }
    }
}
