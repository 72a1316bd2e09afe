//! Labels page form

use super::field::FormField;
use crate::labels::FormState;

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField>;
    fn get_field(&self, index: usize) -> Option<&FormField>;
}

/// Focusable areas of the page, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormFocus {
    #[default]
    AppName,
    Domains,
    CopyAll,
    Labels,
}

impl FormFocus {
    const ORDER: [FormFocus; 4] = [
        FormFocus::AppName,
        FormFocus::Domains,
        FormFocus::CopyAll,
        FormFocus::Labels,
    ];

    pub fn from_index(index: usize) -> Self {
        Self::ORDER[index.min(Self::ORDER.len() - 1)]
    }

    pub fn index(self) -> usize {
        match self {
            Self::AppName => 0,
            Self::Domains => 1,
            Self::CopyAll => 2,
            Self::Labels => 3,
        }
    }

    /// Whether key presses edit a text field in this focus
    pub fn is_input(self) -> bool {
        matches!(self, Self::AppName | Self::Domains)
    }
}

/// App name + domain form shown at the top of the page
#[derive(Debug, Clone)]
pub struct LabelsForm {
    pub app_name: FormField,
    pub domains: FormField,
    pub active_field_index: usize,
}

impl LabelsForm {
    pub fn new() -> Self {
        Self {
            app_name: FormField::text("App"),
            domains: FormField::tags("Domain"),
            active_field_index: 0,
        }
    }

    pub fn focus(&self) -> FormFocus {
        FormFocus::from_index(self.active_field_index)
    }

    pub fn set_focus(&mut self, focus: FormFocus) {
        self.set_active_field(focus.index());
    }

    /// Snapshot of the committed values for label generation
    pub fn to_form_state(&self) -> FormState {
        FormState::new(self.app_name.as_text(), self.domains.as_tags().to_vec())
    }
}

impl Default for LabelsForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for LabelsForm {
    fn field_count(&self) -> usize {
        4 // app name, domains, copy all button, labels panel
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(3);
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        match self.active_field_index {
            0 => Some(&mut self.app_name),
            1 => Some(&mut self.domains),
            _ => None,
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            0 => Some(&self.app_name),
            1 => Some(&self.domains),
            // Button and labels panel have no FormField
            _ => None,
        }
    }
}
