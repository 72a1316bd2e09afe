//! Traefik label generation
//!
//! Pure logic that turns the page form into docker labels:
//! - `validate`: decides whether the form can produce labels
//! - `template`: expands a valid form into the fixed label set

mod template;
mod validate;

pub use template::{expand, export_all, ConfigEntry, LabelToken, LABEL_COUNT};
pub use validate::validate;

/// Input to the label generator, rebuilt from the form on every change
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    /// Router/service name interpolated into every key path
    pub app_name: String,
    /// Hostnames matched by the router rule, in entry order
    pub domains: Vec<String>,
}

impl FormState {
    pub fn new(app_name: impl Into<String>, domains: Vec<String>) -> Self {
        Self {
            app_name: app_name.into(),
            domains,
        }
    }
}
