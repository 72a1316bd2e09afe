//! Form domain layer
//!
//! Editable fields for the labels page and the focus model around them.

mod field;
mod form_state;

pub use field::{FieldValue, FormField};
pub use form_state::{Form, FormFocus, LabelsForm};
