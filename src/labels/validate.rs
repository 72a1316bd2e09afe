//! Form validation

use super::FormState;

/// Returns true when the form has a name and at least one non-blank domain.
pub fn validate(state: &FormState) -> bool {
    !is_blank(&state.app_name)
        && !state.domains.is_empty()
        && state.domains.iter().all(|d| !is_blank(d))
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
