//! Form field value objects

/// Type-safe field values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    /// Committed tags plus the tag currently being typed
    Tags { tags: Vec<String>, draft: String },
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

/// Represents a single form field with its configuration and value
#[derive(Debug, Clone)]
pub struct FormField {
    pub label: String,
    pub value: FieldValue,
}

impl FormField {
    /// Create a new single-line text field
    pub fn text(label: &str) -> Self {
        Self {
            label: label.to_string(),
            value: FieldValue::Text(String::new()),
        }
    }

    /// Create a new tag field
    pub fn tags(label: &str) -> Self {
        Self {
            label: label.to_string(),
            value: FieldValue::Tags {
                tags: Vec::new(),
                draft: String::new(),
            },
        }
    }

    pub fn is_tags(&self) -> bool {
        matches!(self.value, FieldValue::Tags { .. })
    }

    /// Get the text value (returns the draft for tag fields)
    pub fn as_text(&self) -> &str {
        match &self.value {
            FieldValue::Text(s) => s,
            FieldValue::Tags { draft, .. } => draft,
        }
    }

    /// Get the committed tags (empty for text fields)
    pub fn as_tags(&self) -> &[String] {
        match &self.value {
            FieldValue::Tags { tags, .. } => tags,
            FieldValue::Text(_) => &[],
        }
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        match &mut self.value {
            FieldValue::Text(s) => s.push(c),
            FieldValue::Tags { draft, .. } => draft.push(c),
        }
    }

    /// Remove the last character; on a tag field with an empty draft,
    /// remove the last tag instead
    pub fn pop_char(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) => {
                s.pop();
            }
            FieldValue::Tags { tags, draft } => {
                if draft.pop().is_none() {
                    tags.pop();
                }
            }
        }
    }

    /// Commit the draft as a new tag. Returns false when nothing was added.
    pub fn commit_draft(&mut self) -> bool {
        match &mut self.value {
            FieldValue::Tags { tags, draft } => {
                let tag = draft.trim().to_string();
                draft.clear();
                if tag.is_empty() {
                    return false;
                }
                tags.push(tag);
                true
            }
            FieldValue::Text(_) => false,
        }
    }

    /// Clear the field value
    pub fn clear(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) => s.clear(),
            FieldValue::Tags { tags, draft } => {
                tags.clear();
                draft.clear();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(field: &mut FormField, text: &str) {
        for c in text.chars() {
            field.push_char(c);
        }
    }

    #[test]
    fn test_text_field_edits() {
        let mut field = FormField::text("App");
        typed(&mut field, "blog");
        assert_eq!(field.as_text(), "blog");
        field.pop_char();
        assert_eq!(field.as_text(), "blo");
        field.clear();
        assert_eq!(field.as_text(), "");
        assert!(field.as_tags().is_empty());
    }

    #[test]
    fn test_pop_char_on_empty_text_is_noop() {
        let mut field = FormField::text("App");
        field.pop_char();
        assert_eq!(field.as_text(), "");
    }

    #[test]
    fn test_commit_draft_trims_and_appends() {
        let mut field = FormField::tags("Domain");
        typed(&mut field, " a.com ");
        assert!(field.commit_draft());
        typed(&mut field, "b.com");
        assert!(field.commit_draft());
        assert_eq!(field.as_tags(), ["a.com", "b.com"]);
        assert_eq!(field.as_text(), "");
    }

    #[test]
    fn test_commit_blank_draft_is_ignored() {
        let mut field = FormField::tags("Domain");
        typed(&mut field, "   ");
        assert!(!field.commit_draft());
        assert!(field.as_tags().is_empty());
        assert_eq!(field.as_text(), "");
    }

    #[test]
    fn test_commit_allows_duplicates() {
        let mut field = FormField::tags("Domain");
        for _ in 0..2 {
            typed(&mut field, "a.com");
            field.commit_draft();
        }
        assert_eq!(field.as_tags().len(), 2);
    }

    #[test]
    fn test_backspace_on_empty_draft_removes_last_tag() {
        let mut field = FormField::tags("Domain");
        typed(&mut field, "a.com");
        field.commit_draft();
        typed(&mut field, "b");
        field.pop_char();
        assert_eq!(field.as_tags(), ["a.com"]);
        field.pop_char();
        assert!(field.as_tags().is_empty());
    }

    #[test]
    fn test_clear_tags() {
        let mut field = FormField::tags("Domain");
        typed(&mut field, "a.com");
        field.commit_draft();
        typed(&mut field, "b");
        field.clear();
        assert!(field.as_tags().is_empty());
        assert_eq!(field.as_text(), "");
    }

    #[test]
    fn test_commit_on_text_field_is_noop() {
        let mut field = FormField::text("App");
        typed(&mut field, "blog");
        assert!(!field.commit_draft());
        assert_eq!(field.as_text(), "blog");
        assert!(!field.is_tags());
    }
}
