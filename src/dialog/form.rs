//! Labeled text-entry form shared by the dialogs.

/// One labeled input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub label: &'static str,
    pub value: String,
    /// Shown but never focused or edited
    pub read_only: bool,
}

impl FormField {
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            value: String::new(),
            read_only: false,
        }
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }
}

/// Ordered set of fields with a single focused, editable field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Form {
    fields: Vec<FormField>,
    focus: usize,
}

impl Form {
    /// Build a form focused on its first editable field.
    pub fn new(fields: Vec<FormField>) -> Self {
        let focus = fields
            .iter()
            .position(|field| !field.read_only)
            .unwrap_or(0);
        Self { fields, focus }
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    /// Index of the focused field
    pub fn focus(&self) -> usize {
        self.focus
    }

    pub fn value(&self, idx: usize) -> &str {
        self.fields.get(idx).map_or("", |field| field.value.as_str())
    }

    pub fn insert_char(&mut self, ch: char) {
        if let Some(field) = self.editable_focus() {
            field.value.push(ch);
        }
    }

    pub fn backspace(&mut self) {
        if let Some(field) = self.editable_focus() {
            field.value.pop();
        }
    }

    /// Move focus to the next editable field, wrapping around.
    pub fn focus_next(&mut self) {
        self.step_focus(1);
    }

    /// Move focus to the previous editable field, wrapping around.
    pub fn focus_previous(&mut self) {
        self.step_focus(self.fields.len().saturating_sub(1));
    }

    fn step_focus(&mut self, step: usize) {
        let len = self.fields.len();
        if len == 0 {
            return;
        }
        let mut idx = self.focus;
        for _ in 0..len {
            idx = (idx + step) % len;
            if !self.fields[idx].read_only {
                self.focus = idx;
                return;
            }
        }
    }

    fn editable_focus(&mut self) -> Option<&mut FormField> {
        self.fields
            .get_mut(self.focus)
            .filter(|field| !field.read_only)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn student_form() -> Form {
        Form::new(vec![
            FormField::new("Roll Number:").with_value("7").read_only(),
            FormField::new("Name:"),
            FormField::new("Marks:"),
        ])
    }

    #[test]
    fn focus_skips_read_only_fields() {
        let mut form = student_form();
        assert_eq!(form.focus(), 1);

        form.focus_next();
        assert_eq!(form.focus(), 2);
        form.focus_next();
        assert_eq!(form.focus(), 1);
        form.focus_previous();
        assert_eq!(form.focus(), 2);
    }

    #[test]
    fn typing_edits_the_focused_field() {
        let mut form = student_form();
        for ch in "Ann".chars() {
            form.insert_char(ch);
        }
        form.backspace();
        form.focus_next();
        form.insert_char('9');

        assert_eq!(form.value(0), "7");
        assert_eq!(form.value(1), "An");
        assert_eq!(form.value(2), "9");
        assert_eq!(form.value(5), "");
    }

    #[test]
    fn all_read_only_form_ignores_edits() {
        let mut form = Form::new(vec![FormField::new("Roll Number:").read_only()]);
        form.insert_char('x');
        form.focus_next();
        assert_eq!(form.value(0), "");
        assert_eq!(form.focus(), 0);
    }
}
