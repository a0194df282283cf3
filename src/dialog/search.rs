//! Search dialog: look up one roll number, show the first match inline.

use super::{require_filled, DialogOutcome, Form, FormField};
use crate::error::Result;
use crate::store::{RecordStore, SearchOutcome};

pub const ENTER_ROLL_NUMBER: &str = "Please enter a roll number!";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchDialog {
    form: Form,
    result: Option<String>,
}

impl SearchDialog {
    pub const TITLE: &'static str = "Search Student";

    pub fn new() -> Self {
        Self {
            form: Form::new(vec![FormField::new("Enter Roll Number to Search:")]),
            result: None,
        }
    }

    pub fn form(&self) -> &Form {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut Form {
        &mut self.form
    }

    /// Text of the last completed search
    pub fn result(&self) -> Option<&str> {
        self.result.as_deref()
    }

    /// Run the lookup. The dialog always stays open so the user can search again.
    pub async fn submit(&mut self, store: &dyn RecordStore) -> Result<DialogOutcome> {
        let roll_no = self.form.value(0).to_string();
        require_filled(&[roll_no.as_str()], ENTER_ROLL_NUMBER)?;

        let text = match store.find_first(&roll_no).await? {
            SearchOutcome::Found(record) => {
                format!("Found: {}, Marks: {}", record.name, record.marks)
            }
            SearchOutcome::NotFound => "Student record not found.".to_string(),
            SearchOutcome::NoStore => "No records found.".to_string(),
        };
        self.result = Some(text);
        Ok(DialogOutcome::Stay)
    }
}

impl Default for SearchDialog {
    fn default() -> Self {
        Self::new()
    }
}
