//! Add dialog: roll number, name and marks for a new record.

use super::{require_filled, DialogOutcome, Form, FormField, ALL_FIELDS_REQUIRED};
use crate::error::{Result, RosterError};
use crate::presenter::RecordListPresenter;
use crate::store::{Record, RecordStore};

const ROLL_NO: usize = 0;
const NAME: usize = 1;
const MARKS: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddDialog {
    form: Form,
}

impl AddDialog {
    pub const TITLE: &'static str = "Add New Student";

    pub fn new() -> Self {
        Self {
            form: Form::new(vec![
                FormField::new("Roll Number:"),
                FormField::new("Name:"),
                FormField::new("Marks:"),
            ]),
        }
    }

    pub fn form(&self) -> &Form {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut Form {
        &mut self.form
    }

    /// Validate, append, and reload the table.
    ///
    /// Roll numbers must be unique: a roll number already in the store is refused.
    pub async fn submit(
        &self,
        store: &dyn RecordStore,
        presenter: &mut RecordListPresenter,
    ) -> Result<DialogOutcome> {
        let record = Record::new(
            self.form.value(ROLL_NO),
            self.form.value(NAME),
            self.form.value(MARKS),
        );
        require_filled(
            &[
                record.roll_no.as_str(),
                record.name.as_str(),
                record.marks.as_str(),
            ],
            ALL_FIELDS_REQUIRED,
        )?;

        if store.contains(&record.roll_no).await? {
            log::warn!("rejected duplicate roll number {}", record.roll_no);
            return Err(RosterError::DuplicateRollNo {
                roll_no: record.roll_no,
            });
        }

        store.append(&record).await?;
        presenter.refresh(store).await?;
        Ok(DialogOutcome::close_with("Student record added successfully!"))
    }
}

impl Default for AddDialog {
    fn default() -> Self {
        Self::new()
    }
}
