//! Update dialog: edit name and marks of the selected record.
//!
//! The roll number is shown but cannot change once a record exists.

use super::{require_filled, DialogOutcome, Form, FormField, ALL_FIELDS_REQUIRED};
use crate::error::{Result, RosterError};
use crate::presenter::RecordListPresenter;
use crate::store::RecordStore;

const NAME: usize = 1;
const MARKS: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateDialog {
    roll_no: String,
    form: Form,
}

impl UpdateDialog {
    pub const TITLE: &'static str = "Update Student Record";

    /// Open for the selected row, pre-filled with its current values.
    pub fn open(presenter: &RecordListPresenter) -> Result<Self> {
        let record = presenter
            .selected_record()
            .ok_or_else(|| RosterError::no_selection("update"))?;

        Ok(Self {
            roll_no: record.roll_no.clone(),
            form: Form::new(vec![
                FormField::new("Roll Number:")
                    .with_value(record.roll_no.as_str())
                    .read_only(),
                FormField::new("Name:").with_value(record.name.as_str()),
                FormField::new("Marks:").with_value(record.marks.as_str()),
            ]),
        })
    }

    /// Roll number of the record being edited
    pub fn roll_no(&self) -> &str {
        &self.roll_no
    }

    pub fn form(&self) -> &Form {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut Form {
        &mut self.form
    }

    /// Validate, rewrite the store, and reload the table.
    pub async fn submit(
        &self,
        store: &dyn RecordStore,
        presenter: &mut RecordListPresenter,
    ) -> Result<DialogOutcome> {
        let name = self.form.value(NAME);
        let marks = self.form.value(MARKS);
        require_filled(&[name, marks], ALL_FIELDS_REQUIRED)?;

        store.rewrite_replacing(&self.roll_no, name, marks).await?;
        presenter.refresh(store).await?;
        Ok(DialogOutcome::close_with(
            "Student record updated successfully!",
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{InMemoryStore, Record};

    async fn presenter_on(store: &InMemoryStore) -> RecordListPresenter {
        let mut presenter = RecordListPresenter::new();
        presenter.refresh(store).await.unwrap();
        presenter
    }

    fn retype(form: &mut Form, value: &str) {
        while !form.value(form.focus()).is_empty() {
            form.backspace();
        }
        for ch in value.chars() {
            form.insert_char(ch);
        }
    }

    #[tokio::test]
    async fn open_requires_a_selection() {
        let presenter = RecordListPresenter::new();
        let err = UpdateDialog::open(&presenter).unwrap_err();
        assert_eq!(err.to_string(), "Please select a student to update!");
    }

    #[tokio::test]
    async fn open_prefills_selected_values() {
        let store = InMemoryStore::with_content("1,Alice,80\n2,Bob,70\n");
        let mut presenter = presenter_on(&store).await;
        presenter.select_last();

        let dialog = UpdateDialog::open(&presenter).unwrap();
        assert_eq!(dialog.roll_no(), "2");
        assert!(dialog.form().fields()[0].read_only);
        assert_eq!(dialog.form().value(NAME), "Bob");
        assert_eq!(dialog.form().value(MARKS), "70");
        assert_eq!(dialog.form().focus(), NAME);
    }

    #[tokio::test]
    async fn submit_replaces_in_place() {
        let store = InMemoryStore::with_content("1,Alice,80\n2,Bob,70\n");
        let mut presenter = presenter_on(&store).await;
        presenter.select_last();

        let mut dialog = UpdateDialog::open(&presenter).unwrap();
        retype(dialog.form_mut(), "Bobby");
        dialog.form_mut().focus_next();
        retype(dialog.form_mut(), "75");

        let outcome = dialog.submit(&store, &mut presenter).await.unwrap();
        assert_eq!(
            outcome,
            DialogOutcome::close_with("Student record updated successfully!")
        );
        assert_eq!(store.content().as_deref(), Some("1,Alice,80\n2,Bobby,75\n"));
        assert_eq!(presenter.rows()[1], Record::new("2", "Bobby", "75"));
    }

    #[tokio::test]
    async fn blank_name_keeps_dialog_open() {
        let store = InMemoryStore::with_content("1,Alice,80\n");
        let mut presenter = presenter_on(&store).await;

        let mut dialog = UpdateDialog::open(&presenter).unwrap();
        retype(dialog.form_mut(), "");

        let err = dialog.submit(&store, &mut presenter).await.unwrap_err();
        assert!(err.keeps_dialog_open());
        assert_eq!(store.content().as_deref(), Some("1,Alice,80\n"));
    }

    #[tokio::test]
    async fn vanished_record_closes_with_error() {
        let store = InMemoryStore::with_content("1,Alice,80\n");
        let mut presenter = presenter_on(&store).await;
        let dialog = UpdateDialog::open(&presenter).unwrap();

        // removed behind the dialog's back
        store.rewrite_deleting("1").await.unwrap();

        let err = dialog.submit(&store, &mut presenter).await.unwrap_err();
        assert!(matches!(err, RosterError::RecordNotFound { .. }));
        assert!(!err.keeps_dialog_open());
        assert_eq!(err.to_string(), "No records found!");
    }
}
