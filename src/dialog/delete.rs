//! Delete confirmation for the selected record.

use super::DialogOutcome;
use crate::error::{Result, RosterError};
use crate::presenter::RecordListPresenter;
use crate::store::{Record, RecordStore};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteDialog {
    record: Record,
}

impl DeleteDialog {
    pub const TITLE: &'static str = "Confirm";

    /// Ask about the selected row.
    pub fn open(presenter: &RecordListPresenter) -> Result<Self> {
        let record = presenter
            .selected_record()
            .cloned()
            .ok_or_else(|| RosterError::no_selection("delete"))?;
        Ok(Self { record })
    }

    pub fn record(&self) -> &Record {
        &self.record
    }

    /// Question shown to the user
    pub fn prompt(&self) -> String {
        format!(
            "Delete record for {} (Roll No: {})?",
            self.record.name, self.record.roll_no
        )
    }

    /// Remove every record with this roll number and reload the table.
    pub async fn confirm(
        &self,
        store: &dyn RecordStore,
        presenter: &mut RecordListPresenter,
    ) -> Result<DialogOutcome> {
        store.rewrite_deleting(&self.record.roll_no).await?;
        presenter.refresh(store).await?;
        Ok(DialogOutcome::close_with(
            "Student record deleted successfully!",
        ))
    }

    /// Abort without touching the store
    pub fn decline(&self) -> DialogOutcome {
        DialogOutcome::cancelled()
    }
}
