//! Operation dialogs.
//!
//! Each dialog owns its form state and talks to the store only through an explicit
//! `&dyn RecordStore` (plus the presenter it refreshes) handed in by the caller. Submit
//! methods return a [`DialogOutcome`] on success; on failure the caller decides, through
//! [`RosterError::keeps_dialog_open`](crate::error::RosterError::keeps_dialog_open), whether
//! the dialog stays on screen.

pub mod add;
pub mod delete;
pub mod form;
pub mod search;
pub mod update;

pub use add::AddDialog;
pub use delete::DeleteDialog;
pub use form::{Form, FormField};
pub use search::SearchDialog;
pub use update::UpdateDialog;

use crate::error::{Result, RosterError};

pub const ALL_FIELDS_REQUIRED: &str = "All fields are required!";

/// What the shell should do once a dialog handled an action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogOutcome {
    /// Leave the dialog open
    Stay,
    /// Close the dialog, optionally replacing the status message
    Close { status: Option<String> },
}

impl DialogOutcome {
    pub fn close_with(status: impl Into<String>) -> Self {
        DialogOutcome::Close {
            status: Some(status.into()),
        }
    }

    pub fn cancelled() -> Self {
        DialogOutcome::Close { status: None }
    }
}

/// Reject the submit when any value is blank.
///
/// Whitespace-only input counts as blank, which is stricter than a plain emptiness check.
fn require_filled(values: &[&str], message: &str) -> Result<()> {
    if values.iter().any(|value| value.trim().is_empty()) {
        log::warn!("rejected submit: {message}");
        return Err(RosterError::validation(message));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_values_fail_validation() {
        assert!(require_filled(&["1", "Ann", "90"], ALL_FIELDS_REQUIRED).is_ok());
        for values in [["", "Ann", "90"], ["1", "  ", "90"], ["1", "Ann", ""]] {
            let err = require_filled(&values, ALL_FIELDS_REQUIRED).unwrap_err();
            assert_eq!(err.to_string(), ALL_FIELDS_REQUIRED);
        }
    }
}
