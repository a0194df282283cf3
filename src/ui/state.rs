//! UI state management structures
//!
//! Everything the renderer needs to draw one frame: the record table, the open dialog, a
//! pending alert and the status line. The application mutates it; renderers only read it.

use crate::dialog::{AddDialog, DeleteDialog, Form, SearchDialog, UpdateDialog};
use crate::input::InputMode;
use crate::presenter::RecordListPresenter;

/// Window title shown above the record table
pub const APP_TITLE: &str = "Student Record Management System";

/// Status message before the first operation
pub const READY: &str = "Ready";

/// Frame-level view state
#[derive(Debug)]
pub struct ViewState {
    /// Rows and selection
    pub presenter: RecordListPresenter,

    /// Open dialog, if any
    pub modal: Option<Modal>,

    /// Blocking error alert, drawn above any dialog
    pub alert: Option<String>,

    /// Status line content
    pub status_line: StatusLine,

    /// Where records come from, for display
    pub store_label: String,

    /// Viewport dimensions
    pub viewport_width: u16,
    pub viewport_height: u16,
}

impl ViewState {
    pub fn new(store_label: impl Into<String>, viewport_width: u16, viewport_height: u16) -> Self {
        Self {
            presenter: RecordListPresenter::new(),
            modal: None,
            alert: None,
            status_line: StatusLine::new(),
            store_label: store_label.into(),
            viewport_width,
            viewport_height,
        }
    }

    /// Which key map applies right now
    pub fn input_mode(&self) -> InputMode {
        if self.alert.is_some() {
            return InputMode::Alert;
        }
        match &self.modal {
            None => InputMode::Table,
            Some(modal) => modal.input_mode(),
        }
    }

    pub fn show_alert(&mut self, message: impl Into<String>) {
        self.alert = Some(message.into());
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    /// Update terminal dimensions. Returns true if they actually changed.
    pub fn update_terminal_size(&mut self, width: u16, height: u16) -> bool {
        let changed = self.viewport_width != width || self.viewport_height != height;
        if changed {
            self.viewport_width = width;
            self.viewport_height = height;
        }
        changed
    }

    /// Format the complete status line for this view state
    pub fn format_status_line(&self) -> String {
        self.status_line
            .format_status_line(&self.store_label, self.presenter.len())
    }
}

/// The dialog currently on screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    Add(AddDialog),
    Search(SearchDialog),
    Update(UpdateDialog),
    Delete(DeleteDialog),
}

impl Modal {
    pub fn title(&self) -> &'static str {
        match self {
            Modal::Add(_) => AddDialog::TITLE,
            Modal::Search(_) => SearchDialog::TITLE,
            Modal::Update(_) => UpdateDialog::TITLE,
            Modal::Delete(_) => DeleteDialog::TITLE,
        }
    }

    pub fn input_mode(&self) -> InputMode {
        match self {
            Modal::Delete(_) => InputMode::Confirm,
            _ => InputMode::Form,
        }
    }

    pub fn form(&self) -> Option<&Form> {
        match self {
            Modal::Add(dialog) => Some(dialog.form()),
            Modal::Search(dialog) => Some(dialog.form()),
            Modal::Update(dialog) => Some(dialog.form()),
            Modal::Delete(_) => None,
        }
    }

    pub fn form_mut(&mut self) -> Option<&mut Form> {
        match self {
            Modal::Add(dialog) => Some(dialog.form_mut()),
            Modal::Search(dialog) => Some(dialog.form_mut()),
            Modal::Update(dialog) => Some(dialog.form_mut()),
            Modal::Delete(_) => None,
        }
    }
}

/// Status line information
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub message: String,
}

impl Default for StatusLine {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusLine {
    pub fn new() -> Self {
        Self {
            message: READY.to_string(),
        }
    }

    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = message.into();
    }

    /// `<store> | <n> records | <message>`
    pub fn format_status_line(&self, store_label: &str, record_count: usize) -> String {
        let noun = if record_count == 1 { "record" } else { "records" };
        format!("{store_label} | {record_count} {noun} | {}", self.message)
    }
}
