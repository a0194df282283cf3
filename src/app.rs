//! Application orchestration layer
//!
//! This module wires the record store, the presenter and the dialogs to a display surface.
//! It owns the event loop and the status/alert policy; the actual work is delegated to the
//! components.

use crate::dialog::{AddDialog, DeleteDialog, DialogOutcome, SearchDialog, UpdateDialog};
use crate::error::Result;
use crate::input::{InputAction, InputService};
use crate::store::RecordStore;
use crate::ui::{Modal, UIRenderer, ViewState};
use ratatui::crossterm::event::Event;
use std::sync::Arc;
use std::time::Duration;

/// How long to wait for input before redrawing
const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Application orchestrator - coordinates components without duplicating their state
pub struct Application {
    store: Arc<dyn RecordStore>,
    ui_renderer: Box<dyn UIRenderer>,
    input: InputService,
    view_state: ViewState,
}

impl Application {
    /// Wire components together and load the initial record list.
    ///
    /// A store that cannot be loaded (for example a malformed line) fails construction.
    pub async fn new(
        store: Arc<dyn RecordStore>,
        ui_renderer: Box<dyn UIRenderer>,
    ) -> Result<Self> {
        let (width, height) = ui_renderer.get_terminal_size()?;
        let mut view_state = ViewState::new(store.describe(), width, height);
        view_state.presenter.refresh(store.as_ref()).await?;
        log::info!(
            "loaded {} records from {}",
            view_state.presenter.len(),
            view_state.store_label
        );

        Ok(Self {
            store,
            ui_renderer,
            input: InputService::new(),
            view_state,
        })
    }

    /// Current view state
    pub fn view_state(&self) -> &ViewState {
        &self.view_state
    }

    /// Run the application until the user quits. The terminal is restored on every exit path.
    pub async fn run(&mut self) -> Result<()> {
        self.ui_renderer.initialize()?;
        let result = self.event_loop().await;
        let cleanup = self.ui_renderer.cleanup();
        result.and(cleanup)
    }

    async fn event_loop(&mut self) -> Result<()> {
        loop {
            self.ui_renderer.render(&self.view_state)?;

            let Some(event) = self.ui_renderer.next_event(Some(POLL_INTERVAL))? else {
                continue;
            };
            if !self.handle_event(event).await? {
                return Ok(());
            }
        }
    }

    /// Translate and execute one terminal event - returns false if should quit
    pub async fn handle_event(&mut self, event: Event) -> Result<bool> {
        match self.input.translate(self.view_state.input_mode(), &event) {
            Some(action) => self.execute_action(action).await,
            None => Ok(true),
        }
    }

    /// Execute an action - returns false if should quit
    pub async fn execute_action(&mut self, action: InputAction) -> Result<bool> {
        let view_state = &mut self.view_state;

        match action {
            InputAction::Quit => return Ok(false),

            InputAction::Resize { width, height } => {
                view_state.update_terminal_size(width, height);
            }

            InputAction::SelectNext => view_state.presenter.select_next(),
            InputAction::SelectPrevious => view_state.presenter.select_previous(),
            InputAction::SelectFirst => view_state.presenter.select_first(),
            InputAction::SelectLast => view_state.presenter.select_last(),

            InputAction::OpenAdd => view_state.modal = Some(Modal::Add(AddDialog::new())),
            InputAction::OpenSearch => {
                view_state.modal = Some(Modal::Search(SearchDialog::new()));
            }
            InputAction::OpenUpdate => match UpdateDialog::open(&view_state.presenter) {
                Ok(dialog) => view_state.modal = Some(Modal::Update(dialog)),
                Err(err) => view_state.show_alert(err.to_string()),
            },
            InputAction::OpenDelete => match DeleteDialog::open(&view_state.presenter) {
                Ok(dialog) => view_state.modal = Some(Modal::Delete(dialog)),
                Err(err) => view_state.show_alert(err.to_string()),
            },

            InputAction::Reload => match view_state.presenter.refresh(self.store.as_ref()).await {
                Ok(()) => view_state.status_line.set_message("Records reloaded"),
                Err(err) => {
                    log::error!("reload failed: {err}");
                    view_state.show_alert(err.to_string());
                }
            },

            InputAction::InsertChar(ch) => {
                if let Some(form) = view_state.modal.as_mut().and_then(Modal::form_mut) {
                    form.insert_char(ch);
                }
            }
            InputAction::DeleteChar => {
                if let Some(form) = view_state.modal.as_mut().and_then(Modal::form_mut) {
                    form.backspace();
                }
            }
            InputAction::NextField => {
                if let Some(form) = view_state.modal.as_mut().and_then(Modal::form_mut) {
                    form.focus_next();
                }
            }
            InputAction::PreviousField => {
                if let Some(form) = view_state.modal.as_mut().and_then(Modal::form_mut) {
                    form.focus_previous();
                }
            }

            InputAction::Cancel | InputAction::Decline => view_state.modal = None,
            InputAction::Dismiss => view_state.dismiss_alert(),

            InputAction::Submit | InputAction::Confirm => self.submit_modal().await,
        }

        Ok(true)
    }

    /// Hand the open dialog its store and presenter, then apply the outcome.
    async fn submit_modal(&mut self) {
        let Some(mut modal) = self.view_state.modal.take() else {
            return;
        };

        let store = self.store.as_ref();
        let presenter = &mut self.view_state.presenter;
        let result = match &mut modal {
            Modal::Add(dialog) => dialog.submit(store, presenter).await,
            Modal::Search(dialog) => dialog.submit(store).await,
            Modal::Update(dialog) => dialog.submit(store, presenter).await,
            Modal::Delete(dialog) => dialog.confirm(store, presenter).await,
        };

        match result {
            Ok(DialogOutcome::Stay) => self.view_state.modal = Some(modal),
            Ok(DialogOutcome::Close { status }) => {
                if let Some(status) = status {
                    self.view_state.status_line.set_message(status);
                }
            }
            Err(err) => {
                if err.keeps_dialog_open() {
                    self.view_state.modal = Some(modal);
                } else {
                    log::error!("{} failed: {err}", modal.title());
                }
                self.view_state.show_alert(err.to_string());
            }
        }
    }
}
