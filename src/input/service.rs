//! High-level input service.
//!
//! Turns crossterm events into domain-level `InputAction`s. The same key means different
//! things depending on what is on screen (typing `d` into a name field must not delete a
//! record), so translation is driven by the current [`InputMode`].

use ratatui::crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What currently owns the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Record table with no dialog open
    Table,
    /// A dialog with text fields (add, search, update)
    Form,
    /// Yes/no confirmation prompt
    Confirm,
    /// Blocking error alert
    Alert,
}

/// High-level input actions consumed by the application shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputAction {
    // table
    SelectNext,
    SelectPrevious,
    SelectFirst,
    SelectLast,
    OpenAdd,
    OpenSearch,
    OpenUpdate,
    OpenDelete,
    Reload,

    // form
    InsertChar(char),
    DeleteChar,
    NextField,
    PreviousField,
    Submit,
    Cancel,

    // confirmation
    Confirm,
    Decline,

    // alert
    Dismiss,

    Resize { width: u16, height: u16 },
    Quit,
}

/// Stateless translator from terminal events to actions.
#[derive(Debug, Default, Clone, Copy)]
pub struct InputService;

impl InputService {
    pub fn new() -> Self {
        Self
    }

    /// Translate one terminal event, or `None` when it means nothing in `mode`.
    pub fn translate(&self, mode: InputMode, event: &Event) -> Option<InputAction> {
        match event {
            Event::Key(key_event) => self.handle_key_event(mode, *key_event),
            Event::Resize(width, height) => Some(InputAction::Resize {
                width: *width,
                height: *height,
            }),
            _ => None,
        }
    }

    pub fn handle_key_event(&self, mode: InputMode, key_event: KeyEvent) -> Option<InputAction> {
        if key_event.kind != KeyEventKind::Press {
            return None;
        }
        if key_event.code == KeyCode::Char('c')
            && key_event.modifiers.contains(KeyModifiers::CONTROL)
        {
            return Some(InputAction::Quit);
        }

        match mode {
            InputMode::Table => Self::table_key(key_event),
            InputMode::Form => Self::form_key(key_event),
            InputMode::Confirm => Self::confirm_key(key_event),
            InputMode::Alert => Self::alert_key(key_event),
        }
    }

    fn table_key(key_event: KeyEvent) -> Option<InputAction> {
        if key_event
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        {
            return None;
        }

        let action = match key_event.code {
            KeyCode::Char('j') | KeyCode::Down => InputAction::SelectNext,
            KeyCode::Char('k') | KeyCode::Up => InputAction::SelectPrevious,
            KeyCode::Char('g') | KeyCode::Home => InputAction::SelectFirst,
            KeyCode::Char('G') | KeyCode::End => InputAction::SelectLast,
            KeyCode::Char('a') | KeyCode::Insert => InputAction::OpenAdd,
            KeyCode::Char('s') | KeyCode::Char('/') => InputAction::OpenSearch,
            KeyCode::Char('u') | KeyCode::Char('e') | KeyCode::Enter => InputAction::OpenUpdate,
            KeyCode::Char('d') | KeyCode::Delete => InputAction::OpenDelete,
            KeyCode::Char('r') => InputAction::Reload,
            KeyCode::Char('q') => InputAction::Quit,
            _ => return None,
        };
        Some(action)
    }

    fn form_key(key_event: KeyEvent) -> Option<InputAction> {
        let action = match key_event.code {
            KeyCode::Enter => InputAction::Submit,
            KeyCode::Esc => InputAction::Cancel,
            KeyCode::Tab | KeyCode::Down => InputAction::NextField,
            KeyCode::BackTab | KeyCode::Up => InputAction::PreviousField,
            KeyCode::Backspace => InputAction::DeleteChar,
            KeyCode::Char(ch)
                if !key_event
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                InputAction::InsertChar(ch)
            }
            _ => return None,
        };
        Some(action)
    }

    fn confirm_key(key_event: KeyEvent) -> Option<InputAction> {
        match key_event.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => Some(InputAction::Confirm),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => Some(InputAction::Decline),
            _ => None,
        }
    }

    fn alert_key(key_event: KeyEvent) -> Option<InputAction> {
        match key_event.code {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => Some(InputAction::Dismiss),
            _ => None,
        }
    }
}
