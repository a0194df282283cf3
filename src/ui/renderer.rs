//! UI renderer trait and event handling
//!
//! This module defines the `UIRenderer` trait: the display surface the application draws on
//! and reads terminal events from.

use crate::error::Result;
use crate::ui::ViewState;
use ratatui::crossterm::event::Event;
use std::time::Duration;

/// Core trait for UI rendering and event handling
pub trait UIRenderer {
    /// Render the current view state
    ///
    /// This method should:
    /// - Draw the record table with the selected row highlighted
    /// - Draw the open dialog, if any, above the table
    /// - Draw a pending alert above everything else
    /// - Update the status line
    fn render(&mut self, view_state: &ViewState) -> Result<()>;

    /// Wait for the next terminal event
    ///
    /// Returns None on timeout so the caller can redraw periodically.
    fn next_event(&mut self, timeout: Option<Duration>) -> Result<Option<Event>>;

    /// Initialize the terminal UI
    ///
    /// This method should:
    /// - Set up raw mode
    /// - Switch to the alternate screen
    fn initialize(&mut self) -> Result<()>;

    /// Clean up and restore terminal state
    ///
    /// This method should:
    /// - Leave the alternate screen
    /// - Exit raw mode
    fn cleanup(&mut self) -> Result<()>;

    /// Get current terminal dimensions
    fn get_terminal_size(&self) -> Result<(u16, u16)>; // (width, height)
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use parking_lot::Mutex;
    use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use std::collections::VecDeque;
    use std::sync::Arc;

    /// Frame data captured by [`MockUIRenderer`] on every render
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct RenderSnapshot {
        pub status: String,
        pub row_count: usize,
        pub selected: Option<usize>,
        pub modal_title: Option<&'static str>,
        pub alert: Option<String>,
    }

    /// Mock UI renderer for testing
    ///
    /// This mock allows tests to:
    /// - Verify render calls were made
    /// - Replay a scripted event sequence
    /// - Inspect what each frame would have shown
    ///
    /// Once the script runs out it reports Ctrl+C so event loops terminate.
    pub struct MockUIRenderer {
        pub terminal_size: (u16, u16),
        pub events: VecDeque<Event>,
        pub is_initialized: bool,
        pub frames: Arc<Mutex<Vec<RenderSnapshot>>>,
    }

    impl Default for MockUIRenderer {
        fn default() -> Self {
            Self::new()
        }
    }

    impl MockUIRenderer {
        pub fn new() -> Self {
            Self {
                terminal_size: (80, 24),
                events: VecDeque::new(),
                is_initialized: false,
                frames: Arc::new(Mutex::new(Vec::new())),
            }
        }

        /// Queue a key press
        pub fn press(&mut self, code: KeyCode) {
            self.events
                .push_back(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)));
        }

        /// Queue one key press per character
        pub fn type_text(&mut self, text: &str) {
            for ch in text.chars() {
                self.press(KeyCode::Char(ch));
            }
        }

        /// Shared handle to the captured frames, usable after the mock is boxed
        pub fn frames(&self) -> Arc<Mutex<Vec<RenderSnapshot>>> {
            Arc::clone(&self.frames)
        }
    }

    impl UIRenderer for MockUIRenderer {
        fn render(&mut self, view_state: &ViewState) -> Result<()> {
            let snapshot = RenderSnapshot {
                status: view_state.status_line.message.clone(),
                row_count: view_state.presenter.len(),
                selected: view_state.presenter.selected(),
                modal_title: view_state.modal.as_ref().map(|modal| modal.title()),
                alert: view_state.alert.clone(),
            };
            self.frames.lock().push(snapshot);
            Ok(())
        }

        fn next_event(&mut self, _timeout: Option<Duration>) -> Result<Option<Event>> {
            Ok(Some(self.events.pop_front().unwrap_or_else(|| {
                Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL))
            })))
        }

        fn initialize(&mut self) -> Result<()> {
            self.is_initialized = true;
            Ok(())
        }

        fn cleanup(&mut self) -> Result<()> {
            self.is_initialized = false;
            Ok(())
        }

        fn get_terminal_size(&self) -> Result<(u16, u16)> {
            Ok(self.terminal_size)
        }
    }

    #[test]
    fn test_mock_renderer_basic() {
        let mut renderer = MockUIRenderer::new();
        let view_state = ViewState::new("students.txt", 80, 24);

        assert!(!renderer.is_initialized);
        renderer.initialize().unwrap();
        assert!(renderer.is_initialized);

        renderer.render(&view_state).unwrap();
        let frames = renderer.frames();
        assert_eq!(frames.lock().len(), 1);
        assert_eq!(frames.lock()[0].status, "Ready");

        assert_eq!(renderer.get_terminal_size().unwrap(), (80, 24));
        renderer.cleanup().unwrap();
        assert!(!renderer.is_initialized);
    }

    #[test]
    fn test_mock_renderer_event_sequence() {
        let mut renderer = MockUIRenderer::new();
        renderer.type_text("ab");

        assert_eq!(
            renderer.next_event(None).unwrap(),
            Some(Event::Key(KeyEvent::new(
                KeyCode::Char('a'),
                KeyModifiers::NONE
            )))
        );
        renderer.next_event(None).unwrap();
        // drained script falls back to Ctrl+C
        assert_eq!(
            renderer.next_event(None).unwrap(),
            Some(Event::Key(KeyEvent::new(
                KeyCode::Char('c'),
                KeyModifiers::CONTROL
            )))
        );
    }
}
