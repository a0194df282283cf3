//! Terminal UI implementation using ratatui
//!
//! This module provides the concrete implementation of UIRenderer using ratatui for a
//! cross-platform terminal interface. It only draws `ViewState` and reads events; record data
//! is managed by the Application through the presenter and the store.

use crate::dialog::Form;
use crate::error::{Result, RosterError};
use crate::presenter::COLUMNS;
use crate::ui::state::APP_TITLE;
use crate::ui::{ColorTheme, Modal, UIRenderer, ViewState};
use ratatui::crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, TableState, Wrap},
    Frame, Terminal,
};
use std::io::{self, Stdout};
use std::time::Duration;

type CrosstermTerminal = Terminal<CrosstermBackend<Stdout>>;

const TABLE_HINTS: &str = "a:add  s:search  u:update  d:delete  r:reload  j/k:move  q:quit";
const FORM_HINTS: &str = "Enter:submit  Tab:next field  Esc:cancel";
const SEARCH_HINTS: &str = "Enter:search  Esc:close";
const CONFIRM_HINTS: &str = "[y] Yes   [n] No";
const ALERT_HINTS: &str = "Press Enter to continue";

/// Width of the label column inside dialogs
const LABEL_WIDTH: u16 = 30;
/// Width of dialogs and popups, clamped to the terminal
const DIALOG_WIDTH: u16 = 64;

/// Terminal UI implementation with ratatui backend
pub struct TerminalUI {
    terminal: Option<CrosstermTerminal>,
    theme: ColorTheme,
}

impl TerminalUI {
    /// Create a new terminal UI instance with the default theme
    pub fn new() -> Result<Self> {
        Ok(Self {
            terminal: None,
            theme: ColorTheme::default(),
        })
    }

    /// Create terminal UI with custom theme
    pub fn with_theme(theme: ColorTheme) -> Result<Self> {
        Ok(Self {
            terminal: None,
            theme,
        })
    }
}

/// Draw one complete frame.
pub fn draw(frame: &mut Frame, view_state: &ViewState, theme: &ColorTheme) {
    let size = frame.size();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(size);

    render_table(frame, chunks[0], view_state, theme);
    frame.render_widget(Paragraph::new(TABLE_HINTS).style(theme.hints), chunks[1]);
    let status_style = Style::default().bg(theme.status_bg).fg(theme.status_fg);
    frame.render_widget(
        Paragraph::new(view_state.format_status_line()).style(status_style),
        chunks[2],
    );

    if let Some(modal) = &view_state.modal {
        render_modal(frame, size, modal, theme);
    }
    if let Some(message) = &view_state.alert {
        render_alert(frame, size, message, theme);
    }
}

fn render_table(frame: &mut Frame, area: Rect, view_state: &ViewState, theme: &ColorTheme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(APP_TITLE)
        .title_alignment(Alignment::Center);

    let presenter = &view_state.presenter;
    if presenter.is_empty() {
        let empty = Paragraph::new("No records. Press 'a' to add a student.")
            .style(theme.hints)
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let header = Row::new(COLUMNS.iter().map(|title| Cell::from(*title))).style(theme.header);
    let rows = presenter.rows().iter().map(|record| {
        Row::new(vec![
            Cell::from(record.roll_no.as_str()),
            Cell::from(record.name.as_str()),
            Cell::from(record.marks.as_str()),
        ])
    });
    let widths = [
        Constraint::Percentage(27),
        Constraint::Percentage(46),
        Constraint::Percentage(27),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .highlight_style(theme.selection)
        .highlight_symbol("> ");

    let mut state = TableState::default().with_selected(presenter.selected());
    frame.render_stateful_widget(table, area, &mut state);
}

fn render_modal(frame: &mut Frame, area: Rect, modal: &Modal, theme: &ColorTheme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(modal.title())
        .border_style(theme.dialog_border);

    let (lines, cursor) = match modal {
        Modal::Delete(dialog) => (
            vec![
                Line::from(""),
                Line::from(dialog.prompt()),
                Line::from(""),
                Line::from(Span::styled(CONFIRM_HINTS, theme.hints)),
            ],
            None,
        ),
        Modal::Search(dialog) => {
            let (mut lines, cursor) = form_lines(dialog.form(), theme);
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                dialog.result().unwrap_or("").to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(SEARCH_HINTS, theme.hints)));
            (lines, cursor)
        }
        Modal::Add(dialog) => with_hints(form_lines(dialog.form(), theme), theme),
        Modal::Update(dialog) => with_hints(form_lines(dialog.form(), theme), theme),
    };

    let height = u16::try_from(lines.len()).unwrap_or(u16::MAX).saturating_add(2);
    let popup = centered_rect(DIALOG_WIDTH, height, area);
    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        popup,
    );

    if let Some((column, row)) = cursor {
        // +1 for the border
        let x = popup
            .x
            .saturating_add(1)
            .saturating_add(column)
            .min(popup.right().saturating_sub(2));
        let y = popup.y.saturating_add(1).saturating_add(row);
        if y < popup.bottom().saturating_sub(1) {
            frame.set_cursor(x, y);
        }
    }
}

fn with_hints<'a>(
    (mut lines, cursor): (Vec<Line<'a>>, Option<(u16, u16)>),
    theme: &ColorTheme,
) -> (Vec<Line<'a>>, Option<(u16, u16)>) {
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(FORM_HINTS, theme.hints)));
    (lines, cursor)
}

/// One line per field, separated by blank lines. Also returns the cursor position of the
/// focused field relative to the dialog's inner area.
fn form_lines<'a>(form: &'a Form, theme: &ColorTheme) -> (Vec<Line<'a>>, Option<(u16, u16)>) {
    let mut lines = vec![Line::from("")];
    let mut cursor = None;

    for (idx, field) in form.fields().iter().enumerate() {
        let focused = idx == form.focus() && !field.read_only;
        let value_style = if field.read_only {
            theme.read_only_field
        } else if focused {
            theme.focused_field
        } else {
            Style::default().add_modifier(Modifier::UNDERLINED)
        };

        if focused {
            let typed = u16::try_from(field.value.chars().count()).unwrap_or(u16::MAX);
            let row = u16::try_from(lines.len()).unwrap_or(u16::MAX);
            cursor = Some((LABEL_WIDTH.saturating_add(1).saturating_add(typed), row));
        }

        lines.push(Line::from(vec![
            Span::raw(format!(
                "{:>width$} ",
                field.label,
                width = LABEL_WIDTH as usize
            )),
            Span::styled(field.value.as_str(), value_style),
        ]));
        lines.push(Line::from(""));
    }

    (lines, cursor)
}

fn render_alert(frame: &mut Frame, area: Rect, message: &str, theme: &ColorTheme) {
    let style = Style::default().fg(theme.error_text);
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Error")
        .border_style(style);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(message.to_string(), style)),
        Line::from(""),
        Line::from(Span::styled(ALERT_HINTS, theme.hints)),
    ];
    let popup = centered_rect(DIALOG_WIDTH - 8, lines.len() as u16 + 2, area);
    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        popup,
    );
}

/// Rectangle of the given size centered in `area`, shrunk to fit.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

impl UIRenderer for TerminalUI {
    fn render(&mut self, view_state: &ViewState) -> Result<()> {
        if let Some(ref mut terminal) = self.terminal {
            // Extract theme before closure to avoid borrowing issues
            let theme = &self.theme;
            terminal
                .draw(move |frame| draw(frame, view_state, theme))
                .map_err(terminal_error("draw frame"))?;
        }
        Ok(())
    }

    fn next_event(&mut self, timeout: Option<Duration>) -> Result<Option<Event>> {
        let timeout_duration = timeout.unwrap_or(Duration::from_millis(100));

        if event::poll(timeout_duration).map_err(terminal_error("poll events"))? {
            return Ok(Some(event::read().map_err(terminal_error("read event"))?));
        }
        Ok(None)
    }

    fn initialize(&mut self) -> Result<()> {
        enable_raw_mode().map_err(terminal_error("enable raw mode"))?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).map_err(terminal_error("enter alternate screen"))?;

        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend).map_err(terminal_error("create terminal"))?;
        self.terminal = Some(terminal);

        Ok(())
    }

    fn cleanup(&mut self) -> Result<()> {
        if let Some(mut terminal) = self.terminal.take() {
            disable_raw_mode().map_err(terminal_error("disable raw mode"))?;
            execute!(io::stdout(), LeaveAlternateScreen)
                .map_err(terminal_error("leave alternate screen"))?;
            terminal.show_cursor().map_err(terminal_error("show cursor"))?;
        }
        Ok(())
    }

    fn get_terminal_size(&self) -> Result<(u16, u16)> {
        let (cols, rows) =
            ratatui::crossterm::terminal::size().map_err(terminal_error("query terminal size"))?;
        Ok((cols, rows))
    }
}

/// Wrap a terminal I/O failure as a UI error naming the step that failed.
fn terminal_error(step: &'static str) -> impl FnOnce(io::Error) -> RosterError {
    move |err| RosterError::ui(format!("{step}: {err}"))
}

impl Drop for TerminalUI {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}
