//! Interactive terminal front end.
//!
//! # Responsibility
//! - Own the terminal (raw mode + alternate screen) for the session lifetime.
//! - Run the single-threaded event loop: read key, apply intent, redraw.
//!
//! # Invariants
//! - The terminal is restored on every exit path, including errors.
//! - Each key is handled to completion before the next one is read.

use std::io;

use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::info;
use ratatui::{backend::CrosstermBackend, Frame, Terminal};
use studynote_core::{KeyValueRepository, NotesUi, SubmitOutcome};

mod keymap;
mod render;

use keymap::{action_for_key, Action};

/// Screen-only state that the controller does not own.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    /// Selected list position.
    pub selected: usize,
    pub should_quit: bool,
}

impl ViewState {
    fn clamp_selection(&mut self, len: usize) {
        self.selected = self.selected.min(len.saturating_sub(1));
    }
}

/// Runs the note-taking screen until the user quits.
pub fn run<R: KeyValueRepository>(ui: &mut NotesUi<R>) -> io::Result<()> {
    let mut terminal = TerminalSession::new()?;
    let mut view = ViewState::default();
    info!("event=tui_start module=tui status=ok");

    while !view.should_quit {
        terminal.draw(|frame| render::draw(frame, ui, &view))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            let notification_visible = ui.notification().is_visible();
            if let Some(action) = action_for_key(key, ui.focus(), notification_visible) {
                apply(ui, &mut view, action);
            }
        }
    }

    info!("event=tui_exit module=tui status=ok");
    Ok(())
}

/// Applies one intent to the controller and the view.
fn apply<R: KeyValueRepository>(ui: &mut NotesUi<R>, view: &mut ViewState, action: Action) {
    match action {
        Action::Quit => view.should_quit = true,
        Action::Submit => {
            if ui.submit() == SubmitOutcome::Added {
                view.selected = 0;
            }
        }
        Action::ClearAll => {
            ui.clear_all();
            view.selected = 0;
        }
        Action::FocusNext => ui.set_focus(ui.focus().next()),
        Action::FocusPrevious => ui.set_focus(ui.focus().previous()),
        Action::Insert(ch) => ui.insert_char(ch),
        Action::Backspace => ui.backspace(),
        Action::SelectPrevious => view.selected = view.selected.saturating_sub(1),
        Action::SelectNext => {
            view.selected += 1;
            view.clamp_selection(ui.notes().len());
        }
        Action::EditSelected => {
            if !ui.notes().is_empty() {
                ui.edit(view.selected);
            }
        }
        Action::DeleteSelected => {
            if !ui.notes().is_empty() {
                ui.delete(view.selected);
                view.clamp_selection(ui.notes().len());
            }
        }
        Action::DismissNotification => ui.dismiss_notification(),
    }
}

struct TerminalSession {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalSession {
    fn new() -> io::Result<Self> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).map_err(|err| {
            teardown_terminal();
            err
        })?;

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).map_err(|err| {
            teardown_terminal();
            err
        })?;
        terminal.clear().map_err(|err| {
            teardown_terminal();
            err
        })?;

        Ok(Self { terminal })
    }

    fn draw(&mut self, draw_fn: impl FnOnce(&mut Frame<'_>)) -> io::Result<()> {
        self.terminal.draw(draw_fn)?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = self.terminal.show_cursor();
        teardown_terminal();
    }
}

fn teardown_terminal() {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    let _ = execute!(stdout, LeaveAlternateScreen);
}
