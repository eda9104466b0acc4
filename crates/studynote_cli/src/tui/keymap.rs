//! Key event to intent mapping.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use studynote_core::Focus;

/// User intent produced by one key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    Submit,
    ClearAll,
    FocusNext,
    FocusPrevious,
    Insert(char),
    Backspace,
    SelectPrevious,
    SelectNext,
    EditSelected,
    DeleteSelected,
    DismissNotification,
}

/// Maps a key press to an action for the current focus.
///
/// While a notification is visible it captures everything except quit.
/// Control+Alt is AltGr on Windows and types characters, not shortcuts.
pub fn action_for_key(key: KeyEvent, focus: Focus, notification_visible: bool) -> Option<Action> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::ALT);

    match key.code {
        KeyCode::Char('c') | KeyCode::Char('q') if ctrl => return Some(Action::Quit),
        _ => {}
    }

    if notification_visible {
        return match key.code {
            KeyCode::Enter | KeyCode::Esc => Some(Action::DismissNotification),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char('s') if ctrl => return Some(Action::Submit),
        KeyCode::Char('x') if ctrl => return Some(Action::ClearAll),
        KeyCode::Tab => return Some(Action::FocusNext),
        KeyCode::BackTab => return Some(Action::FocusPrevious),
        _ if ctrl => return None,
        _ => {}
    }

    match focus {
        Focus::Title => match key.code {
            KeyCode::Enter => Some(Action::FocusNext),
            KeyCode::Char(ch) => Some(Action::Insert(ch)),
            KeyCode::Backspace => Some(Action::Backspace),
            _ => None,
        },
        Focus::Description => match key.code {
            KeyCode::Enter => Some(Action::Insert('\n')),
            KeyCode::Char(ch) => Some(Action::Insert(ch)),
            KeyCode::Backspace => Some(Action::Backspace),
            _ => None,
        },
        Focus::Notes => match key.code {
            KeyCode::Up | KeyCode::Char('k') => Some(Action::SelectPrevious),
            KeyCode::Down | KeyCode::Char('j') => Some(Action::SelectNext),
            KeyCode::Enter | KeyCode::Char('e') => Some(Action::EditSelected),
            KeyCode::Delete | KeyCode::Char('d') => Some(Action::DeleteSelected),
            _ => None,
        },
    }
}
