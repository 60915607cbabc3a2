// src/keymap.rs - Key bindings and the shortcut hints shown in the options bar

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::command::Command;
use crate::mode::Mode;

/// Ctrl+<key> bindings
pub const BACK_KEY: char = 'x';
pub const ADD_NOTE_KEY: char = 'n';
pub const RENAME_NOTE_KEY: char = 'r';

/// One entry of the options bar, e.g. `^X` `Exit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shortcut {
    pub keys: &'static str,
    pub description: &'static str,
}

const SIDEBAR_SHORTCUTS: &[Shortcut] = &[
    Shortcut { keys: "^X", description: "Exit" },
    Shortcut { keys: "Enter", description: "Edit" },
    Shortcut { keys: "^N", description: "New note" },
    Shortcut { keys: "^R", description: "Rename" },
];

const EDITOR_SHORTCUTS: &[Shortcut] = &[
    Shortcut { keys: "^X", description: "Save & back" },
    Shortcut { keys: "Tab", description: "Indent" },
];

const PROMPT_SHORTCUTS: &[Shortcut] = &[
    Shortcut { keys: "Enter", description: "Confirm" },
    Shortcut { keys: "^X", description: "Cancel" },
];

pub fn shortcuts(mode: Mode) -> &'static [Shortcut] {
    match mode {
        Mode::Sidebar => SIDEBAR_SHORTCUTS,
        Mode::Editor => EDITOR_SHORTCUTS,
        Mode::AddNote | Mode::RenameNote => PROMPT_SHORTCUTS,
    }
}

/// Every shortcut set that may be drawn; the options bar must fit all of them.
pub fn all_shortcut_sets() -> [&'static [Shortcut]; 3] {
    [SIDEBAR_SHORTCUTS, EDITOR_SHORTCUTS, PROMPT_SHORTCUTS]
}

/// Gap between evenly spaced shortcuts (nano style), or `None` when they do
/// not fit in `width` columns with at least one space around each.
pub fn shortcut_spacing(width: u16, shortcuts: &[Shortcut]) -> Option<u16> {
    let content: usize = shortcuts
        .iter()
        .map(|s| s.keys.len() + 1 + s.description.len())
        .sum();
    let free = (width as usize).checked_sub(content)?;
    let space = free / (shortcuts.len() + 1);
    if space < 1 {
        None
    } else {
        Some(space as u16)
    }
}

fn is_ctrl(key: &KeyEvent, ch: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char(ch)
}

fn printable(key: &KeyEvent) -> Option<char> {
    match key.code {
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
                && !c.is_control() =>
        {
            Some(c)
        }
        _ => None,
    }
}

pub fn key_to_command(key: KeyEvent, mode: Mode) -> Option<Command> {
    if is_ctrl(&key, BACK_KEY) {
        return Some(Command::Back);
    }
    match mode {
        Mode::Sidebar => match key.code {
            KeyCode::Up => Some(Command::MoveUp),
            KeyCode::Down => Some(Command::MoveDown),
            KeyCode::Left => Some(Command::MoveLeft),
            KeyCode::Right => Some(Command::MoveRight),
            KeyCode::Enter => Some(Command::Enter),
            _ if is_ctrl(&key, ADD_NOTE_KEY) => Some(Command::AddNote),
            _ if is_ctrl(&key, RENAME_NOTE_KEY) => Some(Command::RenameNote),
            _ => None,
        },
        Mode::Editor => match key.code {
            KeyCode::Up => Some(Command::MoveUp),
            KeyCode::Down => Some(Command::MoveDown),
            KeyCode::Left => Some(Command::MoveLeft),
            KeyCode::Right => Some(Command::MoveRight),
            KeyCode::Enter => Some(Command::Enter),
            KeyCode::Backspace | KeyCode::Delete => Some(Command::DeleteChar),
            KeyCode::Tab => Some(Command::Tab),
            _ => printable(&key).map(Command::InsertChar),
        },
        Mode::AddNote | Mode::RenameNote => match key.code {
            KeyCode::Left => Some(Command::MoveLeft),
            KeyCode::Right => Some(Command::MoveRight),
            KeyCode::Enter => Some(Command::Enter),
            KeyCode::Backspace | KeyCode::Delete => Some(Command::DeleteChar),
            _ => printable(&key).map(Command::InsertChar),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn test_back_key_in_every_mode() {
        for mode in [Mode::Sidebar, Mode::Editor, Mode::AddNote, Mode::RenameNote] {
            assert_eq!(key_to_command(ctrl('x'), mode), Some(Command::Back));
        }
    }

    #[test]
    fn test_sidebar_bindings() {
        assert_eq!(
            key_to_command(ctrl('n'), Mode::Sidebar),
            Some(Command::AddNote)
        );
        assert_eq!(
            key_to_command(ctrl('r'), Mode::Sidebar),
            Some(Command::RenameNote)
        );
        assert_eq!(
            key_to_command(key(KeyCode::Enter), Mode::Sidebar),
            Some(Command::Enter)
        );
        assert_eq!(key_to_command(key(KeyCode::Char('a')), Mode::Sidebar), None);
    }

    #[test]
    fn test_editor_bindings() {
        assert_eq!(
            key_to_command(key(KeyCode::Char('a')), Mode::Editor),
            Some(Command::InsertChar('a'))
        );
        assert_eq!(
            key_to_command(
                KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT),
                Mode::Editor
            ),
            Some(Command::InsertChar('A'))
        );
        assert_eq!(
            key_to_command(key(KeyCode::Delete), Mode::Editor),
            Some(Command::DeleteChar)
        );
        assert_eq!(
            key_to_command(key(KeyCode::Tab), Mode::Editor),
            Some(Command::Tab)
        );
        // Add/rename are sidebar only
        assert_eq!(key_to_command(ctrl('n'), Mode::Editor), None);
    }

    #[test]
    fn test_prompt_ignores_vertical_moves() {
        assert_eq!(key_to_command(key(KeyCode::Up), Mode::AddNote), None);
        assert_eq!(
            key_to_command(key(KeyCode::Char('q')), Mode::RenameNote),
            Some(Command::InsertChar('q'))
        );
    }

    #[test]
    fn test_shortcut_spacing() {
        let set = [Shortcut { keys: "^X", description: "Exit" }];
        // "^X Exit" is 7 wide
        assert_eq!(shortcut_spacing(9, &set), Some(1));
        assert_eq!(shortcut_spacing(27, &set), Some(10));
        assert_eq!(shortcut_spacing(8, &set), None);
        assert_eq!(shortcut_spacing(3, &set), None);
    }

    #[test]
    fn test_every_mode_has_shortcuts() {
        for mode in [Mode::Sidebar, Mode::Editor, Mode::AddNote, Mode::RenameNote] {
            assert!(!shortcuts(mode).is_empty());
        }
    }
}
